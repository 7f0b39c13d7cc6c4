use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::animation::{Frame, Ticker};
use super::config::RadialGraphConfig;
use super::error::GraphError;
use super::interaction::{InteractionState, VisualOverrides};
use super::layout::{JitterSource, Layout};
use super::scene::Scene;
use super::types::{NodeIndex, Point, RadialData};

/// Everything one mounted radial graph owns.
pub struct RadialGraphState {
	pub config: RadialGraphConfig,
	pub layout: Layout,
	pub scene: Scene,
	pub interaction: InteractionState,
	pub frame: Frame,
	pub ticker: Ticker,
	pointer: Option<Point>,
}

impl RadialGraphState {
	/// Build for a viewport, drawing jitter from `config.seed` or entropy.
	pub fn new(
		data: &RadialData,
		viewport_width: f64,
		config: RadialGraphConfig,
	) -> Result<Self, GraphError> {
		let size = config.canvas_size(viewport_width)?;
		let mut rng = match config.seed {
			Some(seed) => ChaCha8Rng::seed_from_u64(seed),
			None => ChaCha8Rng::from_entropy(),
		};
		Self::with_jitter(data, size, config, &mut rng)
	}

	pub fn with_jitter(
		data: &RadialData,
		size: (f64, f64),
		config: RadialGraphConfig,
		jitter: &mut impl JitterSource,
	) -> Result<Self, GraphError> {
		let layout = Layout::compute(data, size, &config, jitter)?;
		let scene = Scene::build(&layout);
		Ok(Self {
			interaction: InteractionState::new(&scene),
			frame: Frame::at_rest(&layout, &scene),
			ticker: Ticker::new(),
			pointer: None,
			config,
			layout,
			scene,
		})
	}

	pub fn width(&self) -> f64 {
		self.layout.width
	}

	pub fn height(&self) -> f64 {
		self.layout.height
	}

	pub fn overrides(&self) -> &VisualOverrides {
		self.interaction.overrides()
	}

	/// Advance to `now_ms`. Returns false once the ticker is stopped.
	pub fn tick(&mut self, now_ms: f64) -> bool {
		let Some(elapsed) = self.ticker.tick(now_ms) else {
			return false;
		};
		self.frame = Frame::at(&self.layout, &self.scene, elapsed, &self.config);
		// Nodes drift under a resting pointer.
		self.refresh_hover();
		true
	}

	pub fn stop(&mut self) {
		self.ticker.stop();
	}

	/// Topmost node whose drawn circle contains `p`. Later nodes draw on top.
	pub fn node_at_position(&self, p: Point) -> Option<NodeIndex> {
		let styles = &self.overrides().nodes;
		(0..self.frame.positions.len())
			.rev()
			.find(|&i| self.frame.position(i).distance(p) <= styles[i].radius)
	}

	pub fn pointer_moved(&mut self, p: Point) {
		self.pointer = Some(p);
		self.refresh_hover();
	}

	pub fn pointer_left(&mut self) {
		self.pointer = None;
		self.refresh_hover();
	}

	pub fn is_over_node(&self) -> bool {
		self.interaction.active().is_some()
	}

	/// CSS cursor for the canvas under the current hover state.
	pub fn cursor(&self) -> &'static str {
		if self.is_over_node() {
			"pointer"
		} else {
			"default"
		}
	}

	fn refresh_hover(&mut self) {
		let hit = self.pointer.and_then(|p| self.node_at_position(p));
		let active = self.interaction.active();
		if hit == active {
			return;
		}
		if let Some(prev) = active {
			self.interaction.leave(&self.scene, prev);
		}
		if let Some(node) = hit {
			self.interaction.enter(&self.scene, node);
		}
	}
}
