use super::config::RadialGraphConfig;
use super::curve::ClosedCurve;
use super::layout::Layout;
use super::scene::{LabelShape, Scene, perimeter};
use super::types::{NodeIndex, Point};

/// Idle float of a node resting at `rest`, `elapsed_ms` into the animation.
/// Each node's phase comes from its own rest coordinates, so nodes drift
/// out of step with one another.
pub fn float_offset(rest: Point, elapsed_ms: f64, config: &RadialGraphConfig) -> Point {
	let phase = elapsed_ms / config.period_ms;
	Point::new(
		(phase + rest.y).cos() * config.amplitude,
		(phase + rest.x).sin() * config.amplitude,
	)
}

/// Displayed positions for one tick. Rest positions are left untouched.
#[derive(Clone, Debug)]
pub struct Frame {
	/// Indexed like the layout's nodes. The center never moves.
	pub positions: Vec<Point>,
	pub curve: ClosedCurve,
}

impl Frame {
	/// Frame before the first tick: everything at rest.
	pub fn at_rest(layout: &Layout, scene: &Scene) -> Self {
		Self {
			positions: layout.nodes.iter().map(|n| n.rest()).collect(),
			curve: scene.curve.clone(),
		}
	}

	pub fn at(layout: &Layout, scene: &Scene, elapsed_ms: f64, config: &RadialGraphConfig) -> Self {
		let positions: Vec<Point> = layout
			.nodes
			.iter()
			.map(|node| {
				let rest = node.rest();
				if node.is_center {
					return rest;
				}
				let offset = float_offset(rest, elapsed_ms, config);
				Point::new(rest.x + offset.x, rest.y + offset.y)
			})
			.collect();
		let ring: Vec<Point> = scene.ring.iter().map(|&i| positions[i]).collect();

		Self {
			curve: perimeter(&ring),
			positions,
		}
	}

	pub fn position(&self, node: NodeIndex) -> Point {
		self.positions[node]
	}

	/// Labels ride along with their node but keep the side chosen at layout.
	pub fn label_position(&self, label: &LabelShape) -> Point {
		label.anchor.place(self.position(label.node))
	}
}

/// Monotonic millisecond time source.
pub trait Clock {
	fn now_ms(&self) -> f64;
}

/// `performance.now()` in the browser.
pub struct PerformanceClock {
	performance: web_sys::Performance,
}

impl PerformanceClock {
	pub fn new(window: &web_sys::Window) -> Option<Self> {
		window.performance().map(|performance| Self { performance })
	}
}

impl Clock for PerformanceClock {
	fn now_ms(&self) -> f64 {
		self.performance.now()
	}
}

/// Hand-advanced clock for driving ticks without a display.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct ManualClock {
	now: std::rc::Rc<std::cell::Cell<f64>>,
}

#[cfg(test)]
impl ManualClock {
	pub fn advance(&self, ms: f64) {
		self.now.set(self.now.get() + ms);
	}
}

#[cfg(test)]
impl Clock for ManualClock {
	fn now_ms(&self) -> f64 {
		self.now.get()
	}
}

/// Periodic task state. Elapsed time counts from the first tick; once
/// stopped, ticks yield nothing.
#[derive(Clone, Debug, Default)]
pub struct Ticker {
	origin: Option<f64>,
	stopped: bool,
	ticks: u64,
}

impl Ticker {
	pub fn new() -> Self {
		Self::default()
	}

	/// Elapsed milliseconds for a tick at `now_ms`, or `None` once stopped.
	pub fn tick(&mut self, now_ms: f64) -> Option<f64> {
		if self.stopped {
			return None;
		}
		let origin = *self.origin.get_or_insert(now_ms);
		self.ticks += 1;
		Some((now_ms - origin).max(0.0))
	}

	pub fn stop(&mut self) {
		self.stopped = true;
	}

	pub fn ticks(&self) -> u64 {
		self.ticks
	}
}
