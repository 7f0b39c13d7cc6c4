use log::debug;

use super::scene::{LabelStyle, NodeStyle, Scene, StrokeStyle, style};
use super::types::NodeIndex;

/// Hover layer. Holds only color, opacity and size; positions come from
/// the animation frame.
#[derive(Clone, Debug, PartialEq)]
pub struct VisualOverrides {
	pub nodes: Vec<NodeStyle>,
	pub links: Vec<StrokeStyle>,
	pub labels: Vec<LabelStyle>,
	pub curve: StrokeStyle,
}

impl VisualOverrides {
	/// Styles for the scene with `active` hovered. Always built from the
	/// scene defaults, never patched from a previous state.
	pub fn resolve(scene: &Scene, active: Option<NodeIndex>) -> Self {
		let mut overrides = Self {
			nodes: scene.nodes.iter().map(|n| n.style).collect(),
			links: vec![StrokeStyle::LINK; scene.links.len()],
			labels: vec![LabelStyle::DEFAULT; scene.labels.len()],
			curve: StrokeStyle::CURVE,
		};

		let Some(active) = active else {
			return overrides;
		};

		if scene.nodes[active].is_center {
			overrides.links.fill(StrokeStyle {
				opacity: style::LINK_OPACITY_CENTER,
				width: style::LINK_WIDTH_CENTER,
			});
			overrides.curve = StrokeStyle {
				opacity: style::CURVE_OPACITY_CENTER,
				width: style::CURVE_WIDTH_CENTER,
			};
			return overrides;
		}

		overrides.nodes[active] = NodeStyle {
			radius: style::NODE_RADIUS_ACTIVE,
			glow: style::GLOW_ACTIVE,
		};
		for (link, shape) in overrides.links.iter_mut().zip(&scene.links) {
			*link = if shape.target == active {
				StrokeStyle {
					opacity: style::LINK_OPACITY_ACTIVE,
					width: style::LINK_WIDTH_ACTIVE,
				}
			} else {
				StrokeStyle {
					opacity: style::LINK_OPACITY_DIM,
					width: style::LINK_WIDTH_DIM,
				}
			};
		}
		overrides.curve.opacity = style::CURVE_OPACITY_DIM;
		for (label, shape) in overrides.labels.iter_mut().zip(&scene.labels) {
			*label = if shape.node == active {
				LabelStyle {
					color: style::LABEL_COLOR_ACTIVE,
					bold: true,
				}
			} else {
				LabelStyle {
					color: style::LABEL_COLOR_DIM,
					bold: false,
				}
			};
		}
		overrides
	}
}

/// Enter/leave state machine. At most one node is active.
#[derive(Clone, Debug)]
pub struct InteractionState {
	active: Option<NodeIndex>,
	overrides: VisualOverrides,
}

impl InteractionState {
	pub fn new(scene: &Scene) -> Self {
		Self {
			active: None,
			overrides: VisualOverrides::resolve(scene, None),
		}
	}

	pub fn active(&self) -> Option<NodeIndex> {
		self.active
	}

	pub fn overrides(&self) -> &VisualOverrides {
		&self.overrides
	}

	/// Pointer entered `node`. Replaces any other active node.
	pub fn enter(&mut self, scene: &Scene, node: NodeIndex) {
		if node >= scene.nodes.len() {
			return;
		}
		debug!("hover enter: node {node}");
		self.active = Some(node);
		self.overrides = VisualOverrides::resolve(scene, self.active);
	}

	/// Pointer left `node`. A leave for a node that is no longer active is
	/// stale and ignored.
	pub fn leave(&mut self, scene: &Scene, node: NodeIndex) {
		if self.active != Some(node) {
			return;
		}
		debug!("hover leave: node {node}");
		self.active = None;
		self.overrides = VisualOverrides::resolve(scene, None);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::radial_graph::layout::tests::{seeded, three_groups};
	use crate::components::radial_graph::types::CENTER;

	fn scene() -> Scene {
		Scene::build(&seeded(&three_groups(), 11))
	}

	fn assert_defaults(scene: &Scene, state: &InteractionState) {
		let o = state.overrides();
		assert!(o.links.iter().all(|l| *l == StrokeStyle { opacity: 0.3, width: 1.5 }));
		assert_eq!(o.curve, StrokeStyle { opacity: 0.6, width: 2.0 });
		assert!(o.labels.iter().all(|l| l.color == "#a8b2d1" && !l.bold));
		for (style, shape) in o.nodes.iter().zip(&scene.nodes) {
			assert_eq!(*style, shape.style);
		}
	}

	#[test]
	fn starts_at_defaults() {
		let scene = scene();
		assert_defaults(&scene, &InteractionState::new(&scene));
	}

	#[test]
	fn hovering_outer_node_two() {
		let scene = scene();
		let mut state = InteractionState::new(&scene);
		let node = scene.links[2].target;
		state.enter(&scene, node);

		let o = state.overrides();
		assert_eq!(o.links[2], StrokeStyle { opacity: 1.0, width: 3.0 });
		assert_eq!(o.links[0], StrokeStyle { opacity: 0.1, width: 1.0 });
		assert_eq!(o.links[1], StrokeStyle { opacity: 0.1, width: 1.0 });
		assert_eq!(o.curve.opacity, 0.2);
		assert_eq!(o.curve.width, 2.0);
		assert_eq!(o.nodes[node], NodeStyle { radius: 9.0, glow: 15.0 });
		assert_eq!(o.nodes[CENTER].radius, 15.0);
		for (label, shape) in o.labels.iter().zip(&scene.labels) {
			if shape.node == node {
				assert_eq!(*label, LabelStyle { color: "#ffffff", bold: true });
			} else {
				assert_eq!(*label, LabelStyle { color: "#495670", bold: false });
			}
		}
	}

	#[test]
	fn hovering_center_emphasizes_links_and_curve() {
		let scene = scene();
		let mut state = InteractionState::new(&scene);
		state.enter(&scene, CENTER);
		let o = state.overrides();
		assert!(o.links.iter().all(|l| *l == StrokeStyle { opacity: 0.8, width: 2.0 }));
		assert_eq!(o.curve, StrokeStyle { opacity: 1.0, width: 3.0 });
		assert!(o.labels.iter().all(|l| *l == LabelStyle::DEFAULT));
		assert_eq!(o.nodes[CENTER].radius, 15.0);

		state.leave(&scene, CENTER);
		assert_defaults(&scene, &state);
	}

	#[test]
	fn leave_restores_defaults_after_any_history() {
		let scene = scene();
		let mut state = InteractionState::new(&scene);
		for history in [vec![], vec![1], vec![CENTER, 3], vec![2, 1, CENTER, 3, 2]] {
			for &node in &history {
				state.enter(&scene, node);
			}
			for target in 1..scene.nodes.len() {
				state.enter(&scene, target);
				state.leave(&scene, target);
				assert_defaults(&scene, &state);
				assert_eq!(state.active(), None);
			}
		}
	}

	#[test]
	fn second_enter_replaces_first() {
		let scene = scene();
		let mut a_then_b = InteractionState::new(&scene);
		a_then_b.enter(&scene, 1);
		a_then_b.enter(&scene, 3);

		let mut only_b = InteractionState::new(&scene);
		only_b.enter(&scene, 3);

		assert_eq!(a_then_b.active(), Some(3));
		assert_eq!(a_then_b.overrides(), only_b.overrides());
	}

	#[test]
	fn stale_leave_is_ignored() {
		let scene = scene();
		let mut state = InteractionState::new(&scene);
		state.enter(&scene, 1);
		state.enter(&scene, 2);
		state.leave(&scene, 1);
		assert_eq!(state.active(), Some(2));
		assert_eq!(state.overrides(), &VisualOverrides::resolve(&scene, Some(2)));
	}

	#[test]
	fn duplicate_labels_highlight_one_node() {
		let mut data = three_groups();
		for item in &mut data.items {
			item.id = "Same".into();
		}
		let scene = Scene::build(&seeded(&data, 0));
		let mut state = InteractionState::new(&scene);
		state.enter(&scene, 2);
		let bold = state.overrides().labels.iter().filter(|l| l.bold).count();
		assert_eq!(bold, 1);
		let enlarged = state
			.overrides()
			.nodes
			.iter()
			.filter(|n| n.radius == style::NODE_RADIUS_ACTIVE)
			.count();
		assert_eq!(enlarged, 1);
	}
}
