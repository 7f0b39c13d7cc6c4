use super::curve::{CENTRIPETAL, ClosedCurve, catmull_rom_closed};
use super::layout::Layout;
use super::types::{NodeIndex, Point};

/// Default and emphasis values for every styled attribute.
pub mod style {
	pub const CENTER_RADIUS: f64 = 15.0;
	pub const NODE_RADIUS: f64 = 6.0;
	pub const NODE_RADIUS_ACTIVE: f64 = 9.0;
	pub const GLOW: f64 = 8.0;
	pub const GLOW_ACTIVE: f64 = 15.0;

	pub const LINK_OPACITY: f64 = 0.3;
	pub const LINK_WIDTH: f64 = 1.5;
	pub const LINK_OPACITY_CENTER: f64 = 0.8;
	pub const LINK_WIDTH_CENTER: f64 = 2.0;
	pub const LINK_OPACITY_ACTIVE: f64 = 1.0;
	pub const LINK_WIDTH_ACTIVE: f64 = 3.0;
	pub const LINK_OPACITY_DIM: f64 = 0.1;
	pub const LINK_WIDTH_DIM: f64 = 1.0;

	pub const CURVE_OPACITY: f64 = 0.6;
	pub const CURVE_WIDTH: f64 = 2.0;
	pub const CURVE_OPACITY_CENTER: f64 = 1.0;
	pub const CURVE_WIDTH_CENTER: f64 = 3.0;
	pub const CURVE_OPACITY_DIM: f64 = 0.2;
	pub const CURVE_GLOW: f64 = 5.0;
	pub const CURVE_GLOW_COLOR: &str = "rgba(168, 127, 251, 0.5)";
	/// Diagonal gradient stops, top-left to bottom-right.
	pub const CURVE_GRADIENT: [(f64, &str); 3] =
		[(0.0, "#a87ffb"), (0.5, "#4facfe"), (1.0, "#ff4b4b")];

	pub const LABEL_COLOR: &str = "#a8b2d1";
	pub const LABEL_COLOR_ACTIVE: &str = "#ffffff";
	pub const LABEL_COLOR_DIM: &str = "#495670";
	pub const LABEL_FONT: &str = "11px \"Courier New\", monospace";
	pub const LABEL_FONT_BOLD: &str = "bold 11px \"Courier New\", monospace";
	pub const LABEL_GAP: f64 = 15.0;
	pub const LABEL_BASELINE: f64 = 4.0;
}

/// Which side of its node a label grows from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
	/// Right of the node, text grows rightward.
	Start,
	/// Left of the node, text grows leftward.
	End,
}

impl Anchor {
	pub fn for_angle(angle: f64) -> Self {
		if angle.cos() > 0.0 {
			Anchor::Start
		} else {
			Anchor::End
		}
	}

	pub fn text_align(self) -> &'static str {
		match self {
			Anchor::Start => "start",
			Anchor::End => "end",
		}
	}

	/// Label position for a node drawn at `at`.
	pub fn place(self, at: Point) -> Point {
		let dx = match self {
			Anchor::Start => style::LABEL_GAP,
			Anchor::End => -style::LABEL_GAP,
		};
		Point::new(at.x + dx, at.y + style::LABEL_BASELINE)
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeStyle {
	pub radius: f64,
	pub glow: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
	pub opacity: f64,
	pub width: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabelStyle {
	pub color: &'static str,
	pub bold: bool,
}

impl LabelStyle {
	pub const DEFAULT: Self = Self {
		color: style::LABEL_COLOR,
		bold: false,
	};

	pub fn font(self) -> &'static str {
		if self.bold {
			style::LABEL_FONT_BOLD
		} else {
			style::LABEL_FONT
		}
	}
}

impl StrokeStyle {
	pub const LINK: Self = Self {
		opacity: style::LINK_OPACITY,
		width: style::LINK_WIDTH,
	};
	pub const CURVE: Self = Self {
		opacity: style::CURVE_OPACITY,
		width: style::CURVE_WIDTH,
	};
}

#[derive(Clone, Debug, PartialEq)]
pub struct NodeShape {
	pub color: String,
	pub is_center: bool,
	pub style: NodeStyle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LinkShape {
	pub source: NodeIndex,
	pub target: NodeIndex,
	pub color: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LabelShape {
	pub node: NodeIndex,
	pub text: String,
	/// Fixed once from the rest angle; animation never flips it.
	pub anchor: Anchor,
}

/// Drawable primitives derived from a layout, in their default style.
#[derive(Clone, Debug)]
pub struct Scene {
	pub nodes: Vec<NodeShape>,
	pub links: Vec<LinkShape>,
	pub labels: Vec<LabelShape>,
	/// Outer nodes in layout order; the perimeter runs through them.
	pub ring: Vec<NodeIndex>,
	/// Perimeter through the rest positions.
	pub curve: ClosedCurve,
}

impl Scene {
	pub fn build(layout: &Layout) -> Self {
		let nodes = layout
			.nodes
			.iter()
			.map(|node| NodeShape {
				color: node.color.clone(),
				is_center: node.is_center,
				style: NodeStyle {
					radius: if node.is_center {
						style::CENTER_RADIUS
					} else {
						style::NODE_RADIUS
					},
					glow: style::GLOW,
				},
			})
			.collect();

		let links = layout
			.links
			.iter()
			.map(|link| LinkShape {
				source: link.source,
				target: link.target,
				color: link.color.clone(),
			})
			.collect();

		let labels = layout
			.nodes
			.iter()
			.enumerate()
			.filter_map(|(index, node)| {
				node.angle.map(|angle| LabelShape {
					node: index,
					text: node.id.clone(),
					anchor: Anchor::for_angle(angle),
				})
			})
			.collect();

		let ring: Vec<NodeIndex> = (0..layout.nodes.len())
			.filter(|&i| !layout.nodes[i].is_center)
			.collect();
		let rest: Vec<Point> = ring.iter().map(|&i| layout.nodes[i].rest()).collect();

		Self {
			nodes,
			links,
			labels,
			curve: perimeter(&rest),
			ring,
		}
	}
}

/// Closed halo through the outer node positions, in ring order.
pub fn perimeter(points: &[Point]) -> ClosedCurve {
	catmull_rom_closed(points, CENTRIPETAL)
}
