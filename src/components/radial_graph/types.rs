/// Color bucket of an outer item. Declaration order is the bucket order
/// used by the layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Group {
	Red,
	Blue,
	Purple,
}

impl Group {
	pub const ORDER: [Group; 3] = [Group::Red, Group::Blue, Group::Purple];
}

#[derive(Clone, Debug, PartialEq)]
pub struct Item {
	pub id: String,
	pub group: Group,
	pub color: String,
}

impl Item {
	pub fn new(id: impl Into<String>, group: Group, color: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			group,
			color: color.into(),
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct CenterItem {
	pub id: String,
	pub color: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RadialData {
	pub center: CenterItem,
	pub items: Vec<Item>,
}

/// Position of a node in the layout's node list. The center is always 0.
pub type NodeIndex = usize;

pub const CENTER: NodeIndex = 0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn distance(self, other: Point) -> f64 {
		(self.x - other.x).hypot(self.y - other.y)
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	pub id: String,
	pub color: String,
	/// Rest position. Animation offsets from it and never writes it.
	pub x: f64,
	pub y: f64,
	pub is_center: bool,
	pub angle: Option<f64>,
}

impl Node {
	pub fn rest(&self) -> Point {
		Point::new(self.x, self.y)
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Link {
	pub source: NodeIndex,
	pub target: NodeIndex,
	pub color: String,
}
