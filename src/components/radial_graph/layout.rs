use std::f64::consts::PI;

use log::debug;
use rand::Rng;

use super::config::RadialGraphConfig;
use super::error::GraphError;
use super::types::{CENTER, Group, Item, Link, Node, Point, RadialData};

/// Source of the per-node radius jitter.
pub trait JitterSource {
	/// Uniform sample in `[-bound, bound]`.
	fn jitter(&mut self, bound: f64) -> f64;
}

impl<R: Rng> JitterSource for R {
	fn jitter(&mut self, bound: f64) -> f64 {
		if bound <= 0.0 {
			return 0.0;
		}
		self.gen_range(-bound..=bound)
	}
}

#[derive(Clone, Debug)]
pub struct Layout {
	/// Center first, then outer nodes in angle order.
	pub nodes: Vec<Node>,
	pub links: Vec<Link>,
	pub center: Point,
	pub radius: f64,
	pub angle_step: f64,
	pub width: f64,
	pub height: f64,
}

impl Layout {
	pub fn compute(
		data: &RadialData,
		(width, height): (f64, f64),
		config: &RadialGraphConfig,
		jitter: &mut impl JitterSource,
	) -> Result<Self, GraphError> {
		config.validate()?;
		if data.items.is_empty() {
			return Err(GraphError::EmptyItems);
		}

		let center = Point::new(width / 2.0, height / 2.0);
		let radius = width.min(height) / config.shrink;
		let ordered = order_items(&data.items);
		let angle_step = 2.0 * PI / ordered.len() as f64;

		let mut nodes = Vec::with_capacity(ordered.len() + 1);
		let mut links = Vec::with_capacity(ordered.len());
		nodes.push(Node {
			id: data.center.id.clone(),
			color: data.center.color.clone(),
			x: center.x,
			y: center.y,
			is_center: true,
			angle: None,
		});

		for (i, item) in ordered.into_iter().enumerate() {
			let angle = config.start_angle + i as f64 * angle_step;
			let r = radius + jitter.jitter(config.jitter);
			nodes.push(Node {
				id: item.id.clone(),
				color: item.color.clone(),
				x: center.x + r * angle.cos(),
				y: center.y + r * angle.sin(),
				is_center: false,
				angle: Some(angle),
			});
			links.push(Link {
				source: CENTER,
				target: nodes.len() - 1,
				color: item.color.clone(),
			});
		}

		let layout = Self {
			nodes,
			links,
			center,
			radius,
			angle_step,
			width,
			height,
		};
		debug!(
			"radial layout: {} outer nodes every {:.3} rad, radius {:.1} around ({}, {})",
			layout.links.len(),
			layout.angle_step,
			layout.radius,
			layout.center.x,
			layout.center.y
		);
		Ok(layout)
	}

	#[cfg(test)]
	pub fn outer_nodes(&self) -> &[Node] {
		&self.nodes[CENTER + 1..]
	}
}

/// Bucket by group in [`Group::ORDER`], each bucket reversed, so the last
/// declared item of a group comes first going clockwise.
fn order_items(items: &[Item]) -> Vec<&Item> {
	Group::ORDER
		.iter()
		.flat_map(|&group| items.iter().rev().filter(move |item| item.group == group))
		.collect()
}
