//! Closed Catmull–Rom spline through a ring of points, emitted as cubic
//! Bézier segments so the canvas can stroke it with `bezier_curve_to`.
//!
//! Knot spacing uses `|p_{i+1} - p_i|^alpha`. With `alpha = 0.5`
//! (centripetal) segments never form cusps or self-intersecting loops,
//! even when neighbouring points are unevenly spaced.

use super::types::Point;

pub const CENTRIPETAL: f64 = 0.5;

const EPSILON: f64 = 1e-12;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicSegment {
	pub c1: Point,
	pub c2: Point,
	pub to: Point,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClosedCurve {
	pub start: Point,
	/// Last segment ends back at `start`. Empty for fewer than two points.
	pub segments: Vec<CubicSegment>,
}

impl ClosedCurve {
	pub fn is_empty(&self) -> bool {
		self.segments.is_empty()
	}

	/// Point at parameter `t` in `[0, 1]` along segment `index`.
	#[cfg(test)]
	pub fn sample(&self, index: usize, t: f64) -> Point {
		let seg = &self.segments[index];
		let from = self.segment_start(index);
		Point::new(
			cubic(from.x, seg.c1.x, seg.c2.x, seg.to.x, t),
			cubic(from.y, seg.c1.y, seg.c2.y, seg.to.y, t),
		)
	}

	/// Tight axis-aligned box `(min, max)` around the stroked curve,
	/// including any bulge between knots.
	pub fn bounds(&self) -> (Point, Point) {
		let (mut min, mut max) = (self.start, self.start);
		for (index, seg) in self.segments.iter().enumerate() {
			let from = self.segment_start(index);
			let (lo_x, hi_x) = axis_extent(from.x, seg.c1.x, seg.c2.x, seg.to.x);
			let (lo_y, hi_y) = axis_extent(from.y, seg.c1.y, seg.c2.y, seg.to.y);
			min = Point::new(min.x.min(lo_x), min.y.min(lo_y));
			max = Point::new(max.x.max(hi_x), max.y.max(hi_y));
		}
		(min, max)
	}

	fn segment_start(&self, index: usize) -> Point {
		if index == 0 {
			self.start
		} else {
			self.segments[index - 1].to
		}
	}
}

fn cubic(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
	let u = 1.0 - t;
	u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// Range of one coordinate of a cubic Bézier over `t` in `[0, 1]`: the
/// endpoints plus wherever the derivative vanishes inside the segment.
fn axis_extent(p0: f64, p1: f64, p2: f64, p3: f64) -> (f64, f64) {
	let (mut lo, mut hi) = (p0.min(p3), p0.max(p3));
	let (a, b, c) = (p1 - p0, p2 - p1, p3 - p2);
	// B'(t) / 3 = qa t² + qb t + qc
	let (qa, qb, qc) = (a - 2.0 * b + c, 2.0 * (b - a), a);
	let mut roots = [f64::NAN; 2];
	if qa.abs() < EPSILON {
		if qb.abs() >= EPSILON {
			roots[0] = -qc / qb;
		}
	} else {
		let disc = qb * qb - 4.0 * qa * qc;
		if disc >= 0.0 {
			let sq = disc.sqrt();
			roots = [(-qb + sq) / (2.0 * qa), (-qb - sq) / (2.0 * qa)];
		}
	}
	for t in roots.into_iter().filter(|t| *t > 0.0 && *t < 1.0) {
		let v = cubic(p0, p1, p2, p3, t);
		lo = lo.min(v);
		hi = hi.max(v);
	}
	(lo, hi)
}

/// Fit a closed curve through `points` in order.
pub fn catmull_rom_closed(points: &[Point], alpha: f64) -> ClosedCurve {
	let n = points.len();
	match n {
		0 => ClosedCurve::default(),
		1 => ClosedCurve {
			start: points[0],
			segments: Vec::new(),
		},
		2 => ClosedCurve {
			start: points[0],
			segments: vec![line(points[0], points[1]), line(points[1], points[0])],
		},
		_ => ClosedCurve {
			start: points[0],
			segments: (0..n)
				.map(|i| {
					segment(
						points[(i + n - 1) % n],
						points[i],
						points[(i + 1) % n],
						points[(i + 2) % n],
						alpha,
					)
				})
				.collect(),
		},
	}
}

fn line(from: Point, to: Point) -> CubicSegment {
	CubicSegment {
		c1: from,
		c2: to,
		to,
	}
}

/// Bézier form of the Catmull–Rom span from `p1` to `p2`.
fn segment(p0: Point, p1: Point, p2: Point, p3: Point, alpha: f64) -> CubicSegment {
	let l01_2a = (p1.distance(p0)).powf(2.0 * alpha);
	let l12_2a = (p2.distance(p1)).powf(2.0 * alpha);
	let l23_2a = (p3.distance(p2)).powf(2.0 * alpha);
	let (l01_a, l12_a, l23_a) = (l01_2a.sqrt(), l12_2a.sqrt(), l23_2a.sqrt());

	let mut c1 = p1;
	if l01_a > EPSILON {
		let a = 2.0 * l01_2a + 3.0 * l01_a * l12_a + l12_2a;
		let n = 3.0 * l01_a * (l01_a + l12_a);
		c1 = Point::new(
			(p1.x * a - p0.x * l12_2a + p2.x * l01_2a) / n,
			(p1.y * a - p0.y * l12_2a + p2.y * l01_2a) / n,
		);
	}

	let mut c2 = p2;
	if l23_a > EPSILON {
		let b = 2.0 * l23_2a + 3.0 * l23_a * l12_a + l12_2a;
		let m = 3.0 * l23_a * (l23_a + l12_a);
		c2 = Point::new(
			(p2.x * b + p1.x * l23_2a - p3.x * l12_2a) / m,
			(p2.y * b + p1.y * l23_2a - p3.y * l12_2a) / m,
		);
	}

	CubicSegment { c1, c2, to: p2 }
}

#[cfg(test)]
mod tests {
	use super::*;

	fn close(a: Point, b: Point) -> bool {
		a.distance(b) < 1e-9
	}

	fn square() -> Vec<Point> {
		vec![
			Point::new(0.0, 0.0),
			Point::new(10.0, 0.0),
			Point::new(10.0, 10.0),
			Point::new(0.0, 10.0),
		]
	}

	#[test]
	fn curve_passes_through_every_point_in_order() {
		let points = square();
		let curve = catmull_rom_closed(&points, CENTRIPETAL);
		assert_eq!(curve.segments.len(), 4);
		assert_eq!(curve.start, points[0]);
		for (i, seg) in curve.segments.iter().enumerate() {
			assert!(close(seg.to, points[(i + 1) % 4]));
			assert!(close(curve.sample(i, 0.0), points[i]));
			assert!(close(curve.sample(i, 1.0), points[(i + 1) % 4]));
		}
	}

	#[test]
	fn square_is_symmetric() {
		let curve = catmull_rom_closed(&square(), CENTRIPETAL);
		// Midpoint of the top edge bulges outward, above y = 0.
		let mid = curve.sample(0, 0.5);
		assert!((mid.x - 5.0).abs() < 1e-9);
		assert!(mid.y < 0.0);
	}

	#[test]
	fn bounds_include_bulge_between_knots() {
		let curve = catmull_rom_closed(&square(), CENTRIPETAL);
		let (min, max) = curve.bounds();
		// Each edge bulges 1.25 past the knots at its midpoint.
		assert!(close(min, Point::new(-1.25, -1.25)), "{min:?}");
		assert!(close(max, Point::new(11.25, 11.25)), "{max:?}");
	}

	#[test]
	fn bounds_contain_every_sample() {
		let points = vec![
			Point::new(0.0, 0.0),
			Point::new(100.0, 0.0),
			Point::new(101.0, 1.0),
			Point::new(100.0, 100.0),
			Point::new(0.0, 100.0),
		];
		let curve = catmull_rom_closed(&points, CENTRIPETAL);
		let (min, max) = curve.bounds();
		for index in 0..curve.segments.len() {
			for step in 0..=50 {
				let p = curve.sample(index, step as f64 / 50.0);
				assert!(p.x >= min.x - 1e-9 && p.x <= max.x + 1e-9, "{p:?}");
				assert!(p.y >= min.y - 1e-9 && p.y <= max.y + 1e-9, "{p:?}");
			}
		}
		assert!(min.x < 0.0 && max.y > 100.0);
	}

	#[test]
	fn uneven_spacing_does_not_loop() {
		// A tight pair next to long edges makes uniform Catmull-Rom overshoot.
		let points = vec![
			Point::new(0.0, 0.0),
			Point::new(100.0, 0.0),
			Point::new(101.0, 1.0),
			Point::new(100.0, 100.0),
			Point::new(0.0, 100.0),
		];
		let curve = catmull_rom_closed(&points, CENTRIPETAL);
		let short = 1;
		for step in 0..=20 {
			let p = curve.sample(short, step as f64 / 20.0);
			assert!(p.x >= 99.0 && p.x <= 102.5, "x escaped: {p:?}");
			assert!(p.y >= -1.5 && p.y <= 2.5, "y escaped: {p:?}");
		}
	}

	#[test]
	fn coincident_points_stay_finite() {
		let points = vec![Point::new(1.0, 1.0), Point::new(1.0, 1.0), Point::new(5.0, 5.0)];
		let curve = catmull_rom_closed(&points, CENTRIPETAL);
		for seg in &curve.segments {
			assert!(seg.c1.x.is_finite() && seg.c2.y.is_finite());
		}
	}

	#[test]
	fn small_rings_degenerate() {
		assert!(catmull_rom_closed(&[], CENTRIPETAL).is_empty());
		assert!(catmull_rom_closed(&[Point::new(3.0, 4.0)], CENTRIPETAL).is_empty());
		let pair = catmull_rom_closed(&[Point::new(0.0, 0.0), Point::new(4.0, 0.0)], CENTRIPETAL);
		assert_eq!(pair.segments.len(), 2);
		assert_eq!(pair.segments[1].to, Point::new(0.0, 0.0));
	}
}
