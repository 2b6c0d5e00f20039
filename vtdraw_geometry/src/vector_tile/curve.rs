//! Flattening of quadratic and cubic Bezier curves into points.
//!
//! The number of points is the rounded length of the control polygon, at least
//! [`MIN_CURVE_SEGMENTS`]. Samples include both ends, so the first point equals the start
//! of the curve; the geometry encoder drops it as a degenerate line segment.
//!
//! A control polygon that is not finite falls back to the minimum. Very long polygons are
//! capped at the length their edges could have inside the overscan area of the canvas,
//! since points beyond it are clamped by the encoder anyway.

use log::trace;
use std::f64::consts::SQRT_2;
use vtdraw_core::constants::{MIN_CURVE_SEGMENTS, OVERSCAN_RATIO, TILE_SIZE};

type Point = [f64; 2];

fn point_count(control: &[Point]) -> usize {
	let length: f64 = control
		.windows(2)
		.map(|w| (w[1][0] - w[0][0]).hypot(w[1][1] - w[0][1]))
		.sum();
	let count = if length.is_finite() {
		((length + 0.5) as usize).clamp(MIN_CURVE_SEGMENTS, max_point_count(control.len() - 1))
	} else {
		MIN_CURVE_SEGMENTS
	};
	trace!("flattening curve with control polygon length {length} into {count} points");
	count
}

/// Longest control polygon with `edges` edges that fits the overscan area, rounded up.
fn max_point_count(edges: usize) -> usize {
	let diagonal = TILE_SIZE * (1.0 + 2.0 * OVERSCAN_RATIO) * SQRT_2;
	(diagonal * edges as f64).ceil() as usize
}

fn sample(count: usize, blend: impl Fn(f64) -> Point) -> Vec<Point> {
	let last = (count - 1) as f64;
	(0..count).map(|i| blend(i as f64 / last)).collect()
}

pub fn quadratic_points(p0: Point, p1: Point, p2: Point) -> Vec<Point> {
	sample(point_count(&[p0, p1, p2]), |t| {
		let u = 1.0 - t;
		let a = u * u;
		let b = 2.0 * u * t;
		let c = t * t;
		[
			a * p0[0] + b * p1[0] + c * p2[0],
			a * p0[1] + b * p1[1] + c * p2[1],
		]
	})
}

pub fn cubic_points(p0: Point, p1: Point, p2: Point, p3: Point) -> Vec<Point> {
	sample(point_count(&[p0, p1, p2, p3]), |t| {
		let u = 1.0 - t;
		let a = u * u * u;
		let b = 3.0 * u * u * t;
		let c = 3.0 * u * t * t;
		let d = t * t * t;
		[
			a * p0[0] + b * p1[0] + c * p2[0] + d * p3[0],
			a * p0[1] + b * p1[1] + c * p2[1] + d * p3[1],
		]
	})
}
