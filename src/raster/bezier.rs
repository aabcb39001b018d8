//! Cubic Bézier curves.
//!
//! The curve is sampled at evenly spaced parameters using the Bernstein basis
//!
//! ```text
//! B(t) = (1-t)³ P0 + 3t(1-t)² P1 + 3t²(1-t) P2 + t³ P3,   t in [0, 1]
//! ```
//!
//! and the resulting vertex chain is stitched together with line segments.

use std::collections::HashSet;

use super::line::bresenham;
use crate::math::{Point, Vec2};

/// Number of segments used when the caller has no preference.
pub const DEFAULT_BEZIER_SEGMENTS: usize = 20;

/// Evaluates the cubic curve at `t` without rounding.
pub fn evaluate(control: [Point; 4], t: f64) -> Vec2 {
    let u = 1.0 - t;
    let b0 = u * u * u;
    let b1 = 3.0 * t * u * u;
    let b2 = 3.0 * t * t * u;
    let b3 = t * t * t;

    let [p0, p1, p2, p3] = control.map(Point::to_vec2);
    p0 * b0 + p1 * b1 + p2 * b2 + p3 * b3
}

/// Samples `segments + 1` evenly spaced parameters and snaps each to the grid.
///
/// A sample equal to the previously emitted one is skipped. A segment count
/// of zero is treated as one.
pub fn sample_bezier(p0: Point, p1: Point, p2: Point, p3: Point, segments: usize) -> Vec<Point> {
    let segments = segments.max(1);
    let mut chain: Vec<Point> = Vec::with_capacity(segments + 1);

    for i in 0..=segments {
        let t = i as f64 / segments as f64;
        let p = evaluate([p0, p1, p2, p3], t).to_point();
        if chain.last() != Some(&p) {
            chain.push(p);
        }
    }

    chain
}

/// Rasterizes the curve as a connected run of cells.
///
/// Cells keep the order in which the curve is drawn; a cell shared by two
/// consecutive segments (or revisited by a looping curve) is kept at its
/// first occurrence only. A curve whose samples all land on one cell has no
/// segment to draw and yields nothing.
pub fn rasterize_bezier(p0: Point, p1: Point, p2: Point, p3: Point, segments: usize) -> Vec<Point> {
    let chain = sample_bezier(p0, p1, p2, p3, segments);
    if chain.len() < 2 {
        log::debug!("rasterize_bezier: curve collapses to a single cell, nothing to draw");
    }

    let mut seen = HashSet::new();
    let mut pixels = Vec::new();
    for pair in chain.windows(2) {
        for p in bresenham(pair[0], pair[1]) {
            if seen.insert(p) {
                pixels.push(p);
            }
        }
    }
    pixels
}
