//! Primitive rasterization: lines, conics, Bézier curves and polylines.
//!
//! Every function here is pure: it takes geometric parameters and returns a
//! fresh sequence of grid cells.
//!
//! Available line algorithms:
//! - [`line::bresenham`]: integer decision-variable stepping (default)
//! - [`line::dda`]: floating point increments, rounded per step

pub mod bezier;
pub mod conic;
pub mod line;
pub mod polyline;

pub use bezier::{rasterize_bezier, sample_bezier, DEFAULT_BEZIER_SEGMENTS};
pub use conic::{circle, ellipse};
pub use line::{bresenham, dda};
pub use polyline::{rasterize_polygon_outline, rasterize_polyline};

use crate::math::Point;

/// Available line rasterization algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineAlgorithm {
    /// Integer-only incremental stepping.
    #[default]
    Bresenham,
    /// Digital differential analyzer: real increments rounded to the grid.
    Dda,
}

impl std::fmt::Display for LineAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineAlgorithm::Bresenham => write!(f, "Bresenham"),
            LineAlgorithm::Dda => write!(f, "DDA"),
        }
    }
}

/// Rasterizes `p0 -> p1` with Bresenham's algorithm.
#[inline]
pub fn rasterize_line(p0: Point, p1: Point) -> Vec<Point> {
    line::bresenham(p0, p1)
}

/// Rasterizes `p0 -> p1` with the chosen algorithm.
pub fn rasterize_line_with(algorithm: LineAlgorithm, p0: Point, p1: Point) -> Vec<Point> {
    match algorithm {
        LineAlgorithm::Bresenham => line::bresenham(p0, p1),
        LineAlgorithm::Dda => line::dda(p0, p1),
    }
}
