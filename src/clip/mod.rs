//! Line and polygon clipping.
//!
//! - [`line::cohen_sutherland`]: segment against a rectangle, by outcodes
//! - [`line::cyrus_beck`]: segment against a convex window, parametrically
//! - [`polygon::clip_rect`] / [`polygon::clip_convex`]: Sutherland-Hodgman
//!
//! [`ClipWindow`] picks the matching algorithm for either window shape.

pub mod line;
pub mod polygon;

pub use line::{cohen_sutherland, cyrus_beck, Outcode, Segment};
pub use polygon::{clip_convex, clip_rect, convex};

use crate::math::Point;
use crate::polygon::{Polygon, Rect};

/// A clipping window: an axis-aligned rectangle or a convex polygon.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClipWindow {
    Rect(Rect),
    Convex(Polygon),
}

impl ClipWindow {
    /// Builds a convex window, or `None` if `vertices` is not a convex polygon.
    pub fn convex(vertices: &[Point]) -> Option<Self> {
        if polygon::convex(vertices) {
            Some(ClipWindow::Convex(Polygon::new(vertices.to_vec())))
        } else {
            None
        }
    }

    /// Clips a segment, returning `None` when nothing remains.
    pub fn clip_line(&self, p1: Point, p2: Point) -> Option<Segment> {
        match self {
            ClipWindow::Rect(rect) => cohen_sutherland(p1, p2, rect),
            ClipWindow::Convex(window) => cyrus_beck(p1, p2, window),
        }
    }

    /// Clips a polygon; the result is closed, or empty when nothing remains.
    pub fn clip_polygon(&self, subject: &[Point]) -> Vec<Point> {
        match self {
            ClipWindow::Rect(rect) => clip_rect(subject, rect),
            ClipWindow::Convex(window) => clip_convex(subject, window.vertices()),
        }
    }

    /// The window's outline as a polygon.
    pub fn outline(&self) -> Polygon {
        match self {
            ClipWindow::Rect(rect) => rect.to_polygon(),
            ClipWindow::Convex(window) => window.clone(),
        }
    }
}

impl From<Rect> for ClipWindow {
    fn from(rect: Rect) -> Self {
        ClipWindow::Rect(rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::point::points;

    #[test]
    fn rect_and_square_windows_agree() {
        let rect = ClipWindow::from(Rect::new(0, 0, 10, 10));
        let square = ClipWindow::convex(&points(&[(0, 0), (10, 0), (10, 10), (0, 10)])).unwrap();

        let (a, b) = (Point::new(-5, 5), Point::new(15, 5));
        assert_eq!(rect.clip_line(a, b), square.clip_line(a, b));
        assert_eq!(rect.outline(), square.outline());

        let subject = points(&[(2, 2), (8, 2), (5, 7)]);
        assert_eq!(rect.clip_polygon(&subject), square.clip_polygon(&subject));
    }

    #[test]
    fn concave_window_rejected() {
        assert!(ClipWindow::convex(&points(&[(0, 0), (10, 5), (0, 10), (3, 5)])).is_none());
    }
}
