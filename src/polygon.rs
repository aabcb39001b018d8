//! Closed polygons and axis-aligned rectangles on the integer grid.
//!
//! A [`Polygon`] is always closed: the edge from the last vertex back to the
//! first exists whether or not the caller repeated the first vertex. The
//! repeated closing vertex is stripped on construction, so every algorithm
//! walks the same canonical edge list through [`Polygon::edges`].

use crate::math::{Point, Vec2};

/// An inclusive axis-aligned rectangle of grid cells.
///
/// Used as the rectangular clip window and as flood-fill bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub xmin: i32,
    pub ymin: i32,
    pub xmax: i32,
    pub ymax: i32,
}

impl Rect {
    /// Creates a rectangle from two opposite corners given in any order.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            xmin: x0.min(x1),
            ymin: y0.min(y1),
            xmax: x0.max(x1),
            ymax: y0.max(y1),
        }
    }

    /// The smallest rectangle containing every point, or `None` if empty.
    pub fn bounding<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut rect = Rect::new(first.x, first.y, first.x, first.y);
        for p in iter {
            rect.xmin = rect.xmin.min(p.x);
            rect.ymin = rect.ymin.min(p.y);
            rect.xmax = rect.xmax.max(p.x);
            rect.ymax = rect.ymax.max(p.y);
        }
        Some(rect)
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.xmin && p.x <= self.xmax && p.y >= self.ymin && p.y <= self.ymax
    }

    /// Number of columns covered, boundaries included.
    pub fn width(&self) -> u32 {
        self.xmax.abs_diff(self.xmin) + 1
    }

    /// Number of rows covered, boundaries included.
    pub fn height(&self) -> u32 {
        self.ymax.abs_diff(self.ymin) + 1
    }

    /// Corners in counter-clockwise order (y axis pointing up), starting at the minimum.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.xmin, self.ymin),
            Point::new(self.xmax, self.ymin),
            Point::new(self.xmax, self.ymax),
            Point::new(self.xmin, self.ymax),
        ]
    }

    /// Centre cell, rounding toward negative infinity.
    pub fn center(&self) -> Point {
        Point::new(
            (self.xmin + self.xmax).div_euclid(2),
            (self.ymin + self.ymax).div_euclid(2),
        )
    }

    pub fn to_polygon(&self) -> Polygon {
        Polygon::new(self.corners().to_vec())
    }
}

/// An implicitly closed polygon.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Wraps a vertex list, dropping a trailing vertex that repeats the first.
    pub fn new(vertices: impl Into<Vec<Point>>) -> Self {
        let mut vertices = vertices.into();
        if vertices.len() >= 2 && vertices.first() == vertices.last() {
            vertices.pop();
        }
        Self { vertices }
    }

    pub fn from_coords(coords: &[(i32, i32)]) -> Self {
        Self::new(crate::math::point::points(coords))
    }

    /// The distinct vertices, without the closing repeat.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Every edge of the closed outline, ending with last -> first.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// The vertex list with the first vertex repeated at the end.
    pub fn closed(&self) -> Vec<Point> {
        let mut out = self.vertices.clone();
        if let Some(&first) = self.vertices.first() {
            out.push(first);
        }
        out
    }

    /// Removes consecutive repeated vertices, including across the wrap.
    pub fn dedup_consecutive(&self) -> Polygon {
        let mut vertices = self.vertices.clone();
        vertices.dedup();
        Polygon::new(vertices)
    }

    pub fn bounding_box(&self) -> Option<Rect> {
        Rect::bounding(&self.vertices)
    }

    /// Shoelace area. Positive for counter-clockwise order with the y axis up.
    pub fn signed_area(&self) -> f64 {
        let twice: i64 = self
            .edges()
            .map(|(a, b)| a.x as i64 * b.y as i64 - b.x as i64 * a.y as i64)
            .sum();
        twice as f64 / 2.0
    }

    pub fn is_ccw(&self) -> bool {
        self.signed_area() >= 0.0
    }

    /// The same polygon in counter-clockwise order.
    pub fn to_ccw(&self) -> Polygon {
        if self.signed_area() < 0.0 {
            let mut vertices = self.vertices.clone();
            vertices.reverse();
            Polygon { vertices }
        } else {
            self.clone()
        }
    }

    /// True if `p` lies exactly on one of the edges.
    pub fn on_boundary(&self, p: Point) -> bool {
        self.edges().any(|(a, b)| on_segment(p, a, b))
    }

    /// Even-odd point membership by ray casting. Boundary points count as inside.
    pub fn contains(&self, p: Point) -> bool {
        if self.vertices.len() < 3 {
            return false;
        }
        if self.on_boundary(p) {
            return true;
        }

        let px = p.x as f64;
        let mut inside = false;
        for (a, b) in self.edges() {
            if (a.y > p.y) != (b.y > p.y) {
                let x_cross = (b.x - a.x) as f64 * (p.y - a.y) as f64 / (b.y - a.y) as f64
                    + a.x as f64;
                if px < x_cross {
                    inside = !inside;
                }
            }
        }
        inside
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(vertices: Vec<Point>) -> Self {
        Polygon::new(vertices)
    }
}

impl From<&[Point]> for Polygon {
    fn from(vertices: &[Point]) -> Self {
        Polygon::new(vertices.to_vec())
    }
}

/// Collinear with `a -> b` and inside its bounding box.
pub fn on_segment(p: Point, a: Point, b: Point) -> bool {
    let ab = b.to_vec2() - a.to_vec2();
    let ap: Vec2 = p.to_vec2() - a.to_vec2();
    if ab.cross(ap) != 0.0 {
        return false;
    }
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Polygon {
        Polygon::from_coords(&[(0, 0), (4, 0), (4, 4), (0, 4)])
    }

    #[test]
    fn closing_vertex_is_stripped() {
        let open = square();
        let closed = Polygon::from_coords(&[(0, 0), (4, 0), (4, 4), (0, 4), (0, 0)]);
        assert_eq!(open, closed);
        assert_eq!(closed.len(), 4);
        assert_eq!(closed.closed().len(), 5);
    }

    #[test]
    fn edges_wrap_around() {
        let edges: Vec<_> = square().edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3], (Point::new(0, 4), Point::new(0, 0)));
    }

    #[test]
    fn orientation() {
        let ccw = square();
        assert!(ccw.is_ccw());
        assert_eq!(ccw.signed_area(), 16.0);

        let cw = Polygon::from_coords(&[(0, 0), (0, 4), (4, 4), (4, 0)]);
        assert!(!cw.is_ccw());
        assert!(cw.to_ccw().is_ccw());
        assert_eq!(cw.to_ccw().signed_area(), 16.0);
    }

    #[test]
    fn contains_counts_boundary_as_inside() {
        let sq = square();
        assert!(sq.contains(Point::new(2, 2)));
        assert!(sq.contains(Point::new(0, 0)));
        assert!(sq.contains(Point::new(4, 2)));
        assert!(sq.contains(Point::new(2, 4)));
        assert!(!sq.contains(Point::new(5, 2)));
        assert!(!sq.contains(Point::new(-1, -1)));
    }

    #[test]
    fn contains_concave() {
        // U shape opening upward
        let u = Polygon::from_coords(&[(0, 0), (6, 0), (6, 6), (4, 6), (4, 2), (2, 2), (2, 6), (0, 6)]);
        assert!(u.contains(Point::new(1, 4)));
        assert!(u.contains(Point::new(5, 4)));
        assert!(!u.contains(Point::new(3, 4)));
        assert!(u.contains(Point::new(3, 1)));
    }

    #[test]
    fn dedup_consecutive_wraps() {
        let p = Polygon::new(vec![
            Point::new(0, 0),
            Point::new(0, 0),
            Point::new(3, 0),
            Point::new(3, 3),
            Point::new(3, 3),
            Point::new(0, 0),
        ]);
        assert_eq!(p.dedup_consecutive().vertices(), &[Point::new(0, 0), Point::new(3, 0), Point::new(3, 3)]);
    }

    #[test]
    fn rect_normalizes_and_bounds() {
        let r = Rect::new(10, 8, 2, 3);
        assert_eq!(r, Rect { xmin: 2, ymin: 3, xmax: 10, ymax: 8 });
        assert!(r.contains(Point::new(2, 8)));
        assert!(!r.contains(Point::new(11, 8)));
        assert_eq!(r.center(), Point::new(6, 5));
        assert_eq!((r.width(), r.height()), (9, 6));

        let bb = square().bounding_box().unwrap();
        assert_eq!(bb, Rect::new(0, 0, 4, 4));
        assert!(Polygon::default().bounding_box().is_none());
    }
}
