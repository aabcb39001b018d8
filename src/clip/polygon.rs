//! Sutherland-Hodgman polygon clipping.
//!
//! The subject polygon is clipped against one boundary at a time; the output
//! of each pass feeds the next. For each subject edge `s -> e`:
//!
//! | s       | e       | emitted                |
//! |---------|---------|------------------------|
//! | inside  | inside  | `e`                    |
//! | inside  | outside | intersection           |
//! | outside | inside  | intersection, then `e` |
//! | outside | outside | nothing                |
//!
//! Results have consecutive repeated vertices removed and are closed by
//! repeating the first vertex when at least two vertices remain.

use crate::math::{round_to_grid, Point, Vec2};
use crate::polygon::{Polygon, Rect};

/// True if every turn around the closed polygon bends the same way.
///
/// Collinear vertices (zero turn) are allowed. Needs at least three vertices.
pub fn convex(vertices: &[Point]) -> bool {
    let polygon = Polygon::new(vertices.to_vec());
    let v = polygon.vertices();
    let n = v.len();
    if n < 3 {
        return false;
    }

    let mut has_left = false;
    let mut has_right = false;
    for i in 0..n {
        let (a, b, c) = (v[i], v[(i + 1) % n], v[(i + 2) % n]);
        let turn = (b.x - a.x) as i64 * (c.y - b.y) as i64 - (b.y - a.y) as i64 * (c.x - b.x) as i64;
        has_left |= turn > 0;
        has_right |= turn < 0;
        if has_left && has_right {
            return false;
        }
    }
    true
}

/// Clips `subject` to an axis-aligned rectangle.
///
/// Passes run against the left, right, bottom and top boundaries in that order.
pub fn clip_rect(subject: &[Point], window: &Rect) -> Vec<Point> {
    let Rect { xmin, ymin, xmax, ymax } = *window;
    let mut vertices = Polygon::new(subject.to_vec()).vertices().to_vec();

    vertices = clip_against_edge(&vertices, |p| p.x >= xmin, |a, b| at_x(a, b, xmin));
    vertices = clip_against_edge(&vertices, |p| p.x <= xmax, |a, b| at_x(a, b, xmax));
    vertices = clip_against_edge(&vertices, |p| p.y >= ymin, |a, b| at_y(a, b, ymin));
    vertices = clip_against_edge(&vertices, |p| p.y <= ymax, |a, b| at_y(a, b, ymax));

    finish(vertices)
}

/// Clips `subject` to an arbitrary convex window.
///
/// The window is walked counter-clockwise, so "inside" an edge `a -> b` means
/// on or left of it. Both polygons need at least three vertices, otherwise
/// the result is empty. Clipping stops early once nothing is left.
pub fn clip_convex(subject: &[Point], clip_polygon: &[Point]) -> Vec<Point> {
    let subject = Polygon::new(subject.to_vec());
    let window = Polygon::new(clip_polygon.to_vec());
    if subject.len() < 3 || window.len() < 3 {
        return Vec::new();
    }
    let window = window.to_ccw();

    let mut vertices = subject.vertices().to_vec();
    for (a, b) in window.edges() {
        if vertices.is_empty() {
            log::debug!("clip_convex: subject clipped away before edge {} -> {}", a, b);
            break;
        }
        vertices = clip_against_edge(
            &vertices,
            |p| left_of(p, a, b),
            |s, e| line_intersection(s, e, a, b),
        );
    }

    finish(vertices)
}

/// One Sutherland-Hodgman pass against a single boundary.
fn clip_against_edge(
    vertices: &[Point],
    inside: impl Fn(Point) -> bool,
    intersect: impl Fn(Point, Point) -> Point,
) -> Vec<Point> {
    let n = vertices.len();
    let mut output = Vec::with_capacity(n + 2);

    for i in 0..n {
        let s = vertices[i];
        let e = vertices[(i + 1) % n];

        match (inside(s), inside(e)) {
            (true, true) => output.push(e),
            (true, false) => output.push(intersect(s, e)),
            (false, true) => {
                output.push(intersect(s, e));
                output.push(e);
            }
            (false, false) => {}
        }
    }

    output
}

fn finish(mut vertices: Vec<Point>) -> Vec<Point> {
    vertices.dedup();
    if vertices.len() >= 2 && vertices.first() != vertices.last() {
        vertices.push(vertices[0]);
    }
    vertices
}

/// Where `a -> b` crosses the vertical line `x`. `a` and `b` straddle it.
fn at_x(a: Point, b: Point, x: i32) -> Point {
    let t = (x - a.x) as f64 / (b.x - a.x) as f64;
    Point::new(x, round_to_grid(a.y as f64 + t * (b.y - a.y) as f64))
}

/// Where `a -> b` crosses the horizontal line `y`. `a` and `b` straddle it.
fn at_y(a: Point, b: Point, y: i32) -> Point {
    let t = (y - a.y) as f64 / (b.y - a.y) as f64;
    Point::new(round_to_grid(a.x as f64 + t * (b.x - a.x) as f64), y)
}

#[inline]
fn left_of(p: Point, a: Point, b: Point) -> bool {
    let edge = b.to_vec2() - a.to_vec2();
    edge.cross(p.to_vec2() - a.to_vec2()) >= 0.0
}

/// Intersection of the infinite lines through `p1 p2` and `q1 q2`.
///
/// Parallel or collinear lines have no single intersection; `p2` is returned
/// so the clipped chain stays continuous. This is a simplification: a subject
/// edge lying along a clip edge is not split at the overlap.
fn line_intersection(p1: Point, p2: Point, q1: Point, q2: Point) -> Point {
    let Vec2 { x: x1, y: y1 } = p1.to_vec2();
    let Vec2 { x: x2, y: y2 } = p2.to_vec2();
    let Vec2 { x: x3, y: y3 } = q1.to_vec2();
    let Vec2 { x: x4, y: y4 } = q2.to_vec2();

    let det = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if det == 0.0 {
        return p2;
    }

    let a = x1 * y2 - y1 * x2;
    let b = x3 * y4 - y3 * x4;
    Vec2::new(
        (a * (x3 - x4) - (x1 - x2) * b) / det,
        (a * (y3 - y4) - (y1 - y2) * b) / det,
    )
    .to_point()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::point::points;
    use std::collections::HashSet;
    use std::f64::consts::TAU;

    fn regular(n: usize, radius: f64) -> Vec<Point> {
        (0..n)
            .map(|i| {
                let a = TAU * i as f64 / n as f64;
                Vec2::new(radius * a.cos(), radius * a.sin()).to_point()
            })
            .collect()
    }

    fn corner_set(closed: &[Point]) -> HashSet<Point> {
        closed[..closed.len() - 1].iter().copied().collect()
    }

    #[test]
    fn regular_polygons_are_convex() {
        for n in 3..=12 {
            assert!(convex(&regular(n, 100.0)), "n={n}");
            let mut reversed = regular(n, 100.0);
            reversed.reverse();
            assert!(convex(&reversed), "reversed n={n}");
        }
    }

    #[test]
    fn star_and_arrow_are_not_convex() {
        let star: Vec<Point> = (0..10)
            .map(|i| {
                let r = if i % 2 == 0 { 100.0 } else { 40.0 };
                let a = TAU * i as f64 / 10.0;
                Vec2::new(r * a.cos(), r * a.sin()).to_point()
            })
            .collect();
        assert!(!convex(&star));

        let arrow = points(&[(0, 0), (10, 5), (0, 10), (3, 5)]);
        assert!(!convex(&arrow));
    }

    #[test]
    fn convex_edge_cases() {
        assert!(!convex(&points(&[(0, 0), (1, 1)])));
        // collinear points have zero turn everywhere
        assert!(convex(&points(&[(0, 0), (1, 0), (2, 0)])));
        // closing vertex repeated
        assert!(convex(&points(&[(0, 0), (4, 0), (4, 4), (0, 4), (0, 0)])));
    }

    #[test]
    fn clip_rect_subject_containing_window_gives_corners() {
        let subject = points(&[(-5, -5), (15, -5), (15, 15), (-5, 15)]);
        let window = Rect::new(0, 0, 10, 10);
        let clipped = clip_rect(&subject, &window);

        assert_eq!(clipped.len(), 5);
        assert_eq!(clipped.first(), clipped.last());
        let expected: HashSet<Point> = window.corners().into_iter().collect();
        assert_eq!(corner_set(&clipped), expected);
    }

    #[test]
    fn clip_rect_inside_subject_unchanged() {
        let subject = points(&[(2, 2), (8, 2), (5, 7)]);
        let clipped = clip_rect(&subject, &Rect::new(0, 0, 10, 10));
        assert_eq!(clipped.len(), 4);
        assert_eq!(corner_set(&clipped), subject.into_iter().collect());
    }

    #[test]
    fn clip_rect_outside_subject_empty() {
        let subject = points(&[(20, 20), (30, 20), (25, 30)]);
        assert!(clip_rect(&subject, &Rect::new(0, 0, 10, 10)).is_empty());
    }

    #[test]
    fn clip_rect_partial_overlap() {
        let subject = points(&[(5, 5), (15, 5), (15, 15), (5, 15)]);
        let clipped = clip_rect(&subject, &Rect::new(0, 0, 10, 10));
        let expected: HashSet<Point> = points(&[(5, 5), (10, 5), (10, 10), (5, 10)]).into_iter().collect();
        assert_eq!(corner_set(&clipped), expected);
        assert_eq!(clipped.len(), 5);
    }

    #[test]
    fn clip_rect_does_not_mutate_input() {
        let subject = points(&[(-5, -5), (15, -5), (15, 15), (-5, 15), (-5, -5)]);
        let before = subject.clone();
        let clipped = clip_rect(&subject, &Rect::new(0, 0, 10, 10));
        assert_eq!(subject, before);
        assert_eq!(clipped.len(), 5);
    }

    #[test]
    fn clip_convex_with_square_matches_rect() {
        let subject = points(&[(-5, -5), (15, -5), (15, 15), (-5, 15)]);
        let square = points(&[(0, 0), (10, 0), (10, 10), (0, 10)]);
        let convex_result = clip_convex(&subject, &square);
        let rect_result = clip_rect(&subject, &Rect::new(0, 0, 10, 10));
        assert_eq!(corner_set(&convex_result), corner_set(&rect_result));
    }

    #[test]
    fn clip_convex_window_orientation_is_normalized() {
        let subject = points(&[(0, 0), (20, 0), (20, 20), (0, 20)]);
        let tri_ccw = points(&[(5, 5), (15, 5), (10, 15)]);
        let tri_cw = points(&[(10, 15), (15, 5), (5, 5)]);

        let a = clip_convex(&subject, &tri_ccw);
        let b = clip_convex(&subject, &tri_cw);
        let expected: HashSet<Point> = tri_ccw.iter().copied().collect();
        assert_eq!(corner_set(&a), expected);
        assert_eq!(corner_set(&b), expected);
    }

    #[test]
    fn clip_convex_partial_triangle() {
        // triangle poking out of a diamond window to the right
        let diamond = points(&[(0, -10), (10, 0), (0, 10), (-10, 0)]);
        let subject = points(&[(0, -2), (20, -2), (20, 2), (0, 2)]);
        let clipped = clip_convex(&subject, &diamond);
        assert_eq!(clipped.first(), clipped.last());
        let corners = corner_set(&clipped);
        assert!(corners.contains(&Point::new(0, -2)));
        assert!(corners.contains(&Point::new(8, -2)));
        assert!(corners.contains(&Point::new(8, 2)));
        assert!(corners.contains(&Point::new(0, 2)));
    }

    #[test]
    fn clip_convex_disjoint_and_short_inputs() {
        let window = points(&[(0, 0), (10, 0), (10, 10), (0, 10)]);
        assert!(clip_convex(&points(&[(20, 20), (30, 20), (25, 30)]), &window).is_empty());
        assert!(clip_convex(&points(&[(1, 1), (2, 2)]), &window).is_empty());
        assert!(clip_convex(&points(&[(1, 1), (5, 1), (3, 4)]), &window[..2]).is_empty());
    }

    #[test]
    fn parallel_lines_fall_back_to_second_point() {
        let p2 = Point::new(5, 0);
        assert_eq!(
            line_intersection(Point::new(0, 0), p2, Point::new(0, 3), Point::new(9, 3)),
            p2
        );
        assert_eq!(
            line_intersection(Point::new(0, 0), Point::new(4, 4), Point::new(0, 4), Point::new(4, 0)),
            Point::new(2, 2)
        );
    }
}
