//! Line rasterization.
//!
//! [`bresenham`] is the integer-only incremental algorithm: it walks the major
//! axis one cell per step and keeps a decision term `d` that says when the
//! ideal line has drifted far enough to also step the minor axis.
//!
//! ```text
//! d0      = 2|dy| - |dx|
//! d >= 0  -> step minor axis, d -= 2|dx|
//! always  -> step major axis, d += 2|dy|
//! ```
//!
//! When `|dx| == |dy|` the y-dominant branch runs; for a perfect diagonal both
//! branches emit the same cells.
//!
//! [`dda`] is the floating point digital differential analyzer kept for
//! side-by-side comparison. Both return `max(|dx|, |dy|) + 1` cells from `p0`
//! to `p1` inclusive.

use crate::math::{round_to_grid, Point};

/// Rasterizes the segment `p0 -> p1` with Bresenham's algorithm.
///
/// The arithmetic runs in `i64`, so any pair of `i32` endpoints is accepted.
pub fn bresenham(p0: Point, p1: Point) -> Vec<Point> {
    let dx = p1.x as i64 - p0.x as i64;
    let dy = p1.y as i64 - p0.y as i64;

    let sign_x: i64 = if dx > 0 { 1 } else { -1 };
    let sign_y: i64 = if dy > 0 { 1 } else { -1 };

    let dx = dx.abs();
    let dy = dy.abs();

    let mut pixels = Vec::with_capacity(dx.max(dy) as usize + 1);
    let (mut x, mut y) = (p0.x as i64, p0.y as i64);

    // x and y stay between the endpoints while pushing, so the casts are lossless
    if dx > dy {
        // x is the major axis
        let mut d = 2 * dy - dx;
        for _ in 0..=dx {
            pixels.push(Point::new(x as i32, y as i32));
            if d >= 0 {
                y += sign_y;
                d -= 2 * dx;
            }
            x += sign_x;
            d += 2 * dy;
        }
    } else {
        let mut d = 2 * dx - dy;
        for _ in 0..=dy {
            pixels.push(Point::new(x as i32, y as i32));
            if d >= 0 {
                x += sign_x;
                d -= 2 * dy;
            }
            y += sign_y;
            d += 2 * dx;
        }
    }

    pixels
}

/// Rasterizes the segment `p0 -> p1` by sampling the line once per major-axis step.
pub fn dda(p0: Point, p1: Point) -> Vec<Point> {
    let dx = p1.x as i64 - p0.x as i64;
    let dy = p1.y as i64 - p0.y as i64;
    let steps = dx.abs().max(dy.abs());

    if steps == 0 {
        return vec![p0];
    }

    let x_increment = dx as f64 / steps as f64;
    let y_increment = dy as f64 / steps as f64;

    (0..=steps)
        .map(|i| {
            let i = i as f64;
            Point::new(
                round_to_grid(p0.x as f64 + x_increment * i),
                round_to_grid(p0.y as f64 + y_increment * i),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_line_properties(line: &[Point], p0: Point, p1: Point) {
        let dx = (p1.x - p0.x).abs();
        let dy = (p1.y - p0.y).abs();
        assert_eq!(line.len() as i32, dx.max(dy) + 1, "{p0} -> {p1}");
        assert_eq!(line.first(), Some(&p0));
        assert_eq!(line.last(), Some(&p1));
        for pair in line.windows(2) {
            assert!(pair[0].is_adjacent_8(pair[1]), "{p0} -> {p1}: gap at {}", pair[0]);
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn shallow_line_matches_reference() {
        let line = bresenham(Point::new(0, 0), Point::new(3, 1));
        assert_eq!(
            line,
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 1), Point::new(3, 1)]
        );
    }

    #[test]
    fn endpoints_at_the_coordinate_limits() {
        let (a, b) = (Point::new(i32::MAX - 3, i32::MIN), Point::new(i32::MAX, i32::MIN + 1));
        let cells = bresenham(a, b);
        assert_eq!(cells.len(), 4);
        assert_eq!((cells[0], cells[3]), (a, b));
        assert_eq!(bresenham(b, a).len(), 4);

        let steep = dda(Point::new(i32::MIN, i32::MAX - 2), Point::new(i32::MIN + 1, i32::MAX));
        assert_eq!(steep.len(), 3);
        assert_eq!(steep[2], Point::new(i32::MIN + 1, i32::MAX));
    }

    #[test]
    fn single_point() {
        let p = Point::new(7, -3);
        assert_eq!(bresenham(p, p), vec![p]);
        assert_eq!(dda(p, p), vec![p]);
    }

    #[test]
    fn diagonal_tie_uses_minor_branch() {
        let line = bresenham(Point::new(0, 0), Point::new(3, 3));
        assert_eq!(
            line,
            vec![Point::new(0, 0), Point::new(1, 1), Point::new(2, 2), Point::new(3, 3)]
        );
    }

    #[test]
    fn axis_aligned_lines() {
        let h = bresenham(Point::new(5, 2), Point::new(1, 2));
        assert_eq!(h.len(), 5);
        assert!(h.iter().all(|p| p.y == 2));

        let v = bresenham(Point::new(0, -2), Point::new(0, 2));
        assert_eq!(v.iter().map(|p| p.y).collect::<Vec<_>>(), vec![-2, -1, 0, 1, 2]);
    }

    #[test]
    fn all_octants_hold_invariants() {
        let origins = [Point::new(0, 0), Point::new(-4, 7)];
        for &p0 in &origins {
            for x in -9..=9 {
                for y in -9..=9 {
                    let p1 = Point::new(p0.x + x, p0.y + y);
                    check_line_properties(&bresenham(p0, p1), p0, p1);
                    check_line_properties(&dda(p0, p1), p0, p1);
                }
            }
        }
    }
}
