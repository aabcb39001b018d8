//! Midpoint circle and ellipse rasterization.
//!
//! Both walk a single symmetric arc and mirror each step into the other
//! octants/quadrants with [`circle_points`] and [`ellipse_points`]. The
//! mirrored cells are emitted as-is: cells on an octant or axis boundary
//! appear more than once in the output.

use crate::math::Point;

/// The 8 cells symmetric to offset `(x, y)` around `center`.
pub fn circle_points(center: Point, x: i32, y: i32) -> [Point; 8] {
    let (cx, cy) = (center.x, center.y);
    [
        Point::new(cx + x, cy + y),
        Point::new(cx - x, cy + y),
        Point::new(cx + x, cy - y),
        Point::new(cx - x, cy - y),
        Point::new(cx + y, cy + x),
        Point::new(cx - y, cy + x),
        Point::new(cx + y, cy - x),
        Point::new(cx - y, cy - x),
    ]
}

/// The 4 cells symmetric to offset `(x, y)` around `center`.
pub fn ellipse_points(center: Point, x: i32, y: i32) -> [Point; 4] {
    let (cx, cy) = (center.x, center.y);
    [
        Point::new(cx + x, cy + y),
        Point::new(cx - x, cy + y),
        Point::new(cx + x, cy - y),
        Point::new(cx - x, cy - y),
    ]
}

/// Rasterizes a circle with the midpoint algorithm.
///
/// Walks the first octant from `(0, r)` while `x <= y`. A radius of zero
/// yields eight copies of the center. The decision variable is kept in `i64`;
/// every mirrored cell (`center` ± `radius` on each axis) must fit in `i32`.
pub fn circle(center: Point, radius: i32) -> Vec<Point> {
    let radius = radius.unsigned_abs() as i64;
    let mut x: i64 = 0;
    let mut y: i64 = radius;
    let mut p = 1 - radius;

    let mut pixels = Vec::with_capacity(8 * (radius as usize + 1));

    while x <= y {
        pixels.extend_from_slice(&circle_points(center, x as i32, y as i32));
        x += 1;
        if p < 0 {
            p += 2 * x + 1;
        } else {
            y -= 1;
            p += 2 * (x - y) + 1;
        }
    }

    pixels
}

/// Rasterizes an axis-aligned ellipse with the two-region midpoint algorithm.
///
/// Region 1 steps x while the curve's slope magnitude is below one
/// (`2 ry² x < 2 rx² y`); region 2 then steps y down to zero. As with
/// [`circle`], every mirrored cell must fit in `i32`.
pub fn ellipse(center: Point, rx: i32, ry: i32) -> Vec<Point> {
    let rx = rx.unsigned_abs() as i64;
    let ry = ry.unsigned_abs() as i64;
    let rx2 = (rx * rx) as f64;
    let ry2 = (ry * ry) as f64;

    let mut pixels = Vec::new();
    let mut x: i64 = 0;
    let mut y: i64 = ry;

    let mut dx = 2.0 * ry2 * x as f64;
    let mut dy = 2.0 * rx2 * y as f64;

    let mut p1 = ry2 - rx2 * ry as f64 + 0.25 * rx2;
    while dx < dy {
        pixels.extend_from_slice(&ellipse_points(center, x as i32, y as i32));
        x += 1;
        dx += 2.0 * ry2;
        if p1 < 0.0 {
            p1 += dx + ry2;
        } else {
            y -= 1;
            dy -= 2.0 * rx2;
            p1 += dx - dy + ry2;
        }
    }

    let xf = x as f64 + 0.5;
    let yf = (y - 1) as f64;
    let mut p2 = ry2 * xf * xf + rx2 * yf * yf - rx2 * ry2;
    while y >= 0 {
        pixels.extend_from_slice(&ellipse_points(center, x as i32, y as i32));
        y -= 1;
        dy -= 2.0 * rx2;
        if p2 > 0.0 {
            p2 += rx2 - dy;
        } else {
            x += 1;
            dx += 2.0 * ry2;
            p2 += dx - dy + rx2;
        }
    }

    log::trace!("ellipse rx={} ry={} -> {} cells", rx, ry, pixels.len());
    pixels
}
