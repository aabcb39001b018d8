//! Scanline polygon filling with the even-odd rule.
//!
//! # Algorithm Overview
//!
//! For every integer scanline `y` between the lowest and highest vertex:
//!
//! 1. **Intersect** the scanline with every non-horizontal edge whose y range
//!    contains it. Ranges are half-open, `[min(y1, y2), max(y1, y2))`, so a
//!    vertex shared by two edges is counted once and a local minimum twice.
//! 2. **Sort** the intersection abscissae.
//! 3. **Fill** between consecutive pairs: the first crossing enters the
//!    polygon, the second leaves it. A span covers the cells from
//!    `ceil(x_in)` to `floor(x_out)`.
//!
//! ```text
//!   y=3        x----x          <- top scanline: closed range, boundary kept
//!   y=2      x--------x
//!   y=1    x------------x
//!   y=0    x------------x      <- horizontal edges ignored
//! ```
//!
//! The half-open range would drop the topmost scanline entirely (no edge
//! reaches past it), leaving the upper boundary of every shape unfilled. On
//! the topmost scanline of the polygon an edge belongs to, its range is
//! therefore closed at the top; edges meeting at a top vertex contribute the
//! same abscissa twice and fill it. Pooled polygons each keep their own top
//! row.
//!
//! Horizontal edges never contribute an intersection: their end cells are
//! covered by the spans of the adjacent edges.

use std::collections::HashSet;

use crate::math::Point;
use crate::polygon::Polygon;

/// A polygon edge tagged with the topmost scanline of its polygon.
#[derive(Clone, Copy, Debug)]
struct Edge {
    a: Point,
    b: Point,
    top: i32,
}

fn tagged_edges(vertices: &[Point]) -> Vec<Edge> {
    let polygon = Polygon::new(vertices.to_vec());
    let top = polygon.vertices().iter().map(|p| p.y).max().unwrap_or(0);
    polygon.edges().map(|(a, b)| Edge { a, b, top }).collect()
}

/// Fills a single implicitly closed polygon.
///
/// Returns every filled cell once, in scanline order (bottom to top, left to
/// right). Fewer than three vertices yields nothing.
pub fn fill_scanline(vertices: &[Point]) -> Vec<Point> {
    if vertices.len() < 3 {
        return Vec::new();
    }

    fill_edges(&tagged_edges(vertices))
}

/// Fills several polygons under one combined even-odd rule.
///
/// All edges are pooled and scanned together, so a region covered by two
/// overlapping polygons is crossed twice and left empty, and a polygon
/// nested inside another cuts a hole. Polygons with fewer than three
/// vertices are skipped.
pub fn fill_scanline_multi(polygons: &[Vec<Point>]) -> Vec<Point> {
    let edges: Vec<Edge> = polygons
        .iter()
        .filter(|vertices| vertices.len() >= 3)
        .flat_map(|vertices| tagged_edges(vertices))
        .collect();

    log::trace!(
        "fill_scanline_multi: {} polygons, {} pooled edges",
        polygons.len(),
        edges.len()
    );
    fill_edges(&edges)
}

fn fill_edges(edges: &[Edge]) -> Vec<Point> {
    let Some(min_y) = edges.iter().map(|e| e.a.y.min(e.b.y)).min() else {
        return Vec::new();
    };
    let max_y = edges.iter().map(|e| e.top).max().unwrap_or(min_y);

    let mut seen = HashSet::new();
    let mut filled = Vec::new();
    let mut xs: Vec<f64> = Vec::new();

    for y in min_y..=max_y {
        xs.clear();

        for &Edge { a, b, top } in edges {
            if a.y == b.y {
                continue;
            }
            let (lo, hi) = (a.y.min(b.y), a.y.max(b.y));
            if y >= lo && (y < hi || (y == top && y == hi)) {
                xs.push(intersect_x(a, b, y));
            }
        }

        if xs.len() < 2 {
            continue;
        }
        xs.sort_by(f64::total_cmp);

        for pair in xs.chunks_exact(2) {
            let x_start = pair[0].min(pair[1]).ceil() as i32;
            let x_end = pair[0].max(pair[1]).floor() as i32;
            for x in x_start..=x_end {
                let p = Point::new(x, y);
                if seen.insert(p) {
                    filled.push(p);
                }
            }
        }
    }

    filled
}

/// Abscissa where edge `a -> b` crosses scanline `y`. The edge must not be horizontal.
#[inline]
fn intersect_x(a: Point, b: Point, y: i32) -> f64 {
    let t = (y - a.y) as f64 / (b.y - a.y) as f64;
    a.x as f64 + t * (b.x - a.x) as f64
}
