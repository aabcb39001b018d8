//! 4-connected flood fill.
//!
//! Both variants grow a region from a seed with an explicit stack (no
//! recursion), visiting east, west, south and north neighbours. They differ
//! only in what stops the growth:
//!
//! - [`fill_polygon_interior`]: cells outside the polygon (boundary cells count
//!   as inside) or outside its bounding box.
//! - [`fill_canvas`]: cells already occupied on the canvas or outside the
//!   caller's bounds.

use std::collections::HashSet;

use crate::math::Point;
use crate::polygon::{Polygon, Rect};

/// Flood fills the interior of a polygon, boundary included.
///
/// Without a `seed`, the bounding box centre is tried first, then the box is
/// scanned row by row for the first cell inside the polygon. Every returned
/// cell lies in the polygon's bounding box and passes [`Polygon::contains`].
pub fn fill_polygon_interior(vertices: &[Point], seed: Option<Point>) -> Vec<Point> {
    if vertices.len() < 3 {
        return Vec::new();
    }

    let polygon = Polygon::new(vertices.to_vec()).dedup_consecutive();
    let Some(bounds) = polygon.bounding_box() else {
        return Vec::new();
    };

    let Some(seed) = seed.or_else(|| find_seed(&polygon, bounds)) else {
        log::debug!("fill_polygon_interior: no interior cell found");
        return Vec::new();
    };

    grow(seed, |p| bounds.contains(p) && polygon.contains(p))
}

/// Flood fills empty canvas cells connected to `seed` within inclusive `bounds`.
///
/// Returns nothing if the seed is out of bounds or already occupied.
pub fn fill_canvas(occupied: &HashSet<Point>, seed: Point, bounds: Rect) -> Vec<Point> {
    if !bounds.contains(seed) || occupied.contains(&seed) {
        return Vec::new();
    }

    grow(seed, |p| bounds.contains(p) && !occupied.contains(&p))
}

/// Picks a cell inside `polygon`: the bounding box centre, or the first hit of
/// a full scan of the box.
///
/// The fallback scan is O(bounding box area) membership tests, fine for
/// teaching-scale grids but not for large canvases.
pub fn find_seed(polygon: &Polygon, bounds: Rect) -> Option<Point> {
    let center = bounds.center();
    if polygon.contains(center) {
        return Some(center);
    }

    log::warn!(
        "bounding box centre {} is outside the polygon, scanning {}x{} cells for a seed",
        center,
        bounds.width(),
        bounds.height()
    );
    (bounds.ymin..=bounds.ymax)
        .flat_map(|y| (bounds.xmin..=bounds.xmax).map(move |x| Point::new(x, y)))
        .find(|&p| polygon.contains(p))
}

fn grow(seed: Point, fillable: impl Fn(Point) -> bool) -> Vec<Point> {
    let mut filled = Vec::new();
    let mut visited = HashSet::new();
    let mut stack = vec![seed];

    while let Some(p) = stack.pop() {
        if !visited.insert(p) {
            continue;
        }
        if !fillable(p) {
            continue;
        }

        filled.push(p);
        stack.extend(p.neighbours_4());
    }

    log::trace!("flood fill from {} -> {} cells", seed, filled.len());
    filled
}
