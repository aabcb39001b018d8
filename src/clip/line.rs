//! Line clipping against rectangles and convex windows.

use std::fmt;

use crate::math::{Point, Vec2};
use crate::polygon::{Polygon, Rect};
use crate::raster::rasterize_line;

/// A directed segment. Direction matters to the clipping math only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn rasterize(&self) -> Vec<Point> {
        rasterize_line(self.start, self.end)
    }
}

impl From<(Point, Point)> for Segment {
    fn from((start, end): (Point, Point)) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

/// Region code of a point relative to a clip rectangle.
///
/// At most one of `LEFT`/`RIGHT` and one of `BOTTOM`/`TOP` is ever set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Outcode(u8);

impl Outcode {
    pub const INSIDE: Outcode = Outcode(0);
    pub const LEFT: Outcode = Outcode(1);
    pub const RIGHT: Outcode = Outcode(2);
    pub const BOTTOM: Outcode = Outcode(4);
    pub const TOP: Outcode = Outcode(8);

    pub fn of(p: Point, window: &Rect) -> Outcode {
        let mut code = 0;
        if p.x < window.xmin {
            code |= Self::LEFT.0;
        } else if p.x > window.xmax {
            code |= Self::RIGHT.0;
        }
        if p.y < window.ymin {
            code |= Self::BOTTOM.0;
        } else if p.y > window.ymax {
            code |= Self::TOP.0;
        }
        Outcode(code)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn is_inside(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, flag: Outcode) -> bool {
        self.0 & flag.0 != 0
    }

    /// True if both codes share an outside half-plane.
    pub fn shares_side(self, other: Outcode) -> bool {
        self.0 & other.0 != 0
    }
}

/// Clips `p1 -> p2` to `window` with the Cohen-Sutherland algorithm.
///
/// Each outside endpoint is moved onto the boundary it violates, checked in
/// the order top, bottom, right, left, and its code recomputed, until the
/// segment is trivially accepted or rejected. Intersections are snapped to
/// the grid. Returns `None` when nothing of the segment remains.
pub fn cohen_sutherland(p1: Point, p2: Point, window: &Rect) -> Option<Segment> {
    let (mut a, mut b) = (p1, p2);
    let mut code_a = Outcode::of(a, window);
    let mut code_b = Outcode::of(b, window);

    loop {
        if code_a.is_inside() && code_b.is_inside() {
            return Some(Segment::new(a, b));
        }
        if code_a.shares_side(code_b) {
            log::debug!("cohen_sutherland: {} -> {} trivially rejected", p1, p2);
            return None;
        }

        let code_out = if !code_a.is_inside() { code_a } else { code_b };
        let (x1, y1) = (a.x as f64, a.y as f64);
        let (x2, y2) = (b.x as f64, b.y as f64);

        let clipped = if code_out.contains(Outcode::TOP) {
            let y = window.ymax as f64;
            Vec2::new(x1 + (x2 - x1) * (y - y1) / (y2 - y1), y)
        } else if code_out.contains(Outcode::BOTTOM) {
            let y = window.ymin as f64;
            Vec2::new(x1 + (x2 - x1) * (y - y1) / (y2 - y1), y)
        } else if code_out.contains(Outcode::RIGHT) {
            let x = window.xmax as f64;
            Vec2::new(x, y1 + (y2 - y1) * (x - x1) / (x2 - x1))
        } else {
            let x = window.xmin as f64;
            Vec2::new(x, y1 + (y2 - y1) * (x - x1) / (x2 - x1))
        }
        .to_point();

        if code_out == code_a {
            a = clipped;
            code_a = Outcode::of(a, window);
        } else {
            b = clipped;
            code_b = Outcode::of(b, window);
        }
    }
}

/// Clips `p1 -> p2` to a convex window with the Cyrus-Beck parametric algorithm.
///
/// The window may be given in either orientation; it is walked
/// counter-clockwise so each edge's outward normal points right of the edge.
/// For `P(t) = p1 + t (p2 - p1)`, every edge yields a parameter where the
/// segment crosses the edge line; crossings heading inward raise the entering
/// bound `te`, crossings heading outward lower the leaving bound `tl`. The
/// segment survives if `te <= tl`. A segment parallel to an edge and outside
/// it is rejected immediately.
///
/// Windows with fewer than three vertices clip everything away. The result
/// is unspecified for non-convex windows.
pub fn cyrus_beck(p1: Point, p2: Point, window: &Polygon) -> Option<Segment> {
    if window.len() < 3 {
        log::debug!("cyrus_beck: window has {} vertices, nothing to clip against", window.len());
        return None;
    }

    let window = window.to_ccw();
    let start = p1.to_vec2();
    let ds = p2.to_vec2() - start;

    let mut te: f64 = 0.0;
    let mut tl: f64 = 1.0;

    for (a, b) in window.edges() {
        let edge = b.to_vec2() - a.to_vec2();
        let normal = Vec2::new(edge.y, -edge.x);
        let w = start - a.to_vec2();

        let numerator = w.dot(normal);
        let denominator = ds.dot(normal);

        if denominator == 0.0 {
            if numerator > 0.0 {
                log::debug!("cyrus_beck: {} -> {} parallel to and outside edge {} -> {}", p1, p2, a, b);
                return None;
            }
            continue;
        }

        let t = -numerator / denominator;
        if denominator < 0.0 {
            te = te.max(t);
        } else {
            tl = tl.min(t);
        }
    }

    if te > tl {
        log::debug!("cyrus_beck: {} -> {} rejected (te={:.3} > tl={:.3})", p1, p2, te, tl);
        return None;
    }

    Some(Segment::new(
        (start + ds * te).to_point(),
        (start + ds * tl).to_point(),
    ))
}
