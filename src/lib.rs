//! Classic 2D/3D raster graphics algorithms on an integer grid.
//!
//! Every algorithm is a pure function from geometric parameters to a fresh
//! sequence of grid cells ([`Point`]s): line, conic and Bézier rasterization,
//! scanline and flood fills, line and polygon clipping, affine transforms,
//! and 3D to 2D projections. A [`Canvas`](canvas::Canvas) collects the output
//! and exports it as a PNG.
//!
//! Degenerate input (too few vertices, zero radius, an empty clip result)
//! produces empty output rather than an error.
//!
//! # Quick Start
//!
//! ```ignore
//! use rasterlab::prelude::*;
//!
//! let mut canvas = Canvas::new(200, 200);
//! canvas.plot(&rasterize_line(Point::new(10, 10), Point::new(190, 120)), COLOR_WHITE);
//! canvas.plot(&circle(Point::new(100, 100), 40), COLOR_RED);
//! canvas.save_png("out.png")?;
//! ```

pub mod canvas;
pub mod clip;
pub mod error;
pub mod fill;
pub mod math;
pub mod model;
pub mod polygon;
pub mod projection;
pub mod raster;
pub mod transform;

// Re-export commonly needed types at crate root for convenience
pub use canvas::Canvas;
pub use clip::{ClipWindow, Segment};
pub use error::{Error, Result};
pub use math::{Point, Vec2, Vec3};
pub use polygon::{Polygon, Rect};
pub use projection::{Plane, Projection, Wireframe};
pub use raster::LineAlgorithm;
pub use transform::Transform;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use rasterlab::prelude::*;
/// ```
pub mod prelude {
    // Geometry
    pub use crate::math::{round_to_grid, Point, Vec2, Vec3};
    pub use crate::polygon::{Polygon, Rect};

    // Rasterization
    pub use crate::raster::{
        circle, ellipse, rasterize_bezier, rasterize_line, rasterize_line_with,
        rasterize_polygon_outline, rasterize_polyline, sample_bezier, LineAlgorithm,
        DEFAULT_BEZIER_SEGMENTS,
    };

    // Filling
    pub use crate::fill::{fill_canvas, fill_polygon_interior, fill_scanline, fill_scanline_multi};

    // Clipping
    pub use crate::clip::{clip_convex, clip_rect, cohen_sutherland, cyrus_beck, ClipWindow, Segment};

    // Transforms and projections
    pub use crate::projection::{Plane, Projection, Wireframe};
    pub use crate::transform::{AffineOp, Transform};

    // Output
    pub use crate::canvas::{Canvas, COLOR_BACKGROUND, COLOR_RED, COLOR_WHITE};
    pub use crate::error::{Error, Result};
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::clip::polygon::convex;
    pub use crate::fill::flood::find_seed;
    pub use crate::raster::line::{bresenham, dda};
}
