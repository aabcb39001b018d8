//! Region filling.
//!
//! - [`scanline`]: even-odd scanline fill of one polygon or several pooled together
//! - [`flood`]: stack-based 4-connected region growing

pub mod flood;
pub mod scanline;

pub use flood::{fill_canvas, fill_polygon_interior};
pub use scanline::{fill_scanline, fill_scanline_multi};
