//! An owned ARGB pixel grid for plotting algorithm output.
//!
//! Cells are addressed in grid coordinates with the origin at the bottom-left
//! and y pointing up, matching the geometry routines. [`Canvas::to_image`]
//! flips rows so the exported PNG shows y up as well.

use std::collections::HashSet;
use std::path::Path;

use crate::error::Result;
use crate::math::Point;
use crate::polygon::Rect;

pub const DEFAULT_WIDTH: u32 = 400;
pub const DEFAULT_HEIGHT: u32 = 300;

// Colors in ARGB8888 format
pub const COLOR_BACKGROUND: u32 = 0xFF1E1E1E;
pub const COLOR_GRID: u32 = 0xFF333333;
pub const COLOR_WHITE: u32 = 0xFFFFFFFF;
pub const COLOR_RED: u32 = 0xFFFF4040;
pub const COLOR_GREEN: u32 = 0xFF40FF40;
pub const COLOR_BLUE: u32 = 0xFF4080FF;
pub const COLOR_YELLOW: u32 = 0xFFFFFF00;
pub const COLOR_CYAN: u32 = 0xFF00FFFF;
pub const COLOR_MAGENTA: u32 = 0xFFFF00FF;
pub const COLOR_ORANGE: u32 = 0xFFFF9900;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    pixels: Vec<u32>,
    width: u32,
    height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl Canvas {
    /// Create a canvas cleared to [`COLOR_BACKGROUND`].
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![COLOR_BACKGROUND; (width as usize) * (height as usize)],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Every addressable cell, as an inclusive rectangle.
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width as i32 - 1, self.height as i32 - 1)
    }

    /// Raw pixels, bottom row first.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Set a single cell. Writes outside the canvas are ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Plot a pixel sequence in one color.
    pub fn plot(&mut self, points: &[Point], color: u32) {
        for p in points {
            self.set_pixel(p.x, p.y, color);
        }
    }

    /// Draw grid lines every `spacing` cells.
    pub fn draw_grid(&mut self, spacing: u32, color: u32) {
        if spacing == 0 {
            return;
        }
        for y in 0..self.height {
            for x in 0..self.width {
                if x % spacing == 0 || y % spacing == 0 {
                    self.set_pixel(x as i32, y as i32, color);
                }
            }
        }
    }

    /// Cells whose color differs from `background`, the occupancy input of
    /// [`fill_canvas`](crate::fill::fill_canvas).
    pub fn occupied(&self, background: u32) -> HashSet<Point> {
        let width = self.width as usize;
        self.pixels
            .iter()
            .enumerate()
            .filter(|(_, &c)| c != background)
            .map(|(i, _)| Point::new((i % width) as i32, (i / width) as i32))
            .collect()
    }

    /// Convert to an RGBA image with the top row first.
    pub fn to_image(&self) -> image::RgbaImage {
        let top = self.height.saturating_sub(1);
        image::RgbaImage::from_fn(self.width, self.height, |x, row| {
            let argb = self.pixels[((top - row) * self.width + x) as usize];
            let [a, r, g, b] = argb.to_be_bytes();
            image::Rgba([r, g, b, a])
        })
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        self.to_image()
            .save_with_format(path.as_ref(), image::ImageFormat::Png)?;
        log::debug!("wrote {}x{} canvas to {}", self.width, self.height, path.as_ref().display());
        Ok(())
    }
}
