//! Software rasterizer backing the terminal backdrop.

use ember_core::{Rgb, Rgba};

use crate::canvas::{Canvas, Surface};
use crate::error::{Error, Result};
use crate::gradient::RadialGradient;
use crate::viewport::SurfaceSize;

/// An opaque RGB pixel grid with a logical coordinate space.
///
/// Drawing happens in logical units; each pixel covers `scale × scale`
/// logical units and is shaded by sampling at its center.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelSurface {
    size: SurfaceSize,
    scale: f32,
    cols: usize,
    rows: usize,
    pixels: Vec<Rgb>,
}

impl PixelSurface {
    /// Create an empty surface; call [`Surface::resize`] to give it an area.
    pub fn new(scale: f32) -> Result<Self> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(Error::InvalidScale(scale));
        }
        Ok(Self {
            size: SurfaceSize::default(),
            scale,
            cols: 0,
            rows: 0,
            pixels: Vec::new(),
        })
    }

    /// Pixel grid dimensions as `(columns, rows)`.
    pub fn resolution(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    /// The pixel at `(col, row)`, if inside the grid.
    pub fn pixel(&self, col: usize, row: usize) -> Option<Rgb> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.pixels.get(row * self.cols + col).copied()
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Pixel range covering logical `[start, end)` on one axis.
    fn span(&self, start: f32, end: f32, limit: usize) -> (usize, usize) {
        let lo = (start / self.scale).floor().max(0.0) as usize;
        let hi = (end / self.scale).ceil().max(0.0) as usize;
        (lo.min(limit), hi.min(limit))
    }

    fn blend_at(&mut self, col: usize, row: usize, color: Rgba) {
        let idx = row * self.cols + col;
        if let Some(px) = self.pixels.get_mut(idx) {
            *px = px.blend(color);
        }
    }
}

impl Canvas for PixelSurface {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba) {
        if width <= 0.0 || height <= 0.0 || color.a <= 0.0 {
            return;
        }
        let (c0, c1) = self.span(x, x + width, self.cols);
        let (r0, r1) = self.span(y, y + height, self.rows);
        for row in r0..r1 {
            for col in c0..c1 {
                self.blend_at(col, row, color);
            }
        }
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, gradient: &RadialGradient) {
        if radius <= 0.0 {
            return;
        }
        let (c0, c1) = self.span(cx - radius, cx + radius, self.cols);
        let (r0, r1) = self.span(cy - radius, cy + radius, self.rows);
        let r2 = radius * radius;
        for row in r0..r1 {
            let py = (row as f32 + 0.5) * self.scale;
            for col in c0..c1 {
                let px = (col as f32 + 0.5) * self.scale;
                let (dx, dy) = (px - cx, py - cy);
                if dx * dx + dy * dy > r2 {
                    continue;
                }
                let color = gradient.color_at(px, py);
                if color.a > 0.0 {
                    self.blend_at(col, row, color);
                }
            }
        }
    }
}

impl Surface for PixelSurface {
    type Context = PixelSurface;

    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
        self.cols = (size.width / self.scale).ceil().max(0.0) as usize;
        self.rows = (size.height / self.scale).ceil().max(0.0) as usize;
        self.pixels.clear();
        self.pixels.resize(self.cols * self.rows, Rgb::BLACK);
    }

    fn context_2d(&mut self) -> Option<&mut Self::Context> {
        Some(self)
    }
}
