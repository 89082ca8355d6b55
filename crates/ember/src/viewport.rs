use ember_field::{SurfaceSize, SurfaceSizeProvider};
use ratatui::layout::Size;

/// Terminal window measured in the particle field's logical units.
///
/// Each cell is two half-block pixels tall, and each pixel spans `scale`
/// logical units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerminalViewport {
    cols: u16,
    rows: u16,
    scale: f32,
}

impl TerminalViewport {
    pub fn new(size: Size, scale: f32) -> Self {
        Self {
            cols: size.width,
            rows: size.height,
            scale,
        }
    }

    pub fn set_size(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
    }
}

impl SurfaceSizeProvider for TerminalViewport {
    fn surface_size(&self) -> SurfaceSize {
        SurfaceSize::new(
            self.cols as f32 * self.scale,
            self.rows as f32 * 2.0 * self.scale,
        )
    }
}
