//! Terminal rendering of a [`PixelSurface`].

use ember_core::Rgb;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::raster::PixelSurface;

/// Paints a pixel surface with upper half blocks, two pixel rows per cell.
///
/// `scroll` skips that many cell rows from the top of the surface, so the
/// backdrop moves with the page it sits behind. Only cell colors are
/// touched; anything drawn afterwards appears on top.
#[derive(Debug, Clone, Copy)]
pub struct Backdrop<'a> {
    surface: &'a PixelSurface,
    scroll: u16,
}

impl<'a> Backdrop<'a> {
    pub fn new(surface: &'a PixelSurface) -> Self {
        Self { surface, scroll: 0 }
    }

    pub fn scroll(mut self, rows: u16) -> Self {
        self.scroll = rows;
        self
    }
}

impl Widget for Backdrop<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for dy in 0..area.height {
            let upper_row = (self.scroll as usize + dy as usize) * 2;
            for dx in 0..area.width {
                let col = dx as usize;
                let upper = self.surface.pixel(col, upper_row);
                let lower = self.surface.pixel(col, upper_row + 1);
                if upper.is_none() && lower.is_none() {
                    continue;
                }
                if let Some(cell) = buf.cell_mut((area.x + dx, area.y + dy)) {
                    cell.set_char('▀')
                        .set_fg(upper.unwrap_or(Rgb::BLACK).into())
                        .set_bg(lower.unwrap_or(Rgb::BLACK).into());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Canvas, Surface};
    use crate::viewport::SurfaceSize;
    use ratatui::style::Color;

    #[test]
    fn test_half_blocks_pair_pixel_rows() {
        let mut surface = PixelSurface::new(1.0).unwrap();
        surface.resize(SurfaceSize::new(2.0, 4.0));
        surface.fill_rect(0.0, 1.0, 2.0, 1.0, Rgb::new(255, 0, 0).with_alpha(1.0));

        let area = Rect::new(0, 0, 2, 2);
        let mut buf = Buffer::empty(area);
        Backdrop::new(&surface).render(area, &mut buf);

        let cell = &buf[(0, 0)];
        assert_eq!(cell.symbol(), "▀");
        assert_eq!(cell.fg, Color::Rgb(0, 0, 0));
        assert_eq!(cell.bg, Color::Rgb(255, 0, 0));
    }

    #[test]
    fn test_scroll_offsets_rows() {
        let mut surface = PixelSurface::new(1.0).unwrap();
        surface.resize(SurfaceSize::new(1.0, 4.0));
        surface.fill_rect(0.0, 2.0, 1.0, 1.0, Rgb::WHITE.with_alpha(1.0));

        let area = Rect::new(0, 0, 1, 2);
        let mut buf = Buffer::empty(area);
        Backdrop::new(&surface).scroll(1).render(area, &mut buf);

        assert_eq!(buf[(0, 0)].fg, Color::Rgb(255, 255, 255));
        // Past the end of the surface nothing is drawn.
        assert_eq!(buf[(0, 1)].symbol(), " ");
    }
}
