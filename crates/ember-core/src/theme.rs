//! Brand palette used by the page renderer.

use crate::color::Rgb;

/// The fixed color palette of the portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Page background.
    pub background: Rgb,
    /// Card and badge background.
    pub surface: Rgb,
    /// Card borders and separators.
    pub border: Rgb,
    /// Body text.
    pub muted: Rgb,
    /// Headings.
    pub text: Rgb,
    /// Brand accent.
    pub accent: Rgb,
}

impl Theme {
    pub const DARK: Theme = Theme {
        background: Rgb::new(0, 0, 0),
        surface: Rgb::new(17, 17, 17),
        border: Rgb::new(42, 42, 42),
        muted: Rgb::new(160, 160, 160),
        text: Rgb::new(245, 245, 245),
        accent: Rgb::new(230, 30, 36),
    };

    /// Fade `color` towards the page background; `opacity` 1.0 keeps it.
    pub fn fade(&self, color: Rgb, opacity: f32) -> Rgb {
        self.background.lerp(color, opacity)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::DARK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_endpoints() {
        let theme = Theme::DARK;
        assert_eq!(theme.fade(theme.accent, 1.0), theme.accent);
        assert_eq!(theme.fade(theme.accent, 0.0), theme.background);
    }
}
