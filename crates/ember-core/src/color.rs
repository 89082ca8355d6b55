//! Color types shared by the particle field and the page renderer.

use std::{fmt, str::FromStr};

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a color string is not of the form `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color {0:?}, expected #rrggbb")]
pub struct ParseColorError(pub String);

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Attach an opacity to this color.
    pub const fn with_alpha(self, a: f32) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// Linear interpolation towards `other`; `t` is clamped to 0.0-1.0.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }

    /// Composite `src` over this color (source-over with straight alpha).
    pub fn blend(self, src: Rgba) -> Rgb {
        self.lerp(src.rgb(), src.a)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(err());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        Color::Rgb(value.r, value.g, value.b)
    }
}

/// An 8-bit RGB color with a floating point opacity in 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgb::BLACK.with_alpha(0.0);

    /// The color without its opacity.
    pub const fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    /// Interpolate color and opacity towards `other`.
    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let rgb = self.rgb().lerp(other.rgb(), t);
        rgb.with_alpha(self.a + (other.a - self.a) * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!("#ff0000".parse::<Rgb>(), Ok(Rgb::new(255, 0, 0)));
        assert_eq!("#1A2b3C".parse::<Rgb>(), Ok(Rgb::new(0x1a, 0x2b, 0x3c)));
        assert!("ff0000".parse::<Rgb>().is_err());
        assert!("#ff00".parse::<Rgb>().is_err());
        assert!("#gg0000".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let color = Rgb::new(12, 200, 7);
        assert_eq!(color.to_string(), "#0cc807");
        assert_eq!(color.to_string().parse::<Rgb>(), Ok(color));
    }

    #[test]
    fn test_blend_respects_alpha() {
        let red = Rgb::new(255, 0, 0);
        assert_eq!(Rgb::BLACK.blend(red.with_alpha(0.0)), Rgb::BLACK);
        assert_eq!(Rgb::BLACK.blend(red.with_alpha(1.0)), red);
        assert_eq!(Rgb::BLACK.blend(red.with_alpha(0.5)), Rgb::new(128, 0, 0));
    }

    #[test]
    fn test_rgba_lerp_interpolates_alpha() {
        let red = Rgb::new(255, 0, 0);
        let mid = red.with_alpha(0.1).lerp(red.with_alpha(0.0), 0.5);
        assert_eq!(mid.rgb(), red);
        assert!((mid.a - 0.05).abs() < 1e-6);
    }
}
