//! Radial color gradients.

use ember_core::Rgba;

/// A color at a relative position along a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    /// Position in 0.0 (center) to 1.0 (outer radius).
    pub offset: f32,
    pub color: Rgba,
}

/// A circular gradient whose color depends on the distance from its center.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub cx: f32,
    pub cy: f32,
    pub radius: f32,
    stops: Vec<ColorStop>,
}

impl RadialGradient {
    pub fn new(cx: f32, cy: f32, radius: f32) -> Self {
        Self {
            cx,
            cy,
            radius,
            stops: Vec::with_capacity(3),
        }
    }

    /// Add a stop, keeping stops ordered by offset. Offsets are clamped to
    /// 0.0-1.0; a stop at an existing offset goes after the earlier ones.
    pub fn add_color_stop(&mut self, offset: f32, color: Rgba) {
        let offset = offset.clamp(0.0, 1.0);
        let at = self.stops.partition_point(|s| s.offset <= offset);
        self.stops.insert(at, ColorStop { offset, color });
    }

    /// Builder form of [`RadialGradient::add_color_stop`].
    pub fn with_stop(mut self, offset: f32, color: Rgba) -> Self {
        self.add_color_stop(offset, color);
        self
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Color at `distance` from the center.
    ///
    /// Between stops the color and opacity are interpolated linearly; before
    /// the first and past the last stop the nearest stop's color is used.
    pub fn sample(&self, distance: f32) -> Rgba {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return Rgba::TRANSPARENT;
        };
        let t = if self.radius > 0.0 {
            distance / self.radius
        } else {
            1.0
        };
        if t <= first.offset {
            return first.color;
        }
        if t >= last.offset {
            return last.color;
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.offset {
                let span = b.offset - a.offset;
                if span <= f32::EPSILON {
                    return b.color;
                }
                return a.color.lerp(b.color, (t - a.offset) / span);
            }
        }
        last.color
    }

    /// Color at the point `(x, y)`.
    pub fn color_at(&self, x: f32, y: f32) -> Rgba {
        let (dx, dy) = (x - self.cx, y - self.cy);
        self.sample((dx * dx + dy * dy).sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_core::Rgb;

    const RED: Rgb = Rgb::new(255, 0, 0);

    fn glow() -> RadialGradient {
        RadialGradient::new(0.0, 0.0, 100.0)
            .with_stop(0.0, RED.with_alpha(0.1))
            .with_stop(0.5, RED.with_alpha(0.05))
            .with_stop(1.0, RED.with_alpha(0.0))
    }

    #[test]
    fn test_sample_at_stops() {
        let g = glow();
        assert!((g.sample(0.0).a - 0.1).abs() < 1e-6);
        assert!((g.sample(50.0).a - 0.05).abs() < 1e-6);
        assert_eq!(g.sample(100.0).a, 0.0);
        assert_eq!(g.sample(500.0).a, 0.0);
    }

    #[test]
    fn test_sample_interpolates_between_stops() {
        let g = glow();
        assert!((g.sample(25.0).a - 0.075).abs() < 1e-6);
        assert!((g.color_at(0.0, 75.0).a - 0.025).abs() < 1e-6);
    }

    #[test]
    fn test_stops_stay_sorted() {
        let g = RadialGradient::new(0.0, 0.0, 1.0)
            .with_stop(1.0, Rgba::TRANSPARENT)
            .with_stop(0.0, RED.with_alpha(1.0))
            .with_stop(2.0, RED.with_alpha(0.5));
        let offsets: Vec<f32> = g.stops().iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_empty_gradient_is_transparent() {
        assert_eq!(RadialGradient::new(0.0, 0.0, 10.0).sample(1.0), Rgba::TRANSPARENT);
    }
}
