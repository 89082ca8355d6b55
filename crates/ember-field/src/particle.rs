//! A single drifting glow and the settings used to spawn a field of them.

use ember_core::Rgb;
use rand::Rng;

use crate::error::{Error, Result};
use crate::gradient::RadialGradient;
use crate::viewport::SurfaceSize;

/// Parameters for generating a particle field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSettings {
    /// Number of particles, fixed for the life of a field.
    pub count: usize,
    /// Maximum absolute velocity per axis, in logical units per frame.
    pub speed: f32,
    pub radius_min: f32,
    pub radius_max: f32,
    pub alpha_min: f32,
    pub alpha_max: f32,
    /// Hue shared by every particle.
    pub accent: Rgb,
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            count: 25,
            speed: 0.25,
            radius_min: 100.0,
            radius_max: 250.0,
            alpha_min: 0.02,
            alpha_max: 0.10,
            accent: Rgb::new(255, 0, 0),
        }
    }
}

impl FieldSettings {
    /// Check that every range is well formed.
    pub fn validate(&self) -> Result<()> {
        if !(self.speed.is_finite() && self.speed >= 0.0) {
            return Err(Error::InvalidSettings(format!(
                "speed must be a non-negative number, got {}",
                self.speed
            )));
        }
        if !(self.radius_min > 0.0 && self.radius_min <= self.radius_max) {
            return Err(Error::InvalidSettings(format!(
                "radius range {}..{} must be positive and ordered",
                self.radius_min, self.radius_max
            )));
        }
        if !(self.alpha_min > 0.0 && self.alpha_min <= self.alpha_max && self.alpha_max <= 1.0) {
            return Err(Error::InvalidSettings(format!(
                "alpha range {}..{} must lie within (0, 1] and be ordered",
                self.alpha_min, self.alpha_max
            )));
        }
        Ok(())
    }
}

/// Uniform sample in `[0, 1)`.
fn unit<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.gen_range(0.0..1.0)
}

/// Uniform sample in `[lo, hi)`; degenerate ranges return `lo`.
fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    lo + unit(rng) * (hi - lo).max(0.0)
}

/// A soft circular glow drifting across the surface.
///
/// Only the position changes after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    radius: f32,
    alpha: f32,
}

impl Particle {
    pub fn new(x: f32, y: f32, vx: f32, vy: f32, radius: f32, alpha: f32) -> Self {
        Self {
            x,
            y,
            vx,
            vy,
            radius,
            alpha,
        }
    }

    /// Create a particle at a random position inside `size`.
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        size: SurfaceSize,
        settings: &FieldSettings,
    ) -> Self {
        let x = uniform(rng, 0.0, size.width);
        let y = uniform(rng, 0.0, size.height);
        let vx = uniform(rng, -settings.speed, settings.speed);
        let vy = uniform(rng, -settings.speed, settings.speed);
        let radius = uniform(rng, settings.radius_min, settings.radius_max);
        let alpha = uniform(rng, settings.alpha_min, settings.alpha_max);
        Self::new(x, y, vx, vy, radius, alpha)
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn velocity(&self) -> (f32, f32) {
        (self.vx, self.vy)
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Advance one frame and wrap around the edges of `size`.
    ///
    /// Each axis wraps on its own once the whole glow has left the surface:
    /// past the low edge it reappears at `extent + radius`, past the high
    /// edge at `-radius`. Returns true if either axis wrapped.
    pub fn step(&mut self, size: SurfaceSize) -> bool {
        self.x += self.vx;
        self.y += self.vy;
        let wrapped_x = wrap(&mut self.x, size.width, self.radius);
        let wrapped_y = wrap(&mut self.y, size.height, self.radius);
        wrapped_x || wrapped_y
    }

    /// The radial glow for this particle in `color`: full alpha at the
    /// center, half at mid radius, transparent at the rim.
    pub fn glow(&self, color: Rgb) -> RadialGradient {
        RadialGradient::new(self.x, self.y, self.radius)
            .with_stop(0.0, color.with_alpha(self.alpha))
            .with_stop(0.5, color.with_alpha(self.alpha * 0.5))
            .with_stop(1.0, color.with_alpha(0.0))
    }
}

fn wrap(pos: &mut f32, extent: f32, radius: f32) -> bool {
    if *pos < -radius {
        *pos = extent + radius;
        true
    } else if *pos > extent + radius {
        *pos = -radius;
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_default_settings_are_valid() {
        assert!(FieldSettings::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_ranges() {
        let settings = FieldSettings {
            radius_min: 300.0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());

        let settings = FieldSettings {
            alpha_max: 1.5,
            ..Default::default()
        };
        assert!(settings.validate().is_err());

        let settings = FieldSettings {
            speed: f32::NAN,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_spawn_respects_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let settings = FieldSettings::default();
        let size = SurfaceSize::new(800.0, 600.0);
        for _ in 0..500 {
            let p = Particle::spawn(&mut rng, size, &settings);
            assert!((0.0..800.0).contains(&p.x()));
            assert!((0.0..600.0).contains(&p.y()));
            let (vx, vy) = p.velocity();
            assert!((-0.25..0.25).contains(&vx));
            assert!((-0.25..0.25).contains(&vy));
            assert!((100.0..250.0).contains(&p.radius()));
            assert!((0.02..=0.10).contains(&p.alpha()));
        }
    }

    #[test]
    fn test_spawn_on_empty_surface_does_not_panic() {
        let mut rng = StdRng::seed_from_u64(1);
        let p = Particle::spawn(&mut rng, SurfaceSize::new(0.0, -5.0), &FieldSettings::default());
        assert_eq!((p.x(), p.y()), (0.0, 0.0));
    }

    #[test]
    fn test_wrap_high_edge_resets_exactly() {
        let size = SurfaceSize::new(800.0, 600.0);
        let mut p = Particle::new(949.0, 300.0, 2.0, 0.0, 150.0, 0.05);
        assert!(p.step(size));
        assert_eq!(p.x(), -150.0);
        assert_eq!(p.y(), 300.0);
    }

    #[test]
    fn test_wrap_low_edge_resets_exactly() {
        let size = SurfaceSize::new(800.0, 600.0);
        let mut p = Particle::new(400.0, -100.5, 0.0, -0.5, 100.0, 0.05);
        assert!(p.step(size));
        assert_eq!(p.y(), 700.0);
        assert_eq!(p.x(), 400.0);
    }

    #[test]
    fn test_partially_visible_particle_does_not_wrap() {
        let size = SurfaceSize::new(800.0, 600.0);
        let mut p = Particle::new(-149.0, 0.0, -0.5, 0.0, 150.0, 0.05);
        assert!(!p.step(size));
        assert_eq!(p.x(), -149.5);
    }

    #[test]
    fn test_glow_stops() {
        let p = Particle::new(10.0, 20.0, 0.0, 0.0, 100.0, 0.08);
        let glow = p.glow(Rgb::new(255, 0, 0));
        let alphas: Vec<f32> = glow.stops().iter().map(|s| s.color.a).collect();
        assert_eq!(alphas, vec![0.08, 0.04, 0.0]);
        assert_eq!((glow.cx, glow.cy, glow.radius), (10.0, 20.0, 100.0));
    }
}
