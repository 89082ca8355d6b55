//! Easing curves for reveal animations.

use std::f32::consts::PI;

/// An easing curve mapping linear progress to eased progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ease {
    Linear,
    ExpoOut,
    ExpoInOut,
    /// Cubic ease out.
    Power2Out,
    /// Quartic ease out.
    Power3Out,
    /// Overshoots by the given amount before settling.
    BackOut(f32),
    SineInOut,
}

impl Ease {
    /// Eased value of `t`, which is clamped to 0.0-1.0 first.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::ExpoOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2f32.powf(-10.0 * t)
                }
            }
            Ease::ExpoInOut => {
                if t <= 0.0 {
                    0.0
                } else if t >= 1.0 {
                    1.0
                } else if t < 0.5 {
                    2f32.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2f32.powf(-20.0 * t + 10.0)) / 2.0
                }
            }
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
            Ease::BackOut(s) => {
                let u = t - 1.0;
                1.0 + (s + 1.0) * u.powi(3) + s * u.powi(2)
            }
            Ease::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
        }
    }
}
