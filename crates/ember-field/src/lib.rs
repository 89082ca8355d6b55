//! Drifting particle glow background for the ember terminal portfolio.
//!
//! A [`ParticleAnimator`] owns a fixed set of soft red glows that drift
//! across a [`Surface`], wrapping at the edges, and repaints the whole
//! surface on every frame signal. Hosts drive it through a [`SignalHub`],
//! supply the viewport size through [`SurfaceSizeProvider`] and inject the
//! random source used to lay the particles out.
//!
//! [`PixelSurface`] is a software raster implementation of [`Surface`] and
//! [`Backdrop`] draws one into a ratatui buffer.

mod animator;
mod backdrop;
mod canvas;
mod error;
mod gradient;
mod particle;
mod raster;
mod signal;
mod viewport;

pub use animator::{AnimatorState, ELAPSED_STEP, ParticleAnimator};
pub use backdrop::Backdrop;
pub use canvas::{Canvas, Surface};
pub use error::{Error, Result};
pub use gradient::{ColorStop, RadialGradient};
pub use particle::{FieldSettings, Particle};
pub use raster::PixelSurface;
pub use signal::{SignalHub, SignalKind, Subscription};
pub use viewport::{SurfaceSize, SurfaceSizeProvider};
