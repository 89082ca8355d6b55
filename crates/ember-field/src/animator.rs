//! The particle field animator.

use std::time::Duration;

use ember_core::Rgb;
use rand::Rng;
use tracing::{debug, trace};

use crate::canvas::{Canvas, Surface};
use crate::particle::{FieldSettings, Particle};
use crate::signal::{SignalHub, SignalKind, Subscription};
use crate::viewport::{SurfaceSize, SurfaceSizeProvider};

/// Amount added to the elapsed accumulator every frame.
pub const ELAPSED_STEP: f32 = 0.005;

/// Lifecycle of a [`ParticleAnimator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimatorState {
    /// No drawing context was available at start; nothing is drawn.
    Inert,
    /// Subscribed to frames and resizes.
    Running,
    /// Listening for resizes only.
    Paused,
    /// Torn down; particles discarded.
    Stopped,
}

/// Paints a field of drifting red glows onto a surface every frame.
#[derive(Debug)]
pub struct ParticleAnimator<S> {
    surface: Option<S>,
    particles: Vec<Particle>,
    accent: Rgb,
    /// Reserved time accumulator; does not affect output.
    elapsed: f32,
    last_frame: Option<Duration>,
    frame_sub: Option<Subscription>,
    resize_sub: Option<Subscription>,
    state: AnimatorState,
}

impl<S: Surface> ParticleAnimator<S> {
    /// Size the surface to the viewport, spawn the particles and subscribe
    /// to frame and resize signals.
    ///
    /// Without a surface, or with a surface that has no 2D context, the
    /// animator is returned in the [`AnimatorState::Inert`] state and never
    /// draws.
    pub fn start<P, R>(
        surface: Option<S>,
        viewport: &P,
        hub: &mut SignalHub,
        rng: &mut R,
        settings: &FieldSettings,
    ) -> Self
    where
        P: SurfaceSizeProvider + ?Sized,
        R: Rng + ?Sized,
    {
        let mut animator = Self {
            surface,
            particles: Vec::new(),
            accent: settings.accent,
            elapsed: 0.0,
            last_frame: None,
            frame_sub: None,
            resize_sub: None,
            state: AnimatorState::Inert,
        };

        let Some(surface) = animator.surface.as_mut() else {
            debug!("no drawing surface, particle field disabled");
            return animator;
        };
        if surface.context_2d().is_none() {
            debug!("no 2d context, particle field disabled");
            return animator;
        }

        let size = viewport.surface_size();
        surface.resize(size);
        animator.particles = (0..settings.count)
            .map(|_| Particle::spawn(rng, size, settings))
            .collect();
        animator.resize_sub = Some(hub.subscribe(SignalKind::Resize));
        animator.frame_sub = Some(hub.subscribe(SignalKind::Frame));
        animator.state = AnimatorState::Running;
        debug!(
            count = animator.particles.len(),
            width = size.width,
            height = size.height,
            "particle field started"
        );
        animator
    }

    pub fn state(&self) -> AnimatorState {
        self.state
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Time value of the most recent painted frame.
    pub fn last_frame(&self) -> Option<Duration> {
        self.last_frame
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Apply a new viewport size to the surface.
    ///
    /// Particles are left where they are; any now outside the surface come
    /// back through the wrap rule on later frames.
    pub fn resize(&mut self, hub: &SignalHub, size: SurfaceSize) {
        if !self.resize_sub.as_ref().is_some_and(|s| hub.is_live(s)) {
            return;
        }
        if let Some(surface) = self.surface.as_mut() {
            surface.resize(size);
            debug!(width = size.width, height = size.height, "particle surface resized");
        }
    }

    /// Advance every particle one step and repaint the surface.
    ///
    /// Returns whether anything was painted. Nothing happens unless the
    /// frame subscription is live.
    pub fn frame(&mut self, hub: &SignalHub, now: Duration) -> bool {
        if !self.frame_sub.as_ref().is_some_and(|s| hub.is_live(s)) {
            return false;
        }
        let Some(surface) = self.surface.as_mut() else {
            return false;
        };
        let size = surface.size();
        let Some(ctx) = surface.context_2d() else {
            return false;
        };

        if let Some(last) = self.last_frame
            && now < last
        {
            trace!(?now, ?last, "frame time went backwards");
        }
        self.last_frame = Some(now);
        self.elapsed += ELAPSED_STEP;

        ctx.fill_rect(0.0, 0.0, size.width, size.height, Rgb::BLACK.with_alpha(1.0));
        for (i, particle) in self.particles.iter_mut().enumerate() {
            if particle.step(size) {
                trace!(particle = i, x = particle.x(), y = particle.y(), "particle wrapped");
            }
            let glow = particle.glow(self.accent);
            ctx.fill_circle(particle.x(), particle.y(), particle.radius(), &glow);
        }
        true
    }

    /// Stop receiving frames but keep the particles and resize listener.
    pub fn pause(&mut self, hub: &mut SignalHub) {
        if self.state != AnimatorState::Running {
            return;
        }
        if let Some(sub) = self.frame_sub.take() {
            hub.unsubscribe(sub);
        }
        self.state = AnimatorState::Paused;
        debug!("particle field paused");
    }

    /// Subscribe to frames again. Does nothing while already subscribed, and
    /// never revives an inert or stopped animator.
    pub fn resume(&mut self, hub: &mut SignalHub) {
        if self.state != AnimatorState::Paused || self.frame_sub.is_some() {
            return;
        }
        self.frame_sub = Some(hub.subscribe(SignalKind::Frame));
        self.state = AnimatorState::Running;
        debug!("particle field resumed");
    }

    /// Cancel both subscriptions and discard the particles.
    ///
    /// Safe to call more than once.
    pub fn teardown(&mut self, hub: &mut SignalHub) {
        if let Some(sub) = self.frame_sub.take() {
            hub.unsubscribe(sub);
        }
        if let Some(sub) = self.resize_sub.take() {
            hub.unsubscribe(sub);
        }
        if matches!(self.state, AnimatorState::Running | AnimatorState::Paused) {
            self.particles.clear();
            self.state = AnimatorState::Stopped;
            debug!("particle field stopped");
        }
    }
}
