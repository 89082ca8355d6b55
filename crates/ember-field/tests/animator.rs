use std::time::Duration;

use ember_core::Rgba;
use ember_field::{
    AnimatorState, Canvas, FieldSettings, Particle, ParticleAnimator, PixelSurface,
    RadialGradient, SignalHub, SignalKind, Surface, SurfaceSize,
};
use rand::{SeedableRng, rngs::StdRng};

/// Surface that records every drawing call instead of rasterizing.
#[derive(Debug, Default)]
struct RecordingSurface {
    size: SurfaceSize,
    rects: usize,
    circles: Vec<(f32, f32, f32)>,
    resizes: usize,
}

impl RecordingSurface {
    fn draw_calls(&self) -> usize {
        self.rects + self.circles.len()
    }
}

impl Canvas for RecordingSurface {
    fn fill_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32, color: Rgba) {
        assert_eq!(color.a, 1.0, "background fill must be opaque");
        self.rects += 1;
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, gradient: &RadialGradient) {
        assert_eq!((gradient.cx, gradient.cy, gradient.radius), (cx, cy, radius));
        self.circles.push((cx, cy, radius));
    }
}

impl Surface for RecordingSurface {
    type Context = RecordingSurface;

    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
        self.resizes += 1;
    }

    fn context_2d(&mut self) -> Option<&mut Self::Context> {
        Some(self)
    }
}

/// Surface whose 2D context is never available.
#[derive(Debug, Default)]
struct Headless {
    resizes: usize,
}

impl Surface for Headless {
    type Context = RecordingSurface;

    fn size(&self) -> SurfaceSize {
        SurfaceSize::default()
    }

    fn resize(&mut self, _size: SurfaceSize) {
        self.resizes += 1;
    }

    fn context_2d(&mut self) -> Option<&mut Self::Context> {
        None
    }
}

fn start<S: Surface>(surface: S, size: SurfaceSize, seed: u64) -> (ParticleAnimator<S>, SignalHub) {
    let mut hub = SignalHub::new();
    let mut rng = StdRng::seed_from_u64(seed);
    let animator = ParticleAnimator::start(
        Some(surface),
        &size,
        &mut hub,
        &mut rng,
        &FieldSettings::default(),
    );
    (animator, hub)
}

fn frame_at(i: u64) -> Duration {
    Duration::from_micros(16_667 * i)
}

#[test]
fn test_particle_count_is_constant() {
    let size = SurfaceSize::new(800.0, 600.0);
    let (mut animator, hub) = start(RecordingSurface::default(), size, 11);
    assert_eq!(animator.particles().len(), 25);
    for i in 0..300 {
        if i % 50 == 0 {
            let size = SurfaceSize::new(400.0 + i as f32, 300.0);
            animator.resize(&hub, size);
        }
        animator.frame(&hub, frame_at(i));
        assert_eq!(animator.particles().len(), 25);
    }
}

#[test]
fn test_each_frame_fills_once_then_draws_every_particle_in_order() {
    let (mut animator, hub) = start(RecordingSurface::default(), SurfaceSize::new(800.0, 600.0), 2);
    assert!(animator.frame(&hub, frame_at(0)));

    let positions: Vec<(f32, f32, f32)> = animator
        .particles()
        .iter()
        .map(|p| (p.x(), p.y(), p.radius()))
        .collect();
    let surface = animator.surface().unwrap();
    assert_eq!(surface.rects, 1);
    assert_eq!(surface.circles, positions);
}

#[test]
fn test_attributes_never_change() {
    let (mut animator, hub) = start(RecordingSurface::default(), SurfaceSize::new(640.0, 480.0), 4);
    let before: Vec<((f32, f32), f32, f32)> = animator
        .particles()
        .iter()
        .map(|p| (p.velocity(), p.radius(), p.alpha()))
        .collect();
    for p in animator.particles() {
        assert!((0.02..=0.10).contains(&p.alpha()));
    }
    for i in 0..1_000 {
        animator.frame(&hub, frame_at(i));
    }
    let after: Vec<((f32, f32), f32, f32)> = animator
        .particles()
        .iter()
        .map(|p| (p.velocity(), p.radius(), p.alpha()))
        .collect();
    assert_eq!(before, after);
}

#[test]
fn test_resize_keeps_particles_in_place() {
    let (mut animator, hub) = start(RecordingSurface::default(), SurfaceSize::new(800.0, 600.0), 8);
    let before = animator.particles().to_vec();

    animator.resize(&hub, SurfaceSize::new(0.0, -20.0));
    assert_eq!(animator.particles(), &before[..]);
    let surface = animator.surface().unwrap();
    assert_eq!(surface.size, SurfaceSize::new(0.0, -20.0));
    assert_eq!(surface.resizes, 2);

    // Out-of-bounds particles come back through the wrap rule, not a reset.
    animator.resize(&hub, SurfaceSize::new(100.0, 100.0));
    for i in 0..5_000 {
        animator.frame(&hub, frame_at(i));
    }
    for p in animator.particles() {
        assert!(p.x() >= -p.radius() && p.x() <= 100.0 + p.radius());
        assert!(p.y() >= -p.radius() && p.y() <= 100.0 + p.radius());
    }
}

#[test]
fn test_same_seed_same_layout() {
    let size = SurfaceSize::new(1024.0, 768.0);
    let (a, _) = start(RecordingSurface::default(), size, 42);
    let (b, _) = start(RecordingSurface::default(), size, 42);
    let (c, _) = start(RecordingSurface::default(), size, 43);
    assert_eq!(a.particles(), b.particles());
    assert_ne!(a.particles(), c.particles());
}

#[test]
fn test_still_particles_repaint_identically() {
    let mut hub = SignalHub::new();
    let mut rng = StdRng::seed_from_u64(5);
    let settings = FieldSettings {
        speed: 0.0,
        ..Default::default()
    };
    let surface = PixelSurface::new(4.0).ok();
    let mut animator = ParticleAnimator::start(
        surface,
        &SurfaceSize::new(800.0, 600.0),
        &mut hub,
        &mut rng,
        &settings,
    );

    assert!(animator.frame(&hub, frame_at(0)));
    let first = animator.surface().unwrap().pixels().to_vec();
    assert!(first.iter().any(|p| p.r > 0), "glows should be visible");
    assert!(animator.frame(&hub, frame_at(1)));
    let second = animator.surface().unwrap().pixels().to_vec();
    assert_eq!(first, second);
}

#[test]
fn test_teardown_stops_painting() {
    let (mut animator, mut hub) =
        start(RecordingSurface::default(), SurfaceSize::new(800.0, 600.0), 6);
    animator.frame(&hub, frame_at(0));
    let calls = animator.surface().unwrap().draw_calls();

    animator.teardown(&mut hub);
    assert_eq!(animator.state(), AnimatorState::Stopped);
    assert!(!hub.has_listeners(SignalKind::Frame));
    assert!(!hub.has_listeners(SignalKind::Resize));

    for i in 1..=5 {
        assert!(!animator.frame(&hub, frame_at(i)));
        animator.resize(&hub, SurfaceSize::new(10.0, 10.0));
    }
    let surface = animator.surface().unwrap();
    assert_eq!(surface.draw_calls(), calls);
    assert_eq!(surface.resizes, 1);
}

#[test]
fn test_unavailable_context_is_a_silent_no_op() {
    let (mut animator, mut hub) = start(Headless::default(), SurfaceSize::new(800.0, 600.0), 1);
    assert_eq!(animator.state(), AnimatorState::Inert);
    assert!(animator.particles().is_empty());
    assert!(!hub.has_listeners(SignalKind::Frame));
    assert!(!animator.frame(&hub, frame_at(0)));
    assert_eq!(animator.surface().unwrap().resizes, 0);
    animator.teardown(&mut hub);
    assert_eq!(animator.state(), AnimatorState::Inert);
}

#[test]
fn test_corner_particle_wraps_at_threshold() {
    // 800x600 surface, particle at (790, 590), radius 150, velocity (5, 5).
    let size = SurfaceSize::new(800.0, 600.0);
    let mut p = Particle::new(790.0, 590.0, 5.0, 5.0, 150.0, 0.05);

    p.step(size);
    assert_eq!((p.x(), p.y()), (795.0, 595.0));

    // Both axes sit 10 units inside their edge, so both thresholds
    // (950 and 750) are crossed on step 33: 790 + 5 * 33 = 955.
    for _ in 2..33 {
        p.step(size);
    }
    assert_eq!((p.x(), p.y()), (950.0, 750.0));
    assert!(p.step(size));
    assert_eq!((p.x(), p.y()), (-150.0, -150.0));

    // After wrapping the particle keeps drifting from the far side.
    assert!(!p.step(size));
    assert_eq!((p.x(), p.y()), (-145.0, -145.0));
}
