//! Tweens and timelines driving the reveal animations.
//!
//! A [`Pose`] is an offset from an element's resting place in CSS pixels,
//! plus opacity and scale. The page converts pixels to cells when it draws.

use crate::ease::Ease;

/// Transform applied to a block on top of its laid-out position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub dx: f32,
    pub dy: f32,
    pub opacity: f32,
    pub scale: f32,
}

impl Pose {
    /// Laid-out position, fully visible.
    pub const REST: Pose = Pose {
        dx: 0.0,
        dy: 0.0,
        opacity: 1.0,
        scale: 1.0,
    };

    /// Resting position at zero opacity.
    pub const fn faded() -> Self {
        Pose {
            opacity: 0.0,
            ..Pose::REST
        }
    }

    pub const fn offset(mut self, dx: f32, dy: f32) -> Self {
        self.dx = dx;
        self.dy = dy;
        self
    }

    pub const fn scaled(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Apply `other` on top of this pose.
    pub fn compose(self, other: Pose) -> Pose {
        Pose {
            dx: self.dx + other.dx,
            dy: self.dy + other.dy,
            opacity: self.opacity * other.opacity,
            scale: self.scale * other.scale,
        }
    }

    pub fn lerp(self, other: Pose, t: f32) -> Pose {
        Pose {
            dx: self.dx + (other.dx - self.dx) * t,
            dy: self.dy + (other.dy - self.dy) * t,
            opacity: self.opacity + (other.opacity - self.opacity) * t,
            scale: self.scale + (other.scale - self.scale) * t,
        }
    }

    /// Whether anything of the element would be seen.
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.02 && self.scale > 0.02
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::REST
    }
}

/// Animation of one element from a pose back to rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: Pose,
    pub to: Pose,
    /// Offset in seconds from the start of the timeline.
    pub start: f32,
    pub duration: f32,
    pub ease: Ease,
}

impl Tween {
    /// Tween from `pose` to [`Pose::REST`] over 0.8s with an expo ease.
    pub fn reveal(pose: Pose) -> Self {
        Self {
            from: pose,
            to: Pose::REST,
            start: 0.0,
            duration: 0.8,
            ease: Ease::ExpoOut,
        }
    }

    /// Tween from [`Pose::REST`] out to `pose`.
    pub fn towards(pose: Pose) -> Self {
        Self {
            from: Pose::REST,
            to: pose,
            ..Self::reveal(Pose::REST)
        }
    }

    pub fn at(mut self, start: f32) -> Self {
        self.start = start;
        self
    }

    pub fn lasting(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn end(&self) -> f32 {
        self.start + self.duration
    }

    /// Pose at `time` seconds into the timeline.
    pub fn pose_at(&self, time: f32) -> Pose {
        if time <= self.start {
            return self.from;
        }
        if self.duration <= 0.0 || time >= self.end() {
            return self.to;
        }
        let t = (time - self.start) / self.duration;
        self.from.lerp(self.to, self.ease.apply(t))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Direction {
    #[default]
    Forward,
    Reverse,
}

/// A group of tweens sharing one playhead.
///
/// A fresh timeline sits at time zero and is paused, so every element
/// shows its starting pose until something plays it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    tweens: Vec<Tween>,
    time: f32,
    direction: Direction,
    playing: bool,
    yoyo: bool,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Timeline that, once played, runs back and forth forever.
    pub fn yoyo() -> Self {
        Self {
            yoyo: true,
            ..Self::default()
        }
    }

    pub fn is_looping(&self) -> bool {
        self.yoyo
    }

    /// Add a tween, returning its index.
    pub fn push(&mut self, tween: Tween) -> usize {
        self.tweens.push(tween);
        self.tweens.len() - 1
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Length of the timeline in seconds.
    pub fn duration(&self) -> f32 {
        self.tweens.iter().map(Tween::end).fold(0.0, f32::max)
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Play forwards from the current time.
    pub fn play(&mut self) {
        self.direction = Direction::Forward;
        let duration = self.duration();
        self.playing = self.time < duration || (self.yoyo && duration > 0.0);
    }

    /// Play backwards from the current time.
    pub fn reverse(&mut self) {
        self.direction = Direction::Reverse;
        self.playing = self.time > 0.0;
    }

    /// Jump to the end. A looping timeline stops at its start instead.
    pub fn finish(&mut self) {
        self.time = if self.yoyo { 0.0 } else { self.duration() };
        self.direction = Direction::Forward;
        self.playing = false;
    }

    /// Advance the playhead by `dt` seconds in the current direction.
    pub fn tick(&mut self, dt: f32) {
        if !self.playing {
            return;
        }
        let duration = self.duration();
        if duration <= 0.0 {
            self.playing = false;
            return;
        }
        let mut dt = dt.max(0.0);
        loop {
            match self.direction {
                Direction::Forward => {
                    let left = duration - self.time;
                    if dt < left {
                        self.time += dt;
                        return;
                    }
                    self.time = duration;
                    dt -= left;
                    if !self.yoyo {
                        self.playing = false;
                        return;
                    }
                    self.direction = Direction::Reverse;
                }
                Direction::Reverse => {
                    if dt < self.time {
                        self.time -= dt;
                        return;
                    }
                    dt -= self.time;
                    self.time = 0.0;
                    if !self.yoyo {
                        self.playing = false;
                        return;
                    }
                    self.direction = Direction::Forward;
                }
            }
            // Long frames fold into a single period.
            dt %= 2.0 * duration;
        }
    }

    /// Take over playhead state from an earlier build of the same timeline.
    pub fn carry_from(&mut self, other: &Timeline) {
        self.time = other.time.min(self.duration());
        self.direction = other.direction;
        self.playing = other.playing;
    }

    /// Pose of the tween at `index`, or rest for an unknown index.
    pub fn pose(&self, index: usize) -> Pose {
        self.tweens
            .get(index)
            .map(|tween| tween.pose_at(self.time))
            .unwrap_or(Pose::REST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide_up() -> Tween {
        Tween::reveal(Pose::faded().offset(0.0, 30.0))
            .at(0.5)
            .lasting(1.0)
            .ease(Ease::Linear)
    }

    #[test]
    fn test_tween_holds_before_start_and_after_end() {
        let tween = slide_up();
        assert_eq!(tween.pose_at(0.0), tween.from);
        assert_eq!(tween.pose_at(1.5), Pose::REST);
        let mid = tween.pose_at(1.0);
        assert!((mid.dy - 15.0).abs() < 1e-4);
        assert!((mid.opacity - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_fresh_timeline_shows_start_pose() {
        let mut timeline = Timeline::new();
        let i = timeline.push(slide_up());
        assert!(!timeline.pose(i).is_visible());
        timeline.tick(10.0);
        assert!(!timeline.pose(i).is_visible());
    }

    #[test]
    fn test_play_then_reverse() {
        let mut timeline = Timeline::new();
        let i = timeline.push(slide_up());
        timeline.play();
        timeline.tick(0.9);
        timeline.tick(0.9);
        assert_eq!(timeline.pose(i), Pose::REST);
        assert!(!timeline.is_playing());

        timeline.reverse();
        timeline.tick(0.5);
        assert!(timeline.is_playing());
        assert!((timeline.time() - 1.0).abs() < 1e-4);
        timeline.tick(5.0);
        assert_eq!(timeline.time(), 0.0);
        assert!(!timeline.is_playing());
    }

    #[test]
    fn test_staggered_tweens() {
        let mut timeline = Timeline::new();
        for n in 0..3 {
            timeline.push(slide_up().at(n as f32 * 0.1));
        }
        assert!((timeline.duration() - 1.2).abs() < 1e-4);
        timeline.play();
        timeline.tick(0.15);
        assert!(timeline.pose(0).opacity > timeline.pose(1).opacity);
        assert_eq!(timeline.pose(2).opacity, 0.0);
    }

    #[test]
    fn test_finish_and_carry() {
        let mut old = Timeline::new();
        old.push(slide_up());
        old.finish();
        assert_eq!(old.time(), old.duration());

        let mut rebuilt = Timeline::new();
        let i = rebuilt.push(slide_up());
        rebuilt.carry_from(&old);
        assert_eq!(rebuilt.pose(i), Pose::REST);
        assert_eq!(rebuilt.pose(99), Pose::REST);
    }

    #[test]
    fn test_yoyo_swings_back_and_forth() {
        let mut timeline = Timeline::yoyo();
        let i = timeline.push(
            Tween::towards(Pose::REST.offset(0.0, -16.0))
                .lasting(4.0)
                .ease(Ease::SineInOut),
        );
        timeline.play();
        timeline.tick(4.0);
        assert_eq!(timeline.pose(i).dy, -16.0);
        assert!(timeline.is_playing());

        timeline.tick(2.0);
        assert!((timeline.pose(i).dy + 8.0).abs() < 1e-3);
        timeline.tick(2.0);
        assert_eq!(timeline.pose(i), Pose::REST);

        // A long frame still lands inside the loop.
        timeline.tick(41.0);
        assert!((timeline.time() - 1.0).abs() < 1e-3);
        assert!(timeline.is_playing());
    }

    #[test]
    fn test_finished_yoyo_rests_at_start() {
        let mut timeline = Timeline::yoyo();
        let i = timeline.push(Tween::towards(Pose::REST.scaled(1.02)).lasting(4.0));
        timeline.play();
        timeline.tick(1.5);
        timeline.finish();
        assert_eq!(timeline.pose(i), Pose::REST);
        assert!(!timeline.is_playing());
    }

    #[test]
    fn test_compose_adds_offsets_and_multiplies_opacity() {
        let intro = Pose::faded().offset(4.0, 10.0);
        let float = Pose::REST.offset(0.0, -16.0).scaled(1.02);
        let both = intro.lerp(Pose::REST, 0.5).compose(float);
        assert_eq!(both.dx, 2.0);
        assert_eq!(both.dy, -11.0);
        assert_eq!(both.opacity, 0.5);
        assert!((both.scale - 1.02).abs() < 1e-6);
    }
}
