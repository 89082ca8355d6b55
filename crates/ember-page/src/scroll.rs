//! Eased document scrolling.

/// Default time for a scroll to settle, in seconds.
pub const SCROLL_DURATION: f32 = 1.2;

fn settle_curve(t: f32) -> f32 {
    (1.001 - 2f32.powf(-10.0 * t)).min(1.0)
}

/// Scroll position that glides to its target over a fixed duration.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothScroll {
    from: f32,
    target: f32,
    current: f32,
    elapsed: f32,
    duration: f32,
    max: f32,
    instant: bool,
}

impl SmoothScroll {
    pub fn new(instant: bool) -> Self {
        Self {
            from: 0.0,
            target: 0.0,
            current: 0.0,
            elapsed: 0.0,
            duration: SCROLL_DURATION,
            max: 0.0,
            instant,
        }
    }

    /// Set the largest reachable offset, pulling the position back in.
    pub fn set_max(&mut self, max: f32) {
        self.max = max.max(0.0);
        self.target = self.target.min(self.max);
        self.current = self.current.min(self.max);
        self.from = self.from.min(self.max);
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Start gliding towards `target`, clamped to the document.
    pub fn scroll_to(&mut self, target: f32) {
        self.target = target.clamp(0.0, self.max);
        self.from = self.current;
        self.elapsed = 0.0;
        if self.instant {
            self.current = self.target;
        }
    }

    /// Move the target by `delta` rows.
    pub fn scroll_by(&mut self, delta: f32) {
        self.scroll_to(self.target + delta);
    }

    pub fn tick(&mut self, dt: f32) {
        if self.current == self.target {
            return;
        }
        self.elapsed += dt;
        let t = (self.elapsed / self.duration).min(1.0);
        self.current = self.from + (self.target - self.from) * settle_curve(t);
        if t >= 1.0 {
            self.current = self.target;
        }
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn position(&self) -> f32 {
        self.current
    }

    /// Current position in whole rows.
    pub fn offset(&self) -> u16 {
        self.current.round().clamp(0.0, u16::MAX as f32) as u16
    }

    pub fn is_moving(&self) -> bool {
        self.current != self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glides_to_target() {
        let mut scroll = SmoothScroll::new(false);
        scroll.set_max(100.0);
        scroll.scroll_to(40.0);
        assert_eq!(scroll.offset(), 0);
        scroll.tick(0.3);
        assert!(scroll.position() > 20.0 && scroll.position() < 40.0);
        scroll.tick(1.0);
        assert_eq!(scroll.position(), 40.0);
        assert!(!scroll.is_moving());
    }

    #[test]
    fn test_target_is_clamped() {
        let mut scroll = SmoothScroll::new(true);
        scroll.set_max(10.0);
        scroll.scroll_by(-5.0);
        assert_eq!(scroll.offset(), 0);
        scroll.scroll_by(50.0);
        assert_eq!(scroll.offset(), 10);
        scroll.set_max(4.0);
        assert_eq!(scroll.offset(), 4);
    }

    #[test]
    fn test_scroll_by_accumulates_on_target() {
        let mut scroll = SmoothScroll::new(false);
        scroll.set_max(100.0);
        scroll.scroll_by(3.0);
        scroll.scroll_by(3.0);
        assert_eq!(scroll.target(), 6.0);
    }
}
