//! Scroll-position triggers for reveal timelines.

/// What happens when an element scrolls back above its start line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// Play on enter, reverse on leaving back.
    PlayReverse,
    /// Play the first time the element enters, then stay revealed.
    PlayOnce,
}

/// Action requested by a trigger crossing its start line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerAction {
    Play,
    Reverse,
}

/// Fires when an element's top crosses a line in the viewport.
///
/// `start` is the line as a fraction of the viewport height, so 0.8 is
/// "top of the element reaches 80% down the screen".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTrigger {
    start: f32,
    toggle: Toggle,
    entered: bool,
    fired: bool,
}

impl ScrollTrigger {
    pub fn new(start: f32, toggle: Toggle) -> Self {
        Self {
            start: start.clamp(0.0, 1.0),
            toggle,
            entered: false,
            fired: false,
        }
    }

    /// Whether the element is currently past the start line.
    pub fn is_entered(&self) -> bool {
        self.entered
    }

    /// Feed the element's top in viewport rows.
    pub fn update(&mut self, top: f32, viewport: f32) -> Option<TriggerAction> {
        let inside = top <= self.start * viewport;
        match (self.entered, inside) {
            (false, true) => {
                self.entered = true;
                if self.toggle == Toggle::PlayOnce && self.fired {
                    return None;
                }
                self.fired = true;
                Some(TriggerAction::Play)
            }
            (true, false) => {
                self.entered = false;
                match self.toggle {
                    Toggle::PlayReverse => Some(TriggerAction::Reverse),
                    Toggle::PlayOnce => None,
                }
            }
            _ => None,
        }
    }
}

/// Progress tied to the scroll position of an element, eased over time.
///
/// Progress is 0 when the element's top reaches `start` of the viewport
/// and 1 when its bottom reaches `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scrub {
    start: f32,
    end: f32,
    smoothing: f32,
    target: f32,
    value: f32,
}

impl Scrub {
    /// Scrub from "top 70%" to "bottom 30%" with one second of smoothing.
    pub fn new() -> Self {
        Self::with_range(0.7, 0.3, 1.0)
    }

    pub fn with_range(start: f32, end: f32, smoothing: f32) -> Self {
        Self {
            start,
            end,
            smoothing: smoothing.max(0.0),
            target: 0.0,
            value: 0.0,
        }
    }

    /// Recompute the target from the element's top and height in rows.
    pub fn update(&mut self, top: f32, height: f32, viewport: f32) {
        let begin = self.start * viewport;
        let finish = self.end * viewport - height;
        let span = begin - finish;
        self.target = if span <= 0.0 {
            if top <= begin { 1.0 } else { 0.0 }
        } else {
            ((begin - top) / span).clamp(0.0, 1.0)
        };
    }

    /// Move the displayed progress towards the target.
    pub fn tick(&mut self, dt: f32) {
        if self.smoothing <= 0.0 {
            self.value = self.target;
            return;
        }
        let k = (dt / self.smoothing).clamp(0.0, 1.0);
        self.value += (self.target - self.value) * k;
        if (self.target - self.value).abs() < 1e-3 {
            self.value = self.target;
        }
    }

    /// Jump straight to the target.
    pub fn settle(&mut self) {
        self.value = self.target;
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn progress(&self) -> f32 {
        self.value
    }
}

impl Default for Scrub {
    fn default() -> Self {
        Self::new()
    }
}
