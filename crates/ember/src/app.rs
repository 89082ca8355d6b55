use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use ember_config::Config;
use ember_core::{Section, Theme};
use ember_field::{
    Backdrop, ParticleAnimator, PixelSurface, SignalHub, SignalKind, SurfaceSizeProvider,
};
use ember_page::Page;
use rand::{SeedableRng, rngs::StdRng};
use ratatui::{DefaultTerminal, Frame, layout::Size};
use tracing::{debug, info};

use crate::viewport::TerminalViewport;

/// Rows moved per arrow key or wheel notch.
const SCROLL_STEP: i32 = 3;
/// How long to wait for input while nothing on screen moves.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    frame_interval: Duration,
    /// When the application started; frame times are measured from here.
    epoch: Instant,
    hub: SignalHub,
    viewport: TerminalViewport,
    field: ParticleAnimator<PixelSurface>,
    page: Page,
}

impl App {
    /// Construct a new instance of [`App`] for a terminal of `size` cells.
    pub fn new(config: &Config, size: Size) -> color_eyre::Result<Self> {
        let viewport = TerminalViewport::new(size, config.field.pixel_scale);
        let surface = PixelSurface::new(config.field.pixel_scale)?;
        let mut rng = match config.field.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut hub = SignalHub::new();
        let field = ParticleAnimator::start(
            Some(surface),
            &viewport,
            &mut hub,
            &mut rng,
            &config.field.settings(),
        );

        let mut page = Page::new(config.portfolio.clone(), Theme::DARK, config.reduce_motion);
        page.resize(size.width, size.height);

        Ok(Self {
            running: false,
            frame_interval: config.frame_interval(),
            epoch: Instant::now(),
            hub,
            viewport,
            field,
            page,
        })
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        info!(state = ?self.field.state(), "ember running");
        self.running = true;
        let mut last = Instant::now();
        let mut dirty = true;
        while self.running {
            let now = Instant::now();
            self.update(now - last);
            last = now;
            let idle = self.is_idle();
            if dirty || !idle {
                terminal.draw(|frame| self.render(frame))?;
            }

            let timeout = if idle {
                IDLE_POLL
            } else {
                (now + self.frame_interval).saturating_duration_since(Instant::now())
            };
            dirty = self.handle_crossterm_events(timeout)?;
            if idle {
                // Time spent waiting for input is not animation time.
                last = Instant::now();
            }
        }
        self.field.teardown(&mut self.hub);
        info!("ember stopped");
        Ok(())
    }

    /// Advance the particle field and the page by `dt`.
    fn update(&mut self, dt: Duration) {
        // The field only animates while some of the hero is on screen.
        if self.page.hero_visible() {
            self.field.resume(&mut self.hub);
        } else {
            self.field.pause(&mut self.hub);
        }
        if self.hub.has_listeners(SignalKind::Frame) {
            self.field.frame(&self.hub, self.epoch.elapsed());
        }
        self.page.tick(dt.as_secs_f32());
    }

    /// Whether nothing on screen would change without input.
    fn is_idle(&self) -> bool {
        !self.page.is_animating() && !self.hub.has_listeners(SignalKind::Frame)
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        if let Some(surface) = self.field.surface() {
            let backdrop = Backdrop::new(surface).scroll(self.page.hero_offset());
            frame.render_widget(backdrop, self.page.hero_area(area));
        }
        frame.render_widget(&self.page, area);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Waits at most `timeout` for the first event, then drains the queue.
    /// Returns whether any event arrived.
    fn handle_crossterm_events(&mut self, timeout: Duration) -> color_eyre::Result<bool> {
        let mut wait = timeout;
        let mut handled = false;
        while event::poll(wait)? {
            handled = true;
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::Resize(cols, rows) => self.on_resize(cols, rows),
                _ => {}
            }
            wait = Duration::ZERO;
        }
        Ok(handled)
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        let page_rows = self.page.size().1.saturating_sub(2).max(1) as i32;
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Up | KeyCode::Char('k')) => self.page.scroll_by(-SCROLL_STEP),
            (_, KeyCode::Down | KeyCode::Char('j')) => self.page.scroll_by(SCROLL_STEP),
            (_, KeyCode::PageUp) => self.page.scroll_by(-page_rows),
            (_, KeyCode::PageDown | KeyCode::Char(' ')) => self.page.scroll_by(page_rows),
            (_, KeyCode::Home | KeyCode::Char('g')) => self.page.scroll_to_top(),
            (_, KeyCode::End | KeyCode::Char('G')) => self.page.scroll_to_bottom(),
            (_, KeyCode::Tab) => self.page.next_section(),
            (_, KeyCode::BackTab) => self.page.prev_section(),
            (_, KeyCode::Char(c @ '1'..='5')) => {
                let index = c as usize - '1' as usize;
                if let Some(&section) = Section::NAV.get(index) {
                    self.page.scroll_to(section);
                }
            }
            _ => {}
        }
    }

    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.page.scroll_by(SCROLL_STEP),
            MouseEventKind::ScrollUp => self.page.scroll_by(-SCROLL_STEP),
            _ => {}
        }
    }

    fn on_resize(&mut self, cols: u16, rows: u16) {
        debug!(cols, rows, "terminal resized");
        self.page.resize(cols, rows);
        self.viewport.set_size(cols, rows);
        if self.hub.has_listeners(SignalKind::Resize) {
            self.field.resize(&self.hub, self.viewport.surface_size());
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_field::{AnimatorState, SurfaceSize};

    fn app() -> App {
        let mut config = Config::default();
        config.reduce_motion = true;
        config.field.seed = Some(9);
        App::new(&config, Size::new(100, 30)).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.on_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_field_starts_running_at_terminal_size() {
        let app = app();
        assert_eq!(app.field.state(), AnimatorState::Running);
        assert_eq!(app.field.particles().len(), 25);
        assert_eq!(app.field.surface().unwrap().resolution(), (100, 60));
    }

    #[test]
    fn test_quit_keys() {
        for (modifiers, code) in [
            (KeyModifiers::NONE, KeyCode::Char('q')),
            (KeyModifiers::NONE, KeyCode::Esc),
            (KeyModifiers::CONTROL, KeyCode::Char('c')),
        ] {
            let mut app = app();
            app.running = true;
            app.on_key_event(KeyEvent::new(code, modifiers));
            assert!(!app.running);
        }
    }

    #[test]
    fn test_number_keys_jump_to_sections() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.page.current_section(), Section::Experience);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.page.current_section(), Section::Hero);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.page.current_section(), Section::About);
    }

    #[test]
    fn test_field_pauses_while_hero_is_hidden() {
        let mut app = app();
        app.update(Duration::from_millis(16));
        assert!(app.field.last_frame().is_some());

        press(&mut app, KeyCode::Char('2'));
        app.update(Duration::from_millis(16));
        assert_eq!(app.field.state(), AnimatorState::Paused);
        assert!(!app.hub.has_listeners(SignalKind::Frame));

        press(&mut app, KeyCode::Home);
        app.update(Duration::from_millis(16));
        assert_eq!(app.field.state(), AnimatorState::Running);
    }

    #[test]
    fn test_idle_only_when_field_is_paused_and_page_is_still() {
        let mut app = app();
        app.update(Duration::from_millis(16));
        assert!(!app.is_idle());

        press(&mut app, KeyCode::Char('1'));
        app.update(Duration::from_millis(16));
        assert!(app.is_idle());

        let mut config = Config::default();
        config.field.seed = Some(9);
        let mut moving = App::new(&config, Size::new(100, 30)).unwrap();
        moving.page.scroll_to(Section::Projects);
        moving.update(Duration::from_millis(16));
        assert!(!moving.is_idle());
        for _ in 0..200 {
            moving.update(Duration::from_millis(50));
        }
        assert_eq!(moving.field.state(), AnimatorState::Paused);
        assert!(moving.is_idle());
    }

    #[test]
    fn test_resize_reaches_page_and_field() {
        let mut app = app();
        app.on_resize(40, 10);
        assert_eq!(app.page.size(), (40, 10));
        assert_eq!(app.viewport.surface_size(), SurfaceSize::new(320.0, 160.0));
        assert_eq!(app.field.surface().unwrap().resolution(), (40, 20));
    }

    #[test]
    fn test_mouse_wheel_scrolls() {
        let mut app = app();
        app.on_mouse_event(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(app.page.scroll_offset(), SCROLL_STEP as u16);
    }
}
