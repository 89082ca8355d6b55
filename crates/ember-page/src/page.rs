//! The scrolling single-page portfolio.

use std::ops::Range;

use ember_core::{Portfolio, Rgb, Section, Theme};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use tracing::{debug, trace};

use crate::{
    layout::{self, Block, CELL_HEIGHT_PX, CELL_WIDTH_PX, SectionLayout, content_width, line_indent},
    scroll::SmoothScroll,
    timeline::Pose,
    trigger::TriggerAction,
};

/// Scroll distance after which the navigation bar gets a background.
const NAV_SOLID_AFTER: f32 = 100.0 / CELL_HEIGHT_PX;

#[derive(Debug, Clone)]
struct Placed {
    top: u16,
    layout: SectionLayout,
}

/// Sections stacked into one scrolling document.
#[derive(Debug, Clone)]
pub struct Page {
    portfolio: Portfolio,
    theme: Theme,
    reduce_motion: bool,
    width: u16,
    height: u16,
    sections: Vec<Placed>,
    scroll: SmoothScroll,
    started: bool,
}

impl Page {
    /// Create an empty page; nothing is laid out until [`Page::resize`].
    pub fn new(portfolio: Portfolio, theme: Theme, reduce_motion: bool) -> Self {
        Self {
            portfolio,
            theme,
            reduce_motion,
            width: 0,
            height: 0,
            sections: Vec::new(),
            scroll: SmoothScroll::new(reduce_motion),
            started: false,
        }
    }

    /// Lay the page out for a viewport of `width` by `height` cells.
    ///
    /// Reveal progress survives the relayout. The first call starts the
    /// hero intro.
    pub fn resize(&mut self, width: u16, height: u16) {
        if (width, height) == (self.width, self.height) && !self.sections.is_empty() {
            return;
        }
        self.width = width;
        self.height = height;

        let column = content_width(width);
        let mut top: u16 = 0;
        let mut sections = Vec::with_capacity(Section::ALL.len());
        for section in Section::ALL {
            let mut layout = layout::build(section, &self.portfolio, &self.theme, column, height);
            if let Some(old) = self.sections.get(section.index()) {
                layout.carry_from(&old.layout);
            }
            if self.reduce_motion {
                layout.finish_all();
            }
            let next = top.saturating_add(layout.height);
            sections.push(Placed { top, layout });
            top = next;
        }
        self.sections = sections;
        self.scroll.set_max(top.saturating_sub(height) as f32);

        if !self.started {
            self.started = true;
            if !self.reduce_motion
                && let Some(hero) = self.sections.first_mut()
            {
                for group in hero.layout.groups.iter_mut().filter(|g| g.trigger.is_none()) {
                    group.timeline.play();
                }
            }
        }
        debug!(width, height, document = top, "page laid out");
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Total height of all sections in rows.
    pub fn document_height(&self) -> u16 {
        self.sections
            .last()
            .map(|placed| placed.top.saturating_add(placed.layout.height))
            .unwrap_or(0)
    }

    /// Row at which `section` starts in the document.
    pub fn section_top(&self, section: Section) -> u16 {
        self.sections
            .get(section.index())
            .map(|placed| placed.top)
            .unwrap_or(0)
    }

    /// Current layout of `section`.
    pub fn layout(&self, section: Section) -> Option<&SectionLayout> {
        self.sections.get(section.index()).map(|placed| &placed.layout)
    }

    /// Scroll by `rows`, negative to go up.
    pub fn scroll_by(&mut self, rows: i32) {
        self.scroll.scroll_by(rows as f32);
    }

    /// Scroll so that `section` starts at the top of the viewport.
    pub fn scroll_to(&mut self, section: Section) {
        trace!(%section, "scroll to section");
        self.scroll.scroll_to(self.section_top(section) as f32);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll.scroll_to(0.0);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll.scroll_to(self.scroll.max());
    }

    pub fn next_section(&mut self) {
        self.scroll_to(self.current_section().next());
    }

    pub fn prev_section(&mut self) {
        let current = self.current_section();
        // Partway into a section goes back to its start first.
        if self.scroll.target() > self.section_top(current) as f32 {
            self.scroll_to(current);
        } else {
            self.scroll_to(current.prev());
        }
    }

    /// Section the scroll target lies in.
    pub fn current_section(&self) -> Section {
        let max = self.scroll.max();
        if max > 0.0 && self.scroll.target() >= max {
            return Section::Contact;
        }
        let focus = self.scroll.target() + self.height as f32 / 3.0;
        self.sections
            .iter()
            .rev()
            .find(|placed| placed.top as f32 <= focus)
            .map(|placed| placed.layout.section)
            .unwrap_or(Section::Hero)
    }

    /// Rows currently scrolled past the top of the document.
    pub fn scroll_offset(&self) -> u16 {
        self.scroll.offset()
    }

    pub fn hero_height(&self) -> u16 {
        self.sections
            .first()
            .map(|placed| placed.layout.height)
            .unwrap_or(self.height)
    }

    /// Whether any of the hero is on screen.
    pub fn hero_visible(&self) -> bool {
        self.scroll.position() < self.hero_height() as f32
    }

    /// Rows of the hero scrolled out of view.
    pub fn hero_offset(&self) -> u16 {
        self.scroll.offset().min(self.hero_height())
    }

    /// Part of `area` still covered by the hero.
    pub fn hero_area(&self, area: Rect) -> Rect {
        let visible = self.hero_height().saturating_sub(self.hero_offset());
        Rect {
            height: visible.min(area.height),
            ..area
        }
    }

    /// Whether the navigation bar is drawn solid.
    pub fn is_scrolled(&self) -> bool {
        self.scroll.position() > NAV_SOLID_AFTER
    }

    /// Whether anything is still moving. Loops only count while their
    /// section is on screen.
    pub fn is_animating(&self) -> bool {
        let scroll = self.scroll.position();
        self.scroll.is_moving()
            || self.sections.iter().any(|placed| {
                let top = placed.top as f32 - scroll;
                let on_screen = top < self.height as f32 && top + placed.layout.height as f32 > 0.0;
                let playing = placed.layout.groups.iter().any(|group| {
                    group.timeline.is_playing() && (on_screen || !group.timeline.is_looping())
                });
                let scrubbing = placed
                    .layout
                    .scrub
                    .as_ref()
                    .is_some_and(|line| line.scrub.progress() != line.scrub.target());
                playing || scrubbing
            })
    }

    /// Advance scrolling, triggers and timelines by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        self.scroll.tick(dt);
        let scroll = self.scroll.position();
        let viewport = self.height as f32;

        for placed in &mut self.sections {
            let top = placed.top as f32 - scroll;
            let section = placed.layout.section;
            for group in &mut placed.layout.groups {
                if !self.reduce_motion
                    && let Some(trigger) = &mut group.trigger
                {
                    match trigger.update(top + group.anchor as f32, viewport) {
                        Some(TriggerAction::Play) => {
                            trace!(%section, "reveal");
                            group.timeline.play();
                        }
                        Some(TriggerAction::Reverse) => {
                            trace!(%section, "hide");
                            group.timeline.reverse();
                        }
                        None => {}
                    }
                }
                group.timeline.tick(dt);
            }
            if let Some(line) = &mut placed.layout.scrub {
                line.scrub
                    .update(top + line.row as f32, line.height as f32, viewport);
                if self.reduce_motion {
                    line.scrub.settle();
                } else {
                    line.scrub.tick(dt);
                }
            }
        }
    }

    fn render_nav(&self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let theme = &self.theme;
        let y = area.y as i32;
        if self.is_scrolled() {
            for x in area.left()..area.right() {
                if let Some(cell) = buf.cell_mut((x, area.y)) {
                    cell.set_char(' ')
                        .set_bg(theme.surface.into())
                        .set_fg(theme.text.into());
                }
            }
        }

        let profile = &self.portfolio.profile;
        let name = Line::from(vec![
            Span::styled(format!("{} ", profile.first_name), bold(theme.text)),
            Span::styled(profile.last_name.clone(), bold(theme.accent)),
        ]);
        let name_end = area.x as usize + 2 + name.width();
        draw_line(buf, area, theme, &name, Placement::at(area.x as i32 + 2, y));

        let hire = Line::from(Span::styled(
            " Hire Me ",
            bold(Rgb::WHITE).bg(Color::from(theme.accent)),
        ));
        let current = self.current_section();
        let mut links = Vec::new();
        for section in Section::NAV {
            let style = if section == current {
                bold(theme.accent).add_modifier(Modifier::UNDERLINED)
            } else {
                fg(theme.muted)
            };
            links.push(Span::styled(section.title(), style));
            links.push(Span::raw("  "));
        }
        links.extend(hire.spans.iter().cloned());
        let links = Line::from(links);

        let right = area.right() as usize;
        for line in [&links, &hire] {
            let start = right.saturating_sub(line.width() + 2);
            if start >= name_end + 4 {
                draw_line(buf, area, theme, line, Placement::at(start as i32, y));
                break;
            }
        }
    }
}

fn fg(color: Rgb) -> Style {
    Style::new().fg(color.into())
}

fn bold(color: Rgb) -> Style {
    fg(color).add_modifier(Modifier::BOLD)
}

fn fade(theme: &Theme, color: Color, opacity: f32) -> Color {
    if opacity >= 0.999 {
        return color;
    }
    match color {
        Color::Rgb(r, g, b) => theme.fade(Rgb::new(r, g, b), opacity).into(),
        other => other,
    }
}

/// Where and how a line is drawn.
#[derive(Debug, Clone, PartialEq)]
struct Placement {
    x: i32,
    y: i32,
    /// Line columns to draw.
    clip: Range<usize>,
    opacity: f32,
}

impl Placement {
    fn at(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            clip: 0..usize::MAX,
            opacity: 1.0,
        }
    }
}

/// Draw `line` with its first column at the placement, skipping unstyled
/// spaces so whatever is underneath shows through.
fn draw_line(buf: &mut Buffer, area: Rect, theme: &Theme, line: &Line<'_>, place: Placement) {
    let Placement {
        x,
        y,
        clip,
        opacity,
    } = place;
    if y < area.top() as i32 || y >= area.bottom() as i32 {
        return;
    }
    let mut col = 0usize;
    for span in &line.spans {
        let style = line.style.patch(span.style);
        for ch in span.content.chars() {
            let at = col;
            col += 1;
            if !clip.contains(&at) || (ch == ' ' && style.bg.is_none()) {
                continue;
            }
            let cx = x + at as i32;
            if cx < area.left() as i32 || cx >= area.right() as i32 {
                continue;
            }
            let faded = Style {
                fg: style.fg.map(|c| fade(theme, c, opacity)),
                bg: style.bg.map(|c| fade(theme, c, opacity)),
                ..style
            };
            if let Some(cell) = buf.cell_mut((cx as u16, y as u16)) {
                cell.set_char(ch).set_style(faded);
            }
        }
    }
}

fn draw_block(
    buf: &mut Buffer,
    area: Rect,
    theme: &Theme,
    block: &Block,
    pose: Pose,
    origin: (i32, i32),
) {
    if !pose.is_visible() || block.lines.is_empty() {
        return;
    }
    let dx = (pose.dx / CELL_WIDTH_PX).round() as i32;
    let dy = (pose.dy / CELL_HEIGHT_PX).round() as i32;
    let height = block.lines.len();
    let width = block.width() as usize;

    // Scaling shows the middle of the block, growing outwards.
    let scale = pose.scale.min(1.0);
    let rows = ((height as f32 * scale).ceil() as usize).clamp(1, height);
    let cols = ((width as f32 * scale).ceil() as usize).min(width);
    let first_row = (height - rows) / 2;
    let first_col = (width - cols) / 2;

    let x = origin.0 + block.col as i32 + dx;
    for (i, line) in block.lines.iter().enumerate().skip(first_row).take(rows) {
        let y = origin.1 + block.row as i32 + i as i32 + dy;
        let indent = line_indent(line, width);
        let at = Placement {
            clip: first_col.saturating_sub(indent)..(first_col + cols).saturating_sub(indent),
            opacity: pose.opacity,
            ..Placement::at(x + indent as i32, y)
        };
        draw_line(buf, area, theme, line, at);
    }
}

impl Widget for &Page {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = &self.theme;
        let scroll = self.scroll.offset() as i32;
        let column = content_width(area.width);
        let left = area.x as i32 + (area.width.saturating_sub(column) / 2) as i32;

        for placed in &self.sections {
            let top = area.y as i32 + placed.top as i32 - scroll;
            let layout = &placed.layout;
            if top >= area.bottom() as i32 || top + layout.height as i32 <= area.y as i32 {
                continue;
            }

            if let Some(line) = &layout.scrub {
                let filled = (line.scrub.progress() * line.height as f32).round() as u16;
                for r in 0..line.height {
                    let (ch, color) = if r < filled {
                        ("┃", theme.accent)
                    } else {
                        ("│", theme.border)
                    };
                    let at = Placement::at(left + line.col as i32, top + (line.row + r) as i32);
                    let segment = Line::from(Span::styled(ch, fg(color)));
                    draw_line(buf, area, theme, &segment, Placement { clip: 0..1, ..at });
                }
            }

            for block in &layout.blocks {
                draw_block(buf, area, theme, block, layout.pose(block), (left, top));
            }
        }

        self.render_nav(area, buf);
    }
}
