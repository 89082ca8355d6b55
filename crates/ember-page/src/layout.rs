//! Section layout.
//!
//! Each section is built into a list of [`Block`]s positioned in rows and
//! columns relative to the section's top-left corner, plus the reveal
//! groups animating them. Layouts are rebuilt whenever the terminal size
//! changes.

use ember_core::{Heading, Portfolio, Rgb, Section, Theme};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::{
    ease::Ease,
    font::{GLYPH_GAP, GLYPH_HEIGHT, art_width, glyph, glyph_width},
    text::wrap,
    timeline::{Pose, Timeline, Tween},
    trigger::{Scrub, ScrollTrigger, Toggle},
};

/// Pixels per terminal column.
pub const CELL_WIDTH_PX: f32 = 8.0;
/// Pixels per terminal row.
pub const CELL_HEIGHT_PX: f32 = 16.0;
/// Widest the content column gets.
pub const MAX_CONTENT_WIDTH: u16 = 96;

const SECTION_PADDING: u16 = 2;
const COLUMN_GAP: u16 = 2;

/// Width of the centered content column for a terminal `width`.
pub fn content_width(width: u16) -> u16 {
    width.saturating_sub(4).clamp(1, MAX_CONTENT_WIDTH)
}

/// Reference from a block to the tween animating it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimRef {
    pub group: usize,
    pub tween: usize,
}

/// Lines drawn together at one position.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub row: u16,
    pub col: u16,
    pub lines: Vec<Line<'static>>,
    pub anim: Option<AnimRef>,
    /// Second animation layered over the reveal, such as a loop or the
    /// motion of an enclosing card.
    pub layer: Option<AnimRef>,
}

impl Block {
    pub fn height(&self) -> u16 {
        self.lines.len() as u16
    }

    pub fn width(&self) -> u16 {
        self.lines.iter().map(Line::width).max().unwrap_or(0) as u16
    }
}

/// Tweens started together by one trigger.
///
/// Groups without a trigger are played directly by the page.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealGroup {
    pub timeline: Timeline,
    pub trigger: Option<ScrollTrigger>,
    /// Row within the section that the trigger watches.
    pub anchor: u16,
}

/// Vertical line whose fill follows the scroll position.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrubLine {
    pub row: u16,
    pub col: u16,
    pub height: u16,
    pub scrub: Scrub,
}

/// A section laid out for one content width.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionLayout {
    pub section: Section,
    pub height: u16,
    pub blocks: Vec<Block>,
    pub groups: Vec<RevealGroup>,
    pub scrub: Option<ScrubLine>,
}

impl SectionLayout {
    /// Current pose of `block`.
    pub fn pose(&self, block: &Block) -> Pose {
        self.anim_pose(block.anim).compose(self.anim_pose(block.layer))
    }

    fn anim_pose(&self, anim: Option<AnimRef>) -> Pose {
        let Some(anim) = anim else {
            return Pose::REST;
        };
        self.groups
            .get(anim.group)
            .map(|group| group.timeline.pose(anim.tween))
            .unwrap_or(Pose::REST)
    }

    /// Keep animation progress from a previous layout of this section.
    pub fn carry_from(&mut self, old: &SectionLayout) {
        for (group, prev) in self.groups.iter_mut().zip(&old.groups) {
            group.timeline.carry_from(&prev.timeline);
            if let (Some(trigger), Some(prev)) = (&mut group.trigger, &prev.trigger) {
                *trigger = *prev;
            }
        }
        if let (Some(line), Some(prev)) = (&mut self.scrub, &old.scrub) {
            line.scrub = prev.scrub;
        }
    }

    /// Jump every reveal to its end state.
    pub fn finish_all(&mut self) {
        for group in &mut self.groups {
            group.timeline.finish();
        }
        if let Some(line) = &mut self.scrub {
            line.scrub.settle();
        }
    }
}

/// Lay out `section` for a content column `width` wide in a viewport
/// `height` rows tall.
pub fn build(
    section: Section,
    portfolio: &Portfolio,
    theme: &Theme,
    width: u16,
    height: u16,
) -> SectionLayout {
    match section {
        Section::Hero => hero(portfolio, theme, width, height),
        Section::About => about(portfolio, theme, width),
        Section::Skills => skills(portfolio, theme, width),
        Section::Experience => experience(portfolio, theme, width),
        Section::Projects => projects(portfolio, theme, width),
        Section::Contact => contact(portfolio, theme, width),
    }
}

struct Builder {
    section: Section,
    width: u16,
    row: u16,
    blocks: Vec<Block>,
    groups: Vec<RevealGroup>,
    scrub: Option<ScrubLine>,
}

impl Builder {
    fn new(section: Section, width: u16) -> Self {
        Self {
            section,
            width,
            row: SECTION_PADDING,
            blocks: Vec::new(),
            groups: Vec::new(),
            scrub: None,
        }
    }

    /// Start a reveal group anchored at the current row.
    fn group(&mut self, trigger: Option<ScrollTrigger>) -> usize {
        self.groups.push(RevealGroup {
            timeline: Timeline::new(),
            trigger,
            anchor: self.row,
        });
        self.groups.len() - 1
    }

    /// Start a group that loops back and forth once the page plays it.
    fn looping(&mut self) -> usize {
        let group = self.group(None);
        self.groups[group].timeline = Timeline::yoyo();
        group
    }

    /// Add a tween to `group` without placing a block.
    fn tween(&mut self, group: usize, tween: Tween) -> Option<AnimRef> {
        let timeline = &mut self.groups.get_mut(group)?.timeline;
        Some(AnimRef {
            group,
            tween: timeline.push(tween),
        })
    }

    /// Layer `anim` over the most recently placed block.
    fn layer_last(&mut self, anim: Option<AnimRef>) {
        if let Some(block) = self.blocks.last_mut() {
            block.layer = anim;
        }
    }

    /// Place a block without moving the cursor.
    fn place(
        &mut self,
        row: u16,
        col: u16,
        lines: Vec<Line<'static>>,
        anim: Option<(usize, Tween)>,
    ) -> u16 {
        let anim = anim.and_then(|(group, tween)| self.tween(group, tween));
        let block = Block {
            row,
            col,
            lines,
            anim,
            layer: None,
        };
        let height = block.height();
        self.blocks.push(block);
        height
    }

    /// Place a left-aligned block at the cursor and move below it.
    fn push(&mut self, lines: Vec<Line<'static>>, anim: Option<(usize, Tween)>) {
        let height = self.place(self.row, 0, lines, anim);
        self.row += height;
    }

    /// Place a block centered in the column, centering each line in it.
    fn push_centered(&mut self, lines: Vec<Line<'static>>, anim: Option<(usize, Tween)>) {
        let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
        let col = self.width.saturating_sub(width) / 2;
        let lines = lines.into_iter().map(Line::centered).collect();
        let height = self.place(self.row, col, lines, anim);
        self.row += height;
    }

    /// Place cards of equal width left to right, wrapping every `columns`.
    fn grid(&mut self, cards: Vec<(Vec<Line<'static>>, Option<(usize, Tween)>)>, columns: u16) {
        let columns = columns.max(1);
        let card_width = card_width(self.width, columns);
        let mut row_height = 0;
        for (i, (lines, anim)) in cards.into_iter().enumerate() {
            let slot = i as u16 % columns;
            if slot == 0 && i > 0 {
                self.row += row_height + 1;
                row_height = 0;
            }
            let col = slot * (card_width + COLUMN_GAP);
            row_height = row_height.max(self.place(self.row, col, lines, anim));
        }
        self.row += row_height;
    }

    fn gap(&mut self, rows: u16) {
        self.row += rows;
    }

    fn finish(self, min_height: u16) -> SectionLayout {
        SectionLayout {
            section: self.section,
            height: (self.row + SECTION_PADDING).max(min_height),
            blocks: self.blocks,
            groups: self.groups,
            scrub: self.scrub,
        }
    }
}

fn card_width(width: u16, columns: u16) -> u16 {
    let gaps = COLUMN_GAP * columns.saturating_sub(1);
    (width.saturating_sub(gaps) / columns.max(1)).max(5)
}

/// Text width inside a bordered card.
fn inner_width(card_width: u16) -> usize {
    card_width.saturating_sub(4).max(1) as usize
}

fn fg(color: Rgb) -> Style {
    Style::new().fg(color.into())
}

fn bold(color: Rgb) -> Style {
    fg(color).add_modifier(Modifier::BOLD)
}

fn text(content: impl Into<String>, style: Style) -> Line<'static> {
    Line::from(Span::styled(content.into(), style))
}

fn paragraph(content: &str, width: usize, style: Style) -> Vec<Line<'static>> {
    wrap(content, width)
        .into_iter()
        .map(|line| text(line, style))
        .collect()
}

/// Items as `[item]` chips, wrapped to `width`.
fn chips(items: &[String], width: usize, style: Style) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut spans = Vec::new();
    let mut used = 0;
    for item in items {
        let chip = format!("[{item}]");
        let chip_width = chip.chars().count();
        if used > 0 && used + 1 + chip_width > width {
            lines.push(Line::from(std::mem::take(&mut spans)));
            used = 0;
        }
        if used > 0 {
            spans.push(Span::raw(" "));
            used += 1;
        }
        spans.push(Span::styled(chip, style));
        used += chip_width;
    }
    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }
    lines
}

/// Surround `content` with a rounded border. Lines wider than `inner`
/// are clipped when drawn.
fn card(theme: &Theme, content: Vec<Line<'static>>, inner: usize) -> Vec<Line<'static>> {
    let border = fg(theme.border);
    let mut lines = Vec::with_capacity(content.len() + 2);
    lines.push(text(format!("╭{}╮", "─".repeat(inner + 2)), border));
    for line in content {
        let pad = inner.saturating_sub(line.width());
        let mut spans = vec![Span::styled("│ ", border)];
        spans.extend(
            line.spans
                .into_iter()
                .map(|span| span.patch_style(line.style)),
        );
        spans.push(Span::raw(" ".repeat(pad)));
        spans.push(Span::styled(" │", border));
        lines.push(Line::from(spans));
    }
    lines.push(text(format!("╰{}╯", "─".repeat(inner + 2)), border));
    lines
}

fn pad_lines(lines: &mut Vec<Line<'static>>, rows: usize) {
    while lines.len() < rows {
        lines.push(Line::default());
    }
}

fn header(theme: &Theme, heading: &Heading, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled("● ", fg(theme.accent)),
            Span::styled(heading.label.to_uppercase(), bold(theme.accent)),
        ]),
        Line::default(),
        Line::from(vec![
            Span::styled(format!("{} ", heading.title), bold(theme.text)),
            Span::styled(heading.accent.clone(), bold(theme.accent)),
        ]),
        Line::default(),
    ];
    lines.extend(paragraph(&heading.blurb, width.min(64), fg(theme.muted)));
    lines
}

fn hero(portfolio: &Portfolio, theme: &Theme, width: u16, height: u16) -> SectionLayout {
    let profile = &portfolio.profile;
    let columns = width as usize;
    let mut b = Builder::new(Section::Hero, width);
    let intro = b.group(None);
    let breathe = b.looping();
    let drift = Tween::towards(Pose::REST.offset(0.0, -CELL_HEIGHT_PX).scaled(1.02))
        .lasting(4.0)
        .ease(Ease::SineInOut);

    let first: Vec<(char, Style)> = profile
        .first_name
        .chars()
        .map(|c| (c, bold(theme.text)))
        .collect();
    let last: Vec<(char, Style)> = profile
        .last_name
        .chars()
        .map(|c| (c, bold(theme.accent)))
        .collect();
    let full_name = profile.full_name();
    let name_rows: Vec<Vec<(char, Style)>> =
        if art_width(&full_name).is_some_and(|w| w <= columns) {
            let mut row = first.clone();
            row.push((' ', Style::new()));
            row.extend(last.iter().copied());
            vec![row]
        } else if [&profile.first_name, &profile.last_name]
            .iter()
            .all(|word| art_width(word).is_some_and(|w| w <= columns))
        {
            vec![first, last]
        } else {
            Vec::new()
        };
    let name_height = if name_rows.is_empty() {
        1
    } else {
        name_rows.len() * (GLYPH_HEIGHT + 1) - 1
    };

    let tagline = paragraph(&profile.tagline, columns.min(60), fg(theme.muted));
    let floating = chips(&profile.floating, columns, fg(theme.muted));
    let content = 2 + name_height + 2 + tagline.len() + 1 + floating.len() + 2;
    b.row = ((height as usize).saturating_sub(content) / 2).max(SECTION_PADDING as usize) as u16;

    let pop = Tween::reveal(Pose::faded().scaled(0.8)).at(0.4).lasting(1.5);
    b.push_centered(
        vec![Line::from(vec![
            Span::styled("◆ ", fg(theme.accent)),
            Span::styled(profile.badge.clone(), fg(theme.text)),
        ])],
        Some((intro, pop)),
    );
    let float = b.tween(breathe, drift);
    b.layer_last(float);
    b.gap(1);

    if name_rows.is_empty() {
        let rise = Tween::reveal(Pose::faded().offset(0.0, CELL_HEIGHT_PX * 5.0))
            .at(0.2)
            .lasting(1.2);
        b.push_centered(
            vec![Line::from(vec![
                Span::styled(format!("{} ", profile.first_name), bold(theme.text)),
                Span::styled(profile.last_name.clone(), bold(theme.accent)),
            ])],
            Some((intro, rise)),
        );
    } else {
        let mut letter = 0;
        for (i, row) in name_rows.iter().enumerate() {
            if i > 0 {
                b.gap(1);
            }
            push_letters(&mut b, intro, row, &mut letter);
        }
    }
    b.gap(1);

    let rise = |dy: f32, at: f32| {
        let tween = Tween::reveal(Pose::faded().offset(0.0, dy)).at(at);
        Some((intro, tween))
    };
    b.push_centered(vec![text(profile.role.clone(), bold(theme.text))], rise(30.0, 0.6));
    b.gap(1);
    if !tagline.is_empty() {
        b.push_centered(tagline, rise(20.0, 0.8));
    }
    b.gap(1);
    if !floating.is_empty() {
        b.push_centered(floating, Some((intro, pop)));
        let float = b.tween(breathe, drift.at(1.0));
        b.layer_last(float);
    }
    b.gap(1);
    b.push_centered(
        vec![Line::from(vec![
            Span::styled(
                " View My Work ↓ ",
                bold(Rgb::WHITE).bg(Color::from(theme.accent)),
            ),
            Span::raw("   "),
            Span::styled("Get In Touch →", bold(theme.text)),
        ])],
        rise(20.0, 1.0),
    );

    let hint_row = height.saturating_sub(2);
    if hint_row > b.row {
        let hint = Line::from(Span::styled(
            "↓ scroll · tab next section · q quit",
            fg(theme.border),
        ));
        let col = width.saturating_sub(hint.width() as u16) / 2;
        b.place(hint_row, col, vec![hint], None);
    }

    b.finish(height)
}

/// Block letters for one line of the name, centered, one block per letter.
fn push_letters(b: &mut Builder, group: usize, letters: &[(char, Style)], next: &mut usize) {
    let glyphs: Vec<_> = letters
        .iter()
        .filter_map(|&(ch, style)| glyph(ch).map(|g| (ch, g, style)))
        .collect();
    let total = glyphs.iter().map(|(_, g, _)| glyph_width(g)).sum::<usize>()
        + GLYPH_GAP * glyphs.len().saturating_sub(1);
    let mut col = (b.width as usize).saturating_sub(total) / 2;
    for (ch, g, style) in glyphs {
        if ch != ' ' {
            let lines = g.iter().map(|row| text(*row, style)).collect();
            let drop = GLYPH_HEIGHT as f32 * CELL_HEIGHT_PX;
            let rise = Tween::reveal(Pose::faded().offset(0.0, drop))
                .at(0.2 + *next as f32 * 0.03)
                .lasting(1.2);
            *next += 1;
            b.place(b.row, col as u16, lines, Some((group, rise)));
        }
        col += glyph_width(&g) + GLYPH_GAP;
    }
    b.row += GLYPH_HEIGHT as u16;
}

fn about(portfolio: &Portfolio, theme: &Theme, width: u16) -> SectionLayout {
    let about = &portfolio.about;
    let columns = width as usize;
    let mut b = Builder::new(Section::About, width);
    let badge_group = b.group(Some(ScrollTrigger::new(0.7, Toggle::PlayReverse)));
    let content = b.group(Some(ScrollTrigger::new(0.7, Toggle::PlayReverse)));

    let mut item = 0;
    let mut rise = || {
        let tween = Tween::reveal(Pose::faded().offset(0.0, 50.0)).at(item as f32 * 0.1);
        item += 1;
        Some((content, tween))
    };

    b.push(
        vec![Line::from(vec![
            Span::styled("● ", fg(theme.accent)),
            Span::styled(about.label.to_uppercase(), bold(theme.accent)),
        ])],
        rise(),
    );
    b.gap(1);
    b.push(
        vec![Line::from(vec![
            Span::styled(format!("{} ", about.heading), bold(theme.text)),
            Span::styled(about.heading_accent.clone(), bold(theme.accent)),
        ])],
        rise(),
    );
    for body in &about.paragraphs {
        b.gap(1);
        b.push(paragraph(body, columns.min(80), fg(theme.muted)), rise());
    }
    b.gap(2);

    let badge = card(
        theme,
        vec![
            text(about.badge.value.clone(), bold(theme.accent)),
            text(about.badge.label.clone(), fg(theme.text)),
        ],
        about.badge.label.chars().count().max(about.badge.value.chars().count()),
    );
    let reveal = Tween::reveal(Pose::faded())
        .lasting(1.2)
        .ease(Ease::ExpoInOut);
    b.push_centered(badge, Some((badge_group, reveal)));
    b.gap(1);

    let stats = b.group(Some(ScrollTrigger::new(0.8, Toggle::PlayReverse)));
    let columns_n = if width >= 40 { 2 } else { 1 };
    let inner = inner_width(card_width(width, columns_n));
    let bodies: Vec<Vec<Line<'static>>> = about
        .stats
        .iter()
        .map(|stat| {
            let mut lines = vec![text(stat.value.clone(), bold(theme.accent))];
            lines.extend(paragraph(&stat.label, inner, fg(theme.muted)));
            lines
        })
        .collect();
    let rows = bodies.iter().map(Vec::len).max().unwrap_or(0);
    let cards = bodies
        .into_iter()
        .enumerate()
        .map(|(i, mut body)| {
            pad_lines(&mut body, rows);
            let pop = Tween::reveal(Pose::faded().scaled(0.0))
                .at(i as f32 * 0.1)
                .lasting(0.6)
                .ease(Ease::BackOut(1.7));
            (card(theme, body, inner), Some((stats, pop)))
        })
        .collect();
    b.grid(cards, columns_n);

    b.finish(0)
}

fn skills(portfolio: &Portfolio, theme: &Theme, width: u16) -> SectionLayout {
    let columns = width as usize;
    let mut b = Builder::new(Section::Skills, width);

    let heading = b.group(Some(ScrollTrigger::new(0.75, Toggle::PlayOnce)));
    let rise = Tween::reveal(Pose::faded().offset(0.0, 16.0)).ease(Ease::Power3Out);
    b.push_centered(
        header(theme, &portfolio.headings.skills, columns),
        Some((heading, rise)),
    );
    b.gap(2);

    let categories = b.group(Some(ScrollTrigger::new(0.8, Toggle::PlayOnce)));
    let items = b.group(Some(ScrollTrigger::new(0.78, Toggle::PlayOnce)));
    let columns_n = if width >= 60 { 2 } else { 1 };
    let inner = inner_width(card_width(width, columns_n));
    let rows = portfolio
        .skills
        .iter()
        .map(|category| 2 + 2 * category.skills.len())
        .max()
        .unwrap_or(0);
    let cards = portfolio
        .skills
        .iter()
        .enumerate()
        .map(|(i, category)| {
            let mut body = vec![text(category.title.clone(), bold(theme.text))];
            pad_lines(&mut body, rows);
            let rise = Tween::reveal(Pose::faded().offset(0.0, 28.0))
                .at(i as f32 * 0.12)
                .lasting(0.7)
                .ease(Ease::Power2Out);
            (card(theme, body, inner), Some((categories, rise)))
        })
        .collect();
    let first_card = b.blocks.len();
    b.grid(cards, columns_n);

    // Skill rows sit inside their card and move with it.
    let placed: Vec<(u16, u16, Option<AnimRef>)> = b.blocks[first_card..]
        .iter()
        .map(|block| (block.row, block.col, block.anim))
        .collect();
    let mut item = 0;
    for ((row, col, card_anim), category) in placed.into_iter().zip(&portfolio.skills) {
        for (j, skill) in category.skills.iter().enumerate() {
            let rise = Tween::reveal(Pose::faded().offset(0.0, 10.0))
                .at(item as f32 * 0.01)
                .lasting(0.5)
                .ease(Ease::Power2Out);
            item += 1;
            let lines = skill_bar(theme, &skill.name, skill.level, inner);
            b.place(row + 3 + 2 * j as u16, col + 2, lines, Some((items, rise)));
            b.layer_last(card_anim);
        }
    }

    b.finish(0)
}

/// Name and percentage over a bar filled to `level`.
fn skill_bar(theme: &Theme, name: &str, level: u8, inner: usize) -> Vec<Line<'static>> {
    let level = level.min(100);
    let percent = format!("{level}%");
    let name: String = name.chars().take(inner.saturating_sub(percent.len() + 1)).collect();
    let pad = inner.saturating_sub(name.chars().count() + percent.len());
    let filled = ((inner as f32 * level as f32 / 100.0).round() as usize).min(inner);
    vec![
        Line::from(vec![
            Span::styled(name, fg(theme.muted)),
            Span::raw(" ".repeat(pad)),
            Span::styled(percent, fg(theme.accent)),
        ]),
        Line::from(vec![
            Span::styled("█".repeat(filled), fg(theme.accent)),
            Span::styled("░".repeat(inner - filled), fg(theme.border)),
        ]),
    ]
}

fn experience(portfolio: &Portfolio, theme: &Theme, width: u16) -> SectionLayout {
    const LINE_COL: u16 = 1;
    const CARD_COL: u16 = 4;

    let mut b = Builder::new(Section::Experience, width);
    b.push_centered(
        header(theme, &portfolio.headings.experience, width as usize),
        None,
    );
    b.gap(2);

    let card_outer = width.saturating_sub(CARD_COL);
    let inner = inner_width(card_outer);
    let line_top = b.row;
    let dots = b.group(Some(ScrollTrigger::new(0.7, Toggle::PlayReverse)));

    for (i, job) in portfolio.experience.iter().enumerate() {
        let slide = b.group(Some(ScrollTrigger::new(0.75, Toggle::PlayReverse)));
        let dx = if i % 2 == 0 { -50.0 } else { 50.0 };

        let mut body = vec![
            text(job.role.clone(), bold(theme.text)),
            text(format!("{} · {}", job.company, job.location), fg(theme.muted)),
            text(job.period.clone(), fg(theme.accent)),
            Line::default(),
        ];
        for point in &job.description {
            for (n, line) in wrap(point, inner.saturating_sub(2)).into_iter().enumerate() {
                let bullet = if n == 0 { "• " } else { "  " };
                body.push(Line::from(vec![
                    Span::styled(bullet, fg(theme.accent)),
                    Span::styled(line, fg(theme.muted)),
                ]));
            }
        }
        if !job.highlights.is_empty() {
            body.push(Line::default());
            body.extend(chips(&job.highlights, inner, fg(theme.accent)));
        }

        let pop = Tween::reveal(Pose::faded().scaled(0.0))
            .at(i as f32 * 0.2)
            .lasting(0.5)
            .ease(Ease::BackOut(2.0));
        b.place(b.row + 1, LINE_COL, vec![text("●", fg(theme.accent))], Some((dots, pop)));

        let slide_in = Tween::reveal(Pose::faded().offset(dx, 0.0));
        let height = b.place(b.row, CARD_COL, card(theme, body, inner), Some((slide, slide_in)));
        b.row += height + 1;
    }

    if b.row > line_top + 1 {
        b.scrub = Some(ScrubLine {
            row: line_top,
            col: LINE_COL,
            height: b.row - line_top - 1,
            scrub: Scrub::new(),
        });
    }
    b.gap(1);
    b.push_centered(vec![text("Let's Work Together →", bold(theme.accent))], None);

    b.finish(0)
}

fn projects(portfolio: &Portfolio, theme: &Theme, width: u16) -> SectionLayout {
    let mut b = Builder::new(Section::Projects, width);
    let heading = b.group(Some(ScrollTrigger::new(0.7, Toggle::PlayReverse)));
    b.push_centered(
        header(theme, &portfolio.headings.projects, width as usize),
        Some((heading, Tween::reveal(Pose::faded().offset(0.0, 50.0)))),
    );
    b.gap(2);

    let inner = inner_width(width);
    for project in &portfolio.projects {
        let reveal = b.group(Some(ScrollTrigger::new(0.8, Toggle::PlayReverse)));
        let mut body = vec![
            text(project.title.clone(), bold(theme.text)),
            text(project.subtitle.clone(), fg(theme.accent)),
            Line::default(),
        ];
        body.extend(paragraph(&project.description, inner, fg(theme.muted)));
        body.push(Line::default());
        body.push(text("My Role", bold(theme.text)));
        body.extend(paragraph(&project.role, inner, fg(theme.muted)));
        body.push(Line::default());
        body.push(text("Technologies", bold(theme.text)));
        body.extend(chips(&project.tech, inner, fg(theme.accent)));
        let links: Vec<(&str, &String)> = [
            ("↗ Live Demo  ", &project.demo),
            ("⌥ Source Code  ", &project.github),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.as_ref().map(|url| (label, url)))
        .collect();
        if !links.is_empty() {
            body.push(Line::default());
            for (label, url) in links {
                body.push(Line::from(vec![
                    Span::styled(label, bold(theme.accent)),
                    Span::styled(url.clone(), fg(theme.muted)),
                ]));
            }
        }

        let rise = Tween::reveal(Pose::faded().offset(0.0, 80.0)).lasting(1.0);
        b.push(card(theme, body, inner), Some((reveal, rise)));
        b.gap(1);
    }

    b.finish(0)
}

fn contact(portfolio: &Portfolio, theme: &Theme, width: u16) -> SectionLayout {
    let contact = &portfolio.contact;
    let mut b = Builder::new(Section::Contact, width);
    b.push_centered(
        header(theme, &portfolio.headings.contact, width as usize),
        None,
    );
    b.gap(2);

    let info = b.group(Some(ScrollTrigger::new(0.7, Toggle::PlayOnce)));
    let columns_n = if width >= 60 { 2 } else { 1 };
    let inner = inner_width(card_width(width, columns_n));
    let items = [
        ("✉ Email", &contact.email),
        ("☏ WhatsApp", &contact.whatsapp),
        ("◷ Availability", &contact.availability),
        ("⌖ Location", &contact.location),
    ];
    let bodies: Vec<Vec<Line<'static>>> = items
        .iter()
        .map(|(label, value)| {
            let mut lines = vec![text(*label, fg(theme.accent))];
            lines.extend(paragraph(value, inner, bold(theme.text)));
            lines
        })
        .collect();
    let rows = bodies.iter().map(Vec::len).max().unwrap_or(0);
    let count = bodies.len();
    let stagger = |i: usize| {
        Tween::reveal(Pose::faded().offset(0.0, 40.0)).at(i as f32 * 0.15)
    };
    let cards = bodies
        .into_iter()
        .enumerate()
        .map(|(i, mut body)| {
            pad_lines(&mut body, rows);
            (card(theme, body, inner), Some((info, stagger(i))))
        })
        .collect();
    b.grid(cards, columns_n);
    b.gap(2);

    if !contact.social.is_empty() {
        let mut lines = vec![text("Follow Me", bold(theme.text))];
        lines.extend(contact.social.iter().map(|link| {
            Line::from(vec![
                Span::styled(format!("{}  ", link.name), fg(theme.accent)),
                Span::styled(link.url.clone(), fg(theme.muted)),
            ])
        }));
        b.push_centered(lines, Some((info, stagger(count))));
        b.gap(2);
    }

    b.push(vec![text("─".repeat(width as usize), fg(theme.border))], None);
    b.gap(1);
    b.push_centered(
        vec![text(
            format!("© {}. All rights reserved.", portfolio.profile.full_name()),
            fg(theme.muted),
        )],
        None,
    );

    b.finish(0)
}

/// Horizontal offset of `line` inside a block `width` columns wide.
pub(crate) fn line_indent(line: &Line<'_>, width: usize) -> usize {
    let slack = width.saturating_sub(line.width());
    match line.alignment {
        Some(Alignment::Center) => slack / 2,
        Some(Alignment::Right) => slack,
        _ => 0,
    }
}
