//! Page layout - the whole portfolio as one column of lines
//!
//! Every section renders to owned lines for a given content width. The
//! vertical offset of a section is the number of lines above it, which is
//! what the scroll spy measures against. Re-measured on every frame so
//! resizes and filter changes move the offsets.

mod about;
mod contact;
mod experience;
mod footer;
mod hero;
mod projects;
mod skills;

use folio_core::filter::{ProjectFilter, SkillFilter};
use folio_core::{Portfolio, Section, SectionRegistry};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::tui::state::ContactState;
use crate::tui::themes::Theme;
use crate::tui::utils::wrap_text;

pub const HERO: &str = "hero";
pub const ABOUT: &str = "about";
pub const SKILLS: &str = "skills";
pub const PROJECTS: &str = "projects";
pub const EXPERIENCE: &str = "experience";
pub const CONTACT: &str = "contact";

/// Header navigation entries (id, label), in document order
pub const NAV_LINKS: &[(&str, &str)] = &[
    (ABOUT, "About"),
    (SKILLS, "Skills"),
    (PROJECTS, "Projects"),
    (EXPERIENCE, "Experience"),
    (CONTACT, "Contact"),
];

/// Blank rows at the top of each section, so a jumped-to heading clears the
/// fixed header
pub const SECTION_PADDING: usize = 3;

/// Widest the content column gets
pub const MAX_CONTENT_WIDTH: u16 = 96;

/// Renders one section at a width, recording its followable links with
/// line numbers relative to the section
type SectionRenderer = fn(&PageContext<'_>, usize, &mut Vec<PageLink>) -> Vec<Line<'static>>;

/// Registered sections, in document order
const SECTIONS: &[(&str, SectionRenderer)] = &[
    (HERO, hero::lines),
    (ABOUT, about::lines),
    (SKILLS, skills::lines),
    (PROJECTS, projects::lines),
    (EXPERIENCE, experience::lines),
    (CONTACT, contact::lines),
];

/// Everything a section needs to render
pub struct PageContext<'a> {
    pub portfolio: &'a Portfolio,
    pub theme: &'a Theme,
    pub skill_filter: SkillFilter,
    pub project_filter: ProjectFilter,
    /// Current typing effect text
    pub typed_role: &'a str,
    pub contact: &'a ContactState,
    /// Copyright year
    pub year: i32,
}

/// A followable link on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    /// Page line the link is drawn on
    pub line: usize,
    /// Start column inside the content column
    pub column: usize,
    pub width: usize,
    pub href: String,
}

/// Measured page: all lines, the section registry and the links
pub struct PageLayout {
    pub lines: Vec<Line<'static>>,
    pub registry: SectionRegistry,
    pub links: Vec<PageLink>,
}

impl PageLayout {
    /// Render every section at `width` columns
    ///
    /// Sections with nothing to show are left out of the registry, so the
    /// scroll spy never selects them.
    pub fn build(ctx: &PageContext<'_>, width: usize) -> folio_core::Result<Self> {
        let mut lines = Vec::new();
        let mut sections = Vec::new();
        let mut links = Vec::new();

        for (id, render) in SECTIONS {
            let mut section_links = Vec::new();
            let section_lines = render(ctx, width, &mut section_links);
            if section_lines.is_empty() {
                tracing::debug!(section = id, "Section empty, not registered");
                continue;
            }
            sections.push(Section::new(*id, lines.len()));
            place_links(&mut links, section_links, lines.len());
            lines.extend(section_lines);
        }

        let mut footer_links = Vec::new();
        let footer_lines = footer::lines(ctx, width, &mut footer_links);
        place_links(&mut links, footer_links, lines.len());
        lines.extend(footer_lines);

        Ok(Self {
            lines,
            registry: SectionRegistry::new(sections)?,
            links,
        })
    }

    /// Extend the page with blank rows so the last section can scroll to
    /// the top of a viewport of `viewport_height` rows
    pub fn pad_for_viewport(&mut self, viewport_height: usize) {
        let last = self
            .registry
            .sections()
            .last()
            .map_or(0, |s| s.vertical_offset);
        let needed = last + viewport_height;
        if self.lines.len() < needed {
            let missing = needed - self.lines.len();
            padding(&mut self.lines, missing);
        }
    }

    pub fn total_lines(&self) -> usize {
        self.lines.len()
    }
}

/// Move section-relative links to page lines
fn place_links(links: &mut Vec<PageLink>, section_links: Vec<PageLink>, base: usize) {
    links.extend(section_links.into_iter().map(|link| PageLink {
        line: link.line + base,
        ..link
    }));
}

/// Number key that jumps to a navigation entry
pub fn nav_key(id: &str) -> Option<usize> {
    NAV_LINKS
        .iter()
        .position(|(nav_id, _)| *nav_id == id)
        .map(|idx| idx + 1)
}

/// Whether a link target leaves the page (placeholder hrefs like "#" do not)
pub(crate) fn is_followable(href: &str) -> bool {
    ["https://", "http://", "mailto:"]
        .iter()
        .any(|scheme| href.starts_with(scheme))
}

// =============================================================================
// Shared building blocks
// =============================================================================

pub(crate) fn padding(lines: &mut Vec<Line<'static>>, rows: usize) {
    lines.extend(std::iter::repeat_with(Line::default).take(rows));
}

/// Eyebrow, title and subtitle at the top of a section
pub(crate) fn heading(
    ctx: &PageContext<'_>,
    eyebrow: &str,
    title: &str,
    subtitle: &str,
    width: usize,
) -> Vec<Line<'static>> {
    let theme = ctx.theme;
    let mut lines = Vec::new();
    padding(&mut lines, SECTION_PADDING);
    lines.push(Line::from(vec![
        Span::styled("◆ ", Style::default().fg(theme.accent_alt_color)),
        Span::styled(eyebrow.to_string(), Style::default().fg(theme.dim_color)),
    ]));
    lines.push(Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(theme.title_color)
            .add_modifier(Modifier::BOLD),
    )));
    let underline = "━".repeat(title.width().min(width));
    lines.push(Line::from(Span::styled(
        underline,
        Style::default().fg(theme.accent_color),
    )));
    if !subtitle.is_empty() {
        lines.extend(paragraph(subtitle, width, Style::default().fg(theme.dim_color), 0));
    }
    lines.push(Line::default());
    lines
}

/// Sub-heading inside a section
pub(crate) fn subheading(ctx: &PageContext<'_>, text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(ctx.theme.accent_alt_color)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Wrapped text with a left indent
pub(crate) fn paragraph(text: &str, width: usize, style: Style, indent: usize) -> Vec<Line<'static>> {
    let pad = " ".repeat(indent);
    wrap_text(text, width.saturating_sub(indent))
        .into_iter()
        .map(|line| Line::from(vec![Span::raw(pad.clone()), Span::styled(line, style)]))
        .collect()
}

/// Items rendered as `[item]` chips, wrapped to width
pub(crate) fn chips<S: AsRef<str>>(
    items: &[S],
    width: usize,
    style: Style,
    indent: usize,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut spans = vec![Span::raw(" ".repeat(indent))];
    let mut used = indent;

    for item in items {
        let chip = format!("[{}]", item.as_ref());
        let w = chip.width() + 1;
        if used + w > width && used > indent {
            lines.push(Line::from(std::mem::take(&mut spans)));
            spans.push(Span::raw(" ".repeat(indent)));
            used = indent;
        }
        spans.push(Span::styled(chip, style));
        spans.push(Span::raw(" "));
        used += w;
    }
    if used > indent {
        lines.push(Line::from(spans));
    }
    lines
}

/// Filter tabs; the active tab is highlighted
pub(crate) fn tabs<'l>(
    ctx: &PageContext<'_>,
    labels: impl Iterator<Item = (&'l str, bool)>,
    hint: &str,
    width: usize,
) -> Vec<Line<'static>> {
    let theme = ctx.theme;
    let mut lines = Vec::new();
    let mut spans = Vec::new();
    let mut used = 0;

    for (label, active) in labels {
        let text = format!(" {} ", label);
        let w = text.width() + 1;
        if used + w > width && used > 0 {
            lines.push(Line::from(std::mem::take(&mut spans)));
            used = 0;
        }
        let style = if active {
            Style::default()
                .fg(theme.bg_color)
                .bg(theme.accent_color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_color).bg(theme.surface_color)
        };
        spans.push(Span::styled(text, style));
        spans.push(Span::raw(" "));
        used += w;
    }
    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(Span::styled(
        hint.to_string(),
        Style::default().fg(theme.dim_color),
    )));
    lines
}

/// `█████░░░░░  95%` style level bar
pub(crate) fn level_bar(ctx: &PageContext<'_>, level: u8, bar_width: usize) -> Vec<Span<'static>> {
    let level = level.min(100) as usize;
    let filled = (level * bar_width + 50) / 100;
    vec![
        Span::styled(
            "█".repeat(filled),
            Style::default().fg(ctx.theme.accent_color),
        ),
        Span::styled(
            "░".repeat(bar_width - filled),
            Style::default().fg(ctx.theme.scrollbar_bg_color),
        ),
        Span::styled(
            format!(" {:>3}%", level),
            Style::default().fg(ctx.theme.highlight_color),
        ),
    ]
}
