//! Skills: summary numbers, filter tabs and the filtered list

use folio_core::filter::{filter_skills, skill_stats, SkillFilter};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::{heading, level_bar, paragraph, tabs, PageContext, PageLink};
use crate::tui::utils::{pad_to_width, truncate_ellipsis};

const NAME_WIDTH: usize = 16;

pub(super) fn lines(
    ctx: &PageContext<'_>,
    width: usize,
    _links: &mut Vec<PageLink>,
) -> Vec<Line<'static>> {
    let skills = &ctx.portfolio.skills;
    if skills.is_empty() {
        return Vec::new();
    }
    let theme = ctx.theme;
    let dim = Style::default().fg(theme.dim_color);
    let number = Style::default()
        .fg(theme.highlight_color)
        .add_modifier(Modifier::BOLD);

    let mut lines = heading(
        ctx,
        "What I work with",
        "Skills & Expertise",
        "Tools and technologies I use to ship reliable products.",
        width,
    );

    let stats = skill_stats(skills);
    lines.push(Line::from(vec![
        Span::styled(stats.total.to_string(), number),
        Span::styled(" technologies   ", dim),
        Span::styled(format!("{}%", stats.average), number),
        Span::styled(" average level   ", dim),
        Span::styled(stats.experts.to_string(), number),
        Span::styled(" at expert level", dim),
    ]));
    lines.push(Line::default());

    lines.extend(tabs(
        ctx,
        SkillFilter::tabs().map(|tab| (tab.label(), tab == ctx.skill_filter)),
        "s / S to switch category",
        width,
    ));
    lines.push(Line::default());

    let bar_width = width.saturating_sub(NAME_WIDTH + 6).clamp(4, 30);
    for skill in filter_skills(skills, ctx.skill_filter) {
        let mut spans = vec![Span::styled(
            pad_to_width(&truncate_ellipsis(&skill.name, NAME_WIDTH - 1), NAME_WIDTH),
            Style::default()
                .fg(theme.title_color)
                .add_modifier(Modifier::BOLD),
        )];
        spans.extend(level_bar(ctx, skill.level, bar_width));
        spans.push(Span::styled(format!("  {}", skill.experience), dim));
        lines.push(Line::from(spans));
        lines.extend(paragraph(&skill.description, width, dim, 2));
        lines.push(Line::default());
    }

    lines
}
