//! About: story, quick facts, achievements, core stack and principles

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::{chips, heading, level_bar, paragraph, subheading, PageContext, PageLink};
use crate::tui::utils::pad_to_width;

/// Name column of the core stack bars
const STACK_NAME_WIDTH: usize = 14;

pub(super) fn lines(
    ctx: &PageContext<'_>,
    width: usize,
    _links: &mut Vec<PageLink>,
) -> Vec<Line<'static>> {
    let theme = ctx.theme;
    let about = &ctx.portfolio.about;
    let text = Style::default().fg(theme.text_color);
    let dim = Style::default().fg(theme.dim_color);

    let mut lines = heading(ctx, "Get to know me", "About Me", &about.tagline, width);

    lines.push(subheading(ctx, "My Journey"));
    for para in &about.story {
        lines.extend(paragraph(para, width, text, 0));
        lines.push(Line::default());
    }

    if !about.personal_stats.is_empty() {
        for stat in &about.personal_stats {
            lines.push(Line::from(vec![
                Span::styled(pad_to_width(&stat.label, 12), dim),
                Span::styled(
                    stat.value.clone(),
                    Style::default()
                        .fg(theme.highlight_color)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        }
        lines.push(Line::default());
    }

    if !about.achievements.is_empty() {
        lines.push(subheading(ctx, "Highlights"));
        for item in &about.achievements {
            lines.push(Line::from(vec![
                Span::styled("★ ", Style::default().fg(theme.warning_color)),
                Span::styled(
                    item.title.clone(),
                    Style::default()
                        .fg(theme.title_color)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  {}", item.desc), dim),
            ]));
        }
        lines.push(Line::default());
    }

    if !about.core_stack.is_empty() {
        lines.push(subheading(ctx, "Core Technologies"));
        let bar_width = width.saturating_sub(STACK_NAME_WIDTH + 6).clamp(4, 40);
        for item in &about.core_stack {
            let mut spans = vec![Span::styled(pad_to_width(&item.name, STACK_NAME_WIDTH), text)];
            spans.extend(level_bar(ctx, item.level, bar_width));
            lines.push(Line::from(spans));
        }
        lines.push(Line::default());
    }

    if !about.additional_skills.is_empty() {
        lines.push(subheading(ctx, "Also working with"));
        lines.extend(chips(
            &about.additional_skills,
            width,
            Style::default().fg(theme.accent_alt_color),
            0,
        ));
        lines.push(Line::default());
    }

    if !about.principles.is_empty() {
        lines.push(subheading(ctx, "How I work"));
        for principle in &about.principles {
            lines.push(Line::from(vec![
                Span::styled("▸ ", Style::default().fg(theme.accent_color)),
                Span::styled(
                    principle.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD).fg(theme.title_color),
                ),
            ]));
            lines.extend(paragraph(&principle.desc, width, dim, 2));
        }
        lines.push(Line::default());
    }

    lines
}
