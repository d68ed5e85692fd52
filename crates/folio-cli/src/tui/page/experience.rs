//! Experience timeline

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::{chips, heading, paragraph, PageContext, PageLink};

pub(super) fn lines(
    ctx: &PageContext<'_>,
    width: usize,
    _links: &mut Vec<PageLink>,
) -> Vec<Line<'static>> {
    let timeline = &ctx.portfolio.experience;
    if timeline.is_empty() {
        return Vec::new();
    }
    let theme = ctx.theme;
    let dim = Style::default().fg(theme.dim_color);
    let rail = Style::default().fg(theme.border_color);

    let mut lines = heading(
        ctx,
        "Where I've been",
        "Experience",
        "Roles, impact and what shipped.",
        width,
    );

    for (idx, job) in timeline.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled("◉ ", Style::default().fg(theme.accent_color)),
            Span::styled(
                job.role.clone(),
                Style::default()
                    .fg(theme.title_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {} – {}", job.start, job.end), dim),
        ]));

        let mut meta = vec![
            Span::styled("│ ", rail),
            Span::styled(job.company.clone(), Style::default().fg(theme.accent_alt_color)),
            Span::styled(format!(" · {}", job.kind.label()), dim),
        ];
        if let Some(location) = &job.location {
            meta.push(Span::styled(format!(" · {}", location), dim));
        }
        lines.push(Line::from(meta));

        for line in paragraph(&job.impact, width.saturating_sub(2), Style::default().fg(theme.success_color), 0) {
            let mut spans = vec![Span::styled("│ ", rail)];
            spans.extend(line.spans);
            lines.push(Line::from(spans));
        }

        for bullet in &job.bullets {
            for (i, line) in paragraph(bullet, width.saturating_sub(4), Style::default().fg(theme.text_color), 0)
                .into_iter()
                .enumerate()
            {
                let marker = if i == 0 { "• " } else { "  " };
                let mut spans = vec![
                    Span::styled("│ ", rail),
                    Span::styled(marker, Style::default().fg(theme.accent_color)),
                ];
                spans.extend(line.spans);
                lines.push(Line::from(spans));
            }
        }

        for line in chips(
            &job.achievements,
            width.saturating_sub(2),
            Style::default().fg(theme.highlight_color),
            0,
        ) {
            let mut spans = vec![Span::styled("│ ", rail)];
            spans.extend(line.spans);
            lines.push(Line::from(spans));
        }

        if idx + 1 < timeline.len() {
            lines.push(Line::from(Span::styled("│", rail)));
        }
    }
    lines.push(Line::default());

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::page::tests::{context, plain_text};
    use crate::tui::state::ContactState;
    use folio_core::Portfolio;

    #[test]
    fn test_timeline_entries() {
        let portfolio = Portfolio::builtin();
        let contact = ContactState::default();
        let rendered = plain_text(&lines(&context(&portfolio, &contact), 100, &mut Vec::new()));
        assert!(rendered.contains("Senior Full-Stack Developer  2023 – Present"));
        assert!(rendered.contains("Tech Studio · Contract · Lagos, Nigeria"));
        assert_eq!(rendered.matches("◉ ").count(), 3);
    }
}
