//! Projects: the featured project, filter tabs and the filtered grid

use folio_core::content::{Project, ProjectStatus};
use folio_core::filter::{filter_projects, ProjectFilter};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use super::{chips, heading, is_followable, paragraph, tabs, PageContext, PageLink};
use crate::tui::themes::Theme;

/// Tech chips shown per grid entry
const GRID_TECH_LIMIT: usize = 4;

/// Left accent bar on featured card rows
const CARD_BAR: &str = "┃ ";

pub(super) fn lines(
    ctx: &PageContext<'_>,
    width: usize,
    links: &mut Vec<PageLink>,
) -> Vec<Line<'static>> {
    let projects = &ctx.portfolio.projects;
    if projects.is_empty() {
        return Vec::new();
    }
    let theme = ctx.theme;
    let dim = Style::default().fg(theme.dim_color);

    let mut lines = heading(
        ctx,
        "Selected work",
        "Projects",
        "A focused set of builds. Quality over quantity.",
        width,
    );

    let featured = ctx.portfolio.featured_project();
    if let Some(project) = featured {
        let start = lines.len();
        lines.extend(featured_card(ctx, project, width, links, start));
        lines.push(Line::default());
    }

    lines.extend(tabs(
        ctx,
        ProjectFilter::tabs().map(|tab| (tab.label(), tab == ctx.project_filter)),
        "p / P to switch filter",
        width,
    ));
    lines.push(Line::default());

    let grid = filter_projects(projects, featured, ctx.project_filter);
    if grid.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("No projects tagged {} yet.", ctx.project_filter.label()),
            dim,
        )));
        lines.push(Line::default());
    }
    for project in grid {
        lines.push(title_line(theme, project, false));
        lines.extend(paragraph(&project.description, width, dim, 2));
        let tech: Vec<&String> = project.tech.iter().take(GRID_TECH_LIMIT).collect();
        lines.extend(chips(
            &tech,
            width,
            Style::default().fg(theme.highlight_color),
            2,
        ));
        if let Some(spans) = link_spans(theme, project, lines.len(), 2, links) {
            let mut row = vec![Span::raw("  ")];
            row.extend(spans);
            lines.push(Line::from(row));
        }
        lines.push(Line::default());
    }

    lines
}

fn featured_card(
    ctx: &PageContext<'_>,
    project: &Project,
    width: usize,
    links: &mut Vec<PageLink>,
    start: usize,
) -> Vec<Line<'static>> {
    let theme = ctx.theme;
    let bar = Span::styled(CARD_BAR, Style::default().fg(theme.accent_color));
    let mut card = vec![title_line(theme, project, true)];

    if let Some(metrics) = &project.metrics {
        let mut spans = Vec::new();
        if let Some(users) = &metrics.users {
            spans.push(Span::styled(
                format!("{} users", users),
                Style::default().fg(theme.success_color),
            ));
        }
        if let Some(performance) = &metrics.performance {
            if !spans.is_empty() {
                spans.push(Span::styled(" · ", Style::default().fg(theme.dim_color)));
            }
            spans.push(Span::styled(
                performance.clone(),
                Style::default().fg(theme.success_color),
            ));
        }
        if !spans.is_empty() {
            card.push(Line::from(spans));
        }
    }

    let description = project
        .long_description
        .as_deref()
        .unwrap_or(&project.description);
    card.extend(paragraph(
        description,
        width.saturating_sub(2),
        Style::default().fg(theme.text_color),
        0,
    ));
    card.extend(chips(
        &project.tech,
        width.saturating_sub(2),
        Style::default().fg(theme.highlight_color),
        0,
    ));

    let row_line = start + card.len();
    if let Some(spans) = link_spans(theme, project, row_line, CARD_BAR.width(), links) {
        card.push(Line::from(spans));
    }

    // left accent bar on every card row
    card.into_iter()
        .map(|line| {
            let mut spans = vec![bar.clone()];
            spans.extend(line.spans);
            Line::from(spans)
        })
        .collect()
}

/// "Live demo · Source" spans for the project's followable links
///
/// Links are recorded at `line`, starting `indent` columns in; the caller
/// draws whatever fills those columns.
fn link_spans(
    theme: &Theme,
    project: &Project,
    line: usize,
    indent: usize,
    links: &mut Vec<PageLink>,
) -> Option<Vec<Span<'static>>> {
    let targets = [("Live demo", &project.demo), ("Source", &project.repo)];
    let mut spans = Vec::new();
    let mut column = indent;

    for (label, href) in targets {
        let Some(href) = href.as_deref().filter(|h| is_followable(h)) else {
            continue;
        };
        if !spans.is_empty() {
            spans.push(Span::styled(" · ", Style::default().fg(theme.dim_color)));
            column += 3;
        }
        links.push(PageLink {
            line,
            column,
            width: label.width(),
            href: href.to_string(),
        });
        spans.push(Span::styled(
            label,
            Style::default()
                .fg(theme.accent_alt_color)
                .add_modifier(Modifier::UNDERLINED),
        ));
        column += label.width();
    }

    if spans.is_empty() {
        return None;
    }
    Some(spans)
}

fn title_line(theme: &Theme, project: &Project, featured: bool) -> Line<'static> {
    let mut spans = Vec::new();
    if featured {
        spans.push(Span::styled(
            " FEATURED ",
            Style::default()
                .fg(theme.bg_color)
                .bg(theme.accent_alt_color)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(
        project.title.clone(),
        Style::default()
            .fg(theme.title_color)
            .add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled(
        format!("  {}", project.status.label()),
        Style::default().fg(status_color(theme, project.status)),
    ));
    spans.push(Span::styled(
        format!("  {}", project.year),
        Style::default().fg(theme.dim_color),
    ));
    Line::from(spans)
}

fn status_color(theme: &Theme, status: ProjectStatus) -> ratatui::style::Color {
    match status {
        ProjectStatus::Live => theme.success_color,
        ProjectStatus::Beta => theme.highlight_color,
        ProjectStatus::InDevelopment => theme.warning_color,
        ProjectStatus::Archived => theme.dim_color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::page::tests::{context, plain_text};
    use crate::tui::state::ContactState;
    use folio_core::content::ProjectTag;
    use folio_core::Portfolio;

    #[test]
    fn test_featured_shown_once() {
        let portfolio = Portfolio::builtin();
        let contact = ContactState::default();
        let rendered = plain_text(&lines(&context(&portfolio, &contact), 90, &mut Vec::new()));
        assert_eq!(rendered.matches("TaskMaster Pro").count(), 1);
        assert!(rendered.contains("FEATURED"));
        assert!(rendered.contains("FinanceFlow Dashboard"));
    }

    #[test]
    fn test_placeholder_links_are_not_followable() {
        let portfolio = Portfolio::builtin();
        let contact = ContactState::default();
        let mut links = Vec::new();
        let rendered = plain_text(&lines(&context(&portfolio, &contact), 90, &mut links));
        assert!(links.is_empty());
        assert!(!rendered.contains("Live demo"));
    }

    #[test]
    fn test_project_links_recorded_in_card_and_grid() {
        let mut portfolio = Portfolio::builtin();
        portfolio.projects[0].repo = Some("https://github.com/Ayindecodes/taskmaster".to_string());
        portfolio.projects[1].demo = Some("https://financeflow.example.com".to_string());
        let contact = ContactState::default();
        let mut links = Vec::new();
        let rendered = lines(&context(&portfolio, &contact), 90, &mut links);
        assert_eq!(links.len(), 2);

        for (link, label) in links.iter().zip(["Source", "Live demo"]) {
            let row = plain_text(&rendered[link.line..=link.line]);
            let text: String = row.chars().skip(link.column).take(link.width).collect();
            assert_eq!(text, label);
        }
        assert_eq!(links[0].href, "https://github.com/Ayindecodes/taskmaster");
        assert_eq!(links[1].href, "https://financeflow.example.com");
    }

    #[test]
    fn test_filter_without_matches() {
        let portfolio = Portfolio::builtin();
        let contact = ContactState::default();
        let mut ctx = context(&portfolio, &contact);
        ctx.project_filter = ProjectFilter::Tag(ProjectTag::Mobile);
        let mobile = plain_text(&lines(&ctx, 90, &mut Vec::new()));
        assert!(mobile.contains("Mobile Banking App"));
        assert!(!mobile.contains("FinanceFlow Dashboard"));

        let mut portfolio = Portfolio::builtin();
        portfolio.projects.retain(|p| p.featured);
        let mut ctx = context(&portfolio, &contact);
        ctx.project_filter = ProjectFilter::Tag(ProjectTag::Django);
        let empty = plain_text(&lines(&ctx, 90, &mut Vec::new()));
        assert!(empty.contains("No projects tagged Django yet."));
    }
}
