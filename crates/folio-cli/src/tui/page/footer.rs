//! Footer. Not a navigation target, so never registered with the spy.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use super::{is_followable, padding, PageContext, PageLink, NAV_LINKS};

const SOCIAL_SEPARATOR: &str = " · ";

pub(super) fn lines(
    ctx: &PageContext<'_>,
    width: usize,
    links: &mut Vec<PageLink>,
) -> Vec<Line<'static>> {
    let theme = ctx.theme;
    let dim = Style::default().fg(theme.dim_color);
    let mut lines = Vec::new();

    padding(&mut lines, 1);
    lines.push(Line::from(Span::styled(
        "─".repeat(width),
        Style::default().fg(theme.border_color),
    )));
    lines.push(Line::from(vec![
        Span::styled(
            ctx.portfolio.brand.clone(),
            Style::default()
                .fg(theme.accent_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  Build with me →  press m", dim),
    ]));

    let mut quick = vec![Span::styled("Quick links  ", dim)];
    for (idx, (_, label)) in NAV_LINKS.iter().enumerate() {
        quick.push(Span::styled(
            format!("{} ", idx + 1),
            Style::default().fg(theme.highlight_color),
        ));
        quick.push(Span::styled(
            format!("{}  ", label),
            Style::default().fg(theme.text_color),
        ));
    }
    lines.push(Line::from(quick));

    let socials = &ctx.portfolio.contact.socials;
    if !socials.is_empty() {
        let line = lines.len();
        let mut spans = Vec::new();
        let mut column = 0;
        for (idx, social) in socials.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled(SOCIAL_SEPARATOR, dim));
                column += SOCIAL_SEPARATOR.width();
            }
            let label_width = social.label.width();
            if is_followable(&social.href) {
                links.push(PageLink {
                    line,
                    column,
                    width: label_width,
                    href: social.href.clone(),
                });
                spans.push(Span::styled(
                    social.label.clone(),
                    Style::default()
                        .fg(theme.accent_alt_color)
                        .add_modifier(Modifier::UNDERLINED),
                ));
            } else {
                spans.push(Span::styled(social.label.clone(), dim));
            }
            column += label_width;
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(Span::styled(
        format!("© {} {}. All rights reserved.", ctx.year, ctx.portfolio.brand),
        dim,
    )));
    padding(&mut lines, 1);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::page::tests::{context, plain_text};
    use crate::tui::state::ContactState;
    use folio_core::Portfolio;

    #[test]
    fn test_copyright_year() {
        let portfolio = Portfolio::builtin();
        let contact = ContactState::default();
        let rendered = plain_text(&lines(&context(&portfolio, &contact), 60, &mut Vec::new()));
        assert!(rendered.contains("© 2026 TechBlaze. All rights reserved."));
        assert!(rendered.contains("5 Contact"));
    }

    #[test]
    fn test_social_labels_are_links() {
        let portfolio = Portfolio::builtin();
        let contact = ContactState::default();
        let mut links = Vec::new();
        let footer = lines(&context(&portfolio, &contact), 60, &mut links);

        let hrefs: Vec<&str> = links.iter().map(|l| l.href.as_str()).collect();
        assert_eq!(
            hrefs,
            vec!["https://github.com/Ayindecodes", "https://linkedin.com/in/ayindecodes"]
        );
        let row = plain_text(&footer[links[1].line..=links[1].line]);
        let label: String = row.chars().skip(links[1].column).take(links[1].width).collect();
        assert_eq!(label, "LinkedIn");
    }
}
