//! Hero banner: greeting, typing effect, pitch and calls to action

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::{chips, nav_key, padding, paragraph, PageContext, PageLink, CONTACT, PROJECTS, SECTION_PADDING};

pub(super) fn lines(
    ctx: &PageContext<'_>,
    width: usize,
    _links: &mut Vec<PageLink>,
) -> Vec<Line<'static>> {
    let theme = ctx.theme;
    let hero = &ctx.portfolio.hero;
    let mut lines = Vec::new();

    padding(&mut lines, SECTION_PADDING + 1);
    lines.push(Line::from(vec![
        Span::styled(" ● ", Style::default().fg(theme.success_color)),
        Span::styled(
            format!("{} ", hero.badge),
            Style::default().fg(theme.text_color).bg(theme.surface_color),
        ),
    ]));
    lines.push(Line::default());

    lines.push(Line::from(vec![
        Span::styled("Hi, I'm ", Style::default().fg(theme.text_color)),
        Span::styled(
            ctx.portfolio.owner.full_name.clone(),
            Style::default()
                .fg(theme.accent_color)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled("> ", Style::default().fg(theme.dim_color)),
        Span::styled(
            ctx.typed_role.to_string(),
            Style::default()
                .fg(theme.accent_alt_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("▌", Style::default().fg(theme.accent_color)),
    ]));
    lines.push(Line::default());

    lines.extend(paragraph(&hero.pitch, width, Style::default().fg(theme.text_color), 0));
    lines.push(Line::default());

    if !hero.stack.is_empty() {
        lines.push(Line::from(Span::styled(
            "Built with",
            Style::default().fg(theme.dim_color),
        )));
        lines.extend(chips(
            &hero.stack,
            width,
            Style::default().fg(theme.highlight_color),
            0,
        ));
        lines.push(Line::default());
    }

    let key = Style::default()
        .fg(theme.bg_color)
        .bg(theme.accent_color)
        .add_modifier(Modifier::BOLD);
    let label = Style::default().fg(theme.text_color);
    let mut actions = Vec::new();
    for (id, text) in [(PROJECTS, "View my work"), (CONTACT, "Let's connect")] {
        if let Some(n) = nav_key(id) {
            actions.push(Span::styled(format!(" {} ", n), key));
            actions.push(Span::styled(format!(" {}   ", text), label));
        }
    }
    actions.push(Span::styled(" m ", key));
    actions.push(Span::styled(" Email me", label));
    lines.push(Line::from(actions));
    padding(&mut lines, 2);
    lines.push(Line::from(Span::styled(
        "scroll ↓",
        Style::default().fg(theme.dim_color),
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
    fn test_shows_typed_role_and_name() {
        let portfolio = Portfolio::builtin();
        let contact = ContactState::default();
        let mut ctx = context(&portfolio, &contact);
        ctx.typed_role = "React Dev";
        let rendered = plain_text(&lines(&ctx, 80, &mut Vec::new()));
        assert!(rendered.contains("Hi, I'm AbdulRahman Ayinde Ojikutu"));
        assert!(rendered.contains("> React Dev▌"));
    }

    #[test]
    fn test_call_to_action_keys_match_navigation() {
        let portfolio = Portfolio::builtin();
        let contact = ContactState::default();
        let rendered = plain_text(&lines(&context(&portfolio, &contact), 80, &mut Vec::new()));
        let work = format!(" {}  View my work", nav_key(PROJECTS).unwrap());
        let connect = format!(" {}  Let's connect", nav_key(CONTACT).unwrap());
        assert!(rendered.contains(&work));
        assert!(rendered.contains(&connect));
    }
}
