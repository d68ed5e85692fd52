//! Contact: email card, socials and the message form

use std::time::Instant;

use folio_core::contact::FormField;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use super::{heading, is_followable, PageContext, PageLink};
use crate::tui::state::FormStatus;
use crate::tui::utils::{pad_to_width, wrap_text};

const LABEL_WIDTH: usize = 10;
/// Rows reserved for the message body
const MESSAGE_ROWS: usize = 4;

pub(super) fn lines(
    ctx: &PageContext<'_>,
    width: usize,
    links: &mut Vec<PageLink>,
) -> Vec<Line<'static>> {
    let theme = ctx.theme;
    let contact = ctx.contact;
    let dim = Style::default().fg(theme.dim_color);
    let key = Style::default().fg(theme.highlight_color);

    let mut lines = heading(
        ctx,
        "Get in touch",
        "Let's build something",
        &ctx.portfolio.contact.blurb,
        width,
    );

    let copied = contact.is_copied(Instant::now());
    lines.push(Line::from(vec![
        Span::styled(pad_to_width("Email", LABEL_WIDTH), dim),
        Span::styled(
            ctx.portfolio.owner.email.clone(),
            Style::default()
                .fg(theme.accent_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        if copied {
            Span::styled("✓ Copied", Style::default().fg(theme.success_color))
        } else {
            Span::styled("y copy", key)
        },
    ]));
    lines.push(Line::from(vec![
        Span::styled(pad_to_width("Location", LABEL_WIDTH), dim),
        Span::styled(
            ctx.portfolio.owner.location.clone(),
            Style::default().fg(theme.text_color),
        ),
    ]));
    for social in &ctx.portfolio.contact.socials {
        if is_followable(&social.href) {
            links.push(PageLink {
                line: lines.len(),
                column: LABEL_WIDTH,
                width: social.href.width(),
                href: social.href.clone(),
            });
        }
        lines.push(Line::from(vec![
            Span::styled(pad_to_width(&social.label, LABEL_WIDTH), dim),
            Span::styled(
                social.href.clone(),
                Style::default()
                    .fg(theme.accent_alt_color)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]));
    }
    lines.push(Line::default());

    let hint = if contact.is_editing() {
        "Tab next field · Enter on Message sends · Esc done"
    } else {
        "c write a message · m open your mail client"
    };
    lines.push(Line::from(Span::styled(hint, dim)));

    let field_width = width.saturating_sub(LABEL_WIDTH + 1).max(8);
    for field in FormField::ALL {
        lines.extend(field_lines(ctx, field, field_width));
    }
    lines.push(Line::default());

    if let Some(status) = status_line(ctx) {
        lines.push(status);
        lines.push(Line::default());
    }

    lines
}

fn field_lines(ctx: &PageContext<'_>, field: FormField, width: usize) -> Vec<Line<'static>> {
    let theme = ctx.theme;
    let contact = ctx.contact;
    let focused = contact.focus == Some(field);
    let invalid = contact.invalid.contains(&field);

    let label_style = if invalid {
        Style::default().fg(theme.error_color)
    } else if focused {
        Style::default()
            .fg(theme.accent_color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.dim_color)
    };
    let box_style = Style::default().fg(theme.text_color).bg(theme.surface_color);

    let mut value = contact.form.field(field).to_string();
    if focused {
        value.push('▌');
    }
    let rows = if field == FormField::Message {
        let mut rows = wrap_text(&value, width);
        if rows.len() < MESSAGE_ROWS {
            rows.resize(MESSAGE_ROWS, String::new());
        }
        rows
    } else {
        // single-line fields show the tail while typing
        vec![tail(&value, width)]
    };

    rows.into_iter()
        .enumerate()
        .map(|(i, row)| {
            let label = if i == 0 { field.label() } else { "" };
            Line::from(vec![
                Span::styled(pad_to_width(label, LABEL_WIDTH), label_style),
                Span::styled(pad_to_width(&row, width), box_style),
            ])
        })
        .collect()
}

fn tail(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        return text.to_string();
    }
    text.chars().skip(count - width).collect()
}

fn status_line(ctx: &PageContext<'_>) -> Option<Line<'static>> {
    let theme = ctx.theme;
    match &ctx.contact.status {
        FormStatus::Idle => None,
        FormStatus::Sending { .. } => Some(Line::from(Span::styled(
            "Sending…",
            Style::default().fg(theme.warning_color),
        ))),
        FormStatus::Sent => Some(Line::from(Span::styled(
            "✓ Thanks! Your mail client has the message ready to send.",
            Style::default().fg(theme.success_color),
        ))),
        FormStatus::Error(message) => Some(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(theme.error_color),
        ))),
    }
}
