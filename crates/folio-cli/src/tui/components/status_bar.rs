//! Status bar - bottom row with the active section, scroll position and key hints

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::page::NAV_LINKS;
use crate::tui::themes::Theme;

const BROWSE_HINTS: &str = "j/k scroll · 1-5 sections · s/p filters · c contact · t theme · q quit";
const EDIT_HINTS: &str = "Tab next · Shift+Tab prev · Enter send on Message · Esc done";

/// Display label for a section id
pub fn section_label(id: &str) -> &str {
    NAV_LINKS
        .iter()
        .find(|(nav_id, _)| *nav_id == id)
        .map_or("Home", |(_, label)| *label)
}

/// Scroll position as a whole percentage of the scrollable range
pub fn scroll_percent(offset: usize, max_scroll: usize) -> u8 {
    if max_scroll == 0 {
        return 100;
    }
    ((offset.min(max_scroll) * 100) / max_scroll) as u8
}

pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    active_section: &str,
    offset: usize,
    max_scroll: usize,
    editing: bool,
) {
    f.render_widget(
        Paragraph::new("").style(Style::default().bg(theme.status_bar_bg_color)),
        area,
    );

    let left = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            section_label(active_section).to_string(),
            Style::default()
                .fg(theme.accent_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" │ {:>3}%", scroll_percent(offset, max_scroll)),
            Style::default().fg(theme.dim_color),
        ),
    ]);
    let left_width = left.width() as u16;
    f.render_widget(Paragraph::new(left), area);

    let hints = if editing { EDIT_HINTS } else { BROWSE_HINTS };
    // hints only when they do not collide with the left side
    if hints.width() as u16 + left_width + 2 <= area.width {
        f.render_widget(
            Paragraph::new(Span::styled(
                format!("{} ", hints),
                Style::default().fg(theme.dim_color),
            ))
            .alignment(Alignment::Right),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_label() {
        assert_eq!(section_label("skills"), "Skills");
        assert_eq!(section_label("hero"), "Home");
    }

    #[test]
    fn test_scroll_percent() {
        assert_eq!(scroll_percent(0, 0), 100);
        assert_eq!(scroll_percent(0, 200), 0);
        assert_eq!(scroll_percent(50, 200), 25);
        assert_eq!(scroll_percent(500, 200), 100);
    }
}
