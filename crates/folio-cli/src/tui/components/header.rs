//! Header - fixed bar over the page with brand, navigation and scroll chrome
//!
//! `Transparent` blends into the page at the top; `Frosted` lifts the bar
//! onto the surface color with a bottom rule once the page scrolls.

use folio_core::{ChromeState, ScrollState};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::page::NAV_LINKS;
use crate::tui::themes::Theme;

/// Rows taken by the header, including the bottom rule
pub const HEADER_HEIGHT: u16 = 3;

/// Half-width of the pointer glow, in columns
const GLOW_RADIUS: u16 = 6;

const NAV_GAP: u16 = 2;

/// Clickable regions from the last render
#[derive(Debug, Default)]
pub struct HeaderHits {
    pub brand: Option<Rect>,
    pub nav: Vec<(String, Rect)>,
}

/// Render the header over the top rows of `area`
pub fn render_header(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    brand: &str,
    state: &ScrollState,
    pointer: Option<(u16, u16)>,
) -> HeaderHits {
    let area = Rect {
        height: HEADER_HEIGHT.min(area.height),
        ..area
    };
    if area.height == 0 || area.width == 0 {
        return HeaderHits::default();
    }
    let chrome = state.chrome();

    let block = match chrome {
        ChromeState::Transparent => Block::default().style(Style::default().bg(theme.bg_color)),
        ChromeState::Frosted => Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border_color))
            .style(Style::default().bg(theme.surface_color)),
    };
    f.render_widget(block, area);

    let row = area.y + area.height.min(2) / 2;
    let mut hits = HeaderHits::default();

    // Brand
    let brand_text = format!(" ◆ {}", brand);
    let brand_width = (brand_text.width() as u16).min(area.width);
    let brand_rect = Rect::new(area.x, row, brand_width, 1);
    f.render_widget(
        Paragraph::new(Span::styled(
            brand_text,
            Style::default()
                .fg(theme.accent_color)
                .add_modifier(Modifier::BOLD),
        )),
        brand_rect,
    );
    hits.brand = Some(brand_rect);

    // Navigation, right aligned; digits only when the labels do not fit
    let full: u16 = NAV_LINKS
        .iter()
        .map(|(_, label)| label.width() as u16 + NAV_GAP)
        .sum();
    let available = area.width.saturating_sub(brand_width + 2);
    let compact = full > available;
    let labels: Vec<String> = NAV_LINKS
        .iter()
        .enumerate()
        .map(|(idx, (_, label))| {
            if compact {
                format!("{}", idx + 1)
            } else {
                label.to_string()
            }
        })
        .collect();
    let total: u16 = labels.iter().map(|l| l.width() as u16 + NAV_GAP).sum();
    let mut x = (area.x + area.width).saturating_sub(total);

    for ((id, _), label) in NAV_LINKS.iter().zip(&labels) {
        let w = label.width() as u16;
        if x + w > area.x + area.width {
            break;
        }
        let style = if state.is_active(id) {
            Style::default()
                .fg(theme.accent_color)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.text_color)
        };
        let rect = Rect::new(x, row, w, 1);
        f.render_widget(Paragraph::new(Line::from(Span::styled(label.clone(), style))), rect);
        hits.nav.push((id.to_string(), rect));
        x += w + NAV_GAP;
    }

    if chrome == ChromeState::Frosted {
        if let Some((px, py)) = pointer {
            if py >= area.y && py < area.y + area.height {
                render_glow(f, area, px, theme);
            }
        }
    }

    hits
}

/// Tint the bottom rule around the pointer column
fn render_glow(f: &mut Frame, area: Rect, px: u16, theme: &Theme) {
    let rule_y = area.y + area.height - 1;
    let start = px.saturating_sub(GLOW_RADIUS).max(area.x);
    let end = (px + GLOW_RADIUS + 1).min(area.x + area.width);
    let buf = f.buffer_mut();
    for x in start..end {
        if let Some(cell) = buf.cell_mut((x, rule_y)) {
            cell.set_char('━').set_fg(theme.glow_color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::themes::THEME_REGISTRY;
    use folio_core::{on_scroll, ScrollConfig, Section, SectionRegistry};
    use ratatui::{backend::TestBackend, Terminal};

    fn state_at(scroll_y: usize) -> ScrollState {
        let registry = SectionRegistry::new(vec![
            Section::new("hero", 0),
            Section::new("about", 20),
            Section::new("skills", 40),
        ])
        .unwrap();
        on_scroll(scroll_y, &registry, &ScrollConfig::terminal(HEADER_HEIGHT as usize))
    }

    fn render(width: u16, state: &ScrollState, pointer: Option<(u16, u16)>) -> (HeaderHits, Terminal<TestBackend>) {
        let theme = THEME_REGISTRY.get_or_default("folio");
        let mut terminal = Terminal::new(TestBackend::new(width, 10)).unwrap();
        let mut hits = HeaderHits::default();
        terminal
            .draw(|f| {
                let area = f.area();
                hits = render_header(f, area, theme, "TechBlaze", state, pointer);
            })
            .unwrap();
        (hits, terminal)
    }

    #[test]
    fn test_nav_hits_cover_all_links() {
        let (hits, _) = render(100, &state_at(0), None);
        let ids: Vec<&str> = hits.nav.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["about", "skills", "projects", "experience", "contact"]);
        assert!(hits.nav.windows(2).all(|w| w[0].1.x < w[1].1.x));
        assert_eq!(hits.brand.map(|b| b.x), Some(0));
    }

    #[test]
    fn test_narrow_header_uses_digits() {
        let (hits, terminal) = render(30, &state_at(0), None);
        assert_eq!(hits.nav.len(), 5);
        assert!(hits.nav.iter().all(|(_, r)| r.width == 1));
        let row: String = (0..30)
            .map(|x| terminal.backend().buffer()[(x, 1)].symbol().to_string())
            .collect();
        assert!(row.contains("1  2  3  4  5"));
    }

    #[test]
    fn test_rule_only_when_frosted() {
        let theme = THEME_REGISTRY.get_or_default("folio");
        let (_, top) = render(100, &state_at(0), None);
        assert_eq!(top.backend().buffer()[(10, 2)].symbol(), " ");
        assert_eq!(top.backend().buffer()[(10, 2)].bg, theme.bg_color);

        let (_, scrolled) = render(100, &state_at(25), None);
        assert_eq!(scrolled.backend().buffer()[(10, 2)].symbol(), "─");
        assert_eq!(scrolled.backend().buffer()[(10, 1)].bg, theme.surface_color);
    }

    #[test]
    fn test_glow_follows_pointer_when_frosted() {
        let theme = THEME_REGISTRY.get_or_default("folio");
        let (_, top) = render(100, &state_at(0), Some((50, 1)));
        assert_ne!(top.backend().buffer()[(50, 2)].fg, theme.glow_color);

        let (_, scrolled) = render(100, &state_at(25), Some((50, 1)));
        assert_eq!(scrolled.backend().buffer()[(50, 2)].fg, theme.glow_color);
        assert_ne!(scrolled.backend().buffer()[(70, 2)].fg, theme.glow_color);
    }
}
