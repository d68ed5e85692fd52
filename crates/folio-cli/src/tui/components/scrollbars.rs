//! Page scrollbar: 1-char track with a solid thumb
//!
//! Visual: ░ (track) and █ (thumb)

use ratatui::{layout::Rect, Frame};

use crate::tui::themes::Theme;

/// Thumb position and size in rows, or `None` when nothing scrolls
pub fn thumb_geometry(
    height: usize,
    offset: usize,
    total: usize,
    visible: usize,
) -> Option<(usize, usize)> {
    if total <= visible || height == 0 {
        return None;
    }
    let size = ((visible as f32 / total as f32) * height as f32)
        .round()
        .clamp(2.0_f32.min(height as f32), height as f32) as usize;
    let max_offset = total - visible;
    let pos = ((offset.min(max_offset) as f32 / max_offset as f32)
        * height.saturating_sub(size) as f32)
        .round() as usize;
    Some((pos, size))
}

/// Render the page scrollbar in a 1-column `area`
pub fn render_page_scrollbar(
    f: &mut Frame,
    area: Rect,
    offset: usize,
    total: usize,
    visible: usize,
    theme: &Theme,
) {
    let buf = f.buffer_mut();
    let geometry = thumb_geometry(area.height as usize, offset, total, visible);

    for row in 0..area.height {
        let Some(cell) = buf.cell_mut((area.x, area.y + row)) else {
            continue;
        };
        match geometry {
            Some((pos, size)) if (pos..pos + size).contains(&(row as usize)) => {
                cell.set_char('█').set_fg(theme.accent_color);
            }
            Some(_) => {
                cell.set_char('░').set_fg(theme.scrollbar_bg_color);
            }
            // clear stale glyphs when the page stops scrolling
            None => {
                cell.set_char(' ').set_bg(theme.bg_color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_thumb_when_page_fits() {
        assert_eq!(thumb_geometry(20, 0, 15, 20), None);
        assert_eq!(thumb_geometry(0, 0, 100, 20), None);
    }

    #[test]
    fn test_thumb_tracks_offset() {
        assert_eq!(thumb_geometry(20, 0, 100, 20), Some((0, 4)));
        assert_eq!(thumb_geometry(20, 80, 100, 20), Some((16, 4)));
        let (mid, _) = thumb_geometry(20, 40, 100, 20).unwrap();
        assert_eq!(mid, 8);
    }

    #[test]
    fn test_thumb_minimum_size() {
        let (_, size) = thumb_geometry(10, 0, 10_000, 10).unwrap();
        assert_eq!(size, 2);
    }
}
