//! Layout State - Areas from the last frame, used for mouse hit testing

use ratatui::layout::Rect;

/// Cached layout areas
///
/// Updated each frame during rendering, read by the mouse handler.
#[derive(Debug, Default)]
pub struct LayoutState {
    /// Fixed header bar
    pub header_area: Option<Rect>,
    /// Brand in the header (click jumps to the hero)
    pub brand_area: Option<Rect>,
    /// Navigation entries in the header
    pub nav_areas: Vec<(String, Rect)>,
    /// Visible page links (href, area)
    pub link_areas: Vec<(String, Rect)>,
    /// Page scrollbar track
    pub scrollbar_area: Option<Rect>,
}

impl LayoutState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigation target under a cell, if any
    pub fn nav_target_at(&self, x: u16, y: u16) -> Option<&str> {
        self.nav_areas
            .iter()
            .find(|(_, area)| contains(area, x, y))
            .map(|(id, _)| id.as_str())
    }

    /// Link target under a cell, if any
    pub fn link_at(&self, x: u16, y: u16) -> Option<&str> {
        self.link_areas
            .iter()
            .find(|(_, area)| contains(area, x, y))
            .map(|(href, _)| href.as_str())
    }

    pub fn is_on_brand(&self, x: u16, y: u16) -> bool {
        self.brand_area.is_some_and(|area| contains(&area, x, y))
    }

    pub fn is_on_header(&self, x: u16, y: u16) -> bool {
        self.header_area.is_some_and(|area| contains(&area, x, y))
    }

    pub fn is_on_scrollbar(&self, x: u16, y: u16) -> bool {
        self.scrollbar_area.is_some_and(|area| contains(&area, x, y))
    }
}

fn contains(area: &Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_hit_testing() {
        let mut layout = LayoutState::new();
        layout.nav_areas = vec![
            ("about".to_string(), Rect::new(10, 1, 7, 1)),
            ("skills".to_string(), Rect::new(18, 1, 8, 1)),
        ];
        layout.brand_area = Some(Rect::new(2, 1, 6, 1));

        assert_eq!(layout.nav_target_at(10, 1), Some("about"));
        assert_eq!(layout.nav_target_at(17, 1), None);
        assert_eq!(layout.nav_target_at(25, 1), Some("skills"));
        assert_eq!(layout.nav_target_at(20, 0), None);
        assert!(layout.is_on_brand(7, 1));
        assert!(!layout.is_on_brand(8, 1));
    }

    #[test]
    fn test_link_hit_testing() {
        let mut layout = LayoutState::new();
        layout.link_areas = vec![("https://github.com/x".to_string(), Rect::new(12, 20, 6, 1))];
        assert_eq!(layout.link_at(12, 20), Some("https://github.com/x"));
        assert_eq!(layout.link_at(17, 20), Some("https://github.com/x"));
        assert_eq!(layout.link_at(18, 20), None);
        assert_eq!(layout.link_at(12, 21), None);
    }

    #[test]
    fn test_missing_areas_never_hit() {
        let layout = LayoutState::new();
        assert!(!layout.is_on_header(0, 0));
        assert!(!layout.is_on_scrollbar(0, 0));
    }
}
