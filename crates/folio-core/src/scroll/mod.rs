//! Scroll spy - active section and header chrome from scroll position
//!
//! The page layout owns a [`SectionRegistry`] (section id -> distance from
//! the page top, in document order). On every scroll notification the
//! current position is turned into a [`ScrollState`]:
//! - `is_past_threshold`: the page has scrolled past a small threshold
//! - `active_section_id`: the last section whose top is at or above the
//!   scroll line (scroll position plus the fixed header height)
//!
//! Evaluation is a pure function of its inputs. [`ScrollController`] wraps it
//! with single-writer state ownership and per-frame coalescing.

mod controller;

pub use controller::ScrollController;

use serde::{Deserialize, Serialize};

use crate::constants::scroll::{HEADER_OFFSET, PAST_THRESHOLD, TERMINAL_PAST_THRESHOLD};
use crate::error::{FolioError, Result};

/// A named, vertically anchored region of the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    /// Distance from the page top to the section start, as measured by layout
    pub vertical_offset: usize,
}

impl Section {
    pub fn new(id: impl Into<String>, vertical_offset: usize) -> Self {
        Self {
            id: id.into(),
            vertical_offset,
        }
    }
}

/// Ordered, non-empty list of sections
///
/// Preconditions (not validated): ids are unique and offsets are
/// non-decreasing in document order. The first section is the fallback when
/// nothing qualifies as active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    /// Build a registry from sections in document order
    pub fn new(sections: Vec<Section>) -> Result<Self> {
        if sections.is_empty() {
            return Err(FolioError::EmptyRegistry);
        }
        Ok(Self { sections })
    }

    /// Section used when no section qualifies
    pub fn default_section(&self) -> &Section {
        &self.sections[0]
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index_of(id).is_some()
    }

    /// Position of a section in document order
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    /// Offset of a section, or `UnknownSection`
    pub fn offset_of(&self, id: &str) -> Result<usize> {
        self.sections
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.vertical_offset)
            .ok_or_else(|| FolioError::UnknownSection(id.to_string()))
    }
}

/// Threshold and header height used by the scroll spy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Scroll distance past which the header turns frosted (strict `>`)
    pub threshold: usize,
    /// Fixed header height added to the scroll position
    pub header_offset: usize,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            threshold: PAST_THRESHOLD,
            header_offset: HEADER_OFFSET,
        }
    }
}

impl ScrollConfig {
    /// Row-based config for a terminal page under a header `header_height` rows tall
    pub fn terminal(header_height: usize) -> Self {
        Self {
            threshold: TERMINAL_PAST_THRESHOLD,
            header_offset: header_height,
        }
    }
}

/// Derived scroll state consumed by the header and navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollState {
    pub scroll_y: usize,
    pub is_past_threshold: bool,
    pub active_section_id: String,
}

impl ScrollState {
    /// State on mount: top of page, default section active
    pub fn initial(registry: &SectionRegistry) -> Self {
        Self {
            scroll_y: 0,
            is_past_threshold: false,
            active_section_id: registry.default_section().id.clone(),
        }
    }

    pub fn chrome(&self) -> ChromeState {
        ChromeState::from_state(self)
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_section_id == id
    }
}

/// Header visual mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeState {
    /// At the top: no border, page background
    Transparent,
    /// Scrolled: raised background with a bottom border
    Frosted,
}

impl ChromeState {
    pub fn from_state(state: &ScrollState) -> Self {
        if state.is_past_threshold {
            ChromeState::Frosted
        } else {
            ChromeState::Transparent
        }
    }
}

/// Derive the scroll state for a scroll position
///
/// Picks the last section in document order whose offset is at or above
/// `current_scroll_y + header_offset`, so the greatest qualifying offset wins.
/// Falls back to the registry's first section when none qualifies.
pub fn on_scroll(
    current_scroll_y: usize,
    registry: &SectionRegistry,
    config: &ScrollConfig,
) -> ScrollState {
    let scroll_line = current_scroll_y.saturating_add(config.header_offset);

    let mut active = registry.default_section();
    for section in registry.sections() {
        if section.vertical_offset <= scroll_line {
            active = section;
        }
    }

    ScrollState {
        scroll_y: current_scroll_y,
        is_past_threshold: current_scroll_y > config.threshold,
        active_section_id: active.id.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> SectionRegistry {
        SectionRegistry::new(vec![
            Section::new("hero", 0),
            Section::new("about", 800),
            Section::new("skills", 1600),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_registry_rejected() {
        assert!(matches!(
            SectionRegistry::new(Vec::new()),
            Err(FolioError::EmptyRegistry)
        ));
    }

    #[test]
    fn test_threshold_boundary() {
        let reg = registry();
        let config = ScrollConfig::default();
        for y in 0..=8 {
            assert!(!on_scroll(y, &reg, &config).is_past_threshold, "y={}", y);
        }
        for y in [9, 10, 100, 5000] {
            assert!(on_scroll(y, &reg, &config).is_past_threshold, "y={}", y);
        }
    }

    #[test]
    fn test_active_section_table() {
        let reg = registry();
        let config = ScrollConfig::default();
        assert_eq!(on_scroll(0, &reg, &config).active_section_id, "hero");
        assert_eq!(on_scroll(750, &reg, &config).active_section_id, "about");
        assert_eq!(on_scroll(1550, &reg, &config).active_section_id, "skills");
        assert_eq!(on_scroll(10_000, &reg, &config).active_section_id, "skills");
    }

    #[test]
    fn test_scroll_line_is_inclusive() {
        let reg = registry();
        let config = ScrollConfig::default();
        // 700 + 100 lands exactly on "about"
        assert_eq!(on_scroll(700, &reg, &config).active_section_id, "about");
        assert_eq!(on_scroll(699, &reg, &config).active_section_id, "hero");
    }

    #[test]
    fn test_last_match_wins_on_equal_offsets() {
        let reg = SectionRegistry::new(vec![
            Section::new("hero", 0),
            Section::new("about", 500),
            Section::new("skills", 500),
        ])
        .unwrap();
        let state = on_scroll(450, &reg, &ScrollConfig::default());
        assert_eq!(state.active_section_id, "skills");
    }

    #[test]
    fn test_fallback_to_first_section() {
        let reg = SectionRegistry::new(vec![
            Section::new("hero", 300),
            Section::new("about", 900),
        ])
        .unwrap();
        let state = on_scroll(0, &reg, &ScrollConfig::default());
        assert_eq!(state.active_section_id, "hero");
    }

    #[test]
    fn test_active_always_registered() {
        let reg = registry();
        let config = ScrollConfig::default();
        for y in (0..4000).step_by(37) {
            let state = on_scroll(y, &reg, &config);
            assert!(reg.contains(&state.active_section_id));
        }
    }

    #[test]
    fn test_idempotent() {
        let reg = registry();
        let config = ScrollConfig::default();
        assert_eq!(on_scroll(1234, &reg, &config), on_scroll(1234, &reg, &config));
    }

    #[test]
    fn test_active_index_monotonic() {
        let reg = SectionRegistry::new(vec![
            Section::new("hero", 0),
            Section::new("about", 120),
            Section::new("skills", 480),
            Section::new("projects", 481),
            Section::new("experience", 1900),
            Section::new("contact", 2600),
        ])
        .unwrap();
        let config = ScrollConfig::default();
        let mut last = 0;
        for y in 0..3000 {
            let state = on_scroll(y, &reg, &config);
            let idx = reg.index_of(&state.active_section_id).unwrap();
            assert!(idx >= last, "index went back at y={}", y);
            last = idx;
        }
    }

    #[test]
    fn test_chrome_follows_threshold() {
        let reg = registry();
        let config = ScrollConfig::default();
        assert_eq!(on_scroll(8, &reg, &config).chrome(), ChromeState::Transparent);
        assert_eq!(on_scroll(9, &reg, &config).chrome(), ChromeState::Frosted);
    }

    #[test]
    fn test_initial_state() {
        let state = ScrollState::initial(&registry());
        assert_eq!(state.scroll_y, 0);
        assert!(!state.is_past_threshold);
        assert_eq!(state.active_section_id, "hero");
    }

    #[test]
    fn test_terminal_config() {
        let reg = SectionRegistry::new(vec![
            Section::new("hero", 0),
            Section::new("about", 30),
        ])
        .unwrap();
        let config = ScrollConfig::terminal(3);
        assert!(!on_scroll(1, &reg, &config).is_past_threshold);
        assert!(on_scroll(2, &reg, &config).is_past_threshold);
        assert_eq!(on_scroll(27, &reg, &config).active_section_id, "about");
        assert_eq!(on_scroll(26, &reg, &config).active_section_id, "hero");
    }

    #[test]
    fn test_offset_lookup() {
        let reg = registry();
        assert_eq!(reg.offset_of("about").unwrap(), 800);
        assert!(matches!(
            reg.offset_of("blog"),
            Err(FolioError::UnknownSection(id)) if id == "blog"
        ));
    }
}
