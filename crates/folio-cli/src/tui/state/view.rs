//! The mounted portfolio page
//!
//! Owns the content, the measured layout, the viewport offset and the scroll
//! spy. Every change to the offset is forwarded to the spy with `notify`; the
//! render loop flushes it once per frame after re-measuring.

use std::time::{Duration, Instant};

use chrono::Datelike;
use folio_core::filter::{ProjectFilter, SkillFilter};
use folio_core::{FolioError, Portfolio, ScrollConfig, ScrollController, ScrollState, Typewriter};

use super::{ContactState, PageScroll};
use crate::tui::page::{PageContext, PageLayout};
use crate::tui::themes::Theme;

pub struct PortfolioView {
    pub portfolio: Portfolio,
    pub spy: ScrollController,
    pub scroll: PageScroll,
    pub skill_filter: SkillFilter,
    pub project_filter: ProjectFilter,
    pub typewriter: Typewriter,
    pub contact: ContactState,
    /// Last known mouse position, for the header glow
    pub pointer: Option<(u16, u16)>,
    year: i32,
}

impl PortfolioView {
    /// Measure the page once at `width` and start the spy at the top
    pub fn mount(
        portfolio: Portfolio,
        theme: &Theme,
        config: ScrollConfig,
        width: usize,
    ) -> folio_core::Result<Self> {
        let typewriter = Typewriter::new(portfolio.hero.roles.clone());
        let year = chrono::Local::now().year();
        let contact = ContactState::default();

        let registry = {
            let ctx = PageContext {
                portfolio: &portfolio,
                theme,
                skill_filter: SkillFilter::All,
                project_filter: ProjectFilter::All,
                typed_role: "",
                contact: &contact,
                year,
            };
            PageLayout::build(&ctx, width)?.registry
        };
        tracing::info!(sections = registry.len(), width, "Mounted portfolio view");

        Ok(Self {
            portfolio,
            spy: ScrollController::new(registry, config),
            scroll: PageScroll::new(),
            skill_filter: SkillFilter::All,
            project_filter: ProjectFilter::All,
            typewriter,
            contact,
            pointer: None,
            year,
        })
    }

    pub fn page_context<'a>(&'a self, theme: &'a Theme) -> PageContext<'a> {
        PageContext {
            portfolio: &self.portfolio,
            theme,
            skill_filter: self.skill_filter,
            project_filter: self.project_filter,
            typed_role: self.typewriter.text(),
            contact: &self.contact,
            year: self.year,
        }
    }

    /// Re-measure the page for this frame and hand the new offsets to the spy
    pub fn relayout(
        &mut self,
        theme: &Theme,
        width: usize,
        viewport_height: u16,
    ) -> folio_core::Result<PageLayout> {
        let mut layout = PageLayout::build(&self.page_context(theme), width)?;
        layout.pad_for_viewport(viewport_height as usize);
        if self
            .scroll
            .update_max_scroll(layout.total_lines(), viewport_height)
        {
            self.spy.notify(self.scroll.offset);
        }
        self.spy.set_registry(layout.registry.clone());
        Ok(layout)
    }

    pub fn state(&self) -> &ScrollState {
        self.spy.state()
    }

    /// Evaluate pending scroll notifications; true if the state changed
    pub fn flush(&mut self) -> bool {
        self.spy.flush()
    }

    // =========================================================================
    // Scrolling
    // =========================================================================

    pub fn scroll_up(&mut self, amount: usize) -> bool {
        self.scrolled(|s| s.scroll_up(amount))
    }

    pub fn scroll_down(&mut self, amount: usize) -> bool {
        self.scrolled(|s| s.scroll_down(amount))
    }

    pub fn page_up(&mut self) -> bool {
        self.scrolled(PageScroll::page_up)
    }

    pub fn page_down(&mut self) -> bool {
        self.scrolled(PageScroll::page_down)
    }

    pub fn scroll_to_top(&mut self) -> bool {
        self.scrolled(PageScroll::scroll_to_top)
    }

    pub fn scroll_to_end(&mut self) -> bool {
        self.scrolled(PageScroll::scroll_to_end)
    }

    pub fn scroll_to_line(&mut self, line: usize) -> bool {
        self.scrolled(|s| s.scroll_to_line(line))
    }

    /// Scroll so the section starts at the top of the viewport
    ///
    /// Ids not in the current registry (unknown or empty sections) are
    /// ignored.
    pub fn jump_to(&mut self, id: &str) -> bool {
        match self.spy.registry().offset_of(id) {
            Ok(offset) => self.scrolled(|s| s.scroll_to_line(offset)),
            Err(err @ FolioError::UnknownSection(_)) => {
                tracing::warn!("Ignoring navigation: {}", err);
                false
            }
            Err(err) => {
                tracing::error!("Navigation failed: {}", err);
                false
            }
        }
    }

    fn scrolled(&mut self, op: impl FnOnce(&mut PageScroll)) -> bool {
        let before = self.scroll.offset;
        op(&mut self.scroll);
        if self.scroll.offset == before {
            return false;
        }
        self.spy.notify(self.scroll.offset);
        true
    }

    // =========================================================================
    // Filters and timers
    // =========================================================================

    pub fn next_skill_filter(&mut self) {
        self.skill_filter = self.skill_filter.next();
    }

    pub fn prev_skill_filter(&mut self) {
        self.skill_filter = self.skill_filter.prev();
    }

    pub fn next_project_filter(&mut self) {
        self.project_filter = self.project_filter.next();
    }

    pub fn prev_project_filter(&mut self) {
        self.project_filter = self.project_filter.prev();
    }

    /// Advance the typing effect and form timers
    pub fn tick(&mut self, elapsed: Duration, now: Instant) -> bool {
        let typed = self.typewriter.advance(elapsed);
        let contact = self.contact.tick(now);
        typed || contact
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::page::{ABOUT, CONTACT, HERO, SKILLS};
    use crate::tui::themes::THEME_REGISTRY;
    use folio_core::{on_scroll, ChromeState};

    const WIDTH: usize = 80;
    const VIEWPORT: u16 = 30;

    fn mounted() -> PortfolioView {
        let theme = THEME_REGISTRY.get_or_default("folio");
        let mut view =
            PortfolioView::mount(Portfolio::builtin(), theme, ScrollConfig::terminal(3), WIDTH)
                .unwrap();
        view.relayout(theme, WIDTH, VIEWPORT).unwrap();
        view.flush();
        view
    }

    #[test]
    fn test_mount_starts_at_hero() {
        let view = mounted();
        assert_eq!(view.state().active_section_id, HERO);
        assert_eq!(view.state().chrome(), ChromeState::Transparent);
        assert_eq!(view.scroll.offset, 0);
    }

    #[test]
    fn test_jump_activates_section_after_flush() {
        let mut view = mounted();
        assert!(view.jump_to(SKILLS));
        assert_eq!(view.state().active_section_id, HERO);

        assert!(view.flush());
        assert_eq!(view.state().active_section_id, SKILLS);
        assert_eq!(view.state().chrome(), ChromeState::Frosted);
        assert_eq!(
            view.scroll.offset,
            view.spy.registry().offset_of(SKILLS).unwrap()
        );
    }

    #[test]
    fn test_unknown_jump_is_ignored() {
        let mut view = mounted();
        assert!(!view.jump_to("blog"));
        assert!(!view.spy.has_pending());
    }

    #[test]
    fn test_burst_of_scrolls_matches_final_position() {
        let mut view = mounted();
        for _ in 0..25 {
            view.scroll_down(3);
        }
        view.scroll_up(2);
        view.flush();

        let expected = on_scroll(view.scroll.offset, view.spy.registry(), view.spy.config());
        assert_eq!(view.state(), &expected);
    }

    #[test]
    fn test_scroll_at_bounds_does_not_notify() {
        let mut view = mounted();
        assert!(!view.scroll_up(1));
        assert!(!view.spy.has_pending());
        assert!(view.scroll_down(1));
        assert!(view.spy.has_pending());
    }

    #[test]
    fn test_relayout_moves_offsets() {
        let theme = THEME_REGISTRY.get_or_default("folio");
        let mut view = mounted();
        let wide = view.spy.registry().offset_of(ABOUT).unwrap();
        view.relayout(theme, 40, VIEWPORT).unwrap();
        assert!(view.spy.registry().offset_of(ABOUT).unwrap() >= wide);
        assert!(view.spy.registry().contains(CONTACT));
    }

    #[test]
    fn test_filters_cycle() {
        let mut view = mounted();
        view.next_skill_filter();
        assert_ne!(view.skill_filter, SkillFilter::All);
        view.prev_skill_filter();
        assert_eq!(view.skill_filter, SkillFilter::All);
        view.prev_project_filter();
        assert_ne!(view.project_filter, ProjectFilter::All);
    }
}
