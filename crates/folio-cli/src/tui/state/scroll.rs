//! Page scroll position - viewport offset into the measured page
//!
//! Only the row offset lives here. The scroll spy state derived from it is
//! owned by `folio_core::ScrollController`.

/// Viewport offset for the page
#[derive(Debug, Default)]
pub struct PageScroll {
    /// Current offset (0 = top, max = bottom)
    pub offset: usize,
    /// Maximum offset for bounds checking
    pub max_scroll: usize,
    /// Viewport height from the last frame
    pub viewport_height: usize,
}

impl PageScroll {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_up(&mut self, amount: usize) {
        self.offset = self.offset.saturating_sub(amount);
    }

    pub fn scroll_down(&mut self, amount: usize) {
        self.offset = self.offset.saturating_add(amount).min(self.max_scroll);
    }

    /// One viewport up, keeping a line of context
    pub fn page_up(&mut self) {
        self.scroll_up(self.page_step());
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.page_step());
    }

    pub fn scroll_to_line(&mut self, line: usize) {
        self.offset = line.min(self.max_scroll);
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_end(&mut self) {
        self.offset = self.max_scroll;
    }

    /// Update bounds from the measured page and viewport
    ///
    /// Returns true when the offset had to be clamped.
    pub fn update_max_scroll(&mut self, total_lines: usize, viewport_height: u16) -> bool {
        self.viewport_height = viewport_height as usize;
        self.max_scroll = total_lines.saturating_sub(self.viewport_height);

        if self.offset > self.max_scroll {
            self.offset = self.max_scroll;
            return true;
        }
        false
    }

    fn page_step(&self) -> usize {
        self.viewport_height.saturating_sub(1).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scroll_with(total: usize, viewport: u16) -> PageScroll {
        let mut scroll = PageScroll::new();
        scroll.update_max_scroll(total, viewport);
        scroll
    }

    #[test]
    fn test_scroll_bounds() {
        let mut scroll = scroll_with(100, 20);
        assert_eq!(scroll.max_scroll, 80);

        scroll.scroll_up(5);
        assert_eq!(scroll.offset, 0);

        scroll.scroll_down(500);
        assert_eq!(scroll.offset, 80);
    }

    #[test]
    fn test_page_steps_keep_one_line() {
        let mut scroll = scroll_with(100, 20);
        scroll.page_down();
        assert_eq!(scroll.offset, 19);
        scroll.page_up();
        assert_eq!(scroll.offset, 0);
    }

    #[test]
    fn test_shrinking_page_clamps_offset() {
        let mut scroll = scroll_with(100, 20);
        scroll.scroll_to_end();
        assert!(scroll.update_max_scroll(50, 20));
        assert_eq!(scroll.offset, 30);
        assert!(!scroll.update_max_scroll(50, 20));
    }

    #[test]
    fn test_short_page_cannot_scroll() {
        let mut scroll = scroll_with(10, 20);
        assert_eq!(scroll.max_scroll, 0);
        scroll.scroll_to_line(7);
        assert_eq!(scroll.offset, 0);
    }
}
