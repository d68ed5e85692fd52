//! Mouse event handling: wheel scrolling, header navigation, page links,
//! scrollbar clicks and pointer tracking for the header glow

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::tui::app::App;
use crate::tui::page::HERO;

/// Lines per wheel notch
const WHEEL_STEP: usize = 3;

impl App {
    /// Returns true when the event changed anything visible
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) -> bool {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.view.scroll_down(WHEEL_STEP),
            MouseEventKind::ScrollUp => self.view.scroll_up(WHEEL_STEP),
            MouseEventKind::Down(MouseButton::Left) => {
                self.handle_left_click(mouse.column, mouse.row)
            }
            MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
                // glow is drawn only on the header
                let was_on_header = self
                    .view
                    .pointer
                    .is_some_and(|(x, y)| self.layout.is_on_header(x, y));
                self.view.pointer = Some((mouse.column, mouse.row));
                was_on_header || self.layout.is_on_header(mouse.column, mouse.row)
            }
            _ => false,
        }
    }

    fn handle_left_click(&mut self, x: u16, y: u16) -> bool {
        if let Some(id) = self.layout.nav_target_at(x, y).map(str::to_string) {
            tracing::debug!(section = %id, "Header navigation click");
            return self.view.jump_to(&id);
        }
        if self.layout.is_on_brand(x, y) {
            return self.view.jump_to(HERO);
        }
        if let Some(href) = self.layout.link_at(x, y).map(str::to_string) {
            self.open_link(&href);
            return true;
        }
        if self.layout.is_on_scrollbar(x, y) {
            return self.scrollbar_jump(y);
        }
        false
    }

    /// Jump proportionally to the clicked row of the scrollbar track
    fn scrollbar_jump(&mut self, y: u16) -> bool {
        let Some(track) = self.layout.scrollbar_area else {
            return false;
        };
        if track.height <= 1 {
            return false;
        }
        let row = y.saturating_sub(track.y) as usize;
        let span = (track.height - 1) as usize;
        let line = row.min(span) * self.view.scroll.max_scroll / span;
        self.view.scroll_to_line(line)
    }
}
