//! Per-iteration timers: typing effect, form send delay, toasts

use std::time::Instant;

use crate::tui::app::App;

impl App {
    /// Advance every timer by the wall time since the last tick
    pub fn tick(&mut self) {
        let now = Instant::now();
        self.tick_at(now);
    }

    pub(crate) fn tick_at(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;

        if self.view.tick(elapsed, now) {
            self.needs_redraw = true;
        }
        if self.toasts.tick(now) {
            self.needs_redraw = true;
        }
    }
}
