//! Theme switching

use std::sync::Arc;

use crate::tui::app::App;
use crate::tui::components::Toast;
use crate::tui::themes::THEME_REGISTRY;

impl App {
    pub fn set_theme(&mut self, name: &str) {
        let theme = THEME_REGISTRY.get_or_default(name);
        self.theme = Arc::new(theme.clone());
        self.theme_name = theme.name.clone();
        tracing::info!("Theme set to {}", self.theme_name);
    }

    /// Switch to the next registered theme
    pub fn cycle_theme(&mut self) {
        let next = THEME_REGISTRY.next_name(&self.theme_name).to_string();
        self.set_theme(&next);
        self.toasts
            .push(Toast::info(format!("Theme: {}", self.theme.display_name)));
    }
}
