//! Theme registry for discovering and accessing themes

use super::Theme;
use std::collections::HashMap;

use folio_core::constants::ui::DEFAULT_THEME;

/// Registry of all available themes
pub struct ThemeRegistry {
    themes: HashMap<String, Theme>,
    ordered_names: Vec<String>,
}

impl ThemeRegistry {
    /// Create a new registry with all built-in themes
    pub fn new() -> Self {
        let mut registry = Self {
            themes: HashMap::new(),
            ordered_names: Vec::new(),
        };

        use super::definitions::*;

        registry.register(folio());
        registry.register(terminal());
        registry.register(tokyo_night());
        registry.register(dracula());
        registry.register(nord());
        registry.register(gruvbox_dark());

        registry
    }

    fn register(&mut self, theme: Theme) {
        self.ordered_names.push(theme.name.clone());
        self.themes.insert(theme.name.clone(), theme);
    }

    /// Get a theme by name, or the default theme
    pub fn get_or_default(&self, name: &str) -> &Theme {
        self.themes.get(name).unwrap_or_else(|| {
            tracing::warn!("Unknown theme '{}', using {}", name, DEFAULT_THEME);
            self.themes
                .get(DEFAULT_THEME)
                .expect("Default theme must exist")
        })
    }

    /// List all themes in registration order
    pub fn list(&self) -> Vec<(&String, &Theme)> {
        self.ordered_names
            .iter()
            .filter_map(|name| self.themes.get(name).map(|theme| (name, theme)))
            .collect()
    }

    /// Name of the theme after `name`, wrapping
    pub fn next_name(&self, name: &str) -> &str {
        let idx = self
            .ordered_names
            .iter()
            .position(|n| n == name)
            .map_or(0, |i| (i + 1) % self.ordered_names.len());
        &self.ordered_names[idx]
    }

    pub fn count(&self) -> usize {
        self.themes.len()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_registered() {
        let registry = ThemeRegistry::new();
        assert_eq!(registry.get_or_default(DEFAULT_THEME).name, DEFAULT_THEME);
        assert_eq!(registry.get_or_default("no-such-theme").name, DEFAULT_THEME);
    }

    #[test]
    fn test_next_name_wraps() {
        let registry = ThemeRegistry::new();
        let names: Vec<String> = registry.list().iter().map(|(n, _)| n.to_string()).collect();
        assert_eq!(registry.next_name(&names[0]), names[1]);
        assert_eq!(registry.next_name(names.last().unwrap()), names[0]);
        assert_eq!(registry.count(), names.len());
    }
}
