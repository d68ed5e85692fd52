//! Color themes

mod definitions;
mod registry;

use once_cell::sync::Lazy;
use ratatui::style::Color;

pub use registry::ThemeRegistry;

/// All built-in themes
pub static THEME_REGISTRY: Lazy<ThemeRegistry> = Lazy::new(ThemeRegistry::new);

/// A named color palette
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub display_name: String,

    /// Page background
    pub bg_color: Color,
    /// Raised surfaces: frosted header, cards, form fields
    pub surface_color: Color,
    pub border_color: Color,
    pub text_color: Color,
    pub dim_color: Color,
    pub title_color: Color,

    /// Primary brand color (headings, active nav entry)
    pub accent_color: Color,
    /// Secondary brand color (gradients, chips)
    pub accent_alt_color: Color,
    /// Third accent for links and numbers
    pub highlight_color: Color,

    pub success_color: Color,
    pub warning_color: Color,
    pub error_color: Color,

    pub scrollbar_bg_color: Color,
    pub status_bar_bg_color: Color,
    /// Pointer glow on the frosted header
    pub glow_color: Color,
}
