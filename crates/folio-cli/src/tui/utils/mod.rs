//! Utilities for the TUI
//!
//! Common helper functions used throughout the TUI.

mod text;

pub use text::{pad_to_width, truncate_ellipsis, wrap_text};
