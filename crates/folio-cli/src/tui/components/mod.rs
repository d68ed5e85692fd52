//! UI components
//!
//! Fixed chrome drawn around and over the page: header, status bar,
//! scrollbar and toasts.

pub mod header;
pub mod scrollbars;
pub mod status_bar;
pub mod toast;

pub use header::{render_header, HEADER_HEIGHT};
pub use scrollbars::render_page_scrollbar;
pub use status_bar::render_status_bar;
pub use toast::{render_toasts, Toast, ToastQueue};
