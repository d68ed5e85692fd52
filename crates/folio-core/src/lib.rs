//! Folio Core - Shared library for the terminal portfolio
//!
//! This crate provides everything the Folio TUI renders and reacts to:
//! - Portfolio content (hero, about, skills, projects, experience, contact)
//! - Scroll spy: active section and header chrome derived from scroll position
//! - Tag filters for projects and skills
//! - Hero typing effect
//! - Contact form validation and mailto construction
//! - Configuration and paths

pub mod config;
pub mod constants;
pub mod contact;
pub mod content;
pub mod error;
pub mod filter;
pub mod paths;
pub mod scroll;
pub mod typewriter;

// Re-exports for convenience
pub use config::Config;
pub use contact::{ContactForm, FormError, SubmitOutcome};
pub use content::Portfolio;
pub use error::{FolioError, Result};
pub use scroll::{
    on_scroll, ChromeState, ScrollConfig, ScrollController, ScrollState, Section,
    SectionRegistry,
};
pub use typewriter::Typewriter;
