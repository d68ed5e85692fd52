//! Terminal user interface for the portfolio

pub mod app;
pub mod components;
pub mod handlers;
pub mod page;
pub mod state;
pub mod terminal;
pub mod themes;
pub mod utils;

pub use app::App;
