//! Event handlers, implemented as `impl App` blocks by concern

mod contact;
mod event_loop;
mod keyboard;
mod mouse;
mod themes;
