//! App State Components
//!
//! State owned by the running view, grouped by concern.

mod contact;
mod layout;
mod scroll;
mod view;

pub use contact::{ContactState, FormStatus};
pub use layout::LayoutState;
pub use scroll::PageScroll;
pub use view::PortfolioView;
