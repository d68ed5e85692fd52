//! Application constants and configuration defaults
//!
//! Centralized location for magic numbers and default values

use std::time::Duration;

/// Scroll spy configuration
pub mod scroll {
    /// Scroll distance past which the header switches to its frosted style.
    /// Strict comparison: exactly this value is still "at top".
    pub const PAST_THRESHOLD: usize = 8;

    /// Fixed header height added to the scroll position before picking the
    /// active section
    pub const HEADER_OFFSET: usize = 100;

    /// Threshold used by the terminal renderer, in rows
    pub const TERMINAL_PAST_THRESHOLD: usize = 1;
}

/// Hero typing effect timings
pub mod typing {
    use super::*;

    /// Delay between typed characters
    pub const TYPE_DELAY: Duration = Duration::from_millis(95);

    /// Delay between deleted characters
    pub const DELETE_DELAY: Duration = Duration::from_millis(45);

    /// Pause once a role is fully typed, before deleting starts
    pub const HOLD_DELAY: Duration = Duration::from_millis(1300);
}

/// Contact form behavior
pub mod contact {
    use super::*;

    /// Simulated delivery time before the form reports success
    pub const SEND_DELAY: Duration = Duration::from_millis(600);

    /// How long the "Copied" confirmation stays visible
    pub const COPIED_DURATION: Duration = Duration::from_millis(1200);

    /// Shown when validation fails
    pub const INCOMPLETE_MESSAGE: &str =
        "Please fill your name, a valid email, and a short message.";

    /// Shown when the mail client could not be opened
    pub const SEND_FAILED_MESSAGE: &str =
        "Something went wrong. You can email me directly instead.";
}

/// Skill statistics
pub mod skills {
    /// Minimum level counted as expert
    pub const EXPERT_LEVEL: u8 = 90;
}

/// UI configuration
pub mod ui {
    use super::*;

    /// Config directory name
    pub const CONFIG_DIR_NAME: &str = ".folio";

    /// Config file name inside the config directory
    pub const CONFIG_FILE_NAME: &str = "config.toml";

    /// Default theme name
    pub const DEFAULT_THEME: &str = "folio";

    /// Frame interval of the render loop (60fps)
    pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);
}
