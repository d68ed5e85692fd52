//! Filesystem locations used by Folio
//!
//! Everything lives under `~/.folio/`.

use std::path::PathBuf;

use crate::constants::ui::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};

/// Root config directory (~/.folio)
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
}

/// Default config file (~/.folio/config.toml)
pub fn config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE_NAME)
}

/// Log directory (~/.folio/logs)
pub fn logs_dir() -> PathBuf {
    config_dir().join("logs")
}
