//! User configuration (~/.folio/config.toml)
//!
//! Every key is optional. CLI flags override the file, the file overrides
//! built-in defaults.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::constants::ui::{DEFAULT_THEME, FRAME_INTERVAL};
use crate::error::{FolioError, Result};
use crate::paths;
use crate::scroll::ScrollConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Theme name
    pub theme: Option<String>,
    /// Render loop frame interval in milliseconds
    pub frame_ms: Option<u64>,
    pub scroll: ScrollOverrides,
}

/// Scroll spy settings that replace the renderer's defaults when set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrollOverrides {
    pub threshold: Option<usize>,
    pub header_offset: Option<usize>,
}

impl ScrollOverrides {
    pub fn apply(&self, base: ScrollConfig) -> ScrollConfig {
        ScrollConfig {
            threshold: self.threshold.unwrap_or(base.threshold),
            header_offset: self.header_offset.unwrap_or(base.header_offset),
        }
    }
}

impl Config {
    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents).map_err(|source| FolioError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from the default location
    pub fn load_default() -> Result<Self> {
        Self::load(&paths::config_file())
    }

    /// Theme to use: CLI flag, then config, then the default
    pub fn theme_name<'a>(&'a self, cli_theme: Option<&'a str>) -> &'a str {
        cli_theme
            .or(self.theme.as_deref())
            .unwrap_or(DEFAULT_THEME)
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_ms
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(FRAME_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.frame_interval(), FRAME_INTERVAL);
        assert_eq!(config.theme_name(None), DEFAULT_THEME);
    }

    #[test]
    fn test_parse_full_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "theme = \"dracula\"\nframe_ms = 33\n\n[scroll]\nthreshold = 2\n",
        )
        .unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.theme_name(None), "dracula");
        assert_eq!(config.theme_name(Some("nord")), "nord");
        assert_eq!(config.frame_interval(), Duration::from_millis(33));

        let scroll = config.scroll.apply(ScrollConfig::terminal(3));
        assert_eq!(scroll.threshold, 2);
        assert_eq!(scroll.header_offset, 3);
    }

    #[test]
    fn test_unknown_key_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "colour = \"red\"\n").unwrap();
        assert!(matches!(
            Config::load(&path),
            Err(FolioError::ConfigParse { .. })
        ));
    }

    #[test]
    fn test_zero_frame_interval_falls_back() {
        let config = Config {
            frame_ms: Some(0),
            ..Config::default()
        };
        assert_eq!(config.frame_interval(), FRAME_INTERVAL);
    }
}
