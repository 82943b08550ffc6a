//! Runtime settings for hosts embedding the simulation core.
use directories::ProjectDirs;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const SAVE_DIR_VAR: &str = "IRONVALE_SAVE_DIR";
pub const NARRATIVE_URL_VAR: &str = "IRONVALE_NARRATIVE_URL";
pub const NARRATIVE_TIMEOUT_VAR: &str = "IRONVALE_NARRATIVE_TIMEOUT_SECS";

const DEFAULT_NARRATIVE_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Directory holding one JSON file per character.
    pub save_dir: PathBuf,
    /// Narrative text endpoint. `None` means fallback text only.
    pub narrative_url: Option<String>,
    pub narrative_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            save_dir: default_save_dir(),
            narrative_url: None,
            narrative_timeout: Duration::from_secs(DEFAULT_NARRATIVE_TIMEOUT_SECS),
        }
    }
}

impl Settings {
    /// Construct settings from environment variables.
    ///
    /// Environment variables:
    /// - `IRONVALE_SAVE_DIR` - Save directory (default: platform data dir)
    /// - `IRONVALE_NARRATIVE_URL` - Narrative service endpoint (default: unset)
    /// - `IRONVALE_NARRATIVE_TIMEOUT_SECS` - Request timeout (default: 10)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Settings::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();

        if let Some(dir) = lookup(SAVE_DIR_VAR).filter(|v| !v.trim().is_empty()) {
            settings.save_dir = PathBuf::from(dir);
        }
        settings.narrative_url = lookup(NARRATIVE_URL_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        if let Some(secs) = lookup(NARRATIVE_TIMEOUT_VAR).and_then(|v| v.trim().parse::<u64>().ok()) {
            settings.narrative_timeout = Duration::from_secs(secs.max(1));
        }

        settings
    }
}

/// Platform data directory, or `./ironvale-saves` when the platform has none.
pub fn default_save_dir() -> PathBuf {
    ProjectDirs::from("", "", "ironvale")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("ironvale-saves"))
}
