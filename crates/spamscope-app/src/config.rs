//! Application settings (.spamscope/config.toml)
//!
//! All fields have defaults; a missing or empty config file yields a fully
//! usable `Settings`. A malformed file is reported as `Error::Config` so the
//! binary can fail with a readable message instead of silently falling back.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use spamscope_core::prelude::*;
use spamscope_core::types::Section;

const CONFIG_FILENAME: &str = "config.toml";
const SPAMSCOPE_DIR: &str = ".spamscope";

/// Application settings (.spamscope/config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub notifications: NotificationSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Prediction service settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    /// Base URL of the classifier backend
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ServerSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Toast notification timing
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotificationSettings {
    /// How long a toast stays fully visible, in milliseconds
    #[serde(default = "default_visible_ms")]
    pub visible_ms: u64,

    /// Duration of the slide-out phase, in milliseconds
    #[serde(default = "default_exit_ms")]
    pub exit_ms: u64,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            visible_ms: default_visible_ms(),
            exit_ms: default_exit_ms(),
        }
    }
}

impl NotificationSettings {
    pub fn visible(&self) -> Duration {
        Duration::from_millis(self.visible_ms)
    }

    pub fn exit(&self) -> Duration {
        Duration::from_millis(self.exit_ms)
    }
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Section shown at startup when no deep link is given
    #[serde(default)]
    pub default_section: Section,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            default_section: Section::Home,
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_visible_ms() -> u64 {
    3000
}

fn default_exit_ms() -> u64 {
    300
}

// ─────────────────────────────────────────────────────────────────────────────
// Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Path to the config file under the given base directory.
pub fn config_path(base_dir: &Path) -> PathBuf {
    base_dir.join(SPAMSCOPE_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `<base_dir>/.spamscope/config.toml`.
///
/// A missing file yields defaults. A file that exists but does not parse is
/// an error; silently ignoring a typo'd config is worse than failing.
pub fn load_settings(base_dir: &Path) -> Result<Settings> {
    let path = config_path(base_dir);
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Settings::default());
    }

    let contents = std::fs::read_to_string(&path)?;
    let settings: Settings = toml::from_str(&contents)
        .map_err(|e| Error::config(format!("{}: {e}", path.display())))?;

    info!(path = %path.display(), "loaded settings");
    Ok(settings)
}

/// Load settings from the user's home directory, falling back to the current
/// directory when no home is available.
pub fn load_default_settings() -> Result<Settings> {
    let base = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    load_settings(&base)
}
