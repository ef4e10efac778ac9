//! Application settings
//!
//! Read-only configuration loaded from `settings.json` in the platform config
//! directory. Missing or invalid files fall back to defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const DEFAULT_ICON_URL_TEMPLATE: &str = "http://openweathermap.org/img/wn/{icon}@2x.png";

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// OpenWeatherMap API key, empty until configured
    pub api_key: String,
    /// Current weather endpoint
    pub base_url: String,
    /// Icon URL, `{icon}` is replaced by the icon code
    pub icon_url_template: String,
    /// Unit system passed as `units`
    pub units: String,
    /// Client-wide request timeout; `None` leaves reqwest's default
    pub request_timeout_secs: Option<u64>,
    /// Background fade settings
    pub fade: FadeSettings,
    /// Display and window settings
    pub display: DisplaySettings,
}

/// Background fade tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FadeSettings {
    /// Number of interpolation steps per transition
    pub steps: u32,
    /// Delay between two frames in milliseconds
    pub tick_ms: u64,
}

impl FadeSettings {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}

/// Window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Start in fullscreen mode (Escape leaves it)
    pub fullscreen: bool,
    /// Maximum number of suggestions listed under the search bar
    pub max_suggestions: usize,
    /// Image shown under the search bar; `None` hides the logo row
    pub logo_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            icon_url_template: DEFAULT_ICON_URL_TEMPLATE.to_string(),
            units: "metric".to_string(),
            request_timeout_secs: None,
            fade: FadeSettings::default(),
            display: DisplaySettings::default(),
        }
    }
}

impl Default for FadeSettings {
    fn default() -> Self {
        Self {
            steps: 30,
            tick_ms: 20,
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            fullscreen: true,
            max_suggestions: 6,
            logo_path: None,
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "zephyr", "Zephyr")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            return Self::default();
        };

        match Self::load_from_file(&path) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(SettingsError::Io(_)) => Self::default(),
            Err(e) => {
                tracing::warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Errors that can occur with settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
