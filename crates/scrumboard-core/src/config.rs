use crate::{ScrumboardError, ScrumboardResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub session_file: Option<PathBuf>,
    #[serde(default)]
    pub debounce_ms: Option<u64>,
}

impl AppConfig {
    pub fn config_dir() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/scrumboard"))
        }
        #[cfg(not(target_os = "macos"))]
        {
            dirs::config_dir().map(|config| config.join("scrumboard"))
        }
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Load the user's config file, falling back to defaults when it is
    /// missing or unreadable
    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(config) = Self::load_from(&config_path) {
                    return config;
                }
            }
        }
        Self::default()
    }

    pub fn load_from(path: &Path) -> ScrumboardResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ScrumboardError::Config(e.to_string()))
    }

    pub fn effective_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }

    pub fn effective_session_file(&self) -> PathBuf {
        self.session_file.clone().unwrap_or_else(|| {
            Self::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("session.json")
        })
    }

    pub fn effective_debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms.unwrap_or(DEFAULT_DEBOUNCE_MS))
    }
}
