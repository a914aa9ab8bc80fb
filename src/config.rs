// User configuration loaded from ~/.config/tubegrid/config.toml.
// Falls back to sensible defaults when the file is missing.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::api::client::DEFAULT_BACKEND_URL;
use crate::embed::DEFAULT_EMBED_HOST;
use crate::theme::THEME_DARK;

/// Application configuration, deserialized from `~/.config/tubegrid/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub embed: EmbedConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Target TUI refresh rate in frames per second (default: 30).
    #[serde(default = "default_frame_rate")]
    pub frame_rate: f64,
    /// Level for this crate's log lines (default: `"debug"`). `RUST_LOG` adds to it.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Base URL the `/api/...` paths are appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmbedConfig {
    /// Host serving `/embed/<id>`.
    #[serde(default = "default_embed_host")]
    pub host: String,
    /// Command that opens the embed address. Defaults to the platform opener.
    #[serde(default)]
    pub opener: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// `"dark"` or `"light"`.
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_frame_rate() -> f64 {
    30.0
}

fn default_log_level() -> String {
    "debug".to_string()
}

fn default_base_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

fn default_embed_host() -> String {
    DEFAULT_EMBED_HOST.to_string()
}

fn default_theme() -> String {
    THEME_DARK.to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            frame_rate: default_frame_rate(),
            log_level: default_log_level(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            host: default_embed_host(),
            opener: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
        }
    }
}

impl Config {
    /// Read config from disk, or return defaults if the file doesn't exist.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tubegrid")
            .join("config.toml")
    }
}
