//! User configuration.
//!
//! Read from `config.json` in the platform config directory (or the path in
//! `LABELX_CONFIG`). Every field has a default, so a missing file or a file
//! with only a few keys both work.

use crate::core::{
    COUNTER_DURATION_MS, HERO_METRICS_TICK_MS, LOADER_WINDOW_MS, SCROLL_DURATION_MS,
    SCROLL_LINE_ROWS,
};
use crate::landing::{LandingContent, Palette};
use crate::motion::{ScrollConfig, SequencerConfig};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const CONFIG_ENV_VAR: &str = "LABELX_CONFIG";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine a configuration directory")]
    NoConfigDir,
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaletteChoice {
    #[default]
    Truecolor,
    Basic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Play the loading splash before the page.
    pub show_loader: bool,
    pub loader_window_ms: u64,
    /// Tick of the hero network telemetry.
    pub metrics_tick_ms: u64,
    pub counter_duration_ms: u64,
    pub scroll_duration_ms: u64,
    /// Fixed RNG seed for reproducible metric runs.
    pub seed: Option<u64>,
    /// Default tracing filter; `RUST_LOG` wins when set.
    pub log_level: String,
    pub palette: PaletteChoice,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            show_loader: true,
            loader_window_ms: LOADER_WINDOW_MS,
            metrics_tick_ms: HERO_METRICS_TICK_MS,
            counter_duration_ms: COUNTER_DURATION_MS,
            scroll_duration_ms: SCROLL_DURATION_MS,
            seed: None,
            log_level: "info".to_string(),
            palette: PaletteChoice::default(),
        }
    }
}

/// Resolves the config file location.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }
    let dirs = ProjectDirs::from("io", "labelx", "labelx").ok_or(ConfigError::NoConfigDir)?;
    Ok(dirs.config_dir().join(CONFIG_FILE_NAME))
}

impl AppConfig {
    /// Loads from the default location; defaults when no file exists.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let json = self.to_json()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, json).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.loader_window_ms == 0 {
            return Err(ConfigError::Invalid("loader_window_ms must be positive".into()));
        }
        if self.metrics_tick_ms == 0 {
            return Err(ConfigError::Invalid("metrics_tick_ms must be positive".into()));
        }
        Ok(())
    }

    pub fn sequencer_config(&self) -> SequencerConfig {
        SequencerConfig {
            window: Duration::from_millis(self.loader_window_ms),
            ..SequencerConfig::default()
        }
    }

    pub fn scroll_config(&self) -> ScrollConfig {
        ScrollConfig {
            duration: Duration::from_millis(self.scroll_duration_ms),
            line_rows: SCROLL_LINE_ROWS,
        }
    }

    pub fn counter_duration(&self) -> Duration {
        Duration::from_millis(self.counter_duration_ms)
    }

    /// Page content with the configured palette and tick applied.
    pub fn landing_content(&self) -> LandingContent {
        let palette = match self.palette {
            PaletteChoice::Truecolor => Palette::labelx(),
            PaletteChoice::Basic => Palette::basic(),
        };
        let mut content = LandingContent::labelx().with_palette(palette);
        content.hero.network.interval = Duration::from_millis(self.metrics_tick_ms);
        content
    }
}
