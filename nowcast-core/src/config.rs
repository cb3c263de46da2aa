use anyhow::{Context, Result, anyhow, ensure};
use directories::ProjectDirs;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::provider::openmeteo::DEFAULT_ENDPOINT;

pub const DEFAULT_CITY: &str = "London";
pub const DEFAULT_LATITUDE: f64 = 51.5072;
pub const DEFAULT_LONGITUDE: f64 = -0.1276;
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 60;

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// city = "London"
/// latitude = 51.5072
/// longitude = -0.1276
/// refresh_interval_secs = 60
/// ```
///
/// Every field is optional; missing ones take the built-in London defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Display name shown above the conditions. Not sent upstream.
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Base forecast endpoint, without query string.
    pub endpoint: String,
    pub refresh_interval_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            city: DEFAULT_CITY.to_string(),
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
        }
    }
}

impl Config {
    /// Load config from the platform config directory, or defaults if the
    /// file doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        cfg.validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        tracing::info!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "nowcast", "nowcast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            (-90.0..=90.0).contains(&self.latitude),
            "latitude {} is outside -90..=90",
            self.latitude
        );
        ensure!(
            (-180.0..=180.0).contains(&self.longitude),
            "longitude {} is outside -180..=180",
            self.longitude
        );
        Url::parse(&self.endpoint)
            .with_context(|| format!("endpoint '{}' is not a valid URL", self.endpoint))?;
        ensure!(
            self.refresh_interval_secs >= 1,
            "refresh_interval_secs must be at least 1"
        );
        Ok(())
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }
}
