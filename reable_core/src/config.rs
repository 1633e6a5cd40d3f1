//! Configuration file support for ReAble.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/reable/config.toml`.

use crate::types::{DailyTime, IntensityLevel, MobilityLevel};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// Fall-back values for omitted personalization form inputs
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_intensity")]
    pub intensity: IntensityLevel,

    #[serde(default = "default_mobility")]
    pub mobility: MobilityLevel,

    #[serde(default = "default_daily_time")]
    pub daily_time: DailyTime,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            intensity: default_intensity(),
            mobility: default_mobility(),
            daily_time: default_daily_time(),
        }
    }
}

/// Simulated adherence figures shown on the progress dashboard
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_daily_frequency")]
    pub daily_frequency: u32,

    #[serde(default = "default_duration_days")]
    pub duration_days: u32,

    #[serde(default = "default_completion_rate")]
    pub completion_rate: f64,

    #[serde(default = "default_effectiveness_rate")]
    pub effectiveness_rate: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            daily_frequency: default_daily_frequency(),
            duration_days: default_duration_days(),
            completion_rate: default_completion_rate(),
            effectiveness_rate: default_effectiveness_rate(),
        }
    }
}

// Default value functions
fn default_intensity() -> IntensityLevel {
    IntensityLevel::Medium
}

fn default_mobility() -> MobilityLevel {
    MobilityLevel::Medium
}

fn default_daily_time() -> DailyTime {
    DailyTime::Fifteen
}

fn default_daily_frequency() -> u32 {
    3
}

fn default_duration_days() -> u32 {
    14
}

fn default_completion_rate() -> f64 {
    0.75
}

fn default_effectiveness_rate() -> f64 {
    0.85
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("reable").join("config.toml")
    }

    /// Save the current configuration to the default path
    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_config_path();
        self.save_to(&config_path)
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}
