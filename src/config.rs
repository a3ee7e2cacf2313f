use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::app::EasingMode;

/// Values used to pre-fill the form. Nothing computed is stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_frame_rate")]
    pub frame_rate: f64,

    #[serde(default = "default_animation_length")]
    pub animation_length: f64,

    #[serde(default = "default_frame_duration")]
    pub frame_duration: f64,

    #[serde(default = "default_preset")]
    pub preset: EasingMode,

    #[serde(default)]
    pub p1: Option<f64>,

    #[serde(default)]
    pub p2: Option<f64>,

    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame_rate: default_frame_rate(),
            animation_length: default_animation_length(),
            frame_duration: default_frame_duration(),
            preset: default_preset(),
            p1: None,
            p2: None,
            format: OutputFormat::default(),
        }
    }
}

fn default_frame_rate() -> f64 {
    24.0
}

fn default_animation_length() -> f64 {
    2.0
}

fn default_frame_duration() -> f64 {
    0.5
}

fn default_preset() -> EasingMode {
    EasingMode::EaseInOut
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join("stopframe").join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}
