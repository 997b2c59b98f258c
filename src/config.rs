//! Application configuration file

use anyhow::{Context, Result};
use dartboard_core::GameConfig;
use dartboard_cv::{CaptureConfig, DetectionConfig, LandmarkConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub detection: DetectionConfig,
    pub capture: CaptureConfig,
    pub landmarks: LandmarkConfig,
}

impl AppConfig {
    pub const FILE_NAME: &'static str = "dartboard.json";

    /// Load `path`, or the defaults when it does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No {:?} found, using default configuration", path);
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {:?}", path))?;
        let config = Self::from_json(&text)
            .with_context(|| format!("Invalid config: {:?}", path))?;
        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text).context("Failed to parse configuration")?;
        config.game.validate()?;
        Ok(config)
    }

    /// Resolve relative asset and helper paths that do not exist from the
    /// working directory against the crate root.
    pub fn resolve_paths(&mut self, root: &Path) {
        for path in [
            &mut self.game.dart_asset,
            &mut self.landmarks.python,
            &mut self.landmarks.script,
        ] {
            *path = resolve(path, root);
        }
    }
}

fn resolve(path: &Path, root: &Path) -> PathBuf {
    if path.is_relative() && !path.exists() {
        root.join(path)
    } else {
        path.to_path_buf()
    }
}
