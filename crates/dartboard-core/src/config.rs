//! Game configuration

use crate::error::CoreError;
use crate::zones::{self, ScoringZone};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub scoring: ScoringConfig,
    pub dart_asset: PathBuf,
}

/// Drawing surface configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: i32,
    pub height: i32,
}

/// Scoring configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub zones: Vec<ScoringZone>,
    /// Divisor applied to the click offset from the board origin. It does not
    /// follow the detected board size.
    pub normalization_scale: f64,
    pub feedback_mode: FeedbackMode,
}

/// How the feedback line under the score is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FeedbackMode {
    /// Exact lookup of the accumulated score
    #[default]
    TotalScore,
    /// Category of the zone hit by the most recent throw
    LastThrow,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            scoring: ScoringConfig::default(),
            dart_asset: "assets/dart.png".into(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "AR Dart Board Game".to_string(),
            width: 800,
            height: 600,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            zones: zones::default_zones(),
            normalization_scale: 500.0,
            feedback_mode: FeedbackMode::TotalScore,
        }
    }
}

impl ScoringConfig {
    /// Normalized hit position of a click relative to the board origin.
    pub fn normalize(&self, click_x: i32, click_y: i32, origin_x: i32, origin_y: i32) -> (f64, f64) {
        (
            (click_x - origin_x) as f64 / self.normalization_scale,
            (click_y - origin_y) as f64 / self.normalization_scale,
        )
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if !(self.normalization_scale > 0.0) {
            return Err(CoreError::InvalidScale(self.normalization_scale));
        }
        zones::validate_zones(&self.zones)
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.window.width <= 0 || self.window.height <= 0 {
            return Err(CoreError::InvalidWindow {
                width: self.window.width,
                height: self.window.height,
            });
        }
        self.scoring.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.scoring.normalization_scale, 500.0);
        assert_eq!(config.scoring.zones.len(), 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_normalize_uses_fixed_scale() {
        let scoring = ScoringConfig::default();
        assert_eq!(scoring.normalize(300, 350, 50, 100), (0.5, 0.5));
        assert_eq!(scoring.normalize(0, 0, 50, 100), (-0.1, -0.2));
    }

    #[test]
    fn test_rejects_bad_scale() {
        let mut scoring = ScoringConfig::default();
        scoring.normalization_scale = 0.0;
        assert_eq!(scoring.validate(), Err(CoreError::InvalidScale(0.0)));
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "scoring": { "feedback_mode": "LastThrow" } }"#).unwrap();
        assert_eq!(config.scoring.feedback_mode, FeedbackMode::LastThrow);
        assert_eq!(config.scoring.zones, zones::default_zones());
        assert_eq!(config.window, WindowConfig::default());
    }
}
