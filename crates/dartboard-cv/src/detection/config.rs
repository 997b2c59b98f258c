//! Detection configuration

use crate::color::ColorRange;
use serde::{Deserialize, Serialize};

/// Board detection configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    pub color_range: ColorRange,
    /// A contour must be strictly larger than this, in square pixels
    pub min_board_area: f64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            color_range: ColorRange::default(),
            min_board_area: 500.0,
        }
    }
}

impl DetectionConfig {
    /// Red boards whose hue straddles 0 on the HSV circle
    pub fn for_wrapped_red() -> Self {
        Self {
            color_range: ColorRange::new([170, 100, 100], [10, 255, 255]),
            ..Self::default()
        }
    }
}
