//! HSV color ranges and mask thresholding

use crate::Result;
use anyhow::Context;
use opencv::{
    core::{self, Mat, Scalar},
    prelude::*,
};
use serde::{Deserialize, Serialize};

/// Largest hue value in OpenCV's 8-bit HSV representation
pub const HUE_MAX: u8 = 179;

/// Inclusive lower/upper bounds in OpenCV HSV space (H 0-179, S and V 0-255)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRange {
    pub lower: [u8; 3],
    pub upper: [u8; 3],
}

impl Default for ColorRange {
    /// Saturated red, the board color
    fn default() -> Self {
        Self::new([0, 100, 100], [10, 255, 255])
    }
}

impl ColorRange {
    pub const fn new(lower: [u8; 3], upper: [u8; 3]) -> Self {
        Self { lower, upper }
    }

    /// A lower hue above the upper hue wraps through 0.
    pub fn wraps_hue(&self) -> bool {
        self.lower[0] > self.upper[0]
    }

    /// Binary `CV_8UC1` mask of the pixels of `hsv` inside the range.
    pub fn mask(&self, hsv: &Mat) -> Result<Mat> {
        if !self.wraps_hue() {
            return in_range(hsv, self.lower, self.upper);
        }

        let high = in_range(
            hsv,
            self.lower,
            [HUE_MAX, self.upper[1], self.upper[2]],
        )?;
        let low = in_range(hsv, [0, self.lower[1], self.lower[2]], self.upper)?;

        let mut mask = Mat::default();
        core::bitwise_or(&high, &low, &mut mask, &core::no_array())
            .context("Failed to combine wrapped hue masks")?;
        Ok(mask)
    }
}

fn in_range(hsv: &Mat, lower: [u8; 3], upper: [u8; 3]) -> Result<Mat> {
    let mut mask = Mat::default();
    core::in_range(hsv, &to_scalar(lower), &to_scalar(upper), &mut mask)
        .with_context(|| format!("Failed to threshold HSV range {:?}..={:?}", lower, upper))?;
    Ok(mask)
}

fn to_scalar(channels: [u8; 3]) -> Scalar {
    Scalar::new(
        channels[0] as f64,
        channels[1] as f64,
        channels[2] as f64,
        0.0,
    )
}
