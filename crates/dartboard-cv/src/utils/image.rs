//! Image loading and compositing helpers

use crate::Result;
use anyhow::Context;
use dartboard_core::Point;
use image::RgbaImage;
use opencv::{
    core::{Mat, Vec3b},
    prelude::*,
};
use std::path::Path;

/// Image utility functions
pub struct ImageUtils;

impl ImageUtils {
    /// Load an image with its alpha channel
    pub fn load_rgba<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
        let img = image::open(&path)
            .with_context(|| format!("Failed to open image: {:?}", path.as_ref()))?
            .to_rgba8();
        Ok(img)
    }

    /// Alpha-blend `sprite` onto a BGR `CV_8UC3` canvas with its top-left
    /// corner at `origin`. Parts falling outside the canvas are clipped.
    pub fn blit_rgba(canvas: &mut Mat, sprite: &RgbaImage, origin: Point) -> Result<()> {
        let cols = canvas.cols();
        let rows = canvas.rows();

        for (sx, sy, pixel) in sprite.enumerate_pixels() {
            let x = origin.x + sx as i32;
            let y = origin.y + sy as i32;
            if x < 0 || y < 0 || x >= cols || y >= rows {
                continue;
            }

            let [r, g, b, a] = pixel.0;
            if a == 0 {
                continue;
            }

            let dst = canvas
                .at_2d_mut::<Vec3b>(y, x)
                .context("Canvas must be an 8-bit BGR image")?;
            let alpha = a as u32;
            for (channel, src) in [b, g, r].into_iter().enumerate() {
                let blended = (src as u32 * alpha + dst.0[channel] as u32 * (255 - alpha) + 127) / 255;
                dst.0[channel] = blended as u8;
            }
        }

        Ok(())
    }
}
