//! Color-threshold board detector

use super::config::DetectionConfig;
use crate::utils::geometry::from_cv_rect;
use crate::Result;
use anyhow::Context;
use dartboard_core::BoardRect;
use opencv::{
    core::{Mat, Point, Vector},
    imgproc,
};

/// Finds the largest region of the board color in a frame.
///
/// Stateless: each call looks at one frame only. Keeping the last rectangle
/// around is the caller's job (`BoardState::update`).
pub struct BoardDetector {
    config: DetectionConfig,
}

impl BoardDetector {
    /// Create new detector
    pub fn new(config: DetectionConfig) -> Self {
        Self { config }
    }

    /// Detect the board in a BGR frame.
    pub fn detect(&self, frame: &Mat) -> Result<Option<BoardRect>> {
        let mask = self.threshold(frame)?;
        self.detect_in_mask(&mask)
    }

    /// Binary mask of the board-colored pixels of a BGR frame.
    pub fn threshold(&self, frame: &Mat) -> Result<Mat> {
        let mut hsv = Mat::default();
        imgproc::cvt_color(frame, &mut hsv, imgproc::COLOR_BGR2HSV, 0)
            .context("Failed to convert frame to HSV")?;
        self.config.color_range.mask(&hsv)
    }

    /// Detect the board in an already thresholded `CV_8UC1` mask.
    pub fn detect_in_mask(&self, mask: &Mat) -> Result<Option<BoardRect>> {
        let mut contours = Vector::<Vector<Point>>::new();
        imgproc::find_contours(
            mask,
            &mut contours,
            imgproc::RETR_EXTERNAL,
            imgproc::CHAIN_APPROX_SIMPLE,
            Point::new(0, 0),
        )
        .context("Failed to find contours")?;

        let Some((contour, area)) = largest_contour(&contours)? else {
            log::trace!("No board-colored region in frame");
            return Ok(None);
        };

        if area <= self.config.min_board_area {
            log::trace!(
                "Largest region {:.0}px² is below the {:.0}px² minimum",
                area,
                self.config.min_board_area
            );
            return Ok(None);
        }

        let rect = imgproc::bounding_rect(&contour).context("Failed to compute bounding box")?;
        log::debug!(
            "Board at ({}, {}) {}x{}, area {:.0}px²",
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            area
        );
        Ok(Some(from_cv_rect(rect)))
    }
}

/// Contour with strictly the largest area; the first one found wins ties.
/// Zero-area contours are never selected.
fn largest_contour(contours: &Vector<Vector<Point>>) -> Result<Option<(Vector<Point>, f64)>> {
    let mut max_area = 0.0;
    let mut max_contour = None;

    for contour in contours.iter() {
        let area = imgproc::contour_area(&contour, false)?;
        if area > max_area {
            max_area = area;
            max_contour = Some(contour);
        }
    }

    Ok(max_contour.map(|contour| (contour, max_area)))
}
