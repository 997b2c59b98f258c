//! Hand landmarks and the fingertip locator

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Hand landmark indices (MediaPipe hand landmark model convention)
pub mod landmarks {
    pub const COUNT: usize = 21;
    pub const INDEX_FINGER_TIP: usize = 8;
}

/// A single landmark, `x`/`y` normalized to the frame size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    /// Depth relative to the wrist
    pub z: f32,
}

/// All 21 landmarks of one detected hand.
#[derive(Debug, Clone, PartialEq)]
pub struct HandLandmarks {
    pub landmarks: [Landmark; landmarks::COUNT],
    pub confidence: f32,
    pub handedness: String,
}

impl HandLandmarks {
    /// Index fingertip in pixel coordinates, truncated toward zero.
    pub fn index_finger_tip(&self, frame_width: i32, frame_height: i32) -> Point {
        let tip = &self.landmarks[landmarks::INDEX_FINGER_TIP];
        Point::new(
            (tip.x * frame_width as f32) as i32,
            (tip.y * frame_height as f32) as i32,
        )
    }
}

/// Fingertip of the first hand, or `None` when the estimator found no hand.
pub fn locate(frame_width: i32, frame_height: i32, hands: &[HandLandmarks]) -> Option<Point> {
    hands
        .first()
        .map(|hand| hand.index_finger_tip(frame_width, frame_height))
}
