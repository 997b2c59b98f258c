//! OpenCV collaborators for the AR dart board
//!
//! Camera capture, color-threshold board detection, hand landmark
//! estimation and canvas rendering. Game rules live in `dartboard-core`.

pub mod camera;
pub mod color;
pub mod detection;
pub mod error;
pub mod landmarks;
pub mod render;
pub mod utils;
pub mod window;

// Re-export commonly used types
pub use camera::{Camera, CaptureConfig, ReadFailurePolicy};
pub use color::ColorRange;
pub use detection::{BoardDetector, DetectionConfig};
pub use error::CaptureError;
pub use landmarks::{LandmarkConfig, MediaPipeEstimator, NoHandEstimator};
pub use render::Renderer;
pub use window::GameWindow;

// Error handling
pub type Result<T> = anyhow::Result<T>;

/// Seams between the game loop and its external collaborators
pub mod traits {
    use super::*;
    use dartboard_core::{HandLandmarks, Point};
    use opencv::core::Mat;

    /// Anything that yields successive BGR frames
    pub trait FrameSource {
        /// Blocks until a frame is available. A failed or empty read is
        /// `CaptureError::FrameRead`.
        fn read_frame(&mut self) -> std::result::Result<Mat, CaptureError>;
    }

    /// External hand landmark estimator
    pub trait LandmarkEstimator {
        /// Hands found in `frame`, best first. An empty list means no hand.
        fn estimate(&mut self, frame: &Mat) -> Result<Vec<HandLandmarks>>;
    }

    /// Where rendered frames go and where clicks and quit requests come from
    pub trait Screen {
        fn show(&self, image: &Mat) -> Result<()>;

        /// Pump events for up to `delay_ms`; `true` once the user asked to quit.
        fn poll_quit(&self, delay_ms: i32) -> Result<bool>;

        /// Clicks received since the last call, oldest first.
        fn take_clicks(&self) -> Vec<Point>;
    }
}
