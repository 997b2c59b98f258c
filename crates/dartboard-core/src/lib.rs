//! Game logic for the AR dart board: geometry, scoring zones, game state.
//!
//! Nothing in this crate touches the camera or the window; the OpenCV side
//! lives in `dartboard-cv`.

pub mod config;
pub mod dart;
pub mod error;
pub mod feedback;
pub mod geometry;
pub mod hand;
pub mod state;
pub mod zones;

pub use config::{FeedbackMode, GameConfig, ScoringConfig, WindowConfig};
pub use dart::DartSprite;
pub use error::CoreError;
pub use feedback::Feedback;
pub use geometry::{BoardRect, BoardState, Point};
pub use hand::{HandLandmarks, Landmark};
pub use state::{GameState, ThrowOutcome};
pub use zones::{ScoringZone, ZoneRange};
