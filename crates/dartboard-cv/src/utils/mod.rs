//! Utility modules

pub mod geometry;
pub mod image;

pub use self::image::ImageUtils;
