use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("zone '{name}' has an inverted {axis} range ({min} > {max})")]
    InvertedRange {
        name: String,
        axis: &'static str,
        min: f64,
        max: f64,
    },

    #[error("scoring table is empty")]
    EmptyZoneTable,

    #[error("normalization scale must be positive, got {0}")]
    InvalidScale(f64),

    #[error("window size must be non-zero, got {width}x{height}")]
    InvalidWindow { width: i32, height: i32 },
}
