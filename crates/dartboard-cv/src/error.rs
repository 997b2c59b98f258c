//! Capture errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("unable to open camera device {index}")]
    DeviceUnavailable { index: i32 },

    #[error("error capturing the frame")]
    FrameRead,

    #[error("OpenCV error: {0}")]
    OpenCv(#[from] opencv::Error),
}
