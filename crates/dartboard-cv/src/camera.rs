//! Camera frame source

use crate::error::CaptureError;
use crate::traits::FrameSource;
use opencv::{
    core::Mat,
    prelude::*,
    videoio::{self, VideoCapture},
};
use serde::{Deserialize, Serialize};

/// What the loop does when a frame read fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReadFailurePolicy {
    /// Report it, keep the previous state and carry on with the next tick
    #[default]
    SkipTick,
    /// Report it and leave the loop
    ExitLoop,
}

/// Capture configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    pub device_index: i32,
    pub read_failure: ReadFailurePolicy,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            device_index: 0,
            read_failure: ReadFailurePolicy::SkipTick,
        }
    }
}

/// A camera device opened through OpenCV's video I/O
pub struct Camera {
    capture: VideoCapture,
    index: i32,
}

impl Camera {
    /// Open the camera at `index`. Failing to open is not retried.
    pub fn open(index: i32) -> Result<Self, CaptureError> {
        let capture = VideoCapture::new(index, videoio::CAP_ANY)?;
        if !capture.is_opened()? {
            return Err(CaptureError::DeviceUnavailable { index });
        }

        log::info!(
            "Opened camera {} ({}x{})",
            index,
            capture.get(videoio::CAP_PROP_FRAME_WIDTH)?,
            capture.get(videoio::CAP_PROP_FRAME_HEIGHT)?
        );
        Ok(Self { capture, index })
    }

    pub fn release(&mut self) -> Result<(), CaptureError> {
        if self.capture.is_opened()? {
            self.capture.release()?;
            log::info!("Released camera {}", self.index);
        }
        Ok(())
    }
}

impl FrameSource for Camera {
    fn read_frame(&mut self) -> Result<Mat, CaptureError> {
        let mut frame = Mat::default();
        let grabbed = self.capture.read(&mut frame);
        check_read(self.index, grabbed, frame.empty())?;
        Ok(frame)
    }
}

/// Any failed read, including an OpenCV error from the backend, is a
/// `FrameRead` so the loop's policy decides what happens next.
fn check_read(index: i32, grabbed: opencv::Result<bool>, empty: bool) -> Result<(), CaptureError> {
    match grabbed {
        Ok(true) if !empty => Ok(()),
        Ok(_) => Err(CaptureError::FrameRead),
        Err(e) => {
            log::debug!("Camera {} read error: {}", index, e);
            Err(CaptureError::FrameRead)
        }
    }
}

impl Drop for Camera {
    fn drop(&mut self) {
        if let Err(e) = self.release() {
            log::warn!("Failed to release camera {}: {}", self.index, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Result;
    use opencv::core::StsError;

    #[test]
    fn test_backend_error_is_frame_read() -> Result<()> {
        let grabbed = Err(opencv::Error::new(StsError, "device lost"));
        assert!(matches!(check_read(0, grabbed, true), Err(CaptureError::FrameRead)));
        Ok(())
    }

    #[test]
    fn test_empty_or_missing_frame_is_frame_read() -> Result<()> {
        assert!(matches!(check_read(0, Ok(false), true), Err(CaptureError::FrameRead)));
        assert!(matches!(check_read(0, Ok(true), true), Err(CaptureError::FrameRead)));
        assert!(check_read(0, Ok(true), false).is_ok());
        Ok(())
    }

    #[test]
    fn test_read_failure_policy_defaults_to_skip() -> Result<()> {
        let config: CaptureConfig = serde_json::from_str(r#"{"device_index": 2}"#)?;
        assert_eq!(config.device_index, 2);
        assert_eq!(config.read_failure, ReadFailurePolicy::SkipTick);
        Ok(())
    }
}
