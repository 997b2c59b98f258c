//! Show the raw camera feed. Press `q` to quit.

use anyhow::Result;
use dartboard_cv::traits::{FrameSource, Screen};
use dartboard_cv::{Camera, CaptureConfig, GameWindow, ReadFailurePolicy};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = CaptureConfig {
        read_failure: ReadFailurePolicy::ExitLoop,
        ..CaptureConfig::default()
    };

    let mut camera = Camera::open(config.device_index).map_err(|e| {
        log::error!("Unable to open the camera: {}", e);
        e
    })?;
    let window = GameWindow::open("Video Feed")?;

    loop {
        match camera.read_frame() {
            Ok(frame) => window.show(&frame)?,
            Err(e) => {
                log::error!("{}", e);
                if config.read_failure == ReadFailurePolicy::ExitLoop {
                    break;
                }
            }
        }

        if window.poll_quit(1)? {
            break;
        }
    }

    camera.release()?;
    Ok(())
}
