use anyhow::{Context, Result};
use dartboard_cv::traits::LandmarkEstimator;
use dartboard_cv::utils::ImageUtils;
use dartboard_cv::{Camera, GameWindow, MediaPipeEstimator, NoHandEstimator};
use std::path::Path;

mod config;
mod session;

use config::AppConfig;
use session::GameSession;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut config = AppConfig::load(AppConfig::FILE_NAME)?;
    config.resolve_paths(Path::new(env!("CARGO_MANIFEST_DIR")));

    let sprite = ImageUtils::load_rgba(&config.game.dart_asset)
        .context("Failed to load the dart image")?;

    let mut camera = Camera::open(config.capture.device_index).map_err(|e| {
        log::error!("Unable to open the camera: {}", e);
        e
    })?;

    let estimator: Box<dyn LandmarkEstimator> = if config.landmarks.is_available() {
        match MediaPipeEstimator::spawn(&config.landmarks) {
            Ok(estimator) => Box::new(estimator),
            Err(e) => {
                log::warn!("Hand tracking disabled: {:#}", e);
                Box::new(NoHandEstimator)
            }
        }
    } else {
        log::warn!("Hand tracking disabled: MediaPipe helper not available");
        Box::new(NoHandEstimator)
    };

    let window = GameWindow::open(&config.game.window.title)?;
    let mut session = GameSession::new(
        config.game.clone(),
        config.detection.clone(),
        estimator,
        sprite,
    );

    session.run(&mut camera, &window, config.capture.read_failure)?;
    log::info!("Final score: {}", session.state().score);
    camera.release()?;
    Ok(())
}
