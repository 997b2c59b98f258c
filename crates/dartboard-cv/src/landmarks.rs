//! Hand landmark estimators
//!
//! MediaPipe does the actual landmark estimation in a Python helper
//! (`scripts/hand_detect.py`). Frames go to its stdin as a
//! `width, height, channels` header of little-endian `u32`s followed by the
//! raw BGR bytes; it answers each frame with one JSON line.

use crate::traits::LandmarkEstimator;
use crate::Result;
use anyhow::{bail, Context};
use dartboard_core::hand::landmarks;
use dartboard_core::{HandLandmarks, Landmark};
use opencv::{core::Mat, prelude::*};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::{Child, ChildStdout, Command, Stdio};

/// Landmark estimator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandmarkConfig {
    pub enabled: bool,
    pub python: PathBuf,
    pub script: PathBuf,
    /// Hands scored below this are ignored
    pub confidence_threshold: f32,
}

impl Default for LandmarkConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            python: ".venv/bin/python".into(),
            script: "scripts/hand_detect.py".into(),
            confidence_threshold: 0.5,
        }
    }
}

impl LandmarkConfig {
    /// Whether the helper and its interpreter are present
    pub fn is_available(&self) -> bool {
        self.enabled && self.python.exists() && self.script.exists()
    }
}

#[derive(Deserialize, Debug)]
struct LandmarkJson {
    x: f32,
    y: f32,
    #[serde(default)]
    z: f32,
}

#[derive(Deserialize, Debug)]
struct HandJson {
    handedness: String,
    score: f32,
    landmarks: Vec<LandmarkJson>,
}

#[derive(Deserialize, Debug)]
struct EstimateResponse {
    hands: Vec<HandJson>,
    #[serde(default)]
    error: Option<String>,
}

/// Hands from one response line, best-first as the helper reported them.
fn parse_response(line: &str, confidence_threshold: f32) -> Result<Vec<HandLandmarks>> {
    let response: EstimateResponse = serde_json::from_str(line)
        .with_context(|| format!("Failed to parse landmark response: {}", line.trim()))?;

    if let Some(error) = response.error {
        log::warn!("Hand detector error: {}", error);
        return Ok(Vec::new());
    }

    let mut hands = Vec::new();
    for hand in response.hands {
        if hand.score < confidence_threshold {
            continue;
        }
        if hand.landmarks.len() != landmarks::COUNT {
            log::warn!(
                "Expected {} landmarks, got {}",
                landmarks::COUNT,
                hand.landmarks.len()
            );
            continue;
        }

        let mut points = [Landmark::default(); landmarks::COUNT];
        for (point, lm) in points.iter_mut().zip(&hand.landmarks) {
            *point = Landmark {
                x: lm.x,
                y: lm.y,
                z: lm.z,
            };
        }

        hands.push(HandLandmarks {
            landmarks: points,
            confidence: hand.score,
            handedness: hand.handedness,
        });
    }

    Ok(hands)
}

/// MediaPipe hand landmarker running in a Python subprocess
pub struct MediaPipeEstimator {
    process: Child,
    stdout_reader: BufReader<ChildStdout>,
    confidence_threshold: f32,
    dead: bool,
}

impl MediaPipeEstimator {
    /// Start the helper and wait for its `READY` line
    pub fn spawn(config: &LandmarkConfig) -> Result<Self> {
        if !config.script.exists() {
            bail!("Hand detection script not found at {:?}", config.script);
        }
        if !config.python.exists() {
            bail!(
                "Python interpreter not found at {:?}. Run: python3 -m venv .venv && .venv/bin/pip install mediapipe numpy",
                config.python
            );
        }

        log::info!("Starting MediaPipe hand detector subprocess...");

        let mut process = Command::new(&config.python)
            .arg(&config.script)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .context("Failed to start hand detector subprocess")?;

        let stdout = process
            .stdout
            .take()
            .context("Failed to capture hand detector stdout")?;
        let mut stdout_reader = BufReader::new(stdout);

        let mut ready_line = String::new();
        stdout_reader.read_line(&mut ready_line)?;
        if ready_line.trim() != "READY" {
            let _ = process.kill();
            bail!("Hand detector did not signal ready, got: {:?}", ready_line);
        }

        log::info!("MediaPipe hand detector ready");

        Ok(Self {
            process,
            stdout_reader,
            confidence_threshold: config.confidence_threshold.clamp(0.0, 1.0),
            dead: false,
        })
    }

    /// Send one frame and read the helper's answer. `None` once the helper
    /// has closed its stdout.
    fn exchange(&mut self, header: [u32; 3], data: &[u8]) -> Result<Option<String>> {
        let stdin = self
            .process
            .stdin
            .as_mut()
            .context("Hand detector stdin is closed")?;
        for value in header {
            stdin.write_all(&value.to_le_bytes())?;
        }
        stdin.write_all(data)?;
        stdin.flush()?;

        let mut response = String::new();
        if self.stdout_reader.read_line(&mut response)? == 0 {
            return Ok(None);
        }
        Ok(Some(response))
    }
}

impl LandmarkEstimator for MediaPipeEstimator {
    fn estimate(&mut self, frame: &Mat) -> Result<Vec<HandLandmarks>> {
        if self.dead || frame.empty() {
            return Ok(Vec::new());
        }

        let header = [frame.cols() as u32, frame.rows() as u32, frame.channels() as u32];
        let data = frame.data_bytes()?;

        let response = match self.exchange(header, data) {
            Ok(Some(response)) => response,
            Ok(None) => {
                log::warn!("Hand detector exited, hand tracking stops");
                self.dead = true;
                return Ok(Vec::new());
            }
            Err(e) => {
                log::warn!("Hand detector pipe failed, hand tracking stops: {:#}", e);
                self.dead = true;
                return Ok(Vec::new());
            }
        };

        let hands = parse_response(&response, self.confidence_threshold)?;
        if let Some(hand) = hands.first() {
            let tip = &hand.landmarks[landmarks::INDEX_FINGER_TIP];
            log::trace!(
                "Hand detected: {} (confidence={:.2}), index_tip=({:.3},{:.3})",
                hand.handedness,
                hand.confidence,
                tip.x,
                tip.y
            );
        }
        Ok(hands)
    }
}

impl Drop for MediaPipeEstimator {
    fn drop(&mut self) {
        let _ = self.process.kill();
        let _ = self.process.wait();
    }
}

/// Estimator that never sees a hand, used when MediaPipe is unavailable
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHandEstimator;

impl LandmarkEstimator for NoHandEstimator {
    fn estimate(&mut self, _frame: &Mat) -> Result<Vec<HandLandmarks>> {
        Ok(Vec::new())
    }
}
