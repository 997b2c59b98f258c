//! Game loop: detection, hand tracking, throws and rendering

use anyhow::Result;
use dartboard_core::{hand, DartSprite, GameConfig, GameState, Point, ThrowOutcome};
use dartboard_cv::traits::{FrameSource, LandmarkEstimator, Screen};
use dartboard_cv::{BoardDetector, DetectionConfig, ReadFailurePolicy, Renderer};
use image::RgbaImage;
use opencv::{core::Mat, prelude::*};

/// Whether the loop keeps going after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Exit,
}

pub struct GameSession {
    config: GameConfig,
    detector: BoardDetector,
    estimator: Box<dyn LandmarkEstimator>,
    renderer: Renderer,
    dart: DartSprite,
    state: GameState,
}

impl GameSession {
    pub fn new(
        config: GameConfig,
        detection: DetectionConfig,
        estimator: Box<dyn LandmarkEstimator>,
        sprite: RgbaImage,
    ) -> Self {
        let renderer = Renderer::new(&config.window, sprite);
        let dart = renderer.dart_sprite();
        Self {
            config,
            detector: BoardDetector::new(detection),
            estimator,
            renderer,
            dart,
            state: GameState::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn handle_click(&mut self, click: Point) -> Option<ThrowOutcome> {
        self.state.throw_dart(click, &self.dart, &self.config.scoring)
    }

    /// Update board and hand state from one camera frame.
    pub fn process_frame(&mut self, frame: &Mat) {
        let detection = self.detector.detect(frame).unwrap_or_else(|e| {
            log::warn!("Board detection failed: {:#}", e);
            None
        });
        self.state.board.update(detection);

        self.state.hand = if self.state.board.detected {
            self.locate_hand(frame)
        } else {
            None
        };
    }

    fn locate_hand(&mut self, frame: &Mat) -> Option<Point> {
        match self.estimator.estimate(frame) {
            Ok(hands) => hand::locate(frame.cols(), frame.rows(), &hands),
            Err(e) => {
                log::warn!("Hand estimation failed: {:#}", e);
                None
            }
        }
    }

    pub fn render(&self) -> Result<Mat> {
        let feedback = self.state.feedback_message(self.config.scoring.feedback_mode);
        self.renderer.render(&self.state, feedback)
    }

    /// One pass of the loop: pending clicks, one frame, one render.
    pub fn tick<S: FrameSource, W: Screen>(
        &mut self,
        source: &mut S,
        screen: &W,
        policy: ReadFailurePolicy,
    ) -> Result<TickOutcome> {
        for click in screen.take_clicks() {
            self.handle_click(click);
        }

        match source.read_frame() {
            Ok(frame) => self.process_frame(&frame),
            Err(e) => {
                log::warn!("{}", e);
                if policy == ReadFailurePolicy::ExitLoop {
                    return Ok(TickOutcome::Exit);
                }
            }
        }

        screen.show(&self.render()?)?;
        if screen.poll_quit(1)? {
            log::info!("Quit requested");
            return Ok(TickOutcome::Exit);
        }
        Ok(TickOutcome::Continue)
    }

    /// Run until the user quits, or until a failed frame read when the policy
    /// says so.
    pub fn run<S: FrameSource, W: Screen>(
        &mut self,
        source: &mut S,
        screen: &W,
        policy: ReadFailurePolicy,
    ) -> Result<()> {
        while self.tick(source, screen, policy)? == TickOutcome::Continue {}
        Ok(())
    }
}
