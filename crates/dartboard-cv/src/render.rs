//! Overlay renderer
//!
//! Draws one frame of the game onto a fixed-size BGR canvas: board outline,
//! dart sprite, hand marker, score and feedback. The camera image is not
//! part of the overlay.

use crate::utils::geometry::{bgr_scalar, to_cv_point, to_cv_rect};
use crate::utils::ImageUtils;
use crate::Result;
use dartboard_core::{DartSprite, GameState, WindowConfig};
use image::RgbaImage;
use opencv::{
    core::{Mat, Point, Scalar, CV_8UC3},
    imgproc::{self, FONT_HERSHEY_SIMPLEX, LINE_8, LINE_AA},
};

const BOARD_COLOR: (u8, u8, u8) = (0, 255, 0);
const HAND_COLOR: (u8, u8, u8) = (255, 0, 0);
const TEXT_COLOR: (u8, u8, u8) = (255, 255, 255);

const BOARD_THICKNESS: i32 = 2;
const HAND_RADIUS: i32 = 10;

/// Text line: top-left anchor, font scale
const SCORE_TEXT: ((i32, i32), f64) = ((10, 10), 0.9);
const FEEDBACK_TEXT: ((i32, i32), f64) = ((10, 50), 0.6);

pub struct Renderer {
    width: i32,
    height: i32,
    sprite: RgbaImage,
}

impl Renderer {
    pub fn new(window: &WindowConfig, sprite: RgbaImage) -> Self {
        Self {
            width: window.width,
            height: window.height,
            sprite,
        }
    }

    /// Screen layout of the dart for click testing
    pub fn dart_sprite(&self) -> DartSprite {
        DartSprite::new(
            self.sprite.width() as i32,
            self.sprite.height() as i32,
            self.width,
            self.height,
        )
    }

    pub fn render(&self, state: &GameState, feedback: &str) -> Result<Mat> {
        let mut canvas =
            Mat::new_rows_cols_with_default(self.height, self.width, CV_8UC3, Scalar::all(0.0))?;

        if let Some(rect) = state.board.current() {
            imgproc::rectangle(
                &mut canvas,
                to_cv_rect(rect),
                bgr_scalar(BOARD_COLOR),
                BOARD_THICKNESS,
                LINE_8,
                0,
            )?;
        }

        ImageUtils::blit_rgba(&mut canvas, &self.sprite, self.dart_sprite().draw_origin())?;

        if let Some(hand) = state.hand {
            imgproc::circle(
                &mut canvas,
                to_cv_point(hand),
                HAND_RADIUS,
                bgr_scalar(HAND_COLOR),
                imgproc::FILLED,
                LINE_8,
                0,
            )?;
        }

        draw_text(&mut canvas, &format!("Score: {}", state.score), SCORE_TEXT)?;
        if !feedback.is_empty() {
            draw_text(&mut canvas, feedback, FEEDBACK_TEXT)?;
        }

        Ok(canvas)
    }
}

/// `put_text` anchors on the baseline; shift down so `anchor` is the top-left.
fn draw_text(canvas: &mut Mat, text: &str, (anchor, scale): ((i32, i32), f64)) -> Result<()> {
    let mut baseline = 0;
    let size = imgproc::get_text_size(text, FONT_HERSHEY_SIMPLEX, scale, 2, &mut baseline)?;
    imgproc::put_text(
        canvas,
        text,
        Point::new(anchor.0, anchor.1 + size.height),
        FONT_HERSHEY_SIMPLEX,
        scale,
        bgr_scalar(TEXT_COLOR),
        2,
        LINE_AA,
        false,
    )?;
    Ok(())
}
