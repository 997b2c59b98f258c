//! Conversions between OpenCV and game geometry types

use dartboard_core::{BoardRect, Point};
use opencv::core;

pub fn from_cv_rect(rect: core::Rect) -> BoardRect {
    BoardRect::new(rect.x, rect.y, rect.width, rect.height)
}

pub fn to_cv_rect(rect: BoardRect) -> core::Rect {
    core::Rect::new(rect.x, rect.y, rect.width, rect.height)
}

pub fn to_cv_point(point: Point) -> core::Point {
    core::Point::new(point.x, point.y)
}

/// BGR color scalar from an RGB triple
pub fn bgr_scalar(rgb: (u8, u8, u8)) -> core::Scalar {
    core::Scalar::new(rgb.2 as f64, rgb.1 as f64, rgb.0 as f64, 255.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_conversion() {
        let rect = BoardRect::new(3, 4, 50, 60);
        assert_eq!(from_cv_rect(to_cv_rect(rect)), rect);
    }

    #[test]
    fn test_bgr_order() {
        let scalar = bgr_scalar((255, 10, 0));
        assert_eq!(scalar.0[0], 0.0);
        assert_eq!(scalar.0[1], 10.0);
        assert_eq!(scalar.0[2], 255.0);
    }
}
