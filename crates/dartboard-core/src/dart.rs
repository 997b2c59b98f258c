//! Screen placement of the dart sprite

use crate::geometry::{BoardRect, Point};

/// Dart sprite anchored bottom-center on a fixed-size canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DartSprite {
    pub width: i32,
    pub height: i32,
    canvas_width: i32,
    canvas_height: i32,
}

impl DartSprite {
    pub fn new(width: i32, height: i32, canvas_width: i32, canvas_height: i32) -> Self {
        Self {
            width,
            height,
            canvas_width,
            canvas_height,
        }
    }

    /// Top-left corner where the sprite is drawn.
    pub fn draw_origin(&self) -> Point {
        Point::new(
            self.canvas_width / 2 - self.width / 2,
            self.canvas_height - self.height,
        )
    }

    /// Clickable rectangle, centered on `(W/2, H - h/2)`.
    ///
    /// With an odd sprite height this sits one pixel below the drawn sprite.
    pub fn hit_rect(&self) -> BoardRect {
        let center_x = self.canvas_width / 2;
        let center_y = self.canvas_height - self.height / 2;
        BoardRect::new(
            center_x - self.width / 2,
            center_y - self.height / 2,
            self.width,
            self.height,
        )
    }

    pub fn is_hit(&self, click: Point) -> bool {
        self.hit_rect().contains(click)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_sprite_layout() {
        let dart = DartSprite::new(64, 128, 800, 600);
        assert_eq!(dart.draw_origin(), Point::new(368, 472));
        assert_eq!(dart.hit_rect(), BoardRect::new(368, 472, 64, 128));
    }

    #[test]
    fn test_odd_sprite_hit_rect_shifts_down() {
        let dart = DartSprite::new(31, 51, 800, 600);
        assert_eq!(dart.draw_origin(), Point::new(385, 549));
        assert_eq!(dart.hit_rect(), BoardRect::new(385, 550, 31, 51));
    }

    #[test]
    fn test_click_containment() {
        let dart = DartSprite::new(64, 128, 800, 600);
        assert!(dart.is_hit(Point::new(400, 500)));
        assert!(dart.is_hit(Point::new(368, 472)));
        assert!(!dart.is_hit(Point::new(432, 500)));
        assert!(!dart.is_hit(Point::new(400, 600)));
        assert!(!dart.is_hit(Point::new(10, 10)));
    }
}
