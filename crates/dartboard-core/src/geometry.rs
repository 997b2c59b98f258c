use serde::{Deserialize, Serialize};

/// Integer pixel coordinate, either in camera frame space or on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoardRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl BoardRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Result of the most recent board detection.
///
/// `rect` is only meaningful while `detected` is true. A tick that finds no
/// board clears the flag but leaves the previous rectangle in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoardState {
    pub rect: BoardRect,
    pub detected: bool,
}

impl BoardState {
    /// Apply one tick's detection result.
    pub fn update(&mut self, detection: Option<BoardRect>) {
        match detection {
            Some(rect) => {
                self.rect = rect;
                self.detected = true;
            }
            None => self.detected = false,
        }
    }

    pub fn current(&self) -> Option<BoardRect> {
        self.detected.then_some(self.rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_half_open() {
        let rect = BoardRect::new(10, 20, 5, 4);
        assert!(rect.contains(Point::new(10, 20)));
        assert!(rect.contains(Point::new(14, 23)));
        assert!(!rect.contains(Point::new(15, 20)));
        assert!(!rect.contains(Point::new(10, 24)));
        assert!(!rect.contains(Point::new(9, 21)));
    }

    #[test]
    fn test_update_keeps_stale_rect() {
        let mut board = BoardState::default();
        board.update(Some(BoardRect::new(1, 2, 30, 40)));
        assert!(board.detected);
        assert_eq!(board.current(), Some(BoardRect::new(1, 2, 30, 40)));

        board.update(None);
        assert!(!board.detected);
        assert_eq!(board.current(), None);
        assert_eq!(board.rect, BoardRect::new(1, 2, 30, 40));
    }

    #[test]
    fn test_default_is_undetected_zero_rect() {
        let board = BoardState::default();
        assert!(!board.detected);
        assert_eq!(board.rect, BoardRect::new(0, 0, 0, 0));
    }
}
