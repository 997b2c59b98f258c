use crate::config::{FeedbackMode, ScoringConfig};
use crate::dart::DartSprite;
use crate::feedback::Feedback;
use crate::geometry::{BoardState, Point};
use crate::zones;
use serde::Serialize;

/// What a single throw scored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThrowOutcome {
    /// Normalized hit position
    pub hit: (f64, f64),
    pub points: u32,
    /// Name of the matched zone, `None` when no zone contained the hit
    pub zone: Option<String>,
}

/// Mutable state owned by the game loop.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameState {
    pub score: u32,
    pub board: BoardState,
    pub hand: Option<Point>,
    pub last_throw: Option<ThrowOutcome>,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score a click. Clicks outside the dart sprite are ignored.
    ///
    /// The hit is measured from the last known board origin even if the board
    /// is not detected on the current tick.
    pub fn throw_dart(
        &mut self,
        click: Point,
        dart: &DartSprite,
        scoring: &ScoringConfig,
    ) -> Option<ThrowOutcome> {
        if !dart.is_hit(click) {
            return None;
        }

        let origin = self.board.rect.origin();
        let (hit_x, hit_y) = scoring.normalize(click.x, click.y, origin.x, origin.y);
        let zone = zones::zone_at(hit_x, hit_y, &scoring.zones);
        let outcome = ThrowOutcome {
            hit: (hit_x, hit_y),
            points: zone.map_or(0, |z| z.points),
            zone: zone.map(|z| z.name.clone()),
        };

        self.score = self.score.saturating_add(outcome.points);
        log::info!(
            "Throw at ({:.3}, {:.3}): {} (+{}), score {}",
            hit_x,
            hit_y,
            outcome.zone.as_deref().unwrap_or("no zone"),
            outcome.points,
            self.score
        );

        self.last_throw = Some(outcome.clone());
        Some(outcome)
    }

    pub fn feedback(&self, mode: FeedbackMode) -> Option<Feedback> {
        match mode {
            FeedbackMode::TotalScore => Feedback::for_score(self.score),
            FeedbackMode::LastThrow => self
                .last_throw
                .as_ref()
                .and_then(|t| t.zone.as_deref())
                .and_then(Feedback::from_zone_name),
        }
    }

    /// Feedback line to draw, empty when there is none.
    pub fn feedback_message(&self, mode: FeedbackMode) -> &'static str {
        self.feedback(mode).map_or("", |f| f.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BoardRect;

    fn dart() -> DartSprite {
        DartSprite::new(100, 100, 800, 600)
    }

    #[test]
    fn test_click_outside_sprite_is_ignored() {
        let mut state = GameState::new();
        let scoring = ScoringConfig::default();
        assert!(state.throw_dart(Point::new(5, 5), &dart(), &scoring).is_none());
        assert_eq!(state.score, 0);
        assert!(state.last_throw.is_none());
    }

    #[test]
    fn test_throw_uses_stale_board_origin() {
        let mut state = GameState::new();
        let scoring = ScoringConfig::default();
        // Origin chosen so (400, 550) normalizes to (0.5, 0.5).
        state.board.update(Some(BoardRect::new(150, 300, 200, 200)));
        state.board.update(None);

        let outcome = state
            .throw_dart(Point::new(400, 550), &dart(), &scoring)
            .unwrap();
        assert_eq!(outcome.points, 50);
        assert_eq!(outcome.zone.as_deref(), Some("Bullseye"));
        assert_eq!(state.score, 50);
    }

    #[test]
    fn test_no_matching_zone_scores_zero() {
        let mut state = GameState::new();
        let scoring = ScoringConfig::default();
        // Board origin at (0, 0): (400, 550) normalizes to (0.8, 1.1).
        let outcome = state
            .throw_dart(Point::new(400, 550), &dart(), &scoring)
            .unwrap();
        assert_eq!(outcome.points, 0);
        assert_eq!(outcome.zone, None);
        assert_eq!(state.feedback(FeedbackMode::LastThrow), None);
    }

    #[test]
    fn test_last_throw_feedback_tracks_latest_zone() {
        let mut state = GameState::new();
        let scoring = ScoringConfig::default();
        state.board.update(Some(BoardRect::new(150, 300, 200, 200)));

        state.throw_dart(Point::new(400, 550), &dart(), &scoring);
        state.throw_dart(Point::new(400, 550), &dart(), &scoring);
        assert_eq!(state.score, 100);
        assert_eq!(state.feedback(FeedbackMode::TotalScore), None);
        assert_eq!(state.feedback(FeedbackMode::LastThrow), Some(Feedback::Bullseye));
    }

    #[test]
    fn test_score_saturates_instead_of_overflowing() {
        let mut state = GameState::new();
        let scoring = ScoringConfig::default();
        state.board.update(Some(BoardRect::new(150, 300, 200, 200)));
        state.score = u32::MAX - 10;

        let outcome = state
            .throw_dart(Point::new(400, 550), &dart(), &scoring)
            .unwrap();
        assert_eq!(outcome.points, 50);
        assert_eq!(state.score, u32::MAX);
    }
}
