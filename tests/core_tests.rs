// tests/core_tests.rs
use dartboard_core::{
    zones::{default_zones, score, zone_at},
    BoardRect, DartSprite, Feedback, FeedbackMode, GameState, Point, ScoringConfig,
};

fn grid(min: f64, max: f64, steps: usize) -> impl Iterator<Item = f64> {
    (0..=steps).map(move |i| min + (max - min) * i as f64 / steps as f64)
}

#[test]
fn test_bullseye_range_scores_50() {
    let zones = default_zones();
    for x in grid(0.41, 0.59, 12) {
        for y in grid(0.41, 0.59, 12) {
            assert_eq!(score(x, y, &zones), 50, "({x}, {y})");
        }
    }
}

#[test]
fn test_outer_ring_outside_bullseye_scores_25() {
    let zones = default_zones();
    for x in grid(0.21, 0.79, 29) {
        for y in grid(0.21, 0.79, 29) {
            let in_bullseye = (0.4..=0.6).contains(&x) && (0.4..=0.6).contains(&y);
            if !in_bullseye {
                assert_eq!(score(x, y, &zones), 25, "({x}, {y})");
            }
        }
    }
    // Inside the Inner Ring range, still the Outer Ring.
    assert_eq!(score(0.35, 0.35, &zones), 25);
}

#[test]
fn test_rest_of_unit_square_scores_5() {
    let zones = default_zones();
    for &(x, y) in &[(0.0, 0.0), (0.1, 0.5), (0.5, 0.95), (0.85, 0.15), (1.0, 1.0)] {
        assert_eq!(score(x, y, &zones), 5, "({x}, {y})");
        assert_eq!(zone_at(x, y, &zones).map(|z| z.name.as_str()), Some("Outer Area"));
    }
}

#[test]
fn test_accumulated_score_loses_exact_feedback() {
    let dart = DartSprite::new(40, 120, 800, 600);
    let scoring = ScoringConfig::default();
    let mut state = GameState::new();
    // Click (400, 540) is on the dart; origin (150, 290) puts it at (0.5, 0.5).
    state.board.update(Some(BoardRect::new(150, 290, 300, 300)));

    let click = Point::new(400, 540);
    assert_eq!(state.throw_dart(click, &dart, &scoring).map(|t| t.points), Some(50));
    assert_eq!(state.feedback(FeedbackMode::TotalScore), Some(Feedback::Bullseye));

    assert_eq!(state.throw_dart(click, &dart, &scoring).map(|t| t.points), Some(50));
    assert_eq!(state.score, 100);
    assert_eq!(state.feedback(FeedbackMode::TotalScore), None);
    assert_eq!(state.feedback_message(FeedbackMode::TotalScore), "");
    assert_eq!(state.feedback(FeedbackMode::LastThrow), Some(Feedback::Bullseye));
}

#[test]
fn test_click_outside_dart_keeps_score() {
    let dart = DartSprite::new(40, 120, 800, 600);
    let scoring = ScoringConfig::default();
    let mut state = GameState::new();
    state.board.update(Some(BoardRect::new(150, 290, 300, 300)));

    for click in [Point::new(0, 0), Point::new(379, 540), Point::new(420, 540), Point::new(400, 479)] {
        assert!(state.throw_dart(click, &dart, &scoring).is_none());
    }
    assert_eq!(state.score, 0);
    assert_eq!(state.feedback(FeedbackMode::TotalScore), Some(Feedback::Miss));
}
