use serde::{Deserialize, Serialize};

/// Feedback category shown under the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feedback {
    Bullseye,
    OuterRing,
    InnerRing,
    OuterArea,
    Miss,
}

impl Feedback {
    pub fn message(&self) -> &'static str {
        match self {
            Feedback::Bullseye => "Bullseye! Excellent shot!",
            Feedback::OuterRing => "Great shot! You hit the outer ring!",
            Feedback::InnerRing => "Nice shot! You hit the inner ring!",
            Feedback::OuterArea => "Good shot! You hit the outer area.",
            Feedback::Miss => "Missed the dartboard! Try again.",
        }
    }

    /// Resolve from the name of a scoring zone in the stock table.
    pub fn from_zone_name(name: &str) -> Option<Self> {
        match name {
            "Bullseye" => Some(Feedback::Bullseye),
            "Outer Ring" => Some(Feedback::OuterRing),
            "Inner Ring" => Some(Feedback::InnerRing),
            "Outer Area" => Some(Feedback::OuterArea),
            "Miss" => Some(Feedback::Miss),
            _ => None,
        }
    }

    /// Exact-value lookup keyed by a score. Only 0, 5, 10, 25 and 50 have a
    /// message, so an accumulated total usually has none.
    pub fn for_score(score: u32) -> Option<Self> {
        match score {
            50 => Some(Feedback::Bullseye),
            25 => Some(Feedback::OuterRing),
            10 => Some(Feedback::InnerRing),
            5 => Some(Feedback::OuterArea),
            0 => Some(Feedback::Miss),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_score_lookup() {
        assert_eq!(Feedback::for_score(50), Some(Feedback::Bullseye));
        assert_eq!(Feedback::for_score(0), Some(Feedback::Miss));
        assert_eq!(Feedback::for_score(100), None);
        assert_eq!(Feedback::for_score(30), None);
    }

    #[test]
    fn test_zone_name_lookup() {
        assert_eq!(Feedback::from_zone_name("Outer Ring"), Some(Feedback::OuterRing));
        assert_eq!(Feedback::from_zone_name("outer ring"), None);
        assert_eq!(
            Feedback::from_zone_name("Outer Area").map(|f| f.message()),
            Some("Good shot! You hit the outer area.")
        );
    }
}
