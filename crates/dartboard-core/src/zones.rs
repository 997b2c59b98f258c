//! Scoring zones and the score evaluator
//!
//! Zones live in a normalized unit square. The evaluator walks the table in
//! order and the first zone containing the hit wins, so a table meant to
//! model nested rings has to list the smaller rings first. That ordering is
//! up to whoever builds the table; nothing here reorders or rejects it.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// Closed interval `[min, max]` on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneRange {
    pub min: f64,
    pub max: f64,
}

impl ZoneRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Both ends inclusive.
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// A named region of the board worth a fixed number of points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringZone {
    pub name: String,
    pub points: u32,
    pub x_range: ZoneRange,
    pub y_range: ZoneRange,
}

impl ScoringZone {
    pub fn new(name: &str, points: u32, x_range: ZoneRange, y_range: ZoneRange) -> Self {
        Self {
            name: name.to_string(),
            points,
            x_range,
            y_range,
        }
    }

    pub fn contains(&self, hit_x: f64, hit_y: f64) -> bool {
        self.x_range.contains(hit_x) && self.y_range.contains(hit_y)
    }
}

/// The stock zone table.
///
/// Outer Ring is listed before the smaller Inner Ring, which leaves Inner
/// Ring unreachable, and Miss sits behind the full-square Outer Area. Both
/// are kept as-is so scores stay compatible with existing play.
pub fn default_zones() -> Vec<ScoringZone> {
    vec![
        ScoringZone::new(
            "Bullseye",
            50,
            ZoneRange::new(0.4, 0.6),
            ZoneRange::new(0.4, 0.6),
        ),
        ScoringZone::new(
            "Outer Ring",
            25,
            ZoneRange::new(0.2, 0.8),
            ZoneRange::new(0.2, 0.8),
        ),
        ScoringZone::new(
            "Inner Ring",
            10,
            ZoneRange::new(0.3, 0.7),
            ZoneRange::new(0.3, 0.7),
        ),
        ScoringZone::new(
            "Outer Area",
            5,
            ZoneRange::new(0.0, 1.0),
            ZoneRange::new(0.0, 1.0),
        ),
        ScoringZone::new("Miss", 0, ZoneRange::new(0.0, 1.0), ZoneRange::new(0.0, 1.0)),
    ]
}

/// First zone in table order that contains the hit.
pub fn zone_at(hit_x: f64, hit_y: f64, zones: &[ScoringZone]) -> Option<&ScoringZone> {
    zones.iter().find(|zone| zone.contains(hit_x, hit_y))
}

/// Points for a hit at normalized `(hit_x, hit_y)`; `0` when no zone matches.
pub fn score(hit_x: f64, hit_y: f64, zones: &[ScoringZone]) -> u32 {
    zone_at(hit_x, hit_y, zones).map_or(0, |zone| zone.points)
}

/// Reject tables with inverted ranges. Overlap and ordering are not checked.
pub fn validate_zones(zones: &[ScoringZone]) -> Result<(), CoreError> {
    if zones.is_empty() {
        return Err(CoreError::EmptyZoneTable);
    }

    for zone in zones {
        for (axis, range) in [("x", zone.x_range), ("y", zone.y_range)] {
            if range.min > range.max {
                return Err(CoreError::InvertedRange {
                    name: zone.name.clone(),
                    axis,
                    min: range.min,
                    max: range.max,
                });
            }
        }
    }

    Ok(())
}
