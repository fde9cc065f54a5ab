//! Scoring configuration.

use serde::{Deserialize, Serialize};

/// Star thresholds applied to the move count.
///
/// A session scores 3 stars below `three_star_below` moves, 2 stars below
/// `two_star_below`, and 1 star from there on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Moves strictly below this keep all three stars.
    pub three_star_below: u32,

    /// Moves strictly below this keep two stars.
    pub two_star_below: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            three_star_below: 40,
            two_star_below: 80,
        }
    }
}

impl ScoringConfig {
    /// Highest possible score.
    pub const MAX_SCORE: u8 = 3;

    /// Set the three-star threshold.
    #[must_use]
    pub fn with_three_star_below(mut self, moves: u32) -> Self {
        self.three_star_below = moves;
        self
    }

    /// Set the two-star threshold.
    #[must_use]
    pub fn with_two_star_below(mut self, moves: u32) -> Self {
        self.two_star_below = moves;
        self
    }

    /// Star score for a move count. Pure function of `moves`.
    #[must_use]
    pub fn score_for(&self, moves: u32) -> u8 {
        if moves < self.three_star_below {
            3
        } else if moves < self.two_star_below {
            2
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let config = ScoringConfig::default();
        assert_eq!(config.score_for(0), 3);
        assert_eq!(config.score_for(39), 3);
        assert_eq!(config.score_for(40), 2);
        assert_eq!(config.score_for(79), 2);
        assert_eq!(config.score_for(80), 1);
        assert_eq!(config.score_for(u32::MAX), 1);
    }

    #[test]
    fn test_builder_pattern() {
        let config = ScoringConfig::default()
            .with_three_star_below(20)
            .with_two_star_below(30);

        assert_eq!(config.score_for(19), 3);
        assert_eq!(config.score_for(20), 2);
        assert_eq!(config.score_for(30), 1);
    }

    #[test]
    fn test_serialization() {
        let config = ScoringConfig::default().with_two_star_below(90);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: ScoringConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: ScoringConfig = serde_json::from_str(r#"{"two_star_below": 100}"#).unwrap();
        assert_eq!(config.three_star_below, 40);
        assert_eq!(config.two_star_below, 100);
    }
}
