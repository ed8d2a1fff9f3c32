//! Puzzle configuration.
//!
//! `PuzzleConfig` deserializes with every field optional (`#[serde(default)]`),
//! so the browser can pass `{}` or `{ size: 8 }` and get the defaults for the rest.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub const DEFAULT_GRID_SIZE: usize = 10;
pub const DEFAULT_NUM_WORDS: usize = 3;
// Random placements tried per word before giving up
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;
pub const DEFAULT_BANNER_MILLIS: u64 = 3000;

/// How the generator lays words out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlacementStrategy {
    /// Random horizontal or vertical runs; words may cross where letters agree.
    #[default]
    Overlapping,
    /// Every word horizontal, each in its own row.
    DistinctRows,
}

/// Which reading directions of a selection count as a match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchDirection {
    /// Only the letters in the order the player picked them.
    AsSelected,
    /// The picked order or its reverse (dragging end-to-start counts).
    #[default]
    EitherWay,
}

/// How input events build a selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InteractionMode {
    /// Press, drag across cells, release.
    #[default]
    Drag,
    /// Click cells one at a time.
    Click,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PuzzleConfig {
    pub size: usize,
    pub num_words: usize,
    pub max_attempts: usize,
    pub strategy: PlacementStrategy,
    pub direction: MatchDirection,
    pub mode: InteractionMode,
    pub banner_millis: u64,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        PuzzleConfig {
            size: DEFAULT_GRID_SIZE,
            num_words: DEFAULT_NUM_WORDS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            strategy: PlacementStrategy::default(),
            direction: MatchDirection::default(),
            mode: InteractionMode::default(),
            banner_millis: DEFAULT_BANNER_MILLIS,
        }
    }
}

impl PuzzleConfig {
    /// Check the numeric fields. Word lists are checked against the config
    /// separately (see `Vocabulary::check_supports` and `generator::check_words`).
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::ZeroGridSize);
        }
        if self.num_words == 0 {
            return Err(ConfigError::ZeroWords);
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        if self.strategy == PlacementStrategy::DistinctRows && self.num_words > self.size {
            return Err(ConfigError::TooManyWordsForRows { num_words: self.num_words, size: self.size });
        }
        Ok(())
    }

    #[must_use]
    pub fn banner_duration(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.banner_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PuzzleConfig::default();
        assert_eq!(config.size, 10);
        assert_eq!(config.num_words, 3);
        assert_eq!(config.banner_duration().as_secs(), 3);
        assert_eq!(config.direction, MatchDirection::EitherWay);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zeroes() {
        let config = PuzzleConfig { size: 0, ..PuzzleConfig::default() };
        assert_eq!(config.validate(), Err(ConfigError::ZeroGridSize));

        let config = PuzzleConfig { num_words: 0, ..PuzzleConfig::default() };
        assert_eq!(config.validate(), Err(ConfigError::ZeroWords));

        let config = PuzzleConfig { max_attempts: 0, ..PuzzleConfig::default() };
        assert_eq!(config.validate(), Err(ConfigError::ZeroAttempts));
    }

    #[test]
    fn test_validate_distinct_rows_needs_enough_rows() {
        let config = PuzzleConfig {
            size: 4,
            num_words: 5,
            strategy: PlacementStrategy::DistinctRows,
            ..PuzzleConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::TooManyWordsForRows { num_words: 5, size: 4 }));

        // the overlapping strategy has no such limit
        let config = PuzzleConfig { strategy: PlacementStrategy::Overlapping, ..config };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_json() {
        let config: PuzzleConfig =
            serde_json::from_str(r#"{ "size": 8, "direction": "as-selected", "strategy": "distinct-rows" }"#).unwrap();
        assert_eq!(config.size, 8);
        assert_eq!(config.num_words, DEFAULT_NUM_WORDS);
        assert_eq!(config.direction, MatchDirection::AsSelected);
        assert_eq!(config.strategy, PlacementStrategy::DistinctRows);
        assert_eq!(config.mode, InteractionMode::Drag);
    }
}
