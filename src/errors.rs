//! Configuration errors with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (C001-C009) for documentation lookup:
//!
//! - C001: `ZeroGridSize` (Grid size is zero)
//! - C002: `ZeroWords` (Puzzle asks for no words)
//! - C003: `ZeroAttempts` (Placement attempt cap is zero)
//! - C004: `EmptyWord` (Empty word in the word list)
//! - C005: `InvalidWordChars` (Word contains characters outside a-z)
//! - C006: `WordTooLong` (Word longer than the grid)
//! - C007: `DuplicateWord` (Word listed twice)
//! - C008: `NotEnoughWords` (Vocabulary too small for the puzzle)
//! - C009: `TooManyWordsForRows` (More words than rows in distinct-rows layout)
//!
//! # Examples
//!
//! ```
//! use wordsearch::errors::ConfigError;
//!
//! let err = ConfigError::WordTooLong { word: "turquoise".to_string(), len: 9, size: 5 };
//! assert_eq!(err.code(), "C006");
//! println!("{}", err.display_detailed());
//! ```

use std::io;

/// A puzzle configuration or word list that cannot produce a puzzle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Grid size must be at least 1")]
    ZeroGridSize,

    #[error("Number of words per puzzle must be at least 1")]
    ZeroWords,

    #[error("Placement attempt cap must be at least 1")]
    ZeroAttempts,

    #[error("Empty word in word list")]
    EmptyWord,

    #[error("Word \"{word}\" contains invalid character '{invalid_char}' (only a-z allowed)")]
    InvalidWordChars { word: String, invalid_char: char },

    #[error("Word \"{word}\" has {len} letters but the grid is only {size} wide")]
    WordTooLong { word: String, len: usize, size: usize },

    #[error("Word \"{word}\" appears more than once")]
    DuplicateWord { word: String },

    #[error("Need {requested} words of length <= {size}, but the vocabulary only has {available}")]
    NotEnoughWords { requested: usize, available: usize, size: usize },

    #[error("Cannot give {num_words} words their own row in a grid with {size} rows")]
    TooManyWordsForRows { num_words: usize, size: usize },
}

impl From<ConfigError> for io::Error {
    fn from(ce: ConfigError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, ce.to_string())
    }
}

impl ConfigError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::ZeroGridSize => "C001",
            ConfigError::ZeroWords => "C002",
            ConfigError::ZeroAttempts => "C003",
            ConfigError::EmptyWord => "C004",
            ConfigError::InvalidWordChars { .. } => "C005",
            ConfigError::WordTooLong { .. } => "C006",
            ConfigError::DuplicateWord { .. } => "C007",
            ConfigError::NotEnoughWords { .. } => "C008",
            ConfigError::TooManyWordsForRows { .. } => "C009",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            ConfigError::ZeroGridSize => "Grid size is zero",
            ConfigError::ZeroWords => "Puzzle asks for no words",
            ConfigError::ZeroAttempts => "Placement attempt cap is zero",
            ConfigError::EmptyWord => "Empty word in the word list",
            ConfigError::InvalidWordChars { .. } => "Word contains characters outside a-z",
            ConfigError::WordTooLong { .. } => "Word longer than the grid",
            ConfigError::DuplicateWord { .. } => "Word listed twice",
            ConfigError::NotEnoughWords { .. } => "Vocabulary too small for the puzzle",
            ConfigError::TooManyWordsForRows { .. } => "More words than rows in distinct-rows layout",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            ConfigError::ZeroGridSize => "A puzzle grid needs at least one row and one column.",
            ConfigError::ZeroWords => "A puzzle with no target words would be won before it starts.",
            ConfigError::ZeroAttempts => "The generator gives up on a word after this many random placements; zero means it could never place anything.",
            ConfigError::EmptyWord => "Every target word needs at least one letter so it can be placed and selected.",
            ConfigError::InvalidWordChars { .. } => "Grid cells hold the letters a-z only. Words are lowercased before checking, so any other character (digit, space, accent) cannot be placed.",
            ConfigError::WordTooLong { .. } => "Words run horizontally or vertically, so no word may be longer than the grid size.",
            ConfigError::DuplicateWord { .. } => "Target words must be distinct; a duplicate could never be found twice.",
            ConfigError::NotEnoughWords { .. } => "The puzzle draws its target words from the vocabulary, keeping only words that fit in the grid. There are fewer such words than the puzzle asks for.",
            ConfigError::TooManyWordsForRows { .. } => "The distinct-rows layout puts every word in its own row, so the grid needs at least as many rows as words.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ConfigError::ZeroGridSize => Some("Use a grid size such as 10"),
            ConfigError::ZeroWords => Some("Ask for at least one word, e.g. 3"),
            ConfigError::ZeroAttempts => Some("Use the default of 1000 attempts per word"),
            ConfigError::InvalidWordChars { .. } => Some("Remove spaces, digits and punctuation (e.g., 'hotpink' not 'hot pink')"),
            ConfigError::WordTooLong { .. } => Some("Increase the grid size or drop the long word"),
            ConfigError::NotEnoughWords { .. } => Some("Add more words to the vocabulary, ask for fewer words, or increase the grid size"),
            ConfigError::TooManyWordsForRows { .. } => Some("Ask for fewer words or use the overlapping strategy"),
            ConfigError::EmptyWord | ConfigError::DuplicateWord { .. } => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
