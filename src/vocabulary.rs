//! The source word list that puzzles draw their target words from.
//!
//! A vocabulary can come from the built-in default (the colour names the game has
//! always used), from an in-memory string (the only option in WebAssembly builds,
//! where the text arrives via `fetch()`), or from a file on native builds.
//!
//! The parsing logic:
//! - One word per line.
//! - Blank lines and lines starting with `#` are skipped silently.
//! - Words are trimmed and lowercased.
//! - Words with characters outside `a`–`z` are skipped with a warning.
//! - Duplicates keep their first occurrence, so file order is preserved.

use std::collections::HashSet;

use log::warn;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::PuzzleConfig;
use crate::errors::ConfigError;
use crate::letter::normalize_word;

/// Built-in vocabulary. Every entry is also a CSS colour name, which renderers
/// use to tint found words.
pub const DEFAULT_WORDS: [&str; 9] = [
    "red", "orange", "gold", "green", "blue", "indigo", "violet", "hotpink", "turquoise",
];

/// A processed, ready-to-use vocabulary: lowercase, `a`–`z` only, no duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    pub words: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Vocabulary { words: DEFAULT_WORDS.iter().map(|w| (*w).to_string()).collect() }
    }
}

impl Vocabulary {
    /// Parse a vocabulary from an in-memory string.
    ///
    /// This is **WASM-safe** because it doesn't touch the filesystem.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> Vocabulary {
        let mut seen = HashSet::new();
        let words = contents
            .lines()
            .filter_map(|raw_line| {
                let line = raw_line.trim();
                if line.is_empty() || line.starts_with('#') {
                    return None;
                }
                match normalize_word(line) {
                    Ok(word) => Some(word),
                    Err(bad) => {
                        warn!("skipping vocabulary word {line:?}: invalid character {bad:?}");
                        None
                    }
                }
            })
            .filter(|word| seen.insert(word.clone()))
            .collect();

        Vocabulary { words }
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<Vocabulary> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read vocabulary from '{}': {}", path_ref.display(), e)
            )
        })?;

        Ok(Self::parse_from_str(&data))
    }

    /// Words short enough for a `size`×`size` grid.
    pub fn fitting(&self, size: usize) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str).filter(move |w| w.len() <= size)
    }

    /// Check that this vocabulary can supply `config.num_words` words for `config.size`.
    ///
    /// # Errors
    ///
    /// `ConfigError::NotEnoughWords` if it cannot.
    pub fn check_supports(&self, config: &PuzzleConfig) -> Result<(), ConfigError> {
        let available = self.fitting(config.size).count();
        if available < config.num_words {
            return Err(ConfigError::NotEnoughWords {
                requested: config.num_words,
                available,
                size: config.size,
            });
        }
        Ok(())
    }

    /// Draw `config.num_words` distinct words at random from the words that fit.
    ///
    /// # Errors
    ///
    /// `ConfigError::NotEnoughWords` if the vocabulary is too small.
    pub fn choose<R: Rng + ?Sized>(&self, config: &PuzzleConfig, rng: &mut R) -> Result<Vec<String>, ConfigError> {
        self.check_supports(config)?;
        let mut pool: Vec<String> = self.fitting(config.size).map(str::to_string).collect();
        pool.shuffle(rng);
        pool.truncate(config.num_words);
        Ok(pool)
    }
}
