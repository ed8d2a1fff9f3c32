use std::ops::RangeInclusive;

use rand::Rng;

// Grid alphabet
pub const ALPHABET_SIZE: usize = 26;
pub const ALPHABET: RangeInclusive<char> = 'a'..='z';
pub(crate) const ALPHABET_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";

pub(crate) trait GridLetter {
    /// True for characters that may appear in the grid (`a`–`z`).
    fn is_grid_letter(&self) -> bool;
}

impl GridLetter for char {
    fn is_grid_letter(&self) -> bool {
        self.is_ascii_lowercase()
    }
}

/// Draw one letter uniformly from the grid alphabet.
pub fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    let idx = rng.gen_range(0..ALPHABET_SIZE);
    // ALPHABET_CHARS is ASCII, so byte indexing is char indexing
    ALPHABET_CHARS.as_bytes()[idx] as char
}

/// Lowercase and trim a word, returning the first character outside the
/// grid alphabet as the error.
pub(crate) fn normalize_word(raw: &str) -> Result<String, char> {
    let word = raw.trim().to_lowercase();
    match word.chars().find(|c| !c.is_grid_letter()) {
        Some(bad) => Err(bad),
        None => Ok(word),
    }
}
