//! Grid generation: place target words in a square grid, fill the rest randomly.
//!
//! # Error Handling
//!
//! Generation uses [`GenerateError`] with two variants:
//!
//! - G001: `InvalidConfig` (Configuration or word list rejected (wraps [`ConfigError`]))
//! - G002: `PlacementFailed` (A word could not be placed within the attempt cap)
//!
//! # Examples
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use wordsearch::generator;
//!
//! let words = vec!["red".to_string(), "blue".to_string()];
//! let puzzle = generator::generate(6, &words, &mut StdRng::seed_from_u64(1))?;
//!
//! for placement in &puzzle.placements {
//!     let letters = puzzle.grid.letters_at(&placement.cells()).unwrap();
//!     assert_eq!(letters, placement.word);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::collections::HashSet;

use log::{debug, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{PlacementStrategy, PuzzleConfig};
use crate::errors::ConfigError;
use crate::grid::{Cell, Grid};
use crate::letter::{normalize_word, random_letter};

/// Axis a word runs along, always reading left-to-right or top-to-bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            Direction::Horizontal
        } else {
            Direction::Vertical
        }
    }

    /// The cell `i` steps from `start` along this axis.
    #[must_use]
    pub fn step(self, start: Cell, i: usize) -> Cell {
        match self {
            Direction::Horizontal => Cell::new(start.row, start.col + i),
            Direction::Vertical => Cell::new(start.row + i, start.col),
        }
    }
}

/// Where one word sits in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub word: String,
    pub start: Cell,
    pub direction: Direction,
}

impl Placement {
    /// The cells the word covers, first letter first.
    #[must_use]
    pub fn cells(&self) -> Vec<Cell> {
        (0..self.word.len()).map(|i| self.direction.step(self.start, i)).collect()
    }
}

/// A generated puzzle. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub grid: Grid,
    /// Target words, in list order.
    pub words: Vec<String>,
    /// One placement per word, same order as `words`.
    pub placements: Vec<Placement>,
}

impl Puzzle {
    #[must_use]
    pub fn placement_of(&self, word: &str) -> Option<&Placement> {
        self.placements.iter().find(|p| p.word == word)
    }
}

/// Unified error type for puzzle generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    /// The configuration or the word list was rejected before placement began.
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] Box<ConfigError>),

    /// The bounded retry loop ran out of attempts for `word`.
    #[error("could not place \"{word}\" after {attempts} attempts: word list too dense for grid size")]
    PlacementFailed { word: String, attempts: usize },
}

impl From<ConfigError> for GenerateError {
    fn from(ce: ConfigError) -> Self {
        GenerateError::InvalidConfig(Box::new(ce))
    }
}

impl GenerateError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            GenerateError::InvalidConfig(_) => "G001",
            GenerateError::PlacementFailed { .. } => "G002",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            GenerateError::InvalidConfig(_) => "Configuration or word list rejected",
            GenerateError::PlacementFailed { .. } => "A word could not be placed within the attempt cap",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            GenerateError::InvalidConfig(_) => "The puzzle could not be set up. This wraps an underlying ConfigError (see Config Errors section for specific error codes).",
            GenerateError::PlacementFailed { .. } => "Each word gets a fixed number of random placements. Every attempt collided with a different letter already in the grid, which happens when the words are too many or too long for the grid.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            GenerateError::PlacementFailed { .. } => Some("Use a larger grid, fewer words, or shorter words"),
            GenerateError::InvalidConfig(_) => None, // ConfigError has its own help
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            GenerateError::InvalidConfig(ce) => {
                format!("{}\n  caused by: {}", self.code(), ce.display_detailed())
            }
            GenerateError::PlacementFailed { .. } => {
                crate::errors::format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
            }
        }
    }
}

/// A grid under construction. `None` marks a cell no word has claimed yet.
struct Board {
    size: usize,
    cells: Vec<Option<char>>,
}

impl Board {
    fn new(size: usize) -> Self {
        Board { size, cells: vec![None; size * size] }
    }

    fn get(&self, cell: Cell) -> Option<char> {
        self.cells[cell.row * self.size + cell.col]
    }

    fn write(&mut self, placement: &Placement) {
        for (letter, cell) in placement.word.chars().zip(placement.cells()) {
            self.cells[cell.row * self.size + cell.col] = Some(letter);
        }
    }

    fn into_grid<R: Rng + ?Sized>(self, rng: &mut R) -> Grid {
        let letters = self.cells.into_iter().map(|c| c.unwrap_or_else(|| random_letter(rng))).collect();
        Grid { size: self.size, letters }
    }
}

/// Whether `word` can go at `start` along `direction` without leaving the grid
/// or contradicting a letter already on the board. Does not touch the board.
fn can_place(board: &Board, word: &str, start: Cell, direction: Direction) -> bool {
    let len = word.len();
    if len == 0 {
        return false;
    }
    let in_bounds = match direction {
        Direction::Horizontal => start.row < board.size && start.col + len <= board.size,
        Direction::Vertical => start.col < board.size && start.row + len <= board.size,
    };
    in_bounds
        && word
            .chars()
            .enumerate()
            .all(|(i, letter)| board.get(direction.step(start, i)).is_none_or(|existing| existing == letter))
}

/// Normalize and check a target word list against a grid size.
///
/// # Errors
///
/// The first empty, malformed, too-long or duplicate word.
pub fn check_words(words: &[String], size: usize) -> Result<Vec<String>, ConfigError> {
    let mut seen = HashSet::new();
    words
        .iter()
        .map(|raw| {
            let word = normalize_word(raw)
                .map_err(|invalid_char| ConfigError::InvalidWordChars { word: raw.clone(), invalid_char })?;
            if word.is_empty() {
                return Err(ConfigError::EmptyWord);
            }
            if word.len() > size {
                return Err(ConfigError::WordTooLong { len: word.len(), word, size });
            }
            if !seen.insert(word.clone()) {
                return Err(ConfigError::DuplicateWord { word });
            }
            Ok(word)
        })
        .collect()
}

/// Generate a `size`×`size` puzzle containing `words` with the default settings.
///
/// # Errors
///
/// See [`generate_with`].
pub fn generate<R: Rng + ?Sized>(size: usize, words: &[String], rng: &mut R) -> Result<Puzzle, GenerateError> {
    let config = PuzzleConfig { size, num_words: words.len(), ..PuzzleConfig::default() };
    generate_with(&config, words, rng)
}

/// Generate a puzzle containing `words`, laid out per `config`.
///
/// `config.num_words` is only used for config validation; every word in `words`
/// is placed.
///
/// # Errors
///
/// - `GenerateError::InvalidConfig` for a bad config or word list.
/// - `GenerateError::PlacementFailed` when a word runs out of attempts.
pub fn generate_with<R: Rng + ?Sized>(
    config: &PuzzleConfig,
    words: &[String],
    rng: &mut R,
) -> Result<Puzzle, GenerateError> {
    config.validate()?;
    let words = check_words(words, config.size)?;
    if config.strategy == PlacementStrategy::DistinctRows && words.len() > config.size {
        return Err(ConfigError::TooManyWordsForRows { num_words: words.len(), size: config.size }.into());
    }

    let mut board = Board::new(config.size);
    let placements = match config.strategy {
        PlacementStrategy::Overlapping => place_overlapping(&mut board, &words, config.max_attempts, rng)?,
        PlacementStrategy::DistinctRows => place_in_distinct_rows(&mut board, &words, rng),
    };

    Ok(Puzzle { grid: board.into_grid(rng), words, placements })
}

fn place_overlapping<R: Rng + ?Sized>(
    board: &mut Board,
    words: &[String],
    max_attempts: usize,
    rng: &mut R,
) -> Result<Vec<Placement>, GenerateError> {
    let mut placements = Vec::with_capacity(words.len());
    for word in words {
        let found = (1..=max_attempts).find_map(|attempt| {
            let direction = Direction::random(rng);
            // offsets keep the run inside the grid; can_place re-checks
            let (max_row, max_col) = match direction {
                Direction::Horizontal => (board.size - 1, board.size - word.len()),
                Direction::Vertical => (board.size - word.len(), board.size - 1),
            };
            let start = Cell::new(rng.gen_range(0..=max_row), rng.gen_range(0..=max_col));
            can_place(board, word, start, direction).then_some((start, direction, attempt))
        });

        let Some((start, direction, attempt)) = found else {
            warn!("giving up on {word:?} after {max_attempts} attempts");
            return Err(GenerateError::PlacementFailed { word: word.clone(), attempts: max_attempts });
        };

        debug!("placed {word:?} at {start} {direction:?} (attempt {attempt})");
        let placement = Placement { word: word.clone(), start, direction };
        board.write(&placement);
        placements.push(placement);
    }
    Ok(placements)
}

fn place_in_distinct_rows<R: Rng + ?Sized>(board: &mut Board, words: &[String], rng: &mut R) -> Vec<Placement> {
    let rows = rand::seq::index::sample(rng, board.size, words.len());
    words
        .iter()
        .zip(rows.iter())
        .map(|(word, row)| {
            let start = Cell::new(row, rng.gen_range(0..=board.size - word.len()));
            debug!("placed {word:?} at {start} in its own row");
            let placement = Placement { word: word.clone(), start, direction: Direction::Horizontal };
            board.write(&placement);
            placement
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::letter::GridLetter;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| (*w).to_string()).collect()
    }

    fn assert_placements_match_grid(puzzle: &Puzzle) {
        assert_eq!(puzzle.words.len(), puzzle.placements.len());
        for (word, placement) in puzzle.words.iter().zip(&puzzle.placements) {
            assert_eq!(word, &placement.word);
            let letters = puzzle.grid.letters_at(&placement.cells()).expect("placement should stay in the grid");
            assert_eq!(&letters, word, "placement {placement:?} should spell its word");
        }
    }

    #[test]
    fn test_direction_step() {
        let start = Cell::new(2, 3);
        assert_eq!(Direction::Horizontal.step(start, 2), Cell::new(2, 5));
        assert_eq!(Direction::Vertical.step(start, 2), Cell::new(4, 3));
    }

    #[test]
    fn test_placement_cells() {
        let placement = Placement { word: "cat".to_string(), start: Cell::new(1, 0), direction: Direction::Horizontal };
        assert_eq!(placement.cells(), vec![Cell::new(1, 0), Cell::new(1, 1), Cell::new(1, 2)]);
    }

    #[test]
    fn test_can_place_bounds() {
        let board = Board::new(4);
        assert!(can_place(&board, "cat", Cell::new(1, 0), Direction::Horizontal));
        assert!(can_place(&board, "cat", Cell::new(1, 1), Direction::Horizontal));
        assert!(!can_place(&board, "cat", Cell::new(1, 2), Direction::Horizontal));
        assert!(!can_place(&board, "cat", Cell::new(2, 0), Direction::Vertical));
        assert!(!can_place(&board, "cat", Cell::new(4, 0), Direction::Horizontal));
        assert!(!can_place(&board, "", Cell::new(0, 0), Direction::Horizontal));
    }

    #[test]
    fn test_can_place_allows_matching_overlap_only() {
        let mut board = Board::new(4);
        board.write(&Placement { word: "cat".to_string(), start: Cell::new(1, 0), direction: Direction::Horizontal });

        // "tag" down from the 't' of "cat" shares that letter
        assert!(can_place(&board, "tag", Cell::new(1, 2), Direction::Vertical));
        // "dog" down through the 'a' of "cat" would overwrite it with 'o'
        assert!(!can_place(&board, "dog", Cell::new(0, 1), Direction::Vertical));
    }

    #[test]
    fn test_can_place_does_not_mutate() {
        let board = Board::new(3);
        let _ = can_place(&board, "abc", Cell::new(0, 0), Direction::Horizontal);
        assert!(board.cells.iter().all(Option::is_none));
    }

    #[test]
    fn test_generate_places_every_word() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let list = words(&["red", "orange", "gold", "green", "blue"]);
            let puzzle = generate(10, &list, &mut rng).unwrap();
            assert_eq!(puzzle.words, list);
            assert_placements_match_grid(&puzzle);
        }
    }

    #[test]
    fn test_generate_fills_every_cell_with_a_letter() {
        let mut rng = StdRng::seed_from_u64(5);
        let puzzle = generate(10, &words(&["violet", "indigo", "hotpink"]), &mut rng).unwrap();
        assert_eq!(puzzle.grid.letters().len(), 100);
        assert!(puzzle.grid.letters().iter().all(|c| c.is_grid_letter()));
    }

    #[test]
    fn test_generate_normalizes_words() {
        let mut rng = StdRng::seed_from_u64(1);
        let puzzle = generate(5, &words(&[" RED "]), &mut rng).unwrap();
        assert_eq!(puzzle.words, vec!["red"]);
        assert_placements_match_grid(&puzzle);
    }

    #[test]
    fn test_generate_full_length_word() {
        let mut rng = StdRng::seed_from_u64(8);
        let puzzle = generate(9, &words(&["turquoise"]), &mut rng).unwrap();
        let placement = &puzzle.placements[0];
        match placement.direction {
            Direction::Horizontal => assert_eq!(placement.start.col, 0),
            Direction::Vertical => assert_eq!(placement.start.row, 0),
        }
        assert_placements_match_grid(&puzzle);
    }

    #[test]
    fn test_generate_too_dense_fails_instead_of_hanging() {
        // these words share no letters, so "ab" and "cd" take both rows (or
        // both columns) of the 2x2 grid and "ef" has nowhere to go
        let list = words(&["ab", "cd", "ef", "gh", "ij"]);
        let config = PuzzleConfig { size: 2, num_words: 5, max_attempts: 50, ..PuzzleConfig::default() };
        let err = generate_with(&config, &list, &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert!(matches!(err, GenerateError::PlacementFailed { ref word, attempts: 50 } if word == "ef"));
        assert_eq!(err.code(), "G002");
        assert!(err.to_string().contains("too dense"));
    }

    #[test]
    fn test_generate_word_too_long() {
        let err = generate(4, &words(&["orange"]), &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert_eq!(
            err,
            GenerateError::InvalidConfig(Box::new(ConfigError::WordTooLong { word: "orange".to_string(), len: 6, size: 4 }))
        );
        assert!(err.display_detailed().contains("C006"));
    }

    #[test]
    fn test_check_words_rejections() {
        assert_eq!(check_words(&words(&["red", "Red"]), 5), Err(ConfigError::DuplicateWord { word: "red".to_string() }));
        assert_eq!(check_words(&words(&["  "]), 5), Err(ConfigError::EmptyWord));
        assert_eq!(
            check_words(&words(&["hot pink"]), 10),
            Err(ConfigError::InvalidWordChars { word: "hot pink".to_string(), invalid_char: ' ' })
        );
        assert_eq!(check_words(&words(&["Gold"]), 5), Ok(words(&["gold"])));
    }

    #[test]
    fn test_generate_empty_word_list_is_config_error() {
        let err = generate(5, &[], &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert_eq!(err, GenerateError::InvalidConfig(Box::new(ConfigError::ZeroWords)));
    }

    #[test]
    fn test_distinct_rows_layout() {
        let config = PuzzleConfig { size: 10, num_words: 3, strategy: PlacementStrategy::DistinctRows, ..PuzzleConfig::default() };
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..30 {
            let puzzle = generate_with(&config, &words(&["turquoise", "hotpink", "violet"]), &mut rng).unwrap();
            assert_placements_match_grid(&puzzle);
            let rows: HashSet<usize> = puzzle.placements.iter().map(|p| p.start.row).collect();
            assert_eq!(rows.len(), 3, "every word should get its own row");
            assert!(puzzle.placements.iter().all(|p| p.direction == Direction::Horizontal));
        }
    }

    #[test]
    fn test_distinct_rows_rejects_more_words_than_rows() {
        let config = PuzzleConfig { size: 3, num_words: 3, strategy: PlacementStrategy::DistinctRows, ..PuzzleConfig::default() };
        let err = generate_with(&config, &words(&["ab", "cd", "ef", "gh"]), &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert_eq!(err.code(), "G001");
        assert_eq!(err, GenerateError::from(ConfigError::TooManyWordsForRows { num_words: 4, size: 3 }));
    }

    #[test]
    fn test_generate_is_reproducible_with_seed() {
        let list = words(&["red", "green", "blue"]);
        let a = generate(10, &list, &mut StdRng::seed_from_u64(123)).unwrap();
        let b = generate(10, &list, &mut StdRng::seed_from_u64(123)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_placement_of() {
        let puzzle = generate(6, &words(&["red", "blue"]), &mut StdRng::seed_from_u64(2)).unwrap();
        assert_eq!(puzzle.placement_of("blue").map(|p| p.word.as_str()), Some("blue"));
        assert!(puzzle.placement_of("gold").is_none());
    }

    #[test]
    fn test_error_codes_and_help() {
        let err = GenerateError::PlacementFailed { word: "turquoise".to_string(), attempts: 1000 };
        assert_eq!(err.code(), "G002");
        let detailed = err.display_detailed();
        assert!(detailed.contains("G002"));
        assert!(detailed.contains("larger grid"));

        let wrapped: GenerateError = ConfigError::ZeroGridSize.into();
        assert_eq!(wrapped.code(), "G001");
        assert!(wrapped.help().is_none());
        assert!(wrapped.display_detailed().contains("caused by: Grid size must be at least 1 (C001)"));
    }
}
