//! Selection validation: is the picked line one of the pending words?
//!
//! Validation is a pure function. Applying a match (recording the found
//! word, clearing the selection) is left to the session.
//!
//! # Examples
//!
//! ```
//! use wordsearch::config::MatchDirection;
//! use wordsearch::grid::{Cell, Grid};
//! use wordsearch::validator::{validate, FoundWords, MatchOutcome, RejectReason};
//!
//! let grid = Grid::from_rows(&["xxxx", "catx", "xxxx", "xxxx"]).unwrap();
//! let words = vec!["cat".to_string()];
//! let found = FoundWords::default();
//!
//! let line = [Cell::new(1, 0), Cell::new(1, 1), Cell::new(1, 2)];
//! assert!(matches!(
//!     validate(&line, &grid, &words, &found, MatchDirection::AsSelected),
//!     MatchOutcome::Matched { .. }
//! ));
//!
//! let gap = [Cell::new(1, 0), Cell::new(1, 2)];
//! assert_eq!(
//!     validate(&gap, &grid, &words, &found, MatchDirection::AsSelected),
//!     MatchOutcome::Rejected(RejectReason::NotContiguous)
//! );
//! ```

use serde::Serialize;

use crate::config::MatchDirection;
use crate::grid::{Cell, Grid};

/// Why a selection did not match. None of these are errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RejectReason {
    /// Fewer than two cells.
    TooShort,
    /// Cells not all in one row or one column.
    NotStraight,
    /// A gap along the shared row or column.
    NotContiguous,
    /// The letters spell no target word.
    NoMatch,
    /// The letters spell a word that was already found.
    AlreadyFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// `cells` run from the word's first letter to its last.
    Matched { word: String, cells: Vec<Cell> },
    Rejected(RejectReason),
}

/// A found word and the cells it was found at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoundWord {
    pub word: String,
    pub cells: Vec<Cell>,
}

/// Words matched so far, in the order they were found. Grows until restart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FoundWords {
    entries: Vec<FoundWord>,
}

impl FoundWords {
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.entries.iter().any(|f| f.word == word)
    }

    /// Record `word`. A word already present is left alone; returns whether it was new.
    pub fn insert(&mut self, word: String, cells: Vec<Cell>) -> bool {
        if self.contains(&word) {
            return false;
        }
        self.entries.push(FoundWord { word, cells });
        true
    }

    /// Whether any found word covers `cell`.
    #[must_use]
    pub fn covers(&self, cell: Cell) -> bool {
        self.entries.iter().any(|f| f.cells.contains(&cell))
    }

    pub fn iter(&self) -> impl Iterator<Item = &FoundWord> {
        self.entries.iter()
    }

    #[must_use]
    pub fn last(&self) -> Option<&FoundWord> {
        self.entries.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Coordinate that varies along a straight selection.
fn varying_coords(cells: &[Cell]) -> Option<Vec<usize>> {
    let first = cells[0];
    if cells.iter().all(|c| c.row == first.row) {
        Some(cells.iter().map(|c| c.col).collect())
    } else if cells.iter().all(|c| c.col == first.col) {
        Some(cells.iter().map(|c| c.row).collect())
    } else {
        None
    }
}

fn is_consecutive_run(mut coords: Vec<usize>) -> bool {
    coords.sort_unstable();
    coords.windows(2).all(|pair| pair[0].checked_add(1) == Some(pair[1]))
}

/// Check `selection` against the pending words.
///
/// The letters are read in the order the cells were picked. With
/// `MatchDirection::EitherWay` the reverse reading counts too; a pending word
/// wins over an already-found one when both readings match something.
#[must_use]
pub fn validate(
    selection: &[Cell],
    grid: &Grid,
    words: &[String],
    found: &FoundWords,
    direction: MatchDirection,
) -> MatchOutcome {
    if selection.len() < 2 {
        return MatchOutcome::Rejected(RejectReason::TooShort);
    }
    let Some(coords) = varying_coords(selection) else {
        return MatchOutcome::Rejected(RejectReason::NotStraight);
    };
    if !is_consecutive_run(coords) {
        return MatchOutcome::Rejected(RejectReason::NotContiguous);
    }
    let Some(forward) = grid.letters_at(selection) else {
        return MatchOutcome::Rejected(RejectReason::NoMatch);
    };

    let mut readings = vec![(forward, selection.to_vec())];
    if direction == MatchDirection::EitherWay {
        let backward: String = readings[0].0.chars().rev().collect();
        let reversed_cells: Vec<Cell> = selection.iter().rev().copied().collect();
        readings.push((backward, reversed_cells));
    }

    let mut already_found = false;
    for (reading, cells) in readings {
        if !words.iter().any(|w| *w == reading) {
            continue;
        }
        if found.contains(&reading) {
            already_found = true;
            continue;
        }
        return MatchOutcome::Matched { word: reading, cells };
    }

    MatchOutcome::Rejected(if already_found { RejectReason::AlreadyFound } else { RejectReason::NoMatch })
}
