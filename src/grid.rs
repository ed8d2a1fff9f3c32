//! The square letter grid and its cell coordinates.

use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

/// A `(row, col)` coordinate in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Cell { row, col }
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Cell { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// A fully generated `size`×`size` grid. Every cell holds a letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    pub(crate) size: usize,
    // row-major
    pub(crate) letters: Vec<char>,
}

/// Wire shape of a `Grid`, checked before it becomes one.
#[derive(Deserialize)]
struct RawGrid {
    size: usize,
    letters: Vec<char>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = String;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        let len = raw.letters.len();
        Grid::from_letters(raw.size, raw.letters)
            .ok_or_else(|| format!("a {0}x{0} grid needs {1} letters, got {len}", raw.size, raw.size * raw.size))
    }
}

impl Grid {
    /// Build a grid from row-major letters.
    ///
    /// Returns `None` if `letters.len() != size * size`.
    #[must_use]
    pub fn from_letters(size: usize, letters: Vec<char>) -> Option<Self> {
        (letters.len() == size * size).then_some(Grid { size, letters })
    }

    /// Build a grid from one string per row (test and fixture helper).
    #[must_use]
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|r| r.chars().count() != size) {
            return None;
        }
        Some(Grid { size, letters: rows.iter().flat_map(|r| r.chars()).collect() })
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<char> {
        if !self.contains(cell) {
            return None;
        }
        self.letters.get(cell.row * self.size + cell.col).copied()
    }

    /// Concatenate the letters under `cells`, in the given order.
    ///
    /// Returns `None` if any cell lies outside the grid.
    #[must_use]
    pub fn letters_at(&self, cells: &[Cell]) -> Option<String> {
        cells.iter().map(|&c| self.get(c)).collect()
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        // chunks(0) panics, and a 0-sized grid has no rows anyway
        self.letters.chunks(self.size.max(1))
    }

    /// All letters in row-major order.
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }
}

impl Index<Cell> for Grid {
    type Output = char;

    fn index(&self, cell: Cell) -> &char {
        assert!(self.contains(cell), "cell {cell} outside {0}x{0} grid", self.size);
        &self.letters[cell.row * self.size + cell.col]
    }
}

/// Uppercase letters separated by spaces, one row per line.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(|c| c.to_ascii_uppercase().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
