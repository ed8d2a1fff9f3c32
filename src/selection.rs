//! The cells picked during one gesture.

use serde::Serialize;

use crate::grid::Cell;

/// Ordered, duplicate-free cells of the current gesture.
///
/// Order is kept exactly as picked; straightness and contiguity are the
/// validator's business, not ours.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Selection {
    cells: Vec<Cell>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Selection::default()
    }

    /// Start a new gesture at `cell`, discarding whatever was selected before.
    pub fn begin(&mut self, cell: Cell) {
        self.cells.clear();
        self.cells.push(cell);
    }

    /// Append `cell` unless it is already selected. Returns whether it was added.
    pub fn extend(&mut self, cell: Cell) -> bool {
        if self.cells.contains(&cell) {
            return false;
        }
        self.cells.push(cell);
        true
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_clears_previous_gesture() {
        let mut sel = Selection::new();
        sel.begin(Cell::new(0, 0));
        sel.extend(Cell::new(0, 1));
        sel.begin(Cell::new(3, 3));
        assert_eq!(sel.cells(), &[Cell::new(3, 3)]);
    }

    #[test]
    fn test_extend_skips_duplicates() {
        let mut sel = Selection::new();
        sel.begin(Cell::new(1, 0));
        assert!(sel.extend(Cell::new(1, 1)));
        assert!(!sel.extend(Cell::new(1, 0)));
        assert!(!sel.extend(Cell::new(1, 1)));
        assert_eq!(sel.len(), 2);
    }

    #[test]
    fn test_extend_keeps_pick_order() {
        // no ordering constraint at collection time
        let mut sel = Selection::new();
        sel.extend(Cell::new(2, 2));
        sel.extend(Cell::new(0, 0));
        sel.extend(Cell::new(1, 1));
        assert_eq!(sel.cells(), &[Cell::new(2, 2), Cell::new(0, 0), Cell::new(1, 1)]);
    }

    #[test]
    fn test_clear() {
        let mut sel = Selection::new();
        sel.begin(Cell::new(0, 0));
        sel.clear();
        assert!(sel.is_empty());
        assert!(!sel.contains(Cell::new(0, 0)));
    }

    #[test]
    fn test_serializes_as_cell_list() {
        let mut sel = Selection::new();
        sel.begin(Cell::new(1, 2));
        assert_eq!(serde_json::to_string(&sel).unwrap(), r#"[{"row":1,"col":2}]"#);
    }
}
