//! Committed word placements.

use std::fmt::{self, Display};

use crate::Direction;

/// A word committed to the grid: the normalized word, its start cell, and
/// the direction its letters advance in.
///
/// A `PlacedWord` is only constructed by the generator, so its cells are
/// guaranteed to lie inside the grid it was placed on.
///
/// # Examples
///
/// ```
/// use puzzlepress_core::Seed;
/// use puzzlepress_wordsearch::WordSearchGenerator;
///
/// let puzzle = WordSearchGenerator::new()
///     .generate_with_seed(["lighthouse"], Seed::from_phrase("doc"));
/// let placement = &puzzle.placed[0];
///
/// assert_eq!(placement.word(), "LIGHTHOUSE");
/// assert_eq!(placement.cells().count(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    word: String,
    row: usize,
    col: usize,
    direction: Direction,
}

impl PlacedWord {
    pub(crate) fn new(word: String, row: usize, col: usize, direction: Direction) -> Self {
        debug_assert!(!word.is_empty());
        Self {
            word,
            row,
            col,
            direction,
        }
    }

    /// Returns the normalized word.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Returns the start row of the first letter.
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Returns the start column of the first letter.
    #[must_use]
    pub const fn col(&self) -> usize {
        self.col
    }

    /// Returns the reading direction.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the `(row, col)` cells the word occupies, in letter order.
    #[expect(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (dr, dc) = self.direction.step();
        (0..self.word.len()).map(move |i| {
            let i = i as isize;
            (
                (self.row as isize + dr * i) as usize,
                (self.col as isize + dc * i) as usize,
            )
        })
    }
}

impl Display for PlacedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at ({}, {}) {}",
            self.word, self.row, self.col, self.direction
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_follow_direction() {
        let placement = PlacedWord::new("CAT".into(), 2, 3, Direction::Across);
        let cells: Vec<_> = placement.cells().collect();
        assert_eq!(cells, vec![(2, 3), (2, 4), (2, 5)]);
    }

    #[test]
    fn test_cells_diagonal_up_climbs() {
        let placement = PlacedWord::new("CAT".into(), 5, 0, Direction::DiagonalUp);
        let cells: Vec<_> = placement.cells().collect();
        assert_eq!(cells, vec![(5, 0), (4, 1), (3, 2)]);
    }

    #[test]
    fn test_display() {
        let placement = PlacedWord::new("CAT".into(), 1, 2, Direction::Down);
        assert_eq!(placement.to_string(), "CAT at (1, 2) down");
    }
}
