//! Word reading directions.

use std::fmt::{self, Display};

/// A direction a word can be read in.
///
/// Words always advance left to right or straight down; reversed
/// (right-to-left, bottom-up) directions are not used, keeping the puzzles
/// solvable for the young readers the books target.
///
/// # Examples
///
/// ```
/// use puzzlepress_wordsearch::Direction;
///
/// assert_eq!(Direction::Across.step(), (0, 1));
/// assert_eq!(Direction::DiagonalUp.step(), (-1, 1));
/// assert_eq!(Direction::ALL.len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right: step (0, +1).
    Across,
    /// Top to bottom: step (+1, 0).
    Down,
    /// Down-right: step (+1, +1).
    DiagonalDown,
    /// Up-right: step (−1, +1).
    DiagonalUp,
}

impl Direction {
    /// The four directions, in the order the placer considers them before
    /// shuffling.
    pub const ALL: [Self; 4] = [
        Self::Across,
        Self::Down,
        Self::DiagonalDown,
        Self::DiagonalUp,
    ];

    /// Returns the `(row, column)` step between consecutive letters.
    #[must_use]
    pub const fn step(self) -> (isize, isize) {
        match self {
            Self::Across => (0, 1),
            Self::Down => (1, 0),
            Self::DiagonalDown => (1, 1),
            Self::DiagonalUp => (-1, 1),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Across => "across",
            Self::Down => "down",
            Self::DiagonalDown => "diagonal-down",
            Self::DiagonalUp => "diagonal-up",
        };
        f.write_str(name)
    }
}
