//! Sudoku board synthesis and difficulty carving.
//!
//! Generation runs in two stages:
//!
//! 1. [`synthesize`] builds a complete, rule-valid 9×9 board by randomized
//!    backtracking. This always succeeds.
//! 2. [`carve`] blanks randomly chosen cells of that solution until the
//!    clue count for the requested [`Difficulty`] is reached.
//!
//! [`SudokuGenerator`] ties both stages to a [`Seed`], producing a
//! [`GeneratedSudoku`] that carries the puzzle, its solution, and the seed
//! that reproduces them.
//!
//! Carved puzzles are guaranteed solvable (the solution they were carved
//! from completes them) but are *not* checked for solution uniqueness;
//! blind carving is the accepted trade-off for generation speed.
//!
//! # Examples
//!
//! ```
//! use puzzlepress_core::{Difficulty, Seed};
//! use puzzlepress_sudoku::SudokuGenerator;
//!
//! let generator = SudokuGenerator::new(Difficulty::Easy);
//! let sudoku = generator.generate_with_seed(Seed::from_phrase("doc"));
//!
//! assert!(sudoku.solution.is_valid_solution());
//! assert!(sudoku.puzzle.is_derived_from(&sudoku.solution));
//! assert_eq!(sudoku.puzzle.clue_count(), 45);
//! ```
//!
//! [`Difficulty`]: puzzlepress_core::Difficulty
//! [`Seed`]: puzzlepress_core::Seed

mod carve;
mod generator;
mod synthesize;

pub use self::{
    carve::carve,
    generator::{GeneratedSudoku, SudokuGenerator},
    synthesize::synthesize,
};
