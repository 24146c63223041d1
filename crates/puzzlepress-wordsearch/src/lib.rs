//! Word-search grid generation.
//!
//! A word search is built in a single pass over the caller's word list:
//! each word is normalized (uppercased, stripped of non-letters), then
//! placed at a random position in one of four directions, keeping letters
//! already on the grid intact so words may legitimately cross. Words that
//! find no home after a bounded number of attempts are quietly left out;
//! the remaining blanks are filled with random noise letters.
//!
//! # Overview
//!
//! - [`Direction`]: The four supported reading directions
//! - [`LetterGrid`]: The N×N character grid (default 15×15)
//! - [`PlacedWord`]: A committed placement with its start cell and direction
//! - [`WordSearchGenerator`]: The seed-driven generation front end
//!
//! # Examples
//!
//! ```
//! use puzzlepress_core::Seed;
//! use puzzlepress_wordsearch::WordSearchGenerator;
//!
//! let generator = WordSearchGenerator::new();
//! let puzzle = generator
//!     .generate_with_seed(["APPLE", "BANANA", "CHERRY"], Seed::from_phrase("doc"));
//!
//! assert!(puzzle.placed.len() <= 3);
//! assert!(puzzle.grid.is_filled());
//! for placement in &puzzle.placed {
//!     assert_eq!(puzzle.reads(placement), placement.word());
//! }
//! ```

mod direction;
mod generator;
mod grid;
mod placement;
mod word;

pub use self::{
    direction::Direction,
    generator::{ATTEMPTS_PER_DIRECTION, WordSearchGenerator, WordSearchPuzzle},
    grid::LetterGrid,
    placement::PlacedWord,
    word::normalize,
};
