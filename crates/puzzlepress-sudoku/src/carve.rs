//! Carving a solution down to a puzzle.

use log::debug;
use puzzlepress_core::{Board, Difficulty, Position};
use rand::{Rng, RngExt as _};

/// Carves a puzzle out of a complete solution.
///
/// Uniformly random cells are blanked, re-picking whenever the chosen cell
/// is already blank, until exactly [`Difficulty::cells_to_remove`] cells
/// have been removed. Retained cells are never altered, so the result is
/// derived from `solution` and has exactly
/// [`Difficulty::target_clues`] clues.
///
/// No re-solve or uniqueness check runs after removal: the carved puzzle is
/// always solvable (by the solution it came from) but may admit further
/// completions. This keeps carving O(cells removed) instead of invoking a
/// solver per removal.
///
/// # Examples
///
/// ```
/// use puzzlepress_core::{Difficulty, Seed};
/// use puzzlepress_sudoku::{carve, synthesize};
///
/// let mut rng = Seed::from_phrase("doc").rng();
/// let solution = synthesize(&mut rng);
/// let puzzle = carve(&solution, Difficulty::Hard, &mut rng);
///
/// assert_eq!(puzzle.clue_count(), 28);
/// assert!(puzzle.is_derived_from(&solution));
/// ```
#[must_use]
pub fn carve(solution: &Board, difficulty: Difficulty, rng: &mut impl Rng) -> Board {
    let mut puzzle = solution.clone();
    let cells_to_remove = difficulty.cells_to_remove();

    let mut removed = 0;
    while removed < cells_to_remove {
        let mut pos = random_position(rng);
        while puzzle[pos].is_none() {
            pos = random_position(rng);
        }
        puzzle[pos] = None;
        removed += 1;
    }

    debug!("carved {removed} cells for {difficulty}, {} clues left", puzzle.clue_count());
    puzzle
}

fn random_position(rng: &mut impl Rng) -> Position {
    Position::new(rng.random_range(0..9), rng.random_range(0..9))
}
