//! The seed-driven word-search generation front end.

use log::debug;
use puzzlepress_core::Seed;
use rand::{Rng, RngExt as _, seq::SliceRandom as _};

use crate::{Direction, LetterGrid, PlacedWord, normalize};

/// Random start coordinates tried per direction before giving up on it.
///
/// A word that fails all four directions (200 attempts in total) is left
/// out of the puzzle.
pub const ATTEMPTS_PER_DIRECTION: usize = 50;

/// A size-parameterized word-search generator.
///
/// The generator holds no working state; every call builds its grid and
/// random stream locally from a [`Seed`], so one generator value can serve
/// concurrent callers.
///
/// # Examples
///
/// ```
/// use puzzlepress_wordsearch::WordSearchGenerator;
///
/// let puzzle = WordSearchGenerator::with_size(12)
///     .generate(["whale", "dolphin", "sea-horse"]);
///
/// assert_eq!(puzzle.grid.size(), 12);
/// assert!(puzzle.grid.is_filled());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSearchGenerator {
    size: usize,
}

impl Default for WordSearchGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl WordSearchGenerator {
    /// The default grid extent.
    pub const DEFAULT_SIZE: usize = 15;

    /// Creates a generator for the default 15×15 grid.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
        }
    }

    /// Creates a generator for an N×N grid.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub const fn with_size(size: usize) -> Self {
        assert!(size > 0, "grid size must be at least 1");
        Self { size }
    }

    /// Returns the grid extent this generator builds.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Generates a puzzle from a fresh random seed.
    ///
    /// Words are processed in the given order; see
    /// [`generate_with_seed`](Self::generate_with_seed).
    #[must_use]
    pub fn generate<I>(&self, words: I) -> WordSearchPuzzle
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.generate_with_seed(words, Seed::random())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// Each word is normalized and placed in the caller-supplied order;
    /// words normalizing to the empty string, and words for which no valid
    /// placement is found within [`ATTEMPTS_PER_DIRECTION`] tries in any
    /// direction, are omitted from `placed`. That omission is a normal
    /// outcome, not an error: compare `placed.len()` against the input
    /// length to react to partial placement. Once all words are processed,
    /// every still-blank cell is filled with a uniform random letter.
    #[must_use]
    pub fn generate_with_seed<I>(&self, words: I, seed: Seed) -> WordSearchPuzzle
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut rng = seed.rng();
        let mut grid = LetterGrid::new(self.size);
        let mut placed = Vec::new();

        for word in words {
            let word = normalize(word.as_ref());
            if word.is_empty() {
                continue;
            }
            match place_word(&mut grid, &word, &mut rng) {
                Some(placement) => {
                    debug!("placed {placement}");
                    placed.push(placement);
                }
                None => debug!("no room for {word}, dropping it"),
            }
        }

        fill_blanks(&mut grid, &mut rng);
        WordSearchPuzzle { grid, placed, seed }
    }
}

/// A generated word search: the filled grid, the committed placements, and
/// the seed that reproduces both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSearchPuzzle {
    /// The fully filled letter grid.
    pub grid: LetterGrid,
    /// Successfully placed words, a subsequence of the normalized input.
    pub placed: Vec<PlacedWord>,
    /// The seed that reproduces this exact puzzle.
    pub seed: Seed,
}

impl WordSearchPuzzle {
    /// Reads the grid letters along a placement.
    ///
    /// For any entry of `placed` this reproduces the placed word exactly;
    /// it exists so tests and downstream checks can verify that without
    /// reimplementing the direction walk.
    #[must_use]
    pub fn reads(&self, placement: &PlacedWord) -> String {
        placement
            .cells()
            .map(|(row, col)| {
                self.grid
                    .get(row, col)
                    .map_or('.', char::from)
            })
            .collect()
    }
}

/// Tries to place one normalized word, committing and returning the first
/// valid placement found.
///
/// Directions are shuffled per word; within a direction, start cells are
/// drawn uniformly at random. First fit wins; there is no scoring or
/// reordering across words.
fn place_word(grid: &mut LetterGrid, word: &str, rng: &mut impl Rng) -> Option<PlacedWord> {
    let mut directions = Direction::ALL;
    directions.shuffle(rng);

    for direction in directions {
        for _ in 0..ATTEMPTS_PER_DIRECTION {
            let row = rng.random_range(0..grid.size());
            let col = rng.random_range(0..grid.size());
            if fits(grid, word, row, col, direction) {
                let placement = PlacedWord::new(word.to_owned(), row, col, direction);
                commit(grid, &placement);
                return Some(placement);
            }
        }
    }
    None
}

/// Checks that the word stays inside the grid from `(row, col)` along
/// `direction`, and that every covered cell is blank or already holds the
/// letter the word needs there (a crossing).
#[expect(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
fn fits(grid: &LetterGrid, word: &str, row: usize, col: usize, direction: Direction) -> bool {
    let (dr, dc) = direction.step();
    let last = word.len() as isize - 1;
    let size = grid.size() as isize;

    let end_row = row as isize + dr * last;
    let end_col = col as isize + dc * last;
    if end_row < 0 || end_row >= size || end_col < 0 || end_col >= size {
        return false;
    }

    word.bytes().enumerate().all(|(i, letter)| {
        let r = (row as isize + dr * i as isize) as usize;
        let c = (col as isize + dc * i as isize) as usize;
        grid.get(r, c).is_none_or(|existing| existing == letter)
    })
}

fn commit(grid: &mut LetterGrid, placement: &PlacedWord) {
    for ((row, col), letter) in placement.cells().zip(placement.word().bytes()) {
        grid.set(row, col, letter);
    }
}

fn fill_blanks(grid: &mut LetterGrid, rng: &mut impl Rng) {
    for row in 0..grid.size() {
        for col in 0..grid.size() {
            if grid.get(row, col).is_none() {
                grid.set(row, col, rng.random_range(b'A'..=b'Z'));
            }
        }
    }
}
