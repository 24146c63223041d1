//! Example generating sudoku pages from the command line.
//!
//! This example shows how to:
//! - Create a `SudokuGenerator` for a named difficulty
//! - Reproduce a puzzle from its seed
//! - Render the carved puzzle to SVG
//! - Sample a batch of puzzles in parallel
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_sudoku -- --difficulty hard
//! ```
//!
//! Reproduce a specific puzzle:
//!
//! ```sh
//! cargo run --example generate_sudoku -- --seed <64-hex-chars>
//! ```
//!
//! Write the print-ready puzzle SVG:
//!
//! ```sh
//! cargo run --example generate_sudoku -- --difficulty expert --svg puzzle.svg
//! ```
//!
//! Sample a batch in parallel, printing one seed per line:
//!
//! ```sh
//! cargo run --example generate_sudoku -- --count 100
//! ```

use std::{fs, path::PathBuf, process};

use clap::{Parser, ValueEnum};
use puzzlepress_core::{Difficulty, Seed};
use puzzlepress_render::{SudokuTheme, sudoku_svg};
use puzzlepress_sudoku::{GeneratedSudoku, SudokuGenerator};
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Level {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl From<Level> for Difficulty {
    fn from(level: Level) -> Self {
        match level {
            Level::Easy => Difficulty::Easy,
            Level::Medium => Difficulty::Medium,
            Level::Hard => Difficulty::Hard,
            Level::Expert => Difficulty::Expert,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty to carve to.
    #[arg(long, value_name = "LEVEL", default_value = "medium")]
    difficulty: Level,

    /// Seed (64 hex characters) reproducing a specific puzzle.
    #[arg(long, value_name = "SEED")]
    seed: Option<String>,

    /// Number of puzzles to sample (batch mode prints seed and clue count).
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    count: usize,

    /// Write the puzzle SVG to this path.
    #[arg(long, value_name = "PATH")]
    svg: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let generator = SudokuGenerator::new(Difficulty::from(args.difficulty));

    let seed = args.seed.as_deref().map(|text| {
        text.parse::<Seed>().unwrap_or_else(|err| {
            eprintln!("Invalid --seed: {err}");
            process::exit(2);
        })
    });

    if args.count > 1 {
        if seed.is_some() {
            eprintln!("--seed reproduces a single puzzle; it cannot be combined with --count.");
            process::exit(2);
        }
        let batch: Vec<GeneratedSudoku> = (0..args.count)
            .into_par_iter()
            .map(|_| generator.generate())
            .collect();
        for sudoku in &batch {
            println!("{}  {} clues", sudoku.seed, sudoku.puzzle.clue_count());
        }
        return;
    }

    let sudoku = match seed {
        Some(seed) => generator.generate_with_seed(seed),
        None => generator.generate(),
    };
    print_sudoku(&sudoku);

    if let Some(path) = args.svg {
        let svg = sudoku_svg(&sudoku.puzzle, &SudokuTheme::default());
        if let Err(err) = fs::write(&path, svg) {
            eprintln!("Failed to write {}: {err}", path.display());
            process::exit(1);
        }
        println!();
        println!("Wrote {}", path.display());
    }
}

fn print_sudoku(sudoku: &GeneratedSudoku) {
    println!("Seed:");
    println!("  {}", sudoku.seed);
    println!();
    println!("Difficulty:");
    println!("  {}", sudoku.difficulty);
    println!();

    println!("Puzzle:");
    for line in sudoku.puzzle.to_string().lines() {
        println!("  {line}");
    }
    println!();
    println!("Solution:");
    for line in sudoku.solution.to_string().lines() {
        println!("  {line}");
    }
}
