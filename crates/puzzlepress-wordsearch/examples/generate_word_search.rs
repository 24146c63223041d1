//! Example generating word-search pages from the command line.
//!
//! This example shows how to:
//! - Generate a word search from a word list
//! - Reproduce a puzzle from its seed
//! - Render the puzzle and solution SVGs
//! - Detect partial placement (fewer words placed than requested)
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_word_search -- APPLE BANANA CHERRY
//! ```
//!
//! Smaller grid, reproducible seed, both SVG renderings:
//!
//! ```sh
//! cargo run --example generate_word_search -- \
//!     --size 12 --seed <64-hex-chars> \
//!     --puzzle-svg puzzle.svg --solution-svg solution.svg \
//!     whale dolphin sea-horse
//! ```

use std::{fs, path::PathBuf, process};

use clap::Parser;
use puzzlepress_core::Seed;
use puzzlepress_render::{RenderMode, WordSearchTheme, word_search_svg};
use puzzlepress_wordsearch::WordSearchGenerator;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Words to hide in the grid, in placement order.
    #[arg(value_name = "WORD", required = true)]
    words: Vec<String>,

    /// Grid extent (rows and columns).
    #[arg(long, value_name = "N", default_value_t = WordSearchGenerator::DEFAULT_SIZE)]
    size: usize,

    /// Seed (64 hex characters) reproducing a specific puzzle.
    #[arg(long, value_name = "SEED")]
    seed: Option<String>,

    /// Write the puzzle SVG to this path.
    #[arg(long, value_name = "PATH")]
    puzzle_svg: Option<PathBuf>,

    /// Write the solution SVG (placed words emphasized) to this path.
    #[arg(long, value_name = "PATH")]
    solution_svg: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if args.size == 0 {
        eprintln!("--size must be at least 1.");
        process::exit(2);
    }
    let generator = WordSearchGenerator::with_size(args.size);

    let puzzle = match args.seed.as_deref() {
        Some(text) => match text.parse::<Seed>() {
            Ok(seed) => generator.generate_with_seed(&args.words, seed),
            Err(err) => {
                eprintln!("Invalid --seed: {err}");
                process::exit(2);
            }
        },
        None => generator.generate(&args.words),
    };

    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Grid:");
    for line in puzzle.grid.to_string().lines() {
        println!("  {line}");
    }
    println!();
    println!("Placed {} of {} words:", puzzle.placed.len(), args.words.len());
    for placement in &puzzle.placed {
        println!("  {placement}");
    }
    if puzzle.placed.len() < args.words.len() {
        println!();
        println!("Some words found no room; try a larger --size or a different seed.");
    }

    let theme = WordSearchTheme::default();
    for (path, mode) in [
        (args.puzzle_svg, RenderMode::Puzzle),
        (args.solution_svg, RenderMode::Solution),
    ] {
        let Some(path) = path else { continue };
        let svg = word_search_svg(&puzzle, mode, &theme);
        if let Err(err) = fs::write(&path, svg) {
            eprintln!("Failed to write {}: {err}", path.display());
            process::exit(1);
        }
        println!();
        println!("Wrote {}", path.display());
    }
}
