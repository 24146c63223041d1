//! SVG serialization of finished puzzle grids.
//!
//! Generators hand this crate completed grids; it converts them to
//! self-contained SVG documents — line segments for grid rulings,
//! positioned glyphs for cell contents — ready to embed in a print layout.
//! Rendering makes no decisions about the puzzle itself: every function
//! here is a pure formatting pass over its input.
//!
//! # Overview
//!
//! - [`svg`]: The primitive layer collecting lines, glyphs, rings, and
//!   rectangles into an `<svg>` string
//! - [`theme`]: Print dimensions and styling knobs with book-interior
//!   defaults
//! - [`sudoku_svg`]: Renders a board with rulings heavier on the outer
//!   border and 3×3 box boundaries than on inner cell divisions
//! - [`word_search_svg`]: Renders a letter grid either uniformly
//!   ([`RenderMode::Puzzle`]) or with placed-word cells emphasized
//!   ([`RenderMode::Solution`])
//!
//! # Examples
//!
//! ```
//! use puzzlepress_core::Board;
//! use puzzlepress_render::{SudokuTheme, sudoku_svg};
//!
//! let board: Board = ".".repeat(81).parse().unwrap();
//! let svg = sudoku_svg(&board, &SudokuTheme::default());
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.ends_with("</svg>"));
//! ```

pub mod svg;
pub mod theme;

mod sudoku;
mod word_search;

pub use self::{
    sudoku::sudoku_svg,
    svg::{GlyphStyle, SvgDocument},
    theme::{SudokuTheme, WordSearchTheme},
    word_search::{RenderMode, word_search_svg},
};
