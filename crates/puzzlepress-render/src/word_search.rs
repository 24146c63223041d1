//! Word-search page rendering.

use std::collections::HashSet;

use puzzlepress_wordsearch::{PlacedWord, WordSearchPuzzle};

use crate::{
    svg::{GlyphStyle, SvgDocument},
    theme::WordSearchTheme,
};

/// Page margin around the grid, in user units.
const MARGIN: f32 = 10.0;

/// Which rendering of a word search to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Uniform styling: the page the reader solves.
    Puzzle,
    /// Placed-word cells emphasized with the theme's accent color and a
    /// low-opacity ring; filler letters keep the normal style.
    Solution,
}

/// Renders a word search as a print-ready SVG.
///
/// Both renderings of a puzzle share all geometry; the solution rendering
/// only re-styles the cells covered by placed words, so it can be printed
/// in an answer-key section at a reduced scale.
///
/// # Examples
///
/// ```
/// use puzzlepress_core::Seed;
/// use puzzlepress_render::{RenderMode, WordSearchTheme, word_search_svg};
/// use puzzlepress_wordsearch::WordSearchGenerator;
///
/// let puzzle = WordSearchGenerator::new()
///     .generate_with_seed(["APPLE"], Seed::from_phrase("doc"));
/// let theme = WordSearchTheme::default();
///
/// let page = word_search_svg(&puzzle, RenderMode::Puzzle, &theme);
/// let key = word_search_svg(&puzzle, RenderMode::Solution, &theme);
///
/// assert_eq!(page.matches("<text").count(), 225); // every cell is filled
/// assert_eq!(key.matches("<circle").count(), 5); // APPLE's cells ringed
/// ```
#[must_use]
#[expect(clippy::cast_precision_loss)]
pub fn word_search_svg(
    puzzle: &WordSearchPuzzle,
    mode: RenderMode,
    theme: &WordSearchTheme,
) -> String {
    let side = theme.cell_size * puzzle.grid.size() as f32;
    let page = side + 2.0 * MARGIN;
    let mut doc = SvgDocument::new(page, page, (-MARGIN, -MARGIN, page, page));

    doc.rect(
        0.0,
        0.0,
        side,
        side,
        "white",
        Some(("black", theme.frame_stroke)),
    );

    let emphasized: HashSet<(usize, usize)> = match mode {
        RenderMode::Puzzle => HashSet::new(),
        RenderMode::Solution => puzzle.placed.iter().flat_map(PlacedWord::cells).collect(),
    };

    let normal = GlyphStyle {
        family: theme.glyph_family,
        size: theme.glyph_size,
        weight: "normal",
        fill: "black",
    };
    let accent = GlyphStyle {
        fill: theme.accent,
        weight: "bold",
        ..normal
    };

    let half = theme.cell_size / 2.0;
    for (row, cells) in puzzle.grid.rows().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            let Some(letter) = *cell else {
                continue;
            };
            let cx = col as f32 * theme.cell_size + half;
            let cy = row as f32 * theme.cell_size + half;
            if emphasized.contains(&(row, col)) {
                doc.glyph(cx, cy + theme.glyph_baseline, char::from(letter), &accent);
                doc.ring(cx, cy, half - 2.0, theme.accent, 1.0, 0.3);
            } else {
                doc.glyph(cx, cy + theme.glyph_baseline, char::from(letter), &normal);
            }
        }
    }

    doc.finish()
}

#[cfg(test)]
mod tests {
    use puzzlepress_core::Seed;
    use puzzlepress_wordsearch::WordSearchGenerator;

    use super::*;

    fn fixture() -> WordSearchPuzzle {
        WordSearchGenerator::new()
            .generate_with_seed(["APPLE", "BANANA", "CHERRY"], Seed::from_phrase("render"))
    }

    #[test]
    fn test_every_cell_renders_one_glyph() {
        let puzzle = fixture();
        for mode in [RenderMode::Puzzle, RenderMode::Solution] {
            let svg = word_search_svg(&puzzle, mode, &WordSearchTheme::default());
            assert_eq!(svg.matches("<text").count(), 225);
        }
    }

    #[test]
    fn test_puzzle_mode_is_uniform() {
        let svg = word_search_svg(&fixture(), RenderMode::Puzzle, &WordSearchTheme::default());
        assert_eq!(svg.matches("<circle").count(), 0);
        assert_eq!(svg.matches(r#"fill="red""#).count(), 0);
        assert_eq!(svg.matches(r#"font-weight="bold""#).count(), 0);
    }

    #[test]
    fn test_solution_mode_emphasizes_placed_cells() {
        let puzzle = fixture();
        let svg = word_search_svg(&puzzle, RenderMode::Solution, &WordSearchTheme::default());

        let covered: HashSet<(usize, usize)> =
            puzzle.placed.iter().flat_map(PlacedWord::cells).collect();
        assert!(!covered.is_empty());
        assert_eq!(svg.matches("<circle").count(), covered.len());
        assert_eq!(svg.matches(r#"font-weight="bold""#).count(), covered.len());
        // Accent appears once per emphasized glyph and once per ring.
        assert_eq!(svg.matches("red").count(), 2 * covered.len());
    }

    #[test]
    fn test_frame_uses_theme_stroke() {
        let svg = word_search_svg(&fixture(), RenderMode::Puzzle, &WordSearchTheme::default());
        assert!(svg.contains(r#"<rect x="0" y="0" width="450" height="450" fill="white" stroke="black" stroke-width="2"/>"#));
    }

    #[test]
    fn test_smaller_grid_scales_page() {
        let puzzle = WordSearchGenerator::with_size(10)
            .generate_with_seed(["CAT"], Seed::from_phrase("small"));
        let svg = word_search_svg(&puzzle, RenderMode::Puzzle, &WordSearchTheme::default());
        assert!(svg.contains(r#"viewBox="-10 -10 320 320""#));
        assert_eq!(svg.matches("<text").count(), 100);
    }
}
