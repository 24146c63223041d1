//! Sudoku page rendering.

use puzzlepress_core::{Board, Position};

use crate::{
    svg::{GlyphStyle, SvgDocument},
    theme::SudokuTheme,
};

/// Page margin around the board, in user units.
const MARGIN: f32 = 5.0;

/// Renders a board as a print-ready SVG.
///
/// Emits the white background, twenty rulings with weights graded per the
/// theme (outer border heaviest, box boundaries next, inner divisions
/// lightest), and one bold centered glyph per clue. Blank cells render
/// nothing — the solver's pencil goes there.
///
/// Works for puzzles and solutions alike; a solution is just a board with
/// 81 clues.
///
/// # Examples
///
/// ```
/// use puzzlepress_core::Board;
/// use puzzlepress_render::{SudokuTheme, sudoku_svg};
///
/// let mut text = "5".to_string();
/// text.push_str(&".".repeat(80)); // one clue, eighty blanks
/// let board: Board = text.parse().unwrap();
///
/// let svg = sudoku_svg(&board, &SudokuTheme::default());
/// assert_eq!(svg.matches("<text").count(), 1); // one glyph per clue
/// ```
#[must_use]
pub fn sudoku_svg(board: &Board, theme: &SudokuTheme) -> String {
    let side = theme.cell_size * 9.0;
    let page = side + 2.0 * MARGIN;
    let mut doc = SvgDocument::new(page, page, (-MARGIN, -MARGIN, page, page));

    doc.rect(0.0, 0.0, side, side, "white", None);

    for i in 0..=9 {
        let offset = f32::from(i) * theme.cell_size;
        let stroke = theme.ruling_stroke(i);
        doc.line(offset, 0.0, offset, side, "black", stroke);
        doc.line(0.0, offset, side, offset, "black", stroke);
    }

    let style = GlyphStyle {
        family: theme.glyph_family,
        size: theme.glyph_size,
        weight: "bold",
        fill: "black",
    };
    let half = theme.cell_size / 2.0;
    for pos in Position::all() {
        if let Some(digit) = board[pos] {
            let x = f32::from(pos.x()) * theme.cell_size + half;
            let y = f32::from(pos.y()) * theme.cell_size + half + theme.glyph_baseline;
            doc.glyph(x, y, char::from(b'0' + digit.value()), &style);
        }
    }

    doc.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: &str = "
        53_ _7_ ___
        6__ 195 ___
        _98 ___ _6_
        8__ _6_ __3
        4__ 8_3 __1
        7__ _2_ __6
        _6_ ___ 28_
        ___ 419 __5
        ___ _8_ _79
    ";

    fn render(board_text: &str) -> String {
        let board: Board = board_text.parse().unwrap();
        sudoku_svg(&board, &SudokuTheme::default())
    }

    #[test]
    fn test_one_glyph_per_clue() {
        let svg = render(PUZZLE);
        assert_eq!(svg.matches("<text").count(), 30);

        let blank = ".".repeat(81);
        assert_eq!(render(&blank).matches("<text").count(), 0);
    }

    #[test]
    fn test_twenty_rulings() {
        let svg = render(PUZZLE);
        assert_eq!(svg.matches("<line").count(), 20);
    }

    #[test]
    fn test_ruling_weights_are_graded() {
        let svg = render(PUZZLE);
        // 2 outer rulings per axis, 2 box rulings per axis, 6 inner.
        assert_eq!(svg.matches(r#"stroke-width="4""#).count(), 4);
        assert_eq!(svg.matches(r#"stroke-width="2""#).count(), 4);
        assert_eq!(svg.matches(r#"stroke-width="1""#).count(), 12);
    }

    #[test]
    fn test_document_is_well_formed_shell() {
        let svg = render(PUZZLE);
        assert!(svg.starts_with("<svg "));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(r#"viewBox="-5 -5 460 460""#));
        assert_eq!(svg.matches("<svg").count(), 1);
    }

    #[test]
    fn test_glyphs_carry_clue_values() {
        let svg = render(PUZZLE);
        // Top-left clue of the fixture is a 5 centered in its cell.
        assert!(svg.contains(r#"<text x="25" y="35""#));
        assert!(svg.contains(">5</text>"));
    }
}
