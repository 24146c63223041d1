//! Print dimensions and styling.
//!
//! Defaults match the trim sizes the activity-book layouts are built
//! around; all units are SVG user units, which downstream print tooling
//! scales as a whole.

/// Styling for sudoku pages.
///
/// Ruling weights are graded so the board reads at arm's length: the outer
/// border is heaviest, 3×3 box boundaries lighter, inner cell divisions
/// lightest.
#[derive(Debug, Clone, PartialEq)]
pub struct SudokuTheme {
    /// Cell edge length.
    pub cell_size: f32,
    /// Stroke width of the outer border rulings.
    pub outer_stroke: f32,
    /// Stroke width of the 3×3 box boundary rulings.
    pub box_stroke: f32,
    /// Stroke width of inner cell rulings.
    pub inner_stroke: f32,
    /// Clue glyph font size.
    pub glyph_size: f32,
    /// Clue glyph font family.
    pub glyph_family: &'static str,
    /// Downward offset from cell center to glyph baseline.
    pub glyph_baseline: f32,
}

impl Default for SudokuTheme {
    fn default() -> Self {
        Self {
            cell_size: 50.0,
            outer_stroke: 4.0,
            box_stroke: 2.0,
            inner_stroke: 1.0,
            glyph_size: 32.0,
            glyph_family: "Arial, sans-serif",
            glyph_baseline: 10.0,
        }
    }
}

impl SudokuTheme {
    /// Stroke width for ruling `i` of 0-9: outer border, box boundary, or
    /// inner division.
    pub(crate) fn ruling_stroke(&self, i: u8) -> f32 {
        if i % 3 == 0 {
            if i == 0 || i == 9 {
                self.outer_stroke
            } else {
                self.box_stroke
            }
        } else {
            self.inner_stroke
        }
    }
}

/// Styling for word-search pages.
#[derive(Debug, Clone, PartialEq)]
pub struct WordSearchTheme {
    /// Cell edge length.
    pub cell_size: f32,
    /// Stroke width of the outer frame.
    pub frame_stroke: f32,
    /// Letter glyph font size.
    pub glyph_size: f32,
    /// Letter glyph font family.
    pub glyph_family: &'static str,
    /// Downward offset from cell center to glyph baseline.
    pub glyph_baseline: f32,
    /// Color emphasizing placed-word cells in solution renderings.
    pub accent: &'static str,
}

impl Default for WordSearchTheme {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            frame_stroke: 2.0,
            glyph_size: 20.0,
            glyph_family: "Courier New, monospace",
            glyph_baseline: 8.0,
            accent: "red",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ruling_grades() {
        let theme = SudokuTheme::default();
        assert_eq!(theme.ruling_stroke(0), 4.0);
        assert_eq!(theme.ruling_stroke(9), 4.0);
        assert_eq!(theme.ruling_stroke(3), 2.0);
        assert_eq!(theme.ruling_stroke(6), 2.0);
        for i in [1, 2, 4, 5, 7, 8] {
            assert_eq!(theme.ruling_stroke(i), 1.0);
        }
    }

    #[test]
    fn test_outer_rulings_outweigh_inner() {
        let theme = SudokuTheme::default();
        assert!(theme.outer_stroke > theme.box_stroke);
        assert!(theme.box_stroke > theme.inner_stroke);
    }
}
