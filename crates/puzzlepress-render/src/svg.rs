//! A minimal SVG assembly layer.
//!
//! Just enough of SVG for puzzle pages: a document with a view box, plus
//! the four primitives the renderers emit. Coordinates are written as-is;
//! whole numbers print without a fractional part, keeping the output
//! byte-stable across runs.

use std::fmt::Write as _;

/// Styling for a positioned glyph.
///
/// Glyphs are always centered horizontally on their anchor point
/// (`text-anchor="middle"`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphStyle<'a> {
    /// CSS font-family list.
    pub family: &'a str,
    /// Font size in user units.
    pub size: f32,
    /// CSS font-weight keyword.
    pub weight: &'a str,
    /// Fill color.
    pub fill: &'a str,
}

/// An SVG document under construction.
///
/// # Examples
///
/// ```
/// use puzzlepress_render::SvgDocument;
///
/// let mut doc = SvgDocument::new(110.0, 110.0, (-5.0, -5.0, 110.0, 110.0));
/// doc.line(0.0, 0.0, 100.0, 0.0, "black", 2.0);
/// let svg = doc.finish();
///
/// assert!(svg.starts_with(r#"<svg width="110" height="110""#));
/// assert!(svg.contains(r#"stroke-width="2""#));
/// assert!(svg.ends_with("</svg>"));
/// ```
#[derive(Debug, Clone)]
pub struct SvgDocument {
    body: String,
}

impl SvgDocument {
    /// Starts a document with the given outer dimensions and view box
    /// `(min-x, min-y, width, height)`.
    #[must_use]
    pub fn new(width: f32, height: f32, view_box: (f32, f32, f32, f32)) -> Self {
        let (min_x, min_y, vb_width, vb_height) = view_box;
        let body = format!(
            r#"<svg width="{width}" height="{height}" viewBox="{min_x} {min_y} {vb_width} {vb_height}" xmlns="http://www.w3.org/2000/svg">"#
        );
        Self { body }
    }

    /// Appends a rectangle, optionally stroked.
    pub fn rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: &str,
        stroke: Option<(&str, f32)>,
    ) {
        match stroke {
            Some((color, stroke_width)) => write!(
                self.body,
                r#"<rect x="{x}" y="{y}" width="{width}" height="{height}" fill="{fill}" stroke="{color}" stroke-width="{stroke_width}"/>"#
            ),
            None => write!(
                self.body,
                r#"<rect x="{x}" y="{y}" width="{width}" height="{height}" fill="{fill}" stroke="none"/>"#
            ),
        }
        .expect("writing to a String cannot fail");
    }

    /// Appends a square-capped line segment.
    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, stroke: &str, width: f32) {
        write!(
            self.body,
            r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{stroke}" stroke-width="{width}" stroke-linecap="square"/>"#
        )
        .expect("writing to a String cannot fail");
    }

    /// Appends a glyph centered on `x`, with its baseline at `y`.
    pub fn glyph(&mut self, x: f32, y: f32, content: char, style: &GlyphStyle<'_>) {
        write!(
            self.body,
            r#"<text x="{x}" y="{y}" font-family="{family}" font-size="{size}" font-weight="{weight}" text-anchor="middle" fill="{fill}">{content}</text>"#,
            family = style.family,
            size = style.size,
            weight = style.weight,
            fill = style.fill,
        )
        .expect("writing to a String cannot fail");
    }

    /// Appends an unfilled ring.
    pub fn ring(&mut self, cx: f32, cy: f32, r: f32, stroke: &str, width: f32, opacity: f32) {
        write!(
            self.body,
            r#"<circle cx="{cx}" cy="{cy}" r="{r}" stroke="{stroke}" stroke-width="{width}" fill="none" opacity="{opacity}"/>"#
        )
        .expect("writing to a String cannot fail");
    }

    /// Closes the document and returns the SVG text.
    #[must_use]
    pub fn finish(mut self) -> String {
        self.body.push_str("</svg>");
        self.body
    }
}
