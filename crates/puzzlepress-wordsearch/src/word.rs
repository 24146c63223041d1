//! Word normalization.

/// Normalizes a word for placement: uppercase, with every character outside
/// `A-Z` stripped.
///
/// Words arrive from theme lists and user input with arbitrary case,
/// hyphens, apostrophes, and accents; only the plain Latin letters end up
/// on the grid. A word may normalize to the empty string, in which case the
/// placer skips it.
///
/// # Examples
///
/// ```
/// use puzzlepress_wordsearch::normalize;
///
/// assert_eq!(normalize("ice-cream"), "ICECREAM");
/// assert_eq!(normalize("it's"), "ITS");
/// assert_eq!(normalize("café"), "CAF");
/// assert_eq!(normalize("42"), "");
/// ```
#[must_use]
pub fn normalize(word: &str) -> String {
    word.chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(char::is_ascii_uppercase)
        .collect()
}
