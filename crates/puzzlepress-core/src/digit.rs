//! Sudoku digit representation.

use std::fmt::{self, Display};

/// A sudoku digit in the range 1-9.
///
/// Board cells hold `Option<Digit>`, so "blank" is expressed in the type
/// system rather than as a sentinel value.
///
/// # Examples
///
/// ```
/// use puzzlepress_core::Digit;
///
/// let digit = Digit::from_value(7);
/// assert_eq!(digit, Some(Digit::D7));
/// assert_eq!(Digit::D7.value(), 7);
///
/// // Out-of-range values are rejected, not clamped
/// assert_eq!(Digit::from_value(0), None);
/// assert_eq!(Digit::from_value(10), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

impl Digit {
    /// All nine digits in ascending order.
    ///
    /// This is the candidate pool the board synthesizer shuffles at each
    /// empty cell.
    pub const ALL: [Self; 9] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from a numeric value, returning `None` outside 1-9.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::D1),
            2 => Some(Self::D2),
            3 => Some(Self::D3),
            4 => Some(Self::D4),
            5 => Some(Self::D5),
            6 => Some(Self::D6),
            7 => Some(Self::D7),
            8 => Some(Self::D8),
            9 => Some(Self::D9),
            _ => None,
        }
    }

    /// Returns the numeric value of this digit (1-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_round_trip() {
        for digit in Digit::ALL {
            assert_eq!(Digit::from_value(digit.value()), Some(digit));
        }
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        assert_eq!(Digit::from_value(0), None);
        assert_eq!(Digit::from_value(10), None);
        assert_eq!(Digit::from_value(u8::MAX), None);
    }

    #[test]
    fn test_all_is_ordered() {
        assert_eq!(Digit::ALL.len(), 9);
        for (i, digit) in (1..).zip(Digit::ALL) {
            assert_eq!(digit.value(), i);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Digit::D1.to_string(), "1");
        assert_eq!(Digit::D9.to_string(), "9");
    }
}
