//! Letter colors used for both per-guess feedback and keyboard shading
//!
//! The variants are declared in priority order so the derived `Ord` gives
//! `None < Grey < Yellow < Green`.

use std::fmt;

/// Feedback color for a single cell or keyboard key
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LetterColor {
    /// No information (blank cell, unshaded key, or a forfeited match)
    #[default]
    None,
    /// Letter not in the word
    Grey,
    /// Letter in the word, wrong position
    Yellow,
    /// Letter in the correct position
    Green,
}

impl LetterColor {
    /// Whether this color counts as a letter match (yellow or green)
    #[inline]
    #[must_use]
    pub const fn is_match(self) -> bool {
        matches!(self, Self::Yellow | Self::Green)
    }

    /// Emoji square for this color
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Grey => '⬛',
            Self::None => '⬜',
        }
    }

    /// Parse a single feedback symbol: `G`, `Y`, `-`/`_` (grey) or `.` (none)
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' | 'g' | '🟩' => Some(Self::Green),
            'Y' | 'y' | '🟨' => Some(Self::Yellow),
            '-' | '_' | '⬛' => Some(Self::Grey),
            '.' | '⬜' => Some(Self::None),
            _ => None,
        }
    }

    /// Single-character symbol, inverse of [`LetterColor::from_symbol`]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::Grey => '-',
            Self::None => '.',
        }
    }
}

impl fmt::Display for LetterColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Grey => "grey",
            Self::Yellow => "yellow",
            Self::Green => "green",
        };
        f.write_str(name)
    }
}
