//! Error types for palette operations
//!
//! This module provides error types for color parsing and palette editing.

use std::fmt;
use std::num::ParseIntError;

/// Error type for parsing hex color strings.
///
/// Only 6-digit hex (`#RRGGBB` or `RRGGBB`) is accepted.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// Hex string has the wrong number of digits (must be 6 after stripping '#')
    InvalidLength {
        /// Number of digits found
        len: usize,
    },
    /// A character that is not a hexadecimal digit
    InvalidDigit {
        /// Character offset after the optional '#'
        position: usize,
        /// The offending character
        found: char,
    },
    /// Channel value failed to parse
    InvalidHex(ParseIntError),
}

impl From<ParseIntError> for ParseColorError {
    fn from(err: ParseIntError) -> Self {
        ParseColorError::InvalidHex(err)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength { len } => {
                write!(f, "invalid hex color length {} (expected 6 digits)", len)
            }
            ParseColorError::InvalidDigit { position, found } => {
                write!(f, "invalid hex digit {:?} at position {}", found, position)
            }
            ParseColorError::InvalidHex(err) => {
                write!(f, "invalid hex character: {}", err)
            }
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseColorError::InvalidHex(err) => Some(err),
            _ => None,
        }
    }
}

/// Error type for palette editing.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteError {
    /// Index does not address an existing palette entry
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Current palette length
        len: usize,
    },
    /// Invalid hex color string
    ParseColor(ParseColorError),
}

impl From<ParseColorError> for PaletteError {
    fn from(err: ParseColorError) -> Self {
        PaletteError::ParseColor(err)
    }
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::IndexOutOfRange { index, len } => {
                write!(
                    f,
                    "palette index {} out of range (palette has {} colors)",
                    index, len
                )
            }
            PaletteError::ParseColor(err) => {
                write!(f, "invalid color: {}", err)
            }
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaletteError::ParseColor(err) => Some(err),
            _ => None,
        }
    }
}
