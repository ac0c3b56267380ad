//! Small value types shared by the qcid crates.

use std::fmt;
use std::str::FromStr;

/// Errors that can occur when parsing a sex code.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SexError {
    /// The character is not one of `m`, `M`, `f`, `F`.
    #[error("unknown sex code '{0}' (expected M or F)")]
    UnknownCode(char),
    /// The input text was not exactly one character long.
    #[error("sex code must be a single character, got '{0}'")]
    NotSingleChar(String),
}

/// Sex as recorded on a RAMQ card.
///
/// Only the two codes used by the RAMQ numbering scheme are accepted. The code is
/// case-insensitive on input and always rendered in uppercase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Amount added to the birth month inside a RAMQ number for women.
    pub const FEMALE_MONTH_OFFSET: u8 = 50;

    /// Returns the uppercase letter for this sex.
    pub fn code(self) -> char {
        match self {
            Sex::Male => 'M',
            Sex::Female => 'F',
        }
    }

    /// Returns the value added to the birth month when encoding a RAMQ number.
    pub fn month_offset(self) -> u8 {
        match self {
            Sex::Male => 0,
            Sex::Female => Self::FEMALE_MONTH_OFFSET,
        }
    }
}

impl TryFrom<char> for Sex {
    type Error = SexError;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        match code {
            'm' | 'M' => Ok(Sex::Male),
            'f' | 'F' => Ok(Sex::Female),
            other => Err(SexError::UnknownCode(other)),
        }
    }
}

impl FromStr for Sex {
    type Err = SexError;

    /// Parses a one-character sex code. Surrounding whitespace is not trimmed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(code), None) => Sex::try_from(code),
            _ => Err(SexError::NotSingleChar(s.to_owned())),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
