//! Error types for numerology derivations.

pub use ank_math::DomainError;

/// Which group of a `DD.MM.YYYY` string an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateGroup {
    Day,
    Month,
    Year,
}

impl DateGroup {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

impl std::fmt::Display for DateGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Malformed or out-of-range caller input. Always a client-side problem.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The string did not split on `.` into exactly three groups.
    #[error("expected DD.MM.YYYY, got {input:?}")]
    Shape { input: String },

    /// A group was empty or contained something other than ASCII digits.
    #[error("{group} is not numeric: {text:?}")]
    NonNumeric { group: DateGroup, text: String },

    /// A group had the wrong number of digits.
    #[error("{group} has {len} digits, expected {expected}")]
    GroupLength {
        group: DateGroup,
        len: usize,
        expected: &'static str,
    },

    /// A numeric group was outside its allowed range.
    #[error("{group} {value} out of range")]
    OutOfRange { group: DateGroup, value: u32 },

    /// Day and month are individually in range but do not form a date.
    #[error("{day:02}.{month:02}.{year:04} is not a calendar date")]
    NotACalendarDate { day: u32, month: u32, year: u32 },

    /// A name contained no letters to score.
    #[error("name contains no letters")]
    EmptyName,
}

/// Errors from the numerology engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum NumerologyError {
    /// Bad caller input.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    /// A precondition of the engine was violated.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),
}

impl NumerologyError {
    /// True when the failure is the caller's input rather than misuse of
    /// the engine's contract.
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}
