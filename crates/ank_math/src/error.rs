//! Contract-violation errors for the reduction primitives.

/// A precondition of the engine's contract was violated by the caller.
///
/// None of these are transient: retrying with the same input fails again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DomainError {
    /// Digit-sum reduction is only defined for positive integers.
    #[error("digit-sum reduction requires a positive integer, got {0}")]
    NonPositive(u32),

    /// A birth date was constructed from components that are not a real
    /// calendar date.
    #[error("not a valid calendar date: day {day}, month {month}, year {year}")]
    InvalidDate { day: u32, month: u32, year: u32 },
}
