//! Iterated digit-sum reduction with master-number policies.
//!
//! Every personal number is produced by folding a raw sum through
//! [`reduce`]. The stop condition is re-checked before every digit-sum
//! pass, so a master number reached at any depth is seen, not only one
//! present on entry.

use crate::error::DomainError;

/// Values that [`ReductionPolicy::PreserveMasters`] refuses to reduce.
///
/// 33 is deliberately absent: it reduces to 6 under both policies.
pub const MASTER_NUMBERS: [u32; 2] = [11, 22];

/// Whether master numbers halt reduction early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReductionPolicy {
    /// Stop at 1..=9, or at 11 or 22 reached at any step.
    PreserveMasters,
    /// Stop only at 1..=9; master numbers are reduced through.
    AlwaysReduce,
}

/// Both policies, for exhaustive checks.
pub const ALL_POLICIES: [ReductionPolicy; 2] =
    [ReductionPolicy::PreserveMasters, ReductionPolicy::AlwaysReduce];

impl ReductionPolicy {
    /// Stable snake_case name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::PreserveMasters => "preserve_masters",
            Self::AlwaysReduce => "always_reduce",
        }
    }

    /// True when `n` is a final value under this policy.
    pub const fn is_terminal(self, n: u32) -> bool {
        match self {
            Self::PreserveMasters => n <= 9 || is_master(n),
            Self::AlwaysReduce => n <= 9,
        }
    }
}

/// True for 11 and 22.
pub const fn is_master(n: u32) -> bool {
    n == MASTER_NUMBERS[0] || n == MASTER_NUMBERS[1]
}

/// Sum of the base-10 digits of `n`. `digit_sum(0) == 0`.
pub const fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Sum of a slice of single decimal digits.
pub fn digit_sum_of_digits(digits: &[u8]) -> u32 {
    digits.iter().map(|&d| u32::from(d)).sum()
}

/// Reduce `n` by repeated digit-summing until `policy` says stop.
///
/// Values already terminal on entry are returned unchanged, so
/// `reduce(11, PreserveMasters) == 11` and `reduce(7, _) == 7`.
///
/// # Errors
/// [`DomainError::NonPositive`] for `n == 0`.
pub fn reduce(n: u32, policy: ReductionPolicy) -> Result<u8, DomainError> {
    if n == 0 {
        return Err(DomainError::NonPositive(n));
    }
    let mut value = n;
    while !policy.is_terminal(value) {
        let next = digit_sum(value);
        tracing::trace!(from = value, to = next, policy = policy.name(), "digit-sum pass");
        value = next;
    }
    // Terminal values never exceed 22.
    Ok(value as u8)
}

/// Every value visited while reducing `n`, starting with `n` itself and
/// ending with the value [`reduce`] returns.
///
/// # Errors
/// [`DomainError::NonPositive`] for `n == 0`.
pub fn reduction_steps(n: u32, policy: ReductionPolicy) -> Result<Vec<u32>, DomainError> {
    if n == 0 {
        return Err(DomainError::NonPositive(n));
    }
    let mut steps = vec![n];
    let mut value = n;
    while !policy.is_terminal(value) {
        value = digit_sum(value);
        steps.push(value);
    }
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    use ReductionPolicy::{AlwaysReduce, PreserveMasters};

    #[test]
    fn digit_sum_basic() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(7), 7);
        assert_eq!(digit_sum(1993), 22);
        assert_eq!(digit_sum(u32::MAX), 4 + 2 + 9 + 4 + 9 + 6 + 7 + 2 + 9 + 5);
    }

    #[test]
    fn digit_sum_of_digits_matches_number() {
        assert_eq!(digit_sum_of_digits(&[1, 0, 0, 1, 1, 9, 8, 2]), 22);
        assert_eq!(digit_sum_of_digits(&[]), 0);
    }

    #[test]
    fn single_digit_unchanged_under_both() {
        for n in 1..=9 {
            assert_eq!(reduce(n, PreserveMasters).unwrap() as u32, n);
            assert_eq!(reduce(n, AlwaysReduce).unwrap() as u32, n);
        }
    }

    #[test]
    fn preserve_stops_at_intermediate_master() {
        // 1993 -> 22, must not continue to 4
        assert_eq!(reduce(1993, PreserveMasters).unwrap(), 22);
        // 38 -> 11, must not continue to 2
        assert_eq!(reduce(38, PreserveMasters).unwrap(), 11);
    }

    #[test]
    fn always_reduces_through_masters() {
        assert_eq!(reduce(1993, AlwaysReduce).unwrap(), 4);
        assert_eq!(reduce(38, AlwaysReduce).unwrap(), 2);
        assert_eq!(reduce(11, AlwaysReduce).unwrap(), 2);
        assert_eq!(reduce(22, AlwaysReduce).unwrap(), 4);
    }

    #[test]
    fn master_on_entry_is_kept() {
        assert_eq!(reduce(11, PreserveMasters).unwrap(), 11);
        assert_eq!(reduce(22, PreserveMasters).unwrap(), 22);
    }

    #[test]
    fn thirty_three_is_not_a_master() {
        assert!(!is_master(33));
        assert_eq!(reduce(33, PreserveMasters).unwrap(), 6);
        assert_eq!(reduce(33, AlwaysReduce).unwrap(), 6);
    }

    #[test]
    fn no_master_anywhere_reduces_fully() {
        // 28 -> 10 -> 1
        assert_eq!(reduce(28, PreserveMasters).unwrap(), 1);
        // 31 -> 4
        assert_eq!(reduce(31, PreserveMasters).unwrap(), 4);
    }

    #[test]
    fn zero_is_rejected() {
        assert_eq!(reduce(0, PreserveMasters), Err(DomainError::NonPositive(0)));
        assert_eq!(reduce(0, AlwaysReduce), Err(DomainError::NonPositive(0)));
        assert!(reduction_steps(0, AlwaysReduce).is_err());
    }

    #[test]
    fn steps_trace_ends_at_reduced_value() {
        assert_eq!(reduction_steps(1993, AlwaysReduce).unwrap(), vec![1993, 22, 4]);
        assert_eq!(reduction_steps(1993, PreserveMasters).unwrap(), vec![1993, 22]);
        assert_eq!(reduction_steps(5, AlwaysReduce).unwrap(), vec![5]);
    }

    #[test]
    fn policy_names() {
        assert_eq!(PreserveMasters.name(), "preserve_masters");
        assert_eq!(AlwaysReduce.name(), "always_reduce");
        assert_eq!(ALL_POLICIES.len(), 2);
    }
}
