//! Property tests for digit-sum reduction.

use ank_math::{ReductionPolicy, digit_sum, is_master, reduce, reduction_steps};
use proptest::prelude::*;

proptest! {
    #[test]
    fn preserve_is_idempotent(n in 1u32..) {
        let once = reduce(n, ReductionPolicy::PreserveMasters).unwrap();
        let twice = reduce(u32::from(once), ReductionPolicy::PreserveMasters).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn always_reduce_is_idempotent(n in 1u32..) {
        let once = reduce(n, ReductionPolicy::AlwaysReduce).unwrap();
        let twice = reduce(u32::from(once), ReductionPolicy::AlwaysReduce).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn always_reduce_lands_on_single_digit(n in 1u32..) {
        let r = reduce(n, ReductionPolicy::AlwaysReduce).unwrap();
        prop_assert!((1..=9).contains(&r), "{} reduced to {}", n, r);
    }

    #[test]
    fn always_reduce_takes_at_most_three_passes(n in 1u32..) {
        let steps = reduction_steps(n, ReductionPolicy::AlwaysReduce).unwrap();
        // steps includes the starting value
        prop_assert!(steps.len() <= 4, "{:?}", steps);
    }

    #[test]
    fn preserve_lands_in_allowed_set(n in 1u32..) {
        let r = reduce(n, ReductionPolicy::PreserveMasters).unwrap();
        prop_assert!((1..=9).contains(&r) || r == 11 || r == 22, "{} reduced to {}", n, r);
    }

    #[test]
    fn policies_agree_modulo_nine(n in 1u32..) {
        // Digit sums preserve the residue mod 9, and 11/22 reduce to 2/4.
        let p = u32::from(reduce(n, ReductionPolicy::PreserveMasters).unwrap());
        let a = u32::from(reduce(n, ReductionPolicy::AlwaysReduce).unwrap());
        let p_single = if is_master(p) { digit_sum(p) } else { p };
        prop_assert_eq!(p_single, a);
    }

    #[test]
    fn policies_diverge_only_on_master_paths(n in 1u32..) {
        let preserve = reduction_steps(n, ReductionPolicy::PreserveMasters).unwrap();
        let always = reduction_steps(n, ReductionPolicy::AlwaysReduce).unwrap();
        if preserve.iter().any(|&v| is_master(v)) {
            prop_assert!(is_master(*preserve.last().unwrap()));
        } else {
            prop_assert_eq!(preserve, always);
        }
    }
}
