//! Pure reduction primitives for the ank numerology engine.
//!
//! This crate provides:
//! - Base-10 digit sums
//! - The two reduction policies (master-preserving and full reduction)
//! - The [`DomainError`] raised on contract violations
//!
//! Everything here is a deterministic function of its input with no I/O.

pub mod error;
pub mod reduce;

pub use error::DomainError;
pub use reduce::{
    ALL_POLICIES, MASTER_NUMBERS, ReductionPolicy, digit_sum, digit_sum_of_digits, is_master,
    reduce, reduction_steps,
};
