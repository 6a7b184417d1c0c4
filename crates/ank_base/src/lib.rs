//! Birth-date numerology built on the `ank_math` reduction primitives.
//!
//! This crate provides:
//! - `DD.MM.YYYY` parsing into a validated [`BirthDate`]
//! - The six reduced personal numbers and their fixed reduction policies
//! - Birth weekday (numeric and Vedic vaar)
//! - Planetary strength from the birth-date digit grid
//! - Chaldean name numbers
//!
//! Every function is pure and safe to call from any number of threads.

pub mod assemble;
pub mod date;
pub mod error;
pub mod field;
pub mod graha;
pub mod name;
pub mod personal;
pub mod strength;
pub mod vaar;

pub use ank_math::{ReductionPolicy, reduce};
pub use assemble::{PersonalNumbersResult, assemble, personal_numbers};
pub use date::BirthDate;
pub use error::{DateGroup, DomainError, NumerologyError, ParseError};
pub use field::{ALL_FIELDS, FIELD_POLICIES, NumberField};
pub use graha::{ALL_GRAHAS, Graha};
pub use name::{letter_value, name_number, name_sum};
pub use personal::{
    birth_weekday, compute, destiny_number, driver_number, helping_mind_number, mind_number,
    raw_sum, ruling_number, soul_number, vaar, wisdom_number,
};
pub use strength::{PlanetaryStrength, grid_digits, planetary_strength};
pub use vaar::{ALL_VAARS, Vaar, vaar_lord};
