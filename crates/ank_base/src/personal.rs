//! Personal number calculators.
//!
//! Each field is one raw sum over the birth date's components, folded
//! through the policy [`NumberField::policy`] assigns to it:
//!
//! | Field        | Raw sum                                   |
//! |--------------|-------------------------------------------|
//! | soul         | day                                       |
//! | mind         | digits of day + digits of month           |
//! | destiny      | day + month + year                        |
//! | helping mind | day + month                               |
//! | wisdom       | digits of month + digits of (day + year)  |
//! | ruling       | all eight digits of `DDMMYYYY`            |

use ank_math::{ReductionPolicy, digit_sum, digit_sum_of_digits, reduce};

use crate::date::BirthDate;
use crate::error::NumerologyError;
use crate::field::NumberField;
use crate::vaar::Vaar;

/// The unreduced sum a field starts from.
pub fn raw_sum(field: NumberField, date: &BirthDate) -> u32 {
    let (day, month, year) = (date.day(), date.month(), date.year());
    match field {
        NumberField::Soul => day,
        NumberField::Mind => digit_sum(day) + digit_sum(month),
        NumberField::Destiny => day + month + year,
        NumberField::HelpingMind => day + month,
        NumberField::Wisdom => digit_sum(month) + digit_sum(day + year),
        NumberField::Ruling => digit_sum_of_digits(&date.digits()),
    }
}

/// Compute one field: its raw sum reduced with its fixed policy.
pub fn compute(field: NumberField, date: &BirthDate) -> Result<u8, NumerologyError> {
    Ok(reduce(raw_sum(field, date), field.policy())?)
}

pub fn soul_number(date: &BirthDate) -> Result<u8, NumerologyError> {
    compute(NumberField::Soul, date)
}

pub fn mind_number(date: &BirthDate) -> Result<u8, NumerologyError> {
    compute(NumberField::Mind, date)
}

/// Always a single digit 1..=9, never a master number.
pub fn destiny_number(date: &BirthDate) -> Result<u8, NumerologyError> {
    compute(NumberField::Destiny, date)
}

pub fn helping_mind_number(date: &BirthDate) -> Result<u8, NumerologyError> {
    compute(NumberField::HelpingMind, date)
}

pub fn wisdom_number(date: &BirthDate) -> Result<u8, NumerologyError> {
    compute(NumberField::Wisdom, date)
}

/// Digit sum of `DDMMYYYY`, not of day + month + year.
pub fn ruling_number(date: &BirthDate) -> Result<u8, NumerologyError> {
    compute(NumberField::Ruling, date)
}

/// Day of month reduced to one digit (the "driver"). Unlike the soul
/// number, 11 and 22 are reduced through.
pub fn driver_number(date: &BirthDate) -> Result<u8, NumerologyError> {
    Ok(reduce(date.day(), ReductionPolicy::AlwaysReduce)?)
}

/// Weekday of birth, Monday = 1 .. Sunday = 7.
pub fn birth_weekday(date: &BirthDate) -> u8 {
    vaar(date).number()
}

/// Vedic weekday of birth.
pub fn vaar(date: &BirthDate) -> Vaar {
    Vaar::from_weekday(date.weekday())
}
