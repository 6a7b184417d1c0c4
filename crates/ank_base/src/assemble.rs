//! Assembly of the full personal-numbers result.

use serde::Serialize;

use crate::date::BirthDate;
use crate::error::NumerologyError;
use crate::field::{ALL_FIELDS, NumberField};
use crate::personal;
use crate::strength::{PlanetaryStrength, planetary_strength};

/// All personal numbers for one birth date.
///
/// Serializes to an object with the seven numeric keys plus a nested
/// `planetary_strength` map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonalNumbersResult {
    pub soul_number: u8,
    pub mind_number: u8,
    pub destiny_number: u8,
    pub helping_mind_number: u8,
    pub wisdom_number: u8,
    pub ruling_number: u8,
    /// Monday = 1 .. Sunday = 7.
    pub birth_weekday: u8,
    pub planetary_strength: PlanetaryStrength,
}

impl PersonalNumbersResult {
    /// Value of one reduced field.
    pub fn get(&self, field: NumberField) -> u8 {
        match field {
            NumberField::Soul => self.soul_number,
            NumberField::Mind => self.mind_number,
            NumberField::Destiny => self.destiny_number,
            NumberField::HelpingMind => self.helping_mind_number,
            NumberField::Wisdom => self.wisdom_number,
            NumberField::Ruling => self.ruling_number,
        }
    }

    /// (field, value) for every reduced field in output order.
    pub fn fields(&self) -> impl Iterator<Item = (NumberField, u8)> + '_ {
        ALL_FIELDS.iter().map(|&f| (f, self.get(f)))
    }
}

/// Compute every personal number for `date`.
pub fn assemble(date: &BirthDate) -> Result<PersonalNumbersResult, NumerologyError> {
    let result = assemble_in_order(date, &ALL_FIELDS)?;
    tracing::debug!(
        birth_date = %date,
        destiny = result.destiny_number,
        ruling = result.ruling_number,
        "assembled personal numbers"
    );
    Ok(result)
}

/// Parse a `DD.MM.YYYY` string and assemble its personal numbers.
pub fn personal_numbers(input: &str) -> Result<PersonalNumbersResult, NumerologyError> {
    let date = BirthDate::parse(input)?;
    assemble(&date)
}

/// Each field writes only its own slot, so any permutation of
/// `ALL_FIELDS` yields the same result.
fn assemble_in_order(
    date: &BirthDate,
    order: &[NumberField; 6],
) -> Result<PersonalNumbersResult, NumerologyError> {
    let mut values = [0u8; 6];
    for &field in order {
        values[field.index()] = personal::compute(field, date)?;
    }
    debug_assert!(values.iter().all(|&v| v != 0), "order must cover every field");

    Ok(PersonalNumbersResult {
        soul_number: values[NumberField::Soul.index()],
        mind_number: values[NumberField::Mind.index()],
        destiny_number: values[NumberField::Destiny.index()],
        helping_mind_number: values[NumberField::HelpingMind.index()],
        wisdom_number: values[NumberField::Wisdom.index()],
        ruling_number: values[NumberField::Ruling.index()],
        birth_weekday: personal::birth_weekday(date),
        planetary_strength: planetary_strength(date)?,
    })
}
