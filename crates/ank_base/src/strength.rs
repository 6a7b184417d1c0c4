//! Planetary strength from the birth-date digit grid.
//!
//! The grid holds the eight digits of `DDMMYYYY` (zeros carry no graha
//! and are dropped), the driver digit (day of month reduced to one digit)
//! and the conductor digit (destiny number). A graha's strength is the
//! number of times its digit appears in the grid.
//!
//! The driver digit is the day-of-month digit in reduced form, so a day
//! such as 29 contributes its own digits 2 and 9 plus the driver 2.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::date::BirthDate;
use crate::error::NumerologyError;
use crate::graha::{ALL_GRAHAS, Graha};
use crate::personal::{destiny_number, driver_number};

/// Strength score per graha, in traditional order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PlanetaryStrength {
    scores: [u8; 9],
}

impl PlanetaryStrength {
    /// Tally digits into grahas. Digits outside 1..=9 are ignored and a
    /// score saturates at `u8::MAX`.
    pub fn from_digits<I: IntoIterator<Item = u8>>(digits: I) -> Self {
        let mut scores = [0u8; 9];
        for graha in digits.into_iter().filter_map(Graha::from_digit) {
            let slot = &mut scores[graha.index() as usize];
            *slot = slot.saturating_add(1);
        }
        Self { scores }
    }

    /// Score of one graha.
    pub fn get(&self, graha: Graha) -> u8 {
        self.scores[graha.index() as usize]
    }

    /// (graha, score) for all nine grahas in traditional order.
    pub fn iter(&self) -> impl Iterator<Item = (Graha, u8)> + '_ {
        ALL_GRAHAS.iter().map(|&g| (g, self.get(g)))
    }

    /// Sum of all scores.
    pub fn total(&self) -> u32 {
        self.scores.iter().map(|&s| u32::from(s)).sum()
    }

    /// Highest-scoring graha; ties go to the earlier graha. None when
    /// every score is zero.
    pub fn dominant(&self) -> Option<Graha> {
        let mut best: Option<(Graha, u8)> = None;
        for (graha, score) in self.iter() {
            if score > best.map_or(0, |(_, s)| s) {
                best = Some((graha, score));
            }
        }
        best.map(|(g, _)| g)
    }

    /// Grahas whose digit never appears.
    pub fn missing(&self) -> Vec<Graha> {
        self.iter()
            .filter(|&(_, score)| score == 0)
            .map(|(g, _)| g)
            .collect()
    }
}

impl Serialize for PlanetaryStrength {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ALL_GRAHAS.len()))?;
        for (graha, score) in self.iter() {
            map.serialize_entry(graha.english_name(), &score)?;
        }
        map.end()
    }
}

/// Digits that make up the grid for `date`.
pub fn grid_digits(date: &BirthDate) -> Result<Vec<u8>, NumerologyError> {
    let mut digits: Vec<u8> = date.digits().into_iter().filter(|&d| d != 0).collect();
    digits.push(driver_number(date)?);
    digits.push(destiny_number(date)?);
    Ok(digits)
}

/// Planetary strength for a birth date.
pub fn planetary_strength(date: &BirthDate) -> Result<PlanetaryStrength, NumerologyError> {
    Ok(PlanetaryStrength::from_digits(grid_digits(date)?))
}
