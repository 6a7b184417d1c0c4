//! Vaar (Vedic weekday) and its ruling graha.

use chrono::Weekday;

use crate::graha::Graha;

/// The 7 Vedic weekdays, Monday first to match the numeric weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vaar {
    Somvaar,
    Mangalvaar,
    Budhvaar,
    Guruvaar,
    Shukravaar,
    Shanivaar,
    Ravivaar,
}

/// All 7 vaars in numeric order (Somvaar = 1).
pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Somvaar,
    Vaar::Mangalvaar,
    Vaar::Budhvaar,
    Vaar::Guruvaar,
    Vaar::Shukravaar,
    Vaar::Shanivaar,
    Vaar::Ravivaar,
];

impl Vaar {
    pub const fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => Self::Somvaar,
            Weekday::Tue => Self::Mangalvaar,
            Weekday::Wed => Self::Budhvaar,
            Weekday::Thu => Self::Guruvaar,
            Weekday::Fri => Self::Shukravaar,
            Weekday::Sat => Self::Shanivaar,
            Weekday::Sun => Self::Ravivaar,
        }
    }

    /// Monday = 1 .. Sunday = 7.
    pub const fn number(self) -> u8 {
        match self {
            Self::Somvaar => 1,
            Self::Mangalvaar => 2,
            Self::Budhvaar => 3,
            Self::Guruvaar => 4,
            Self::Shukravaar => 5,
            Self::Shanivaar => 6,
            Self::Ravivaar => 7,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Somvaar => "Somvaar",
            Self::Mangalvaar => "Mangalvaar",
            Self::Budhvaar => "Budhvaar",
            Self::Guruvaar => "Guruvaar",
            Self::Shukravaar => "Shukravaar",
            Self::Shanivaar => "Shanivaar",
            Self::Ravivaar => "Ravivaar",
        }
    }
}

/// Weekday lord: maps Vaar to Graha.
pub const fn vaar_lord(vaar: Vaar) -> Graha {
    match vaar {
        Vaar::Ravivaar => Graha::Surya,
        Vaar::Somvaar => Graha::Chandra,
        Vaar::Mangalvaar => Graha::Mangal,
        Vaar::Budhvaar => Graha::Buddh,
        Vaar::Guruvaar => Graha::Guru,
        Vaar::Shukravaar => Graha::Shukra,
        Vaar::Shanivaar => Graha::Shani,
    }
}
