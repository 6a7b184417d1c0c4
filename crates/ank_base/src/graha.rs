//! Vedic planet (graha) enum and the digit→graha table.
//!
//! Numerology assigns one graha to each digit 1..=9, in traditional
//! order: 1 = Surya (Sun) through 9 = Ketu.

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order. Index `i` rules digit `i + 1`.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Buddh => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// The digit (1..=9) this graha rules.
    pub const fn digit(self) -> u8 {
        self.index() + 1
    }

    /// Graha ruling a digit. Returns None outside 1..=9.
    pub const fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            1..=9 => Some(ALL_GRAHAS[(digit - 1) as usize]),
            _ => None,
        }
    }
}

impl std::fmt::Display for Graha {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.english_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_grahas_count() {
        assert_eq!(ALL_GRAHAS.len(), 9);
    }

    #[test]
    fn graha_indices_sequential() {
        for (i, g) in ALL_GRAHAS.iter().enumerate() {
            assert_eq!(g.index() as usize, i);
        }
    }

    #[test]
    fn graha_names_nonempty() {
        for g in ALL_GRAHAS {
            assert!(!g.name().is_empty());
            assert!(!g.english_name().is_empty());
        }
    }

    #[test]
    fn digit_table_ends() {
        assert_eq!(Graha::from_digit(1), Some(Graha::Surya));
        assert_eq!(Graha::from_digit(2), Some(Graha::Chandra));
        assert_eq!(Graha::from_digit(9), Some(Graha::Ketu));
    }

    #[test]
    fn digit_out_of_range() {
        assert_eq!(Graha::from_digit(0), None);
        assert_eq!(Graha::from_digit(10), None);
        assert_eq!(Graha::from_digit(255), None);
    }

    #[test]
    fn digit_round_trip() {
        for g in ALL_GRAHAS {
            assert_eq!(Graha::from_digit(g.digit()), Some(g));
        }
    }

    #[test]
    fn display_is_english() {
        assert_eq!(Graha::Guru.to_string(), "Jupiter");
    }
}
