//! Name number from the Chaldean letter table.
//!
//! Letters are scored 1..=8 (9 is never assigned to a letter in the
//! Chaldean system), summed, and reduced with master numbers preserved.

use ank_math::{ReductionPolicy, reduce};

use crate::error::{NumerologyError, ParseError};

/// Chaldean value of each letter, A..=Z.
const CHALDEAN: [u8; 26] = [
    1, 2, 3, 4, 5, 8, 3, 5, 1, // A-I
    1, 2, 3, 4, 5, 7, 8, 1, 2, // J-R
    3, 4, 6, 6, 6, 5, 1, 7, // S-Z
];

/// Chaldean value of an ASCII letter, case-insensitive.
pub fn letter_value(c: char) -> Option<u8> {
    if c.is_ascii_alphabetic() {
        Some(CHALDEAN[(c.to_ascii_uppercase() as u8 - b'A') as usize])
    } else {
        None
    }
}

/// Sum of letter values. Spaces, punctuation, and non-ASCII are skipped.
pub fn name_sum(name: &str) -> u32 {
    name.chars().filter_map(letter_value).map(u32::from).sum()
}

/// Name number of a full name, 1..=9, 11, or 22.
pub fn name_number(name: &str) -> Result<u8, NumerologyError> {
    let sum = name_sum(name);
    if sum == 0 {
        return Err(ParseError::EmptyName.into());
    }
    Ok(reduce(sum, ReductionPolicy::PreserveMasters)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_spot_checks() {
        assert_eq!(letter_value('A'), Some(1));
        assert_eq!(letter_value('f'), Some(8));
        assert_eq!(letter_value('O'), Some(7));
        assert_eq!(letter_value('z'), Some(7));
        assert_eq!(letter_value(' '), None);
        assert_eq!(letter_value('é'), None);
    }

    #[test]
    fn no_letter_scores_nine() {
        assert!(CHALDEAN.iter().all(|&v| (1..=8).contains(&v)));
    }

    #[test]
    fn case_and_spacing_ignored() {
        assert_eq!(name_sum("Ravi Kumar"), name_sum("RAVIKUMAR"));
    }

    #[test]
    fn known_name() {
        // R2 A1 V6 I1 = 10 ; K2 U6 M4 A1 R2 = 15 ; total 25 -> 7
        assert_eq!(name_sum("Ravi Kumar"), 25);
        assert_eq!(name_number("Ravi Kumar").unwrap(), 7);
    }

    #[test]
    fn master_name_preserved() {
        // F8 + C3 = 11
        assert_eq!(name_number("fc").unwrap(), 11);
        // P8 O7 P8 = 23 -> 5
        assert_eq!(name_number("pop").unwrap(), 5);
    }

    #[test]
    fn empty_name_is_parse_error() {
        assert_eq!(
            name_number(" - "),
            Err(NumerologyError::Parse(ParseError::EmptyName))
        );
    }
}
