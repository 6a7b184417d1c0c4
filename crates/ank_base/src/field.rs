//! The reduced personal-number fields and their fixed reduction policies.

use ank_math::ReductionPolicy;

/// A personal number produced by digit-sum reduction.
///
/// `birth_weekday` is not listed: it is a calendar lookup, not a reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberField {
    Soul,
    Mind,
    Destiny,
    HelpingMind,
    Wisdom,
    Ruling,
}

/// Field → policy. Destiny is the only field that reduces through
/// master numbers; it feeds single-digit categorical lookups.
pub const FIELD_POLICIES: [(NumberField, ReductionPolicy); 6] = [
    (NumberField::Soul, ReductionPolicy::PreserveMasters),
    (NumberField::Mind, ReductionPolicy::PreserveMasters),
    (NumberField::Destiny, ReductionPolicy::AlwaysReduce),
    (NumberField::HelpingMind, ReductionPolicy::PreserveMasters),
    (NumberField::Wisdom, ReductionPolicy::PreserveMasters),
    (NumberField::Ruling, ReductionPolicy::PreserveMasters),
];

/// All reduced fields in output order.
pub const ALL_FIELDS: [NumberField; 6] = [
    NumberField::Soul,
    NumberField::Mind,
    NumberField::Destiny,
    NumberField::HelpingMind,
    NumberField::Wisdom,
    NumberField::Ruling,
];

impl NumberField {
    /// The policy this field is always reduced with.
    pub const fn policy(self) -> ReductionPolicy {
        FIELD_POLICIES[self.index()].1
    }

    /// 0-based index into ALL_FIELDS and FIELD_POLICIES.
    pub const fn index(self) -> usize {
        match self {
            Self::Soul => 0,
            Self::Mind => 1,
            Self::Destiny => 2,
            Self::HelpingMind => 3,
            Self::Wisdom => 4,
            Self::Ruling => 5,
        }
    }

    /// Key used in serialized results.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Soul => "soul_number",
            Self::Mind => "mind_number",
            Self::Destiny => "destiny_number",
            Self::HelpingMind => "helping_mind_number",
            Self::Wisdom => "wisdom_number",
            Self::Ruling => "ruling_number",
        }
    }
}
