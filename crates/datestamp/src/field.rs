// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::{self, Debug, Display, Formatter};

/// One of the logical fields of a [`DateTime`][crate::DateTime].
///
/// The UTC offset counts as a single field even though it carries an hour and a minute part.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Year, `0..=9999`.
    Year,
    /// Month of the year, `1..=12`.
    Month,
    /// Day of the month, `1..=31`.
    Day,
    /// Hour of the day, `0..=23`.
    Hour,
    /// Minute of the hour, `0..=59`.
    Minute,
    /// Second of the minute, `0..=60`.
    Second,
    /// Tenths of a second, `0..=9`.
    SecondFraction,
    /// UTC offset.
    Offset,
}

impl Field {
    /// All fields, most significant first.
    pub const ALL: [Self; 8] = [
        Self::Year,
        Self::Month,
        Self::Day,
        Self::Hour,
        Self::Minute,
        Self::Second,
        Self::SecondFraction,
        Self::Offset,
    ];

    /// Returns the lowercase name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
            Self::SecondFraction => "second fraction",
            Self::Offset => "offset",
        }
    }

    const fn mask(self) -> u8 {
        1 << self as u8
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The set of fields that are present in a [`DateTime`][crate::DateTime].
///
/// Presence is tracked independently of the stored values, so a field explicitly set to zero
/// is distinguishable from a field that was never set.
///
/// # Examples
///
/// ```
/// use datestamp::{Field, FieldSet};
///
/// let mut set = FieldSet::EMPTY;
/// set.insert(Field::Year);
/// set.insert(Field::Month);
///
/// assert!(set.contains(Field::Month));
/// assert!(!set.contains(Field::Day));
/// assert_eq!(set.iter().collect::<Vec<_>>(), [Field::Year, Field::Month]);
/// ```
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldSet(u8);

impl FieldSet {
    /// A set with no fields.
    pub const EMPTY: Self = Self(0);

    /// A set with every field.
    pub const ALL: Self = Self(u8::MAX);

    /// Returns `true` if `field` is in the set.
    #[must_use]
    pub const fn contains(self, field: Field) -> bool {
        self.0 & field.mask() != 0
    }

    /// Returns `true` if every field of `other` is in the set.
    #[must_use]
    pub const fn contains_all(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Adds `field` to the set.
    pub const fn insert(&mut self, field: Field) {
        self.0 |= field.mask();
    }

    /// Removes `field` from the set.
    pub const fn remove(&mut self, field: Field) {
        self.0 &= !field.mask();
    }

    /// Returns a copy of the set with `field`.
    #[must_use]
    pub const fn with(mut self, field: Field) -> Self {
        self.insert(field);
        self
    }

    /// Returns a copy of the set without `field`.
    #[must_use]
    pub const fn without(mut self, field: Field) -> Self {
        self.remove(field);
        self
    }

    /// Returns `true` if the set has no fields.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of fields in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates over the fields in the set, most significant first.
    pub fn iter(self) -> impl Iterator<Item = Field> {
        Field::ALL.into_iter().filter(move |field| self.contains(*field))
    }
}

impl FromIterator<Field> for FieldSet {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for field in iter {
            set.insert(field);
        }
        set
    }
}

impl<const N: usize> From<[Field; N]> for FieldSet {
    fn from(fields: [Field; N]) -> Self {
        fields.into_iter().collect()
    }
}

impl Debug for FieldSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
