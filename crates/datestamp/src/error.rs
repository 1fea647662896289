// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::{self, Display, Formatter};

use crate::Field;

/// The result type for fallible operations that use the [`Error`] type of this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// An error that can occur when building, converting or parsing a [`DateTime`][crate::DateTime].
///
/// The error is opaque, use [`Error::kind`] to find out what went wrong:
///
/// * A field value outside of its domain.
/// * A UTC offset whose minutes contradict the sign carried by the hours.
/// * Malformed RFC 3339 text.
/// * A linear time count that does not fit into years `0000..=9999`.
///
/// # Examples
///
/// ```
/// use datestamp::{DateTime, ErrorKind, Field};
///
/// let err = DateTime::new().set_month(13).unwrap_err();
/// assert!(matches!(err.kind(), ErrorKind::OutOfRange { field: Field::Month, .. }));
/// assert_eq!(err.to_string(), "month 13 is not in the required range of 1..=12");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(transparent)]
pub struct Error(#[from] ErrorKind);

/// The reason behind an [`Error`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A field was given a value outside of its inclusive domain.
    #[error("{field} {value} is not in the required range of {min}..={max}")]
    OutOfRange {
        /// The field being set.
        field: Field,
        /// The rejected value.
        value: i64,
        /// The smallest accepted value.
        min: i64,
        /// The largest accepted value.
        max: i64,
    },

    /// A UTC offset with nonzero hours was given negative minutes.
    ///
    /// The sign of an offset is carried by the hours unless the hours are zero.
    #[error("offset {hours} hours {minutes} minutes has a negative minute part while the hour part is nonzero")]
    InvalidOffset {
        /// The rejected hour part.
        hours: i8,
        /// The rejected minute part.
        minutes: i8,
    },

    /// The input text does not follow the RFC 3339 grammar.
    #[error("failed to parse date-time at position {position}: expected {expected}")]
    Parse {
        /// Byte index of the offending character, or the input length at end of input.
        position: usize,
        /// What the grammar required at `position`.
        expected: Expected,
    },

    /// A linear time count falls outside of the years `0000..=9999`.
    #[error("{seconds} seconds cannot be represented as a date between the years 0000 and 9999")]
    Unrepresentable {
        /// The rejected count of seconds.
        seconds: i64,
    },
}

/// The token a parser expected when it gave up.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Expected {
    /// An ASCII decimal digit.
    Digit,
    /// The given literal character.
    Char(char),
    /// A time offset, `Z` or a sign followed by `HH:MM`.
    Offset,
    /// The end of the input.
    End,
}

impl Display for Expected {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit => f.write_str("a digit"),
            Self::Char(c) => write!(f, "'{c}'"),
            Self::Offset => f.write_str("a time offset"),
            Self::End => f.write_str("end of input"),
        }
    }
}

impl Error {
    pub(crate) const fn from_kind(kind: ErrorKind) -> Self {
        Self(kind)
    }

    pub(crate) fn out_of_range(field: Field, value: impl Into<i64>, min: impl Into<i64>, max: impl Into<i64>) -> Self {
        Self::from_kind(ErrorKind::OutOfRange {
            field,
            value: value.into(),
            min: min.into(),
            max: max.into(),
        })
    }

    pub(crate) const fn parse(position: usize, expected: Expected) -> Self {
        Self::from_kind(ErrorKind::Parse { position, expected })
    }

    pub(crate) const fn unrepresentable(seconds: i64) -> Self {
        Self::from_kind(ErrorKind::Unrepresentable { seconds })
    }

    /// Returns the reason behind this error.
    #[must_use]
    pub const fn kind(&self) -> &ErrorKind {
        &self.0
    }
}
