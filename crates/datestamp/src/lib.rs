// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(
    test,
    allow(
        clippy::arithmetic_side_effects,
        clippy::unwrap_used,
        reason = "allow these lints in tests to improve the readability of the tests"
    )
)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! RFC 3339 date-time values in which every field is optional.
//!
//! This crate reads and writes the timestamps found in configuration and protocol formats
//! such as TOML, without pulling in a calendar or locale library.
//!
//! # Quick Start
//!
//! ```
//! use datestamp::DateTime;
//!
//! let time: DateTime = "2017-09-08T01:02:03+01:30".parse()?;
//! assert_eq!(time.year(), Some(2017));
//! assert_eq!(time.offset(), Some((1, 30)));
//! assert_eq!(time.to_string(), "2017-09-08T01:02:03+01:30");
//!
//! // Convert to seconds since the Unix epoch and back, normalized to UTC.
//! let utc = DateTime::from_epoch(time.to_epoch())?;
//! assert_eq!(utc.to_string(), "2017-09-07T23:32:03Z");
//! assert_eq!(utc, time);
//!
//! # Ok::<(), datestamp::Error>(())
//! ```
//!
//! # Overview
//!
//! - [`DateTime`] - A date and time with optional fields and a UTC offset. Tracks which
//!   fields are present, so an explicit zero is distinguishable from an absent field.
//! - [`FieldSet`] and [`Field`] - The set of present fields.
//! - [`calendar`] - Leap years and month lengths of the proleptic Gregorian calendar.
//! - [`fmt`] - Parsing and formatting of RFC 3339 text, including relaxed [`fmt::ParseOptions`].
//! - [`Error`] - Represents an error that can occur when validating, converting or parsing.
//!   Use [`Error::kind`] to find out what went wrong.
//!
//! # Linear time
//!
//! Every `DateTime` maps to a linear count of seconds:
//!
//! - [`DateTime::to_number`] and [`DateTime::from_number`] count from `0001-01-01T00:00:00Z`.
//!   Year 0 maps to the negative range down to [`DateTime::MIN_NUMBER`].
//! - [`DateTime::to_epoch`] and [`DateTime::from_epoch`] count from the Unix epoch,
//!   [`EPOCH_OFFSET`] seconds later.
//!
//! Equality, ordering and hashing of `DateTime` values are defined by this count, so two values
//! that denote the same instant are equal regardless of their offsets or present fields.
//!
//! # Limitations
//!
//! - Only fixed numeric UTC offsets, no time zone database.
//! - Years `0000..=9999` of the proleptic Gregorian calendar.
//! - Seconds may be 60, but leap seconds are not otherwise accounted for.
//! - A single fractional digit, tenths of a second.
//!
//! # Features
//!
//! - **`serde`** - Adds serialization and deserialization support via [serde](https://serde.rs/).
//!   Values are serialized as RFC 3339 strings.
//! - **`logs`** - Emits [tracing](https://docs.rs/tracing) events at `DEBUG` level when input is
//!   rejected.

pub mod calendar;
mod date_time;
mod error;
mod field;
pub mod fmt;
mod linear;
mod system_time;

#[cfg(test)]
mod test_util;

pub use date_time::DateTime;
pub use error::{Error, ErrorKind, Expected, Result};
pub use field::{Field, FieldSet};
pub use linear::{EPOCH_OFFSET, YEAR_ZERO_SECONDS};
