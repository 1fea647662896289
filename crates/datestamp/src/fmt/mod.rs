// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Parsing and formatting of [`DateTime`][crate::DateTime] values as RFC 3339 text.
//!
//! The supported grammar is a fixed-width subset of [RFC 3339](https://datatracker.ietf.org/doc/html/rfc3339):
//!
//! ```text
//! full-date    = 4DIGIT "-" 2DIGIT "-" 2DIGIT
//! partial-time = 2DIGIT ":" 2DIGIT ":" 2DIGIT ["." 1DIGIT]
//! time-offset  = "Z" / ("+" / "-") 2DIGIT ":" 2DIGIT
//! date-time    = full-date "T" partial-time [time-offset]
//! ```
//!
//! A lone `full-date` or `partial-time` is accepted as well, as used by TOML for local dates
//! and local times. Only the fields found in the input are present in the result.
//!
//! Parsing is strict by default: upper-case `T` and `Z` only, no whitespace and exactly one
//! fractional digit. [`ParseOptions`] relaxes these rules.
//!
//! # Examples
//!
//! ```
//! use datestamp::DateTime;
//! use datestamp::fmt::ParseOptions;
//!
//! let time: DateTime = "2017-09-08T01:02:03.4+01:30".parse()?;
//! assert_eq!(time.to_fulldate_string(), "2017-09-08");
//! assert_eq!(time.to_fulltime_string(), "01:02:03.4+01:30");
//!
//! let relaxed = ParseOptions::new().lowercase(true).space_separator(true);
//! let time = relaxed.parse("2017-09-08 01:02:03z")?;
//! assert_eq!(time.to_string(), "2017-09-08T01:02:03Z");
//!
//! # Ok::<(), datestamp::Error>(())
//! ```

mod parser;
mod printer;

pub use parser::ParseOptions;
