// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Proleptic Gregorian calendar arithmetic.

use crate::{Error, ErrorKind, Field, Result};

const DAYS_IN_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

// Days before the first day of each month in a common year.
const DAYS_BEFORE_MONTH: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Returns `true` if `year` is a leap year in the proleptic Gregorian calendar.
///
/// ```
/// use datestamp::calendar::is_leap_year;
///
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(1900));
/// ```
#[must_use]
pub const fn is_leap_year(year: u16) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in `month` of `year`.
///
/// # Errors
///
/// Returns an error if `month` is not in `1..=12`.
pub const fn days_in_month(year: u16, month: u8) -> Result<u8> {
    match month {
        1..=12 => Ok(month_length(year, month)),
        _ => Err(invalid_month(month)),
    }
}

// Callers guarantee `month` is in `1..=12`.
pub(crate) const fn month_length(year: u16, month: u8) -> u8 {
    if month == 2 && is_leap_year(year) { 29 } else { DAYS_IN_MONTH[month as usize - 1] }
}

// Callers guarantee `month` is in `1..=12`.
pub(crate) const fn month_start(year: u16, month: u8) -> u16 {
    let days = DAYS_BEFORE_MONTH[month as usize - 1];
    if month > 2 && is_leap_year(year) { days + 1 } else { days }
}

/// Returns the number of days in `year`, either 365 or 366.
#[must_use]
pub const fn days_in_year(year: u16) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Returns the number of days in the years `0..year`.
#[must_use]
pub const fn days_before_year(year: u16) -> i64 {
    if year == 0 {
        return 0;
    }

    let previous = year as i64 - 1;
    // Year 0 is a leap year and is not covered by the division terms.
    let leap_years = previous / 4 - previous / 100 + previous / 400 + 1;
    365 * year as i64 + leap_years
}

/// Returns the number of days in the months `1..month` of `year`.
///
/// # Errors
///
/// Returns an error if `month` is not in `1..=12`.
pub const fn days_before_month(year: u16, month: u8) -> Result<u16> {
    match month {
        1..=12 => Ok(month_start(year, month)),
        _ => Err(invalid_month(month)),
    }
}

const fn invalid_month(month: u8) -> Error {
    Error::from_kind(ErrorKind::OutOfRange {
        field: Field::Month,
        value: month as i64,
        min: 1,
        max: 12,
    })
}
