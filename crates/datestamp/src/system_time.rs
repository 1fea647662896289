// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::time::{Duration, SystemTime};

use crate::{DateTime, Error};

const NANOS_PER_TENTH: u32 = 100_000_000;

/// Converts a system time into a UTC [`DateTime`].
///
/// Whole seconds become the date and time fields. Tenths of a second become the second
/// fraction, which is only present when nonzero. Finer precision is truncated.
///
/// # Errors
///
/// Returns an error if the system time falls outside of the years `0000..=9999`.
///
/// ```
/// use std::time::{Duration, SystemTime};
///
/// use datestamp::DateTime;
///
/// let time = DateTime::try_from(SystemTime::UNIX_EPOCH + Duration::from_millis(3_600_250))?;
/// assert_eq!(time.to_string(), "1970-01-01T01:00:00.2Z");
/// # Ok::<(), datestamp::Error>(())
/// ```
impl TryFrom<SystemTime> for DateTime {
    type Error = Error;

    fn try_from(value: SystemTime) -> Result<Self, Self::Error> {
        let (seconds, nanos) = match value.duration_since(SystemTime::UNIX_EPOCH) {
            Ok(after) => (to_seconds(after.as_secs())?, after.subsec_nanos()),
            Err(error) => {
                let before = error.duration();
                let seconds = -to_seconds(before.as_secs())?;
                match before.subsec_nanos() {
                    0 => (seconds, 0),
                    nanos => (seconds - 1, 1_000_000_000 - nanos),
                }
            }
        };

        let mut date_time = Self::from_epoch(seconds)?;
        let tenths = nanos / NANOS_PER_TENTH;
        if tenths != 0 {
            // At most 9 since `nanos` is below one second.
            date_time.set_second_fraction(u8::try_from(tenths).map_err(|_| Error::unrepresentable(seconds))?)?;
        }

        Ok(date_time)
    }
}

/// Converts a [`DateTime`] into a system time.
///
/// Absent fields count as their minimum, as in [`DateTime::to_epoch`], and the second
/// fraction adds its tenths of a second.
///
/// # Errors
///
/// Returns an error if the platform cannot represent the instant.
impl TryFrom<DateTime> for SystemTime {
    type Error = Error;

    fn try_from(value: DateTime) -> Result<Self, Self::Error> {
        let seconds = value.to_epoch();
        let fraction = Duration::from_nanos(u64::from(value.second_fraction().unwrap_or(0)) * u64::from(NANOS_PER_TENTH));
        let whole = Duration::from_secs(seconds.unsigned_abs());

        let time = if seconds >= 0 {
            Self::UNIX_EPOCH.checked_add(whole)
        } else {
            Self::UNIX_EPOCH.checked_sub(whole)
        };

        time.and_then(|time| time.checked_add(fraction))
            .ok_or_else(|| Error::unrepresentable(seconds))
    }
}

fn to_seconds(seconds: u64) -> Result<i64, Error> {
    i64::try_from(seconds).map_err(|_| Error::unrepresentable(i64::MAX))
}
