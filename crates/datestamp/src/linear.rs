// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::calendar::{days_before_year, month_length, month_start};
use crate::{DateTime, Error, Field, FieldSet, Result};

const SECONDS_PER_DAY: i64 = 86_400;

/// Seconds in year 0, which is a leap year in the proleptic Gregorian calendar.
///
/// Linear counts are relative to the start of year 1, so year 0 occupies the negative range
/// `-YEAR_ZERO_SECONDS..0`.
pub const YEAR_ZERO_SECONDS: i64 = 31_622_400;

/// Seconds between `0001-01-01T00:00:00Z` and the Unix epoch `1970-01-01T00:00:00Z`.
pub const EPOCH_OFFSET: i64 = 62_167_219_200 - YEAR_ZERO_SECONDS;

// Fields determined by decomposing a linear count.
const RESOLVED: FieldSet = FieldSet::ALL.without(Field::SecondFraction);

impl DateTime {
    /// The smallest linear count, `0000-01-01T00:00:00Z`.
    pub const MIN_NUMBER: i64 = -YEAR_ZERO_SECONDS;

    /// The largest linear count, `9999-12-31T23:59:59Z`.
    pub const MAX_NUMBER: i64 = days_before_year(10_000) * SECONDS_PER_DAY - YEAR_ZERO_SECONDS - 1;

    /// Returns the number of seconds since `0001-01-01T00:00:00Z`.
    ///
    /// Only present fields contribute to the count, so absent fields behave like their
    /// minimum. A present offset is subtracted, which makes the count the UTC equivalent of
    /// the local time. The second fraction does not contribute.
    ///
    /// ```
    /// use datestamp::DateTime;
    ///
    /// let origin: DateTime = "0001-01-01T00:00:00Z".parse()?;
    /// assert_eq!(origin.to_number(), 0);
    ///
    /// let shifted: DateTime = "0001-01-01T01:00:00+01:00".parse()?;
    /// assert_eq!(shifted.to_number(), 0);
    /// # Ok::<(), datestamp::Error>(())
    /// ```
    #[must_use]
    pub fn to_number(&self) -> i64 {
        let mut days = 0;
        if let Some(year) = self.year() {
            days += days_before_year(year);
        }
        if let Some(month) = self.month() {
            days += i64::from(month_start(self.year().unwrap_or(0), month));
        }
        if let Some(day) = self.day() {
            days += i64::from(day) - 1;
        }

        let mut seconds = days * SECONDS_PER_DAY;
        if let Some(hour) = self.hour() {
            seconds += i64::from(hour) * 3600;
        }
        if let Some(minute) = self.minute() {
            seconds += i64::from(minute) * 60;
        }
        if let Some(second) = self.second() {
            seconds += i64::from(second);
        }
        if let Some(offset) = self.offset_seconds() {
            seconds -= i64::from(offset);
        }

        seconds - YEAR_ZERO_SECONDS
    }

    /// Returns the number of seconds since the Unix epoch.
    ///
    /// ```
    /// use datestamp::DateTime;
    ///
    /// let mut epoch = DateTime::new();
    /// epoch.set_year(1970)?.set_month(1)?.set_day(1)?;
    /// assert_eq!(epoch.to_epoch(), 0);
    /// # Ok::<(), datestamp::Error>(())
    /// ```
    #[must_use]
    pub fn to_epoch(&self) -> i64 {
        self.to_number() - EPOCH_OFFSET
    }

    /// Decomposes a number of seconds since `0001-01-01T00:00:00Z` into a UTC date and time.
    ///
    /// The year, month, day, hour, minute and second of the result are always present, as is
    /// a zero offset. The second fraction is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if `seconds` is outside of
    /// [`MIN_NUMBER`][Self::MIN_NUMBER]`..=`[`MAX_NUMBER`][Self::MAX_NUMBER].
    ///
    /// ```
    /// use datestamp::DateTime;
    ///
    /// assert_eq!(DateTime::from_number(0)?.to_string(), "0001-01-01T00:00:00Z");
    /// DateTime::from_number(DateTime::MIN_NUMBER - 1).unwrap_err();
    /// # Ok::<(), datestamp::Error>(())
    /// ```
    #[expect(
        clippy::cast_possible_truncation,
        reason = "day, hour, minute and second are bounded by the month and day lengths"
    )]
    pub fn from_number(seconds: i64) -> Result<Self> {
        if !(Self::MIN_NUMBER..=Self::MAX_NUMBER).contains(&seconds) {
            return Err(unrepresentable(seconds));
        }

        let elapsed = seconds + YEAR_ZERO_SECONDS;
        let days = elapsed / SECONDS_PER_DAY;
        let remainder = elapsed % SECONDS_PER_DAY;

        // Every year has at most 366 days, so this never overshoots.
        let mut year = u16::try_from(days / 366).map_err(|_| unrepresentable(seconds))?;
        while days_before_year(year + 1) <= days {
            year += 1;
        }

        // Bounded by the length of the year, so it fits.
        let day_of_year = u16::try_from(days - days_before_year(year)).map_err(|_| unrepresentable(seconds))?;
        let mut month = 1;
        while month < 12 && month_start(year, month + 1) <= day_of_year {
            month += 1;
        }
        let day = day_of_year - month_start(year, month) + 1;
        debug_assert!(day <= u16::from(month_length(year, month)));

        // Bounded by `SECONDS_PER_DAY`.
        let hour = (remainder / 3600) as u8;
        let minute = (remainder % 3600 / 60) as u8;
        let second = (remainder % 60) as u8;

        Ok(Self::from_parts(year, month, day as u8, hour, minute, second).with_fields(RESOLVED))
    }

    /// Decomposes a number of seconds since the Unix epoch into a UTC date and time.
    ///
    /// # Errors
    ///
    /// Returns an error if the instant falls outside of the years `0000..=9999`.
    ///
    /// ```
    /// use datestamp::DateTime;
    ///
    /// assert_eq!(DateTime::from_epoch(0)?.to_string(), "1970-01-01T00:00:00Z");
    /// # Ok::<(), datestamp::Error>(())
    /// ```
    pub fn from_epoch(seconds: i64) -> Result<Self> {
        let number = seconds.checked_add(EPOCH_OFFSET).ok_or_else(|| unrepresentable(seconds))?;
        Self::from_number(number)
    }
}

fn unrepresentable(seconds: i64) -> Error {
    #[cfg(any(feature = "logs", test))]
    tracing::event!(
        name: "datestamp.linear.unrepresentable",
        tracing::Level::DEBUG,
        seconds,
    );

    Error::unrepresentable(seconds)
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use tracing_subscriber::util::SubscriberInitExt;

    use super::*;
    use crate::ErrorKind;
    use crate::test_util::LogCapture;

    fn date_time(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> DateTime {
        let mut value = DateTime::new();
        value
            .set_year(year)
            .unwrap()
            .set_month(month)
            .unwrap()
            .set_day(day)
            .unwrap()
            .set_hour(hour)
            .unwrap()
            .set_minute(minute)
            .unwrap()
            .set_second(second)
            .unwrap();
        value
    }

    #[test]
    fn constants() {
        assert_eq!(EPOCH_OFFSET, 62_135_596_800);
        assert_eq!(YEAR_ZERO_SECONDS, 366 * SECONDS_PER_DAY);
        assert_eq!(DateTime::MAX_NUMBER, 315_537_897_599);
    }

    #[test]
    fn origin_is_zero() {
        assert_eq!(date_time(1, 1, 1, 0, 0, 0).to_number(), 0);
        assert_eq!(date_time(0, 1, 1, 0, 0, 0).to_number(), DateTime::MIN_NUMBER);
        assert_eq!(date_time(9999, 12, 31, 23, 59, 59).to_number(), DateTime::MAX_NUMBER);
    }

    #[test]
    fn unix_epoch_is_zero() {
        let mut epoch = DateTime::new();
        epoch.set_year(1970).unwrap().set_month(1).unwrap().set_day(1).unwrap();

        assert_eq!(epoch.to_epoch(), 0);
    }

    #[test]
    fn empty_value_is_year_zero() {
        assert_eq!(DateTime::new().to_number(), -YEAR_ZERO_SECONDS);
    }

    #[test]
    fn absent_year_uses_year_zero_for_months() {
        let mut value = DateTime::new();
        value.set_month(3).unwrap();

        // January and February of the leap year 0.
        assert_eq!(value.to_number(), 60 * SECONDS_PER_DAY - YEAR_ZERO_SECONDS);
    }

    #[test]
    fn offset_is_subtracted() {
        let mut local = date_time(1970, 1, 1, 1, 30, 0);
        local.set_offset(1, 30).unwrap();
        assert_eq!(local.to_epoch(), 0);

        let mut west = date_time(1969, 12, 31, 22, 30, 0);
        west.set_offset(-1, 30).unwrap();
        assert_eq!(west.to_epoch(), 0);

        let mut half = date_time(1970, 1, 1, 0, 0, 0);
        half.set_offset(0, -30).unwrap();
        assert_eq!(half.to_epoch(), 1800);
    }

    #[test]
    fn from_number_marks_resolved_fields() {
        let value = DateTime::from_number(0).unwrap();

        assert_eq!(value.year(), Some(1));
        assert_eq!(value.month(), Some(1));
        assert_eq!(value.day(), Some(1));
        assert_eq!(value.hour(), Some(0));
        assert_eq!(value.minute(), Some(0));
        assert_eq!(value.second(), Some(0));
        assert_eq!(value.offset(), Some((0, 0)));
        assert_eq!(value.second_fraction(), None);
    }

    #[test]
    fn from_number_bounds() {
        let min = DateTime::from_number(DateTime::MIN_NUMBER).unwrap();
        assert_eq!((min.year(), min.month(), min.day()), (Some(0), Some(1), Some(1)));

        let max = DateTime::from_number(DateTime::MAX_NUMBER).unwrap();
        assert_eq!(max, date_time(9999, 12, 31, 23, 59, 59));
        assert_eq!(max.second(), Some(59));

        assert_eq!(
            DateTime::from_number(DateTime::MIN_NUMBER - 1).unwrap_err().kind(),
            &ErrorKind::Unrepresentable {
                seconds: DateTime::MIN_NUMBER - 1
            }
        );
        DateTime::from_number(DateTime::MAX_NUMBER + 1).unwrap_err();
        DateTime::from_number(i64::MAX).unwrap_err();
        DateTime::from_epoch(i64::MAX).unwrap_err();
        DateTime::from_epoch(i64::MIN).unwrap_err();
    }

    #[test]
    fn round_trips() {
        let cases = [
            date_time(0, 2, 29, 12, 0, 0),
            date_time(1, 1, 1, 0, 0, 0),
            date_time(1600, 2, 29, 23, 59, 59),
            date_time(1900, 3, 1, 0, 0, 1),
            date_time(1970, 1, 1, 0, 0, 0),
            date_time(2000, 12, 31, 23, 59, 59),
            date_time(2017, 9, 8, 1, 2, 3),
            date_time(2017, 9, 8, 17, 25, 59),
            date_time(2017, 12, 8, 17, 25, 59),
            date_time(2024, 2, 29, 6, 7, 8),
        ];

        for value in cases {
            let decomposed = DateTime::from_number(value.to_number()).unwrap();
            assert_eq!(decomposed, value);
            assert_eq!(decomposed.fields(), RESOLVED);
            assert_eq!(decomposed.year(), value.year(), "{value:?}");
            assert_eq!(decomposed.month(), value.month(), "{value:?}");
            assert_eq!(decomposed.day(), value.day(), "{value:?}");
            assert_eq!(decomposed.hour(), value.hour(), "{value:?}");
            assert_eq!(decomposed.minute(), value.minute(), "{value:?}");
            assert_eq!(decomposed.second(), value.second(), "{value:?}");
        }
    }

    #[test]
    fn round_trip_normalizes_offset() {
        let mut local = date_time(2017, 1, 1, 0, 30, 0);
        local.set_offset(1, 0).unwrap();

        let utc = DateTime::from_number(local.to_number()).unwrap();
        assert_eq!(utc, local);
        assert_eq!(utc.year(), Some(2016));
        assert_eq!(utc.month(), Some(12));
        assert_eq!(utc.day(), Some(31));
        assert_eq!(utc.hour(), Some(23));
        assert_eq!(utc.minute(), Some(30));
    }

    #[test]
    fn leap_second_rolls_over() {
        let value = date_time(1990, 12, 31, 23, 59, 60);
        let decomposed = DateTime::from_number(value.to_number()).unwrap();

        assert_eq!(decomposed, date_time(1991, 1, 1, 0, 0, 0));
    }

    #[test]
    fn epoch_matches_jiff() {
        let seconds = [
            -62_135_596_800,
            -11_644_473_600,
            -1,
            0,
            951_786_000,
            1_504_832_523,
            // The last second jiff can represent.
            253_402_207_200,
        ];

        for second in seconds {
            let expected = jiff::Timestamp::from_second(second).unwrap().to_string();
            let value = DateTime::from_epoch(second).unwrap();

            assert_eq!(value.to_string(), expected);
            assert_eq!(value.to_epoch(), second);
        }
    }

    #[test]
    fn epoch_upper_bound() {
        let value = DateTime::from_epoch(253_402_300_799).unwrap();

        assert_eq!(value.to_string(), "9999-12-31T23:59:59Z");
        assert_eq!(value.to_number(), DateTime::MAX_NUMBER);
        DateTime::from_epoch(253_402_300_800).unwrap_err();
    }

    #[test]
    fn unrepresentable_is_logged() {
        let log_capture = LogCapture::new();
        let _guard = log_capture.subscriber().set_default();

        DateTime::from_number(-YEAR_ZERO_SECONDS - 5).unwrap_err();

        log_capture.assert_contains("datestamp::linear");
        log_capture.assert_contains("seconds=-31622405");
    }
}
