// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::{self, Display, Formatter, Write};

use crate::DateTime;

impl DateTime {
    /// Formats the date as `YYYY-MM-DD`.
    ///
    /// Absent fields are shown as year 0, month 1 and day 1.
    ///
    /// ```
    /// use datestamp::DateTime;
    ///
    /// let mut date = DateTime::new();
    /// date.set_year(2017)?.set_month(9)?;
    /// assert_eq!(date.to_fulldate_string(), "2017-09-01");
    /// # Ok::<(), datestamp::Error>(())
    /// ```
    #[must_use]
    pub fn to_fulldate_string(&self) -> String {
        let mut text = String::with_capacity(10);
        self.write_full_date(&mut text)
            .expect("writing to a String never fails");
        text
    }

    /// Formats the time as `HH:MM:SS[.F](Z|±HH:MM)`.
    ///
    /// Absent time fields are shown as 0. The fraction is only shown when present. The offset
    /// is shown as `Z` when it is absent or zero.
    ///
    /// ```
    /// use datestamp::DateTime;
    ///
    /// let mut time = DateTime::new();
    /// time.set_hour(17)?.set_offset(0, -30)?;
    /// assert_eq!(time.to_fulltime_string(), "17:00:00-00:30");
    /// # Ok::<(), datestamp::Error>(())
    /// ```
    #[must_use]
    pub fn to_fulltime_string(&self) -> String {
        let mut text = String::with_capacity(16);
        self.write_full_time(&mut text)
            .expect("writing to a String never fails");
        text
    }

    /// Formats the value as the production that matches its present fields.
    ///
    /// A value holding only date fields becomes `YYYY-MM-DD` and one holding only time fields
    /// becomes `HH:MM:SS[.F]`, so parsing the text gives back the same fields. Anything else is
    /// formatted as a full date-time.
    #[cfg(any(feature = "serde", test))]
    pub(crate) fn to_production_string(&self) -> String {
        use crate::{Field, FieldSet};

        const FULL_DATE: FieldSet = FieldSet::EMPTY.with(Field::Year).with(Field::Month).with(Field::Day);
        const PARTIAL_TIME: FieldSet = FieldSet::EMPTY
            .with(Field::Hour)
            .with(Field::Minute)
            .with(Field::Second)
            .with(Field::SecondFraction);

        let fields = self.fields();
        if fields.is_empty() {
            return self.to_string();
        }

        let mut text = String::with_capacity(28);
        let written = if FULL_DATE.contains_all(fields) {
            self.write_full_date(&mut text)
        } else if PARTIAL_TIME.contains_all(fields) {
            self.write_partial_time(&mut text)
        } else {
            write!(text, "{self}")
        };
        written.expect("writing to a String never fails");
        text
    }

    fn write_full_date(&self, w: &mut impl Write) -> fmt::Result {
        write!(
            w,
            "{:04}-{:02}-{:02}",
            self.year().unwrap_or(0),
            self.month().unwrap_or(1),
            self.day().unwrap_or(1)
        )
    }

    fn write_full_time(&self, w: &mut impl Write) -> fmt::Result {
        self.write_partial_time(w)?;

        match self.offset() {
            None | Some((0, 0)) => w.write_char('Z'),
            Some((hours, minutes)) => {
                let sign = if hours < 0 || (hours == 0 && minutes < 0) { '-' } else { '+' };
                write!(w, "{sign}{:02}:{:02}", hours.unsigned_abs(), minutes.unsigned_abs())
            }
        }
    }

    fn write_partial_time(&self, w: &mut impl Write) -> fmt::Result {
        write!(
            w,
            "{:02}:{:02}:{:02}",
            self.hour().unwrap_or(0),
            self.minute().unwrap_or(0),
            self.second().unwrap_or(0)
        )?;

        match self.second_fraction() {
            Some(tenths) => write!(w, ".{tenths}"),
            None => Ok(()),
        }
    }
}

/// Formats the value as an RFC 3339 date-time, `YYYY-MM-DDTHH:MM:SS[.F](Z|±HH:MM)`.
///
/// See [`DateTime::to_fulldate_string`] and [`DateTime::to_fulltime_string`] for how absent
/// fields are shown.
impl Display for DateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_full_date(f)?;
        f.write_char('T')?;
        self.write_full_time(f)
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::Field;

    fn date(year: u16, month: u8, day: u8) -> DateTime {
        let mut value = DateTime::new();
        value.set_year(year).unwrap().set_month(month).unwrap().set_day(day).unwrap();
        value
    }

    #[test]
    fn empty_value() {
        let value = DateTime::new();

        assert_eq!(value.to_fulldate_string(), "0000-01-01");
        assert_eq!(value.to_fulltime_string(), "00:00:00Z");
        assert_eq!(value.to_string(), "0000-01-01T00:00:00Z");
    }

    #[test]
    fn unix_epoch() {
        assert_eq!(date(1970, 1, 1).to_string(), "1970-01-01T00:00:00Z");
    }

    #[test]
    fn zero_padding() {
        let mut value = date(7, 3, 4);
        value.set_hour(5).unwrap().set_minute(6).unwrap().set_second(7).unwrap();

        assert_eq!(value.to_string(), "0007-03-04T05:06:07Z");
    }

    #[test]
    fn offsets() {
        let mut value = date(1970, 1, 1);

        value.set_offset(1, 30).unwrap();
        assert_eq!(value.to_string(), "1970-01-01T00:00:00+01:30");

        value.set_offset(-1, 30).unwrap();
        assert_eq!(value.to_string(), "1970-01-01T00:00:00-01:30");

        value.set_offset(0, -30).unwrap();
        assert_eq!(value.to_string(), "1970-01-01T00:00:00-00:30");

        value.set_offset(0, 30).unwrap();
        assert_eq!(value.to_string(), "1970-01-01T00:00:00+00:30");

        value.set_offset(-23, 0).unwrap();
        assert_eq!(value.to_string(), "1970-01-01T00:00:00-23:00");

        value.set_offset(0, 0).unwrap();
        assert_eq!(value.to_string(), "1970-01-01T00:00:00Z");
    }

    #[test]
    fn fraction_only_when_present() {
        let mut value = date(1970, 1, 1);
        value.set_second_fraction(0).unwrap();
        assert_eq!(value.to_fulltime_string(), "00:00:00.0Z");

        value.remove(Field::SecondFraction);
        assert_eq!(value.to_fulltime_string(), "00:00:00Z");
    }

    #[test]
    fn removed_fields_use_defaults() {
        let mut value = date(2017, 9, 8);
        value.set_hour(17).unwrap();
        value.remove(Field::Month).remove(Field::Hour);

        assert_eq!(value.to_string(), "2017-01-08T00:00:00Z");
    }

    #[test]
    fn formatting_does_not_mutate() {
        let mut value = DateTime::new();
        value.set_minute(5).unwrap();

        let _ = value.to_string();
        assert_eq!(value.year(), None);
        assert_eq!(value.fields().len(), 1);
    }

    #[test]
    fn production_matches_fields() {
        assert_eq!(date(1979, 5, 27).to_production_string(), "1979-05-27");

        let mut time = DateTime::new();
        time.set_hour(7).unwrap().set_minute(32).unwrap().set_second(0).unwrap();
        assert_eq!(time.to_production_string(), "07:32:00");

        time.set_second_fraction(5).unwrap();
        assert_eq!(time.to_production_string(), "07:32:00.5");

        time.set_offset(0, 0).unwrap();
        assert_eq!(time.to_production_string(), "0000-01-01T07:32:00.5Z");

        let mut partial_date = DateTime::new();
        partial_date.set_year(2017).unwrap();
        assert_eq!(partial_date.to_production_string(), "2017-01-01");

        assert_eq!(DateTime::new().to_production_string(), "0000-01-01T00:00:00Z");
    }

    #[test]
    fn round_trip_through_text() {
        for text in [
            "1970-01-01T00:00:00Z",
            "0001-01-01T00:00:00Z",
            "2017-09-08T01:02:03Z",
            "2017-09-08T17:25:59.5+01:30",
            "2017-12-08T17:25:59-00:30",
            "9999-12-31T23:59:60-23:59",
        ] {
            assert_eq!(DateTime::parse(text).unwrap().to_string(), text);
        }
    }
}
