// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};

use crate::calendar::days_in_month;
use crate::{Error, ErrorKind, Field, FieldSet, Result};

/// A date and time in which every field is optional.
///
/// A `DateTime` starts out empty and is built up through the field setters, or produced fully
/// populated by [`parse`][DateTime::parse] or [`from_number`][DateTime::from_number]. Each
/// setter validates its argument and marks the field as present, so a field that was
/// explicitly set to zero is distinguishable from a field that was never set. The getters
/// return `None` for absent fields.
///
/// # Field domains
///
/// | Field             | Domain                                                   |
/// |-------------------|----------------------------------------------------------|
/// | year              | `0..=9999`                                               |
/// | month             | `1..=12`                                                 |
/// | day               | `1..=31`, or `1..=days_in_month` if year and month are set |
/// | hour              | `0..=23`                                                 |
/// | minute            | `0..=59`                                                 |
/// | second            | `0..=60`, admitting leap seconds                         |
/// | second fraction   | `0..=9`, tenths of a second                              |
/// | offset            | hours `-23..=23`, minutes `-59..=59`                      |
///
/// # Order-sensitive validation
///
/// The upper bound of the day depends on the fields present *when the day is set*. Setting
/// the day before the year and month only checks it against 31; setting it afterwards checks
/// it against the actual length of the month.
///
/// ```
/// use datestamp::DateTime;
///
/// let mut date = DateTime::new();
/// date.set_day(30)?.set_month(2)?.set_year(2017)?;
///
/// let mut date = DateTime::new();
/// date.set_year(2017)?.set_month(2)?;
/// date.set_day(30).unwrap_err();
/// # Ok::<(), datestamp::Error>(())
/// ```
///
/// # Equality
///
/// Two values are equal if they denote the same instant, that is if their
/// [`to_number`][DateTime::to_number] values are equal. Which fields are present and which
/// offset was recorded does not matter. Ordering and hashing follow the same rule.
///
/// ```
/// use datestamp::DateTime;
///
/// let utc: DateTime = "2024-08-06T21:30:00Z".parse()?;
/// let local: DateTime = "2024-08-06T23:30:00+02:00".parse()?;
///
/// assert_eq!(utc, local);
/// assert_ne!(utc.to_string(), local.to_string());
/// # Ok::<(), datestamp::Error>(())
/// ```
#[derive(Copy, Clone, Default)]
pub struct DateTime {
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    second_fraction: u8,
    hour_offset: i8,
    minute_offset: i8,
    fields: FieldSet,
}

impl DateTime {
    /// Creates a value with no fields present.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            year: 0,
            month: 0,
            day: 0,
            hour: 0,
            minute: 0,
            second: 0,
            second_fraction: 0,
            hour_offset: 0,
            minute_offset: 0,
            fields: FieldSet::EMPTY,
        }
    }

    /// Returns the set of present fields.
    #[must_use]
    pub const fn fields(&self) -> FieldSet {
        self.fields
    }

    /// Returns `true` if no field is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns `true` if `field` is present.
    #[must_use]
    pub const fn has(&self, field: Field) -> bool {
        self.fields.contains(field)
    }

    /// Marks `field` as absent.
    ///
    /// The stored value is kept but can no longer be observed through the getters.
    pub const fn remove(&mut self, field: Field) -> &mut Self {
        self.fields.remove(field);
        self
    }

    /// Sets the year.
    ///
    /// # Errors
    ///
    /// Returns an error if `year` is not in `0..=9999`.
    pub fn set_year(&mut self, year: u16) -> Result<&mut Self> {
        check(Field::Year, year, 0, 9999)?;
        self.year = year;
        Ok(self.mark(Field::Year))
    }

    /// Sets the month.
    ///
    /// # Errors
    ///
    /// Returns an error if `month` is not in `1..=12`.
    pub fn set_month(&mut self, month: u8) -> Result<&mut Self> {
        check(Field::Month, month, 1, 12)?;
        self.month = month;
        Ok(self.mark(Field::Month))
    }

    /// Sets the day of the month.
    ///
    /// # Errors
    ///
    /// Returns an error if `day` is not in `1..=31`, or, when both the year and the month are
    /// present, if `day` exceeds the number of days in that month.
    pub fn set_day(&mut self, day: u8) -> Result<&mut Self> {
        let max = match (self.year(), self.month()) {
            (Some(year), Some(month)) => days_in_month(year, month)?,
            _ => 31,
        };
        check(Field::Day, day, 1, max)?;
        self.day = day;
        Ok(self.mark(Field::Day))
    }

    /// Sets the hour.
    ///
    /// # Errors
    ///
    /// Returns an error if `hour` is not in `0..=23`.
    pub fn set_hour(&mut self, hour: u8) -> Result<&mut Self> {
        check(Field::Hour, hour, 0, 23)?;
        self.hour = hour;
        Ok(self.mark(Field::Hour))
    }

    /// Sets the minute.
    ///
    /// # Errors
    ///
    /// Returns an error if `minute` is not in `0..=59`.
    pub fn set_minute(&mut self, minute: u8) -> Result<&mut Self> {
        check(Field::Minute, minute, 0, 59)?;
        self.minute = minute;
        Ok(self.mark(Field::Minute))
    }

    /// Sets the second. The value 60 is accepted for leap seconds.
    ///
    /// # Errors
    ///
    /// Returns an error if `second` is not in `0..=60`.
    pub fn set_second(&mut self, second: u8) -> Result<&mut Self> {
        check(Field::Second, second, 0, 60)?;
        self.second = second;
        Ok(self.mark(Field::Second))
    }

    /// Sets the tenths of a second.
    ///
    /// # Errors
    ///
    /// Returns an error if `tenths` is not in `0..=9`.
    pub fn set_second_fraction(&mut self, tenths: u8) -> Result<&mut Self> {
        check(Field::SecondFraction, tenths, 0, 9)?;
        self.second_fraction = tenths;
        Ok(self.mark(Field::SecondFraction))
    }

    /// Sets the UTC offset.
    ///
    /// The sign of the offset is carried by `hours`. Only when `hours` is zero does the sign of
    /// `minutes` decide the sign of the offset, so `(-1, 30)` is `-01:30` and `(0, -30)` is
    /// `-00:30`.
    ///
    /// # Errors
    ///
    /// Returns an error if `hours` is not in `-23..=23`, if `minutes` is not in `-59..=59`,
    /// or if `minutes` is negative while `hours` is nonzero.
    pub fn set_offset(&mut self, hours: i8, minutes: i8) -> Result<&mut Self> {
        check(Field::Offset, hours, -23, 23)?;
        check(Field::Offset, minutes, -59, 59)?;
        if hours != 0 && minutes < 0 {
            return Err(Error::from_kind(ErrorKind::InvalidOffset { hours, minutes }));
        }

        self.hour_offset = hours;
        self.minute_offset = minutes;
        Ok(self.mark(Field::Offset))
    }

    /// Returns the year, if present.
    #[must_use]
    pub const fn year(&self) -> Option<u16> {
        if self.has(Field::Year) { Some(self.year) } else { None }
    }

    /// Returns the month, if present.
    #[must_use]
    pub const fn month(&self) -> Option<u8> {
        self.get(Field::Month, self.month)
    }

    /// Returns the day of the month, if present.
    #[must_use]
    pub const fn day(&self) -> Option<u8> {
        self.get(Field::Day, self.day)
    }

    /// Returns the hour, if present.
    #[must_use]
    pub const fn hour(&self) -> Option<u8> {
        self.get(Field::Hour, self.hour)
    }

    /// Returns the minute, if present.
    #[must_use]
    pub const fn minute(&self) -> Option<u8> {
        self.get(Field::Minute, self.minute)
    }

    /// Returns the second, if present.
    #[must_use]
    pub const fn second(&self) -> Option<u8> {
        self.get(Field::Second, self.second)
    }

    /// Returns the tenths of a second, if present.
    #[must_use]
    pub const fn second_fraction(&self) -> Option<u8> {
        self.get(Field::SecondFraction, self.second_fraction)
    }

    /// Returns the UTC offset as `(hours, minutes)`, if present.
    #[must_use]
    pub const fn offset(&self) -> Option<(i8, i8)> {
        if self.has(Field::Offset) {
            Some((self.hour_offset, self.minute_offset))
        } else {
            None
        }
    }

    /// Returns the UTC offset as a signed number of seconds, if present.
    ///
    /// ```
    /// use datestamp::DateTime;
    ///
    /// let mut time = DateTime::new();
    /// time.set_offset(-1, 30)?;
    /// assert_eq!(time.offset_seconds(), Some(-5400));
    /// # Ok::<(), datestamp::Error>(())
    /// ```
    #[must_use]
    pub const fn offset_seconds(&self) -> Option<i32> {
        match self.offset() {
            Some((hours, minutes)) => {
                let magnitude = hours.unsigned_abs() as i32 * 3600 + minutes.unsigned_abs() as i32 * 60;
                if hours < 0 || (hours == 0 && minutes < 0) {
                    Some(-magnitude)
                } else {
                    Some(magnitude)
                }
            }
            None => None,
        }
    }

    const fn get(&self, field: Field, value: u8) -> Option<u8> {
        if self.has(field) { Some(value) } else { None }
    }

    const fn mark(&mut self, field: Field) -> &mut Self {
        self.fields.insert(field);
        self
    }

    // Bypasses validation, callers guarantee the values are in their domains.
    pub(crate) const fn from_parts(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            second_fraction: 0,
            hour_offset: 0,
            minute_offset: 0,
            fields: FieldSet::EMPTY,
        }
    }

    pub(crate) const fn with_fields(mut self, fields: FieldSet) -> Self {
        self.fields = fields;
        self
    }
}

fn check<T>(field: Field, value: T, min: T, max: T) -> Result<()>
where
    T: Copy + PartialOrd + Into<i64>,
{
    if value < min || value > max {
        return Err(Error::out_of_range(field, value, min, max));
    }

    Ok(())
}

impl PartialEq for DateTime {
    fn eq(&self, other: &Self) -> bool {
        self.to_number() == other.to_number()
    }
}

impl Eq for DateTime {}

impl PartialOrd for DateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_number().cmp(&other.to_number())
    }
}

impl Hash for DateTime {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_number().hash(state);
    }
}

impl Debug for DateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateTime")
            .field("year", &self.year())
            .field("month", &self.month())
            .field("day", &self.day())
            .field("hour", &self.hour())
            .field("minute", &self.minute())
            .field("second", &self.second())
            .field("second_fraction", &self.second_fraction())
            .field("offset", &self.offset())
            .finish()
    }
}

/// Serializes the value as text that parses back to the same fields.
///
/// A lone date is written as `YYYY-MM-DD`, lone time fields as `HH:MM:SS[.F]`, and anything
/// else as a full date-time.
#[cfg(any(feature = "serde", test))]
impl serde_core::Serialize for DateTime {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde_core::Serializer,
    {
        serializer.serialize_str(&self.to_production_string())
    }
}

#[cfg(any(feature = "serde", test))]
impl<'de> serde_core::Deserialize<'de> for DateTime {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde_core::Deserializer<'de>,
    {
        <String as serde_core::Deserialize>::deserialize(deserializer)?
            .parse::<Self>()
            .map_err(serde_core::de::Error::custom)
    }
}
