// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::str::FromStr;

use crate::error::Expected;
use crate::{DateTime, Error, Result};

/// Options that relax the RFC 3339 grammar accepted by the parser.
///
/// The default options accept the strict subset described in the [module docs][crate::fmt]:
/// upper-case `T` and `Z`, no whitespace, and exactly one fractional digit.
///
/// # Examples
///
/// ```
/// use datestamp::fmt::ParseOptions;
///
/// let strict = ParseOptions::new();
/// strict.parse("2024-08-06t21:30:00.123z").unwrap_err();
///
/// let relaxed = ParseOptions::new().lowercase(true).truncated_fraction(true);
/// let time = relaxed.parse("2024-08-06t21:30:00.123z")?;
/// assert_eq!(time.second_fraction(), Some(1));
///
/// # Ok::<(), datestamp::Error>(())
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct ParseOptions {
    lowercase: bool,
    space_separator: bool,
    truncated_fraction: bool,
}

impl ParseOptions {
    /// Creates options for the strict grammar.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lowercase: false,
            space_separator: false,
            truncated_fraction: false,
        }
    }

    /// Also accepts `t` as the date/time separator and `z` as the UTC offset.
    #[must_use]
    pub const fn lowercase(mut self, enabled: bool) -> Self {
        self.lowercase = enabled;
        self
    }

    /// Also accepts a single space as the date/time separator.
    #[must_use]
    pub const fn space_separator(mut self, enabled: bool) -> Self {
        self.space_separator = enabled;
        self
    }

    /// Accepts any number of fractional digits, keeping only the first one.
    #[must_use]
    pub const fn truncated_fraction(mut self, enabled: bool) -> Self {
        self.truncated_fraction = enabled;
        self
    }

    /// Parses `text` into a [`DateTime`] in which exactly the fields found in `text` are present.
    ///
    /// # Errors
    ///
    /// Returns an error if `text` does not follow the grammar or if a field is out of range.
    /// No partially parsed value is ever returned.
    pub fn parse(&self, text: &str) -> Result<DateTime> {
        let result = Parser::new(text, *self).parse();

        #[cfg(any(feature = "logs", test))]
        if let Err(error) = &result {
            tracing::event!(
                name: "datestamp.parse.rejected",
                tracing::Level::DEBUG,
                input.length = text.len(),
                error.message = %error,
            );
        }

        result
    }
}

impl DateTime {
    /// Parses RFC 3339 text with the default [`ParseOptions`].
    ///
    /// The whole of `text` must be a single production. Anything after the offset of a full
    /// date-time, or after a lone date or time, is rejected with [`Expected::End`].
    ///
    /// # Errors
    ///
    /// Returns an error if `text` is malformed or if a field is out of range.
    ///
    /// ```
    /// use datestamp::{DateTime, ErrorKind};
    /// use datestamp::Expected;
    ///
    /// let time = DateTime::parse("0001-01-01T00:00:00Z")?;
    /// assert_eq!(time.year(), Some(1));
    ///
    /// let error = DateTime::parse("1970-01-01 00:00:00Z").unwrap_err();
    /// assert_eq!(error.kind(), &ErrorKind::Parse { position: 10, expected: Expected::Char('T') });
    ///
    /// let error = DateTime::parse("1970-01-01T00:00:00Z+00:00").unwrap_err();
    /// assert_eq!(error.kind(), &ErrorKind::Parse { position: 20, expected: Expected::End });
    /// # Ok::<(), datestamp::Error>(())
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        ParseOptions::new().parse(text)
    }
}

impl FromStr for DateTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

struct Parser<'a> {
    input: &'a [u8],
    position: usize,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    const fn new(text: &'a str, options: ParseOptions) -> Self {
        Self {
            input: text.as_bytes(),
            position: 0,
            options,
        }
    }

    fn parse(mut self) -> Result<DateTime> {
        let mut value = DateTime::new();

        if self.input.get(2) == Some(&b':') {
            self.partial_time(&mut value)?;
        } else {
            self.full_date(&mut value)?;
            if !self.at_end() {
                self.separator()?;
                self.partial_time(&mut value)?;
                self.time_offset(&mut value)?;
            }
        }

        if !self.at_end() {
            return Err(self.error(Expected::End));
        }

        Ok(value)
    }

    fn full_date(&mut self, value: &mut DateTime) -> Result<()> {
        let year = self.four_digits()?;
        self.literal(b'-')?;
        let month = self.two_digits()?;
        self.literal(b'-')?;
        let day = self.two_digits()?;

        value.set_year(year)?.set_month(month)?.set_day(day)?;
        Ok(())
    }

    fn separator(&mut self) -> Result<()> {
        match self.peek() {
            Some(b'T') => {}
            Some(b't') if self.options.lowercase => {}
            Some(b' ') if self.options.space_separator => {}
            _ => return Err(self.error(Expected::Char('T'))),
        }

        self.position += 1;
        Ok(())
    }

    fn partial_time(&mut self, value: &mut DateTime) -> Result<()> {
        let hour = self.two_digits()?;
        self.literal(b':')?;
        let minute = self.two_digits()?;
        self.literal(b':')?;
        let second = self.two_digits()?;

        value.set_hour(hour)?.set_minute(minute)?.set_second(second)?;

        if self.peek() == Some(b'.') {
            self.position += 1;
            value.set_second_fraction(self.digit()?)?;

            if self.options.truncated_fraction {
                while self.peek().is_some_and(|b| b.is_ascii_digit()) {
                    self.position += 1;
                }
            }
        }

        Ok(())
    }

    fn time_offset(&mut self, value: &mut DateTime) -> Result<()> {
        let negative = match self.peek() {
            None => return Ok(()),
            Some(b'Z') => {
                self.position += 1;
                value.set_offset(0, 0)?;
                return Ok(());
            }
            Some(b'z') if self.options.lowercase => {
                self.position += 1;
                value.set_offset(0, 0)?;
                return Ok(());
            }
            Some(b'+') => false,
            Some(b'-') => true,
            Some(_) => return Err(self.error(Expected::Offset)),
        };
        self.position += 1;

        let mut hours = self.two_digits()?.cast_signed();
        self.literal(b':')?;
        let mut minutes = self.two_digits()?.cast_signed();

        if negative {
            if hours == 0 {
                minutes = -minutes;
            } else {
                hours = -hours;
            }
        }

        value.set_offset(hours, minutes)?;
        Ok(())
    }

    fn four_digits(&mut self) -> Result<u16> {
        let high = u16::from(self.two_digits()?);
        let low = u16::from(self.two_digits()?);
        Ok(high * 100 + low)
    }

    fn two_digits(&mut self) -> Result<u8> {
        let tens = self.digit()?;
        let ones = self.digit()?;
        Ok(tens * 10 + ones)
    }

    fn digit(&mut self) -> Result<u8> {
        match self.peek() {
            Some(b) if b.is_ascii_digit() => {
                self.position += 1;
                Ok(b - b'0')
            }
            _ => Err(self.error(Expected::Digit)),
        }
    }

    fn literal(&mut self, expected: u8) -> Result<()> {
        if self.peek() != Some(expected) {
            return Err(self.error(Expected::Char(char::from(expected))));
        }

        self.position += 1;
        Ok(())
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.position).copied()
    }

    const fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    const fn error(&self, expected: Expected) -> Error {
        Error::parse(self.position, expected)
    }
}
