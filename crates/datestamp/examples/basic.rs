// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! This file demonstrates the usage of `DateTime`, which holds a date and time
//! whose fields are individually optional.
//!
//! This includes:
//!
//! - Building values field by field
//! - Parsing and formatting RFC 3339 text
//! - Converting to and from linear time

use datestamp::fmt::ParseOptions;
use datestamp::{DateTime, Field};

fn main() -> Result<(), datestamp::Error> {
    building()?;
    parsing_and_formatting()?;
    linear_time()?;

    Ok(())
}

fn building() -> Result<(), datestamp::Error> {
    let mut time = DateTime::new();
    time.set_year(2017)?.set_month(9)?.set_day(8)?.set_hour(1)?;

    println!("Built: {time}, present fields: {:?}", time.fields());

    // Removing a field only hides it, formatting falls back to the default.
    time.remove(Field::Hour);
    println!("Without hour: {time}");

    // Out of range values are rejected and leave the value untouched.
    if let Err(error) = time.set_day(31) {
        println!("Rejected: {error}");
    }

    Ok(())
}

fn parsing_and_formatting() -> Result<(), datestamp::Error> {
    let time: DateTime = "1979-05-27T00:32:00.9-07:00".parse()?;
    println!("Date: {}, time: {}", time.to_fulldate_string(), time.to_fulltime_string());

    let local_date: DateTime = "1979-05-27".parse()?;
    println!("Local date fields: {:?}", local_date.fields());

    let relaxed = ParseOptions::new().space_separator(true).truncated_fraction(true);
    let time = relaxed.parse("1979-05-27 07:32:00.999999")?;
    println!("Relaxed: {time}");

    match DateTime::parse("1979-05-27 07:32:00Z") {
        Ok(time) => println!("Unexpected: {time}"),
        Err(error) => println!("Strict parsing failed: {error}"),
    }

    Ok(())
}

fn linear_time() -> Result<(), datestamp::Error> {
    let time: DateTime = "2017-09-08T01:02:03+01:30".parse()?;

    let epoch = time.to_epoch();
    let utc = DateTime::from_epoch(epoch)?;

    println!("{time} is {epoch} seconds since the Unix epoch, or {utc}");
    println!("Same instant: {}", time == utc);

    Ok(())
}
