use crate::data::country::Country;
use crate::data::holiday::{Holiday, HolidayStatus};
use crate::data::tables::{all_tables, definitions_for};
use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use std::collections::HashSet;
use tracing::debug;

/// Leap year used when checking table dates, so "Feb 29" would still parse.
const VALIDATION_YEAR: i32 = 2024;

/// The local calendar date. This is the only place the clock is read.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses a "Mon D" date (e.g. "Jan 1") in `year`.
pub fn parse_holiday_date(date_string: &str, year: i32) -> Result<NaiveDate> {
    let full = format!("{} {}", date_string.trim(), year);
    NaiveDate::parse_from_str(&full, "%b %d %Y")
        .with_context(|| format!("invalid holiday date '{}' for year {}", date_string, year))
}

/// Formats a date as "Jan 1".
pub fn format_holiday_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Whole days from `today` to `date`: positive in the future, negative in the past.
pub fn calculate_days_from_today(date: NaiveDate, today: NaiveDate) -> i64 {
    (date - today).num_days()
}

pub fn create_holiday_object(
    id: u32,
    name: &str,
    date_string: &str,
    year: i32,
    today: NaiveDate,
) -> Result<Holiday> {
    let calendar_date = parse_holiday_date(date_string, year)?;
    let days = calculate_days_from_today(calendar_date, today);
    // A year spans at most 366 days from any reasonable "today"; clamp rather than wrap.
    let magnitude = u32::try_from(days.unsigned_abs()).unwrap_or(u32::MAX);
    let status = if days < 0 {
        HolidayStatus::Passed { days_passed: magnitude }
    } else {
        HolidayStatus::Upcoming { days_until: magnitude }
    };
    Ok(Holiday {
        id,
        name: name.to_string(),
        date: date_string.to_string(),
        calendar_date,
        status,
    })
}

fn build(country: Option<Country>, year: i32, today: NaiveDate) -> Result<Vec<Holiday>> {
    definitions_for(country)
        .iter()
        .map(|d| create_holiday_object(d.id, d.name, d.date, year, today))
        .collect()
}

/// The default holiday list for `year`, in table order.
pub fn get_holidays_for_year(year: i32, today: NaiveDate) -> Result<Vec<Holiday>> {
    build(None, year, today)
}

/// The holiday list for `country_code` (code or name, case-insensitive).
/// Unrecognized codes get the default list.
pub fn get_holidays_by_country(country_code: &str, year: i32, today: NaiveDate) -> Result<Vec<Holiday>> {
    match Country::lookup(country_code) {
        Some(country) => build(Some(country), year, today),
        None => {
            debug!(country_code, "unrecognized country, using default holiday list");
            get_holidays_for_year(year, today)
        }
    }
}

/// Holidays for an already-resolved selector; `None` is the default list.
pub fn get_holidays(country: Option<Country>, year: i32, today: NaiveDate) -> Result<Vec<Holiday>> {
    build(country, year, today)
}

/// Reorders holidays by calendar date. Entries on the same day keep table order.
pub fn sort_by_calendar(holidays: &mut [Holiday]) {
    holidays.sort_by_key(|h| h.calendar_date);
}

/// Checks every static table: each date parses and ids are unique per table.
pub fn validate_tables() -> Result<()> {
    for (label, table) in all_tables() {
        let mut ids = HashSet::new();
        for def in table {
            parse_holiday_date(def.date, VALIDATION_YEAR)
                .with_context(|| format!("{} table: holiday '{}'", label, def.name))?;
            if !ids.insert(def.id) {
                bail!("{} table: duplicate holiday id {}", label, def.id);
            }
        }
        debug!(table = label, entries = table.len(), "holiday table validated");
    }
    Ok(())
}
