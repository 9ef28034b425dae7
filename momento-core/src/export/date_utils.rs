use crate::errors::ParseError;
use crate::months::Months;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};

/// Parses a date header such as `13 August 2002`.
///
/// Returns `None` when the month name is unknown or the day does not exist in that month.
pub fn parse_header_date(text: &str) -> Option<NaiveDate> {
    let mut parts = text.split_whitespace();
    let day = parts.next()?.parse::<u32>().ok()?;
    let month = Months::number(parts.next()?)?;
    let year = parts.next()?.parse::<i32>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parses a 24-hour `HH:MM` time header.
pub fn parse_header_time(text: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(text, "%H:%M").ok()
}

/// Combines the literal texts of a date header and a time header into a UTC instant.
///
/// The export carries naive local times; they are interpreted as UTC.
pub fn resolve_timestamp(date: &str, time: &str) -> Result<DateTime<Utc>, ParseError> {
    match (parse_header_date(date), parse_header_time(time)) {
        (Some(d), Some(t)) => Ok(NaiveDateTime::new(d, t).and_utc()),
        _ => Err(ParseError::MalformedTimestamp {
            date: date.to_string(),
            time: time.to_string(),
        }),
    }
}

/// Returns an output like this: `2002-08-13T13:45:00Z`
pub fn iso_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
}
