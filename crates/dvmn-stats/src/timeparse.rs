//! History Timestamp Parsing
//!
//! The history page renders timestamps as localized strings of the shape
//! `<day> <month-name> <year> года <HH:MM>`, e.g. "11 января 2001 года 8:32".
//! Timestamps are site-local wall-clock time, so the parsed value is naive.

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Genitive month names used on the history page, January first.
const RUS_MONTHS: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimestampError {
    #[error("unexpected timestamp shape: {0:?}")]
    Shape(String),
    #[error("unknown month name: {0:?}")]
    Month(String),
    #[error("timestamp component out of range: {0:?}")]
    Range(String),
}

/// Converts a localized history timestamp into a naive datetime.
pub fn parse_history_timestamp(raw: &str) -> Result<NaiveDateTime, TimestampError> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    if tokens.len() != 5 {
        return Err(TimestampError::Shape(raw.to_string()));
    }

    // tokens[3] is the "года"/"г." filler word
    let day = parse_component(tokens[0], raw)?;
    let month = month_number(tokens[1]).ok_or_else(|| TimestampError::Month(tokens[1].to_string()))?;
    let year: i32 = parse_component(tokens[2], raw)?;

    let (hours_str, minutes_str) = tokens[4]
        .split_once(':')
        .ok_or_else(|| TimestampError::Shape(raw.to_string()))?;
    let hours = parse_component(hours_str, raw)?;
    let minutes = parse_component(minutes_str, raw)?;

    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hours, minutes, 0))
        .ok_or_else(|| TimestampError::Range(raw.to_string()))
}

fn month_number(name: &str) -> Option<u32> {
    RUS_MONTHS
        .iter()
        .position(|&month| month == name)
        .map(|index| index as u32 + 1)
}

fn parse_component<T: std::str::FromStr>(token: &str, raw: &str) -> Result<T, TimestampError> {
    token
        .parse()
        .map_err(|_| TimestampError::Shape(raw.to_string()))
}
