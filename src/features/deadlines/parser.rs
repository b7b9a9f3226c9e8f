//! Due date parsing for `MON DD YYYY HH:MM` input

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

/// Canonical rendering of a due timestamp
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    #[error("expected 4 date tokens (MON DD YYYY HH:MM), got {0}")]
    WrongTokenCount(usize),
    #[error("unknown month '{0}'")]
    UnknownMonth(String),
    #[error("invalid day '{0}'")]
    InvalidDay(String),
    #[error("invalid year '{0}'")]
    InvalidYear(String),
    #[error("invalid time '{0}'")]
    InvalidTime(String),
    #[error("{month} {day} {year} is not a calendar date")]
    InvalidDate { month: u32, day: u32, year: i32 },
}

/// Parse free-form due date text such as `SEP 21 2050 10:00`.
///
/// Month names are the English three-letter abbreviations, matched
/// case-insensitively. Time is 24-hour `H:M` up to `HH:MM`.
pub fn parse_due_date(input: &str) -> Result<NaiveDateTime, DateParseError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    parse_due_tokens(&tokens)
}

/// Token-slice form of [`parse_due_date`], for callers that already split arguments
pub fn parse_due_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<NaiveDateTime, DateParseError> {
    let [month, day, year, time] = tokens else {
        return Err(DateParseError::WrongTokenCount(tokens.len()));
    };

    let month = parse_month(month.as_ref())?;
    let day = parse_day(day.as_ref())?;
    let year = parse_year(year.as_ref())?;
    let time = parse_time(time.as_ref())?;

    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(DateParseError::InvalidDate { month, day, year })?;
    Ok(date.and_time(time))
}

pub fn format_due_date(due_at: &NaiveDateTime) -> String {
    due_at.format(DUE_DATE_FORMAT).to_string()
}

fn parse_month(token: &str) -> Result<u32, DateParseError> {
    let upper = token.to_ascii_uppercase();
    MONTHS
        .iter()
        .position(|m| *m == upper)
        .map(|idx| idx as u32 + 1)
        .ok_or_else(|| DateParseError::UnknownMonth(token.to_string()))
}

fn parse_day(token: &str) -> Result<u32, DateParseError> {
    let invalid = || DateParseError::InvalidDay(token.to_string());
    if token.is_empty() || token.len() > 2 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    match token.parse::<u32>() {
        Ok(day @ 1..=31) => Ok(day),
        _ => Err(invalid()),
    }
}

fn parse_year(token: &str) -> Result<i32, DateParseError> {
    if token.len() != 4 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateParseError::InvalidYear(token.to_string()));
    }
    token
        .parse()
        .map_err(|_| DateParseError::InvalidYear(token.to_string()))
}

fn parse_time(token: &str) -> Result<NaiveTime, DateParseError> {
    let invalid = || DateParseError::InvalidTime(token.to_string());
    let (hours, minutes) = token.split_once(':').ok_or_else(invalid)?;

    let well_formed = (1..=2).contains(&hours.len())
        && (1..=2).contains(&minutes.len())
        && hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit());
    if !well_formed {
        return Err(invalid());
    }

    let hours: u32 = hours.parse().map_err(|_| invalid())?;
    let minutes: u32 = minutes.parse().map_err(|_| invalid())?;
    NaiveTime::from_hms_opt(hours, minutes, 0).ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd_hm(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_parses_canonical_example() {
        let due = parse_due_date("SEP 21 2050 10:00").unwrap();
        assert_eq!(due, ymd_hm(2050, 9, 21, 10, 0));
        assert_eq!(format_due_date(&due), "2050-09-21 10:00:00");
    }

    #[test]
    fn test_month_is_case_insensitive() {
        assert_eq!(
            parse_due_date("dec 21 2050 19:59").unwrap(),
            ymd_hm(2050, 12, 21, 19, 59)
        );
        assert_eq!(
            parse_due_date("Oct 05 2026 7:30").unwrap(),
            ymd_hm(2026, 10, 5, 7, 30)
        );
    }

    #[test]
    fn test_single_digit_minutes() {
        assert_eq!(
            parse_due_date("SEP 21 2050 10:5").unwrap(),
            ymd_hm(2050, 9, 21, 10, 5)
        );
        assert!(matches!(
            parse_due_date("SEP 21 2050 10:60"),
            Err(DateParseError::InvalidTime(_))
        ));
        assert!(matches!(
            parse_due_date("SEP 21 2050 10:"),
            Err(DateParseError::InvalidTime(_))
        ));
    }

    #[test]
    fn test_accepts_strftime_output() {
        let when = ymd_hm(2031, 3, 4, 9, 5);
        let text = when.format("%b %d %Y %H:%M").to_string();
        assert_eq!(parse_due_date(&text).unwrap(), when);
    }

    #[test]
    fn test_single_token_is_wrong_count() {
        assert_eq!(
            parse_due_date("4"),
            Err(DateParseError::WrongTokenCount(1))
        );
    }

    #[test]
    fn test_rejects_bad_components() {
        assert!(matches!(
            parse_due_date("SEPT 21 2050 10:00"),
            Err(DateParseError::UnknownMonth(_))
        ));
        assert!(matches!(
            parse_due_date("SEP 0 2050 10:00"),
            Err(DateParseError::InvalidDay(_))
        ));
        assert!(matches!(
            parse_due_date("SEP 21 50 10:00"),
            Err(DateParseError::InvalidYear(_))
        ));
        assert!(matches!(
            parse_due_date("SEP 21 2050 24:00"),
            Err(DateParseError::InvalidTime(_))
        ));
        assert!(matches!(
            parse_due_date("SEP 21 2050 10"),
            Err(DateParseError::InvalidTime(_))
        ));
        assert!(matches!(
            parse_due_date("SEP 21 2050 -1:00"),
            Err(DateParseError::InvalidTime(_))
        ));
    }

    #[test]
    fn test_rejects_impossible_calendar_date() {
        assert_eq!(
            parse_due_date("FEB 30 2050 10:00"),
            Err(DateParseError::InvalidDate {
                month: 2,
                day: 30,
                year: 2050
            })
        );
    }

    #[test]
    fn test_token_slice_form() {
        let tokens = vec!["JAN".to_string(), "1".into(), "2040".into(), "00:00".into()];
        assert_eq!(parse_due_tokens(&tokens).unwrap(), ymd_hm(2040, 1, 1, 0, 0));
    }
}
