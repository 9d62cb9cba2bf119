//! Boolean predicates used by form inputs.
//!
//! Every check is total: empty or malformed input maps to `true` or `false`,
//! never to an error. Empty numeric fields count as valid because presence is
//! enforced separately with [`is_not_empty`].

pub mod rules;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::numeric::parse_float;

pub use rules::{FieldIssue, FormCheck, Rule};

static NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]*\.?[0-9]*$").expect("number pattern is valid"));

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

const MIN_PASSWORD_LEN: usize = 8;

/// Digits with at most one decimal point; no sign, no grouping separators.
pub fn is_valid_number(text: &str) -> bool {
    text.is_empty() || NUMBER_PATTERN.is_match(text)
}

/// Non-negative check. Zero passes; empty input passes.
pub fn is_positive_number(text: &str) -> bool {
    if text.is_empty() {
        return true;
    }
    let value = parse_float(text);
    !value.is_nan() && value >= 0.0
}

/// Permissive `local@domain.tld` shape check.
pub fn is_valid_email(text: &str) -> bool {
    EMAIL_PATTERN.is_match(text)
}

pub fn is_not_empty(text: &str) -> bool {
    !text.trim().is_empty()
}

/// At least eight characters with a lowercase letter, an uppercase letter and a digit.
///
/// Length is measured in UTF-16 code units, as browser form inputs count it.
pub fn is_strong_password(text: &str) -> bool {
    text.encode_utf16().count() >= MIN_PASSWORD_LEN
        && text.chars().any(|c| c.is_ascii_lowercase())
        && text.chars().any(|c| c.is_ascii_uppercase())
        && text.chars().any(|c| c.is_ascii_digit())
}

/// Values that can be reduced to a calendar day in the local timezone.
pub trait CalendarDay {
    fn calendar_day(&self) -> NaiveDate;
}

impl CalendarDay for NaiveDate {
    fn calendar_day(&self) -> NaiveDate {
        *self
    }
}

impl CalendarDay for NaiveDateTime {
    fn calendar_day(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> CalendarDay for DateTime<Tz> {
    fn calendar_day(&self) -> NaiveDate {
        self.with_timezone(&Local).date_naive()
    }
}

/// True when `date` falls on today or later, compared by local calendar day.
pub fn is_future_date<D: CalendarDay + ?Sized>(date: &D) -> bool {
    is_future_date_from(date, Local::now().date_naive())
}

/// Same as [`is_future_date`] against an explicit reference day.
pub fn is_future_date_from<D: CalendarDay + ?Sized>(date: &D, today: NaiveDate) -> bool {
    date.calendar_day() >= today
}
