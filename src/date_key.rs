use chrono::{Datelike, Duration, NaiveDate, TimeDelta};
use serde::{Serialize, Serializer};
use std::fmt;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_LEN: usize = 10;

/// A calendar day with no time-of-day component.
///
/// Ordering is chronological and the string form (`yyyy-mm-dd`) is the key
/// used by [`crate::aggregate::ActivityRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// Earliest representable day.
    pub const MIN: DateKey = DateKey(NaiveDate::MIN);

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn day(self) -> u32 {
        self.0.day()
    }

    pub fn add_days(self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    pub fn sub_days(self, days: i64) -> Self {
        Self(self.0 - Duration::days(days))
    }

    /// `None` when the result falls outside the representable range.
    pub fn checked_add_days(self, days: i64) -> Option<Self> {
        let delta = TimeDelta::try_days(days)?;
        self.0.checked_add_signed(delta).map(Self)
    }

    pub fn checked_sub_days(self, days: i64) -> Option<Self> {
        let delta = TimeDelta::try_days(days)?;
        self.0.checked_sub_signed(delta).map(Self)
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(self, other: Self) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Monday = 0 .. Sunday = 6.
    pub fn day_of_week(self) -> u32 {
        self.0.weekday().num_days_from_monday()
    }

    pub fn key(self) -> String {
        self.0.format(DATE_FORMAT).to_string()
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Returns the date portion of a date or timestamp string: everything before
/// the first `T` or space, capped at ten characters.
pub fn date_portion(input: &str) -> &str {
    let trimmed = input.trim();
    let end = trimmed
        .find(|c: char| c == 'T' || c == 't' || c.is_whitespace())
        .unwrap_or(trimmed.len());
    let head = &trimmed[..end];
    match head.char_indices().nth(DATE_LEN) {
        Some((idx, _)) => &head[..idx],
        None => head,
    }
}

/// Parses `2024-01-01`, `2024-01-01T08:30:00Z` or `2024-01-01 08:30` into a
/// [`DateKey`], looking only at the date portion.
pub fn parse_date(input: &str) -> Option<DateKey> {
    let portion = date_portion(input);
    if portion.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(portion, DATE_FORMAT)
        .ok()
        .map(DateKey)
}
