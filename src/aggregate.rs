use crate::date_key::{date_portion, parse_date, DateKey};
use chrono::{DateTime, NaiveDate};
use std::collections::BTreeMap;
use tracing::debug;

/// Days subtracted from today when the first-activity string cannot be read.
pub const DEFAULT_FALLBACK_DAYS: i64 = 6;

const OFFSET_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Event counts per day, keyed by `yyyy-mm-dd`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityRecord {
    days: BTreeMap<String, u32>,
}

impl ActivityRecord {
    pub fn count(&self, date: DateKey) -> u32 {
        self.days.get(&date.key()).copied().unwrap_or(0)
    }

    pub fn is_active(&self, date: DateKey) -> bool {
        self.count(date) > 0
    }

    /// Sum of counts for days in `[start, end]`.
    pub fn total_between(&self, start: DateKey, end: DateKey) -> u64 {
        if start > end {
            return 0;
        }
        self.days
            .range(start.key()..=end.key())
            .map(|(_, count)| u64::from(*count))
            .sum()
    }

    /// Number of days in `[start, end]` with at least one event.
    pub fn active_days_between(&self, start: DateKey, end: DateKey) -> u32 {
        if start > end {
            return 0;
        }
        self.days
            .range(start.key()..=end.key())
            .filter(|(_, count)| **count > 0)
            .count() as u32
    }

    pub fn total(&self) -> u64 {
        self.days.values().map(|count| u64::from(*count)).sum()
    }
}

/// Groups raw event timestamps by their date portion.
pub fn aggregate<I, S>(events: I) -> ActivityRecord
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut record = ActivityRecord::default();
    for event in events {
        let raw = event.as_ref();
        if date_portion(raw).is_empty() {
            continue;
        }
        let Some(date) = parse_date(raw) else {
            debug!(event = raw, "skipping event with unreadable date");
            continue;
        };
        let entry = record.days.entry(date.key()).or_insert(0);
        *entry = entry.saturating_add(1);
    }
    record
}

/// Reads the window start from the first-activity string, trying an
/// offset timestamp and then a plain date. Anything else resolves to
/// `today - fallback_days`, clamped to the earliest representable day.
pub fn resolve_window_start(
    raw_first_activity: &str,
    today: DateKey,
    fallback_days: i64,
) -> DateKey {
    let raw = raw_first_activity.trim();

    if let Some(date) = parse_offset_timestamp(raw) {
        return date;
    }
    if let Some(date) = parse_date(raw) {
        return date;
    }

    let fallback = today.checked_sub_days(fallback_days).unwrap_or(DateKey::MIN);
    debug!(raw, %fallback, "first activity unreadable, using fallback window start");
    fallback
}

fn parse_offset_timestamp(raw: &str) -> Option<DateKey> {
    let parsed = DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, OFFSET_TIMESTAMP_FORMAT))
        .ok()?;
    let local: NaiveDate = parsed.date_naive();
    Some(DateKey::from(local))
}
