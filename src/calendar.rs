//! End-to-end calendar computation: raw events and window bounds in, one
//! immutable [`ActivityCalendar`] out.

use crate::aggregate::{aggregate, resolve_window_start, ActivityRecord};
use crate::date_key::DateKey;
use crate::grid::{build_grid, Grid, GridCell};
use crate::labels::{month_labels, year_label, WEEKDAY_LABELS};
use crate::streak::{compute_streaks, StreakResult};
use crate::tier::{classify, Tier};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CalendarCell {
    Day { date: DateKey, count: u32, tier: Tier },
    Empty {},
}

impl CalendarCell {
    pub fn date(&self) -> Option<DateKey> {
        match self {
            CalendarCell::Day { date, .. } => Some(*date),
            CalendarCell::Empty {} => None,
        }
    }

    pub fn tier(&self) -> Option<Tier> {
        match self {
            CalendarCell::Day { tier, .. } => Some(*tier),
            CalendarCell::Empty {} => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityCalendar {
    pub start: DateKey,
    pub end: DateKey,
    /// Oldest week first; each week is Monday..Sunday.
    pub weeks: Vec<Vec<CalendarCell>>,
    pub month_labels: Vec<String>,
    pub year_label: String,
    pub weekday_labels: [&'static str; 7],
    pub streaks: StreakResult,
    pub total_events: u64,
    pub active_days: u32,
}

/// Resolves the window start from `raw_first_activity` and computes the
/// calendar for `[start, today]`.
pub fn build_calendar<I, S>(
    events: I,
    raw_first_activity: &str,
    today: DateKey,
    fallback_days: i64,
) -> ActivityCalendar
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let start = resolve_window_start(raw_first_activity, today, fallback_days);
    let record = aggregate(events);
    calendar_for_window(&record, start, today)
}

/// Computes the calendar for an explicit window. An inverted window yields
/// no weeks and zero streaks.
pub fn calendar_for_window(
    record: &ActivityRecord,
    start: DateKey,
    end: DateKey,
) -> ActivityCalendar {
    let grid = build_grid(start, end);
    let labels = month_labels(&grid);
    let streaks = compute_streaks(record, start, end);

    debug!(
        %start,
        %end,
        weeks = grid.len(),
        longest = streaks.longest,
        current = streaks.current,
        "calendar computed"
    );

    ActivityCalendar {
        start,
        end,
        weeks: resolve_cells(record, &grid),
        month_labels: labels,
        year_label: year_label(start, end),
        weekday_labels: WEEKDAY_LABELS,
        streaks,
        total_events: record.total_between(start, end),
        active_days: record.active_days_between(start, end),
    }
}

fn resolve_cells(record: &ActivityRecord, grid: &Grid) -> Vec<Vec<CalendarCell>> {
    grid.iter()
        .map(|week| {
            week.iter()
                .map(|cell| match cell {
                    GridCell::Date(date) => {
                        let count = record.count(*date);
                        CalendarCell::Day {
                            date: *date,
                            count,
                            tier: classify(i64::from(count)),
                        }
                    }
                    GridCell::Empty => CalendarCell::Empty {},
                })
                .collect()
        })
        .collect()
}
