use crate::aggregate::ActivityRecord;
use crate::date_key::DateKey;
use serde::Serialize;
use std::collections::HashSet;
use tracing::warn;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StreakResult {
    pub longest: u32,
    pub current: u32,
}

/// Longest run of active days inside `[start, end]` and the run ending on
/// `end`. An inverted window has no streaks.
pub fn compute_streaks(record: &ActivityRecord, start: DateKey, end: DateKey) -> StreakResult {
    if start > end {
        return StreakResult::default();
    }

    let active: HashSet<DateKey> = days(start, end)
        .filter(|day| record.is_active(*day))
        .collect();

    let longest = longest_run(&active, start, end);
    let current = trailing_run(&active, start, end);
    repair(StreakResult { longest, current })
}

fn longest_run(active: &HashSet<DateKey>, start: DateKey, end: DateKey) -> u32 {
    let mut longest = 0;
    let mut run = 0;
    for day in days(start, end) {
        if active.contains(&day) {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    longest
}

fn trailing_run(active: &HashSet<DateKey>, start: DateKey, end: DateKey) -> u32 {
    let mut run = 0;
    let mut day = end;
    while day >= start && active.contains(&day) {
        run += 1;
        day = day.sub_days(1);
    }
    run
}

// Unreachable while both passes read the same active set: any trailing run
// is also seen by the forward pass.
fn repair(result: StreakResult) -> StreakResult {
    if result.current > 0 && result.longest == 0 {
        warn!(current = result.current, "current streak without longest streak, repairing");
        return StreakResult {
            longest: result.current,
            current: result.current,
        };
    }
    result
}

fn days(start: DateKey, end: DateKey) -> impl Iterator<Item = DateKey> {
    let len = start.days_until(end).max(-1) + 1;
    (0..len).map(move |n| start.add_days(n))
}
