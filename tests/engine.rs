use activity_calendar::aggregate::{aggregate, resolve_window_start, DEFAULT_FALLBACK_DAYS};
use activity_calendar::calendar::{build_calendar, calendar_for_window, CalendarCell};
use activity_calendar::grid::build_grid;
use activity_calendar::labels::month_labels;
use activity_calendar::streak::{compute_streaks, StreakResult};
use activity_calendar::tier::Tier;
use activity_calendar::DateKey;

fn date(y: i32, m: u32, d: u32) -> DateKey {
    DateKey::from_ymd(y, m, d).expect("valid date")
}

fn real_cells(cells: &[Vec<CalendarCell>]) -> Vec<&CalendarCell> {
    cells.iter().flatten().filter(|cell| cell.date().is_some()).collect()
}

#[test]
fn single_day_window_with_one_event() {
    let day = date(2024, 1, 1);
    let calendar = build_calendar(
        ["2024-01-01T09:00:00+00:00"],
        "2024-01-01",
        day,
        DEFAULT_FALLBACK_DAYS,
    );

    assert_eq!(calendar.weeks.len(), 1);
    assert_eq!(
        calendar.weeks[0][0],
        CalendarCell::Day {
            date: day,
            count: 1,
            tier: Tier::Low
        }
    );
    assert_eq!(calendar.streaks, StreakResult { longest: 1, current: 1 });
}

#[test]
fn week_without_events_is_all_none() {
    let start = date(2024, 1, 1);
    let end = date(2024, 1, 7);
    let calendar = calendar_for_window(&aggregate(Vec::<String>::new()), start, end);

    assert_eq!(calendar.streaks, StreakResult { longest: 0, current: 0 });
    let cells = real_cells(&calendar.weeks);
    assert_eq!(cells.len(), 7);
    assert!(cells.iter().all(|cell| cell.tier() == Some(Tier::None)));
}

#[test]
fn gap_on_fifth_splits_ten_day_window() {
    let start = date(2024, 1, 1);
    let end = date(2024, 1, 10);
    let events: Vec<String> = (0..10)
        .map(|n| start.add_days(n))
        .filter(|day| *day != date(2024, 1, 5))
        .map(|day| format!("{day}T12:00:00Z"))
        .collect();

    let record = aggregate(&events);
    assert_eq!(
        compute_streaks(&record, start, end),
        StreakResult { longest: 5, current: 5 }
    );

    // Same data viewed through a window ending on the gap.
    assert_eq!(
        compute_streaks(&record, start, date(2024, 1, 5)),
        StreakResult { longest: 4, current: 0 }
    );
}

#[test]
fn malformed_first_activity_falls_back_six_days() {
    let today = date(2024, 6, 15);
    assert_eq!(
        resolve_window_start("not-a-date", today, DEFAULT_FALLBACK_DAYS),
        date(2024, 6, 9)
    );

    let calendar = build_calendar(Vec::<String>::new(), "not-a-date", today, DEFAULT_FALLBACK_DAYS);
    assert_eq!(calendar.start, date(2024, 6, 9));
    assert_eq!(real_cells(&calendar.weeks).len(), 7);
}

#[test]
fn month_labels_suppress_repeats() {
    let grid = build_grid(date(2024, 3, 4), date(2024, 4, 14));
    assert_eq!(month_labels(&grid), vec!["3", "", "", "", "4", ""]);
}

#[test]
fn year_label_for_window_crossing_new_year() {
    let today = date(2024, 1, 2);
    let calendar = build_calendar(["2023-12-30"], "2023-12-30", today, DEFAULT_FALLBACK_DAYS);
    assert_eq!(calendar.year_label, "2023 ~ 2024");
    assert_eq!(calendar.month_labels, vec!["12", "1"]);
}

#[test]
fn pipeline_is_idempotent() {
    let events = ["2024-02-01", "2024-02-01T10:00:00Z", "2024-02-03", "bad", "2024-02-10 08:00"];
    let first = build_calendar(events, "2024-02-01T00:00:00+09:00", date(2024, 2, 12), 6);
    let second = build_calendar(events, "2024-02-01T00:00:00+09:00", date(2024, 2, 12), 6);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("serialize"),
        serde_json::to_string(&second).expect("serialize")
    );
}

#[test]
fn streak_bounds_hold_across_windows() {
    let events: Vec<String> = (0..90)
        .filter(|n| n % 3 != 0 || n % 7 == 0)
        .map(|n| date(2024, 1, 1).add_days(n).key())
        .collect();
    let record = aggregate(&events);

    for from in (0..90).step_by(5) {
        for len in 0..40 {
            let start = date(2024, 1, 1).add_days(from);
            let end = start.add_days(len);
            let streaks = compute_streaks(&record, start, end);
            assert!(streaks.current <= streaks.longest);
            assert!(i64::from(streaks.longest) <= len + 1);
        }
    }
}
