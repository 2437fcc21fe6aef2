use crate::date_key::DateKey;
use crate::grid::{first_date, Grid};

pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// One label per week: the month number when the week's first real date
/// opens a month not shown by the previous week, blank otherwise.
pub fn month_labels(grid: &Grid) -> Vec<String> {
    let mut labels = Vec::with_capacity(grid.len());
    let mut previous_month: Option<u32> = None;

    for week in grid {
        let month = first_date(week).map(DateKey::month);
        let label = match month {
            Some(m) if previous_month != Some(m) => m.to_string(),
            _ => String::new(),
        };
        labels.push(label);
        previous_month = month;
    }
    labels
}

pub fn year_label(start: DateKey, end: DateKey) -> String {
    if start.year() == end.year() {
        start.year().to_string()
    } else {
        format!("{} ~ {}", start.year(), end.year())
    }
}
