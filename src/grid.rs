use crate::date_key::DateKey;

pub const DAYS_PER_WEEK: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    Date(DateKey),
    Empty,
}

impl GridCell {
    pub fn date(&self) -> Option<DateKey> {
        match self {
            GridCell::Date(date) => Some(*date),
            GridCell::Empty => None,
        }
    }
}

/// One calendar week, Monday first.
pub type Week = [GridCell; DAYS_PER_WEEK];

/// Weeks ordered oldest first.
pub type Grid = Vec<Week>;

/// Lays `[start, end]` out into whole Monday-first weeks. Slots before `start`
/// and after `end` are [`GridCell::Empty`]. An inverted window yields an
/// empty grid.
pub fn build_grid(start: DateKey, end: DateKey) -> Grid {
    if start > end {
        return Vec::new();
    }

    let offset = start.day_of_week() as usize;
    let total_days = start.days_until(end) as usize + 1;
    let total_cells = (offset + total_days).div_ceil(DAYS_PER_WEEK) * DAYS_PER_WEEK;
    let first_slot = start.sub_days(offset as i64);

    let mut grid = Vec::with_capacity(total_cells / DAYS_PER_WEEK);
    let mut week = [GridCell::Empty; DAYS_PER_WEEK];
    for slot in 0..total_cells {
        let date = first_slot.add_days(slot as i64);
        week[slot % DAYS_PER_WEEK] = if date >= start && date <= end {
            GridCell::Date(date)
        } else {
            GridCell::Empty
        };
        if slot % DAYS_PER_WEEK == DAYS_PER_WEEK - 1 {
            grid.push(week);
            week = [GridCell::Empty; DAYS_PER_WEEK];
        }
    }
    grid
}

/// First real date of a week, if any.
pub fn first_date(week: &Week) -> Option<DateKey> {
    week.iter().find_map(GridCell::date)
}
