use chrono::{Datelike, Days, NaiveDate};

use crate::foundation::core::{GRID_COLUMNS, GRID_ROWS, WEEK_START};

/// Most recent [`WEEK_START`] on or before `date` (`date` itself if it already is one).
///
/// Returns `None` only when the result would fall before the earliest representable date.
pub fn sunday_on_or_before(date: NaiveDate) -> Option<NaiveDate> {
    let back = (7 + date.weekday().num_days_from_sunday() - WEEK_START.num_days_from_sunday()) % 7;
    date.checked_sub_days(Days::new(u64::from(back)))
}

/// Calendar dates behind every cell of one year's contribution grid.
///
/// Column 0, row 0 is the anchor: the week start on or before January 1. Cell `(x, y)` is
/// `anchor + 7x + y` days, so cells at either edge may belong to the adjacent years.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalendarGrid {
    year: i32,
    cells: [[NaiveDate; GRID_ROWS]; GRID_COLUMNS],
}

impl CalendarGrid {
    /// Build the grid for `year`.
    ///
    /// Every year the `chrono` calendar can hold in full is accepted; `None` is returned only
    /// when an edge cell would leave that range.
    pub fn for_year(year: i32) -> Option<Self> {
        let jan1 = NaiveDate::from_ymd_opt(year, 1, 1)?;
        let anchor = sunday_on_or_before(jan1)?;

        let mut cells = [[anchor; GRID_ROWS]; GRID_COLUMNS];
        for (x, column) in cells.iter_mut().enumerate() {
            for (y, cell) in column.iter_mut().enumerate() {
                let offset = (7 * x + y) as u64;
                *cell = anchor.checked_add_days(Days::new(offset))?;
            }
        }

        Some(Self { year, cells })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Origin date, `cells[0][0]`.
    pub fn anchor(&self) -> NaiveDate {
        self.cells[0][0]
    }

    /// Date at column `x`, row `y`; `None` outside the grid.
    pub fn date(&self, x: usize, y: usize) -> Option<NaiveDate> {
        self.cells.get(x).and_then(|column| column.get(y)).copied()
    }

    /// Columns (weeks) left to right, each holding its days top to bottom.
    pub fn columns(&self) -> &[[NaiveDate; GRID_ROWS]; GRID_COLUMNS] {
        &self.cells
    }

    /// All dates in `(x then y)` order, which is also chronological order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Whether the date at `(x, y)` falls inside the grid's own year.
    pub fn in_year(&self, x: usize, y: usize) -> bool {
        self.date(x, y).is_some_and(|d| d.year() == self.year)
    }
}

/// Shorthand for [`CalendarGrid::for_year`].
pub fn calendar_grid(year: i32) -> Option<CalendarGrid> {
    CalendarGrid::for_year(year)
}

#[cfg(test)]
#[path = "../../tests/unit/calendar/grid.rs"]
mod tests;
