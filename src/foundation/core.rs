use std::fmt;

use chrono::{NaiveTime, TimeDelta, Weekday};

/// Number of week columns in the yearly contribution grid.
pub const GRID_COLUMNS: usize = 53;

/// Number of weekday rows in the yearly contribution grid.
pub const GRID_ROWS: usize = 7;

/// Weekday occupying row 0 of every grid column.
pub const WEEK_START: Weekday = Weekday::Sun;

/// Hour of day (UTC) at which every schedule entry is placed.
///
/// Noon keeps the calendar date stable under any display timezone offset up to ±12h.
pub const EMIT_HOUR: i64 = 12;

/// Time of day (UTC) shared by every schedule entry.
pub fn emit_time() -> NaiveTime {
    NaiveTime::MIN + TimeDelta::hours(EMIT_HOUR)
}

/// Lit/unlit cells of the contribution grid, indexed `[row][column]`.
///
/// Dimensions are fixed at [`GRID_ROWS`] x [`GRID_COLUMNS`]; a partial grid cannot be built.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelGrid {
    cells: [[bool; GRID_COLUMNS]; GRID_ROWS],
}

impl Default for PixelGrid {
    fn default() -> Self {
        Self::empty()
    }
}

impl PixelGrid {
    /// All cells unlit.
    pub const fn empty() -> Self {
        Self {
            cells: [[false; GRID_COLUMNS]; GRID_ROWS],
        }
    }

    /// Build a grid with exactly the given `(column, row)` cells lit.
    ///
    /// Out-of-range coordinates are ignored.
    pub fn from_lit_cells(cells: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut grid = Self::empty();
        for (x, y) in cells {
            grid.set(x, y, true);
        }
        grid
    }

    /// Whether cell `(x, y)` is lit. Out-of-range coordinates read as unlit.
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(false)
    }

    /// Set cell `(x, y)`. Out-of-range coordinates are ignored.
    pub fn set(&mut self, x: usize, y: usize, lit: bool) {
        if let Some(cell) = self.cells.get_mut(y).and_then(|row| row.get_mut(x)) {
            *cell = lit;
        }
    }

    /// Rows from top (row 0) to bottom.
    pub fn rows(&self) -> &[[bool; GRID_COLUMNS]; GRID_ROWS] {
        &self.cells
    }

    /// Lit cells as `(column, row)`, column-major (every row of column 0 first).
    pub fn lit_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..GRID_COLUMNS)
            .flat_map(|x| (0..GRID_ROWS).map(move |y| (x, y)))
            .filter(|&(x, y)| self.cells[y][x])
    }

    pub fn lit_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&lit| lit).count()
    }

    pub fn is_blank(&self) -> bool {
        self.lit_count() == 0
    }
}

impl fmt::Display for PixelGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for &lit in row {
                f.write_str(if lit { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for PixelGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PixelGrid {} lit", self.lit_count())?;
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
