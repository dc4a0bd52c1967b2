use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    calendar::grid::CalendarGrid,
    foundation::core::{PixelGrid, emit_time},
    plan::mapping::YearWord,
    raster::{backend::TextRasterizer, bitmap::BitmapFont, grid::rasterize_with},
};

/// Timestamp format handed to record consumers (e.g. `GIT_AUTHOR_DATE`).
pub const RECORD_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S +0000";

/// One dated record to emit.
///
/// `word` and `year` label the record only; ordering is by `timestamp` alone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub timestamp: DateTime<Utc>,
    pub word: String,
    pub year: i32,
}

impl ScheduleEntry {
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    /// `timestamp` rendered with [`RECORD_TIME_FORMAT`].
    pub fn record_time(&self) -> String {
        self.timestamp.format(RECORD_TIME_FORMAT).to_string()
    }

    /// Record message, e.g. `[contrib] HELLO 2021 2021-03-14`.
    pub fn message(&self) -> String {
        format!("[contrib] {} {} {}", self.word, self.year, self.date())
    }
}

/// Entries for one `(word, year)` pair, sorted non-decreasing by timestamp.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub word: String,
    pub year: i32,
    pub entries: Vec<ScheduleEntry>,
}

impl Schedule {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleEntry> {
        self.entries.iter()
    }

    pub fn timestamps(&self) -> impl Iterator<Item = DateTime<Utc>> + '_ {
        self.entries.iter().map(|e| e.timestamp)
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a ScheduleEntry;
    type IntoIter = std::slice::Iter<'a, ScheduleEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Intersect a pixel grid with `year`'s calendar grid.
///
/// Lit cells whose date falls outside `year` are dropped. Entries sit at [`emit_time`] UTC
/// and are stably sorted by timestamp; equal timestamps are kept, not merged.
pub fn schedule_from_grid(word: &str, year: i32, pixels: &PixelGrid) -> Schedule {
    let mut schedule = Schedule {
        word: word.to_string(),
        year,
        entries: Vec::new(),
    };

    let Some(calendar) = CalendarGrid::for_year(year) else {
        tracing::warn!(year, "year is outside the representable calendar; nothing scheduled");
        return schedule;
    };

    let mut bled = 0usize;
    for (x, y) in pixels.lit_cells() {
        let Some(date) = calendar.date(x, y) else {
            continue;
        };
        if date.year() != year {
            bled += 1;
            continue;
        }
        schedule.entries.push(ScheduleEntry {
            timestamp: date.and_time(emit_time()).and_utc(),
            word: word.to_string(),
            year,
        });
    }
    schedule.entries.sort_by_key(|e| e.timestamp);

    tracing::debug!(
        word,
        year,
        lit = pixels.lit_count(),
        bled,
        scheduled = schedule.len(),
        "built schedule"
    );
    schedule
}

/// Rasterize `word` with `rasterizer` and schedule it into `year`.
#[tracing::instrument(level = "debug", skip(rasterizer))]
pub fn build_schedule_with(rasterizer: &dyn TextRasterizer, word: &str, year: i32) -> Schedule {
    let pixels = rasterize_with(rasterizer, word);
    schedule_from_grid(word, year, &pixels)
}

/// [`build_schedule_with`] using the built-in bitmap font.
pub fn build_schedule(word: &str, year: i32) -> Schedule {
    build_schedule_with(&BitmapFont::new(), word, year)
}

/// Build schedules for independent pairs in parallel; output order follows `pairs`.
pub fn build_schedules(rasterizer: &dyn TextRasterizer, pairs: &[YearWord]) -> Vec<Schedule> {
    pairs
        .par_iter()
        .map(|pair| build_schedule_with(rasterizer, &pair.word, pair.year))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/builder.rs"]
mod tests;
