//! Draw words into the yearly contribution grid.
//!
//! The grid is 53 week columns by 7 weekday rows, the layout used by calendar-year activity
//! displays. A word is turned into a list of dated records in three pure steps:
//!
//! 1. **Rasterize**: `text -> PixelGrid` via an injectable [`TextRasterizer`]
//! 2. **Map**: `year -> CalendarGrid` (column 0 starts on the Sunday on or before January 1)
//! 3. **Schedule**: intersect both grids, drop dates outside the year, sort by timestamp
//!
//! Emitting the records (empty git commits) and previewing counts live in the `emit` layer,
//! which consumes a [`Schedule`] and never feeds back into it.
#![forbid(unsafe_code)]

mod calendar;
mod emit;
mod foundation;
mod plan;
mod raster;
mod schedule;

pub use calendar::grid::{CalendarGrid, calendar_grid, sunday_on_or_before};
pub use emit::git::{GitSink, RecordSink, emit_schedules, is_git_on_path};
pub use emit::preview::{PreviewReport, PreviewRow};
pub use foundation::core::{
    EMIT_HOUR, GRID_COLUMNS, GRID_ROWS, PixelGrid, WEEK_START, emit_time,
};
pub use foundation::error::{ContribError, ContribResult};
pub use plan::mapping::{
    DEFAULT_WORDS, SUPPORTED_YEARS, YearWord, default_mappings, parse_mappings,
};
pub use raster::backend::{RasterBackend, TextRasterizer, create_rasterizer};
pub use raster::bitmap::BitmapFont;
pub use raster::grid::{InkBounds, grid_from_canvas, ink_bounds, rasterize, rasterize_with};
pub use raster::outline::{DEFAULT_SIZE_PX, OutlineRasterizer};
pub use schedule::builder::{
    RECORD_TIME_FORMAT, Schedule, ScheduleEntry, build_schedule, build_schedule_with,
    build_schedules, schedule_from_grid,
};
