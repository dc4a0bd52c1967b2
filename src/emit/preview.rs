use std::fmt;

use serde::Serialize;

use crate::schedule::builder::Schedule;

/// Record count for one `(year, word)` pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PreviewRow {
    pub year: i32,
    pub word: String,
    pub count: usize,
}

/// What a run would emit, without emitting anything.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PreviewReport {
    pub rows: Vec<PreviewRow>,
    pub total: usize,
}

impl PreviewReport {
    pub fn from_schedules(schedules: &[Schedule]) -> Self {
        let rows: Vec<PreviewRow> = schedules
            .iter()
            .map(|s| PreviewRow {
                year: s.year,
                word: s.word.clone(),
                count: s.len(),
            })
            .collect();
        let total = rows.iter().map(|r| r.count).sum();
        Self { rows, total }
    }
}

impl fmt::Display for PreviewReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(
                f,
                "[DRY-RUN] {} '{}': {} commits",
                row.year, row.word, row.count
            )?;
        }
        writeln!(f, "[DRY-RUN] Total would commit: {}", self.total)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/emit/preview.rs"]
mod tests;
