use std::{fmt, ops::RangeInclusive, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::foundation::error::{ContribError, ContribResult};

/// Years accepted in `YEAR:WORD` mappings.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1..=9999;

/// Words drawn when no mapping is given, oldest year first.
pub const DEFAULT_WORDS: [&str; 3] = ["LEBRON", "elephanto", "feel"];

/// A word to draw into a given year.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearWord {
    pub year: i32,
    pub word: String,
}

impl YearWord {
    pub fn new(year: i32, word: impl Into<String>) -> Self {
        Self {
            year,
            word: word.into(),
        }
    }
}

impl fmt::Display for YearWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.year, self.word)
    }
}

/// Parses `YEAR:WORD`, splitting on the first `:` only so the word may contain colons.
impl FromStr for YearWord {
    type Err = ContribError;

    fn from_str(s: &str) -> ContribResult<Self> {
        let (year, word) = s
            .split_once(':')
            .ok_or_else(|| ContribError::invalid_mapping(format!("'{s}' is not YEAR:WORD")))?;

        let year: i32 = year.trim().parse().map_err(|e| {
            ContribError::invalid_mapping(format!("'{s}': year '{year}' is not an integer ({e})"))
        })?;
        let year = check_year(year, s)?;

        Ok(Self::new(year, word))
    }
}

/// Parse every mapping or none: the first malformed entry rejects the whole set.
pub fn parse_mappings<I, S>(raw: I) -> ContribResult<Vec<YearWord>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter().map(|s| s.as_ref().parse()).collect()
}

/// The last three full years before `current_year`, paired with [`DEFAULT_WORDS`].
///
/// Every default year must lie in [`SUPPORTED_YEARS`], the same rule `--map` entries follow.
pub fn default_mappings(current_year: i32) -> ContribResult<Vec<YearWord>> {
    let source = format!("current year {current_year}");
    DEFAULT_WORDS
        .iter()
        .zip((1..=DEFAULT_WORDS.len() as i32).rev())
        .map(|(word, back)| {
            let year = current_year.checked_sub(back).ok_or_else(|| {
                ContribError::invalid_mapping(format!(
                    "'{source}': {back} years earlier is not a representable year"
                ))
            })?;
            Ok(YearWord::new(check_year(year, &source)?, *word))
        })
        .collect()
}

fn check_year(year: i32, source: &str) -> ContribResult<i32> {
    if SUPPORTED_YEARS.contains(&year) {
        Ok(year)
    } else {
        Err(ContribError::invalid_mapping(format!(
            "'{source}': year {year} is outside {}..={}",
            SUPPORTED_YEARS.start(),
            SUPPORTED_YEARS.end()
        )))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plan/mapping.rs"]
mod tests;
