//! Book row generation.

use std::ops::RangeInclusive;

use crate::config::LoadConfig;

/// Generated book ready for database insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRow {
    pub title: String,
    pub author: String,
    pub year: i32,
}

impl BookRow {
    /// Builds the `n`th book of a run.
    pub fn numbered(n: u64, year: i32) -> Self {
        Self {
            title: format!("Title {n}"),
            author: format!("Author {n}"),
            year,
        }
    }
}

/// Lazily yields `(n, BookRow)` for `n` in `1..=row_count`.
///
/// Rows are built one at a time, so a million-row run never holds more than
/// one of them.
#[derive(Debug, Clone)]
pub struct BookGenerator {
    numbers: RangeInclusive<u64>,
    year: i32,
}

impl BookGenerator {
    pub fn new(config: &LoadConfig) -> Self {
        Self {
            numbers: 1..=config.row_count,
            year: config.year,
        }
    }
}

impl Iterator for BookGenerator {
    type Item = (u64, BookRow);

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.numbers.next()?;
        Some((n, BookRow::numbered(n, self.year)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.numbers.size_hint()
    }
}
