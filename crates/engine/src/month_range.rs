//! Calendar month boundaries.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{EngineError, ResultEngine};

/// Upper bound of the per-day iteration used by the daily statistics.
///
/// Days past the end of a shorter month are still visited and resolve to
/// "no data".
pub const MAX_DAY_OF_MONTH: u32 = 31;

/// One calendar month as `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl MonthRange {
    /// Builds the range for `(year, month)`.
    ///
    /// December ends on January 1st of the following year.
    pub fn new(year: i32, month: u32) -> ResultEngine<Self> {
        if !(1..=12).contains(&month) {
            return Err(EngineError::InvalidMonth(month));
        }
        let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or(EngineError::InvalidYear(year))?;
        let end = if month == 12 {
            year.checked_add(1)
                .and_then(|next| NaiveDate::from_ymd_opt(next, 1, 1))
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        }
        .ok_or(EngineError::InvalidYear(year))?;

        Ok(Self { start, end })
    }

    /// First day of the month (inclusive).
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// First day of the next month (exclusive).
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn year(&self) -> i32 {
        self.start.year()
    }

    pub fn month(&self) -> u32 {
        self.start.month()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }

    pub fn days_in_month(&self) -> u32 {
        // Both bounds are the first of a month, so the difference is 28..=31.
        (self.end - self.start).num_days() as u32
    }

    /// The date of `day` within this month, or `None` when the month has no
    /// such day (e.g. the 31st of April).
    pub fn day(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year(), self.month(), day)
    }
}
