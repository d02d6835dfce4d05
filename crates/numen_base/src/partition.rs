//! Fixed calendar partitions of a year into 7, 11, 13 or 15 periods.
//!
//! Segments are near-equal day counts laid over a 365-day year; the spare
//! days go to the last segments. Leap years are not adjusted: February 29
//! simply falls inside whichever segment spans it.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::NumerologyError;

/// `(start_month, start_day, end_month, end_day)`, both ends inclusive.
pub type MonthDaySpan = (u32, u32, u32, u32);

/// 52-day segments, last one 53.
pub const PERIODS_7: [MonthDaySpan; 7] = [
    (1, 1, 2, 21),
    (2, 22, 4, 14),
    (4, 15, 6, 5),
    (6, 6, 7, 27),
    (7, 28, 9, 17),
    (9, 18, 11, 8),
    (11, 9, 12, 31),
];

/// 33-day segments, last two 34.
pub const PERIODS_11: [MonthDaySpan; 11] = [
    (1, 1, 2, 2),
    (2, 3, 3, 7),
    (3, 8, 4, 9),
    (4, 10, 5, 12),
    (5, 13, 6, 14),
    (6, 15, 7, 17),
    (7, 18, 8, 19),
    (8, 20, 9, 21),
    (9, 22, 10, 24),
    (10, 25, 11, 27),
    (11, 28, 12, 31),
];

/// 28-day segments, last one 29.
pub const PERIODS_13: [MonthDaySpan; 13] = [
    (1, 1, 1, 28),
    (1, 29, 2, 25),
    (2, 26, 3, 25),
    (3, 26, 4, 22),
    (4, 23, 5, 20),
    (5, 21, 6, 17),
    (6, 18, 7, 15),
    (7, 16, 8, 12),
    (8, 13, 9, 9),
    (9, 10, 10, 7),
    (10, 8, 11, 4),
    (11, 5, 12, 2),
    (12, 3, 12, 31),
];

/// 24-day segments, last five 25.
pub const PERIODS_15: [MonthDaySpan; 15] = [
    (1, 1, 1, 24),
    (1, 25, 2, 17),
    (2, 18, 3, 13),
    (3, 14, 4, 6),
    (4, 7, 4, 30),
    (5, 1, 5, 24),
    (5, 25, 6, 17),
    (6, 18, 7, 11),
    (7, 12, 8, 4),
    (8, 5, 8, 28),
    (8, 29, 9, 22),
    (9, 23, 10, 17),
    (10, 18, 11, 11),
    (11, 12, 12, 6),
    (12, 7, 12, 31),
];

/// Month/day table for a period count.
pub fn period_table(count: usize) -> Result<&'static [MonthDaySpan], NumerologyError> {
    match count {
        7 => Ok(&PERIODS_7),
        11 => Ok(&PERIODS_11),
        13 => Ok(&PERIODS_13),
        15 => Ok(&PERIODS_15),
        _ => Err(NumerologyError::InvalidPeriodCount(count)),
    }
}

/// Inclusive date range of one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl PeriodRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Inclusive length in days.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl std::fmt::Display for PeriodRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} .. {}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate, NumerologyError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| NumerologyError::InvalidDate(format!("{year}-{month:02}-{day:02}")))
}

/// Period date ranges of `year` for a period count.
pub fn period_dates(count: usize, year: i32) -> Result<Vec<PeriodRange>, NumerologyError> {
    period_table(count)?
        .iter()
        .map(|&(sm, sd, em, ed)| {
            Ok(PeriodRange {
                start: ymd(year, sm, sd)?,
                end: ymd(year, em, ed)?,
            })
        })
        .collect()
}

/// Index of the period active on `date`.
///
/// Scans end dates in order and returns the first period ending on or after
/// `date`; the last index when none does.
pub fn current_period_index(date: NaiveDate, count: usize) -> Result<usize, NumerologyError> {
    let table = period_table(count)?;
    let year = date.year();
    for (i, &(_, _, em, ed)) in table.iter().enumerate() {
        if ymd(year, em, ed)? >= date {
            return Ok(i);
        }
    }
    Ok(table.len() - 1)
}
