//! Error types for numerology calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from chart derivation and year forecasting.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NumerologyError {
    /// Caller-supplied value is out of its valid domain.
    InvalidInput(&'static str),
    /// Birth or query date could not be parsed or constructed.
    InvalidDate(String),
    /// No chart-year table exists for the requested column.
    UnknownColumn(u8),
    /// Year type needs a previous chart year but the table has none.
    MissingChartYear(i32),
    /// Year lies outside the span the column table covers.
    YearOutsideRegistry(i32),
    /// Period count is not one of 7, 11, 13, 15.
    InvalidPeriodCount(usize),
    /// Compound display string is malformed or inconsistent.
    InvalidCompound(String),
}

impl Display for NumerologyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
            Self::UnknownColumn(c) => write!(f, "no chart-year table for column {c}"),
            Self::MissingChartYear(y) => {
                write!(f, "no chart year precedes {y} in the column table")
            }
            Self::YearOutsideRegistry(y) => {
                write!(f, "year {y} is outside the column's chart-year table")
            }
            Self::InvalidPeriodCount(n) => {
                write!(f, "unsupported period count {n} (expected 7, 11, 13 or 15)")
            }
            Self::InvalidCompound(s) => write!(f, "invalid compound number: {s:?}"),
        }
    }
}

impl Error for NumerologyError {}

impl From<chrono::ParseError> for NumerologyError {
    fn from(e: chrono::ParseError) -> Self {
        Self::InvalidDate(e.to_string())
    }
}
