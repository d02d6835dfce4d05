//! Chart-year registry and year-type classification.
//!
//! A column's chart years recur roughly every seven years, sometimes as a
//! pair of consecutive years. Whether the target year is a chart year, and
//! whether the next one follows immediately, decides how many periods the
//! forecast has.
//!
//! Only column 8 has a table. Other columns are reported as
//! [`NumerologyError::UnknownColumn`] rather than answered from column 8.
//! A table also has a covered span; forecasts outside it are refused with
//! [`NumerologyError::YearOutsideRegistry`].

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::NumerologyError;

/// One chart year and its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearEntry {
    pub year: i32,
    pub value: u8,
}

const fn e(year: i32, value: u8) -> YearEntry {
    YearEntry { year, value }
}

/// Column 8 chart years, ascending.
///
/// Only entries that are pinned down by known forecasts are listed. The
/// entry before 2026 is the exit year for 2025 and 2026.
pub const COLUMN_8_YEARS: [YearEntry; 3] = [e(2021, 5), e(2026, 1), e(2027, 2)];

/// Years whose chart status and neighbours column 8 fully determines.
pub const COLUMN_8_COVERED: (i32, i32) = (2022, 2027);

/// Temporal category of a target year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YearType {
    /// Not a chart year; next year is not one either.
    Regular,
    /// Not a chart year; next year is.
    BeforeChart,
    /// Chart year followed by another chart year.
    ChartWithNext,
    /// Chart year not followed by another.
    ChartWithoutNext,
}

/// All year types in order of period count.
pub const ALL_YEAR_TYPES: [YearType; 4] = [
    YearType::Regular,
    YearType::BeforeChart,
    YearType::ChartWithoutNext,
    YearType::ChartWithNext,
];

impl YearType {
    /// Number of forecast periods.
    pub const fn period_count(self) -> usize {
        match self {
            Self::Regular => 7,
            Self::BeforeChart => 11,
            Self::ChartWithoutNext => 13,
            Self::ChartWithNext => 15,
        }
    }

    /// Inverse of [`period_count`](Self::period_count).
    pub fn from_period_count(count: usize) -> Option<Self> {
        ALL_YEAR_TYPES
            .iter()
            .copied()
            .find(|t| t.period_count() == count)
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::BeforeChart => "Before chart",
            Self::ChartWithNext => "Chart with next",
            Self::ChartWithoutNext => "Chart without next",
        }
    }
}

/// Sorted chart-year table for one column.
#[derive(Debug, Clone, Copy)]
pub struct ChartYearRegistry {
    pub column: u8,
    entries: &'static [YearEntry],
    first_year: i32,
    last_year: i32,
}

impl ChartYearRegistry {
    /// Table for `column` (1..=9).
    pub fn for_column(column: u8) -> Result<Self, NumerologyError> {
        match column {
            8 => Ok(Self {
                column,
                entries: &COLUMN_8_YEARS,
                first_year: COLUMN_8_COVERED.0,
                last_year: COLUMN_8_COVERED.1,
            }),
            1..=9 => Err(NumerologyError::UnknownColumn(column)),
            _ => Err(NumerologyError::InvalidInput("column must be in 1..=9")),
        }
    }

    pub fn entries(&self) -> &'static [YearEntry] {
        self.entries
    }

    /// Years this table can classify and forecast.
    pub fn covered(&self) -> std::ops::RangeInclusive<i32> {
        self.first_year..=self.last_year
    }

    /// `Ok` when `year` lies in the covered span.
    pub fn ensure_covered(&self, year: i32) -> Result<(), NumerologyError> {
        if self.covered().contains(&year) {
            Ok(())
        } else {
            Err(NumerologyError::YearOutsideRegistry(year))
        }
    }

    pub fn is_chart_year(&self, year: i32) -> bool {
        self.entry(year).is_some()
    }

    pub fn entry(&self, year: i32) -> Option<YearEntry> {
        self.entries
            .binary_search_by_key(&year, |e| e.year)
            .ok()
            .map(|i| self.entries[i])
    }

    /// Chart value of `year`, if it is a chart year.
    pub fn value(&self, year: i32) -> Option<u8> {
        self.entry(year).map(|e| e.value)
    }

    /// Latest chart year strictly before `year`.
    pub fn find_previous(&self, year: i32) -> Option<YearEntry> {
        let idx = self.entries.partition_point(|e| e.year < year);
        idx.checked_sub(1).map(|i| self.entries[i])
    }

    /// Earliest chart year strictly after `year`.
    pub fn find_next(&self, year: i32) -> Option<YearEntry> {
        let idx = self.entries.partition_point(|e| e.year <= year);
        self.entries.get(idx).copied()
    }

    /// Classify `year` against this column's entries.
    ///
    /// Total over all years. Outside [`covered`](Self::covered) the answer
    /// only reflects the listed entries; callers that need a trustworthy
    /// result check [`ensure_covered`](Self::ensure_covered) first.
    pub fn classify(&self, year: i32) -> YearType {
        let next_is_adjacent = self
            .find_next(year)
            .is_some_and(|n| Some(n.year) == year.checked_add(1));
        let year_type = match (self.is_chart_year(year), next_is_adjacent) {
            (false, true) => YearType::BeforeChart,
            (false, false) => YearType::Regular,
            (true, true) => YearType::ChartWithNext,
            (true, false) => YearType::ChartWithoutNext,
        };
        debug!(
            "column {} year {year} classified as {}",
            self.column,
            year_type.name()
        );
        year_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col8() -> ChartYearRegistry {
        ChartYearRegistry::for_column(8).unwrap()
    }

    #[test]
    fn table_sorted_and_values_in_range() {
        for w in COLUMN_8_YEARS.windows(2) {
            assert!(w[0].year < w[1].year);
        }
        for e in COLUMN_8_YEARS {
            assert!((1..=9).contains(&e.value));
        }
    }

    #[test]
    fn entries_sit_around_covered_span() {
        let (first, last) = COLUMN_8_COVERED;
        assert!(first <= last);
        assert!(COLUMN_8_YEARS[0].year < first);
        assert!(COLUMN_8_YEARS.iter().all(|e| e.year <= last));
    }

    #[test]
    fn years_outside_span_are_refused() {
        let r = col8();
        assert!(r.ensure_covered(2022).is_ok());
        assert!(r.ensure_covered(2027).is_ok());
        for year in [1984, 2021, 2028, 2040, 2100] {
            assert_eq!(
                r.ensure_covered(year).unwrap_err(),
                NumerologyError::YearOutsideRegistry(year)
            );
        }
    }

    #[test]
    fn unknown_column_is_explicit() {
        assert_eq!(
            ChartYearRegistry::for_column(3).unwrap_err(),
            NumerologyError::UnknownColumn(3)
        );
        assert!(matches!(
            ChartYearRegistry::for_column(0),
            Err(NumerologyError::InvalidInput(_))
        ));
    }

    #[test]
    fn previous_and_next_are_strict() {
        let r = col8();
        assert_eq!(r.find_previous(2026).map(|e| e.year), Some(2021));
        assert_eq!(r.find_next(2026).map(|e| e.year), Some(2027));
        assert_eq!(r.find_previous(2025).map(|e| e.year), Some(2021));
        assert_eq!(r.find_next(2022).map(|e| e.year), Some(2026));
        assert_eq!(r.find_previous(2021), None);
        assert_eq!(r.find_next(2027), None);
    }

    #[test]
    fn value_lookup() {
        let r = col8();
        assert_eq!(r.value(2026), Some(1));
        assert_eq!(r.value(2025), None);
    }

    #[test]
    fn classification_around_2026() {
        let r = col8();
        assert_eq!(r.classify(2022), YearType::Regular);
        assert_eq!(r.classify(2024), YearType::Regular);
        assert_eq!(r.classify(2025), YearType::BeforeChart);
        assert_eq!(r.classify(2026), YearType::ChartWithNext);
        assert_eq!(r.classify(2027), YearType::ChartWithoutNext);
        assert_eq!(r.classify(2028), YearType::Regular);
    }

    #[test]
    fn classification_is_total() {
        let r = col8();
        for year in [i32::MIN, -1, 0, 1, 1900, 2100, i32::MAX - 1, i32::MAX] {
            let t = r.classify(year);
            assert!(ALL_YEAR_TYPES.contains(&t));
        }
    }

    #[test]
    fn period_count_roundtrip() {
        for t in ALL_YEAR_TYPES {
            assert_eq!(YearType::from_period_count(t.period_count()), Some(t));
        }
        assert_eq!(YearType::from_period_count(8), None);
    }
}
