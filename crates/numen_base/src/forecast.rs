//! Year forecast: classifier, period chain and date partition combined.

use chrono::{Datelike, NaiveDate};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::chart_year::{ChartYearRegistry, YearType};
use crate::diamond::DiamondChart;
use crate::error::NumerologyError;
use crate::partition::{PeriodRange, current_period_index, period_dates};
use crate::period::{PeriodNumber, PeriodSeeds, period_numbers};

/// Per-person seeds for forecasting any year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastInputs {
    /// Chart top (reduced birth day), 1..=9.
    pub top: u8,
    /// Chart bottom, reduced part used.
    pub bottom: u32,
    pub birth_year: i32,
    /// Numerological column, 1..=9.
    pub column: u8,
}

impl ForecastInputs {
    pub fn new(top: u8, bottom: u32, birth_year: i32, column: u8) -> Self {
        Self {
            top,
            bottom,
            birth_year,
            column,
        }
    }

    /// Take `top` and `bottom` from a computed chart.
    pub fn from_chart(chart: &DiamondChart, birth_date: NaiveDate, column: u8) -> Self {
        Self::new(chart.top, chart.bottom.raw, birth_date.year(), column)
    }

    /// Validate the inputs.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !(1..=9).contains(&self.top) {
            return Err("top must be in 1..=9");
        }
        if self.bottom == 0 {
            return Err("bottom must be positive");
        }
        if !(1..=9).contains(&self.column) {
            return Err("column must be in 1..=9");
        }
        Ok(())
    }
}

/// One dated period with its number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearPeriod {
    pub number: PeriodNumber,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl YearPeriod {
    pub fn range(&self) -> PeriodRange {
        PeriodRange {
            start: self.start,
            end: self.end,
        }
    }
}

/// Full forecast for one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearPeriodCalculation {
    pub year: i32,
    pub year_type: YearType,
    pub period_count: usize,
    pub numbers: Vec<PeriodNumber>,
    pub periods: Vec<YearPeriod>,
}

impl YearPeriodCalculation {
    /// Index of the period covering `date`, if `date` is in this year.
    pub fn active_index(&self, date: NaiveDate) -> Option<usize> {
        if date.year() != self.year {
            return None;
        }
        current_period_index(date, self.period_count).ok()
    }

    /// Period covering `date`, if `date` is in this year.
    pub fn active_period(&self, date: NaiveDate) -> Option<&YearPeriod> {
        self.active_index(date).and_then(|i| self.periods.get(i))
    }
}

/// Forecast `year` for one person.
pub fn compute_year_forecast(
    year: i32,
    top: u8,
    bottom: u32,
    birth_year: i32,
    column: u8,
) -> Result<YearPeriodCalculation, NumerologyError> {
    year_forecast(year, &ForecastInputs::new(top, bottom, birth_year, column))
}

/// Forecast `year` from bundled inputs.
pub fn year_forecast(
    year: i32,
    inputs: &ForecastInputs,
) -> Result<YearPeriodCalculation, NumerologyError> {
    inputs.validate().map_err(NumerologyError::InvalidInput)?;
    if year < inputs.birth_year {
        return Err(NumerologyError::InvalidInput(
            "forecast year precedes birth year",
        ));
    }
    let registry = ChartYearRegistry::for_column(inputs.column)?;
    registry.ensure_covered(year)?;
    let year_type = registry.classify(year);
    let age = year.abs_diff(inputs.birth_year);

    let mut seeds = PeriodSeeds::new(
        year,
        inputs.top as u32,
        inputs.bottom,
        age,
        inputs.column as u32,
    );
    if year_type != YearType::Regular {
        let exit = registry
            .find_previous(year)
            .ok_or(NumerologyError::MissingChartYear(year))?;
        seeds = seeds.with_exit(exit.value as u32);
    }
    if let Some(enter) = registry.value(year) {
        seeds = seeds.with_enter(enter as u32);
    }

    let numbers = period_numbers(year_type, &seeds);
    let ranges = period_dates(year_type.period_count(), year)?;
    let periods = numbers
        .iter()
        .zip(&ranges)
        .map(|(&number, r)| YearPeriod {
            number,
            start: r.start,
            end: r.end,
        })
        .collect();

    debug!(
        "forecast {year}: {} with {} periods",
        year_type.name(),
        year_type.period_count()
    );
    Ok(YearPeriodCalculation {
        year,
        year_type,
        period_count: year_type.period_count(),
        numbers,
        periods,
    })
}

/// Forecasts for each year of `years`, in order.
pub fn forecast_span(
    inputs: &ForecastInputs,
    years: std::ops::RangeInclusive<i32>,
) -> Result<Vec<YearPeriodCalculation>, NumerologyError> {
    years.map(|y| year_forecast(y, inputs)).collect()
}
