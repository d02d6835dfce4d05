//! Numerology chart derivation and year forecasting.
//!
//! This crate provides:
//! - Digit reduction and compound-number formatting
//! - Chaldean name values and the diamond chart built from them
//! - Birthday and compound-number interpretation tables
//! - Chart-year classification and the 7/11/13/15-period year forecast
//!
//! Everything here is pure: no I/O, no shared mutable state. Static tables
//! are read-only and safe to share across threads.

pub mod birthday_data;
pub mod chart_year;
pub mod cipher;
pub mod compound_data;
pub mod diamond;
pub mod error;
pub mod forecast;
pub mod name;
pub mod partition;
pub mod period;
pub mod reduce;

pub use birthday_data::{
    BIRTHDAY_INTERPRETATIONS, BirthdayInterpretation, Planet, birthday_interpretation,
};
pub use chart_year::{ALL_YEAR_TYPES, COLUMN_8_YEARS, ChartYearRegistry, YearEntry, YearType};
pub use cipher::{letter_value, word_value};
pub use compound_data::{
    COMPOUND_INTERPRETATIONS, CompoundInterpretation, compound_interpretation,
    compound_interpretation_for,
};
pub use diamond::{
    DiamondChart, build_chart, circle_value, compute_diamond_chart, compute_diamond_chart_str,
    mid_values, parse_date,
};
pub use error::NumerologyError;
pub use forecast::{
    ForecastInputs, YearPeriod, YearPeriodCalculation, compute_year_forecast, forecast_span,
    year_forecast,
};
pub use name::{name_values, name_words, word_number};
pub use partition::{PeriodRange, current_period_index, period_dates, period_table};
pub use period::{PeriodNumber, PeriodSeeds, period_numbers, seeded_chain};
pub use reduce::{NumberValue, digit_sum, format_compound, reduce};
