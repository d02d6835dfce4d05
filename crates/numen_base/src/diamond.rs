//! Diamond chart derivation from a name and birth date.
//!
//! Layout (top to bottom): `top` seed, name values with their upper mids,
//! the two circles, the middle-word circles, lower mids, `bottom`.

use chrono::{Datelike, NaiveDate};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::NumerologyError;
use crate::name::name_values;
use crate::reduce::{NumberValue, reduce};

/// Word counts for which the middle circles are defined.
pub const MIDDLE_CIRCLE_WORDS: std::ops::RangeInclusive<usize> = 3..=4;

/// Full set of derived chart numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiamondChart {
    /// Reduced day of month.
    pub top: u8,
    /// Sum of the name values' reduced parts.
    pub bottom: NumberValue,
    /// One value per name word.
    pub name_values: Vec<NumberValue>,
    pub upper_mid: Vec<NumberValue>,
    pub lower_mid: Vec<NumberValue>,
    pub upper_circle: Option<NumberValue>,
    pub lower_circle: Option<NumberValue>,
    /// Middle words offset by the upper circle (3-4 word names only).
    pub upper_lower_circle: Option<Vec<NumberValue>>,
    /// Middle words offset by the lower circle (3-4 word names only).
    pub lower_lower_circle: Option<Vec<NumberValue>>,
}

/// Offset each value's reduced part by `addend`'s reduced part.
pub fn mid_values(values: &[NumberValue], addend: NumberValue) -> Vec<NumberValue> {
    values.iter().map(|v| v.add_reduced(addend)).collect()
}

/// First plus last of a mid sequence. `None` when empty.
pub fn circle_value(mid: &[NumberValue]) -> Option<NumberValue> {
    let first = mid.first()?;
    let last = mid.last()?;
    Some(first.add_reduced(*last))
}

/// Values strictly between the first and last word.
fn middle_values(values: &[NumberValue]) -> &[NumberValue] {
    if values.len() > 2 {
        &values[1..values.len() - 1]
    } else {
        &[]
    }
}

/// Assemble the chart from precomputed name values and the `top` seed.
pub fn build_chart(top: u8, values: Vec<NumberValue>) -> DiamondChart {
    let top_value = NumberValue::from_raw(top as u32);
    let bottom = NumberValue::from_raw(values.iter().map(|v| v.reduced as u32).sum());

    let upper_mid = mid_values(&values, top_value);
    let lower_mid = mid_values(&values, bottom);
    let upper_circle = circle_value(&upper_mid);
    let lower_circle = circle_value(&lower_mid);

    let (upper_lower_circle, lower_lower_circle) = match (upper_circle, lower_circle) {
        (Some(uc), Some(lc)) if MIDDLE_CIRCLE_WORDS.contains(&values.len()) => {
            let middle = middle_values(&values);
            (Some(mid_values(middle, uc)), Some(mid_values(middle, lc)))
        }
        _ => (None, None),
    };

    DiamondChart {
        top,
        bottom,
        name_values: values,
        upper_mid,
        lower_mid,
        upper_circle,
        lower_circle,
        upper_lower_circle,
        lower_lower_circle,
    }
}

/// Derive the diamond chart for `name` born on `birth_date`.
pub fn compute_diamond_chart(
    name: &str,
    birth_date: Option<NaiveDate>,
) -> Result<DiamondChart, NumerologyError> {
    let birth_date = birth_date.ok_or(NumerologyError::InvalidInput("birth date is required"))?;
    let top = reduce(birth_date.day()) as u8;
    let values = name_values(name, top as u32);
    if values.is_empty() {
        return Err(NumerologyError::InvalidInput("name has no words"));
    }
    if !(2..=4).contains(&values.len()) {
        warn!(
            "name has {} words; middle chart positions are left empty",
            values.len()
        );
    }
    let chart = build_chart(top, values);
    debug!(
        "chart top={} bottom={} words={}",
        chart.top,
        chart.bottom,
        chart.name_values.len()
    );
    Ok(chart)
}

/// Parse `YYYY-MM-DD` and derive the chart.
pub fn compute_diamond_chart_str(
    name: &str,
    birth_date: &str,
) -> Result<DiamondChart, NumerologyError> {
    let date = parse_date(birth_date)?;
    compute_diamond_chart(name, Some(date))
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, NumerologyError> {
    Ok(NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")?)
}
