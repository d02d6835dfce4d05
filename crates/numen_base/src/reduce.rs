//! Digit reduction and compound-number formatting.
//!
//! Every derived figure in a chart or forecast is a [`NumberValue`]: the raw
//! pre-reduction sum together with its single-digit reduction.
//!
//! The reducer never preserves 11, 22 or 33. Master-number handling belongs
//! to consumers that want it and is deliberately not folded in here.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NumerologyError;

/// Sum of the decimal digits of `n`.
pub const fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Collapse `n` to a single digit by repeated digit summing.
///
/// Returns a value in [1, 9] for any `n >= 1`, and 0 for 0.
pub const fn reduce(mut n: u32) -> u32 {
    while n >= 10 {
        n = digit_sum(n);
    }
    n
}

/// `"n"` for single digits, `"n/reduce(n)"` otherwise.
pub fn format_compound(n: u32) -> String {
    NumberValue::from_raw(n).to_string()
}

/// A derived figure with its raw sum and single-digit reduction.
///
/// Deserialization rejects pairs where `reduced != reduce(raw)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawNumberValue")]
pub struct NumberValue {
    /// Pre-reduction sum.
    pub raw: u32,
    /// Single digit in [1, 9] (0 only for the zero value).
    pub reduced: u8,
}

impl NumberValue {
    /// Build from a raw sum.
    pub const fn from_raw(raw: u32) -> Self {
        Self {
            raw,
            reduced: reduce(raw) as u8,
        }
    }

    /// Whether the display form carries a `/reduced` suffix.
    pub const fn is_compound(self) -> bool {
        self.raw > 9
    }

    /// New value whose raw part is the sum of both reduced parts.
    pub const fn add_reduced(self, other: NumberValue) -> Self {
        Self::from_raw(self.reduced as u32 + other.reduced as u32)
    }
}

/// Unchecked wire form of [`NumberValue`].
#[derive(Deserialize)]
struct RawNumberValue {
    raw: u32,
    reduced: u8,
}

impl TryFrom<RawNumberValue> for NumberValue {
    type Error = NumerologyError;

    fn try_from(v: RawNumberValue) -> Result<Self, Self::Error> {
        let value = Self::from_raw(v.raw);
        if value.reduced != v.reduced {
            return Err(NumerologyError::InvalidCompound(format!(
                "{}/{}",
                v.raw, v.reduced
            )));
        }
        Ok(value)
    }
}

impl From<u32> for NumberValue {
    fn from(raw: u32) -> Self {
        Self::from_raw(raw)
    }
}

impl Display for NumberValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_compound() {
            write!(f, "{}/{}", self.raw, self.reduced)
        } else {
            write!(f, "{}", self.raw)
        }
    }
}

impl FromStr for NumberValue {
    type Err = NumerologyError;

    /// Parse `"7"` or `"16/7"`. The reduced part must agree with the raw part.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || NumerologyError::InvalidCompound(s.to_string());
        let trimmed = s.trim();
        match trimmed.split_once('/') {
            None => {
                let raw: u32 = trimmed.parse().map_err(|_| invalid())?;
                if raw > 9 {
                    return Err(invalid());
                }
                Ok(Self::from_raw(raw))
            }
            Some((raw, reduced)) => {
                let raw: u32 = raw.trim().parse().map_err(|_| invalid())?;
                let reduced: u32 = reduced.trim().parse().map_err(|_| invalid())?;
                let value = Self::from_raw(raw);
                if raw <= 9 || value.reduced as u32 != reduced {
                    return Err(invalid());
                }
                Ok(value)
            }
        }
    }
}
