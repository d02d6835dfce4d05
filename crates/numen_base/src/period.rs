//! Period numbers: one seeded reduction chain for all four year types.
//!
//! The chain alternates seeds with derived values. Starting from the first
//! seed, every further seed is emitted as-is and then folded into the running
//! value as `reduce(running) + seed`:
//!
//! ```text
//! seeds   s1  s2      s3      s4   ...
//! output  s1  s2  d2  s3  d3  s4  d4 ...
//! d2 = reduce(s1) + s2,  dk = reduce(d(k-1)) + sk
//! ```
//!
//! Seeds are reduced on entry, so any `u32` is accepted and the running
//! value never exceeds 18.
//!
//! `k` seeds give `2k - 1` numbers: 4, 6, 7 and 8 seeds give the 7, 11, 13
//! and 15 periods.

use log::debug;

use crate::chart_year::YearType;
use crate::reduce::{NumberValue, digit_sum, reduce};

/// Same shape as every other derived figure.
pub type PeriodNumber = NumberValue;

/// Inputs needed to build any year type's seed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodSeeds {
    /// Target year's reduced digit sum.
    pub year_value: u32,
    pub top: u32,
    pub bottom: u32,
    /// Value of the previous chart year.
    pub exit_value: u32,
    /// Value of the target year itself (chart years only).
    pub enter_value: u32,
    pub column: u32,
    /// Reduced age in the target year.
    pub age: u32,
}

impl PeriodSeeds {
    /// `year` is the calendar year and `age` the age in years; all seeds are reduced.
    pub fn new(year: i32, top: u32, bottom: u32, age: u32, column: u32) -> Self {
        Self {
            year_value: reduce(digit_sum(year.unsigned_abs())),
            top: reduce(top),
            bottom: reduce(bottom),
            exit_value: 0,
            enter_value: 0,
            column: reduce(column),
            age: reduce(age),
        }
    }

    pub fn with_exit(mut self, exit_value: u32) -> Self {
        self.exit_value = reduce(exit_value);
        self
    }

    pub fn with_enter(mut self, enter_value: u32) -> Self {
        self.enter_value = reduce(enter_value);
        self
    }

    /// Ordered seed list for `year_type`.
    pub fn seed_list(&self, year_type: YearType) -> Vec<u32> {
        let mut list = vec![self.year_value, self.top, self.bottom];
        match year_type {
            YearType::Regular => {}
            YearType::BeforeChart => list.push(self.exit_value),
            YearType::ChartWithoutNext => list.extend([self.exit_value, self.enter_value]),
            // The entry value is applied twice when the next year is also a chart year.
            YearType::ChartWithNext => {
                list.extend([self.exit_value, self.enter_value, self.enter_value])
            }
        }
        if year_type != YearType::Regular {
            list.push(self.column);
        }
        list.push(self.age);
        list
    }
}

/// Run the seeded reduction chain. Empty seeds give an empty chain.
pub fn seeded_chain(seeds: &[u32]) -> Vec<PeriodNumber> {
    let Some((&first, rest)) = seeds.split_first() else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(seeds.len() * 2 - 1);
    let first = reduce(first);
    out.push(PeriodNumber::from_raw(first));
    let mut running = first;
    for &seed in rest {
        let seed = reduce(seed);
        out.push(PeriodNumber::from_raw(seed));
        running = reduce(running) + seed;
        out.push(PeriodNumber::from_raw(running));
    }
    out
}

/// Period numbers for `year_type`.
pub fn period_numbers(year_type: YearType, seeds: &PeriodSeeds) -> Vec<PeriodNumber> {
    let list = seeds.seed_list(year_type);
    debug!("{} seeds {:?}", year_type.name(), list);
    let numbers = seeded_chain(&list);
    debug_assert_eq!(numbers.len(), year_type.period_count());
    numbers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart_year::ALL_YEAR_TYPES;

    fn shown(v: &[PeriodNumber]) -> Vec<String> {
        v.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn empty_chain() {
        assert!(seeded_chain(&[]).is_empty());
    }

    #[test]
    fn single_seed_chain() {
        assert_eq!(shown(&seeded_chain(&[4])), vec!["4"]);
    }

    #[test]
    fn chain_reduces_running_value() {
        // 9, 2, 11, 1, 2+1=3
        assert_eq!(shown(&seeded_chain(&[9, 2, 1])), vec!["9", "2", "11/2", "1", "3"]);
    }

    #[test]
    fn chain_accepts_any_seed() {
        // u32::MAX = 4294967295 -> 57 -> 12 -> 3
        assert_eq!(
            shown(&seeded_chain(&[1, u32::MAX])),
            vec!["1", "3", "4"]
        );
        assert_eq!(shown(&seeded_chain(&[u32::MAX, 28])), vec!["3", "1", "4"]);
    }

    #[test]
    fn lengths_match_year_types() {
        let seeds = PeriodSeeds::new(2030, 4, 7, 33, 8).with_exit(3).with_enter(5);
        for t in ALL_YEAR_TYPES {
            assert_eq!(period_numbers(t, &seeds).len(), t.period_count());
        }
    }

    #[test]
    fn seeds_are_reduced() {
        let s = PeriodSeeds::new(2026, 11, 21, 51, 8).with_exit(14);
        assert_eq!(s.year_value, 1);
        assert_eq!(s.top, 2);
        assert_eq!(s.bottom, 3);
        assert_eq!(s.age, 6);
        assert_eq!(s.exit_value, 5);
    }

    #[test]
    fn repeated_enter_value_in_chart_with_next() {
        let s = PeriodSeeds::new(2026, 2, 1, 51, 8).with_exit(5).with_enter(1);
        let list = s.seed_list(YearType::ChartWithNext);
        assert_eq!(list, vec![1, 2, 1, 5, 1, 1, 8, 6]);
    }
}
