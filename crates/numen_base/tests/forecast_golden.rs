//! Golden year forecasts for a person born 1975-03-29 (top 2, bottom 1, column 8).

use chrono::NaiveDate;
use numen_base::{
    NumerologyError, YearType, compute_year_forecast, current_period_index, period_dates,
};

const TOP: u8 = 2;
const BOTTOM: u32 = 1;
const BIRTH_YEAR: i32 = 1975;
const COLUMN: u8 = 8;

fn displays(year: i32) -> (YearType, Vec<String>) {
    let f = compute_year_forecast(year, TOP, BOTTOM, BIRTH_YEAR, COLUMN).unwrap();
    (f.year_type, f.numbers.iter().map(|n| n.to_string()).collect())
}

#[test]
fn golden_2022_regular() {
    let (t, nums) = displays(2022);
    assert_eq!(t, YearType::Regular);
    assert_eq!(nums, ["6", "2", "8", "1", "9", "2", "11/2"]);
}

#[test]
fn golden_2023_regular() {
    let (t, nums) = displays(2023);
    assert_eq!(t, YearType::Regular);
    assert_eq!(nums, ["7", "2", "9", "1", "10/1", "3", "4"]);
}

#[test]
fn golden_2024_regular() {
    let (t, nums) = displays(2024);
    assert_eq!(t, YearType::Regular);
    // age 49 -> 4
    assert_eq!(nums, ["8", "2", "10/1", "1", "2", "4", "6"]);
}

#[test]
fn golden_2025_before_chart() {
    let (t, nums) = displays(2025);
    assert_eq!(t, YearType::BeforeChart);
    assert_eq!(
        nums,
        ["9", "2", "11/2", "1", "3", "5", "8", "8", "16/7", "5", "12/3"]
    );
}

#[test]
fn golden_2026_chart_with_next() {
    let (t, nums) = displays(2026);
    assert_eq!(t, YearType::ChartWithNext);
    assert_eq!(nums.len(), 15);
    assert_eq!(
        &nums[..9],
        ["1", "2", "3", "1", "4", "5", "9", "1", "10/1"]
    );
    assert_eq!(&nums[9..], ["1", "2", "8", "10/1", "6", "7"]);
}

#[test]
fn golden_2027_chart_without_next() {
    let (t, nums) = displays(2027);
    assert_eq!(t, YearType::ChartWithoutNext);
    assert_eq!(nums.len(), 13);
    assert_eq!(&nums[..9], ["2", "2", "4", "1", "5", "1", "6", "2", "8"]);
    assert_eq!(&nums[9..], ["8", "16/7", "7", "14/5"]);
}

#[test]
fn periods_are_dated_for_target_year() {
    let f = compute_year_forecast(2025, TOP, BOTTOM, BIRTH_YEAR, COLUMN).unwrap();
    assert_eq!(f.period_count, 11);
    let expected = period_dates(11, 2025).unwrap();
    for (p, r) in f.periods.iter().zip(&expected) {
        assert_eq!(p.start, r.start);
        assert_eq!(p.end, r.end);
    }
    assert_eq!(f.periods[0].start.to_string(), "2025-01-01");
    assert_eq!(f.periods[10].end.to_string(), "2025-12-31");
}

#[test]
fn current_period_on_boundaries() {
    let f = compute_year_forecast(2026, TOP, BOTTOM, BIRTH_YEAR, COLUMN).unwrap();
    for (i, p) in f.periods.iter().enumerate() {
        assert_eq!(current_period_index(p.end, f.period_count).unwrap(), i);
        assert_eq!(current_period_index(p.start, f.period_count).unwrap(), i);
    }
}

#[test]
fn active_period_matches_index() {
    let f = compute_year_forecast(2027, TOP, BOTTOM, BIRTH_YEAR, COLUMN).unwrap();
    let date = NaiveDate::from_ymd_opt(2027, 7, 1).unwrap();
    let p = f.active_period(date).unwrap();
    assert!(p.range().contains(date));
    assert_eq!(Some(f.periods.iter().position(|q| q == p).unwrap()), f.active_index(date));
}

#[test]
fn forecast_is_idempotent() {
    let a = compute_year_forecast(2026, TOP, BOTTOM, BIRTH_YEAR, COLUMN).unwrap();
    let b = compute_year_forecast(2026, TOP, BOTTOM, BIRTH_YEAR, COLUMN).unwrap();
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn other_columns_are_not_guessed() {
    for column in [1u8, 2, 3, 4, 5, 6, 7, 9] {
        let err = compute_year_forecast(2026, TOP, BOTTOM, BIRTH_YEAR, column).unwrap_err();
        assert_eq!(err, NumerologyError::UnknownColumn(column));
    }
}

#[test]
fn forecast_serializes_dates_as_iso() {
    let f = compute_year_forecast(2022, TOP, BOTTOM, BIRTH_YEAR, COLUMN).unwrap();
    let json = serde_json::to_value(&f).unwrap();
    assert_eq!(json["year_type"], "Regular");
    assert_eq!(json["periods"][0]["start"], "2022-01-01");
    assert_eq!(json["numbers"][6]["raw"], 11);
    assert_eq!(json["numbers"][6]["reduced"], 2);
}

#[test]
fn years_beyond_known_chart_years_are_refused() {
    for year in [2021, 2028, 2040, 2100] {
        let err = compute_year_forecast(year, TOP, BOTTOM, BIRTH_YEAR, COLUMN).unwrap_err();
        assert_eq!(err, NumerologyError::YearOutsideRegistry(year));
    }
}
