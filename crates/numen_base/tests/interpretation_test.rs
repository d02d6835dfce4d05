//! Interpretation lookups driven by computed charts and forecasts.

use chrono::NaiveDate;
use numen_base::{
    Planet, birthday_interpretation, compound_interpretation, compound_interpretation_for,
    compute_diamond_chart, compute_year_forecast,
};

#[test]
fn every_birthday_number_has_a_meaning() {
    for n in 1..=9 {
        let b = birthday_interpretation(n).unwrap();
        assert_eq!(b.number, n);
        assert!(!b.essence.is_empty());
        assert!(!b.guidance.is_empty());
    }
}

#[test]
fn chart_top_resolves_birthday() {
    let date = NaiveDate::from_ymd_opt(1975, 3, 29);
    let chart = compute_diamond_chart("Ada Lee", date).unwrap();
    let b = birthday_interpretation(chart.top).unwrap();
    assert_eq!(b.planet, Planet::Moon);
}

#[test]
fn forecast_compounds_resolve_or_are_absent() {
    let f = compute_year_forecast(2025, 2, 1, 1975, 8).unwrap();
    for n in &f.numbers {
        let found = compound_interpretation_for(*n);
        if n.is_compound() && n.raw <= 97 {
            let c = found.unwrap();
            assert_eq!(c.category, n.reduced);
        } else {
            assert!(found.is_none());
        }
    }
}

#[test]
fn compound_lookup_tolerates_whitespace() {
    assert_eq!(
        compound_interpretation(" 16/7 ").map(|c| c.caption),
        Some("The Shattered Citadel")
    );
}

#[test]
fn compound_serializes() {
    let c = compound_interpretation("21/3").unwrap();
    let json = serde_json::to_value(c).unwrap();
    assert_eq!(json["caption"], "Crown of the Magi");
    assert_eq!(json["category"], 3);
}
