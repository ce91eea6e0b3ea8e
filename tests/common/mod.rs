//! Common test utilities and fixtures

#![allow(dead_code)]

use dutch_stake::{parse_fraction, AllocationRequest, Entry};
use rust_decimal::Decimal;

/// Request text from the worked example
pub const WORKED_EXAMPLE: &str = "2u $10\nAlice 1/1\nBob 3/1\n";

/// A typical racecard pasted into chat
pub const RACECARD: &str = r#"!dutch 5u $4
Golden Arrow 5/2
Misty Harbour 9/4
Red Lantern 11/2
Quiet Storm 14/1
"#;

/// Odds sets used by the property checks
pub fn odds_sets() -> Vec<Vec<&'static str>> {
    vec![
        vec!["1/1", "3/1"],
        vec!["5/2", "9/4", "11/2", "14/1"],
        vec!["1/3", "1/3", "1/3"],
        vec!["0/1", "0/1"],
        vec!["0/1", "7/1", "100/1"],
        vec!["4/6", "6/4", "13/8", "33/1", "50/1", "2/9"],
        vec!["1/7", "2/7", "3/7", "4/7", "5/7", "6/7", "8/7"],
        vec!["1.5/1", "0.25/3", "10/3"],
        vec!["1000/1"],
    ]
}

/// Totals used by the property checks, all whole cents
pub fn totals() -> Vec<Decimal> {
    ["0.00", "0.01", "0.07", "1.00", "9.99", "20.00", "100.00", "1234.56"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect()
}

/// Build a request with generated names from fraction strings
pub fn request_for(total: Decimal, fractions: &[&str]) -> AllocationRequest {
    let entries = fractions
        .iter()
        .enumerate()
        .map(|(i, f)| Entry::new(format!("Runner {}", i + 1), parse_fraction(f).unwrap()))
        .collect();
    AllocationRequest::with_total(total, Decimal::ONE, entries).unwrap()
}
