//! Presentation of an allocation

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use tabled::{Table, Tabled};

use crate::common::errors::{AllocationError, Result};
use crate::common::types::{AllocationRequest, AllocationResult};
use crate::config::types::OutputFormat;

/// One line of the stake table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub name: String,
    /// Fraction exactly as typed
    pub odds: String,
    pub stake: Decimal,
    /// Stake divided by the header's unit value; absent when that is zero
    pub units: Option<Decimal>,
}

/// Display-ready allocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub total_stake: Decimal,
    pub unit_value: Decimal,
    /// Equal payout, rounded to cents for display
    pub payout: Decimal,
    pub profit: Decimal,
    pub book_percentage: Decimal,
    pub rows: Vec<ReportRow>,
}

#[derive(Tabled)]
struct StakeRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Odds")]
    odds: String,
    #[tabled(rename = "Stake")]
    stake: String,
    #[tabled(rename = "Units")]
    units: String,
}

#[derive(Tabled)]
struct PlainStakeRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Odds")]
    odds: String,
    #[tabled(rename = "Stake")]
    stake: String,
}

impl Report {
    /// Pair request entries with their rounded stakes
    pub fn new(request: &AllocationRequest, result: &AllocationResult) -> Self {
        let unit_value = request.unit_value();
        let rows = request
            .entries()
            .iter()
            .zip(result.stakes.iter())
            .map(|(entry, &stake)| ReportRow {
                name: entry.name.clone(),
                odds: entry.odds.text.clone(),
                stake,
                units: if unit_value.is_zero() {
                    None
                } else {
                    stake.checked_div(unit_value).map(to_display)
                },
            })
            .collect();

        Self {
            total_stake: request.total_stake(),
            unit_value,
            payout: to_display(result.payout),
            profit: to_display(result.profit()),
            book_percentage: to_display(result.book_percentage()),
            rows,
        }
    }

    /// Render as text or JSON
    pub fn render(&self, format: OutputFormat, show_units: bool) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(self.render_table(show_units)),
            OutputFormat::Json => serde_json::to_string_pretty(self)
                .map_err(|e| AllocationError::Serialization(e.to_string())),
        }
    }

    fn render_table(&self, show_units: bool) -> String {
        let table = if show_units {
            Table::new(self.rows.iter().map(|row| StakeRow {
                name: row.name.clone(),
                odds: row.odds.clone(),
                stake: row.stake.to_string(),
                units: row
                    .units
                    .map(|u| format!("{}u", u))
                    .unwrap_or_else(|| "-".to_string()),
            }))
            .to_string()
        } else {
            Table::new(self.rows.iter().map(|row| PlainStakeRow {
                name: row.name.clone(),
                odds: row.odds.clone(),
                stake: row.stake.to_string(),
            }))
            .to_string()
        };

        format!(
            "Equal payout: {}\nProfit: {} (book {}%)\n{}",
            self.payout, self.profit, self.book_percentage, table
        )
    }
}

/// Round half away from zero to two places, always showing both
fn to_display(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::parser::parse_fraction;
    use crate::common::types::{Entry, Header};
    use rust_decimal_macros::dec;

    fn sample() -> (AllocationRequest, AllocationResult) {
        let request = AllocationRequest::new(
            Header::new(dec!(2), dec!(10)),
            vec![
                Entry::new("Alice", parse_fraction("1/1").unwrap()),
                Entry::new("Bob", parse_fraction("3/1").unwrap()),
            ],
        )
        .unwrap();
        let result = AllocationResult {
            payout: dec!(26.666666666666666666666666667),
            inverse_sum: dec!(0.75),
            stakes: vec![dec!(13.33), dec!(6.67)],
        };
        (request, result)
    }

    #[test]
    fn test_to_display() {
        assert_eq!(to_display(dec!(26.665)).to_string(), "26.67");
        assert_eq!(to_display(dec!(20)).to_string(), "20.00");
        assert_eq!(to_display(dec!(-0.005)).to_string(), "-0.01");
    }

    #[test]
    fn test_report_rows() {
        let (request, result) = sample();
        let report = Report::new(&request, &result);

        assert_eq!(report.payout.to_string(), "26.67");
        assert_eq!(report.profit.to_string(), "6.67");
        assert_eq!(report.book_percentage.to_string(), "75.00");
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[1].odds, "3/1");
        assert_eq!(report.rows[1].stake, dec!(6.67));
        assert_eq!(report.rows[0].units.unwrap().to_string(), "1.33");
    }

    #[test]
    fn test_zero_unit_value_has_no_units() {
        let (_, result) = sample();
        let request = AllocationRequest::with_total(
            dec!(20),
            Decimal::ZERO,
            vec![
                Entry::new("Alice", parse_fraction("1/1").unwrap()),
                Entry::new("Bob", parse_fraction("3/1").unwrap()),
            ],
        )
        .unwrap();
        let report = Report::new(&request, &result);
        assert!(report.rows.iter().all(|row| row.units.is_none()));
        assert!(report.render(OutputFormat::Table, true).unwrap().contains(" - "));
    }

    #[test]
    fn test_render_table() {
        let (request, result) = sample();
        let text = Report::new(&request, &result)
            .render(OutputFormat::Table, true)
            .unwrap();

        assert!(text.starts_with("Equal payout: 26.67\n"));
        assert!(text.contains("Profit: 6.67 (book 75.00%)"));
        assert!(text.contains("Units"));
        assert!(text.contains("Alice"));
        assert!(text.contains("13.33"));
        assert!(text.contains("0.67u"));

        let plain = Report::new(&request, &result)
            .render(OutputFormat::Table, false)
            .unwrap();
        assert!(!plain.contains("Units"));
        assert!(plain.contains("6.67"));
    }

    #[test]
    fn test_render_json() {
        let (request, result) = sample();
        let json = Report::new(&request, &result)
            .render(OutputFormat::Json, true)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["payout"], "26.67");
        assert_eq!(value["total_stake"], "20.00");
        assert_eq!(value["rows"][0]["name"], "Alice");
        assert_eq!(value["rows"][1]["stake"], "6.67");
    }
}
