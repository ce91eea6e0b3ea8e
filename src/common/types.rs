//! Value types shared by the parser, engine and report

use rust_decimal::Decimal;
use serde::Serialize;

use super::errors::{AllocationError, Result};

/// Fractional odds as typed by the user, plus the derived decimal odds
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OddsSpec {
    /// Original token, e.g. `5/2`
    pub text: String,
    pub numerator: Decimal,
    /// Never zero
    pub denominator: Decimal,
    /// `1 + numerator / denominator`, always >= 1
    pub decimal_odds: Decimal,
}

/// One named bet in a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub name: String,
    pub odds: OddsSpec,
}

impl Entry {
    pub fn new(name: impl Into<String>, odds: OddsSpec) -> Self {
        Self {
            name: name.into(),
            odds,
        }
    }
}

/// Parsed header line: how many units and what one unit is worth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Header {
    pub units: Decimal,
    pub unit_value: Decimal,
}

impl Header {
    pub fn new(units: Decimal, unit_value: Decimal) -> Self {
        Self { units, unit_value }
    }

    /// Total wager in currency, scaled to exactly two decimal places
    ///
    /// Fails when `units * unit_value` is not a whole number of cents.
    pub fn total_stake(&self) -> Result<Decimal> {
        let total = self
            .units
            .checked_mul(self.unit_value)
            .ok_or(AllocationError::Arithmetic("total stake overflow"))?;
        to_cents(total).ok_or_else(|| {
            AllocationError::header(
                &format!("{}u {}", self.units, self.unit_value),
                format!("total stake {} is not a whole number of cents", total.normalize()),
            )
        })
    }
}

/// Rescale to two decimal places if that loses nothing
pub fn to_cents(amount: Decimal) -> Option<Decimal> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return None;
    }
    let mut scaled = amount.normalize();
    if scaled.scale() > 2 {
        return None;
    }
    scaled.rescale(2);
    Some(scaled)
}

/// Validated input to one allocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocationRequest {
    total_stake: Decimal,
    unit_value: Decimal,
    entries: Vec<Entry>,
}

impl AllocationRequest {
    /// Build a request from a header and its entries
    pub fn new(header: Header, entries: Vec<Entry>) -> Result<Self> {
        let total_stake = header.total_stake()?;
        Self::with_total(total_stake, header.unit_value, entries)
    }

    /// Build a request from an explicit total stake
    ///
    /// `total_stake` must be non-negative with at most two decimal places.
    /// A total that is not is reported as `HeaderFormat`, with the amount
    /// in place of the header line, since that is where the total comes
    /// from in text requests.
    pub fn with_total(total_stake: Decimal, unit_value: Decimal, entries: Vec<Entry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(AllocationError::EmptyRequest);
        }
        let total_stake = to_cents(total_stake).ok_or_else(|| {
            AllocationError::header(
                &total_stake.to_string(),
                "total stake must be a non-negative whole number of cents",
            )
        })?;
        Ok(Self {
            total_stake,
            unit_value,
            entries,
        })
    }

    pub fn total_stake(&self) -> Decimal {
        self.total_stake
    }

    pub fn unit_value(&self) -> Decimal {
        self.unit_value
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Decimal odds in entry order
    pub fn decimal_odds(&self) -> Vec<Decimal> {
        self.entries.iter().map(|e| e.odds.decimal_odds).collect()
    }
}

/// Outcome of one allocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocationResult {
    /// Theoretical return whichever entry wins, unrounded
    pub payout: Decimal,
    /// Sum of `1 / decimal_odds` over all entries
    pub inverse_sum: Decimal,
    /// Cent-rounded stakes in request order, summing to the total
    pub stakes: Vec<Decimal>,
}

impl AllocationResult {
    /// Total staked across all entries
    pub fn total(&self) -> Decimal {
        self.stakes.iter().copied().sum()
    }

    /// What the dutch wins (or loses, if negative) whichever entry comes in
    pub fn profit(&self) -> Decimal {
        self.payout - self.total()
    }

    /// Book percentage; under 100 means a guaranteed profit
    pub fn book_percentage(&self) -> Decimal {
        self.inverse_sum * Decimal::ONE_HUNDRED
    }
}
