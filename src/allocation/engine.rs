use rust_decimal::Decimal;
use tracing::debug;

use crate::common::errors::{AllocationError, Result};

/// Unrounded equal-payout split
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EqualPayout {
    /// Return every entry yields if it wins
    pub payout: Decimal,
    /// `sum(1 / odds_i)`
    pub inverse_sum: Decimal,
    /// `payout / odds_i`, in input order
    pub raw_stakes: Vec<Decimal>,
}

/// Split `total_stake` so that `raw_stake_i * odds_i` is the same for every entry
///
/// # Arguments
/// * `total_stake` - Amount to spread across all entries
/// * `decimal_odds` - Decimal odds per entry, each at least 1
///
/// # Returns
/// The common payout and the per-entry stakes, accurate to the 28
/// significant digits `Decimal` carries
pub fn compute_equal_payout(total_stake: Decimal, decimal_odds: &[Decimal]) -> Result<EqualPayout> {
    if decimal_odds.is_empty() {
        return Err(AllocationError::EmptyRequest);
    }
    if let Some(&odds) = decimal_odds.iter().find(|&&odds| odds < Decimal::ONE) {
        return Err(AllocationError::InvalidOdds { odds });
    }

    let mut inverse_sum = Decimal::ZERO;
    for &odds in decimal_odds {
        let inverse = Decimal::ONE
            .checked_div(odds)
            .ok_or(AllocationError::Arithmetic("inverse odds"))?;
        inverse_sum = inverse_sum
            .checked_add(inverse)
            .ok_or(AllocationError::Arithmetic("inverse odds sum overflow"))?;
    }

    let payout = total_stake
        .checked_div(inverse_sum)
        .ok_or(AllocationError::Arithmetic("payout overflow"))?;

    let raw_stakes = decimal_odds
        .iter()
        .map(|&odds| {
            payout
                .checked_div(odds)
                .ok_or(AllocationError::Arithmetic("stake division"))
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(
        %total_stake,
        %inverse_sum,
        %payout,
        entries = decimal_odds.len(),
        "Computed equal payout"
    );

    Ok(EqualPayout {
        payout,
        inverse_sum,
        raw_stakes,
    })
}
