//! Cent rounding that conserves the total
//!
//! Largest-remainder apportionment: every stake is truncated to whole
//! cents, then the cents lost to truncation are handed back one at a
//! time to the entries that lost the most. Ties go to the earlier entry.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use tracing::debug;

use crate::common::errors::{AllocationError, Result};

/// One cent
pub const CENT: Decimal = dec!(0.01);

/// Round `raw_stakes` to cents so they sum to exactly `total_stake`
///
/// `total_stake` must already be a whole number of cents and every raw
/// stake non-negative. The output keeps input order and has scale 2.
///
/// Fails with `DeficitOutOfRange` if the cents owed after truncation
/// are negative or more than one per entry, which means the raw stakes
/// did not add up to the total.
pub fn round_conserving(total_stake: Decimal, raw_stakes: &[Decimal]) -> Result<Vec<Decimal>> {
    if raw_stakes.is_empty() {
        return Err(AllocationError::EmptyRequest);
    }

    let mut rounded: Vec<Decimal> = raw_stakes
        .iter()
        .map(|raw| {
            let mut floored = raw.round_dp_with_strategy(2, RoundingStrategy::ToZero);
            floored.rescale(2);
            floored
        })
        .collect();

    let floored_sum: Decimal = rounded.iter().copied().sum();
    let deficit = ((total_stake - floored_sum) / CENT)
        .round()
        .to_i64()
        .ok_or(AllocationError::Arithmetic("cent deficit out of range"))?;

    if deficit < 0 || deficit as usize > raw_stakes.len() {
        return Err(AllocationError::DeficitOutOfRange {
            deficit,
            entries: raw_stakes.len(),
        });
    }

    let mut order: Vec<usize> = (0..raw_stakes.len()).collect();
    // sort_by is stable, so equal remainders stay in input order
    order.sort_by(|&a, &b| {
        let rem_a = raw_stakes[a] - rounded[a];
        let rem_b = raw_stakes[b] - rounded[b];
        rem_b.cmp(&rem_a)
    });

    for &idx in order.iter().take(deficit as usize) {
        rounded[idx] += CENT;
    }

    debug!(
        %total_stake,
        %floored_sum,
        deficit,
        "Distributed rounding deficit"
    );

    Ok(rounded)
}
