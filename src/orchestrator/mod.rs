//! Orchestrator - raw request text in, report out
//!
//! Ties the parser, engine and rounder together. Any error from any
//! stage is returned as is; nothing is rendered for a failed request.

pub mod report;
pub mod request;

use tracing::{debug, instrument};

use crate::allocation::engine::compute_equal_payout;
use crate::allocation::rounding::round_conserving;
use crate::common::errors::Result;
use crate::common::types::{AllocationRequest, AllocationResult};

pub use report::{Report, ReportRow};
pub use request::parse_request;

/// Compute cent stakes for a parsed request
#[instrument(skip(request), fields(entries = request.entries().len()))]
pub fn allocate(request: &AllocationRequest) -> Result<AllocationResult> {
    let split = compute_equal_payout(request.total_stake(), &request.decimal_odds())?;
    let stakes = round_conserving(request.total_stake(), &split.raw_stakes)?;

    debug!(payout = %split.payout, "Allocation complete");

    Ok(AllocationResult {
        payout: split.payout,
        inverse_sum: split.inverse_sum,
        stakes,
    })
}

/// Parse, allocate and build the report for one request
#[instrument(skip(text))]
pub fn run(text: &str) -> Result<Report> {
    let request = parse_request(text)?;
    let result = allocate(&request)?;
    Ok(Report::new(&request, &result))
}
