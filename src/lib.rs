//! dutch_stake Library
//!
//! Splits a fixed wager across competing bets quoted in fractional odds
//! so that every bet returns the same amount if it wins, with stakes
//! rounded to cents that still add up to the wager exactly.

pub mod allocation;
pub mod common;
pub mod config;
pub mod orchestrator;

// Re-export commonly used types
pub use allocation::{
    compute_equal_payout, parse_entry_line, parse_fraction, parse_header, round_conserving,
    EqualPayout,
};
pub use common::errors::{AllocationError, FractionFault, Result};
pub use common::types::{AllocationRequest, AllocationResult, Entry, Header, OddsSpec};
pub use config::types::{AppConfig, OutputFormat};
pub use orchestrator::{allocate, parse_request, run, Report, ReportRow};
