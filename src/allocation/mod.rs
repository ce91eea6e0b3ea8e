//! Equal-payout allocation core
//!
//! ```text
//! raw text ──► parser ──► (total stake, decimal odds)
//!                                │
//!                                ▼
//!                   engine::compute_equal_payout
//!                     (payout W, raw stakes)
//!                                │
//!                                ▼
//!                  rounding::round_conserving
//!                (cent stakes summing to the total)
//! ```
//!
//! Every stage is a pure function over `Decimal`; nothing here touches
//! I/O or shared state.

pub mod engine;
pub mod parser;
pub mod rounding;

pub use engine::{compute_equal_payout, EqualPayout};
pub use parser::{parse_entry_line, parse_fraction, parse_header};
pub use rounding::{round_conserving, CENT};
