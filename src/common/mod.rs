//! Types and errors shared across the allocator

pub mod errors;
pub mod types;
