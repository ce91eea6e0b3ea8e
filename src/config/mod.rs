//! Configuration for the command-line front end

pub mod loader;
pub mod types;

pub use loader::load_config;
pub use types::{AppConfig, AppSettings, OutputFormat, ReportConfig};
