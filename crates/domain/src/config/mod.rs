//! Configuration for named time period formats
//!
//! - `patterns`: named pattern entries and the top-level `FormatConfig`
//! - `errors`: configuration errors

pub mod errors;
pub mod patterns;

pub use errors::ConfigError;
pub use patterns::{FormatConfig, PatternConfig};
