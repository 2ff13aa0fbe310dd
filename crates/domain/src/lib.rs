//! Time period domain layer: units, the normalized duration value, word
//! parsing and pattern configuration
pub mod config;
pub mod errors;
pub mod time_period;
pub mod unit;
pub mod utils;
pub mod validators;
mod words;

pub use config::{ConfigError, FormatConfig, PatternConfig};
pub use errors::ParseError;
pub use time_period::{LargestUnit, Normalization, TimePeriod};
pub use unit::TimeUnit;
pub use utils::pad_with_zeros;
