//! Pattern-driven formatting and parsing of time periods
pub mod compiler;
pub mod errors;
pub mod format;
mod formatter;
mod matcher;
pub mod registry;

pub use compiler::{NameStyle, Segment};
pub use errors::{PatternError, RegistryError};
pub use format::TimePeriodFormat;
pub use registry::FormatRegistry;
