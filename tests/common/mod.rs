pub mod fixtures;

pub use fixtures::{TestPatterns, TestPeriods};
