use crate::compiler::{self, Segment};
use crate::errors::PatternError;
use crate::{formatter, matcher};
use std::str::FromStr;
use timeperiod_domain::{ParseError, TimePeriod, TimeUnit};
use tracing::debug;

/// Formats [`TimePeriod`]s as strings and parses strings back, following a
/// pattern compiled once at construction.
///
/// Pattern letters:
///
/// | letter | meaning | example |
/// |---|---|---|
/// | `w d h m s z` | number of weeks, days, hours, minutes, seconds, milliseconds | `645` |
/// | `W D H M S Z` | unit name: one letter for the abbreviation, more for the full name | `h`, `hours` |
///
/// Repeating a number letter sets the zero-padded width ("mm" gives "05").
/// When parsing, a numeric field reads at most the larger of that width and
/// the digits needed for the unit's largest normalized value (3 for
/// milliseconds, 2 for seconds, minutes and hours, 1 for days).
///
/// Full names are pluralized unless the value is exactly 1. Text inside
/// single quotes is literal and `''` inside quotes is a single quote. Any
/// other non-letter is copied through; any other letter is an error.
///
/// ```text
/// "hH, mM, sS"          16h, 2m, 1s
/// "hhH, mmM, ssS"       16h, 02m, 01s
/// "h HH, m MM, s SS"    16 hours, 2 minutes, 1 second
/// ```
#[derive(Debug, Clone)]
pub struct TimePeriodFormat {
    pattern: String,
    segments: Vec<Segment>,
    max_unit: Option<TimeUnit>,
}

impl TimePeriodFormat {
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let segments = compiler::compile(pattern)?;
        debug!(pattern, segments = segments.len(), "Compiled time period pattern");

        Ok(Self {
            pattern: pattern.to_string(),
            segments,
            max_unit: None,
        })
    }

    /// Shows denormalized values: with `max_unit = Hour`, "hh:mm" formats
    /// 1.5 days as "36:00".
    ///
    /// Also lifts the digit limit for that unit when parsing, so "hh:mm"
    /// reads "123456789:12" as hours up to the ':'. Without a delimiter
    /// after it ("hhmm") the unlimited field swallows the minutes too.
    pub fn with_max_unit(mut self, unit: TimeUnit) -> Self {
        debug!(pattern = %self.pattern, max_unit = %unit, "Set max unit");
        self.max_unit = Some(unit);
        self
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn max_unit(&self) -> Option<TimeUnit> {
        self.max_unit
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn format(&self, period: &TimePeriod) -> String {
        formatter::render(&self.segments, period, self.max_unit)
    }

    pub fn parse(&self, input: &str) -> Result<TimePeriod, ParseError> {
        matcher::consume(&self.segments, input, self.max_unit).inspect_err(|e| {
            debug!(error = %e, input, pattern = %self.pattern, "Failed to parse time period");
        })
    }
}

impl FromStr for TimePeriodFormat {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
