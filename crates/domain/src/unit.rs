use crate::errors::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Units a [`TimePeriod`](crate::TimePeriod) is measured in.
///
/// Nothing larger than weeks is supported: months and years have no fixed
/// length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
}

impl TimeUnit {
    /// Finest to coarsest.
    pub const ALL: [TimeUnit; 6] = [
        TimeUnit::Millisecond,
        TimeUnit::Second,
        TimeUnit::Minute,
        TimeUnit::Hour,
        TimeUnit::Day,
        TimeUnit::Week,
    ];

    /// Ordering value used by [`TimeUnit::min`]. Millisecond and second
    /// share rank 0.
    pub fn rank(&self) -> u8 {
        match self {
            TimeUnit::Millisecond => 0,
            TimeUnit::Second => 0,
            TimeUnit::Minute => 1,
            TimeUnit::Hour => 2,
            TimeUnit::Day => 3,
            TimeUnit::Week => 4,
        }
    }

    pub fn singular_name(&self) -> &'static str {
        match self {
            TimeUnit::Millisecond => "millisecond",
            TimeUnit::Second => "second",
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::Week => "week",
        }
    }

    pub fn plural_name(&self) -> &'static str {
        match self {
            TimeUnit::Millisecond => "milliseconds",
            TimeUnit::Second => "seconds",
            TimeUnit::Minute => "minutes",
            TimeUnit::Hour => "hours",
            TimeUnit::Day => "days",
            TimeUnit::Week => "weeks",
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            TimeUnit::Millisecond => "ms",
            TimeUnit::Second => "s",
            TimeUnit::Minute => "m",
            TimeUnit::Hour => "h",
            TimeUnit::Day => "d",
            TimeUnit::Week => "w",
        }
    }

    /// How many of this unit make up one of the next coarser unit.
    pub fn modulus(&self) -> Option<u64> {
        match self {
            TimeUnit::Millisecond => Some(1000),
            TimeUnit::Second => Some(60),
            TimeUnit::Minute => Some(60),
            TimeUnit::Hour => Some(24),
            TimeUnit::Day => Some(7),
            TimeUnit::Week => None,
        }
    }

    /// Digits needed for the largest normalized value of this unit
    /// (999 ms, 59 s, 59 m, 23 h, 6 d). Weeks are unbounded.
    pub fn max_parse_digits(&self) -> Option<usize> {
        match self {
            TimeUnit::Millisecond => Some(3),
            TimeUnit::Second => Some(2),
            TimeUnit::Minute => Some(2),
            TimeUnit::Hour => Some(2),
            TimeUnit::Day => Some(1),
            TimeUnit::Week => None,
        }
    }

    /// The next finer unit, `None` for milliseconds.
    pub fn finer(&self) -> Option<TimeUnit> {
        match self {
            TimeUnit::Millisecond => None,
            TimeUnit::Second => Some(TimeUnit::Millisecond),
            TimeUnit::Minute => Some(TimeUnit::Second),
            TimeUnit::Hour => Some(TimeUnit::Minute),
            TimeUnit::Day => Some(TimeUnit::Hour),
            TimeUnit::Week => Some(TimeUnit::Day),
        }
    }

    /// Singular or plural name depending on `amount`.
    pub fn name_for(&self, amount: u64) -> &'static str {
        if amount == 1 {
            self.singular_name()
        } else {
            self.plural_name()
        }
    }

    /// Case-insensitive lookup by singular or plural name.
    pub fn parse(word: &str) -> Option<TimeUnit> {
        TimeUnit::ALL.into_iter().find(|unit| {
            word.eq_ignore_ascii_case(unit.singular_name())
                || word.eq_ignore_ascii_case(unit.plural_name())
        })
    }

    /// The finer of two units by rank. Ties go to `a`.
    pub fn min(a: TimeUnit, b: TimeUnit) -> TimeUnit {
        if b.rank() < a.rank() {
            b
        } else {
            a
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.singular_name())
    }
}

impl FromStr for TimeUnit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeUnit::parse(s).ok_or(ParseError::UnrecognizedUnitWord { offset: 0 })
    }
}
