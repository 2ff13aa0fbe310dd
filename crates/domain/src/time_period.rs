use crate::errors::ParseError;
use crate::unit::TimeUnit;
use crate::words;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Whether the fields of a [`TimePeriod`] are currently in canonical ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Normalization {
    #[default]
    Normalized,
    /// Some field may be at or above its modulus, either because it was
    /// built from raw values or because it was denormalized on purpose.
    PendingNormalization,
}

/// A single magnitude expressed in one unit, as returned by
/// [`TimePeriod::largest_unit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LargestUnit {
    pub magnitude: u64,
    pub unit: TimeUnit,
}

/// A length of time without a start or end, from weeks down to
/// milliseconds.
///
/// Normalized form keeps milliseconds below 1000, seconds and minutes
/// below 60, hours below 24 and days below 7. Weeks are unbounded.
/// Equality compares normalized fields, so `90 minutes == 1 hour 30 minutes`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimePeriod {
    weeks: u64,
    days: u64,
    hours: u64,
    minutes: u64,
    seconds: u64,
    milliseconds: u64,
    state: Normalization,
}

impl TimePeriod {
    pub fn zero() -> Self {
        Self::default()
    }

    /// Builds a period from raw field values. Fields may exceed their
    /// modulus; normalization is deferred until a normalized value is read.
    pub fn new(
        weeks: u64,
        days: u64,
        hours: u64,
        minutes: u64,
        seconds: u64,
        milliseconds: u64,
    ) -> Self {
        Self {
            weeks,
            days,
            hours,
            minutes,
            seconds,
            milliseconds,
            state: Normalization::PendingNormalization,
        }
    }

    /// A period made of `amount` of a single unit.
    pub fn of(amount: u64, unit: TimeUnit) -> Self {
        let mut period = Self::zero();
        *period.slot_mut(unit) = amount;
        period.state = Normalization::PendingNormalization;
        period
    }

    pub fn from_millis(total: u64) -> Self {
        Self::of(total, TimeUnit::Millisecond)
    }

    /// Parses `"<integer> <unit word>"`, e.g. `"36 hours"` or `"1 week"`.
    pub fn parse_as_words(input: &str) -> Result<Self, ParseError> {
        words::parse_as_words(input)
    }

    pub fn state(&self) -> Normalization {
        self.state
    }

    /// Carries overflow from each field into the next coarser one. Does
    /// nothing when already normalized.
    pub fn normalize(&mut self) -> &mut Self {
        if self.state == Normalization::PendingNormalization {
            for pair in TimeUnit::ALL.windows(2) {
                let (fine, coarse) = (pair[0], pair[1]);
                let Some(modulus) = fine.modulus() else {
                    continue;
                };
                let value = self.slot(fine);
                if value >= modulus {
                    *self.slot_mut(fine) = value % modulus;
                    let carried = self.slot(coarse).saturating_add(value / modulus);
                    *self.slot_mut(coarse) = carried;
                }
            }
            self.state = Normalization::Normalized;
        }
        self
    }

    /// A normalized copy of this period.
    pub fn normalized(&self) -> Self {
        let mut copy = *self;
        copy.normalize();
        copy
    }

    /// Folds every unit coarser than `largest_allowed` into it, leaving the
    /// coarser fields at zero. E.g. 2 days becomes 48 hours after
    /// `denormalize(TimeUnit::Hour)`.
    pub fn denormalize(&mut self, largest_allowed: TimeUnit) -> &mut Self {
        let mut unit = TimeUnit::Week;
        while unit != largest_allowed {
            let Some(finer) = unit.finer() else {
                break;
            };
            let factor = finer.modulus().unwrap_or(1);
            let folded = self
                .slot(finer)
                .saturating_add(self.slot(unit).saturating_mul(factor));
            *self.slot_mut(finer) = folded;
            *self.slot_mut(unit) = 0;
            unit = finer;
        }
        self.state = Normalization::PendingNormalization;
        self
    }

    /// The coarsest nonzero unit no larger than `largest_allowed`, demoted
    /// to a finer unit when `largest_allowed` would drop a nonzero
    /// remainder.
    ///
    /// 2 weeks gives `(2, Week)`, `(14, Day)` or `(336, Hour)` depending on
    /// `largest_allowed`; 3 days 5 hours always gives `(77, Hour)`.
    pub fn largest_unit(&self, largest_allowed: TimeUnit) -> LargestUnit {
        let mut period = self.normalized();
        let needed_finest = TimeUnit::ALL[..5]
            .iter()
            .copied()
            .find(|unit| period.slot(*unit) > 0)
            .unwrap_or(TimeUnit::Week);

        period.denormalize(TimeUnit::min(needed_finest, largest_allowed));

        TimeUnit::ALL
            .iter()
            .rev()
            .copied()
            .find(|unit| period.slot(*unit) != 0)
            .map(|unit| LargestUnit {
                magnitude: period.slot(unit),
                unit,
            })
            .unwrap_or(LargestUnit {
                magnitude: period.seconds,
                unit: TimeUnit::Second,
            })
    }

    /// Normalized value of one field.
    pub fn get(&self, unit: TimeUnit) -> u64 {
        self.normalized().slot(unit)
    }

    /// Current value of one field without normalizing first. After
    /// [`denormalize`](Self::denormalize) this shows the folded value.
    pub fn denormalized(&self, unit: TimeUnit) -> u64 {
        self.slot(unit)
    }

    /// Sets one field and re-normalizes. Negative values are ignored and
    /// leave the previous value in place.
    pub fn set(&mut self, unit: TimeUnit, value: i64) -> &mut Self {
        if let Ok(value) = u64::try_from(value) {
            *self.slot_mut(unit) = value;
            self.state = Normalization::PendingNormalization;
            self.normalize();
        }
        self
    }

    pub fn weeks(&self) -> u64 {
        self.get(TimeUnit::Week)
    }

    pub fn days(&self) -> u64 {
        self.get(TimeUnit::Day)
    }

    pub fn hours(&self) -> u64 {
        self.get(TimeUnit::Hour)
    }

    pub fn minutes(&self) -> u64 {
        self.get(TimeUnit::Minute)
    }

    pub fn seconds(&self) -> u64 {
        self.get(TimeUnit::Second)
    }

    pub fn milliseconds(&self) -> u64 {
        self.get(TimeUnit::Millisecond)
    }

    pub fn set_weeks(&mut self, weeks: i64) -> &mut Self {
        self.set(TimeUnit::Week, weeks)
    }

    pub fn set_days(&mut self, days: i64) -> &mut Self {
        self.set(TimeUnit::Day, days)
    }

    pub fn set_hours(&mut self, hours: i64) -> &mut Self {
        self.set(TimeUnit::Hour, hours)
    }

    pub fn set_minutes(&mut self, minutes: i64) -> &mut Self {
        self.set(TimeUnit::Minute, minutes)
    }

    pub fn set_seconds(&mut self, seconds: i64) -> &mut Self {
        self.set(TimeUnit::Second, seconds)
    }

    pub fn set_milliseconds(&mut self, milliseconds: i64) -> &mut Self {
        self.set(TimeUnit::Millisecond, milliseconds)
    }

    /// Whole length in milliseconds, saturating at `u64::MAX`.
    pub fn total_millis(&self) -> u64 {
        let mut period = *self;
        period.denormalize(TimeUnit::Millisecond);
        period.milliseconds
    }

    fn slot(&self, unit: TimeUnit) -> u64 {
        match unit {
            TimeUnit::Week => self.weeks,
            TimeUnit::Day => self.days,
            TimeUnit::Hour => self.hours,
            TimeUnit::Minute => self.minutes,
            TimeUnit::Second => self.seconds,
            TimeUnit::Millisecond => self.milliseconds,
        }
    }

    fn slot_mut(&mut self, unit: TimeUnit) -> &mut u64 {
        match unit {
            TimeUnit::Week => &mut self.weeks,
            TimeUnit::Day => &mut self.days,
            TimeUnit::Hour => &mut self.hours,
            TimeUnit::Minute => &mut self.minutes,
            TimeUnit::Second => &mut self.seconds,
            TimeUnit::Millisecond => &mut self.milliseconds,
        }
    }

    fn fields(&self) -> [u64; 6] {
        TimeUnit::ALL.map(|unit| self.slot(unit))
    }
}

impl PartialEq for TimePeriod {
    fn eq(&self, other: &Self) -> bool {
        self.normalized().fields() == other.normalized().fields()
    }
}

impl Eq for TimePeriod {}

impl Hash for TimePeriod {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized().fields().hash(state);
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} week(s), {} day(s), {} hour(s), {} minute(s), {} second(s), {} millisecond(s)",
            self.weeks, self.days, self.hours, self.minutes, self.seconds, self.milliseconds
        )
    }
}

impl FromStr for TimePeriod {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_as_words(s)
    }
}

impl From<std::time::Duration> for TimePeriod {
    fn from(duration: std::time::Duration) -> Self {
        let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        Self::from_millis(millis)
    }
}

impl From<TimePeriod> for std::time::Duration {
    fn from(period: TimePeriod) -> Self {
        std::time::Duration::from_millis(period.total_millis())
    }
}
