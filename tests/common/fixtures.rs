use timeperiod_domain::{TimePeriod, TimeUnit};

/// Common pattern strings
pub struct TestPatterns;

impl TestPatterns {
    pub fn clock() -> &'static str {
        "hh:mm:ss"
    }

    pub fn full_timestamp() -> &'static str {
        "hh:mm:ss.zzz"
    }

    pub fn wordy() -> &'static str {
        "w WW, d DD, h HH, m MM, s SS, z ZZ"
    }

    pub fn abbreviated() -> &'static str {
        "wW dD hH mM sS zZ"
    }

    pub fn quoted() -> &'static str {
        "'I''m a quantity of' hH, mM, sS, zZ"
    }

    pub fn all() -> [&'static str; 5] {
        [
            Self::clock(),
            Self::full_timestamp(),
            Self::wordy(),
            Self::abbreviated(),
            Self::quoted(),
        ]
    }
}

/// Common normalized periods
pub struct TestPeriods;

impl TestPeriods {
    pub fn zero() -> TimePeriod {
        TimePeriod::zero()
    }

    pub fn clock_time() -> TimePeriod {
        TimePeriod::new(0, 0, 5, 12, 34, 0)
    }

    pub fn sub_day() -> TimePeriod {
        TimePeriod::new(0, 0, 7, 56, 4, 123)
    }

    pub fn multi_week() -> TimePeriod {
        TimePeriod::new(3, 6, 23, 59, 59, 999)
    }

    pub fn ones() -> TimePeriod {
        TimePeriod::new(1, 1, 1, 1, 1, 1)
    }

    pub fn hours(amount: u64) -> TimePeriod {
        TimePeriod::of(amount, TimeUnit::Hour)
    }

    /// Periods that fit inside a single day
    pub fn within_day() -> Vec<TimePeriod> {
        vec![Self::zero(), Self::clock_time(), Self::sub_day(), Self::hours(23)]
    }

    pub fn all() -> Vec<TimePeriod> {
        vec![
            Self::zero(),
            Self::clock_time(),
            Self::sub_day(),
            Self::multi_week(),
            Self::ones(),
            Self::hours(100),
        ]
    }
}
