/// Round Trip Flow Test
///
/// Tests the full text cycle across both crates:
/// TimePeriod → compiled pattern → string → compiled pattern → TimePeriod

#[path = "../common/mod.rs"]
mod common;
use common::{TestPatterns, TestPeriods};
use timeperiod_domain::{TimePeriod, TimeUnit};
use timeperiod_format::TimePeriodFormat;

// ============================================================================
// Format → Parse
// ============================================================================

#[test]
fn test_round_trip_patterns_covering_every_unit() {
    for pattern in [TestPatterns::wordy(), TestPatterns::abbreviated()] {
        let format = TimePeriodFormat::new(pattern).expect("pattern should compile");

        for period in TestPeriods::all() {
            let text = format.format(&period);
            let parsed = format
                .parse(&text)
                .unwrap_or_else(|e| panic!("{pattern:?} failed on {text:?}: {e}"));
            assert_eq!(parsed, period, "pattern {pattern:?}, text {text:?}");
        }
    }
}

#[test]
fn test_round_trip_with_max_unit_folding_days() {
    for pattern in [TestPatterns::full_timestamp(), TestPatterns::quoted()] {
        let format = TimePeriodFormat::new(pattern)
            .expect("pattern should compile")
            .with_max_unit(TimeUnit::Hour);

        for period in TestPeriods::all() {
            let text = format.format(&period);
            let parsed = format.parse(&text).expect("formatted text should parse");
            assert_eq!(parsed, period, "pattern {pattern:?}, text {text:?}");
        }
    }
}

#[test]
fn test_round_trip_clock_within_a_day() {
    let format = TimePeriodFormat::new(TestPatterns::full_timestamp()).unwrap();

    for period in TestPeriods::within_day() {
        let text = format.format(&period);
        assert_eq!(format.parse(&text).unwrap(), period);
    }
}

#[test]
fn test_parse_then_format_is_stable() {
    let format = TimePeriodFormat::new(TestPatterns::quoted()).unwrap();
    let text = "I'm a quantity of 7h, 56m, 4s, 123ms";

    let period = format.parse(text).unwrap();

    assert_eq!(period, TestPeriods::sub_day());
    assert_eq!(format.format(&period), text);
}

#[test]
fn test_every_pattern_compiles() {
    for pattern in TestPatterns::all() {
        assert!(TimePeriodFormat::new(pattern).is_ok(), "{pattern:?}");
    }
}

// ============================================================================
// Words and largest unit
// ============================================================================

#[test]
fn test_words_to_pattern() {
    let period = TimePeriod::parse_as_words("36 hours").unwrap();
    let format = TimePeriodFormat::new("d DD, h HH").unwrap();

    assert_eq!(format.format(&period), "1 day, 12 hours");
}

#[test]
fn test_largest_unit_conserves_total() {
    for period in TestPeriods::all() {
        for unit in TimeUnit::ALL {
            let largest = period.largest_unit(unit);
            assert_eq!(
                TimePeriod::of(largest.magnitude, largest.unit),
                period,
                "{period} with max {unit}"
            );
        }
    }
}

#[test]
fn test_largest_unit_drives_word_output() {
    let period = TestPeriods::hours(48);
    let largest = period.largest_unit(TimeUnit::Week);

    let words = format!("{} {}", largest.magnitude, largest.unit.name_for(largest.magnitude));

    assert_eq!(words, "2 days");
    assert_eq!(TimePeriod::parse_as_words(&words).unwrap(), period);
}

// ============================================================================
// Normalization properties
// ============================================================================

#[test]
fn test_normalize_and_denormalize_conserve_total() {
    for period in TestPeriods::all() {
        let total = period.total_millis();

        for unit in TimeUnit::ALL {
            let mut folded = period;
            folded.denormalize(unit);
            assert_eq!(folded.total_millis(), total);

            let again = {
                let mut twice = folded;
                twice.denormalize(unit);
                twice
            };
            assert_eq!(again.to_string(), folded.to_string());

            folded.normalize();
            assert_eq!(folded.to_string(), period.normalized().to_string());
        }
    }
}
