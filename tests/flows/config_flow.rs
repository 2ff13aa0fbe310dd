/// Config Flow Test
///
/// Tests configuration-driven formatting:
/// TOML file → FormatConfig → FormatRegistry → format/parse by name

#[path = "../common/mod.rs"]
mod common;
use common::TestPeriods;
use std::io::Write;
use timeperiod_domain::{FormatConfig, TimeUnit};
use timeperiod_format::{FormatRegistry, RegistryError};

const CONFIG: &str = r#"
[[patterns]]
name = "clock"
pattern = "hh:mm:ss.zzz"
max_unit = "hour"

[[patterns]]
name = "verbose"
pattern = "w WW, d DD, h HH, m MM, s SS 'and' z ZZ"

[[patterns]]
name = "stopwatch"
pattern = "mmmm:ss"
max_unit = "minute"
"#;

fn load_registry() -> FormatRegistry {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CONFIG.as_bytes()).unwrap();

    let config = FormatConfig::load(file.path()).expect("config should load");
    FormatRegistry::from_config(&config).expect("patterns should compile")
}

#[test]
fn test_registry_built_from_file() {
    let registry = load_registry();

    assert_eq!(registry.names(), vec!["clock", "stopwatch", "verbose"]);
    assert_eq!(
        registry.get("stopwatch").unwrap().max_unit(),
        Some(TimeUnit::Minute)
    );
}

#[test]
fn test_configured_patterns_round_trip() {
    let registry = load_registry();

    for name in ["clock", "verbose"] {
        for period in TestPeriods::all() {
            let text = registry.format(name, &period).unwrap();
            assert_eq!(registry.parse(name, &text).unwrap(), period, "{name}: {text}");
        }
    }
}

#[test]
fn test_configured_max_unit_applies() {
    let registry = load_registry();

    let text = registry
        .format("stopwatch", &TestPeriods::hours(2))
        .unwrap();
    assert_eq!(text, "0120:00");

    let parsed = registry.parse("stopwatch", "1212:00").unwrap();
    assert_eq!(parsed.hours(), 20);
    assert_eq!(parsed.minutes(), 12);
}

#[test]
fn test_bad_config_pattern_is_named() {
    let config = FormatConfig::from_toml_str(
        r#"
[[patterns]]
name = "broken"
pattern = "hh:mm:yy"
"#,
    )
    .unwrap();

    let err = FormatRegistry::from_config(&config).unwrap_err();

    assert!(matches!(err, RegistryError::Pattern { ref name, .. } if name == "broken"));
    assert!(err.to_string().contains("broken"));
}
