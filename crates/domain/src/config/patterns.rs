use super::errors::ConfigError;
use crate::unit::TimeUnit;
use crate::validators::{validate_pattern_name, validate_pattern_text};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::warn;

/// One named pattern entry
///
/// ```toml
/// [[patterns]]
/// name = "minutes"
/// pattern = "mmmm:ss"
/// max_unit = "minute"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PatternConfig {
    pub name: String,

    /// Template in the pattern language, e.g. "hh:mm:ss"
    pub pattern: String,

    /// Largest unit shown when formatting; values are folded into it.
    /// Also lifts the digit limit for that unit when parsing.
    #[serde(default)]
    pub max_unit: Option<TimeUnit>,
}

impl PatternConfig {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            max_unit: None,
        }
    }

    pub fn with_max_unit(mut self, unit: TimeUnit) -> Self {
        self.max_unit = Some(unit);
        self
    }
}

/// Top-level configuration: the set of patterns an application formats
/// and parses with
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FormatConfig {
    #[serde(default)]
    pub patterns: Vec<PatternConfig>,
}

impl FormatConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: FormatConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();

        for entry in &self.patterns {
            validate_pattern_name(&entry.name)
                .and_then(|_| validate_pattern_text(&entry.name, &entry.pattern))
                .map_err(|message| {
                    warn!(name = %entry.name, error = %message, "Rejected pattern entry");
                    ConfigError::Validation(message)
                })?;

            if !seen.insert(entry.name.as_str()) {
                warn!(name = %entry.name, "Duplicate pattern name");
                return Err(ConfigError::Validation(format!(
                    "Duplicate pattern name '{}'",
                    entry.name
                )));
            }
        }

        Ok(())
    }
}
