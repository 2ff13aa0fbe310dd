use crate::errors::RegistryError;
use crate::format::TimePeriodFormat;
use rustc_hash::FxHashMap;
use std::sync::Arc;
use timeperiod_domain::{FormatConfig, TimePeriod};
use tracing::info;

/// Named formats, each compiled once and shared by reference.
#[derive(Debug, Clone, Default)]
pub struct FormatRegistry {
    formats: FxHashMap<String, Arc<TimePeriodFormat>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &FormatConfig) -> Result<Self, RegistryError> {
        let mut registry = Self::new();

        for entry in &config.patterns {
            let mut format =
                TimePeriodFormat::new(&entry.pattern).map_err(|source| RegistryError::Pattern {
                    name: entry.name.clone(),
                    source,
                })?;
            if let Some(unit) = entry.max_unit {
                format = format.with_max_unit(unit);
            }
            registry.register(&entry.name, format)?;
        }

        info!(patterns = registry.len(), "Time period formats registered");
        Ok(registry)
    }

    pub fn register(
        &mut self,
        name: &str,
        format: TimePeriodFormat,
    ) -> Result<Arc<TimePeriodFormat>, RegistryError> {
        if self.formats.contains_key(name) {
            return Err(RegistryError::DuplicateName(name.to_string()));
        }
        let format = Arc::new(format);
        self.formats.insert(name.to_string(), Arc::clone(&format));
        Ok(format)
    }

    pub fn get(&self, name: &str) -> Option<Arc<TimePeriodFormat>> {
        self.formats.get(name).cloned()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.formats.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.formats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }

    pub fn format(&self, name: &str, period: &TimePeriod) -> Result<String, RegistryError> {
        Ok(self.lookup(name)?.format(period))
    }

    pub fn parse(&self, name: &str, input: &str) -> Result<TimePeriod, RegistryError> {
        Ok(self.lookup(name)?.parse(input)?)
    }

    fn lookup(&self, name: &str) -> Result<&TimePeriodFormat, RegistryError> {
        self.formats
            .get(name)
            .map(Arc::as_ref)
            .ok_or_else(|| RegistryError::UnknownPattern(name.to_string()))
    }
}
