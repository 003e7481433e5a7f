#![forbid(unsafe_code)]

//! Option registration
//!
//! [`ConfigRegistrar`] validates every entry of a configuration map and
//! indexes the accepted options by long key and by short key. Rejected
//! entries are logged and kept aside; they never take part in matching.

use crate::config::option_spec::{ConfigValidationError, OptionSpec};
use crate::params::ParameterSet;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Top-level entry reserved for parser options rather than an option definition
pub const RESERVED_OPTIONS_KEY: &str = "_options";

/// Lookup tables for registered options
#[derive(Debug, Clone, Default)]
pub struct Registry {
    specs: Vec<OptionSpec>,
    by_long_key: HashMap<String, usize>,
    by_short_key: HashMap<String, usize>,
}

impl Registry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an option to both tables; on a key collision the last one wins
    pub fn insert(&mut self, spec: OptionSpec) {
        let index = self.specs.len();

        if let Some(previous) = self.by_long_key.insert(spec.long_key.clone(), index) {
            tracing::warn!(
                option = %spec.name,
                replaced = %self.specs[previous].name,
                "Long key '{}' is registered twice; the last definition wins",
                spec.long_key
            );
        }

        if let Some(short_key) = &spec.short_key {
            if let Some(previous) = self.by_short_key.insert(short_key.clone(), index) {
                tracing::warn!(
                    option = %spec.name,
                    replaced = %self.specs[previous].name,
                    "Short key '{}' is registered twice; the last definition wins",
                    short_key
                );
            }
        }

        self.specs.push(spec);
    }

    /// Looks up an option by its long key
    pub fn by_long_key(&self, key: &str) -> Option<&OptionSpec> {
        self.by_long_key.get(key).map(|&i| &self.specs[i])
    }

    /// Looks up an option by its short key
    pub fn by_short_key(&self, key: &str) -> Option<&OptionSpec> {
        self.by_short_key.get(key).map(|&i| &self.specs[i])
    }

    /// All registered options in registration order
    pub fn specs(&self) -> &[OptionSpec] {
        &self.specs
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

/// Result of registering a configuration map
#[derive(Debug, Default)]
pub struct Registration {
    pub registry: Registry,
    /// Entries dropped during validation, in document order
    pub rejected: Vec<ConfigValidationError>,
}

/// Builds a [`Registry`] from a configuration map
pub struct ConfigRegistrar<'a> {
    parameters: &'a mut ParameterSet,
}

impl<'a> ConfigRegistrar<'a> {
    /// Creates a registrar that seeds default values into `parameters`
    pub fn new(parameters: &'a mut ParameterSet) -> Self {
        ConfigRegistrar { parameters }
    }

    /// Validates and registers every entry of `config`, in document order
    ///
    /// Each rejected entry is reported through the diagnostic sink and
    /// returned in [`Registration::rejected`]; registration carries on with
    /// the remaining entries.
    pub fn register(self, config: &Map<String, Value>) -> Registration {
        let mut registration = Registration::default();

        for (name, entry) in config {
            if name == RESERVED_OPTIONS_KEY {
                tracing::debug!(option = %name, "Skipping reserved configuration entry");
                continue;
            }

            match OptionSpec::from_entry(name, entry) {
                Ok(spec) => {
                    warn_if_unmatchable(&spec);
                    if let Some(default_value) = &spec.default_value {
                        self.parameters.set(&spec.name, default_value.clone());
                    }
                    registration.registry.insert(spec);
                }
                Err(e) => {
                    tracing::error!(option = %name, "{}", e);
                    registration.rejected.push(e);
                }
            }
        }

        registration
    }
}

/// Flags are letters only, so a key with anything else can never be matched
fn warn_if_unmatchable(spec: &OptionSpec) {
    let keys = std::iter::once(&spec.long_key).chain(spec.short_key.as_ref());
    for key in keys {
        if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphabetic()) {
            tracing::warn!(
                option = %spec.name,
                "Key '{}' is not purely alphabetic and will never match a flag",
                key
            );
        }
    }
}
