#![forbid(unsafe_code)]

//! Option definitions and their validating constructor
//!
//! A configuration document describes each option as a loosely typed entry
//! (`action`, `key`, `shortKey`, `number`, `value`, `defaultValue`). This
//! module turns one entry into an [`OptionSpec`] whose [`OptionKind`] carries
//! exactly the fields its action needs.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Reasons a configuration entry is rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigValidationError {
    /// The entry has no `action` field
    #[error("The config property '{name}' has no action")]
    MissingAction { name: String },

    /// The entry's action is neither `get` nor `set`
    #[error("The config property '{name}' has an unknown action '{action}'")]
    UnknownAction { name: String, action: String },

    /// A `get` entry without the count of values to capture
    #[error("The number of get action isn't defined for '{name}'")]
    MissingNumber { name: String },

    /// A `get` entry whose count is not a non-negative integer
    #[error("The number of get action for '{name}' must be a non-negative integer, found {found}")]
    InvalidNumber { name: String, found: Value },

    /// The entry is not an object, or one of its fields has the wrong type
    #[error("The config property '{name}' is malformed: {message}")]
    MalformedEntry { name: String, message: String },
}

impl ConfigValidationError {
    /// Name of the rejected entry
    pub fn name(&self) -> &str {
        match self {
            ConfigValidationError::MissingAction { name }
            | ConfigValidationError::UnknownAction { name, .. }
            | ConfigValidationError::MissingNumber { name }
            | ConfigValidationError::InvalidNumber { name, .. }
            | ConfigValidationError::MalformedEntry { name, .. } => name,
        }
    }
}

/// What a matched option does with the command line
#[derive(Debug, Clone, PartialEq)]
pub enum OptionKind {
    /// Capture up to `number` following values
    Get { number: usize },
    /// Assign `value` when the flag is present
    Set { value: Value },
}

/// A validated option definition
#[derive(Debug, Clone, PartialEq)]
pub struct OptionSpec {
    /// Entry name; the key under which the resolved value is stored
    pub name: String,
    /// Matched by `--long_key`
    pub long_key: String,
    /// Matched by `-short_key`
    pub short_key: Option<String>,
    pub kind: OptionKind,
    /// Reported when the flag never appears on the command line
    pub default_value: Option<Value>,
}

/// An entry as it appears in a configuration document
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawOptionEntry {
    action: Option<String>,
    key: Option<Value>,
    short_key: Option<Value>,
    number: Option<Value>,
    value: Option<Value>,
    default_value: Option<Value>,
}

impl OptionSpec {
    /// Creates a `get` option capturing `number` values
    pub fn get(name: impl Into<String>, long_key: impl Into<String>, number: usize) -> Self {
        OptionSpec {
            name: name.into(),
            long_key: long_key.into(),
            short_key: None,
            kind: OptionKind::Get { number },
            default_value: None,
        }
    }

    /// Creates a `set` option assigning `value`
    pub fn set(name: impl Into<String>, long_key: impl Into<String>, value: Value) -> Self {
        OptionSpec {
            name: name.into(),
            long_key: long_key.into(),
            short_key: None,
            kind: OptionKind::Set { value },
            default_value: None,
        }
    }

    /// Adds a short key
    pub fn with_short_key(mut self, short_key: impl Into<String>) -> Self {
        self.short_key = Some(short_key.into());
        self
    }

    /// Adds a default value
    pub fn with_default(mut self, default_value: Value) -> Self {
        self.default_value = Some(default_value);
        self
    }

    /// Validates a configuration entry named `name`
    ///
    /// A `set` entry without a `value` falls back to `true`; the fallback is
    /// reported as a warning. A missing `key` falls back to the entry name
    /// and an empty `shortKey` counts as absent. A key that is not a string
    /// is ignored with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The entry is not an object, or `action` is not a string
    /// - The action is missing or unknown
    /// - A `get` entry has no usable `number`
    pub fn from_entry(name: &str, entry: &Value) -> Result<Self, ConfigValidationError> {
        if !entry.is_object() {
            return Err(ConfigValidationError::MalformedEntry {
                name: name.to_string(),
                message: "expected an object".to_string(),
            });
        }

        let raw = RawOptionEntry::deserialize(entry).map_err(|e| {
            ConfigValidationError::MalformedEntry {
                name: name.to_string(),
                message: e.to_string(),
            }
        })?;

        let kind = match raw.action.as_deref() {
            Some("get") => {
                let number = raw.number.ok_or_else(|| ConfigValidationError::MissingNumber {
                    name: name.to_string(),
                })?;
                let count = number
                    .as_u64()
                    .and_then(|n| usize::try_from(n).ok())
                    .ok_or_else(|| ConfigValidationError::InvalidNumber {
                        name: name.to_string(),
                        found: number.clone(),
                    })?;
                OptionKind::Get { number: count }
            }
            Some("set") => {
                let value = match raw.value {
                    Some(value) => value,
                    None => {
                        tracing::warn!(option = name, "The set value of '{}' is not defined. Use true.", name);
                        Value::Bool(true)
                    }
                };
                OptionKind::Set { value }
            }
            Some(other) => {
                return Err(ConfigValidationError::UnknownAction {
                    name: name.to_string(),
                    action: other.to_string(),
                });
            }
            None => {
                return Err(ConfigValidationError::MissingAction {
                    name: name.to_string(),
                });
            }
        };

        Ok(OptionSpec {
            name: name.to_string(),
            long_key: key_text(name, "key", raw.key).unwrap_or_else(|| name.to_string()),
            short_key: key_text(name, "shortKey", raw.short_key).filter(|k| !k.is_empty()),
            kind,
            default_value: raw.default_value,
        })
    }
}

/// A key field as text; keys of any other type are dropped
fn key_text(name: &str, field: &str, key: Option<Value>) -> Option<String> {
    match key? {
        Value::String(text) => Some(text),
        Value::Null => None,
        other => {
            tracing::warn!(
                option = name,
                "The {} of '{}' must be a string, found {}; ignoring it",
                field,
                name,
                other
            );
            None
        }
    }
}
