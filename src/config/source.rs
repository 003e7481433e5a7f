#![forbid(unsafe_code)]

//! Configuration sources
//!
//! A parser is configured either from an in-memory map or from a file. Files
//! are read as UTF-8 and parsed as JSON, or as TOML when the extension is
//! `.toml`. The document must be an object mapping option names to entries.

use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Option name → raw entry, in document order
pub type ConfigMap = Map<String, Value>;

/// Errors that can occur when loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigSourceError {
    /// The file does not exist
    #[error("Can't find {}", path.display())]
    NotFound { path: PathBuf },

    /// The file exists but could not be read
    #[error("Can't read file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a well-formed document
    #[error("The file '{}' isn't correctly formed: {message}", path.display())]
    Malformed { path: PathBuf, message: String },

    /// The configuration parsed, but its top level is not an object
    #[error("The configuration from {origin} must contain an object of options at top level")]
    NotAnObject { origin: String },
}

impl ConfigSourceError {
    /// Path of the offending file, if the configuration came from one
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSourceError::NotFound { path }
            | ConfigSourceError::Read { path, .. }
            | ConfigSourceError::Malformed { path, .. } => Some(path),
            ConfigSourceError::NotAnObject { .. } => None,
        }
    }
}

/// Something a parser can be configured from
#[derive(Debug, Clone)]
pub enum ConfigInput {
    /// An already parsed configuration
    Map(ConfigMap),
    /// A configuration document that has to be loaded first
    Path(PathBuf),
    /// A parsed value that is not an object
    Invalid(Value),
}

impl ConfigInput {
    /// Resolves the input into a configuration map
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be found, read, or parsed, or if
    /// the configuration is not an object.
    pub fn resolve(self) -> Result<ConfigMap, ConfigSourceError> {
        match self {
            ConfigInput::Map(map) => Ok(map),
            ConfigInput::Path(path) => load_config_file(&path),
            ConfigInput::Invalid(value) => Err(ConfigSourceError::NotAnObject {
                origin: format!("an in-memory {}", value_kind(&value)),
            }),
        }
    }
}

impl From<ConfigMap> for ConfigInput {
    fn from(map: ConfigMap) -> Self {
        ConfigInput::Map(map)
    }
}

impl From<Value> for ConfigInput {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => ConfigInput::Map(map),
            other => ConfigInput::Invalid(other),
        }
    }
}

impl From<&str> for ConfigInput {
    fn from(path: &str) -> Self {
        ConfigInput::Path(PathBuf::from(path))
    }
}

impl From<String> for ConfigInput {
    fn from(path: String) -> Self {
        ConfigInput::Path(PathBuf::from(path))
    }
}

impl From<&Path> for ConfigInput {
    fn from(path: &Path) -> Self {
        ConfigInput::Path(path.to_path_buf())
    }
}

impl From<PathBuf> for ConfigInput {
    fn from(path: PathBuf) -> Self {
        ConfigInput::Path(path)
    }
}

/// Document formats understood by [`load_config_file`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentFormat {
    Json,
    Toml,
}

impl DocumentFormat {
    fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => DocumentFormat::Toml,
            _ => DocumentFormat::Json,
        }
    }
}

/// Loads a configuration map from a file
///
/// Relative paths are resolved against the current working directory.
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist
/// - The file cannot be read as UTF-8 text
/// - The content is not valid JSON (or TOML for `.toml` files)
/// - The top level of the document is not an object
pub fn load_config_file(path: &Path) -> Result<ConfigMap, ConfigSourceError> {
    let path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    tracing::info!(path = %path.display(), "Read cmd-conf configuration from {}", path.display());

    if !path.exists() {
        return Err(ConfigSourceError::NotFound { path });
    }

    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(source) => return Err(ConfigSourceError::Read { path, source }),
    };

    parse_document(&content, DocumentFormat::for_path(&path), path)
}

fn parse_document(
    content: &str,
    format: DocumentFormat,
    path: PathBuf,
) -> Result<ConfigMap, ConfigSourceError> {
    let value: Value = match format {
        DocumentFormat::Json => serde_json::from_str::<Value>(content).map_err(|e| e.to_string()),
        DocumentFormat::Toml => toml::from_str::<Value>(content).map_err(|e| e.to_string()),
    }
    .map_err(|message| ConfigSourceError::Malformed {
        path: path.clone(),
        message,
    })?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(ConfigSourceError::NotAnObject {
            origin: format!("'{}'", path.display()),
        }),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
