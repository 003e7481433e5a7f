#![forbid(unsafe_code)]

//! Parsed command-line results

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Parameters and leftover arguments extracted from a command line
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParameterSet {
    /// Option name → resolved value, in the order values were first set
    parameters: Map<String, Value>,
    /// Tokens that were neither flags nor consumed by a `get` option
    arguments: Vec<String>,
    /// User-supplied tokens, program and script excluded
    raw_arguments: Vec<String>,
    /// The whole argument vector joined by spaces
    command: String,
    /// Option name → index in `raw_arguments` of the flag that set it
    positions: BTreeMap<String, usize>,
}

impl ParameterSet {
    /// Creates an empty set for a command line
    pub fn new(raw_arguments: Vec<String>, command: String) -> Self {
        ParameterSet {
            raw_arguments,
            command,
            ..Self::default()
        }
    }

    /// Value of the parameter `name`
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.parameters.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.parameters.contains_key(name)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Value::as_bool)
    }

    pub fn get_i64(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Value::as_i64)
    }

    /// Numeric value as a float; integers are widened
    pub fn get_f64(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_f64)
    }

    /// True when the parameter holds boolean `true`
    pub fn is_set(&self, name: &str) -> bool {
        self.get_bool(name).unwrap_or(false)
    }

    /// Index of the flag that last set `name`, if it came from the command line
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// All parameters, in the order they were first set
    pub fn parameters(&self) -> &Map<String, Value> {
        &self.parameters
    }

    /// Leftover positional arguments, in command-line order
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    pub fn raw_arguments(&self) -> &[String] {
        &self.raw_arguments
    }

    /// The reconstructed command string
    pub fn command(&self) -> &str {
        &self.command
    }

    pub(crate) fn set(&mut self, name: &str, value: Value) {
        self.parameters.insert(name.to_string(), value);
    }

    pub(crate) fn set_at(&mut self, name: &str, value: Value, position: usize) {
        self.set(name, value);
        self.positions.insert(name.to_string(), position);
    }

    pub(crate) fn push_argument(&mut self, argument: &str) {
        self.arguments.push(argument.to_string());
    }
}
