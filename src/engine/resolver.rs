#![forbid(unsafe_code)]

//! Value resolution for matched options

use crate::config::option_spec::{OptionKind, OptionSpec};
use crate::engine::token;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

static NUMERIC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+(?:(\.)[0-9]+)?$").expect("numeric pattern is a valid regex")
});

/// Outcome of resolving one matched option
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Value to store under the option's name
    pub value: Value,
    /// Number of tokens after the flag that were used up
    pub consumed: usize,
}

/// Resolves the value of `spec`, whose flag sits at `position` in `tokens`
///
/// A `get` option collects up to `number` tokens after the flag and stops
/// at the first flag-shaped one. With `number == 1` the single value (or
/// `null` when none was available) is returned, otherwise an array that may
/// be shorter than requested. A `set` option yields its configured value and
/// consumes nothing.
pub fn resolve(spec: &OptionSpec, position: usize, tokens: &[String]) -> Resolution {
    match &spec.kind {
        OptionKind::Get { number } => {
            let start = (position + 1).min(tokens.len());
            let values: Vec<Value> = tokens[start..]
                .iter()
                .take(*number)
                .take_while(|t| !token::is_flag(t))
                .map(|t| coerce(t))
                .collect();
            let consumed = values.len();

            let value = if *number == 1 {
                values.into_iter().next().unwrap_or(Value::Null)
            } else {
                Value::Array(values)
            };

            Resolution { value, consumed }
        }
        OptionKind::Set { value } => Resolution {
            value: value.clone(),
            consumed: 0,
        },
    }
}

/// Converts a numeric-looking token to a number
///
/// `"42"` becomes an integer and `"3.14"` a float; integers too large for
/// `u64` fall back to a float. Everything else stays a string.
pub fn coerce(raw: &str) -> Value {
    let Some(captures) = NUMERIC_PATTERN.captures(raw) else {
        return Value::String(raw.to_string());
    };

    if captures.get(1).is_none() {
        if let Ok(n) = raw.parse::<u64>() {
            return Value::from(n);
        }
    }

    raw.parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(raw.to_string()))
}
