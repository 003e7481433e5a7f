#![forbid(unsafe_code)]

//! Single-pass argument scan
//!
//! The scanner walks the raw tokens with a cursor. Flag-shaped tokens are
//! looked up in the registry (short flags by short key, long flags by long
//! key); a hit is handed to the resolver and the cursor skips whatever the
//! resolver consumed. Other tokens become positional arguments.
//!
//! Flag-shaped tokens with no registered option are dropped: they are
//! neither parameters nor positional arguments.

use crate::config::option_spec::OptionSpec;
use crate::config::registry::Registry;
use crate::engine::resolver;
use crate::engine::token::Token;
use crate::params::ParameterSet;

/// Scans raw tokens against a registry
pub struct ArgumentScanner<'a> {
    registry: &'a Registry,
    tokens: &'a [String],
}

impl<'a> ArgumentScanner<'a> {
    /// Creates a scanner over `tokens`
    pub fn new(registry: &'a Registry, tokens: &'a [String]) -> Self {
        ArgumentScanner { registry, tokens }
    }

    /// Runs the scan, writing results into `parameters`
    pub fn scan(&self, parameters: &mut ParameterSet) {
        let mut cursor = 0;

        while cursor < self.tokens.len() {
            let raw = &self.tokens[cursor];

            match Token::classify(raw) {
                Token::Positional(word) => parameters.push_argument(word),
                Token::LongFlag(word) => {
                    cursor += self.apply(self.registry.by_long_key(word), raw, cursor, parameters);
                }
                Token::ShortFlag(word) => {
                    cursor += self.apply(self.registry.by_short_key(word), raw, cursor, parameters);
                }
            }

            cursor += 1;
        }
    }

    /// Resolves a matched flag; returns how many following tokens it used
    fn apply(
        &self,
        spec: Option<&OptionSpec>,
        raw: &str,
        position: usize,
        parameters: &mut ParameterSet,
    ) -> usize {
        let Some(spec) = spec else {
            tracing::debug!(token = raw, position, "Ignoring unregistered flag");
            return 0;
        };

        let resolution = resolver::resolve(spec, position, self.tokens);
        tracing::debug!(
            option = %spec.name,
            position,
            consumed = resolution.consumed,
            "Matched option"
        );

        parameters.set_at(&spec.name, resolution.value, position);
        resolution.consumed
    }
}
