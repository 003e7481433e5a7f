#![forbid(unsafe_code)]

//! Token classification
//!
//! A flag is exactly one or two hyphens followed by ASCII letters. Anything
//! else (`-5`, `--dry-run`, `--key=value`, `-`) is a positional token.

use regex::Regex;
use std::sync::LazyLock;

static FLAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(-{1,2})([a-zA-Z]+)$").expect("flag pattern is a valid regex")
});

/// A classified command-line token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// `--word`
    LongFlag(&'a str),
    /// `-word`
    ShortFlag(&'a str),
    /// Anything that is not flag-shaped
    Positional(&'a str),
}

impl<'a> Token<'a> {
    /// Classifies a raw token
    pub fn classify(raw: &'a str) -> Self {
        let Some(captures) = FLAG_PATTERN.captures(raw) else {
            return Token::Positional(raw);
        };

        let (Some(dashes), Some(word)) = (captures.get(1), captures.get(2)) else {
            return Token::Positional(raw);
        };

        if dashes.as_str().len() == 2 {
            Token::LongFlag(word.as_str())
        } else {
            Token::ShortFlag(word.as_str())
        }
    }

    /// True for long and short flags
    pub fn is_flag(&self) -> bool {
        !matches!(self, Token::Positional(_))
    }
}

/// True when `raw` is flag-shaped
pub fn is_flag(raw: &str) -> bool {
    FLAG_PATTERN.is_match(raw)
}
