#![forbid(unsafe_code)]

//! cmdconf: declarative command-line analysis
//!
//! Options are described once in a configuration (an in-memory map or a
//! JSON/TOML file). The argument vector is then scanned for `-x` and `--xxx`
//! flags: "get" options capture the values that follow them, "set" options
//! assign a fixed value, and everything else is kept as positional arguments.

pub mod cli;
pub mod config;
pub mod engine;
pub mod output;
pub mod params;
pub mod parser;

pub use config::{ConfigInput, ConfigSourceError, ConfigValidationError, OptionKind, OptionSpec};
pub use params::ParameterSet;
pub use parser::CmdConf;
