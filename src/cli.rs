//! CLI argument parsing and command dispatch

pub mod analyse;
pub mod args;

// Re-export types for convenient access
pub use analyse::{EXIT_ERROR, EXIT_SUCCESS, run_analyse};
pub use args::{Cli, ColorChoice, LogLevel, OutputFormat};
