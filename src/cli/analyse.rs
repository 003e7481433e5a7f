//! The `cmdconf` command: analyse arguments and print the result
//!
//! The arguments given after `--` are analysed as if they followed the
//! program and script entries of a process's argument vector; the
//! configuration path stands in for the script.

use crate::cli::args::{Cli, OutputFormat};
use crate::output::{HumanFormatter, JsonlFormatter};
use crate::parser::CmdConf;
use std::io::Write;

/// Exit codes for the analyse command
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;

/// Program name placed at the head of the analysed argument vector
const PROGRAM_NAME: &str = "cmdconf";

/// Run the analyse command
///
/// These exit codes belong to the `cmdconf` binary only; the library
/// itself reports failures through the diagnostic sink and never exits.
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 1: The configuration could not be loaded, or output failed
pub fn run_analyse(cli: &Cli) -> i32 {
    match run_analyse_inner(cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

/// Internal implementation of the analyse command
fn run_analyse_inner(cli: &Cli) -> Result<(), String> {
    let mut cmd = CmdConf::new(argument_vector(cli));

    cmd.try_configure(cli.config.as_path())
        .map_err(|e| e.to_string())?;

    let params = cmd.get_parameters();

    match cli.format {
        OutputFormat::Human => HumanFormatter::new(cli.color.to_termcolor())
            .write_to_stdout(params)
            .map_err(|e| format!("Failed to write output: {}", e)),
        OutputFormat::Jsonl => {
            let output = JsonlFormatter::new().format(params);
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|e| format!("Failed to write output: {}", e))
        }
    }
}

/// Program, configuration path, then the user arguments
fn argument_vector(cli: &Cli) -> Vec<String> {
    let mut items = Vec::with_capacity(cli.args.len() + 2);
    items.push(PROGRAM_NAME.to_string());
    items.push(cli.config.display().to_string());
    items.extend(cli.args.iter().cloned());
    items
}
