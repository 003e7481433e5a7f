#![forbid(unsafe_code)]

use clap::Parser;
use cmdconf::cli::{Cli, run_analyse};
use std::io::IsTerminal;

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);
    std::process::exit(run_analyse(&cli));
}

fn init_tracing(cli: &Cli) {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::from(cli.effective_log_level()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}
