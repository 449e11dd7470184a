use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing::Level;

mod cli;
mod commands;
mod config;
mod render;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match commands::run_command(cli) {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::from(2)
        }
    }
}
