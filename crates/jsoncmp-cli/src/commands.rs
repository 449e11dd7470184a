use std::io::{IsTerminal, Read};
use std::process::ExitCode;

use anyhow::{bail, Context};
use colored::Colorize;
use jsoncmp_compare::{compare, compare_values, format_document, parse_document, sample_pair, Side};
use jsoncmp_diff::pretty;
use serde_json::json;
use tracing::{debug, warn};

use crate::cli::*;
use crate::config::CliConfig;
use crate::render::{render_document_diff, render_report};

/// How a command finished, mapped onto the process exit status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The command succeeded (or the compared documents were equal).
    Success,
    /// The compared documents differ.
    Different,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Different => ExitCode::from(1),
        }
    }
}

/// Effective settings after layering flags over the config file.
struct Settings {
    format: OutputFormat,
    config: CliConfig,
}

pub fn run_command(cli: Cli) -> anyhow::Result<Outcome> {
    let config = CliConfig::load(cli.config.as_deref())?;
    apply_color(cli.color.unwrap_or(config.color));
    let settings = Settings {
        format: cli.format.unwrap_or(config.format),
        config,
    };

    match cli.command {
        Command::Diff(args) => cmd_diff(args, &settings),
        Command::Format(args) => cmd_format(args, &settings),
        Command::Sample(_) => cmd_sample(&settings),
        Command::Config(_) => cmd_config(&settings),
    }
}

fn apply_color(mode: ColorMode) {
    match mode {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Auto => {
            if !std::io::stdout().is_terminal() {
                colored::control::set_override(false);
            }
        }
    }
}

fn cmd_diff(args: DiffArgs, settings: &Settings) -> anyhow::Result<Outcome> {
    if !args.literal && args.first == "-" && args.second == "-" {
        bail!("only one input can be read from stdin");
    }
    if args.context.is_some() && !args.text {
        warn!("--context has no effect without --text");
    }
    let first = read_input(&args.first, args.literal)?;
    let second = read_input(&args.second, args.literal)?;

    let mut report = compare(&first, &second)?;
    if args.swap {
        debug!("swapping comparison direction");
        report = report.swapped();
    }
    let outcome = if report.are_equal() { Outcome::Success } else { Outcome::Different };

    if args.quiet {
        return Ok(outcome);
    }

    match settings.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report.view())?);
        }
        OutputFormat::Text => {
            println!("{}", render_report(&report, settings.config.show_values));
            if args.text && !report.are_equal() {
                let context = args.context.unwrap_or(settings.config.context_lines);
                print!("\n{}", render_document_diff(&report.document_diff(context)));
            }
        }
    }
    Ok(outcome)
}

fn cmd_format(args: FormatArgs, settings: &Settings) -> anyhow::Result<Outcome> {
    let text = read_input(&args.input, args.literal)?;
    match settings.format {
        OutputFormat::Json => println!("{}", parse_document(&text, Side::First)?),
        OutputFormat::Text => println!("{}", format_document(&text, Side::First)?),
    }
    Ok(Outcome::Success)
}

fn cmd_sample(settings: &Settings) -> anyhow::Result<Outcome> {
    let (first, second) = sample_pair();
    match settings.format {
        OutputFormat::Json => {
            println!("{}", pretty(&json!({ "first": first, "second": second })));
        }
        OutputFormat::Text => {
            println!("{}", "First:".bold());
            println!("{}", pretty(&first));
            println!("{}", "Second:".bold());
            println!("{}", pretty(&second));
            println!();
            let report = compare_values(first, second);
            println!("{}", render_report(&report, settings.config.show_values));
        }
    }
    Ok(Outcome::Success)
}

fn cmd_config(settings: &Settings) -> anyhow::Result<Outcome> {
    match settings.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&settings.config)?),
        OutputFormat::Text => print!("{}", settings.config.to_toml()?),
    }
    Ok(Outcome::Success)
}

/// Read a document argument: literal JSON text, `-` for stdin, or a file.
fn read_input(arg: &str, literal: bool) -> anyhow::Result<String> {
    if literal {
        return Ok(arg.to_string());
    }
    if arg == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("cannot read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(arg).with_context(|| format!("cannot read {arg}"))
}
