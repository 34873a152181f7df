//! Command line runner for the syntax tour.
//!
//! Runs every demonstration step in order and prints the tour's output on
//! stdout. Logs, reports and the final diagnostic go to stderr.
use clap::{Args, Parser, Subcommand, ValueEnum};
use inline_colorization::{color_red, color_reset, color_yellow};
use std::io::{self, Write};
use std::process::ExitCode;
use thiserror::Error;
use tracing::debug;

use syntax_tour::{ErrorPolicy, Report, Runner, STEPS};

mod logging;
mod report;

/// Exit status when every step passed.
const EXIT_OK: u8 = 0;
/// Exit status when a step failed.
const EXIT_STEP_FAILED: u8 = 1;
/// Exit status when the CLI itself failed.
const EXIT_CLI_ERROR: u8 = 2;

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to initialize logging: {0}")]
    Logging(String),
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser)]
#[command(name = "syntax-tour")]
#[command(bin_name = "syntax-tour")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run every step in order (the default)
    Run(RunArgs),
    /// List the steps without running them
    List(ListArgs),
}

#[derive(ValueEnum, Clone, Copy, Default, Debug)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    #[default]
    None,
}

#[derive(ValueEnum, Clone, Copy, Default, Debug, PartialEq, Eq)]
enum ReportFormat {
    #[default]
    None,
    Text,
    Json,
}

#[derive(Args, Default)]
struct RunArgs {
    /// Keep running the remaining steps after one fails
    #[arg(short, long)]
    keep_going: bool,
    #[arg(short, long, value_enum, default_value = "none")]
    log_level: LogLevel,
    /// Emit log lines as JSON
    #[arg(long)]
    log_json: bool,
    /// Per-step summary written to stderr after the run
    #[arg(short, long, value_enum, default_value = "none")]
    report: ReportFormat,
}

#[derive(Args)]
struct ListArgs {
    /// Print the step list as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Run(RunArgs::default()));
    let result = match command {
        Command::Run(args) => cmd_run(args),
        Command::List(args) => cmd_list(args),
    };
    ExitCode::from(exit_status(result))
}

fn policy_for(args: &RunArgs) -> ErrorPolicy {
    if args.keep_going {
        ErrorPolicy::Continue
    } else {
        ErrorPolicy::Halt
    }
}

fn cmd_run(args: RunArgs) -> Result<u8, CliError> {
    logging::init(args.log_level, args.log_json)?;
    let policy = policy_for(&args);
    debug!(?policy, log_level = ?args.log_level, report = ?args.report, "parsed arguments");

    let report = {
        let mut out = io::stdout().lock();
        Runner::new(policy).run(&mut out)
    };

    let mut err = io::stderr().lock();
    match args.report {
        ReportFormat::None => {}
        ReportFormat::Text => report::write_text(&report, &mut err)?,
        ReportFormat::Json => report::write_json(&report, &mut err)?,
    }

    finish(&report, &mut err)
}

/// Write the failure diagnostics for `report` and pick the exit status.
///
/// A halted run that hit a failure exits non-zero. A run that kept going
/// exits normally unless a step not marked as an expected failure failed.
fn finish(report: &Report, err: &mut dyn Write) -> Result<u8, CliError> {
    match report.policy {
        ErrorPolicy::Halt => {
            if let Some(failure) = report.first_failure() {
                writeln!(err, "{color_red}Error: {}{color_reset}", failure)?;
                return Ok(EXIT_STEP_FAILED);
            }
            Ok(EXIT_OK)
        }
        ErrorPolicy::Continue => {
            for failure in report.failures() {
                writeln!(err, "{color_yellow}Error: {}{color_reset}", failure)?;
            }
            if report.unexpected_failures().count() == 0 {
                Ok(EXIT_OK)
            } else {
                Ok(EXIT_STEP_FAILED)
            }
        }
    }
}

fn exit_status(result: Result<u8, CliError>) -> u8 {
    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{color_red}{}{color_reset}", e);
            EXIT_CLI_ERROR
        }
    }
}

fn cmd_list(args: ListArgs) -> Result<u8, CliError> {
    let mut out = io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &STEPS[..])?;
        writeln!(out)?;
    } else {
        let _ = report::step_table(&STEPS).print(&mut out)?;
    }
    Ok(EXIT_OK)
}
