//! Log subscriber setup.
//!
//! Logs always go to stderr so stdout carries only the tour's output.
//! `RUST_LOG` directives are merged in when logging is enabled.
use std::io;
use tracing_subscriber::filter::{Directive, EnvFilter, LevelFilter};

use crate::{CliError, LogLevel};

impl LogLevel {
    fn filter(self) -> Option<LevelFilter> {
        match self {
            LogLevel::Error => Some(LevelFilter::ERROR),
            LogLevel::Warn => Some(LevelFilter::WARN),
            LogLevel::Info => Some(LevelFilter::INFO),
            LogLevel::Debug => Some(LevelFilter::DEBUG),
            LogLevel::Trace => Some(LevelFilter::TRACE),
            LogLevel::None => None,
        }
    }
}

fn directive(level: LevelFilter) -> Result<Directive, CliError> {
    format!("syntax_tour={}", level)
        .parse()
        .map_err(|e| CliError::Logging(format!("{}", e)))
}

/// Install the global subscriber; does nothing for [`LogLevel::None`].
pub(crate) fn init(level: LogLevel, json: bool) -> Result<(), CliError> {
    let Some(level) = level.filter() else {
        return Ok(());
    };

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::OFF.into())
        .from_env_lossy()
        .add_directive(directive(level)?);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    let installed = if json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };
    installed.map_err(|e| CliError::Logging(e.to_string()))
}
