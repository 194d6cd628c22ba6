//! Log output for the binary.
//!
//! By default only errors are shown, as the bare message on stderr.

use std::io::{self, IsTerminal};

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::Result;

/// How much the binary logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Nothing at all, `RUST_LOG` included.
    Off,
    /// Errors only, unless `RUST_LOG` says otherwise.
    Default,
    /// Debug events, with level and target.
    Verbose,
}

impl LogLevel {
    fn filter(self) -> Result<EnvFilter> {
        let filter = match self {
            Self::Off => EnvFilter::try_new("off")?,
            Self::Verbose => EnvFilter::try_new("debug")?,
            Self::Default => match EnvFilter::try_from_default_env() {
                Ok(filter) => filter,
                Err(_) => EnvFilter::try_new("error")?,
            },
        };
        Ok(filter)
    }
}

/// Install the global subscriber.
pub fn init(level: LogLevel) -> Result<()> {
    let verbose = level == LogLevel::Verbose;

    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .without_time()
        .with_level(verbose)
        .with_target(verbose);

    tracing_subscriber::registry()
        .with(level.filter()?)
        .with(fmt_layer)
        .try_init()?;

    tracing::debug!("Verbose mode enabled");
    Ok(())
}
