//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;
use planex_stanza::DEFAULT_FILE_NAME;

use crate::logging::LogLevel;

/// Create or regenerate a Makefile with special planex-init comments
#[derive(Parser, Debug)]
#[command(name = "planex-init")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print the full path to Makefile.rules
    #[arg(long)]
    pub rules: bool,

    /// Makefile to create or update
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_FILE_NAME)]
    pub file: PathBuf,

    /// Enable verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress all log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL", exclusive = true)]
    pub completions: Option<Shell>,
}

impl Cli {
    pub fn log_level(&self) -> LogLevel {
        if self.quiet {
            LogLevel::Off
        } else if self.verbose {
            LogLevel::Verbose
        } else {
            LogLevel::Default
        }
    }
}
