//! planex-init
//!
//! Creates or regenerates a Makefile carrying the planex-init include stanza.
//!
//! * Without arguments, create or update `Makefile` in the current directory.
//! * With `--rules`, print the full path to the bundled `Makefile.rules`.

mod cli;
mod commands;
mod error;
mod logging;
mod resources;
mod signals;

use std::io;

use clap::{CommandFactory, Parser};
use colored::Colorize;

use cli::Cli;
use error::Result;
use planex_stanza::{CancellationToken, ManagedFile, RunContext};
use resources::InstalledResources;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

fn run() -> Result<()> {
    let cancel = CancellationToken::new();
    signals::install(&cancel)?;

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "planex-init", &mut io::stdout());
        return Ok(());
    }

    logging::init(cli.log_level())?;

    if cli.rules {
        commands::run_rules(&InstalledResources::discover(), &mut io::stdout())?;
    } else {
        let ctx = RunContext::current(cancel.clone());
        let file = ManagedFile::new(&cli.file);
        commands::run_init(&file, &ctx)?;
    }

    // An interrupt that arrived after the last cancellation point still fails the run.
    signals::check_interrupted(&cancel)
}
