//! SIGINT handling.
//!
//! The first interrupt cancels the run's token, so no write starts after
//! it. A second interrupt exits immediately.

use std::io;
use std::sync::Arc;

use planex_stanza::CancellationToken;
use signal_hook::consts::SIGINT;
use signal_hook::flag;

use crate::error::{CliError, Result};

/// Exit status for a run stopped by SIGINT (128 + 2).
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Route SIGINT to `token`.
pub fn install(token: &CancellationToken) -> io::Result<()> {
    let cancelled = token.flag();
    // Registered first so it sees the flag as it was before this signal.
    flag::register_conditional_shutdown(SIGINT, INTERRUPTED_EXIT_CODE, Arc::clone(&cancelled))?;
    flag::register(SIGINT, cancelled)?;
    Ok(())
}

/// Fail with [`CliError::Interrupted`] if SIGINT arrived during the run.
pub fn check_interrupted(token: &CancellationToken) -> Result<()> {
    if token.is_cancelled() {
        return Err(CliError::Interrupted);
    }
    Ok(())
}
