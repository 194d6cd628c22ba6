//! Per-run context handed to [`ManagedFile::ensure`](crate::ManagedFile::ensure).
//!
//! Built once at process start, it carries the log sink and the
//! cancellation token so nothing in this crate reaches for process globals.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::Dispatch;

use crate::error::{Error, Result};

/// Shared flag signalling that the run should stop before its next write.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// The underlying flag, for handing to signal handlers.
    pub fn flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.flag)
    }
}

/// Log sink plus cancellation token for a single run.
#[derive(Debug, Clone)]
pub struct RunContext {
    dispatch: Dispatch,
    cancel: CancellationToken,
}

impl RunContext {
    pub fn new(dispatch: Dispatch, cancel: CancellationToken) -> Self {
        Self { dispatch, cancel }
    }

    /// A context logging to whatever dispatcher is current on this thread.
    pub fn current(cancel: CancellationToken) -> Self {
        let dispatch = tracing::dispatcher::get_default(Dispatch::clone);
        Self::new(dispatch, cancel)
    }

    /// A context that discards all log output.
    pub fn silent() -> Self {
        Self::new(Dispatch::none(), CancellationToken::new())
    }

    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Run `f` with this context's dispatcher as the default log sink.
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }

    /// Fail with [`Error::Interrupted`] once the token has been cancelled.
    pub fn check_cancelled(&self) -> Result<()> {
        if self.cancel.is_cancelled() {
            tracing::debug!("Run cancelled, skipping write");
            return Err(Error::Interrupted);
        }
        Ok(())
    }
}
