//! Error types for planex-init

use std::path::PathBuf;

use crate::signals::INTERRUPTED_EXIT_CODE;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that end the process with a non-zero status
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from planex-stanza
    #[error(transparent)]
    Stanza(#[from] planex_stanza::Error),

    /// SIGINT arrived while the run was in progress
    #[error("Interrupted")]
    Interrupted,

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A bundled resource could not be located
    #[error("Could not find {name} (searched {})", display_dirs(.searched))]
    ResourceNotFound { name: String, searched: Vec<PathBuf> },

    /// Invalid log filter
    #[error("Invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),

    /// Logging was already initialised
    #[error("Failed to initialise logging: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Interrupted | Self::Stanza(planex_stanza::Error::Interrupted) => {
                INTERRUPTED_EXIT_CODE
            }
            _ => 1,
        }
    }
}

fn display_dirs(dirs: &[PathBuf]) -> String {
    if dirs.is_empty() {
        return "nowhere".to_string();
    }
    dirs.iter()
        .map(|d| d.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupted_exit_code() {
        let error = CliError::from(planex_stanza::Error::Interrupted);
        assert_eq!(error.exit_code(), 130);
    }

    #[test]
    fn test_io_exit_code() {
        let error = CliError::from(std::io::Error::other("boom"));
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_resource_not_found_message() {
        let error = CliError::ResourceNotFound {
            name: "Makefile.rules".to_string(),
            searched: vec![PathBuf::from("/a"), PathBuf::from("/b")],
        };
        assert_eq!(
            error.to_string(),
            "Could not find Makefile.rules (searched /a, /b)"
        );
    }
}
