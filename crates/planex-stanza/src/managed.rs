//! The Makefile as a whole: create it, or refresh its stanza.

use std::path::{Path, PathBuf};

use planex_fs::{create_new, join_lines, read_lines, write_atomic};

use crate::context::RunContext;
use crate::error::Result;
use crate::stanza::{Stanza, StanzaError};
use crate::template::StanzaTemplate;
use crate::writer::{render_new, splice};

/// Name of the managed file inside a working directory.
pub const DEFAULT_FILE_NAME: &str = "Makefile";

/// What [`ManagedFile::ensure`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The file did not exist and was written from the template.
    Created,
    /// The stanza payload was replaced; `replaced` is the number of old payload lines.
    Updated { replaced: usize },
    /// The stanza already held exactly the include line; nothing was written.
    Unchanged,
    /// No usable stanza; the file was left untouched and the problem logged.
    StanzaMissing(StanzaError),
}

/// A Makefile holding (or about to hold) a planex-init stanza.
#[derive(Debug, Clone)]
pub struct ManagedFile {
    path: PathBuf,
    template: StanzaTemplate,
}

impl ManagedFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            template: StanzaTemplate::default(),
        }
    }

    /// The `Makefile` inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(DEFAULT_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the file, or refresh the stanza of an existing one.
    ///
    /// Performs at most one whole-file write. A file without both markers is
    /// reported at error level and returned as [`Outcome::StanzaMissing`].
    ///
    /// # Errors
    /// Any I/O failure, or [`Error::Interrupted`](crate::Error::Interrupted)
    /// if the context was cancelled before the write.
    pub fn ensure(&self, ctx: &RunContext) -> Result<Outcome> {
        ctx.in_scope(|| {
            if self.path.exists() {
                self.update(ctx)
            } else {
                self.create(ctx)
            }
        })
    }

    fn create(&self, ctx: &RunContext) -> Result<Outcome> {
        tracing::debug!("Creating {}", self.path.display());
        let content = render_new(&self.template);

        ctx.check_cancelled()?;
        create_new(&self.path, content.as_bytes())?;
        Ok(Outcome::Created)
    }

    fn update(&self, ctx: &RunContext) -> Result<Outcome> {
        let lines = read_lines(&self.path)?;

        let stanza = match Stanza::locate(&lines, &self.template) {
            Ok(stanza) => stanza,
            Err(err) => {
                tracing::error!(
                    "Couldn't find planex-init stanza in {} ({})",
                    self.path.display(),
                    err
                );
                return Ok(Outcome::StanzaMissing(err));
            }
        };

        let replaced = stanza.payload(&lines).len();
        let updated = splice(&lines, &stanza, &self.template);
        if updated == lines {
            tracing::debug!("{} is up to date", self.path.display());
            return Ok(Outcome::Unchanged);
        }

        tracing::debug!(
            "Replacing {} line(s) between lines {} and {} of {}",
            replaced,
            stanza.start() + 1,
            stanza.end() + 1,
            self.path.display()
        );
        ctx.check_cancelled()?;
        write_atomic(&self.path, join_lines(&updated).as_bytes())?;
        Ok(Outcome::Updated { replaced })
    }
}
