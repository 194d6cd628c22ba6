//! Create or update the Makefile stanza.

use planex_stanza::{ManagedFile, Outcome, RunContext};

use crate::error::Result;

/// Run the default command against `file`.
///
/// A missing stanza has already been reported by the time this returns and
/// does not count as a failure.
pub fn run_init(file: &ManagedFile, ctx: &RunContext) -> Result<Outcome> {
    let outcome = file.ensure(ctx)?;

    ctx.in_scope(|| match &outcome {
        Outcome::Created => tracing::info!("Created {}", file.path().display()),
        Outcome::Updated { replaced } => tracing::info!(
            "Regenerated planex-init stanza in {} ({} line(s) replaced)",
            file.path().display(),
            replaced
        ),
        Outcome::Unchanged => tracing::info!("{} is up to date", file.path().display()),
        Outcome::StanzaMissing(_) => {}
    });

    Ok(outcome)
}
