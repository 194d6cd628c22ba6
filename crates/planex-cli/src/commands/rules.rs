//! Print the location of the bundled rules file.

use std::io::Write;

use crate::error::Result;
use crate::resources::{RULES_FILE, ResourceResolver};

/// Resolve `Makefile.rules` and write its absolute path to `out`.
pub fn run_rules(resolver: &dyn ResourceResolver, out: &mut impl Write) -> Result<()> {
    let path = resolver.resolve(RULES_FILE)?;
    writeln!(out, "{}", path.display())?;
    Ok(())
}
