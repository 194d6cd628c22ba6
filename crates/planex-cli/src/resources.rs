//! Locating files installed alongside the binary.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{CliError, Result};

/// Rules file pulled in by the generated `include` line.
pub const RULES_FILE: &str = "Makefile.rules";

/// Maps a resource name to an absolute path.
pub trait ResourceResolver {
    fn resolve(&self, name: &str) -> Result<PathBuf>;
}

/// Looks for resources in a fixed list of directories, first hit wins.
#[derive(Debug, Clone)]
pub struct InstalledResources {
    search_dirs: Vec<PathBuf>,
}

impl InstalledResources {
    pub fn new(search_dirs: Vec<PathBuf>) -> Self {
        Self { search_dirs }
    }

    /// Search next to the executable, then in `<prefix>/share/planex`,
    /// then in the resources shipped with the source tree.
    pub fn discover() -> Self {
        let mut search_dirs = Vec::new();

        if let Some(exe_dir) = env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
        {
            if let Some(prefix) = exe_dir.parent() {
                search_dirs.push(exe_dir.clone());
                search_dirs.push(prefix.join("share").join("planex"));
            } else {
                search_dirs.push(exe_dir);
            }
        }
        search_dirs.push(Path::new(env!("CARGO_MANIFEST_DIR")).join("resources"));

        Self::new(search_dirs)
    }
}

impl ResourceResolver for InstalledResources {
    fn resolve(&self, name: &str) -> Result<PathBuf> {
        for dir in &self.search_dirs {
            let candidate = dir.join(name);
            if candidate.is_file() {
                tracing::debug!("Found {} at {}", name, candidate.display());
                return Ok(dunce::canonicalize(&candidate)?);
            }
        }

        Err(CliError::ResourceNotFound {
            name: name.to_string(),
            searched: self.search_dirs.clone(),
        })
    }
}
