//! Whole-file I/O: line reads, exclusive creation, atomic replacement

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::lines::split_lines;
use crate::{Error, Result};

/// Upper bound on symlink hops, matching Linux's `MAXSYMLINKS`.
const MAX_LINK_DEPTH: usize = 40;

/// Read a file in full and split it into terminator-preserving lines.
///
/// Only regular files (or links to them) are read; FIFOs, devices and
/// directories are rejected before anything can block on them.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let metadata = fs::metadata(path).map_err(|e| Error::io(path, e))?;
    if !metadata.is_file() {
        return Err(Error::NotAFile {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let lines = split_lines(&content);
    tracing::trace!(path = %path.display(), lines = lines.len(), "read file");
    Ok(lines)
}

/// The file a write to `path` should land on.
///
/// Symlinks are followed, including dangling ones, whose final target is
/// returned even though it does not exist yet. Other paths come back as is.
pub fn resolve_target(path: &Path) -> Result<PathBuf> {
    let mut current = path.to_path_buf();

    for _ in 0..MAX_LINK_DEPTH {
        match fs::symlink_metadata(&current) {
            Ok(meta) if meta.file_type().is_symlink() => {}
            Ok(_) => return Ok(current),
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(current),
            Err(e) => return Err(Error::io(&current, e)),
        }

        if let Ok(resolved) = dunce::canonicalize(&current) {
            return Ok(resolved);
        }

        let link = fs::read_link(&current).map_err(|e| Error::io(&current, e))?;
        current = match current.parent() {
            Some(parent) => parent.join(link),
            None => link,
        };
    }

    Err(Error::io(
        path,
        std::io::Error::other("too many levels of symbolic links"),
    ))
}

/// Create a file that must not exist yet and write `content` to it.
///
/// A dangling symlink at `path` gets its target created. Fails if something
/// already occupies the path, including a file created between the caller's
/// existence check and this call.
pub fn create_new(path: &Path, content: &[u8]) -> Result<()> {
    let target = resolve_target(path)?;
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&target)
        .map_err(|e| Error::io(&target, e))?;

    file.write_all(content).map_err(|e| Error::io(&target, e))?;
    file.sync_all().map_err(|e| Error::io(&target, e))?;

    tracing::trace!(path = %target.display(), bytes = content.len(), "created file");
    Ok(())
}

/// Replace the content of `path` atomically.
///
/// Writes to a temp file next to the real target (symlinks are followed, so
/// a link stays a link), then renames it over that target. The target keeps
/// its permissions. Readers see either the old or the new content, never a mix.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let target = resolve_target(path)?;
    let temp_name = format!(
        ".{}.{}.tmp",
        target
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = target.with_file_name(&temp_name);

    let result = write_temp(&target, &temp_path, content)
        .and_then(|()| fs::rename(&temp_path, &target).map_err(|e| Error::io(&target, e)));

    if result.is_err() {
        // Leave no stray temp file behind; the target is untouched at this point.
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_temp(target: &Path, temp_path: &Path, content: &[u8]) -> Result<()> {
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)
        .map_err(|e| Error::io(temp_path, e))?;

    temp_file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: target.to_path_buf(),
    })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(temp_path, e))?;
    temp_file.sync_all().map_err(|e| Error::io(temp_path, e))?;

    if let Ok(metadata) = fs::metadata(target) {
        temp_file
            .set_permissions(metadata.permissions())
            .map_err(|e| Error::io(temp_path, e))?;
    }

    FileExt::unlock(&temp_file).map_err(|_| Error::LockFailed {
        path: target.to_path_buf(),
    })?;

    Ok(())
}
