//! File-system helpers shared by resources and commands.
use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};

use crate::error::ScaffoldError;

/// Entries that do not count against an empty target directory.
pub const IGNORABLE_ENTRIES: &[&str] = &[".git"];

/// Ensure the parent directory of `path` exists, creating it (and any
/// ancestors) if necessary.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create parent: {}", parent.display()))?;
    }
    Ok(())
}

/// First entry along `root/relative` that is a symbolic link, if any.
///
/// Walks every component of `relative`, stopping at the first one that does
/// not exist. Writing through a link could land outside `root`.
///
/// # Errors
///
/// Returns an error if an existing component cannot be inspected.
pub fn find_symlink(root: &Path, relative: &Path) -> Result<Option<PathBuf>> {
    let mut current = root.to_path_buf();
    for component in relative.components() {
        current.push(component);
        match std::fs::symlink_metadata(&current) {
            Ok(meta) if meta.file_type().is_symlink() => return Ok(Some(current)),
            Ok(_) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("inspect path: {}", current.display()));
            }
        }
    }
    Ok(None)
}

/// Verify that `dir` is empty apart from [`IGNORABLE_ENTRIES`].
///
/// A directory that does not exist yet counts as empty.
///
/// # Errors
///
/// Returns [`ScaffoldError::NotEmpty`] listing the offending entries (sorted),
/// or an I/O error if the directory cannot be listed.
pub fn check_greenfield(dir: &Path) -> Result<()> {
    if !dir.exists() {
        return Ok(());
    }
    let mut entries = Vec::new();
    for entry in
        std::fs::read_dir(dir).with_context(|| format!("reading directory {}", dir.display()))?
    {
        let entry = entry.with_context(|| format!("reading entry in {}", dir.display()))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !IGNORABLE_ENTRIES.contains(&name.as_str()) {
            entries.push(name);
        }
    }
    if entries.is_empty() {
        return Ok(());
    }
    entries.sort();
    Err(ScaffoldError::NotEmpty {
        path: dir.to_path_buf(),
        entries,
    }
    .into())
}
