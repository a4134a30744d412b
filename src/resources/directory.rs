use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};

use super::file::symlink_in_the_way;
use super::fs::find_symlink;
use super::{Applicable, Resource, ResourceChange, ResourceState};

/// A directory under the project root.
#[derive(Debug, Clone)]
pub struct DirectoryResource {
    /// Path relative to the project root, used in logs.
    pub relative: PathBuf,
    /// Absolute path.
    pub target: PathBuf,
    root: PathBuf,
}

impl DirectoryResource {
    #[must_use]
    pub fn new(root: &Path, relative: &Path) -> Self {
        Self {
            relative: relative.to_path_buf(),
            target: root.join(relative),
            root: root.to_path_buf(),
        }
    }
}

impl Applicable for DirectoryResource {
    fn description(&self) -> String {
        format!("{}/", self.relative.display())
    }

    fn apply(&self) -> Result<ResourceChange> {
        std::fs::create_dir_all(&self.target)
            .with_context(|| format!("create directory: {}", self.target.display()))?;
        Ok(ResourceChange::Applied)
    }
}

impl Resource for DirectoryResource {
    fn current_state(&self) -> Result<ResourceState> {
        if let Some(link) = find_symlink(&self.root, &self.relative)? {
            return Ok(symlink_in_the_way(&self.root, &link));
        }
        match std::fs::metadata(&self.target) {
            Ok(meta) if meta.is_dir() => Ok(ResourceState::Correct),
            Ok(_) => Ok(ResourceState::Invalid {
                reason: "a file occupies this path".to_string(),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ResourceState::Missing),
            Err(e) => {
                Err(e).with_context(|| format!("inspect directory: {}", self.target.display()))
            }
        }
    }
}
