use anyhow::{Context as _, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::fs::{ensure_parent_dir, find_symlink};
use super::{Applicable, Resource, ResourceChange, ResourceState};
use crate::config::ContentSource;
use crate::templates::TemplateRenderer;

/// A file whose content comes from a [`ContentSource`].
///
/// Content is produced inside [`Applicable::apply`], so a file that is
/// skipped is never rendered.
pub struct FileResource<'a> {
    /// Path relative to the project root, used in logs.
    pub relative: PathBuf,
    /// Absolute path.
    pub target: PathBuf,
    root: PathBuf,
    source: &'a ContentSource,
    vars: &'a BTreeMap<String, String>,
    renderer: &'a dyn TemplateRenderer,
}

impl std::fmt::Debug for FileResource<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileResource")
            .field("relative", &self.relative)
            .field("target", &self.target)
            .field("source", self.source)
            .finish_non_exhaustive()
    }
}

impl<'a> FileResource<'a> {
    #[must_use]
    pub fn new(
        root: &Path,
        relative: &Path,
        source: &'a ContentSource,
        vars: &'a BTreeMap<String, String>,
        renderer: &'a dyn TemplateRenderer,
    ) -> Self {
        Self {
            relative: relative.to_path_buf(),
            target: root.join(relative),
            root: root.to_path_buf(),
            source,
            vars,
            renderer,
        }
    }

    /// Produce the file content. Raw text is trimmed.
    ///
    /// # Errors
    ///
    /// Returns an error if the template is missing or fails to render.
    pub fn content(&self) -> Result<String> {
        Ok(match self.source {
            ContentSource::Empty => String::new(),
            ContentSource::Raw(text) => text.trim().to_string(),
            ContentSource::Template(id) => self.renderer.render(id, self.vars)?,
        })
    }
}

impl Applicable for FileResource<'_> {
    fn description(&self) -> String {
        self.relative.display().to_string()
    }

    fn apply(&self) -> Result<ResourceChange> {
        let content = self.content()?;
        ensure_parent_dir(&self.target)?;
        std::fs::write(&self.target, content)
            .with_context(|| format!("write file: {}", self.target.display()))?;
        Ok(ResourceChange::Applied)
    }
}

impl Resource for FileResource<'_> {
    fn current_state(&self) -> Result<ResourceState> {
        if let Some(link) = find_symlink(&self.root, &self.relative)? {
            return Ok(symlink_in_the_way(&self.root, &link));
        }
        match std::fs::symlink_metadata(&self.target) {
            Ok(meta) if meta.is_dir() => Ok(ResourceState::Invalid {
                reason: "a directory occupies this path".to_string(),
            }),
            Ok(_) => Ok(ResourceState::Existing),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ResourceState::Missing),
            Err(e) => Err(e).with_context(|| format!("inspect file: {}", self.target.display())),
        }
    }
}

/// A link anywhere along the path blocks the write.
pub(super) fn symlink_in_the_way(root: &Path, link: &Path) -> ResourceState {
    let shown = link.strip_prefix(root).unwrap_or(link);
    ResourceState::Invalid {
        reason: format!("symbolic link at {}", shown.display()),
    }
}
