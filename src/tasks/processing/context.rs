use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::{Manifest, RenderContext};
use crate::exec::Executor;
use crate::logging::Log;
use crate::templates::TemplateRenderer;

/// How existing files in the target directory are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReconcileMode {
    /// Target must be empty apart from ignorable entries; everything is written.
    #[default]
    Fresh,
    /// Existing files are preserved; missing ones are created.
    Update,
    /// Every manifest file is overwritten.
    Force,
}

impl ReconcileMode {
    /// Pick the mode from the `--update` and `--force` flags.
    ///
    /// `force` only refines `update`; without it the run stays fresh and the
    /// empty-target gate still applies.
    #[must_use]
    pub const fn from_flags(update: bool, force: bool) -> Self {
        match (update, force) {
            (true, true) => Self::Force,
            (true, false) => Self::Update,
            (false, _) => Self::Fresh,
        }
    }

    /// Whether files already on disk are rewritten.
    #[must_use]
    pub const fn overwrites_existing(self) -> bool {
        !matches!(self, Self::Update)
    }
}

/// Optional post-reconciliation steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collaborators {
    /// Initialize a version-control repository.
    pub init_repository: bool,
    /// Create a virtual environment and install dependencies.
    pub bootstrap_environment: bool,
}

impl Default for Collaborators {
    fn default() -> Self {
        Self {
            init_repository: true,
            bootstrap_environment: true,
        }
    }
}

/// Shared context for task execution.
pub struct Context {
    /// Project root every manifest path is joined onto.
    pub root: PathBuf,
    /// Resolved directories and files.
    pub manifest: Arc<Manifest>,
    /// Resolved template variables.
    pub render: Arc<RenderContext>,
    /// `render` flattened once for the template engine.
    pub vars: BTreeMap<String, String>,
    pub templates: Arc<dyn TemplateRenderer>,
    pub mode: ReconcileMode,
    pub collaborators: Collaborators,
    /// Logger for output and task recording.
    pub log: Arc<dyn Log>,
    /// Whether to perform a dry run (preview changes without applying).
    pub dry_run: bool,
    /// Command executor (for testing or real system calls).
    pub executor: Arc<dyn Executor>,
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("root", &self.root)
            .field("profile", &self.manifest.profile)
            .field("render", &self.render)
            .field("templates", &"<dyn TemplateRenderer>")
            .field("mode", &self.mode)
            .field("collaborators", &self.collaborators)
            .field("log", &"<dyn Log>")
            .field("dry_run", &self.dry_run)
            .field("executor", &self.executor)
            .finish()
    }
}

impl Context {
    /// Creates a new context for task execution.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        root: PathBuf,
        manifest: Manifest,
        render: RenderContext,
        templates: Arc<dyn TemplateRenderer>,
        mode: ReconcileMode,
        log: Arc<dyn Log>,
        dry_run: bool,
        executor: Arc<dyn Executor>,
    ) -> Self {
        let vars = render.to_vars();
        Self {
            root,
            manifest: Arc::new(manifest),
            render: Arc::new(render),
            vars,
            templates,
            mode,
            collaborators: Collaborators::default(),
            log,
            dry_run,
            executor,
        }
    }

    /// Replace the collaborator switches.
    #[must_use]
    pub fn with_collaborators(mut self, collaborators: Collaborators) -> Self {
        self.collaborators = collaborators;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn force_only_refines_update() {
        assert_eq!(ReconcileMode::from_flags(true, true), ReconcileMode::Force);
        assert_eq!(ReconcileMode::from_flags(false, true), ReconcileMode::Fresh);
        assert_eq!(ReconcileMode::from_flags(true, false), ReconcileMode::Update);
        assert_eq!(ReconcileMode::from_flags(false, false), ReconcileMode::Fresh);
    }

    #[test]
    fn only_update_preserves_existing() {
        assert!(ReconcileMode::Fresh.overwrites_existing());
        assert!(ReconcileMode::Force.overwrites_existing());
        assert!(!ReconcileMode::Update.overwrites_existing());
    }
}
