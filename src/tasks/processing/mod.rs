//! Generic resource processing loop: check state, apply or skip, collect stats.
//!
//! - [`apply`] handles a single resource (`process_single`, `apply_resource`)
//! - [`context`] is the shared execution context for tasks

mod apply;
pub mod context;

pub use context::{Collaborators, Context, ReconcileMode};

use anyhow::{Result, bail};

use crate::resources::Resource;

/// Result of a single task execution.
///
/// # Examples
///
/// ```
/// use forge_cli::tasks::TaskResult;
///
/// let ok = TaskResult::Ok;
/// let skipped = TaskResult::Skipped("repository already initialized".into());
/// let dry = TaskResult::DryRun;
///
/// assert!(matches!(ok, TaskResult::Ok));
/// assert!(matches!(skipped, TaskResult::Skipped(_)));
/// assert!(matches!(dry, TaskResult::DryRun));
/// ```
#[derive(Debug, Clone)]
pub enum TaskResult {
    /// Task completed successfully.
    Ok,
    /// Task had nothing to do.
    Skipped(String),
    /// Task ran in dry-run mode.
    DryRun,
}

/// Counters for batch tasks that process many items.
///
/// # Examples
///
/// ```
/// use forge_cli::tasks::TaskStats;
///
/// let mut stats = TaskStats::new();
/// stats.changed = 3;
/// stats.already_ok = 10;
///
/// assert_eq!(stats.summary(false), "3 written, 10 already ok");
/// assert_eq!(stats.summary(true), "3 would write, 10 already ok");
/// ```
///
/// Skipped and failed items are listed only when present:
///
/// ```
/// use forge_cli::tasks::TaskStats;
///
/// let stats = TaskStats { changed: 1, already_ok: 0, skipped: 3, failed: 1 };
/// assert_eq!(stats.summary(false), "1 written, 0 already ok, 3 skipped, 1 failed");
/// ```
#[derive(Debug, Default)]
pub struct TaskStats {
    /// Items created or overwritten.
    pub changed: u32,
    /// Items already in the desired state.
    pub already_ok: u32,
    /// Items left untouched (existing files in update mode, obstructed paths).
    pub skipped: u32,
    /// Items whose apply step failed.
    pub failed: u32,
}

impl TaskStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Format the summary string (e.g. "3 written, 10 already ok, 1 skipped").
    #[must_use]
    pub fn summary(&self, dry_run: bool) -> String {
        let verb = if dry_run { "would write" } else { "written" };
        let mut out = format!("{} {verb}, {} already ok", self.changed, self.already_ok);
        if self.skipped > 0 {
            out.push_str(&format!(", {} skipped", self.skipped));
        }
        if self.failed > 0 {
            out.push_str(&format!(", {} failed", self.failed));
        }
        out
    }

    /// Log the summary and return the appropriate `TaskResult`.
    ///
    /// # Errors
    ///
    /// Returns an error when any item failed, after every item was processed.
    pub fn finish(self, ctx: &Context) -> Result<TaskResult> {
        ctx.log.info(&self.summary(ctx.dry_run));
        if self.failed > 0 {
            bail!("{} item(s) failed", self.failed);
        }
        Ok(if ctx.dry_run {
            TaskResult::DryRun
        } else {
            TaskResult::Ok
        })
    }
}

impl std::ops::AddAssign for TaskStats {
    fn add_assign(&mut self, other: Self) {
        self.changed += other.changed;
        self.already_ok += other.already_ok;
        self.skipped += other.skipped;
        self.failed += other.failed;
    }
}

/// Configuration for the generic resource processing loop.
///
/// # Examples
///
/// ```
/// use forge_cli::tasks::{ProcessOpts, ReconcileMode};
///
/// // Create what is missing, bail on the first error:
/// let opts = ProcessOpts::create_missing("create");
/// assert!(!opts.overwrite_existing && opts.bail_on_error);
///
/// // Overwrite everything, count errors and keep going:
/// let opts = ProcessOpts::apply_all("write").no_bail();
/// assert!(opts.overwrite_existing && !opts.bail_on_error);
///
/// // Let the reconciliation mode decide:
/// let opts = ProcessOpts::for_mode("write", ReconcileMode::Update);
/// assert!(!opts.overwrite_existing);
/// ```
#[derive(Debug)]
pub struct ProcessOpts<'a> {
    /// Verb for log messages (e.g. "create", "write").
    pub verb: &'a str,
    /// Rewrite resources that already exist. If `false`, skip them.
    pub overwrite_existing: bool,
    /// Propagate errors from `apply()` (bail). If `false`, log and count as failed.
    pub bail_on_error: bool,
}

impl<'a> ProcessOpts<'a> {
    /// Create missing resources only, bailing on errors.
    #[must_use]
    pub const fn create_missing(verb: &'a str) -> Self {
        Self {
            verb,
            overwrite_existing: false,
            bail_on_error: true,
        }
    }

    /// Create missing and overwrite existing resources, bailing on errors.
    #[must_use]
    pub const fn apply_all(verb: &'a str) -> Self {
        Self {
            verb,
            overwrite_existing: true,
            bail_on_error: true,
        }
    }

    /// Overwrite policy taken from the reconciliation mode.
    #[must_use]
    pub const fn for_mode(verb: &'a str, mode: ReconcileMode) -> Self {
        if mode.overwrites_existing() {
            Self::apply_all(verb)
        } else {
            Self::create_missing(verb)
        }
    }

    /// Count errors as failures instead of bailing.
    #[must_use]
    pub const fn no_bail(mut self) -> Self {
        self.bail_on_error = false;
        self
    }
}

/// Process resources in order by checking each one's state and applying as needed.
///
/// # Errors
///
/// Returns an error if a state check fails, if `apply()` fails while
/// `bail_on_error` is set, or (via [`TaskStats::finish`]) if any item failed.
pub fn process_resources<R: Resource>(
    ctx: &Context,
    resources: impl IntoIterator<Item = R>,
    opts: &ProcessOpts,
) -> Result<TaskResult> {
    let mut stats = TaskStats::new();
    for resource in resources {
        let current = resource.current_state()?;
        stats += apply::process_single(ctx, &resource, current, opts)?;
    }
    stats.finish(ctx)
}
