//! Named, ordered tasks that reconcile a project tree with its manifest.
pub mod directories;
pub mod environment;
pub mod files;
pub mod ignore_rules;
mod processing;
pub mod repository;

pub use processing::{
    Collaborators, Context, ProcessOpts, ReconcileMode, TaskResult, TaskStats, process_resources,
};

use anyhow::Result;

use crate::logging::TaskStatus;

/// A named, executable task.
pub trait Task: Send + Sync {
    /// Human-readable task name.
    fn name(&self) -> &str;

    /// Whether this task applies to the current run.
    fn should_run(&self, ctx: &Context) -> bool;

    /// Execute the task.
    ///
    /// # Errors
    ///
    /// Returns an error if the task fails, such as when a file cannot be
    /// written, a template fails to render, or a git operation fails.
    fn run(&self, ctx: &Context) -> Result<TaskResult>;
}

/// Every task of a scaffold run, in execution order.
#[must_use]
pub fn all_scaffold_tasks() -> Vec<Box<dyn Task>> {
    vec![
        Box::new(directories::CreateDirectories),
        Box::new(files::WriteFiles),
        Box::new(ignore_rules::WriteIgnoreRules),
        Box::new(repository::InitRepository),
        Box::new(environment::BootstrapEnvironment),
    ]
}

/// Execute a task, recording the result in the logger.
pub fn execute(task: &dyn Task, ctx: &Context) {
    if !task.should_run(ctx) {
        ctx.log
            .debug(&format!("skipping task: {} (not applicable)", task.name()));
        ctx.log
            .record_task(task.name(), TaskStatus::NotApplicable, None);
        return;
    }

    ctx.log.stage(task.name());

    match task.run(ctx) {
        Ok(TaskResult::Ok) => {
            ctx.log.record_task(task.name(), TaskStatus::Ok, None);
        }
        Ok(TaskResult::Skipped(reason)) => {
            ctx.log.info(&format!("skipped: {reason}"));
            ctx.log
                .record_task(task.name(), TaskStatus::Skipped, Some(&reason));
        }
        Ok(TaskResult::DryRun) => {
            ctx.log.record_task(task.name(), TaskStatus::DryRun, None);
        }
        Err(e) => {
            ctx.log.error(&format!("{}: {e:#}", task.name()));
            ctx.log
                .record_task(task.name(), TaskStatus::Failed, Some(&format!("{e:#}")));
        }
    }
}


#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::logging::TaskStatus;
    use test_helpers::make_logged_context;

    struct MockTask {
        name: &'static str,
        should_run: bool,
        result: Result<TaskResult, String>,
    }

    impl Task for MockTask {
        fn name(&self) -> &str {
            self.name
        }
        fn should_run(&self, _ctx: &Context) -> bool {
            self.should_run
        }
        fn run(&self, _ctx: &Context) -> Result<TaskResult> {
            self.result.clone().map_err(|s| anyhow::anyhow!("{s}"))
        }
    }

    fn last_status(log: &crate::logging::Logger) -> TaskStatus {
        log.task_entries().last().expect("task recorded").status
    }

    #[test]
    fn execute_skips_non_applicable_task() {
        let (ctx, log, _dir) = make_logged_context();
        let task = MockTask {
            name: "test-task",
            should_run: false,
            result: Ok(TaskResult::Ok),
        };

        execute(&task, &ctx);
        assert_eq!(last_status(&log), TaskStatus::NotApplicable);
        assert_eq!(log.failure_count(), 0);
    }

    #[test]
    fn execute_records_ok_task() {
        let (ctx, log, _dir) = make_logged_context();
        let task = MockTask {
            name: "ok-task",
            should_run: true,
            result: Ok(TaskResult::Ok),
        };

        execute(&task, &ctx);
        assert_eq!(last_status(&log), TaskStatus::Ok);
    }

    #[test]
    fn execute_records_failed_task() {
        let (ctx, log, _dir) = make_logged_context();
        let task = MockTask {
            name: "fail-task",
            should_run: true,
            result: Err("kaboom".to_string()),
        };

        execute(&task, &ctx);
        assert_eq!(log.failure_count(), 1);
        assert_eq!(
            log.task_entries()[0].message.as_deref(),
            Some("kaboom")
        );
    }

    #[test]
    fn execute_records_skipped_task() {
        let (ctx, log, _dir) = make_logged_context();
        let task = MockTask {
            name: "skip-task",
            should_run: true,
            result: Ok(TaskResult::Skipped("not needed".to_string())),
        };

        execute(&task, &ctx);
        assert_eq!(last_status(&log), TaskStatus::Skipped);
    }

    #[test]
    fn execute_records_dry_run_task() {
        let (ctx, log, _dir) = make_logged_context();
        let task = MockTask {
            name: "dry-task",
            should_run: true,
            result: Ok(TaskResult::DryRun),
        };

        execute(&task, &ctx);
        assert_eq!(last_status(&log), TaskStatus::DryRun);
    }

    #[test]
    fn scaffold_tasks_run_in_fixed_order() {
        let names: Vec<String> = all_scaffold_tasks()
            .iter()
            .map(|t| t.name().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "Create directories",
                "Write files",
                "Write ignore rules",
                "Initialize repository",
                "Bootstrap environment",
            ]
        );
    }
}
