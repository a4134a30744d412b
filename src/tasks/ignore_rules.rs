use anyhow::Result;

use super::{Context, ProcessOpts, Task, TaskResult, process_resources};
use crate::config::ContentSource;
use crate::config::manifest::{IGNORE_RULES_PATH, IGNORE_RULES_TEMPLATE};
use crate::resources::file::FileResource;
use std::path::Path;

/// Write `.gitignore` after the manifest. Always overwrites, in every mode.
#[derive(Debug)]
pub struct WriteIgnoreRules;

impl Task for WriteIgnoreRules {
    fn name(&self) -> &str {
        "Write ignore rules"
    }

    fn should_run(&self, _ctx: &Context) -> bool {
        true
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let source = ContentSource::Template(IGNORE_RULES_TEMPLATE.to_string());
        let resource = FileResource::new(
            &ctx.root,
            Path::new(IGNORE_RULES_PATH),
            &source,
            &ctx.vars,
            ctx.templates.as_ref(),
        );
        process_resources(ctx, [resource], &ProcessOpts::apply_all("write").no_bail())
    }
}
