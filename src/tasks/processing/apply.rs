//! Single-resource processing: check state, then apply or skip one resource.

use anyhow::Result;

use super::context::Context;
use super::{ProcessOpts, TaskStats};
use crate::resources::{Resource, ResourceChange, ResourceState};

/// Process a single resource given its current state, returning a stats delta.
pub(super) fn process_single<R: Resource>(
    ctx: &Context,
    resource: &R,
    resource_state: ResourceState,
    opts: &ProcessOpts,
) -> Result<TaskStats> {
    let desc = resource.description();
    let mut delta = TaskStats::new();
    match resource_state {
        ResourceState::Correct => {
            ctx.log.debug(&format!("ok: {desc}"));
            delta.already_ok += 1;
        }
        ResourceState::Invalid { reason } => {
            ctx.log.warn(&format!("skipping {desc}: {reason}"));
            delta.skipped += 1;
        }
        ResourceState::Existing if !opts.overwrite_existing => {
            ctx.log.info(&format!("skip: {desc} (exists)"));
            delta.skipped += 1;
        }
        resource_state @ (ResourceState::Missing | ResourceState::Existing) => {
            if ctx.dry_run {
                let msg = if resource_state == ResourceState::Existing {
                    format!("would overwrite: {desc}")
                } else {
                    format!("would {}: {desc}", opts.verb)
                };
                ctx.log.dry_run(&msg);
                delta.changed += 1;
                return Ok(delta);
            }
            delta += apply_resource(ctx, resource, opts)?;
        }
    }
    Ok(delta)
}

/// Apply a single resource change, returning a stats delta.
pub(super) fn apply_resource<R: Resource>(
    ctx: &Context,
    resource: &R,
    opts: &ProcessOpts,
) -> Result<TaskStats> {
    let desc = resource.description();
    let mut delta = TaskStats::new();
    match resource.apply() {
        Ok(ResourceChange::Applied) => {
            ctx.log.debug(&format!("{}: {desc}", opts.verb));
            delta.changed += 1;
        }
        Err(e) => {
            if opts.bail_on_error {
                return Err(e);
            }
            ctx.log
                .error(&format!("failed to {} {desc}: {e:#}", opts.verb));
            delta.failed += 1;
        }
    }
    Ok(delta)
}
