//! Command: read or change stored defaults.
use anyhow::{Context as _, Result, bail};
use std::io::Write;
use std::path::Path;

use super::settings_path;
use crate::cli::{ConfigAction, ConfigOpts, GlobalOpts};
use crate::config::Settings;
use crate::logging::Logger;

/// Run a `config` action against the settings file.
///
/// # Errors
///
/// Returns an error if the settings file cannot be located, read or written,
/// or the key is unknown.
pub fn run(global: &GlobalOpts, opts: &ConfigOpts, log: &Logger) -> Result<()> {
    let Some(path) = settings_path(global) else {
        bail!("no configuration directory on this platform; pass --config <PATH>");
    };
    log.debug(&format!("settings file: {}", path.display()));
    apply(&path, &opts.action, &mut std::io::stdout().lock(), log)
}

/// Perform `action` on the settings at `path`, printing results to `out`.
///
/// # Errors
///
/// See [`run`].
pub fn apply(path: &Path, action: &ConfigAction, out: &mut impl Write, log: &Logger) -> Result<()> {
    let mut settings =
        Settings::load(path).with_context(|| format!("reading {}", path.display()))?;
    match action {
        ConfigAction::List => {
            for (key, value) in settings.iter() {
                writeln!(out, "{key} = {value}")?;
            }
        }
        ConfigAction::Get { key } => match settings.get(key) {
            Some(value) => writeln!(out, "{value}")?,
            None => bail!("'{key}' is not set"),
        },
        ConfigAction::Set { key, value } => {
            settings.set(key, value)?;
            settings.save(path)?;
            log.info(&format!("{key} = {value}"));
        }
    }
    Ok(())
}
