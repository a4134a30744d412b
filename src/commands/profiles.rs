//! Command: list the built-in profiles.
use anyhow::Result;
use std::io::Write;

use super::CommandSetup;
use crate::cli::GlobalOpts;
use crate::config::ProfileRegistry;
use crate::logging::Logger;

/// Print each profile with its description.
///
/// # Errors
///
/// Returns an error if setup fails or stdout cannot be written.
pub fn run(global: &GlobalOpts, log: &Logger) -> Result<()> {
    let setup = CommandSetup::init(global, log)?;
    write_listing(&setup.registry, &mut std::io::stdout().lock())
}

/// Write one line per profile, marking the default.
///
/// # Errors
///
/// Returns an error if `out` cannot be written.
pub fn write_listing(registry: &ProfileRegistry, out: &mut impl Write) -> Result<()> {
    let width = registry.names().iter().map(|n| n.len()).max().unwrap_or(0);
    for profile in registry.iter() {
        let marker = if profile.name == registry.default_name() {
            " (default)"
        } else {
            ""
        };
        writeln!(
            out,
            "{:<width$}  {}{marker}",
            profile.name, profile.description
        )?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_profile_and_marks_default() {
        let registry = ProfileRegistry::builtin().unwrap();
        let mut out = Vec::new();
        write_listing(&registry, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("fullstack"));
        assert!(lines[0].ends_with("(default)"));
        assert!(lines[1].contains("Python backend + HTML/JS frontend"));
        assert!(!lines[2].ends_with("(default)"));
    }
}
