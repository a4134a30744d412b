//! Command: print version information.

/// Version stamped by the build script, or the package version.
#[must_use]
pub fn version() -> &'static str {
    option_env!("FORGE_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}

/// Print the forge version to stdout.
pub fn run() {
    println!("forge {}", version());
}

#[cfg(test)]
mod tests {
    #[test]
    fn version_is_not_empty() {
        assert!(!super::version().is_empty());
    }
}
