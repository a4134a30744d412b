//! Domain-specific error types for the scaffolder.
//!
//! Internal modules return these typed errors while command handlers at the
//! CLI boundary convert them to [`anyhow::Error`] via the standard `?`
//! operator.
//!
//! # Error hierarchy
//!
//! ```text
//! ConfigError   — profile definitions, settings store, unknown keys
//! TemplateError — missing templates, render failures, persona table
//! ScaffoldError — fresh-mode gate, paths escaping the target root
//! ```
//!
//! Fallback conditions (unknown profile name, absent context fields) are not
//! errors and have no variant here.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that arise from profile definitions and the persisted settings store.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A built-in profile definition violates a registry invariant.
    #[error("invalid profile '{name}': {reason}")]
    InvalidProfile {
        /// Name of the offending profile.
        name: String,
        /// Human-readable reason.
        reason: String,
    },

    /// The designated default profile is not among the definitions.
    #[error("default profile '{0}' is not defined")]
    MissingDefault(String),

    /// A settings key outside the known set was used.
    #[error("unknown setting '{key}' (known: {known})")]
    UnknownSetting {
        /// Key that was rejected.
        key: String,
        /// Comma-separated list of accepted keys.
        known: String,
    },

    /// A TOML document could not be parsed.
    #[error("invalid TOML in {source_name}: {message}")]
    Parse {
        /// File path or embedded document name.
        source_name: String,
        /// Parser message.
        message: String,
    },

    /// An I/O error occurred while reading or writing a config file.
    #[error("IO error on config file {path}: {source}")]
    Io {
        /// Path to the file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Errors that arise from the template store.
#[derive(Error, Debug)]
pub enum TemplateError {
    /// The requested template identifier is not in the store.
    #[error("template not found: {0}")]
    NotFound(String),

    /// The engine failed while rendering a template.
    #[error("failed to render {template}: {message}")]
    Render {
        /// Template identifier.
        template: String,
        /// Engine message, including nested causes.
        message: String,
    },

    /// The embedded template set could not be loaded.
    #[error("failed to load templates: {0}")]
    Load(String),

    /// A persona table entry points at a template the store does not hold.
    #[error("persona '{persona}' maps {base} to missing template {variant}")]
    MissingPersonaVariant {
        /// Base behavior-rules template.
        base: String,
        /// Persona name.
        persona: String,
        /// Variant identifier that is absent.
        variant: String,
    },
}

/// Errors that abort a scaffold run before or during reconciliation.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// Fresh mode requires an empty target directory.
    #[error("directory '{}' is not empty (found: {})", path.display(), entries.join(", "))]
    NotEmpty {
        /// Target directory.
        path: PathBuf,
        /// Non-ignorable entries found in it.
        entries: Vec<String>,
    },

    /// A manifest path is absolute or climbs out of the target root.
    #[error("path escapes the target root: {0}")]
    UnsafePath(String),
}
