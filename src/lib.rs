//! Project scaffolding engine.
//!
//! Builds AI-assisted Python repositories from named profiles: a directory
//! layout, rendered files, ignore rules, a git repository on `develop`, and a
//! bootstrapped virtual environment.
//!
//! The public API is organised into four layers:
//!
//! - **[`config`]**: profiles, render context, stored settings, and the
//!   resolved manifest
//! - **[`resources`]**: idempotent `check + apply` primitives (directories, files)
//! - **[`tasks`]**: named, ordered units of work wired to resources
//! - **[`commands`]**: subcommand orchestration (`new`, `profiles`, `config`)
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod environment;
pub mod error;
pub mod exec;
pub mod logging;
pub mod resources;
pub mod tasks;
pub mod templates;
pub mod vcs;
pub mod wizard;
