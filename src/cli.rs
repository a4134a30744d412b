use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI entry point for the project scaffolder.
#[derive(Parser, Debug)]
#[command(
    name = "forge",
    about = "Profile-driven scaffolder for AI-assisted Python projects",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalOpts {
    /// Settings file (defaults to <config dir>/forge/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scaffold a project into a directory
    New(NewOpts),
    /// List available profiles
    Profiles,
    /// Read or change stored defaults
    Config(ConfigOpts),
    /// Print version information
    Version,
}

/// Options for the `new` subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct NewOpts {
    /// Target directory (defaults to the current directory)
    pub target: Option<PathBuf>,

    /// Project name (defaults to the target directory name)
    #[arg(short = 'n', long)]
    pub name: Option<String>,

    /// Profile to scaffold (fullstack, web, system)
    #[arg(short, long)]
    pub profile: Option<String>,

    /// Persona for the assistant behavior rules (standard, architect)
    #[arg(long)]
    pub persona: Option<String>,

    /// Author name
    #[arg(long)]
    pub author: Option<String>,

    /// License identifier
    #[arg(long)]
    pub license: Option<String>,

    /// Python version
    #[arg(long = "python")]
    pub python_version: Option<String>,

    /// Package manager (pip, poetry, uv)
    #[arg(long)]
    pub package_manager: Option<String>,

    /// Keep existing files and create only what is missing
    #[arg(short, long)]
    pub update: bool,

    /// Overwrite existing files (with --update)
    #[arg(short, long, requires = "update")]
    pub force: bool,

    /// Prompt for project details
    #[arg(short, long)]
    pub interactive: bool,

    /// Preview changes without applying
    #[arg(short = 'd', long)]
    pub dry_run: bool,

    /// Do not initialize a git repository
    #[arg(long)]
    pub no_git: bool,

    /// Do not create a virtual environment
    #[arg(long)]
    pub no_venv: bool,
}

/// Options for the `config` subcommand.
#[derive(Args, Debug, Clone)]
pub struct ConfigOpts {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// `config` actions.
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Print every stored default
    List,
    /// Print one stored default
    Get {
        /// Setting key
        key: String,
    },
    /// Store a default
    Set {
        /// Setting key
        key: String,
        /// Value
        value: String,
    },
}
