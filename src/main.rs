use anyhow::Result;
use clap::Parser;
use std::sync::Arc;

use forge_cli::cli::{Cli, Command};
use forge_cli::commands;
use forge_cli::logging::{self, Logger};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = Cli::parse();

    let command = match &args.command {
        Command::New(_) => "new",
        Command::Profiles => "profiles",
        Command::Config(_) => "config",
        Command::Version => "version",
    };
    logging::init_subscriber(args.verbose, command);
    let log = Arc::new(Logger::new(command));

    match &args.command {
        Command::New(opts) => commands::new::run(&args.global, opts, &log),
        Command::Profiles => commands::profiles::run(&args.global, &log),
        Command::Config(opts) => commands::config::run(&args.global, opts, &log),
        Command::Version => {
            commands::version::run();
            Ok(())
        }
    }
}
