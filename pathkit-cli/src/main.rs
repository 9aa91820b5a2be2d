//! Main entry point for the pathkit CLI.
//!
//! It provides commands for working with filesystem paths:
//! - `normalize`: Lexically normalize a path
//! - `resolve`: Resolve a path to its absolute canonical form
//! - `relative`: Relative path between two absolute paths
//! - `is-subpath`: Containment test reported through the exit status
//! - `project-root`: Find the nearest project root

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use error::CliError;
use pathkit::CurrentDirGuard;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    pathkit::init_logger(cli.verbose, cli.quiet).install();

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        directory: cli.directory,
        config: cli.config,
    };

    match run(cli.command, &global) {
        Ok(()) => std::process::exit(0),
        Err(CliError::SemanticFailure(msg)) => {
            log::debug!("{msg}");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

fn run(command: cli::Command, global: &GlobalOptions) -> Result<(), CliError> {
    // Held until the command finishes; restores the directory on drop.
    let _guard = match global.directory {
        Some(ref dir) => {
            let dir = utils::expand_tilde(&dir.to_string_lossy())?;
            Some(CurrentDirGuard::enter(dir)?)
        }
        None => None,
    };

    match command {
        cli::Command::Normalize(cmd) => cmd.execute(global),
        cli::Command::Resolve(cmd) => cmd.execute(global),
        cli::Command::Relative(cmd) => cmd.execute(global),
        cli::Command::IsSubpath(cmd) => cmd.execute(global),
        cli::Command::Relationship(cmd) => cmd.execute(global),
        cli::Command::ProjectRoot(cmd) => cmd.execute(global),
        cli::Command::Completions(cmd) => cmd.execute(global),
    }
}
