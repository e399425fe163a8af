//! Seam CLI - concatenate source files in dependency order.
//!
//! This is the main entry point for the seam CLI. It handles command-line
//! argument parsing, logging initialization, command dispatch and error
//! reporting with distinct exit codes.

use std::process::ExitCode;

use clap::Parser;
use seam_cli::{cli, commands, error, logger, ui};

fn main() -> ExitCode {
    // Parse command-line arguments
    let args = cli::Cli::parse();

    // Initialize logging and colors based on global flags
    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    // Execute the appropriate command
    let result = match args.command {
        cli::Command::Resolve(resolve_args) => commands::resolve_execute(resolve_args, args.quiet),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
    };

    // Render failures as miette diagnostics; a cycle gets its own exit code
    // so scripts can tell "unorderable input" from other failures.
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err.exit_code();
            eprintln!("{:?}", error::to_report(err));
            ExitCode::from(code)
        }
    }
}
