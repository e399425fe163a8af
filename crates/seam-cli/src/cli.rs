//! Command-line interface definition for seam.
//!
//! This module defines the complete CLI structure using clap v4's derive
//! macros.
//!
//! # Command Structure
//!
//! - `seam resolve` - Order a source tree and write the concatenated output
//! - `seam check` - Validate a source tree without writing anything

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Seam - concatenate source files in dependency order
#[derive(Parser, Debug)]
#[command(
    name = "seam",
    version,
    about = "Concatenate source files in dependency order",
    long_about = "Seam scans a directory tree for files that declare dependencies with an\n\
                  embedded require '<path>' directive, orders the files so every dependency\n\
                  comes before its dependents, and writes the concatenated result to a single\n\
                  output file. A dependency cycle is reported and nothing is ordered."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    ///
    /// Shows every discovered file, parsed directive and assembled edge.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    ///
    /// Also disables mirroring of the resolved text to stdout.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available seam subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a source tree and write the concatenated output
    ///
    /// Walks the tree, reads require directives, orders the files so every
    /// dependency comes before its dependents and writes them to the output
    /// destination with a blank separator line after each file.
    Resolve(ResolveArgs),

    /// Validate a source tree without writing output
    ///
    /// Runs the same walk and cycle check as resolve and reports what would
    /// be emitted, including any missing dependencies.
    Check(CheckArgs),
}

/// Arguments for the resolve command
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Root directory to resolve
    ///
    /// Defaults to the current directory.
    #[arg(value_name = "ROOT")]
    pub root: Option<PathBuf>,

    /// Output destination for the concatenated result
    ///
    /// Truncated at the start of the run if it already exists. Defaults to
    /// output.txt in the current directory.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Maximum directory nesting depth below the root
    ///
    /// Directories nested deeper are skipped silently. Files directly in
    /// the root sit at depth 0.
    #[arg(long, value_name = "DEPTH")]
    pub max_depth: Option<usize>,

    /// Directive keyword to scan for
    #[arg(long, value_name = "WORD")]
    pub keyword: Option<String>,

    /// Path to a seam.toml configuration file
    ///
    /// Without this flag, seam.toml is searched for in the root being
    /// resolved and then in the current directory.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Resolve and report without writing the output file
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Root directory to check
    ///
    /// Defaults to the current directory.
    #[arg(value_name = "ROOT")]
    pub root: Option<PathBuf>,

    /// Maximum directory nesting depth below the root
    #[arg(long, value_name = "DEPTH")]
    pub max_depth: Option<usize>,

    /// Directive keyword to scan for
    #[arg(long, value_name = "WORD")]
    pub keyword: Option<String>,

    /// Path to a seam.toml configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// List the resolved emission order
    #[arg(long)]
    pub order: bool,
}
