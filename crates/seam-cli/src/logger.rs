//! Logging infrastructure for the seam CLI.
//!
//! This module provides a structured logging setup using the `tracing`
//! ecosystem. It supports multiple verbosity levels and environment-based
//! configuration for debugging.
//!
//! # Features
//!
//! - **Verbosity control**: `--verbose` for debug, `--quiet` for errors only
//! - **Color support**: `--no-color` strips ANSI codes
//! - **Environment filters**: Override via `RUST_LOG` environment variable
//!
//! # Example
//!
//! ```rust,no_run
//! use seam_cli::logger::init_logger;
//! use tracing::{debug, info};
//!
//! init_logger(false, false, false);
//!
//! info!("Starting resolution");
//! debug!("Scanning file: {}", "main.txt");
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber with the specified options.
///
/// Call once at the start of the program, before any logging occurs. Logs go
/// to stderr so they never mix with resolved content mirrored to stdout.
///
/// # Verbosity Levels
///
/// The logging level is determined in this order:
/// 1. `--verbose` flag: DEBUG for seam crates
/// 2. `--quiet` flag: errors only
/// 3. `RUST_LOG` environment variable: custom filter
/// 4. Default: INFO for seam crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("seam_cli=debug,seam_resolve=debug,seam_graph=debug")
    } else if quiet {
        EnvFilter::new("seam_cli=error,seam_resolve=error,seam_graph=error")
    } else {
        // Try to read from RUST_LOG env var, fallback to info level
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("seam_cli=info,seam_resolve=info,seam_graph=info"))
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr) // Keep stdout clean for mirrored content
        .with_target(false) // Don't show the module path
        .with_level(true) // Show log level (INFO, DEBUG, etc.)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
