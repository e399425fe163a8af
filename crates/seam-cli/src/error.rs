//! Error handling for the seam CLI.
//!
//! This module provides a hierarchical error type system using `thiserror`
//! for structured error handling with actionable messages. Errors from the
//! resolution engine convert automatically via `#[from]`, get rendered as
//! miette diagnostics at the edge of `main`, and map to distinct process
//! exit codes.
//!
//! # Exit codes
//!
//! - `0` - resolution succeeded
//! - `2` - a dependency cycle made the input unorderable
//! - `1` - everything else (configuration, I/O, bad arguments)

use std::path::PathBuf;

use miette::Report;
use seam_resolve::ResolveError;
use thiserror::Error;

/// Process exit code for a detected dependency cycle.
pub const EXIT_CYCLE: u8 = 2;

/// Top-level CLI error type.
///
/// This is the primary error type returned by CLI commands. It automatically
/// converts from domain-specific errors via `From` implementations.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration-related errors (file not found, invalid values, etc.)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Resolution errors from the engine (bad root, cycles)
    #[error("Resolution error: {0}")]
    Resolve(#[from] ResolveError),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
///
/// These errors occur during `seam.toml` loading, parsing, and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file doesn't exist at the expected location
    #[error("Config file not found: {}\n\nHint: Create a seam.toml or drop the --config flag", .0.display())]
    NotFound(PathBuf),

    /// Config file has invalid TOML syntax or shape
    #[error("Invalid TOML in {}: {message}\n\nHint: Check the file against the seam.toml format", .path.display())]
    InvalidToml {
        /// File that failed to parse
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// Invalid value for a configuration option
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        /// Name of the field with the invalid value
        field: String,
        /// The invalid value
        value: String,
        /// Helpful hint for correct values
        hint: String,
    },
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

impl CliError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Resolve(ResolveError::CycleDetected { .. }) => EXIT_CYCLE,
            _ => 1,
        }
    }
}

/// Convert a CLI error to a miette report for terminal rendering.
pub fn to_report(err: CliError) -> Report {
    match err {
        CliError::Resolve(ResolveError::CycleDetected { cycle }) => miette::miette!(
            "Dependency cycle detected:\n  {}\n\nHint: Break the cycle by removing one of the require directives",
            cycle
        ),
        CliError::Resolve(ResolveError::RootNotFound(path)) => miette::miette!(
            "Root directory not found: {}\n\nHint: Pass an existing directory or run seam from inside one",
            path.display()
        ),
        other => miette::miette!("{}", other),
    }
}

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Add a file path to the error context.
    ///
    /// A not-found I/O error becomes [`CliError::FileNotFound`] carrying the
    /// path; other errors pass through unchanged.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Add a helpful hint to the error message.
    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T>;

    /// Prefix the error with a custom message.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            match err {
                CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                    CliError::FileNotFound(path.as_ref().to_path_buf())
                }
                other => other,
            }
        })
    }

    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}\n\nHint: {}", err, hint))
        })
    }

    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}: {}", msg, err))
        })
    }
}
