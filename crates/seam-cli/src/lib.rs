//! Seam CLI - concatenate source files in dependency order.
//!
//! This crate provides the command-line interface for seam, exposing the
//! resolution engine from `seam-resolve` through two commands with clear
//! error messages.
//!
//! # Architecture
//!
//! - [`cli`] - clap argument definitions
//! - [`commands`] - individual command implementations
//! - [`config`] - `seam.toml` discovery and flag merging
//! - [`error`] - error types with actionable messages and exit codes
//! - [`logger`] - structured logging with tracing
//! - [`ui`] - status messages on stderr

// Public modules
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

// Re-export commonly used types
pub use error::{CliError, ConfigError, Result, ResultExt};
