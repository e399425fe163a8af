//! Command implementations for the seam CLI.
//!
//! - [`resolve`] - order a source tree and write the concatenated output
//! - [`check`] - validate a source tree without writing anything
//!
//! Each command lives in its own module and provides an `execute` function
//! that takes the parsed arguments and returns a Result.

pub mod check;
pub mod resolve;
pub(crate) mod utils;

// Re-export execute functions for convenience
pub use check::execute as check_execute;
pub use resolve::execute as resolve_execute;
