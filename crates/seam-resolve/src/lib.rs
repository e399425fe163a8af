//! # seam-resolve
//!
//! The resolution engine behind the `seam` CLI.
//!
//! A resolution pass walks a source tree, reads `require '<path>'`
//! directives out of every file, assembles the dependency graph and returns
//! the files in dependency-first order. Emission of the ordered contents is
//! a separate step so callers can inspect a [`Resolution`] without writing
//! anything.
//!
//! ```rust,no_run
//! use seam_resolve::{Emitter, Resolver};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let resolution = Resolver::new().resolve(Path::new("src"))?;
//! let mut emitter = Emitter::create(Path::new("output.txt"))?;
//! emitter.emit_all(&resolution.order)?;
//! # Ok(())
//! # }
//! ```

pub mod collect;
pub mod directive;
pub mod emit;
pub mod error;
pub mod resolver;
pub mod source;
pub mod walk;

pub use collect::{Collector, MissingDependency};
pub use directive::{DirectiveParser, DEFAULT_KEYWORD};
pub use emit::Emitter;
pub use error::{DirectiveError, ResolveError};
pub use resolver::{Resolution, Resolver};
pub use walk::{SourceWalker, DEFAULT_MAX_DEPTH};
