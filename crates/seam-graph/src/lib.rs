//! # seam-graph
//!
//! Pure data structures for dependency-ordered file resolution.
//!
//! This crate holds everything the resolution engine needs that does not
//! touch the file system: stable file identities, the per-file dependency
//! record, and the directed graph that turns those records into an emission
//! order.
//!
//! ## Overview
//!
//! - [`FileId`]: a stable integer handle assigned to each discovered file.
//! - [`FileTable`]: the bijection between paths and identities, assigned in
//!   first-seen order.
//! - [`DependencyRecord`]: the references collected from each file, kept in
//!   scan order with duplicates intact.
//! - [`DependencyGraph`]: a fixed-size digraph over identities with cycle
//!   detection and topological ordering.
//!
//! Identities double as vertex indices, so a table and a graph built over
//! the same discovery pass line up without any translation step.
//!
//! ## Quick Start
//!
//! ```rust
//! use seam_graph::{DependencyGraph, FileTable};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), seam_graph::GraphError> {
//! let mut table = FileTable::new();
//! let util = table.register(Path::new("src/util.txt"));
//! let main = table.register(Path::new("src/main.txt"));
//!
//! // main depends on util, so the edge runs util -> main.
//! let mut graph = DependencyGraph::new(table.len());
//! graph.add_edge(util, main)?;
//!
//! assert!(graph.find_cycle().is_none());
//! assert_eq!(graph.topological_sort(), vec![util, main]);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod file_id;
pub mod graph;
pub mod record;
pub mod table;

pub use error::{GraphError, GraphResult};
pub use file_id::FileId;
pub use graph::DependencyGraph;
pub use record::DependencyRecord;
pub use table::FileTable;
