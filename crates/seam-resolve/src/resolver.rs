//! The resolution pass: walk, collect, order.

use std::path::{Path, PathBuf};

use path_clean::PathClean;
use seam_graph::{DependencyGraph, DependencyRecord, FileId, FileTable};
use tracing::{debug, warn};

use crate::collect::{Collector, MissingDependency};
use crate::directive::{DirectiveParser, DEFAULT_KEYWORD};
use crate::error::ResolveError;
use crate::walk::{SourceWalker, DEFAULT_MAX_DEPTH};

/// Outcome of a clean resolution pass.
#[derive(Debug)]
pub struct Resolution {
    /// Cleaned absolute root the pass ran over.
    pub root: PathBuf,
    /// Discovered files in dependency-first order.
    pub order: Vec<PathBuf>,
    /// Distinct files discovered, scanned or referenced.
    pub files: usize,
    /// Dependency edges assembled, duplicates included.
    pub edges: usize,
    /// References whose targets were missing on disk.
    pub missing: Vec<MissingDependency>,
}

/// Drives a full resolution pass over a source tree.
///
/// The pass walks the root, scans every file for directives, assembles the
/// dependency graph and refuses to order it if a cycle exists. Resolution
/// never writes anything; pass the returned order to
/// [`Emitter`](crate::emit::Emitter) for that.
#[derive(Debug)]
pub struct Resolver {
    keyword: String,
    max_depth: usize,
    exclude: Option<PathBuf>,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver {
    pub fn new() -> Self {
        Self {
            keyword: DEFAULT_KEYWORD.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
            exclude: None,
        }
    }

    /// Overrides the directive keyword.
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = keyword.into();
        self
    }

    /// Overrides the directory-nesting bound.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Hides `path` from the walk, so an output file inside the root is not
    /// resolved into itself.
    pub fn exclude(mut self, path: impl Into<PathBuf>) -> Self {
        self.exclude = Some(path.into());
        self
    }

    /// Runs the pass over `root`.
    pub fn resolve(&self, root: &Path) -> Result<Resolution, ResolveError> {
        if !root.is_dir() {
            return Err(ResolveError::RootNotFound(root.to_path_buf()));
        }
        let root = std::path::absolute(root)?.clean();
        let exclude = match &self.exclude {
            Some(path) => Some(std::path::absolute(path)?.clean()),
            None => None,
        };

        let collector = Collector::new(DirectiveParser::new(&self.keyword), root.as_path());
        let mut table = FileTable::new();
        let mut record = DependencyRecord::new();
        let mut missing = Vec::new();

        let mut walker = SourceWalker::new(&root).max_depth(self.max_depth);
        if let Some(exclude) = exclude {
            walker = walker.exclude(exclude);
        }
        for path in walker.files() {
            collector.scan(&path, &mut table, &mut record, &mut missing);
        }
        debug!(
            "discovered {} files with {} references under '{}'",
            table.len(),
            record.reference_count(),
            root.display()
        );

        let mut graph = DependencyGraph::new(table.len());
        for (file, dependencies) in record.iter() {
            for &dependency in dependencies {
                // A dependency is emitted before its dependent.
                if let Err(err) = graph.add_edge(dependency, file) {
                    warn!("dropping edge: {err}");
                }
            }
        }

        if let Some(cycle) = graph.find_cycle() {
            return Err(ResolveError::CycleDetected {
                cycle: format_cycle(&cycle, &table, &root),
            });
        }

        let order = graph
            .topological_sort()
            .into_iter()
            .filter_map(|id| table.path_of(id).map(Path::to_path_buf))
            .collect();

        Ok(Resolution {
            root,
            order,
            files: table.len(),
            edges: graph.edge_count(),
            missing,
        })
    }
}

/// Renders a cycle as `a -> b -> a`, with paths relative to the root where
/// possible.
fn format_cycle(cycle: &[FileId], table: &FileTable, root: &Path) -> String {
    let display = |id: &FileId| {
        table.path_of(*id).map_or_else(
            || format!("#{id}"),
            |path| path.strip_prefix(root).unwrap_or(path).display().to_string(),
        )
    };
    let mut parts: Vec<String> = cycle.iter().map(display).collect();
    if let Some(first) = parts.first().cloned() {
        parts.push(first);
    }
    parts.join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn names(order: &[PathBuf]) -> Vec<String> {
        order
            .iter()
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn chain_orders_dependencies_first() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "alpha\n").unwrap();
        fs::write(dir.path().join("b.txt"), "require 'a.txt'\nbeta\n").unwrap();
        fs::write(dir.path().join("c.txt"), "require 'b.txt'\ngamma\n").unwrap();

        let resolution = Resolver::new().resolve(dir.path()).unwrap();
        assert_eq!(names(&resolution.order), vec!["a.txt", "b.txt", "c.txt"]);
        assert_eq!(resolution.files, 3);
        assert_eq!(resolution.edges, 2);
        assert!(resolution.missing.is_empty());
    }

    #[test]
    fn requires_resolve_across_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("lib")).unwrap();
        fs::write(dir.path().join("lib/util.txt"), "util\n").unwrap();
        fs::write(dir.path().join("main.txt"), "require 'lib/util.txt'\nmain\n").unwrap();

        let resolution = Resolver::new().resolve(dir.path()).unwrap();
        assert_eq!(names(&resolution.order), vec!["util.txt", "main.txt"]);
    }

    #[test]
    fn cycle_aborts_with_a_rendered_path() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "require 'b.txt'\n").unwrap();
        fs::write(dir.path().join("b.txt"), "require 'a.txt'\n").unwrap();

        let err = Resolver::new().resolve(dir.path()).unwrap_err();
        match err {
            ResolveError::CycleDetected { cycle } => {
                assert!(cycle.contains("a.txt"), "cycle was: {cycle}");
                assert!(cycle.contains("b.txt"), "cycle was: {cycle}");
                assert!(cycle.contains(" -> "), "cycle was: {cycle}");
                // The rendering closes the loop on its first vertex.
                let parts: Vec<_> = cycle.split(" -> ").collect();
                assert_eq!(parts.first(), parts.last());
            }
            other => panic!("expected a cycle, got {other:?}"),
        }
    }

    #[test]
    fn self_require_is_a_cycle() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "require 'a.txt'\n").unwrap();

        let err = Resolver::new().resolve(dir.path()).unwrap_err();
        match err {
            ResolveError::CycleDetected { cycle } => {
                assert_eq!(cycle, "a.txt -> a.txt");
            }
            other => panic!("expected a cycle, got {other:?}"),
        }
    }

    #[test]
    fn missing_reference_is_non_fatal() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("d.txt"), "require 'nope/missing.txt'\nbody\n").unwrap();

        let resolution = Resolver::new().resolve(dir.path()).unwrap();
        assert_eq!(names(&resolution.order), vec!["d.txt"]);
        assert_eq!(resolution.missing.len(), 1);
        assert_eq!(
            resolution.missing[0].target,
            resolution.root.join("nope/missing.txt")
        );
    }

    #[test]
    fn duplicate_requires_are_harmless() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "alpha\n").unwrap();
        fs::write(dir.path().join("b.txt"), "require 'a.txt'\nrequire 'a.txt'\n").unwrap();

        let resolution = Resolver::new().resolve(dir.path()).unwrap();
        assert_eq!(names(&resolution.order), vec!["a.txt", "b.txt"]);
        assert_eq!(resolution.edges, 2);
    }

    #[test]
    fn targets_below_the_depth_bound_are_still_ordered() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/dep.txt"), "dep\n").unwrap();
        fs::write(dir.path().join("keep.txt"), "require 'sub/dep.txt'\n").unwrap();

        let resolution = Resolver::new().max_depth(0).resolve(dir.path()).unwrap();
        assert_eq!(names(&resolution.order), vec!["dep.txt", "keep.txt"]);
    }

    #[test]
    fn excluded_output_is_not_scanned() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "alpha\n").unwrap();
        fs::write(dir.path().join("output.txt"), "stale\n").unwrap();

        let resolution = Resolver::new()
            .exclude(dir.path().join("output.txt"))
            .resolve(dir.path())
            .unwrap();
        assert_eq!(names(&resolution.order), vec!["a.txt"]);
    }

    #[test]
    fn custom_keyword_drives_the_scan() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "alpha\n").unwrap();
        fs::write(dir.path().join("b.txt"), "include 'a.txt'\nrequire 'a.txt'\n").unwrap();

        let resolution = Resolver::new().keyword("include").resolve(dir.path()).unwrap();
        assert_eq!(names(&resolution.order), vec!["a.txt", "b.txt"]);
        assert_eq!(resolution.edges, 1);
    }

    #[test]
    fn missing_root_is_an_error() {
        let err = Resolver::new()
            .resolve(Path::new("definitely/not/here"))
            .unwrap_err();
        assert!(matches!(err, ResolveError::RootNotFound(_)));
    }

    #[test]
    fn empty_root_resolves_to_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let resolution = Resolver::new().resolve(dir.path()).unwrap();
        assert!(resolution.order.is_empty());
        assert_eq!(resolution.files, 0);
    }
}
