//! Directed dependency graph with cycle detection and topological ordering.

use crate::error::{GraphError, GraphResult};
use crate::file_id::FileId;

/// A fixed-size digraph over file identities.
///
/// The vertex set is the identities `[0, N)` fixed at construction time; an
/// edge `u -> v` records that `v` depends on `u`, so a valid emission order
/// visits `u` first. Adjacency lists keep edges in insertion order, and both
/// traversals below explore vertices from ascending identities, which makes
/// every result a pure function of the edge-insertion sequence.
#[derive(Debug)]
pub struct DependencyGraph {
    adjacency: Vec<Vec<FileId>>,
}

/// Per-vertex traversal state. `Visiting` marks the active path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    Visiting,
    Visited,
}

impl DependencyGraph {
    /// Creates a graph over `vertices` identities and no edges.
    pub fn new(vertices: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertices],
        }
    }

    /// Number of vertices the graph was built over.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges inserted so far, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Inserts the edge `from -> to`.
    ///
    /// Endpoints outside `[0, vertex_count)` are rejected and the graph is
    /// left unchanged. Duplicate edges are accepted; they never change the
    /// traversal results below.
    pub fn add_edge(&mut self, from: FileId, to: FileId) -> GraphResult<()> {
        let vertices = self.adjacency.len();
        if from.index() >= vertices || to.index() >= vertices {
            return Err(GraphError::EdgeOutOfRange { from, to, vertices });
        }
        self.adjacency[from.index()].push(to);
        Ok(())
    }

    /// Successors of `vertex` in edge-insertion order.
    pub fn successors(&self, vertex: FileId) -> &[FileId] {
        self.adjacency
            .get(vertex.index())
            .map_or(&[], Vec::as_slice)
    }

    /// Searches for a directed cycle.
    ///
    /// Returns the vertices of the first cycle found, starting at the vertex
    /// the back edge re-enters and not repeating it at the end, so `[a, b]`
    /// describes the cycle `a -> b -> a`. Exploration starts from ascending
    /// identities with successors in insertion order, so the reported cycle
    /// is deterministic.
    pub fn find_cycle(&self) -> Option<Vec<FileId>> {
        let mut marks = vec![Mark::Unvisited; self.adjacency.len()];
        for root in 0..self.adjacency.len() {
            if marks[root] != Mark::Unvisited {
                continue;
            }
            marks[root] = Mark::Visiting;
            // Each frame is a vertex and the index of its next unexplored
            // successor, replacing the recursion of a plain DFS.
            let mut stack: Vec<(usize, usize)> = vec![(root, 0)];
            while !stack.is_empty() {
                let top = stack.len() - 1;
                let (vertex, cursor) = stack[top];
                if let Some(&next) = self.adjacency[vertex].get(cursor) {
                    stack[top].1 += 1;
                    match marks[next.index()] {
                        Mark::Visiting => {
                            // Back edge into the active path: the path from
                            // `next` down to the top of the stack is the cycle.
                            let start = stack
                                .iter()
                                .position(|&(v, _)| v == next.index())
                                .unwrap_or(0);
                            return Some(
                                stack[start..]
                                    .iter()
                                    .map(|&(v, _)| FileId::new(v as u32))
                                    .collect(),
                            );
                        }
                        Mark::Unvisited => {
                            marks[next.index()] = Mark::Visiting;
                            stack.push((next.index(), 0));
                        }
                        Mark::Visited => {}
                    }
                } else {
                    marks[vertex] = Mark::Visited;
                    stack.pop();
                }
            }
        }
        None
    }

    /// Whether the graph contains any directed cycle.
    pub fn has_cycle(&self) -> bool {
        self.find_cycle().is_some()
    }

    /// Vertices in dependency-first order: for every edge `u -> v`, `u`
    /// appears before `v`.
    ///
    /// Every vertex appears exactly once, including isolated ones. The order
    /// is deterministic for a fixed edge-insertion sequence. Only meaningful
    /// on an acyclic graph; call [`find_cycle`](Self::find_cycle) first.
    pub fn topological_sort(&self) -> Vec<FileId> {
        let mut visited = vec![false; self.adjacency.len()];
        let mut finished: Vec<FileId> = Vec::with_capacity(self.adjacency.len());
        for root in 0..self.adjacency.len() {
            if visited[root] {
                continue;
            }
            visited[root] = true;
            let mut stack: Vec<(usize, usize)> = vec![(root, 0)];
            while !stack.is_empty() {
                let top = stack.len() - 1;
                let (vertex, cursor) = stack[top];
                if let Some(&next) = self.adjacency[vertex].get(cursor) {
                    stack[top].1 += 1;
                    if !visited[next.index()] {
                        visited[next.index()] = true;
                        stack.push((next.index(), 0));
                    }
                } else {
                    finished.push(FileId::new(vertex as u32));
                    stack.pop();
                }
            }
        }
        // Vertices finish dependents-first; the emission order is the reverse.
        finished.reverse();
        finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(index: u32) -> FileId {
        FileId::new(index)
    }

    fn graph_with_edges(vertices: usize, edges: &[(u32, u32)]) -> DependencyGraph {
        let mut graph = DependencyGraph::new(vertices);
        for &(from, to) in edges {
            graph.add_edge(id(from), id(to)).unwrap();
        }
        graph
    }

    #[test]
    fn empty_graph_has_no_cycle_and_empty_order() {
        let graph = DependencyGraph::new(0);
        assert_eq!(graph.find_cycle(), None);
        assert!(graph.topological_sort().is_empty());
    }

    #[test]
    fn single_vertex_orders_itself() {
        let graph = DependencyGraph::new(1);
        assert_eq!(graph.topological_sort(), vec![id(0)]);
    }

    #[test]
    fn linear_chain_orders_dependency_first() {
        // 2 depends on 1 depends on 0.
        let graph = graph_with_edges(3, &[(0, 1), (1, 2)]);
        assert_eq!(graph.find_cycle(), None);
        assert_eq!(graph.topological_sort(), vec![id(0), id(1), id(2)]);
    }

    #[test]
    fn direct_cycle_is_found() {
        let graph = graph_with_edges(2, &[(0, 1), (1, 0)]);
        assert_eq!(graph.find_cycle(), Some(vec![id(0), id(1)]));
        assert!(graph.has_cycle());
    }

    #[test]
    fn self_loop_is_a_cycle_of_one() {
        let graph = graph_with_edges(1, &[(0, 0)]);
        assert_eq!(graph.find_cycle(), Some(vec![id(0)]));
    }

    #[test]
    fn longer_ring_is_found() {
        let graph = graph_with_edges(3, &[(0, 1), (1, 2), (2, 0)]);
        assert_eq!(graph.find_cycle(), Some(vec![id(0), id(1), id(2)]));
    }

    #[test]
    fn cycle_reachable_only_through_a_prefix() {
        // 0 -> 1 -> 2 -> 1: the cycle is [1, 2], not the entry path.
        let graph = graph_with_edges(3, &[(0, 1), (1, 2), (2, 1)]);
        assert_eq!(graph.find_cycle(), Some(vec![id(1), id(2)]));
    }

    #[test]
    fn first_cycle_from_lowest_root_wins() {
        let graph = graph_with_edges(4, &[(2, 3), (3, 2), (0, 1), (1, 0)]);
        assert_eq!(graph.find_cycle(), Some(vec![id(0), id(1)]));
    }

    #[test]
    fn diamond_orders_deterministically() {
        // 1 and 2 both depend on 0; 3 depends on both.
        let graph = graph_with_edges(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]);
        assert_eq!(graph.find_cycle(), None);
        let order = graph.topological_sort();
        assert_eq!(order, vec![id(0), id(2), id(1), id(3)]);
        // Stable across repeated calls.
        assert_eq!(graph.topological_sort(), order);
    }

    #[test]
    fn duplicate_edges_change_nothing() {
        let plain = graph_with_edges(3, &[(0, 1), (1, 2)]);
        let doubled = graph_with_edges(3, &[(0, 1), (0, 1), (1, 2), (0, 1)]);
        assert_eq!(doubled.find_cycle(), None);
        assert_eq!(doubled.topological_sort(), plain.topological_sort());
        assert_eq!(doubled.edge_count(), 4);
    }

    #[test]
    fn out_of_range_edges_are_rejected() {
        let mut graph = DependencyGraph::new(2);
        let err = graph.add_edge(id(0), id(5)).unwrap_err();
        assert_eq!(
            err,
            GraphError::EdgeOutOfRange {
                from: id(0),
                to: id(5),
                vertices: 2
            }
        );
        assert!(graph.add_edge(id(2), id(0)).is_err());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn isolated_vertices_still_appear_in_order() {
        let graph = graph_with_edges(4, &[(0, 1)]);
        let order = graph.topological_sort();
        assert_eq!(order.len(), 4);
        assert!(order.contains(&id(2)));
        assert!(order.contains(&id(3)));
    }

    #[test]
    fn every_edge_respects_the_order() {
        let edges = [(0, 3), (1, 3), (3, 4), (2, 4), (0, 1)];
        let graph = graph_with_edges(5, &edges);
        let order = graph.topological_sort();
        let position = |v: u32| order.iter().position(|&x| x == id(v)).unwrap();
        for &(from, to) in &edges {
            assert!(
                position(from) < position(to),
                "edge {from} -> {to} out of order in {order:?}"
            );
        }
    }

    #[test]
    fn successors_keep_insertion_order() {
        let graph = graph_with_edges(3, &[(0, 2), (0, 1)]);
        assert_eq!(graph.successors(id(0)), &[id(2), id(1)]);
        assert_eq!(graph.successors(id(7)), &[] as &[FileId]);
    }
}
