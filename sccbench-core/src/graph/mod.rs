//! Directed graph storage and random generation.

mod generate;

use std::ops::Range;

use crate::error::GraphError;

pub use generate::{MIN_VERTEX_COUNT, clamp_vertex_count, generate};

/// Immutable-by-convention adjacency-list digraph over vertices `0..n`.
///
/// Successor lists keep insertion order, so algorithms that walk them see
/// a stable edge order for a fixed graph.
///
/// # Examples
/// ```
/// use sccbench_core::DirectedGraph;
///
/// let graph = DirectedGraph::from_edges(3, [(0, 1), (1, 2), (2, 0)])?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 3);
/// assert_eq!(graph.successors(1), &[2]);
/// # Ok::<(), sccbench_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DirectedGraph {
    successors: Vec<Vec<usize>>,
    edge_count: usize,
}

impl DirectedGraph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    #[must_use]
    pub fn with_vertices(vertex_count: usize) -> Self {
        Self {
            successors: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Builds a graph from an edge list.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfBounds`] when an endpoint is not
    /// below `vertex_count`.
    pub fn from_edges(
        vertex_count: usize,
        edges: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::with_vertices(vertex_count);
        for (source, target) in edges {
            graph.add_edge(source, target)?;
        }
        Ok(graph)
    }

    /// Appends the edge `source -> target`.
    ///
    /// Parallel edges and self loops are stored as given.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfBounds`] when either endpoint is not
    /// a vertex of the graph.
    pub fn add_edge(&mut self, source: usize, target: usize) -> Result<(), GraphError> {
        let vertex_count = self.vertex_count();
        if target >= vertex_count {
            return Err(GraphError::VertexOutOfBounds {
                vertex: target,
                vertex_count,
            });
        }
        let list = self
            .successors
            .get_mut(source)
            .ok_or(GraphError::VertexOutOfBounds {
                vertex: source,
                vertex_count,
            })?;
        list.push(target);
        self.edge_count = self.edge_count.saturating_add(1);
        Ok(())
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.successors.len()
    }

    /// Number of edges, counting parallel edges separately.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Vertex ids in index order.
    #[must_use]
    pub fn vertices(&self) -> Range<usize> {
        0..self.vertex_count()
    }

    /// Successors of `vertex`, empty when `vertex` is out of range.
    #[must_use]
    pub fn successors(&self, vertex: usize) -> &[usize] {
        self.successors.get(vertex).map_or(&[], Vec::as_slice)
    }

    /// Returns the graph with every edge reversed.
    ///
    /// # Examples
    /// ```
    /// use sccbench_core::DirectedGraph;
    ///
    /// let graph = DirectedGraph::from_edges(2, [(0, 1)])?;
    /// let reversed = graph.transpose();
    /// assert_eq!(reversed.successors(1), &[0]);
    /// assert!(reversed.successors(0).is_empty());
    /// # Ok::<(), sccbench_core::GraphError>(())
    /// ```
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut reversed = vec![Vec::new(); self.vertex_count()];
        for source in self.vertices() {
            for &target in self.successors(source) {
                if let Some(list) = reversed.get_mut(target) {
                    list.push(source);
                }
            }
        }
        Self {
            successors: reversed,
            edge_count: self.edge_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::bad_source(3, 0)]
    #[case::bad_target(0, 3)]
    fn add_edge_rejects_unknown_vertices(#[case] source: usize, #[case] target: usize) {
        let mut graph = DirectedGraph::with_vertices(3);
        let err = graph
            .add_edge(source, target)
            .expect_err("out-of-range endpoint must fail");
        assert_eq!(
            err,
            GraphError::VertexOutOfBounds {
                vertex: 3,
                vertex_count: 3
            }
        );
        assert_eq!(graph.edge_count(), 0);
    }

    #[rstest]
    fn transpose_preserves_counts() {
        let graph = DirectedGraph::from_edges(4, [(0, 1), (1, 2), (2, 0), (2, 3)])
            .expect("edges are in range");
        let reversed = graph.transpose();
        assert_eq!(reversed.vertex_count(), 4);
        assert_eq!(reversed.edge_count(), 4);
        assert_eq!(reversed.successors(0), &[2]);
        assert_eq!(reversed.successors(3), &[2]);
    }

    #[rstest]
    fn successors_of_unknown_vertex_are_empty() {
        let graph = DirectedGraph::with_vertices(2);
        assert!(graph.successors(7).is_empty());
    }
}
