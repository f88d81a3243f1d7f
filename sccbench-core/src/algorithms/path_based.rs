//! Gabow's path-based SCC.

use super::{SccAlgorithm, SccOutcome, UNVISITED};
use crate::{error::AlgorithmError, graph::DirectedGraph};

/// Path-based strong components (Gabow, 2000).
///
/// Keeps a stack of unassigned vertices and a second stack of path
/// boundaries instead of lowlinks. Ids follow completion order, like
/// [`super::Tarjan`], and for a fixed graph the two produce identical
/// assignments.
#[derive(Clone, Copy, Debug, Default)]
pub struct PathBased;

impl SccAlgorithm for PathBased {
    #[expect(
        clippy::unnecessary_literal_bound,
        reason = "SccAlgorithm constrains the return type to &str"
    )]
    fn name(&self) -> &str {
        "path-based"
    }

    fn compute(&self, graph: &DirectedGraph) -> Result<SccOutcome, AlgorithmError> {
        let mut state = PathState::new(graph.vertex_count());
        for root in graph.vertices() {
            if state.is_unvisited(root) {
                state.search(graph, root);
            }
        }
        Ok(SccOutcome::new(state.component_count, state.assignment))
    }
}

struct PathState {
    preorder: Vec<usize>,
    assignment: Vec<usize>,
    unassigned: Vec<usize>,
    boundaries: Vec<usize>,
    frames: Vec<(usize, usize)>,
    next_preorder: usize,
    component_count: usize,
}

#[expect(
    clippy::indexing_slicing,
    reason = "every vertex id stored in a DirectedGraph is below its vertex count"
)]
impl PathState {
    fn new(vertex_count: usize) -> Self {
        Self {
            preorder: vec![UNVISITED; vertex_count],
            assignment: vec![UNVISITED; vertex_count],
            unassigned: Vec::new(),
            boundaries: Vec::new(),
            frames: Vec::new(),
            next_preorder: 0,
            component_count: 0,
        }
    }

    fn is_unvisited(&self, vertex: usize) -> bool {
        self.preorder[vertex] == UNVISITED
    }

    fn discover(&mut self, vertex: usize) {
        self.preorder[vertex] = self.next_preorder;
        self.next_preorder += 1;
        self.unassigned.push(vertex);
        self.boundaries.push(vertex);
        self.frames.push((vertex, 0));
    }

    fn search(&mut self, graph: &DirectedGraph, root: usize) {
        self.discover(root);
        while let Some((vertex, cursor)) = self.frames.last_mut() {
            let current = *vertex;
            let Some(&successor) = graph.successors(current).get(*cursor) else {
                self.frames.pop();
                self.finish(current);
                continue;
            };
            *cursor += 1;
            if self.is_unvisited(successor) {
                self.discover(successor);
            } else if self.assignment[successor] == UNVISITED {
                self.contract(self.preorder[successor]);
            }
        }
    }

    /// Pops boundaries above `preorder`, merging them into one cycle.
    fn contract(&mut self, preorder: usize) {
        while let Some(&top) = self.boundaries.last() {
            if self.preorder[top] <= preorder {
                break;
            }
            self.boundaries.pop();
        }
    }

    fn finish(&mut self, vertex: usize) {
        if self.boundaries.last() != Some(&vertex) {
            return;
        }
        self.boundaries.pop();
        while let Some(member) = self.unassigned.pop() {
            self.assignment[member] = self.component_count;
            if member == vertex {
                break;
            }
        }
        self.component_count += 1;
    }
}
