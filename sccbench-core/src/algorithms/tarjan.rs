//! Iterative Tarjan SCC.

use std::cmp::min;

use super::{SccAlgorithm, SccOutcome, UNVISITED};
use crate::{error::AlgorithmError, graph::DirectedGraph};

/// Tarjan's lowlink algorithm with an explicit call stack.
///
/// Roots are tried in vertex order and successors in adjacency order.
/// Component ids are handed out as components complete, so sinks of the
/// condensation receive the smallest ids.
#[derive(Clone, Copy, Debug, Default)]
pub struct Tarjan;

impl SccAlgorithm for Tarjan {
    #[expect(
        clippy::unnecessary_literal_bound,
        reason = "SccAlgorithm constrains the return type to &str"
    )]
    fn name(&self) -> &str {
        "tarjan"
    }

    fn compute(&self, graph: &DirectedGraph) -> Result<SccOutcome, AlgorithmError> {
        let mut state = TarjanState::new(graph);
        for root in graph.vertices() {
            if state.is_unvisited(root) {
                state.search(root);
            }
        }
        Ok(SccOutcome::new(state.component_count, state.assignment))
    }
}

struct Frame {
    vertex: usize,
    cursor: usize,
}

struct TarjanState<'g> {
    graph: &'g DirectedGraph,
    index: Vec<usize>,
    lowlink: Vec<usize>,
    on_stack: Vec<bool>,
    stack: Vec<usize>,
    frames: Vec<Frame>,
    assignment: Vec<usize>,
    next_index: usize,
    component_count: usize,
}

#[expect(
    clippy::indexing_slicing,
    reason = "every vertex id stored in a DirectedGraph is below its vertex count"
)]
impl<'g> TarjanState<'g> {
    fn new(graph: &'g DirectedGraph) -> Self {
        let vertex_count = graph.vertex_count();
        Self {
            graph,
            index: vec![UNVISITED; vertex_count],
            lowlink: vec![0; vertex_count],
            on_stack: vec![false; vertex_count],
            stack: Vec::new(),
            frames: Vec::new(),
            assignment: vec![0; vertex_count],
            next_index: 0,
            component_count: 0,
        }
    }

    fn is_unvisited(&self, vertex: usize) -> bool {
        self.index[vertex] == UNVISITED
    }

    fn discover(&mut self, vertex: usize) {
        self.index[vertex] = self.next_index;
        self.lowlink[vertex] = self.next_index;
        self.next_index += 1;
        self.stack.push(vertex);
        self.on_stack[vertex] = true;
        self.frames.push(Frame { vertex, cursor: 0 });
    }

    fn search(&mut self, root: usize) {
        self.discover(root);
        while let Some(frame) = self.frames.last_mut() {
            let vertex = frame.vertex;
            if let Some(&successor) = self.graph.successors(vertex).get(frame.cursor) {
                frame.cursor += 1;
                if self.is_unvisited(successor) {
                    self.discover(successor);
                } else if self.on_stack[successor] {
                    self.lowlink[vertex] = min(self.lowlink[vertex], self.index[successor]);
                }
                continue;
            }

            self.frames.pop();
            if let Some(parent) = self.frames.last() {
                let parent_vertex = parent.vertex;
                self.lowlink[parent_vertex] =
                    min(self.lowlink[parent_vertex], self.lowlink[vertex]);
            }
            if self.lowlink[vertex] == self.index[vertex] {
                self.close_component(vertex);
            }
        }
    }

    fn close_component(&mut self, root: usize) {
        while let Some(member) = self.stack.pop() {
            self.on_stack[member] = false;
            self.assignment[member] = self.component_count;
            if member == root {
                break;
            }
        }
        self.component_count += 1;
    }
}
