//! Two-pass Kosaraju SCC.

use super::{SccAlgorithm, SccOutcome, UNVISITED};
use crate::{error::AlgorithmError, graph::DirectedGraph};

/// Kosaraju–Sharir: a post-order pass over the graph, then a sweep of the
/// transpose in reverse finishing order.
///
/// Components are numbered in the order the second pass finds them, which
/// is a topological order of the condensation. Under strict comparison this
/// numbering disagrees with [`super::Tarjan`] whenever there is more than
/// one component.
#[derive(Clone, Copy, Debug, Default)]
pub struct Kosaraju;

impl SccAlgorithm for Kosaraju {
    #[expect(
        clippy::unnecessary_literal_bound,
        reason = "SccAlgorithm constrains the return type to &str"
    )]
    fn name(&self) -> &str {
        "kosaraju"
    }

    fn compute(&self, graph: &DirectedGraph) -> Result<SccOutcome, AlgorithmError> {
        let finished = finishing_order(graph);
        let transposed = graph.transpose();
        let (component_count, assignment) = label_in_reverse(&transposed, &finished);
        Ok(SccOutcome::new(component_count, assignment))
    }
}

#[expect(
    clippy::indexing_slicing,
    reason = "every vertex id stored in a DirectedGraph is below its vertex count"
)]
fn finishing_order(graph: &DirectedGraph) -> Vec<usize> {
    let mut visited = vec![false; graph.vertex_count()];
    let mut finished = Vec::with_capacity(graph.vertex_count());
    let mut frames: Vec<(usize, usize)> = Vec::new();

    for root in graph.vertices() {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        frames.push((root, 0));
        while let Some((vertex, cursor)) = frames.last_mut() {
            let current = *vertex;
            match graph.successors(current).get(*cursor) {
                Some(&successor) => {
                    *cursor += 1;
                    if !visited[successor] {
                        visited[successor] = true;
                        frames.push((successor, 0));
                    }
                }
                None => {
                    frames.pop();
                    finished.push(current);
                }
            }
        }
    }
    finished
}

#[expect(
    clippy::indexing_slicing,
    reason = "every vertex id stored in a DirectedGraph is below its vertex count"
)]
fn label_in_reverse(transposed: &DirectedGraph, finished: &[usize]) -> (usize, Vec<usize>) {
    let mut assignment = vec![UNVISITED; transposed.vertex_count()];
    let mut pending = Vec::new();
    let mut component_count = 0;

    for &root in finished.iter().rev() {
        if assignment[root] != UNVISITED {
            continue;
        }
        assignment[root] = component_count;
        pending.push(root);
        while let Some(vertex) = pending.pop() {
            for &predecessor in transposed.successors(vertex) {
                if assignment[predecessor] == UNVISITED {
                    assignment[predecessor] = component_count;
                    pending.push(predecessor);
                }
            }
        }
        component_count += 1;
    }
    (component_count, assignment)
}
