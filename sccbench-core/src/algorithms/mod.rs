//! The candidate algorithm contract and the bundled SCC implementations.
//!
//! Any type implementing [`SccAlgorithm`] can be benchmarked or used as the
//! reference. [`Tarjan`] is the default reference: it numbers components in
//! completion order, the same convention as Boost's `strong_components`.

mod kosaraju;
mod path_based;
mod tarjan;

use std::collections::{HashMap, hash_map::Entry};

use serde::Serialize;

use crate::{error::AlgorithmError, graph::DirectedGraph};

pub use kosaraju::Kosaraju;
pub use path_based::PathBased;
pub use tarjan::Tarjan;

/// Sentinel for "not yet visited" in the bundled traversals.
const UNVISITED: usize = usize::MAX;

/// Mapping from vertex index to component id.
///
/// # Examples
/// ```
/// use sccbench_core::ComponentAssignment;
///
/// let assignment = ComponentAssignment::new(vec![2, 2, 0, 1]);
/// assert_eq!(assignment.len(), 4);
/// assert_eq!(assignment.component_of(2), Some(0));
/// assert_eq!(assignment.canonical().as_slice(), &[0, 0, 1, 2]);
/// ```
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ComponentAssignment(Vec<usize>);

impl ComponentAssignment {
    /// Wraps a per-vertex id vector.
    #[must_use]
    pub const fn new(ids: Vec<usize>) -> Self {
        Self(ids)
    }

    /// Number of vertices covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the assignment covers no vertex.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Component id of `vertex`.
    #[must_use]
    pub fn component_of(&self, vertex: usize) -> Option<usize> {
        self.0.get(vertex).copied()
    }

    /// The raw id sequence, indexed by vertex.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Relabels ids by order of first occurrence.
    ///
    /// Two assignments describe the same partition exactly when their
    /// canonical forms are equal.
    #[must_use]
    pub fn canonical(&self) -> Self {
        let mut relabel: HashMap<usize, usize> = HashMap::new();
        let ids = self
            .0
            .iter()
            .map(|&id| {
                let next = relabel.len();
                match relabel.entry(id) {
                    Entry::Occupied(slot) => *slot.get(),
                    Entry::Vacant(slot) => *slot.insert(next),
                }
            })
            .collect();
        Self(ids)
    }
}

impl From<Vec<usize>> for ComponentAssignment {
    fn from(ids: Vec<usize>) -> Self {
        Self(ids)
    }
}

/// Result of one SCC computation.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct SccOutcome {
    /// Number of components the algorithm reports.
    pub component_count: usize,
    /// Per-vertex component ids.
    pub assignment: ComponentAssignment,
}

impl SccOutcome {
    /// Bundles a count with its assignment.
    #[must_use]
    pub fn new(component_count: usize, assignment: impl Into<ComponentAssignment>) -> Self {
        Self {
            component_count,
            assignment: assignment.into(),
        }
    }
}

/// Calling contract shared by candidate algorithms and the reference.
///
/// Implementations must not rely on interior mutability of the graph and
/// must return one component id per vertex.
///
/// # Examples
/// ```
/// use sccbench_core::{AlgorithmError, DirectedGraph, SccAlgorithm, SccOutcome};
///
/// /// Claims every vertex is its own component.
/// struct Singletons;
///
/// impl SccAlgorithm for Singletons {
///     fn name(&self) -> &str { "singletons" }
///     fn compute(&self, graph: &DirectedGraph) -> Result<SccOutcome, AlgorithmError> {
///         let ids: Vec<usize> = graph.vertices().collect();
///         Ok(SccOutcome::new(ids.len(), ids))
///     }
/// }
///
/// let graph = DirectedGraph::with_vertices(3);
/// let outcome = Singletons.compute(&graph)?;
/// assert_eq!(outcome.component_count, 3);
/// # Ok::<(), AlgorithmError>(())
/// ```
pub trait SccAlgorithm {
    /// Human-readable label used in reports.
    fn name(&self) -> &str;

    /// Computes the strongly connected components of `graph`.
    ///
    /// # Errors
    /// Returns [`AlgorithmError`] when the algorithm cannot produce a result.
    fn compute(&self, graph: &DirectedGraph) -> Result<SccOutcome, AlgorithmError>;
}

/// The SCC implementations shipped with the harness.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BundledAlgorithm {
    /// Iterative Tarjan, the default reference.
    Tarjan,
    /// Iterative two-pass Kosaraju.
    Kosaraju,
    /// Gabow's path-based algorithm.
    PathBased,
}

impl BundledAlgorithm {
    /// Every bundled algorithm, in report order.
    pub const ALL: [Self; 3] = [Self::Tarjan, Self::Kosaraju, Self::PathBased];

    /// Stable lowercase identifier, also the algorithm's report name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tarjan => "tarjan",
            Self::Kosaraju => "kosaraju",
            Self::PathBased => "path-based",
        }
    }

    /// Resolves an identifier produced by [`Self::as_str`].
    ///
    /// # Examples
    /// ```
    /// use sccbench_core::BundledAlgorithm;
    ///
    /// assert_eq!(BundledAlgorithm::from_name("kosaraju"), Some(BundledAlgorithm::Kosaraju));
    /// assert_eq!(BundledAlgorithm::from_name("dijkstra"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.as_str() == name)
    }

    /// Boxes a fresh instance behind the [`SccAlgorithm`] contract.
    #[must_use]
    pub fn instantiate(self) -> Box<dyn SccAlgorithm> {
        match self {
            Self::Tarjan => Box::new(Tarjan),
            Self::Kosaraju => Box::new(Kosaraju),
            Self::PathBased => Box::new(PathBased),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn graph(vertex_count: usize, edges: &[(usize, usize)]) -> DirectedGraph {
        DirectedGraph::from_edges(vertex_count, edges.iter().copied())
            .expect("test edges must be in range")
    }

    #[rstest]
    #[case::two_cycles_and_a_bridge(
        graph(6, &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 5), (5, 3)]),
        2
    )]
    #[case::chain(graph(4, &[(0, 1), (1, 2), (2, 3)]), 4)]
    #[case::edgeless(graph(5, &[]), 5)]
    #[case::self_loops(graph(3, &[(0, 0), (1, 1), (0, 1)]), 3)]
    #[case::parallel_edges(graph(2, &[(0, 1), (0, 1), (1, 0)]), 1)]
    #[case::empty(graph(0, &[]), 0)]
    fn bundled_algorithms_agree_on_partitions(
        #[case] input: DirectedGraph,
        #[case] expected_components: usize,
    ) {
        let reference = Tarjan.compute(&input).expect("tarjan must succeed");
        assert_eq!(reference.component_count, expected_components);
        for algorithm in BundledAlgorithm::ALL {
            let outcome = algorithm
                .instantiate()
                .compute(&input)
                .expect("bundled algorithms must succeed");
            assert_eq!(outcome.component_count, expected_components, "{algorithm:?}");
            assert_eq!(
                outcome.assignment.canonical(),
                reference.assignment.canonical(),
                "{algorithm:?}"
            );
        }
    }

    #[rstest]
    fn tarjan_numbers_components_in_completion_order() {
        // 0 -> 1 -> 2: the sink completes first.
        let outcome = Tarjan
            .compute(&graph(3, &[(0, 1), (1, 2)]))
            .expect("tarjan must succeed");
        assert_eq!(outcome.assignment.as_slice(), &[2, 1, 0]);
    }

    #[rstest]
    fn kosaraju_numbers_components_in_topological_order() {
        let outcome = Kosaraju
            .compute(&graph(3, &[(0, 1), (1, 2)]))
            .expect("kosaraju must succeed");
        assert_eq!(outcome.assignment.as_slice(), &[0, 1, 2]);
    }

    #[rstest]
    fn deep_chains_do_not_overflow_the_stack() {
        let length = 200_000;
        let edges: Vec<(usize, usize)> = (1..length).map(|vertex| (vertex - 1, vertex)).collect();
        let chain = graph(length, &edges);
        for algorithm in BundledAlgorithm::ALL {
            let outcome = algorithm
                .instantiate()
                .compute(&chain)
                .expect("bundled algorithms must succeed");
            assert_eq!(outcome.component_count, length);
        }
    }

    #[rstest]
    #[case::tarjan(BundledAlgorithm::Tarjan)]
    #[case::kosaraju(BundledAlgorithm::Kosaraju)]
    #[case::path_based(BundledAlgorithm::PathBased)]
    fn names_round_trip(#[case] algorithm: BundledAlgorithm) {
        assert_eq!(BundledAlgorithm::from_name(algorithm.as_str()), Some(algorithm));
        assert_eq!(algorithm.instantiate().name(), algorithm.as_str());
    }

    #[rstest]
    fn canonical_relabels_by_first_occurrence() {
        let assignment = ComponentAssignment::new(vec![7, 3, 7, 9, 3]);
        assert_eq!(assignment.canonical().as_slice(), &[0, 1, 0, 2, 1]);
    }
}
