#![expect(clippy::expect_used, reason = "tests require contextual panics")]
//! Property tests for the generator, the bundled algorithms and the
//! comparator.
use proptest::{prelude::any, prop_assert, prop_assert_eq, proptest};
use rand::{SeedableRng, rngs::SmallRng};
use sccbench_core::{
    BundledAlgorithm, ComparisonMode, DirectedGraph, PathBased, SccAlgorithm, SccOutcome, Tarjan,
    generate, is_correct,
};

fn graph(vertex_count: usize, density: f32, seed: u64) -> DirectedGraph {
    generate(vertex_count, density, &mut SmallRng::seed_from_u64(seed))
}

fn reference(graph: &DirectedGraph) -> SccOutcome {
    Tarjan.compute(graph).expect("tarjan never fails")
}

proptest! {
    #[test]
    fn generated_graphs_have_no_self_loops(
        vertex_count in 0usize..40,
        density in 0.0f32..=1.0,
        seed in any::<u64>(),
    ) {
        let generated = graph(vertex_count, density, seed);
        let n = generated.vertex_count();
        prop_assert!(n >= 2);
        prop_assert!(generated.edge_count() <= n * (n - 1));
        for vertex in generated.vertices() {
            prop_assert!(!generated.successors(vertex).contains(&vertex));
        }
    }

    #[test]
    fn reference_component_count_stays_within_vertex_count(
        vertex_count in 0usize..60,
        density in 0.0f32..=1.0,
        seed in any::<u64>(),
    ) {
        let generated = graph(vertex_count, density, seed);
        let outcome = reference(&generated);
        prop_assert!(outcome.component_count >= 1);
        prop_assert!(outcome.component_count <= generated.vertex_count());
        prop_assert_eq!(outcome.assignment.as_slice().len(), generated.vertex_count());
    }

    #[test]
    fn edgeless_graphs_have_one_component_per_vertex(
        vertex_count in 2usize..60,
        seed in any::<u64>(),
    ) {
        let generated = graph(vertex_count, 0.0, seed);
        prop_assert_eq!(generated.edge_count(), 0);
        prop_assert_eq!(reference(&generated).component_count, vertex_count);
    }

    #[test]
    fn bundled_algorithms_agree_on_the_partition(
        vertex_count in 2usize..50,
        density in 0.0f32..0.3,
        seed in any::<u64>(),
    ) {
        let generated = graph(vertex_count, density, seed);
        let expected = reference(&generated);
        for algorithm in BundledAlgorithm::ALL {
            let outcome = algorithm
                .instantiate()
                .compute(&generated)
                .expect("bundled algorithms never fail");
            prop_assert!(
                is_correct(&expected, &outcome, ComparisonMode::Partition),
                "{} disagrees",
                algorithm.as_str()
            );
        }
    }

    #[test]
    fn path_based_labels_match_tarjan_exactly(
        vertex_count in 2usize..50,
        density in 0.0f32..0.3,
        seed in any::<u64>(),
    ) {
        let generated = graph(vertex_count, density, seed);
        let outcome = PathBased.compute(&generated).expect("path-based never fails");
        prop_assert!(is_correct(&reference(&generated), &outcome, ComparisonMode::Strict));
    }

    #[test]
    fn comparison_is_reflexive(
        vertex_count in 2usize..40,
        density in 0.0f32..=1.0,
        seed in any::<u64>(),
    ) {
        let outcome = reference(&graph(vertex_count, density, seed));
        prop_assert!(is_correct(&outcome, &outcome, ComparisonMode::Strict));
        prop_assert!(is_correct(&outcome, &outcome, ComparisonMode::Partition));
    }

    #[test]
    fn strict_comparison_rejects_relabelled_partitions(
        vertex_count in 2usize..40,
        density in 0.0f32..0.15,
        seed in any::<u64>(),
        shift in 1usize..8,
    ) {
        let outcome = reference(&graph(vertex_count, density, seed));
        let count = outcome.component_count;
        proptest::prop_assume!(count >= 2);
        let rotation = shift % count;
        proptest::prop_assume!(rotation != 0);
        let rotated: Vec<usize> = outcome
            .assignment
            .as_slice()
            .iter()
            .map(|&id| (id + rotation) % count)
            .collect();
        let relabelled = SccOutcome::new(count, rotated);
        prop_assert!(!is_correct(&outcome, &relabelled, ComparisonMode::Strict));
        prop_assert!(is_correct(&outcome, &relabelled, ComparisonMode::Partition));
    }
}
