//! Two-dimensional correctness and timing sweep.

use std::fmt;

use rand::{SeedableRng, rngs::SmallRng};
use tracing::{debug, info, instrument, warn};

use super::{DEFAULT_SEED, SweepBounds};
use crate::{
    algorithms::{SccAlgorithm, Tarjan},
    compare::{ComparisonMode, is_correct},
    error::BenchError,
    graph::generate,
    record::{AlgorithmOutcome, MeasurementAnomaly, SweepRecord},
    runner::{run_reference, run_timed},
};

/// Runs every candidate at every point of a [`SweepBounds`] grid.
///
/// One random generator is seeded per [`Self::run`] call and advanced
/// across all points, so two runs with the same seed and bounds visit the
/// same graphs.
///
/// # Examples
/// ```
/// use sccbench_core::{
///     BundledAlgorithm, ComparisonMode, SccAlgorithm, SweepBounds, SweepController,
/// };
///
/// let controller = SweepController::new(SweepBounds {
///     min_vertices: 2,
///     max_vertices: 5,
///     min_density: 0.2,
///     max_density: 0.4,
///     density_step: 0.2,
/// })
/// .with_seed(7)
/// .with_comparison(ComparisonMode::Partition);
///
/// let candidates: Vec<Box<dyn SccAlgorithm>> = BundledAlgorithm::ALL
///     .into_iter()
///     .map(BundledAlgorithm::instantiate)
///     .collect();
/// let records = controller.run(&candidates)?;
/// assert_eq!(records.len(), 8);
/// assert!(records.iter().all(|record| record.all_correct()));
/// # Ok::<(), sccbench_core::BenchError>(())
/// ```
pub struct SweepController {
    bounds: SweepBounds,
    seed: u64,
    comparison: ComparisonMode,
    oracle: Box<dyn SccAlgorithm>,
}

impl fmt::Debug for SweepController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SweepController")
            .field("bounds", &self.bounds)
            .field("seed", &self.seed)
            .field("comparison", &self.comparison)
            .field("oracle", &self.oracle.name())
            .finish()
    }
}

impl SweepController {
    /// Creates a controller with the default seed, strict comparison and
    /// [`Tarjan`] as the reference.
    #[must_use]
    pub fn new(bounds: SweepBounds) -> Self {
        Self {
            bounds,
            seed: DEFAULT_SEED,
            comparison: ComparisonMode::Strict,
            oracle: Box::new(Tarjan),
        }
    }

    /// Overrides the generator seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Overrides how candidates are matched against the reference.
    #[must_use]
    pub const fn with_comparison(mut self, comparison: ComparisonMode) -> Self {
        self.comparison = comparison;
        self
    }

    /// Replaces the reference algorithm.
    #[must_use]
    pub fn with_oracle(mut self, oracle: impl SccAlgorithm + 'static) -> Self {
        self.oracle = Box::new(oracle);
        self
    }

    /// Returns the configured bounds.
    #[must_use]
    pub const fn bounds(&self) -> SweepBounds {
        self.bounds
    }

    /// Returns the configured seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the configured comparison mode.
    #[must_use]
    pub const fn comparison(&self) -> ComparisonMode {
        self.comparison
    }

    /// Sweeps the grid and returns one record per visited point, in
    /// visitation order.
    ///
    /// # Errors
    /// Returns [`BenchError`] as soon as the reference or any candidate
    /// fails or returns an assignment of the wrong length; the remaining
    /// points are not visited.
    #[instrument(
        name = "sweep.run",
        err,
        skip(self, algorithms),
        fields(
            bounds = %self.bounds,
            seed = self.seed,
            comparison = self.comparison.as_str(),
            oracle = self.oracle.name(),
            algorithms = algorithms.len(),
        ),
    )]
    pub fn run(&self, algorithms: &[Box<dyn SccAlgorithm>]) -> Result<Vec<SweepRecord>, BenchError> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut records = Vec::new();
        for vertex_count in self.bounds.vertex_counts() {
            for density in self.bounds.densities() {
                records.push(self.run_point(vertex_count, density, algorithms, &mut rng)?);
            }
        }
        info!(records = records.len(), "sweep completed");
        Ok(records)
    }

    fn run_point(
        &self,
        vertex_count: usize,
        density: f32,
        algorithms: &[Box<dyn SccAlgorithm>],
        rng: &mut SmallRng,
    ) -> Result<SweepRecord, BenchError> {
        let graph = generate(vertex_count, density, rng);
        let reference = run_reference(self.oracle.as_ref(), &graph)?;

        let mut outcomes = Vec::with_capacity(algorithms.len());
        for algorithm in algorithms {
            let run = run_timed(algorithm.as_ref(), &graph)?;
            let correct = is_correct(&reference, &run.outcome, self.comparison);
            let elapsed_micros = run.elapsed_micros();
            let anomaly = (elapsed_micros == 0 && graph.edge_count() > 0)
                .then_some(MeasurementAnomaly::ZeroElapsed);
            if anomaly.is_some() {
                debug!(
                    algorithm = algorithm.name(),
                    vertex_count,
                    density,
                    "zero elapsed time on a non-empty graph"
                );
            }
            if !correct {
                warn!(
                    algorithm = algorithm.name(),
                    vertex_count,
                    density,
                    expected_components = reference.component_count,
                    reported_components = run.outcome.component_count,
                    "candidate disagrees with the reference"
                );
            }
            outcomes.push(AlgorithmOutcome {
                elapsed_micros,
                correct,
                anomaly,
            });
        }

        debug!(
            vertex_count,
            density,
            edge_count = graph.edge_count(),
            components = reference.component_count,
            "sweep point completed"
        );
        Ok(SweepRecord {
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            density,
            reference_component_count: reference.component_count,
            outcomes,
        })
    }
}
