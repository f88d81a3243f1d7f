//! Single-point resident-memory profiling.

use rand::{SeedableRng, rngs::SmallRng};
use tracing::{info, instrument, warn};

use super::DEFAULT_SEED;
use crate::{
    algorithms::SccAlgorithm,
    error::BenchError,
    graph::{clamp_vertex_count, generate},
    memory::MemorySampler,
    record::{MeasurementAnomaly, MemoryRecord},
    runner::run_profiled,
};

/// Generates one graph and profiles one candidate on it.
///
/// The reference is never consulted; the record carries the candidate's
/// own component count.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MemorySweepController {
    vertex_count: usize,
    density: f32,
    seed: u64,
}

impl MemorySweepController {
    /// Creates a controller for one point. Vertex counts below 2 are raised
    /// to 2.
    ///
    /// # Examples
    /// ```
    /// use sccbench_core::MemorySweepController;
    ///
    /// assert_eq!(MemorySweepController::new(1, 0.5).vertex_count(), 2);
    /// ```
    #[must_use]
    pub const fn new(vertex_count: usize, density: f32) -> Self {
        Self {
            vertex_count: clamp_vertex_count(vertex_count),
            density,
            seed: DEFAULT_SEED,
        }
    }

    /// Overrides the generator seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Vertex count after clamping.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Requested edge density.
    #[must_use]
    pub const fn density(&self) -> f32 {
        self.density
    }

    /// Returns the configured seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Profiles `algorithm` once.
    ///
    /// A peak sample below the baseline is kept as data: the record is
    /// flagged with [`MeasurementAnomaly::PeakBelowBaseline`] and the delta
    /// is zero.
    ///
    /// # Errors
    /// Returns [`BenchError::Profiling`] when `sampler` fails, and the
    /// contract errors of [`crate::run_timed`] when the candidate misbehaves.
    #[instrument(
        name = "sweep.memory",
        err,
        skip(self, algorithm, sampler),
        fields(
            vertex_count = self.vertex_count,
            density = self.density,
            seed = self.seed,
            algorithm = algorithm.name(),
        ),
    )]
    pub fn run(
        &self,
        algorithm: &dyn SccAlgorithm,
        sampler: &dyn MemorySampler,
    ) -> Result<MemoryRecord, BenchError> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let graph = generate(self.vertex_count, self.density, &mut rng);
        let run = run_profiled(algorithm, &graph, sampler)?;

        let anomaly = (run.peak_bytes < run.baseline_bytes)
            .then_some(MeasurementAnomaly::PeakBelowBaseline);
        if anomaly.is_some() {
            warn!(
                baseline_bytes = run.baseline_bytes,
                peak_bytes = run.peak_bytes,
                "peak resident memory below baseline"
            );
        }
        let record = MemoryRecord {
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            component_count: run.outcome.component_count,
            baseline_bytes: run.baseline_bytes,
            peak_bytes: run.peak_bytes,
            peak_minus_baseline_bytes: run.peak_bytes.saturating_sub(run.baseline_bytes),
            algorithm: algorithm.name().to_owned(),
            anomaly,
        };
        info!(
            edge_count = record.edge_count,
            delta_bytes = record.peak_minus_baseline_bytes,
            "memory profile completed"
        );
        Ok(record)
    }
}
