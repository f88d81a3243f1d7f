//! Result records produced by the controllers.

use serde::Serialize;

/// A measurement that looks wrong but is kept as data.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementAnomaly {
    /// The peak resident-set sample was below the baseline sample.
    PeakBelowBaseline,
    /// A run over a graph with at least one edge measured zero microseconds.
    ZeroElapsed,
}

impl MeasurementAnomaly {
    /// Stable lowercase identifier for logs and reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PeakBelowBaseline => "peak_below_baseline",
            Self::ZeroElapsed => "zero_elapsed",
        }
    }
}

/// One candidate's result at one sweep point.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct AlgorithmOutcome {
    /// Wall-clock time spent in the candidate, in microseconds.
    pub elapsed_micros: u64,
    /// Whether the candidate matched the reference.
    pub correct: bool,
    /// Suspicious timing, if any.
    pub anomaly: Option<MeasurementAnomaly>,
}

/// One visited `(vertex_count, density)` point of a sweep.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SweepRecord {
    /// Vertices in the generated graph.
    pub vertex_count: usize,
    /// Edges actually generated, not the requested density.
    pub edge_count: usize,
    /// Density requested for this point.
    pub density: f32,
    /// Component count reported by the reference.
    pub reference_component_count: usize,
    /// One entry per candidate, in the order the candidates were supplied.
    pub outcomes: Vec<AlgorithmOutcome>,
}

impl SweepRecord {
    /// Whether every candidate matched the reference at this point.
    ///
    /// # Examples
    /// ```
    /// use sccbench_core::{AlgorithmOutcome, SweepRecord};
    ///
    /// let record = SweepRecord {
    ///     vertex_count: 2,
    ///     edge_count: 2,
    ///     density: 1.0,
    ///     reference_component_count: 1,
    ///     outcomes: vec![AlgorithmOutcome { elapsed_micros: 3, correct: true, anomaly: None }],
    /// };
    /// assert!(record.all_correct());
    /// ```
    #[must_use]
    pub fn all_correct(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.correct)
    }
}

/// Resident-memory profile of one candidate on one graph.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct MemoryRecord {
    /// Vertices in the generated graph, after clamping.
    pub vertex_count: usize,
    /// Edges actually generated.
    pub edge_count: usize,
    /// Component count reported by the candidate itself.
    pub component_count: usize,
    /// Resident set size sampled just before the run.
    pub baseline_bytes: u64,
    /// Peak resident set size sampled just after the run.
    pub peak_bytes: u64,
    /// `peak_bytes - baseline_bytes`, or zero when the peak is lower.
    pub peak_minus_baseline_bytes: u64,
    /// Name of the profiled candidate.
    pub algorithm: String,
    /// Set when the samples are inconsistent.
    pub anomaly: Option<MeasurementAnomaly>,
}
