//! Single invocations of an algorithm, with timing or memory instrumentation.

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use crate::{
    algorithms::{SccAlgorithm, SccOutcome},
    error::{AlgorithmError, BenchError},
    graph::DirectedGraph,
    memory::MemorySampler,
};

/// A candidate's result with the wall-clock time spent computing it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TimedRun {
    /// What the candidate returned.
    pub outcome: SccOutcome,
    /// Time spent inside [`SccAlgorithm::compute`].
    pub elapsed: Duration,
}

impl TimedRun {
    /// Elapsed time in whole microseconds, saturating at `u64::MAX`.
    #[must_use]
    pub fn elapsed_micros(&self) -> u64 {
        u64::try_from(self.elapsed.as_micros()).unwrap_or(u64::MAX)
    }
}

/// A candidate's result bracketed by two resident-memory samples.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProfiledRun {
    /// What the candidate returned.
    pub outcome: SccOutcome,
    /// Current resident set sampled immediately before the call.
    pub baseline_bytes: u64,
    /// Peak resident set sampled immediately after the call.
    pub peak_bytes: u64,
}

/// Runs the reference once, untimed, applying the same contract checks as
/// candidates.
///
/// # Errors
/// Returns [`BenchError::AlgorithmFailed`] or
/// [`BenchError::AssignmentLengthMismatch`] when the reference breaks its
/// contract.
pub fn run_reference(
    reference: &dyn SccAlgorithm,
    graph: &DirectedGraph,
) -> Result<SccOutcome, BenchError> {
    validate(reference, graph, reference.compute(graph))
}

/// Runs `algorithm` once and measures the call with [`Instant`].
///
/// Only the call itself is timed; validation happens afterwards.
///
/// # Errors
/// Returns [`BenchError::AlgorithmFailed`] when the algorithm reports an
/// error and [`BenchError::AssignmentLengthMismatch`] when the assignment
/// does not cover every vertex.
///
/// # Examples
/// ```
/// use sccbench_core::{DirectedGraph, Tarjan, run_timed};
///
/// let graph = DirectedGraph::from_edges(2, [(0, 1), (1, 0)])?;
/// let run = run_timed(&Tarjan, &graph)?;
/// assert_eq!(run.outcome.component_count, 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn run_timed(
    algorithm: &dyn SccAlgorithm,
    graph: &DirectedGraph,
) -> Result<TimedRun, BenchError> {
    let started = Instant::now();
    let result = algorithm.compute(graph);
    let elapsed = started.elapsed();
    let outcome = validate(algorithm, graph, result)?;
    Ok(TimedRun { outcome, elapsed })
}

/// Runs `algorithm` once between a baseline and a peak memory sample.
///
/// Nothing but the call happens between the two samples.
///
/// # Errors
/// Returns [`BenchError::Profiling`] when either sample fails, plus the
/// contract errors of [`run_timed`].
pub fn run_profiled(
    algorithm: &dyn SccAlgorithm,
    graph: &DirectedGraph,
    sampler: &dyn MemorySampler,
) -> Result<ProfiledRun, BenchError> {
    let baseline_bytes = sampler.current_resident_bytes()?;
    let result = algorithm.compute(graph);
    let peak_bytes = sampler.peak_resident_bytes()?;
    let outcome = validate(algorithm, graph, result)?;
    Ok(ProfiledRun {
        outcome,
        baseline_bytes,
        peak_bytes,
    })
}

fn validate(
    algorithm: &dyn SccAlgorithm,
    graph: &DirectedGraph,
    result: Result<SccOutcome, AlgorithmError>,
) -> Result<SccOutcome, BenchError> {
    let outcome = result.map_err(|error| BenchError::AlgorithmFailed {
        algorithm: Arc::from(algorithm.name()),
        error,
    })?;
    let expected = graph.vertex_count();
    let actual = outcome.assignment.len();
    if actual != expected {
        return Err(BenchError::AssignmentLengthMismatch {
            algorithm: Arc::from(algorithm.name()),
            expected,
            actual,
        });
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{algorithms::Tarjan, error::ProfilingError};
    use rstest::rstest;
    use std::cell::Cell;

    struct Truncating;

    impl SccAlgorithm for Truncating {
        fn name(&self) -> &str {
            "truncating"
        }

        fn compute(&self, graph: &DirectedGraph) -> Result<SccOutcome, AlgorithmError> {
            let ids: Vec<usize> = graph.vertices().skip(1).collect();
            Ok(SccOutcome::new(ids.len(), ids))
        }
    }

    struct Failing;

    impl SccAlgorithm for Failing {
        fn name(&self) -> &str {
            "failing"
        }

        fn compute(&self, _graph: &DirectedGraph) -> Result<SccOutcome, AlgorithmError> {
            Err(AlgorithmError::failed("gave up"))
        }
    }

    /// Counts samples so tests can check the bracket.
    #[derive(Default)]
    struct CountingSampler {
        calls: Cell<u64>,
    }

    impl MemorySampler for CountingSampler {
        fn current_resident_bytes(&self) -> Result<u64, ProfilingError> {
            self.calls.set(self.calls.get() + 1);
            Ok(100)
        }

        fn peak_resident_bytes(&self) -> Result<u64, ProfilingError> {
            self.calls.set(self.calls.get() + 1);
            Ok(250)
        }
    }

    struct BrokenSampler;

    impl MemorySampler for BrokenSampler {
        fn current_resident_bytes(&self) -> Result<u64, ProfilingError> {
            Err(ProfilingError::UnsupportedPlatform { os: "test" })
        }

        fn peak_resident_bytes(&self) -> Result<u64, ProfilingError> {
            Err(ProfilingError::UnsupportedPlatform { os: "test" })
        }
    }

    fn cycle() -> DirectedGraph {
        DirectedGraph::from_edges(3, [(0, 1), (1, 2), (2, 0)]).expect("edges are in range")
    }

    #[rstest]
    fn run_timed_returns_the_outcome() {
        let run = run_timed(&Tarjan, &cycle()).expect("tarjan honours the contract");
        assert_eq!(run.outcome, SccOutcome::new(1, vec![0, 0, 0]));
    }

    #[rstest]
    fn run_timed_rejects_short_assignments() {
        let err = run_timed(&Truncating, &cycle()).expect_err("short assignment must fail");
        assert!(matches!(
            err,
            BenchError::AssignmentLengthMismatch {
                expected: 3,
                actual: 2,
                ..
            }
        ));
    }

    #[rstest]
    fn run_timed_propagates_algorithm_errors() {
        let err = run_timed(&Failing, &cycle()).expect_err("failing algorithm must fail");
        match err {
            BenchError::AlgorithmFailed { algorithm, error } => {
                assert_eq!(&*algorithm, "failing");
                assert_eq!(error, AlgorithmError::failed("gave up"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[rstest]
    fn run_reference_applies_contract_checks() {
        let err = run_reference(&Truncating, &cycle()).expect_err("short assignment must fail");
        assert!(matches!(err, BenchError::AssignmentLengthMismatch { .. }));
    }

    #[rstest]
    fn run_profiled_samples_exactly_twice() {
        let sampler = CountingSampler::default();
        let run = run_profiled(&Tarjan, &cycle(), &sampler).expect("sampling succeeds");
        assert_eq!(sampler.calls.get(), 2);
        assert_eq!(run.baseline_bytes, 100);
        assert_eq!(run.peak_bytes, 250);
    }

    #[rstest]
    fn run_profiled_propagates_sampler_failures() {
        let err = run_profiled(&Tarjan, &cycle(), &BrokenSampler)
            .expect_err("broken sampler must fail");
        assert!(matches!(
            err,
            BenchError::Profiling(ProfilingError::UnsupportedPlatform { os: "test" })
        ));
    }

    #[rstest]
    fn elapsed_micros_saturates() {
        let run = TimedRun {
            outcome: SccOutcome::default(),
            elapsed: Duration::MAX,
        };
        assert_eq!(run.elapsed_micros(), u64::MAX);
    }
}
