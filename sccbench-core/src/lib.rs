//! sccbench core library.
//!
//! Drives candidate strongly-connected-component (SCC) algorithms across a
//! sweep of Erdős–Rényi random digraphs, cross-checks each candidate against
//! a trusted reference algorithm, and records wall-clock time and resident
//! memory for every run.
//!
//! # Example
//!
//! ```
//! use sccbench_core::{BundledAlgorithm, SccAlgorithm, SweepBounds, SweepController};
//!
//! let bounds = SweepBounds {
//!     min_vertices: 2,
//!     max_vertices: 2,
//!     min_density: 1.0,
//!     max_density: 1.0,
//!     density_step: 1.0,
//! };
//! let candidates: Vec<Box<dyn SccAlgorithm>> = vec![BundledAlgorithm::Tarjan.instantiate()];
//! let records = SweepController::new(bounds).run(&candidates)?;
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].reference_component_count, 1);
//! # Ok::<(), sccbench_core::BenchError>(())
//! ```

mod algorithms;
mod compare;
mod error;
mod graph;
mod memory;
mod record;
mod report;
mod runner;
mod sweep;

pub use crate::{
    algorithms::{
        BundledAlgorithm, ComponentAssignment, Kosaraju, PathBased, SccAlgorithm, SccOutcome,
        Tarjan,
    },
    compare::{ComparisonMode, is_correct},
    error::{
        AlgorithmError, BenchError, BenchErrorCode, GraphError, ProfilingError, Result,
    },
    graph::{DirectedGraph, MIN_VERTEX_COUNT, clamp_vertex_count, generate},
    memory::{MemorySampler, ProcStatusSampler},
    record::{AlgorithmOutcome, MeasurementAnomaly, MemoryRecord, SweepRecord},
    report::{
        CsvFormatter, JsonFormatter, ReportFormat, ReportFormatter, TableFormatter, render,
        render_memory_record,
    },
    runner::{ProfiledRun, TimedRun, run_profiled, run_reference, run_timed},
    sweep::{DEFAULT_SEED, DensitySteps, MemorySweepController, SweepBounds, SweepController},
};
