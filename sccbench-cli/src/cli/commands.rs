//! Command implementations and argument parsing for `sccbench`.

use std::io::{self, Write};

use clap::{Args, Parser, Subcommand, ValueEnum};
use sccbench_core::{
    BenchError, BenchErrorCode, BundledAlgorithm, ComparisonMode, DEFAULT_SEED, MemoryRecord,
    MemorySampler, MemorySweepController, ProcStatusSampler, ReportFormat, SccAlgorithm,
    SweepBounds, SweepController, SweepRecord, render, render_memory_record,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument, warn};

/// Top-level options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "sccbench",
    about = "Cross-check and time strongly connected component algorithms on random digraphs."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Sweep vertex count and density, timing every algorithm and checking it
    /// against Tarjan's.
    Sweep(SweepCommand),
    /// Profile the resident memory of one algorithm on one graph.
    Memory(MemoryCommand),
}

/// Options accepted by `sweep`.
#[derive(Debug, Args, Clone)]
pub struct SweepCommand {
    /// Smallest vertex count; values below 2 are raised to 2.
    #[arg(long)]
    pub min_vertices: usize,

    /// Largest vertex count, inclusive.
    #[arg(long)]
    pub max_vertices: usize,

    /// First edge density visited.
    #[arg(long)]
    pub min_density: f32,

    /// Largest edge density visited, inclusive.
    #[arg(long)]
    pub max_density: f32,

    /// Amount added to the density between points.
    #[arg(long)]
    pub density_step: f32,

    /// Seed for graph generation.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// How candidate assignments are matched against the reference.
    #[arg(long, value_enum, default_value_t = ComparisonArg::Strict)]
    pub comparison: ComparisonArg,

    /// Report encoding.
    #[arg(long, value_enum, default_value_t = FormatArg::Table)]
    pub format: FormatArg,

    /// Algorithm to benchmark; repeat to add more. Defaults to every bundled
    /// algorithm.
    #[arg(long = "algorithm", value_parser = parse_algorithm)]
    pub algorithms: Vec<BundledAlgorithm>,
}

/// Options accepted by `memory`.
#[derive(Debug, Args, Clone)]
pub struct MemoryCommand {
    /// Vertex count; values below 2 are raised to 2.
    #[arg(long)]
    pub vertices: usize,

    /// Edge density.
    #[arg(long)]
    pub density: f32,

    /// Algorithm to profile.
    #[arg(long, value_parser = parse_algorithm)]
    pub algorithm: BundledAlgorithm,

    /// Seed for graph generation.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Report encoding.
    #[arg(long, value_enum, default_value_t = FormatArg::Table)]
    pub format: FormatArg,
}

/// Resolves an `--algorithm` value against the bundled implementations.
fn parse_algorithm(raw: &str) -> Result<BundledAlgorithm, String> {
    BundledAlgorithm::from_name(raw).ok_or_else(|| {
        let known: Vec<&str> = BundledAlgorithm::ALL
            .into_iter()
            .map(BundledAlgorithm::as_str)
            .collect();
        format!("unknown algorithm `{raw}`; expected one of {}", known.join(", "))
    })
}

/// Comparison modes selectable on the command line.
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum ComparisonArg {
    /// Component ids must match exactly.
    Strict,
    /// Only the grouping of vertices must match.
    Partition,
}

impl From<ComparisonArg> for ComparisonMode {
    fn from(value: ComparisonArg) -> Self {
        match value {
            ComparisonArg::Strict => Self::Strict,
            ComparisonArg::Partition => Self::Partition,
        }
    }
}

/// Report encodings selectable on the command line.
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum FormatArg {
    /// Aligned columns.
    Table,
    /// Comma-separated values.
    Csv,
    /// JSON Lines.
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Table => Self::Table,
            FormatArg::Csv => Self::Csv,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Errors surfaced while executing commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The benchmark itself failed.
    #[error(transparent)]
    Bench(#[from] BenchError),
}

impl CliError {
    /// Stable code of the underlying benchmark error.
    #[must_use]
    pub const fn code(&self) -> BenchErrorCode {
        match self {
            Self::Bench(error) => error.code(),
        }
    }
}

/// What a command produced, ready for [`render_summary`].
#[derive(Debug, Clone)]
pub enum ExecutionSummary {
    /// Result of `sweep`.
    Sweep {
        /// Candidate names, in report column order.
        algorithms: Vec<String>,
        /// One record per visited point.
        records: Vec<SweepRecord>,
        /// Requested encoding.
        format: ReportFormat,
    },
    /// Result of `memory`.
    Memory {
        /// The profile.
        record: MemoryRecord,
        /// Requested encoding.
        format: ReportFormat,
    },
}

/// Executes the command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the benchmark fails.
///
/// # Examples
/// ```
/// use sccbench_cli::cli::{
///     Cli, Command, ComparisonArg, ExecutionSummary, FormatArg, SweepCommand, run_cli,
/// };
/// use sccbench_core::BundledAlgorithm;
///
/// let cli = Cli {
///     command: Command::Sweep(SweepCommand {
///         min_vertices: 2,
///         max_vertices: 3,
///         min_density: 0.5,
///         max_density: 0.5,
///         density_step: 0.1,
///         seed: 1,
///         comparison: ComparisonArg::Partition,
///         format: FormatArg::Csv,
///         algorithms: vec![BundledAlgorithm::Kosaraju],
///     }),
/// };
/// let ExecutionSummary::Sweep { records, .. } = run_cli(cli)? else {
///     unreachable!("sweep produces a sweep summary");
/// };
/// assert_eq!(records.len(), 2);
/// # Ok::<(), sccbench_cli::cli::CliError>(())
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Sweep(sweep) => {
            Span::current().record("command", "sweep");
            run_sweep(sweep)
        }
        Command::Memory(memory) => {
            Span::current().record("command", "memory");
            run_memory(memory, &ProcStatusSampler)
        }
    }
}

#[instrument(
    name = "cli.sweep",
    err,
    skip(command),
    fields(algorithms = field::Empty),
)]
pub(super) fn run_sweep(command: SweepCommand) -> Result<ExecutionSummary, CliError> {
    let SweepCommand {
        min_vertices,
        max_vertices,
        min_density,
        max_density,
        density_step,
        seed,
        comparison,
        format,
        algorithms,
    } = command;
    let candidates = instantiate(&algorithms);
    let names: Vec<String> = candidates
        .iter()
        .map(|candidate| candidate.name().to_owned())
        .collect();
    Span::current().record("algorithms", field::display(names.join(",")));

    let bounds = SweepBounds {
        min_vertices,
        max_vertices,
        min_density,
        max_density,
        density_step,
    };
    let records = SweepController::new(bounds)
        .with_seed(seed)
        .with_comparison(comparison.into())
        .run(&candidates)?;

    let mismatched_points = records
        .iter()
        .filter(|record| !record.all_correct())
        .count();
    if mismatched_points > 0 {
        warn!(mismatched_points, "some candidates disagreed with the reference");
    }
    info!(points = records.len(), "sweep command completed");
    Ok(ExecutionSummary::Sweep {
        algorithms: names,
        records,
        format: format.into(),
    })
}

#[instrument(
    name = "cli.memory",
    err,
    skip(command, sampler),
    fields(algorithm = field::Empty),
)]
pub(super) fn run_memory(
    command: MemoryCommand,
    sampler: &dyn MemorySampler,
) -> Result<ExecutionSummary, CliError> {
    let MemoryCommand {
        vertices,
        density,
        algorithm,
        seed,
        format,
    } = command;
    Span::current().record("algorithm", algorithm.as_str());

    let record = MemorySweepController::new(vertices, density)
        .with_seed(seed)
        .run(algorithm.instantiate().as_ref(), sampler)?;
    Ok(ExecutionSummary::Memory {
        record,
        format: format.into(),
    })
}

/// Resolves the requested algorithms, falling back to every bundled one.
pub(super) fn instantiate(requested: &[BundledAlgorithm]) -> Vec<Box<dyn SccAlgorithm>> {
    let selected: &[BundledAlgorithm] = if requested.is_empty() {
        &BundledAlgorithm::ALL
    } else {
        requested
    };
    selected
        .iter()
        .copied()
        .map(BundledAlgorithm::instantiate)
        .collect()
}

/// Writes `summary` to `writer` in its requested encoding.
///
/// # Errors
/// Returns [`io::Error`] if writing fails.
///
/// # Examples
/// ```
/// use sccbench_cli::cli::{ExecutionSummary, render_summary};
/// use sccbench_core::{AlgorithmOutcome, ReportFormat, SweepRecord};
///
/// let summary = ExecutionSummary::Sweep {
///     algorithms: vec!["tarjan".into()],
///     records: vec![SweepRecord {
///         vertex_count: 2,
///         edge_count: 1,
///         density: 0.5,
///         reference_component_count: 2,
///         outcomes: vec![AlgorithmOutcome { elapsed_micros: 3, correct: true, anomaly: None }],
///     }],
///     format: ReportFormat::Csv,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert!(String::from_utf8(buffer)?.ends_with("2,1,0.5,2,3,true,\n"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Sweep {
            algorithms,
            records,
            format,
        } => {
            let formatter = format.sweep_formatter(algorithms.clone());
            render(formatter.as_ref(), records, &mut writer)
        }
        ExecutionSummary::Memory { record, format } => {
            render_memory_record(*format, record, &mut writer)
        }
    }
}
