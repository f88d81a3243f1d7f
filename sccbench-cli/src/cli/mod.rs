//! Command-line interface for the SCC benchmark harness.
//!
//! `sweep` times and cross-checks algorithms across a grid of random graphs;
//! `memory` profiles one algorithm's resident memory on a single graph.

mod commands;

pub use commands::{
    Cli, CliError, Command, ComparisonArg, ExecutionSummary, FormatArg, MemoryCommand,
    SweepCommand, render_summary, run_cli,
};
