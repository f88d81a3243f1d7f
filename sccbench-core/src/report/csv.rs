//! Comma-separated output.

use std::{
    borrow::Cow,
    io::{self, Write},
};

use super::{ReportFormatter, anomaly_label};
use crate::record::{MemoryRecord, SweepRecord};

const MEMORY_HEADER: &str = "algorithm,vertex_count,edge_count,component_count,\
baseline_bytes,peak_bytes,peak_minus_baseline_bytes,anomaly";

/// CSV with a header row and three columns per candidate: time, verdict and
/// anomaly (empty when none was observed).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CsvFormatter {
    algorithms: Vec<String>,
}

impl CsvFormatter {
    /// Creates a formatter labelling columns with `algorithms`.
    #[must_use]
    pub const fn new(algorithms: Vec<String>) -> Self {
        Self { algorithms }
    }
}

impl ReportFormatter for CsvFormatter {
    fn write_header(&self, out: &mut dyn Write) -> io::Result<()> {
        write!(out, "vertex_count,edge_count,density,reference_components")?;
        for name in &self.algorithms {
            write!(
                out,
                ",{},{},{}",
                escape(&format!("{name}_micros")),
                escape(&format!("{name}_correct")),
                escape(&format!("{name}_anomaly"))
            )?;
        }
        writeln!(out)
    }

    fn write_record(&self, out: &mut dyn Write, record: &SweepRecord) -> io::Result<()> {
        write!(
            out,
            "{},{},{},{}",
            record.vertex_count, record.edge_count, record.density, record.reference_component_count
        )?;
        for outcome in &record.outcomes {
            write!(
                out,
                ",{},{},{}",
                outcome.elapsed_micros,
                outcome.correct,
                anomaly_label(outcome.anomaly)
            )?;
        }
        writeln!(out)
    }
}

pub(super) fn write_memory_record(out: &mut dyn Write, record: &MemoryRecord) -> io::Result<()> {
    writeln!(out, "{MEMORY_HEADER}")?;
    writeln!(
        out,
        "{},{},{},{},{},{},{},{}",
        escape(&record.algorithm),
        record.vertex_count,
        record.edge_count,
        record.component_count,
        record.baseline_bytes,
        record.peak_bytes,
        record.peak_minus_baseline_bytes,
        anomaly_label(record.anomaly),
    )
}

/// Quotes a field when it contains a delimiter, quote or line break.
fn escape(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
