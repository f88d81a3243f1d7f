//! JSON Lines output.

use std::io::{self, Write};

use serde::Serialize;

use super::ReportFormatter;
use crate::record::{MeasurementAnomaly, MemoryRecord, SweepRecord};

/// One JSON object per record, newline-terminated, with no header.
///
/// Each object carries the point coordinates and an `algorithms` array
/// pairing every outcome with its candidate name (`null` past the end of
/// the supplied names).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct JsonFormatter {
    algorithms: Vec<String>,
}

impl JsonFormatter {
    /// Creates a formatter labelling outcomes with `algorithms`.
    #[must_use]
    pub const fn new(algorithms: Vec<String>) -> Self {
        Self { algorithms }
    }
}

#[derive(Serialize)]
struct PointLine<'a> {
    vertex_count: usize,
    edge_count: usize,
    density: f32,
    reference_component_count: usize,
    algorithms: Vec<OutcomeEntry<'a>>,
}

#[derive(Serialize)]
struct OutcomeEntry<'a> {
    name: Option<&'a str>,
    elapsed_micros: u64,
    correct: bool,
    anomaly: Option<MeasurementAnomaly>,
}

impl ReportFormatter for JsonFormatter {
    fn write_header(&self, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }

    fn write_record(&self, out: &mut dyn Write, record: &SweepRecord) -> io::Result<()> {
        let algorithms = record
            .outcomes
            .iter()
            .enumerate()
            .map(|(index, outcome)| OutcomeEntry {
                name: self.algorithms.get(index).map(String::as_str),
                elapsed_micros: outcome.elapsed_micros,
                correct: outcome.correct,
                anomaly: outcome.anomaly,
            })
            .collect();
        write_line(
            out,
            &PointLine {
                vertex_count: record.vertex_count,
                edge_count: record.edge_count,
                density: record.density,
                reference_component_count: record.reference_component_count,
                algorithms,
            },
        )
    }
}

pub(super) fn write_memory_record(out: &mut dyn Write, record: &MemoryRecord) -> io::Result<()> {
    write_line(out, record)
}

fn write_line(out: &mut dyn Write, value: &impl Serialize) -> io::Result<()> {
    serde_json::to_writer(&mut *out, value).map_err(io::Error::from)?;
    writeln!(out)
}
