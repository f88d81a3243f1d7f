//! Fixed-width text columns for terminals.

use std::io::{self, Write};

use super::{ReportFormatter, anomaly_label};
use crate::record::{MemoryRecord, SweepRecord};

const COLUMN_WIDTH: usize = 10;

const ANOMALY_MARKER: char = '*';

/// Right-aligned columns: `V`, `E`, `p`, `SCC`, then `<name> µs` and
/// `<name> ok` for every candidate. A time carrying a measurement anomaly is
/// suffixed with `*`.
///
/// # Examples
/// ```
/// use sccbench_core::{AlgorithmOutcome, SweepRecord, TableFormatter, render};
///
/// let record = SweepRecord {
///     vertex_count: 2,
///     edge_count: 0,
///     density: 0.0,
///     reference_component_count: 2,
///     outcomes: vec![AlgorithmOutcome { elapsed_micros: 1, correct: true, anomaly: None }],
/// };
/// let mut out = Vec::new();
/// render(&TableFormatter::new(vec!["tarjan".into()]), [&record], &mut out)?;
/// let text = String::from_utf8(out)?;
/// assert!(text.lines().next().is_some_and(|header| header.ends_with("tarjan ok")));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TableFormatter {
    columns: Vec<CandidateColumns>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct CandidateColumns {
    micros_label: String,
    correct_label: String,
    width: usize,
}

impl TableFormatter {
    /// Creates a formatter labelling columns with `algorithms`.
    #[must_use]
    pub fn new(algorithms: Vec<String>) -> Self {
        let columns = algorithms
            .into_iter()
            .map(|name| {
                let micros_label = format!("{name} µs");
                let correct_label = format!("{name} ok");
                let width = micros_label.chars().count().max(COLUMN_WIDTH);
                CandidateColumns {
                    micros_label,
                    correct_label,
                    width,
                }
            })
            .collect();
        Self { columns }
    }

    fn width_of(&self, index: usize) -> usize {
        self.columns
            .get(index)
            .map_or(COLUMN_WIDTH, |column| column.width)
    }
}

impl ReportFormatter for TableFormatter {
    fn write_header(&self, out: &mut dyn Write) -> io::Result<()> {
        write!(
            out,
            "{:>w$} {:>w$} {:>w$} {:>w$}",
            "V",
            "E",
            "p",
            "SCC",
            w = COLUMN_WIDTH
        )?;
        for column in &self.columns {
            write!(
                out,
                " {:>w$} {:>w$}",
                column.micros_label,
                column.correct_label,
                w = column.width
            )?;
        }
        writeln!(out)
    }

    fn write_record(&self, out: &mut dyn Write, record: &SweepRecord) -> io::Result<()> {
        write!(
            out,
            "{:>w$} {:>w$} {:>w$} {:>w$}",
            record.vertex_count,
            record.edge_count,
            record.density,
            record.reference_component_count,
            w = COLUMN_WIDTH
        )?;
        for (index, outcome) in record.outcomes.iter().enumerate() {
            let verdict = if outcome.correct { "yes" } else { "NO" };
            let micros = match outcome.anomaly {
                Some(_) => format!("{}{ANOMALY_MARKER}", outcome.elapsed_micros),
                None => outcome.elapsed_micros.to_string(),
            };
            write!(
                out,
                " {:>w$} {:>w$}",
                micros,
                verdict,
                w = self.width_of(index)
            )?;
        }
        writeln!(out)
    }
}

pub(super) fn write_memory_record(out: &mut dyn Write, record: &MemoryRecord) -> io::Result<()> {
    let name_width = record.algorithm.chars().count().max(COLUMN_WIDTH);
    writeln!(
        out,
        "{:>n$} {:>w$} {:>w$} {:>w$} {:>14} {:>14} {:>14} anomaly",
        "algorithm",
        "V",
        "E",
        "SCC",
        "baseline B",
        "peak B",
        "delta B",
        n = name_width,
        w = COLUMN_WIDTH
    )?;
    writeln!(
        out,
        "{:>n$} {:>w$} {:>w$} {:>w$} {:>14} {:>14} {:>14} {}",
        record.algorithm,
        record.vertex_count,
        record.edge_count,
        record.component_count,
        record.baseline_bytes,
        record.peak_bytes,
        record.peak_minus_baseline_bytes,
        anomaly_label(record.anomaly),
        n = name_width,
        w = COLUMN_WIDTH
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{AlgorithmOutcome, MeasurementAnomaly};
    use rstest::rstest;

    #[rstest]
    fn long_names_widen_their_columns() {
        let formatter = TableFormatter::new(vec!["an-unusually-long-name".to_owned()]);
        assert_eq!(formatter.width_of(0), "an-unusually-long-name µs".chars().count());
        assert_eq!(formatter.width_of(1), COLUMN_WIDTH);
    }

    #[rstest]
    fn rows_align_with_the_header() {
        let formatter = TableFormatter::new(vec!["tarjan".to_owned()]);
        let record = SweepRecord {
            vertex_count: 12,
            edge_count: 30,
            density: 0.25,
            reference_component_count: 3,
            outcomes: vec![AlgorithmOutcome {
                elapsed_micros: 7,
                correct: false,
                anomaly: None,
            }],
        };
        let mut header = Vec::new();
        let mut row = Vec::new();
        formatter
            .write_header(&mut header)
            .expect("writing to a Vec cannot fail");
        formatter
            .write_record(&mut row, &record)
            .expect("writing to a Vec cannot fail");
        let header_text = String::from_utf8(header).expect("header is UTF-8");
        let row_text = String::from_utf8(row).expect("row is UTF-8");
        assert_eq!(header_text.chars().count(), row_text.chars().count());
        assert!(row_text.trim_end().ends_with("NO"));
    }

    #[rstest]
    fn anomalous_times_are_marked() {
        let formatter = TableFormatter::new(vec!["tarjan".to_owned(), "kosaraju".to_owned()]);
        let record = SweepRecord {
            vertex_count: 5,
            edge_count: 6,
            density: 0.3,
            reference_component_count: 2,
            outcomes: vec![
                AlgorithmOutcome {
                    elapsed_micros: 0,
                    correct: true,
                    anomaly: Some(MeasurementAnomaly::ZeroElapsed),
                },
                AlgorithmOutcome {
                    elapsed_micros: 9,
                    correct: true,
                    anomaly: None,
                },
            ],
        };
        let mut row = Vec::new();
        formatter
            .write_record(&mut row, &record)
            .expect("writing to a Vec cannot fail");
        let row_text = String::from_utf8(row).expect("row is UTF-8");
        let cells: Vec<&str> = row_text.split_whitespace().collect();
        assert_eq!(cells, ["5", "6", "0.3", "2", "0*", "yes", "9", "yes"]);
    }
}
