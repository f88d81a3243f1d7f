//! Rendering of sweep and memory records.
//!
//! Formatters are handed the candidate names up front and label the i-th
//! outcome of every record with the i-th name.

mod csv;
mod json;
mod table;

use std::io::{self, Write};

use crate::record::{MeasurementAnomaly, MemoryRecord, SweepRecord};

pub use csv::CsvFormatter;
pub use json::JsonFormatter;
pub use table::TableFormatter;

/// Writes sweep records to a byte sink.
pub trait ReportFormatter {
    /// Writes whatever precedes the first record. May write nothing.
    ///
    /// # Errors
    /// Propagates failures from `out`.
    fn write_header(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Writes one record.
    ///
    /// # Errors
    /// Propagates failures from `out`.
    fn write_record(&self, out: &mut dyn Write, record: &SweepRecord) -> io::Result<()>;
}

/// Writes the header followed by every record.
///
/// # Errors
/// Propagates the first failure from `out`.
///
/// # Examples
/// ```
/// use sccbench_core::{AlgorithmOutcome, CsvFormatter, SweepRecord, render};
///
/// let record = SweepRecord {
///     vertex_count: 2,
///     edge_count: 2,
///     density: 1.0,
///     reference_component_count: 1,
///     outcomes: vec![AlgorithmOutcome { elapsed_micros: 4, correct: true, anomaly: None }],
/// };
/// let mut out = Vec::new();
/// render(&CsvFormatter::new(vec!["tarjan".into()]), [&record], &mut out)?;
/// assert_eq!(
///     String::from_utf8(out)?,
///     "vertex_count,edge_count,density,reference_components,tarjan_micros,tarjan_correct,tarjan_anomaly\n\
///      2,2,1,1,4,true,\n",
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render<'r>(
    formatter: &dyn ReportFormatter,
    records: impl IntoIterator<Item = &'r SweepRecord>,
    out: &mut dyn Write,
) -> io::Result<()> {
    formatter.write_header(out)?;
    for record in records {
        formatter.write_record(out, record)?;
    }
    out.flush()
}

/// Output encodings understood by [`ReportFormat::sweep_formatter`] and
/// [`render_memory_record`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ReportFormat {
    /// Aligned, human-readable columns.
    #[default]
    Table,
    /// Comma-separated values with a header row.
    Csv,
    /// One JSON object per line.
    Json,
}

impl ReportFormat {
    /// Stable lowercase identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    /// Builds the sweep formatter for this encoding.
    #[must_use]
    pub fn sweep_formatter(self, algorithms: Vec<String>) -> Box<dyn ReportFormatter> {
        match self {
            Self::Table => Box::new(TableFormatter::new(algorithms)),
            Self::Csv => Box::new(CsvFormatter::new(algorithms)),
            Self::Json => Box::new(JsonFormatter::new(algorithms)),
        }
    }
}

/// Writes a memory record in `format`.
///
/// # Errors
/// Propagates failures from `out`, and JSON encoding failures as
/// [`io::Error`].
pub fn render_memory_record(
    format: ReportFormat,
    record: &MemoryRecord,
    out: &mut dyn Write,
) -> io::Result<()> {
    match format {
        ReportFormat::Table => table::write_memory_record(out, record)?,
        ReportFormat::Csv => csv::write_memory_record(out, record)?,
        ReportFormat::Json => json::write_memory_record(out, record)?,
    }
    out.flush()
}

fn anomaly_label(anomaly: Option<MeasurementAnomaly>) -> &'static str {
    anomaly.map_or("", MeasurementAnomaly::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{AlgorithmOutcome, MeasurementAnomaly};
    use rstest::{fixture, rstest};

    #[fixture]
    fn record() -> SweepRecord {
        SweepRecord {
            vertex_count: 3,
            edge_count: 4,
            density: 0.5,
            reference_component_count: 2,
            outcomes: vec![
                AlgorithmOutcome {
                    elapsed_micros: 12,
                    correct: true,
                    anomaly: None,
                },
                AlgorithmOutcome {
                    elapsed_micros: 0,
                    correct: false,
                    anomaly: Some(MeasurementAnomaly::ZeroElapsed),
                },
            ],
        }
    }

    fn memory_record() -> MemoryRecord {
        MemoryRecord {
            vertex_count: 2,
            edge_count: 1,
            component_count: 2,
            baseline_bytes: 4096,
            peak_bytes: 1024,
            peak_minus_baseline_bytes: 0,
            algorithm: "tarjan".to_owned(),
            anomaly: Some(MeasurementAnomaly::PeakBelowBaseline),
        }
    }

    fn names() -> Vec<String> {
        vec!["tarjan".to_owned(), "kosaraju".to_owned()]
    }

    fn rendered(format: ReportFormat, records: &[SweepRecord]) -> String {
        let mut out = Vec::new();
        render(format.sweep_formatter(names()).as_ref(), records, &mut out)
            .expect("writing to a Vec cannot fail");
        String::from_utf8(out).expect("formatters emit UTF-8")
    }

    #[rstest]
    #[case::table(ReportFormat::Table, 2)]
    #[case::csv(ReportFormat::Csv, 2)]
    #[case::json(ReportFormat::Json, 1)]
    fn render_emits_one_line_per_record_after_the_header(
        record: SweepRecord,
        #[case] format: ReportFormat,
        #[case] lines_per_single_record: usize,
    ) {
        let once = rendered(format, std::slice::from_ref(&record));
        let twice = rendered(format, &[record.clone(), record]);
        assert_eq!(once.lines().count(), lines_per_single_record);
        assert_eq!(twice.lines().count(), lines_per_single_record + 1);
    }

    #[rstest]
    fn render_with_no_records_writes_only_the_header() {
        assert_eq!(rendered(ReportFormat::Csv, &[]).lines().count(), 1);
        assert!(rendered(ReportFormat::Json, &[]).is_empty());
    }

    #[rstest]
    #[case::table(ReportFormat::Table, " 0* ")]
    #[case::csv(ReportFormat::Csv, "3,4,0.5,2,12,true,,0,false,zero_elapsed")]
    #[case::json(ReportFormat::Json, "\"anomaly\":\"zero_elapsed\"")]
    fn sweep_records_surface_anomalies(
        record: SweepRecord,
        #[case] format: ReportFormat,
        #[case] needle: &str,
    ) {
        let text = rendered(format, &[record]);
        assert!(text.contains(needle), "{needle:?} missing from {text:?}");
    }

    #[rstest]
    #[case::table(ReportFormat::Table, "peak_below_baseline")]
    #[case::csv(ReportFormat::Csv, "tarjan,2,1,2,4096,1024,0,peak_below_baseline")]
    #[case::json(ReportFormat::Json, "\"anomaly\":\"peak_below_baseline\"")]
    fn memory_records_surface_anomalies(#[case] format: ReportFormat, #[case] needle: &str) {
        let mut out = Vec::new();
        render_memory_record(format, &memory_record(), &mut out)
            .expect("writing to a Vec cannot fail");
        let text = String::from_utf8(out).expect("formatters emit UTF-8");
        assert!(text.contains(needle), "{needle:?} missing from {text:?}");
    }

    #[rstest]
    #[case::table(ReportFormat::Table, "table")]
    #[case::csv(ReportFormat::Csv, "csv")]
    #[case::json(ReportFormat::Json, "json")]
    fn format_identifiers_are_stable(#[case] format: ReportFormat, #[case] expected: &str) {
        assert_eq!(format.as_str(), expected);
    }
}
