//! CSV export of a grouped forecast
//!
//! Pivots day buckets into one row per day with a column for every
//! `(time of day, metric)` pair seen anywhere in the forecast.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use domain::{DayBucket, HourMinute, Metric, Reading, ReferenceZone};
use tracing::{debug, instrument};

use crate::error::ApplicationError;

const FIXED_HEADERS: [&str; 2] = ["Date", "Location"];
const FILENAME_SUFFIX: &str = "_forecast_export.csv";

/// A dynamic column: one metric at one local time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnKey {
    pub hour_minute: HourMinute,
    pub metric: Metric,
}

impl ColumnKey {
    pub const fn new(hour_minute: HourMinute, metric: Metric) -> Self {
        Self {
            hour_minute,
            metric,
        }
    }

    /// Header label, e.g. `0900 - feels_like`
    pub fn label(&self) -> String {
        format!("{} - {}", self.hour_minute, self.metric.column_name())
    }
}

/// One day of the export before serialisation
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRow {
    pub date: NaiveDate,
    pub location: String,
    pub cells: HashMap<ColumnKey, Reading>,
}

impl ExportRow {
    /// Reading for a column, if the day has one there
    pub fn value(&self, column: &ColumnKey) -> Option<Reading> {
        self.cells.get(column).copied()
    }
}

/// Rendered CSV document and its download name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: String,
    pub content: String,
}

/// Builds CSV exports from day buckets
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExporter {
    zone: ReferenceZone,
}

impl CsvExporter {
    /// Create an exporter labelling times in the given zone
    ///
    /// Use the same zone the buckets were grouped with.
    pub const fn new(zone: ReferenceZone) -> Self {
        Self { zone }
    }

    /// Suggested download name for a location
    ///
    /// Lower-cases the name and replaces each run of whitespace with `_`.
    /// Path separators also become `_` so the result is a single file name.
    pub fn filename_for(name: &str) -> String {
        let mut filename = String::with_capacity(name.len() + FILENAME_SUFFIX.len());
        let mut in_whitespace = false;

        for c in name.to_lowercase().chars() {
            if c.is_whitespace() {
                if !in_whitespace {
                    filename.push('_');
                }
                in_whitespace = true;
            } else if matches!(c, '/' | '\\') {
                filename.push('_');
                in_whitespace = false;
            } else {
                filename.push(c);
                in_whitespace = false;
            }
        }

        filename.push_str(FILENAME_SUFFIX);
        filename
    }

    /// Discover dynamic columns in first-seen order
    ///
    /// Every forecast contributes all metrics at its local time of day, so a
    /// column exists even when the reading is missing.
    pub fn columns(&self, days: &[DayBucket]) -> Vec<ColumnKey> {
        let mut seen = HashSet::new();
        let mut columns = Vec::new();

        for forecast in days.iter().flat_map(|day| &day.forecasts) {
            let hour_minute = self.zone.hour_minute(&forecast.timestamp);
            for metric in Metric::ALL {
                let column = ColumnKey::new(hour_minute, metric);
                if seen.insert(column) {
                    columns.push(column);
                }
            }
        }

        columns
    }

    /// One row per day, cells keyed by column
    pub fn rows(&self, name: &str, days: &[DayBucket]) -> Vec<ExportRow> {
        days.iter()
            .map(|day| {
                let mut cells = HashMap::new();
                for forecast in &day.forecasts {
                    let hour_minute = self.zone.hour_minute(&forecast.timestamp);
                    for metric in Metric::ALL {
                        if let Some(value) = forecast.reading(metric) {
                            cells.insert(ColumnKey::new(hour_minute, metric), value);
                        }
                    }
                }

                ExportRow {
                    date: day.date,
                    location: name.to_string(),
                    cells,
                }
            })
            .collect()
    }

    /// Render the export
    ///
    /// Lines end in `\n` with no newline after the last row. Cells are only
    /// quoted when they contain a delimiter, quote or line break.
    #[instrument(skip(self, days), fields(days = days.len()))]
    pub fn export(&self, name: &str, days: &[DayBucket]) -> Result<CsvExport, ApplicationError> {
        let columns = self.columns(days);
        let rows = self.rows(name, days);

        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        let header = FIXED_HEADERS
            .iter()
            .map(|h| (*h).to_string())
            .chain(columns.iter().map(ColumnKey::label));
        writer.write_record(header).map_err(csv_error)?;

        for row in &rows {
            let record = [row.date.format("%Y-%m-%d").to_string(), row.location.clone()]
                .into_iter()
                .chain(
                    columns
                        .iter()
                        .map(|column| row.value(column).map(|r| r.to_string()).unwrap_or_default()),
                );
            writer.write_record(record).map_err(csv_error)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ApplicationError::Internal(format!("CSV flush failed: {e}")))?;
        let mut content = String::from_utf8(bytes)
            .map_err(|e| ApplicationError::Internal(format!("CSV is not UTF-8: {e}")))?;
        if content.ends_with('\n') {
            content.pop();
        }

        debug!(columns = columns.len(), rows = rows.len(), "Rendered CSV export");

        Ok(CsvExport {
            filename: Self::filename_for(name),
            content,
        })
    }
}

fn csv_error(err: csv::Error) -> ApplicationError {
    ApplicationError::Internal(format!("CSV write failed: {err}"))
}
