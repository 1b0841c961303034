//! Task records and validation for taskchart
//!
//! A [`TaskRecord`] is one raw CSV row; a [`Task`] is the validated,
//! date-typed form the renderer consumes. Validation fails fast and names
//! the offending task so bad dates never reach the layout math.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ChartError, ChartResult};

/// One raw row of project data, as it appears in a CSV source.
///
/// Field names match the CSV header: `task,start_date,end_date,status,color,assignee`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Display label for the task
    #[serde(default)]
    pub task: String,
    /// Start date in a parseable calendar-date form (e.g. 2024-02-01)
    pub start_date: String,
    /// End date in a parseable calendar-date form
    pub end_date: String,
    /// Informational status, not used by the renderer
    #[serde(default)]
    pub status: String,
    /// Optional bar color as a `#RRGGBB` hex string
    #[serde(default)]
    pub color: Option<String>,
    /// Optional assignee full name
    #[serde(default)]
    pub assignee: Option<String>,
}

/// A validated task with typed dates, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub status: String,
    pub color: Option<String>,
    pub assignee: Option<String>,
}

impl TaskRecord {
    /// Validate this record into a [`Task`].
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::InvalidDate`] naming the task, the field, and
    /// the raw value when either date does not parse.
    pub fn validate(&self) -> ChartResult<Task> {
        let start = parse_date(&self.task, "start_date", &self.start_date)?;
        let end = parse_date(&self.task, "end_date", &self.end_date)?;

        Ok(Task {
            name: self.task.clone(),
            start,
            end,
            status: self.status.clone(),
            color: self.color.clone(),
            assignee: self.assignee.clone(),
        })
    }
}

fn parse_date(task: &str, field: &'static str, value: &str) -> ChartResult<NaiveDate> {
    value
        .trim()
        .parse::<NaiveDate>()
        .map_err(|_| ChartError::InvalidDate {
            task: task.to_string(),
            field,
            value: value.to_string(),
        })
}

/// Validate a batch of records, failing on the first bad date.
pub fn validate_all(records: &[TaskRecord]) -> ChartResult<Vec<Task>> {
    records.iter().map(TaskRecord::validate).collect()
}

/// The template record set exported by `tch template`.
pub fn template_records() -> Vec<TaskRecord> {
    vec![
        TaskRecord {
            task: "Task 1".to_string(),
            start_date: "2024-02-01".to_string(),
            end_date: "2024-02-15".to_string(),
            status: "In Progress".to_string(),
            color: Some("#FF5733".to_string()),
            assignee: Some("Jessica Rabbit".to_string()),
        },
        TaskRecord {
            task: "Task 2".to_string(),
            start_date: "2024-02-10".to_string(),
            end_date: "2024-02-28".to_string(),
            status: "Not Started".to_string(),
            color: Some("#33FF57".to_string()),
            assignee: Some("Roger Rabbit".to_string()),
        },
    ]
}

/// Read task records from a CSV file.
///
/// The header row maps cells onto [`TaskRecord`] fields.
///
/// # Errors
///
/// Returns [`ChartError::ReadSource`] if the file cannot be opened and
/// [`ChartError::Csv`] if a row does not deserialize.
pub fn read_records(path: &Path) -> ChartResult<Vec<TaskRecord>> {
    tracing::debug!(path = %path.display(), "reading project file");

    let file = std::fs::File::open(path).map_err(|e| ChartError::ReadSource {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut reader = csv::Reader::from_reader(file);
    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: TaskRecord = row.map_err(|e| ChartError::Csv {
            path: path.to_path_buf(),
            source: e,
        })?;
        records.push(record);
    }

    tracing::debug!(count = records.len(), "parsed task records");
    Ok(records)
}

/// Serialize records to CSV text, header row included.
pub fn records_to_csv(records: &[TaskRecord]) -> String {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in records {
        // Serializing a plain struct with string fields cannot fail.
        let _ = writer.serialize(record);
    }
    let bytes = writer.into_inner().unwrap_or_default();
    String::from_utf8(bytes).unwrap_or_default()
}

/// Parse records back from CSV text. Used for round-trip checks and
/// non-file sources.
pub fn records_from_csv(text: &str) -> ChartResult<Vec<TaskRecord>> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: TaskRecord = row.map_err(|e| ChartError::Csv {
            path: std::path::PathBuf::from("<string>"),
            source: e,
        })?;
        records.push(record);
    }
    Ok(records)
}

/// Write records to a CSV file.
pub fn write_records(path: &Path, records: &[TaskRecord]) -> ChartResult<()> {
    std::fs::write(path, records_to_csv(records)).map_err(|e| ChartError::WriteOutput {
        path: path.to_path_buf(),
        source: e,
    })
}
