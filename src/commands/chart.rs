//! Chart command for rendering a Gantt chart from a CSV file
//!
//! Implements the `tch chart` command: read a CSV project file, validate
//! every record's dates, and render the chart to stdout.

use clap::Args;
use std::path::PathBuf;

use crate::chart::{DEFAULT_CHART_WIDTH, render_chart};
use crate::error::ChartResult;
use crate::model::{read_records, validate_all};

/// Render a Gantt chart from a CSV project file
#[derive(Debug, Args)]
pub struct ChartCommand {
    /// Path to the CSV project file
    pub file: PathBuf,

    /// Number of chart columns
    #[arg(long, default_value_t = DEFAULT_CHART_WIDTH)]
    pub width: usize,
}

impl ChartCommand {
    /// Execute the chart command.
    ///
    /// # Errors
    ///
    /// Returns `ChartError` if the file cannot be read, a row does not
    /// deserialize, or a record carries an unparseable date.
    pub async fn execute(&self) -> ChartResult<String> {
        let records = read_records(&self.file)?;
        let tasks = validate_all(&records)?;
        Ok(render_chart(&tasks, self.width).join("\n"))
    }
}
