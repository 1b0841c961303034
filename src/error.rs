use std::path::PathBuf;
use thiserror::Error;

/// Error types for taskchart
#[derive(Error, Debug)]
pub enum ChartError {
    /// Error reading a project data file
    #[error("Failed to read project file at {path}: {source}")]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error parsing CSV content into task records
    #[error("Failed to parse CSV data from {path}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Error when a task record carries a date that does not parse
    #[error("Task '{task}' has an invalid {field}: '{value}' (expected a calendar date like 2024-02-01)")]
    InvalidDate {
        task: String,
        field: &'static str,
        value: String,
    },

    /// Error writing an output file
    #[error("Failed to write {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error constructing the HTTP client
    #[error("Failed to construct HTTP client")]
    HttpClient(#[source] reqwest::Error),

    /// Error when the scheduling API key is not configured
    #[error("FLOAT_API_KEY is not set; export it to call the scheduling API")]
    MissingApiKey,

    /// Error sending a request to the scheduling API or decoding its response
    #[error("Scheduling API request to {url} failed")]
    Api {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Error when the scheduling API answers with a non-success status
    #[error("Scheduling API returned {status} for {url}: {body}")]
    ApiStatus {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    /// Error encoding an API response for display
    #[error("Failed to encode API response as JSON")]
    Json(#[source] serde_json::Error),

    /// Error on the interactive console streams
    #[error("Console I/O failed: {0}")]
    Console(#[from] std::io::Error),
}

impl ChartError {
    /// Get the full error message including nested source details.
    ///
    /// Useful for displaying detailed error information to users, since
    /// `Display` alone omits `#[source]` chains for some variants.
    pub fn full_message(&self) -> String {
        match self {
            ChartError::Csv { source, .. } => {
                format!("{}: {}", self, source)
            }
            ChartError::Api { source, .. } => {
                format!("{}: {}", self, source)
            }
            ChartError::HttpClient(source) => {
                format!("{}: {}", self, source)
            }
            other => other.to_string(),
        }
    }
}

/// Result type alias for taskchart operations
pub type ChartResult<T> = Result<T, ChartError>;
