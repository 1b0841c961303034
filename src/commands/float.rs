//! Float command for fetching scheduling data
//!
//! Implements the `tch float` command group: thin fetches against the Float
//! API, pretty-printed as JSON. Requires `FLOAT_API_KEY` in the environment.

use clap::{Args, ValueEnum};

use crate::error::{ChartError, ChartResult};
use crate::float::FloatClient;

/// Fetch data from the Float scheduling API
#[derive(Debug, Args)]
pub struct FloatCommand {
    /// Resource to fetch
    #[arg(value_enum)]
    pub resource: FloatResource,
}

/// Float API resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FloatResource {
    /// The people directory
    People,
    /// Project tasks
    ProjectTasks,
    /// Allocations, sorted by start date
    Allocations,
}

impl FloatCommand {
    /// Execute the float command.
    ///
    /// # Errors
    ///
    /// Returns `ChartError` if the API key is missing, the request fails,
    /// or the API answers with a non-success status.
    pub async fn execute(&self) -> ChartResult<String> {
        let client = FloatClient::from_env()?;

        let value = match self.resource {
            FloatResource::People => client.people().await?,
            FloatResource::ProjectTasks => client.project_tasks().await?,
            FloatResource::Allocations => client.allocations().await?,
        };

        serde_json::to_string_pretty(&value).map_err(ChartError::Json)
    }
}
