//! HTTP client for the Float scheduling API.
//!
//! Thin glue over the v3 REST endpoints the project tooling consumes:
//! people, project tasks, and allocations. Responses are passed through as
//! JSON; nothing here feeds the chart renderer.

use serde_json::Value;

use crate::error::{ChartError, ChartResult};

/// Environment variable holding the API key
pub const FLOAT_API_KEY_ENV: &str = "FLOAT_API_KEY";

/// Environment variable overriding the API base URL
pub const FLOAT_API_BASE_ENV: &str = "FLOAT_API_BASE_URL";

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.float.com/v3";

/// Client for the Float scheduling API
#[derive(Debug, Clone)]
pub struct FloatClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl FloatClient {
    /// Create a client against the given base URL.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> ChartResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(ChartError::HttpClient)?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    /// Create a client from the environment.
    ///
    /// The API key comes from `FLOAT_API_KEY` (required); the base URL from
    /// `FLOAT_API_BASE_URL` when set and non-empty, the public endpoint
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::MissingApiKey`] when the key variable is unset
    /// or empty.
    pub fn from_env() -> ChartResult<Self> {
        let api_key = std::env::var(FLOAT_API_KEY_ENV)
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or(ChartError::MissingApiKey)?;

        let base_url = std::env::var(FLOAT_API_BASE_ENV)
            .ok()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self::new(base_url, api_key)
    }

    /// Fetch the people directory.
    pub async fn people(&self) -> ChartResult<Value> {
        self.get("people").await
    }

    /// Fetch project tasks.
    pub async fn project_tasks(&self) -> ChartResult<Value> {
        self.get("project-tasks").await
    }

    /// Fetch allocations, sorted by start date.
    pub async fn allocations(&self) -> ChartResult<Value> {
        self.get("tasks?sort=start_date").await
    }

    async fn get(&self, path: &str) -> ChartResult<Value> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!(%url, "scheduling API request");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| ChartError::Api {
                url: url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChartError::ApiStatus { url, status, body });
        }

        response.json().await.map_err(|e| ChartError::Api {
            url: url.clone(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_client() {
        let client = FloatClient::new("http://localhost:9999", "test-key").unwrap();
        assert_eq!(client.base_url, "http://localhost:9999");
        assert_eq!(client.api_key, "test-key");
    }

    #[test]
    fn test_default_base_url() {
        assert_eq!(DEFAULT_BASE_URL, "https://api.float.com/v3");
    }

    #[test]
    fn test_env_var_names() {
        assert_eq!(FLOAT_API_KEY_ENV, "FLOAT_API_KEY");
        assert_eq!(FLOAT_API_BASE_ENV, "FLOAT_API_BASE_URL");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_surfaces_api_error() {
        // Port 1 is never listening; the request error should carry the URL.
        let client = FloatClient::new("http://127.0.0.1:1", "test-key").unwrap();
        let err = client.people().await.unwrap_err();
        let msg = err.full_message();
        assert!(
            msg.contains("http://127.0.0.1:1/people"),
            "message: {}",
            msg
        );
    }
}
