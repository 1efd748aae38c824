use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::models::{
    dataset::{DatasetResponse, DatasetSummary, FilteredDataset, YearFilter},
    error::AppError,
};

/// Which dataset endpoint a request targets, used for error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Endpoint {
    Dataset,
    Filtered,
    Summary,
}

impl Endpoint {
    fn description(self) -> &'static str {
        match self {
            Endpoint::Dataset => "dataset",
            Endpoint::Filtered => "filtered dataset",
            Endpoint::Summary => "dataset summary",
        }
    }
}

// API CONFIGURATION
/// Configuration for the dataset API client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base}/datasets/{id}`
    pub fn dataset_url(&self, dataset_id: &str) -> String {
        format!("{}/datasets/{dataset_id}", self.base_url)
    }

    /// `GET {base}/datasets/{id}/filter?startYear=..&endYear=..[&energyTypes=..]`
    pub fn filter_url(&self, dataset_id: &str, filter: &YearFilter) -> String {
        format!(
            "{}/filter?{}",
            self.dataset_url(dataset_id),
            filter.query_string()
        )
    }

    /// `GET {base}/datasets/{id}/summary`
    pub fn summary_url(&self, dataset_id: &str) -> String {
        format!("{}/summary", self.dataset_url(dataset_id))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn build(self) -> ApiConfig {
        let base_url = self
            .base_url
            .unwrap_or_else(|| Config::API_BASE_URL.to_string());
        ApiConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

// DATASET CLIENT
/// HTTP client for the generation dataset API.
#[derive(Debug, Clone)]
pub struct DatasetClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl DatasetClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetches a full dataset, unfiltered.
    ///
    /// The dashboard only draws filtered ranges through `QueryClient`; this
    /// and [`Self::fetch_summary`] cover the rest of the dataset API for other callers.
    pub async fn fetch_dataset(&self, dataset_id: &str) -> Result<DatasetResponse, AppError> {
        let url = self.config.dataset_url(dataset_id);
        self.fetch(&url, Endpoint::Dataset).await
    }

    /// Fetches the series of a dataset restricted to a year range.
    pub async fn fetch_filtered(
        &self,
        dataset_id: &str,
        filter: &YearFilter,
    ) -> Result<FilteredDataset, AppError> {
        let url = self.config.filter_url(dataset_id, filter);
        self.fetch(&url, Endpoint::Filtered).await
    }

    /// Fetches the server-side summary of a dataset.
    pub async fn fetch_summary(&self, dataset_id: &str) -> Result<DatasetSummary, AppError> {
        let url = self.config.summary_url(dataset_id);
        self.fetch(&url, Endpoint::Summary).await
    }

    /// Executes a single GET and decodes the JSON body. No retries.
    async fn fetch<T: DeserializeOwned>(&self, url: &str, endpoint: Endpoint) -> Result<T, AppError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(classify_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(error_for_status(status, endpoint));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Data(format!("Failed to parse response: {e}")))
    }
}

/// Converts a reqwest transport error into an `AppError`.
fn classify_error(error: reqwest::Error) -> AppError {
    if error.is_timeout() {
        AppError::Network(format!("Request timeout: {error}"))
    } else if error.is_request() {
        AppError::Network(format!("Request error: {error}"))
    } else {
        AppError::Network(format!("Transport error: {error}"))
    }
}

/// Any non-success status fails with the status text.
fn error_for_status(status: reqwest::StatusCode, endpoint: Endpoint) -> AppError {
    let status_text = status.canonical_reason().unwrap_or(status.as_str());
    AppError::Network(format!(
        "Failed to fetch {}: {status_text}",
        endpoint.description()
    ))
}
