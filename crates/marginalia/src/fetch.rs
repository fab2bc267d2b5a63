//! Content-fetch collaborator for the insight cache
//!
//! The cache only knows the [`ContentFetcher`] trait; the HTTP client below
//! is the production implementation against the platform's content service.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw content record as served by the content service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentRecord {
  pub id: String,
  pub title: String,
  pub category: String,
  /// Raw content body; the service returns null for unprocessed titles
  pub raw_text: Option<String>,
}

/// Supplies raw content by id. Failures surface as errors for the cache to
/// absorb; implementations own their own timeout and retry policy.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
  async fn fetch(&self, id: &str) -> Result<ContentRecord>;
}

/// Configuration for the content service HTTP client
#[derive(Debug, Clone)]
pub struct FetcherConfig {
  /// Base URL of the content service (e.g., "http://localhost:3000")
  pub base_url: String,
  /// Request timeout in seconds
  pub timeout_secs: u64,
}

impl Default for FetcherConfig {
  fn default() -> Self {
    Self { base_url: "http://localhost:3000".to_string(), timeout_secs: 30 }
  }
}

/// HTTP client for the content service
pub struct HttpContentFetcher {
  client: Client,
  config: FetcherConfig,
}

impl Default for HttpContentFetcher {
  fn default() -> Self {
    Self::with_config(FetcherConfig::default())
  }
}

impl HttpContentFetcher {
  pub fn with_config(config: FetcherConfig) -> Self {
    let client = Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .build()
      .expect("Failed to create HTTP client");

    Self { client, config }
  }
}

#[async_trait]
impl ContentFetcher for HttpContentFetcher {
  async fn fetch(&self, id: &str) -> Result<ContentRecord> {
    let url = format!("{}/api/contents/{}", self.config.base_url, id);

    let response = self.client.get(&url).send().await?;
    if !response.status().is_success() {
      return Err(anyhow!("content service returned {} for {}", response.status(), id));
    }

    response.json::<ContentRecord>().await.map_err(Into::into)
  }
}
