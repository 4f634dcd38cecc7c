//! HTTP client for the Hacktoberfest stats API

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::de::DeserializeOwned;

use crate::models::{Contributor, Health, Project, StatsSnapshot};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the read-only stats endpoints
#[derive(Clone)]
pub struct StatsClient {
    client: reqwest::Client,
    base_url: String,
}

impl StatsClient {
    /// Create a client for the API at `base_url` (e.g. `http://localhost:3001`)
    pub fn new(base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn health(&self) -> Result<Health> {
        self.get_json("/health").await
    }

    pub async fn get_stats(&self) -> Result<StatsSnapshot> {
        self.get_json("/api/stats").await
    }

    /// Contributors, already ranked by the server
    pub async fn get_contributors(&self) -> Result<Vec<Contributor>> {
        self.get_json("/api/contributors").await
    }

    pub async fn get_projects(&self) -> Result<Vec<Project>> {
        self.get_json("/api/projects").await
    }

    // --- Internal helpers ---

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to GET {}", path))?;

        let body = handle_response(response).await?;
        serde_json::from_str(&body).with_context(|| format!("Invalid JSON from {}", path))
    }
}

async fn handle_response(response: reqwest::Response) -> Result<String> {
    let status = response.status();
    let body = response
        .text()
        .await
        .context("Failed to read response body")?;

    if !status.is_success() {
        anyhow::bail!("API error ({}): {}", status, body);
    }

    Ok(body)
}
