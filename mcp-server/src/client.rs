//! HTTP client for the Nova API
//!
//! Every call asks for the plain-text rendering, which is what the tools
//! hand back to the model.

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::Serialize;

/// HTTP client for communicating with the Nova API
#[derive(Clone)]
pub struct NovaClient {
    client: reqwest::Client,
    base_url: String,
}

impl NovaClient {
    /// Create a new client from environment variables
    ///
    /// Optional env vars:
    /// - NOVA_API_URL: Base URL of the API (default http://localhost:8080)
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("NOVA_API_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());

        Self::new(&base_url)
    }

    /// Create a new client with explicit configuration
    pub fn new(base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
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

    /// Run the domain gate on a transcript
    pub async fn detect_context(&self, text: &str) -> Result<String> {
        self.post_text("/analyze/context", &TranscriptRequest::new(text))
            .await
    }

    /// Classify the ceremony of a transcript
    pub async fn detect_workshop(&self, text: &str) -> Result<String> {
        self.post_text("/analyze/workshop", &TranscriptRequest::new(text))
            .await
    }

    /// Full analysis with anti-patterns
    pub async fn analyze(&self, text: &str) -> Result<String> {
        self.post_text("/analyze", &TranscriptRequest::new(text))
            .await
    }

    /// Anti-patterns of one ceremony, by label or id
    pub async fn anti_patterns(&self, ceremony: &str) -> Result<String> {
        self.get_text(&anti_patterns_path(ceremony)).await
    }

    /// Known ceremonies
    pub async fn ceremonies(&self) -> Result<String> {
        self.get_text("/ceremonies").await
    }

    // --- Internal helpers ---

    async fn get_text(&self, path: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .header("Accept", "text/plain")
            .send()
            .await
            .with_context(|| format!("Failed to GET {}", path))?;

        handle_text_response(response).await
    }

    async fn post_text<T: Serialize>(&self, path: &str, body: &T) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .header("Accept", "text/plain")
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to POST {}", path))?;

        handle_text_response(response).await
    }
}

/// Ceremony labels contain spaces and '&'
fn anti_patterns_path(ceremony: &str) -> String {
    format!("/anti-patterns/{}", urlencoding::encode(ceremony.trim()))
}

async fn handle_text_response(response: reqwest::Response) -> Result<String> {
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

// --- Request Types ---

#[derive(Debug, Serialize)]
struct TranscriptRequest {
    text: String,
}

impl TranscriptRequest {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}
