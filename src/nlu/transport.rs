//! HTTP capability for the analyze call
//!
//! The recognizer never talks to reqwest directly: it goes through the
//! `AnalyzeTransport` trait, a single "send JSON, get JSON" capability.
//! Tests substitute a deterministic implementation; production code uses
//! `HttpTransport` below.

use crate::core::error::{NluError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

/// A single-shot JSON POST capability
///
/// Implementations own whatever connection state they need. The trait
/// deliberately says nothing about retries, timeouts, or pooling — a
/// transport may impose its own timeout, which surfaces to the recognizer
/// as one more `Transport` error.
#[async_trait]
pub trait AnalyzeTransport: Send + Sync {
    /// POST `body` to `url` with the subscription key and return the
    /// parsed JSON response body.
    async fn post_json(&self, url: &str, api_key: &str, body: Value) -> Result<Value>;
}

/// Production transport backed by reqwest
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnalyzeTransport for HttpTransport {
    async fn post_json(&self, url: &str, api_key: &str, body: Value) -> Result<Value> {
        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .header("Ocp-Apim-Subscription-Key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| NluError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(NluError::Transport(format!(
                "API error {}: {}",
                status, error_text
            )));
        }

        response
            .json()
            .await
            .map_err(|e| NluError::Transport(e.to_string()))
    }
}
