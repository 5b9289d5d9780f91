//! Summarization model client
//!
//! Encapsulates the external summarization capability behind the [`Summarize`]
//! trait and provides an HTTP client for hosted inference endpoints.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tokio_retry::strategy::jitter;
use tokio_retry::{RetryIf, strategy::ExponentialBackoff};
use tracing::{info, warn};

use crate::core::config::AppConfig;
use crate::errors::SummarizeError;

// No timeout or retry existed upstream of this design; both are deliberate.
const REQUEST_TIMEOUT_SECS: u64 = 120; // Per-call ceiling for one inference request
const RETRY_BASE_DELAY_MS: u64 = 500; // First backoff step; doubles per attempt
const MAX_RETRIES: usize = 3; // Transient failures only; 4xx fails immediately

/// External summarization capability.
///
/// Maps input text and desired length bounds to a generated summary. The
/// pipeline receives an implementation as an explicitly constructed dependency
/// so tests can substitute a deterministic model.
#[async_trait]
pub trait Summarize: Send + Sync {
    async fn summarize(
        &self,
        text: &str,
        min_length: usize,
        max_length: usize,
    ) -> Result<String, SummarizeError>;
}

/// Client for a hosted summarization model served over HTTP.
///
/// Speaks the Hugging Face Inference API shape: a JSON body with `inputs` and
/// generation `parameters`, answered by `[{"summary_text": ...}]`. Decoding is
/// deterministic (`do_sample: false`), so identical input and bounds yield an
/// identical summary.
pub struct InferenceClient {
    http: Client,
    api_base: String,
    api_token: String,
    model: String,
}

impl InferenceClient {
    pub fn new(config: &AppConfig) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            http,
            api_base: config.inference_api_base.clone(),
            api_token: config.inference_api_token.clone(),
            model: config.summarizer_model.clone(),
        }
    }

    async fn request_summary(
        &self,
        text: &str,
        min_length: usize,
        max_length: usize,
    ) -> Result<String, SummarizeError> {
        let request_body = json!({
            "inputs": text,
            "parameters": {
                "min_length": min_length,
                "max_length": max_length,
                "do_sample": false
            },
            "options": {
                "wait_for_model": true
            }
        });

        let url = format!("{}/models/{}", self.api_base, self.model);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_token)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| SummarizeError::HttpError(format!("inference request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            // 429 and 5xx cover rate limits and cold model loads; both clear
            // up on their own, so they are surfaced as retryable.
            if status.as_u16() == 429 || status.is_server_error() {
                return Err(SummarizeError::ModelUnavailable(format!(
                    "{status}: {error_text}"
                )));
            }
            return Err(SummarizeError::ModelError(format!(
                "{status}: {error_text}"
            )));
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| SummarizeError::ModelError(format!("failed to parse response: {e}")))?;

        response_json
            .get(0)
            .and_then(|item| item.get("summary_text"))
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| SummarizeError::ModelError("no summary text in response".to_string()))
    }
}

#[async_trait]
impl Summarize for InferenceClient {
    async fn summarize(
        &self,
        text: &str,
        min_length: usize,
        max_length: usize,
    ) -> Result<String, SummarizeError> {
        info!(
            "Requesting summary from {} ({} chars in, {}-{} tokens out)",
            self.model,
            text.chars().count(),
            min_length,
            max_length
        );

        // Exponential backoff with jitter to avoid hammering a model that is
        // still loading or rate limiting.
        let strategy = ExponentialBackoff::from_millis(RETRY_BASE_DELAY_MS)
            .map(jitter)
            .take(MAX_RETRIES);

        let result = RetryIf::spawn(
            strategy,
            || self.request_summary(text, min_length, max_length),
            |e: &SummarizeError| {
                let transient = e.is_transient();
                if transient {
                    warn!("Transient inference failure, retrying: {e}");
                }
                transient
            },
        )
        .await;

        if let Err(e) = &result {
            warn!("Inference failed for chunk of {} chars: {e}", text.chars().count());
        }
        result
    }
}
