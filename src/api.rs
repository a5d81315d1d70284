//! HTTP client for the external analysis service.
//!
//! One attempt per call, bounded by [`ApiConfig::timeout`]. Nothing is retried.

use std::future::Future;
use std::time::Duration;

use futures::future::{self, Either};
use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::analysis::{AnalysisResult, HealthStatus};
use crate::config::ApiConfig;
use crate::error::ClientError;
use crate::upload::UploadCandidate;

#[derive(Serialize)]
struct AnalyzeTextArgs<'a> {
    text: &'a str,
}

#[derive(Debug, Clone)]
pub struct AnalysisClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl AnalysisClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `POST /api/analyze` with the document as multipart field `file`.
    pub async fn analyze_document(
        &self,
        candidate: &UploadCandidate,
    ) -> Result<AnalysisResult, ClientError> {
        let mime = candidate
            .document_type()
            .map(|t| t.mime())
            .unwrap_or(candidate.media_type.as_str());
        let part = Part::bytes(candidate.bytes.to_vec())
            .file_name(candidate.name.clone())
            .mime_str(mime)
            .map_err(|e| {
                ClientError::Transport(format!("Invalid media type '{}': {}", mime, e))
            })?;
        let form = Form::new().part("file", part);

        log::info!(
            "Uploading {} ({} bytes) for analysis",
            candidate.name,
            candidate.size()
        );
        let request = self
            .http
            .post(self.config.endpoint("/api/analyze"))
            .multipart(form);
        self.fetch_result(request).await
    }

    /// `POST /api/analyze-text` with `{ "text": ... }`.
    pub async fn analyze_text(&self, text: &str) -> Result<AnalysisResult, ClientError> {
        log::info!("Submitting {} characters of text for analysis", text.chars().count());
        let request = self
            .http
            .post(self.config.endpoint("/api/analyze-text"))
            .json(&AnalyzeTextArgs { text });
        self.fetch_result(request).await
    }

    /// `GET /health`. Callers treat failure as advisory.
    pub async fn check_health(&self) -> Result<HealthStatus, ClientError> {
        let request = self.http.get(self.config.endpoint("/health"));
        self.fetch_json(request).await
    }

    async fn fetch_result(&self, request: RequestBuilder) -> Result<AnalysisResult, ClientError> {
        let result: AnalysisResult = self.fetch_json(request).await?;
        result.validate().map_err(ClientError::InvalidResponse)?;
        Ok(result)
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        let exchange = async move {
            let response = request
                .send()
                .await
                .map_err(|e| ClientError::Transport(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let detail = error_detail(&body, status);
                log::warn!("Analysis service returned {}: {}", status, detail);
                return Err(ClientError::Service {
                    status: status.as_u16(),
                    detail,
                });
            }

            response
                .json::<T>()
                .await
                .map_err(|e| ClientError::InvalidResponse(e.to_string()))
        };

        with_timeout(self.config.timeout, exchange).await
    }
}

/// Pull the message out of a `{"detail": "..."}` error body, falling back to
/// the raw body and then the status reason.
fn error_detail(body: &str, status: StatusCode) -> String {
    let from_json = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| match v.get("detail") {
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
            None => None,
        });

    from_json
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        })
}

async fn with_timeout<T, F>(limit: Duration, exchange: F) -> Result<T, ClientError>
where
    F: Future<Output = Result<T, ClientError>>,
{
    let exchange = std::pin::pin!(exchange);
    let timer = std::pin::pin!(sleep(limit));

    match future::select(exchange, timer).await {
        Either::Left((outcome, _)) => outcome,
        Either::Right(((), _)) => {
            log::warn!("Request abandoned after {:?}", limit);
            Err(ClientError::Timeout(limit))
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    let millis = duration.as_millis().min(i32::MAX as u128) as i32;
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}
