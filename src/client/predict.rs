//! HTTP client for the Prediction Service.
//!
//! The service is an external collaborator: one multipart upload endpoint
//! that classifies a grocery image and optionally attaches nutrition facts,
//! plus a root banner for connectivity checks. Requests are single attempts
//! with no retry and no client-side timeout; an attempt resolves when the
//! service answers or the connection fails.

use std::time::Instant;

use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::Config;
use crate::telemetry;
use crate::types::{Prediction, SelectedFile, ServiceStatus};
use crate::{IdunnError, Result};

/// Default base URL for the Prediction Service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Client for the Prediction Service.
#[derive(Clone)]
pub struct PredictClient {
    http: Client,
    base_url: String,
}

impl PredictClient {
    /// Create a client against the default service address.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client with a custom base URL (for testing with wiremock,
    /// or a non-default deployment).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a client from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::with_base_url(config.service.base_url.clone())
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Upload the selected file and return the service's prediction.
    ///
    /// Reads the file bytes, packs them into a multipart body with exactly
    /// one field `file` (carrying the file name and MIME type), and POSTs to
    /// `{base}/predict/`. A read failure surfaces as [`IdunnError::Upload`];
    /// transport failures as [`IdunnError::Http`]; non-success statuses as
    /// [`IdunnError::Api`]; an unparseable body as [`IdunnError::Json`].
    pub async fn predict(&self, file: &SelectedFile) -> Result<Prediction> {
        let bytes = tokio::fs::read(file.path())
            .await
            .map_err(|e| IdunnError::Upload(format!("{}: {e}", file.path().display())))?;

        let part = Part::bytes(bytes)
            .file_name(file.name().to_string())
            .mime_str(file.mime_type())
            .map_err(|e| IdunnError::Http(e.to_string()))?;
        let form = Form::new().part("file", part);

        let url = format!("{}/predict/", self.base_url);
        debug!(url = %url, file = file.name(), "uploading image for prediction");

        let start = Instant::now();
        let outcome = self.send_predict(&url, form).await;
        record_request("predict", start, outcome.is_ok());

        if let Err(e) = &outcome {
            warn!(file = file.name(), error = %e, "prediction request failed");
        }
        outcome
    }

    async fn send_predict(&self, url: &str, form: Form) -> Result<Prediction> {
        let response = self
            .http
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| IdunnError::Http(e.to_string()))?;

        decode_response(response).await
    }

    /// Fetch the service banner from `GET {base}/` as a connectivity check.
    pub async fn health(&self) -> Result<ServiceStatus> {
        let url = format!("{}/", self.base_url);
        debug!(url = %url, "checking service status");

        let start = Instant::now();
        let outcome = self.send_health(&url).await;
        record_request("health", start, outcome.is_ok());

        if let Err(e) = &outcome {
            warn!(error = %e, "status check failed");
        }
        outcome
    }

    async fn send_health(&self, url: &str) -> Result<ServiceStatus> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| IdunnError::Http(e.to_string()))?;

        decode_response(response).await
    }
}

impl Default for PredictClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Map non-success statuses to errors, then parse the body as JSON.
///
/// The error message carries the response body verbatim when there is one,
/// falling back to the status line.
async fn decode_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| IdunnError::Http(e.to_string()))?;

    if !status.is_success() {
        let message = if body.trim().is_empty() {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        } else {
            body.trim().to_string()
        };
        return Err(IdunnError::Api {
            status: status.as_u16(),
            message,
        });
    }

    Ok(serde_json::from_str(&body)?)
}

/// Record request outcome metrics (counter + histogram).
fn record_request(operation: &'static str, start: Instant, ok: bool) {
    let status = if ok { "ok" } else { "error" };
    let elapsed = start.elapsed().as_secs_f64();
    metrics::counter!(telemetry::REQUESTS_TOTAL,
        "operation" => operation,
        "status" => status,
    )
    .increment(1);
    metrics::histogram!(telemetry::REQUEST_DURATION_SECONDS,
        "operation" => operation,
    )
    .record(elapsed);
}
