// SPDX-FileCopyrightText: 2026 Callboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for the voice-assistant backend.
//!
//! Provides [`ApiClient`], the single place where outbound requests get their
//! base path, timeout, default content type and bearer token, and where every
//! failure is normalized into a [`CallboardError`].

use std::sync::Arc;
use std::time::Duration;

use callboard_config::CallboardConfig;
use callboard_core::{CallboardError, CredentialProvider};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::request::{ApiRequest, RequestBody};

/// Base path of every backend route.
pub const API_BASE_PATH: &str = "/api/v1";

/// Fixed timeout applied to every request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the backend API.
///
/// Cheap to clone and safe to share across concurrent requests. It performs
/// no retries and does not coalesce identical in-flight requests.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
    credentials: Arc<dyn CredentialProvider>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Creates a client for the backend at `origin` (scheme, host, port).
    ///
    /// The `/api/v1` base path is appended here; callers pass the bare origin.
    pub fn new(
        origin: &str,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Result<Self, CallboardError> {
        Self::with_timeout(origin, credentials, REQUEST_TIMEOUT)
    }

    /// Creates a client from the `[api]` configuration section.
    pub fn from_config(
        config: &CallboardConfig,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Result<Self, CallboardError> {
        Self::new(&config.api.base_url, credentials)
    }

    pub(crate) fn with_timeout(
        origin: &str,
        credentials: Arc<dyn CredentialProvider>,
        timeout: Duration,
    ) -> Result<Self, CallboardError> {
        let origin = origin.trim().trim_end_matches('/');
        if origin.is_empty() {
            return Err(CallboardError::Config("backend origin must not be empty".into()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| CallboardError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: format!("{origin}{API_BASE_PATH}"),
            timeout,
            credentials,
        })
    }

    /// Full URL prefix, including the API base path.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues `request` and decodes a 2xx JSON body into `T`.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<T, CallboardError> {
        let ApiRequest {
            method,
            path,
            query,
            body,
        } = request;
        let url = format!("{}{}", self.base_url, path);

        let mut builder = self.http.request(method.clone(), &url);
        if !query.is_empty() {
            builder = builder.query(&query);
        }
        if let Some(token) = self.credentials.bearer_token() {
            builder = builder.bearer_auth(token.expose_secret());
        }
        builder = match body {
            RequestBody::Empty => builder,
            RequestBody::Json(json) => builder.json(&json),
            RequestBody::Multipart(upload) => builder.multipart(multipart_form(upload)?),
        };

        let response = builder.send().await.map_err(|e| self.transport_error(e))?;
        let status = response.status();
        debug!(%method, %path, %status, "response received");

        let text = response.text().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            let error = normalize_failure(status, &text);
            warn!(%method, %path, %status, error = %error, "request failed");
            return Err(error);
        }

        serde_json::from_str(&text).map_err(|e| CallboardError::Decode {
            message: format!("{method} {path}: {e}"),
            source: Some(Box::new(e)),
        })
    }

    fn transport_error(&self, error: reqwest::Error) -> CallboardError {
        if error.is_timeout() {
            warn!(timeout = ?self.timeout, "request timed out");
            return CallboardError::Timeout {
                duration: self.timeout,
            };
        }
        warn!(error = %error, "request did not reach the backend");
        CallboardError::Transport {
            message: error.to_string(),
            source: Some(Box::new(error)),
        }
    }
}

/// Builds the `multipart/form-data` body for a voice clone upload.
fn multipart_form(upload: callboard_core::VoiceUpload) -> Result<Form, CallboardError> {
    let mut form = Form::new().text("name", upload.name);
    if let Some(description) = upload.description {
        form = form.text("description", description);
    }
    for sample in upload.files {
        let mut part = Part::bytes(sample.bytes).file_name(sample.file_name);
        if let Some(content_type) = sample.content_type {
            part = part.mime_str(&content_type).map_err(|e| {
                CallboardError::Validation(format!(
                    "invalid audio content type `{content_type}`: {e}"
                ))
            })?;
        }
        form = form.part("files", part);
    }
    Ok(form)
}

/// Maps a non-2xx response onto the failure taxonomy.
///
/// The message is the backend's `detail` when the body carries one, else the
/// raw body, else the canonical reason phrase.
pub fn normalize_failure(status: StatusCode, body: &str) -> CallboardError {
    let message = backend_message(body).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("unexpected response")
            .to_string()
    });

    match status.as_u16() {
        404 => CallboardError::NotFound { message },
        code @ 400..=499 => CallboardError::Client {
            status: code,
            message,
        },
        code => CallboardError::Server {
            status: code,
            message,
        },
    }
}

/// Extracts a human-readable message from an error body.
fn backend_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    let Ok(json) = serde_json::from_str::<serde_json::Value>(body) else {
        return Some(body.to_string());
    };

    match json.get("detail").or_else(|| json.get("message")) {
        Some(serde_json::Value::String(detail)) => Some(detail.clone()),
        // Request validation errors: [{"loc": [...], "msg": "...", ...}, ...]
        Some(serde_json::Value::Array(items)) => {
            let parts: Vec<String> = items
                .iter()
                .filter_map(|item| {
                    let msg = item.get("msg")?.as_str()?;
                    let loc = item
                        .get("loc")
                        .and_then(|l| l.as_array())
                        .map(|l| {
                            l.iter()
                                .filter(|seg| seg.as_str() != Some("body"))
                                .map(|seg| match seg {
                                    serde_json::Value::String(s) => s.clone(),
                                    other => other.to_string(),
                                })
                                .collect::<Vec<_>>()
                                .join(".")
                        })
                        .unwrap_or_default();
                    Some(if loc.is_empty() {
                        msg.to_string()
                    } else {
                        format!("{loc}: {msg}")
                    })
                })
                .collect();
            (!parts.is_empty()).then(|| parts.join("; "))
        }
        _ => Some(body.to_string()),
    }
}
