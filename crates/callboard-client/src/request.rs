// SPDX-FileCopyrightText: 2026 Callboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request descriptors produced by the resource accessors.

use callboard_core::VoiceUpload;
use reqwest::Method;

/// Everything the gateway needs to issue one request, minus the transport
/// concerns (base path, timeout, credentials) it adds itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the `/api/v1` base, starting with `/`.
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    pub body: RequestBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    /// Voice clone upload, sent as `multipart/form-data`.
    Multipart(VoiceUpload),
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = RequestBody::Json(body);
        self
    }

    pub fn multipart(mut self, upload: VoiceUpload) -> Self {
        self.body = RequestBody::Multipart(upload);
        self
    }
}
