// SPDX-FileCopyrightText: 2026 Callboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dashboard accessors.

use async_trait::async_trait;
use callboard_core::{Call, CallboardError, DashboardApi, DashboardStats};

use crate::gateway::ApiClient;
use crate::request::ApiRequest;

/// Largest recent-calls slice the backend will serve.
pub const MAX_RECENT_LIMIT: u32 = 50;

pub fn stats_request() -> ApiRequest {
    ApiRequest::get("/dashboard/stats")
}

pub fn recent_calls_request(limit: u32) -> Result<ApiRequest, CallboardError> {
    if !(1..=MAX_RECENT_LIMIT).contains(&limit) {
        return Err(CallboardError::Validation(format!(
            "recent calls limit must be between 1 and {MAX_RECENT_LIMIT}"
        )));
    }
    Ok(ApiRequest::get("/dashboard/recent").query("limit", limit))
}

#[async_trait]
impl DashboardApi for ApiClient {
    async fn get_stats(&self) -> Result<DashboardStats, CallboardError> {
        self.execute(stats_request()).await
    }

    async fn get_recent_calls(&self, limit: u32) -> Result<Vec<Call>, CallboardError> {
        self.execute(recent_calls_request(limit)?).await
    }
}
