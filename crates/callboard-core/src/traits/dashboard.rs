// SPDX-FileCopyrightText: 2026 Callboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dashboard resource family.

use async_trait::async_trait;

use crate::error::CallboardError;
use crate::types::{Call, DashboardStats};

/// Aggregate statistics and the recent-activity slice.
#[async_trait]
pub trait DashboardApi: Send + Sync + 'static {
    async fn get_stats(&self) -> Result<DashboardStats, CallboardError>;

    /// Most recent calls, newest first, at most `limit` of them.
    async fn get_recent_calls(&self, limit: u32) -> Result<Vec<Call>, CallboardError>;
}
