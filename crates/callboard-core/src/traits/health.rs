// SPDX-FileCopyrightText: 2026 Callboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Backend liveness probe.

use async_trait::async_trait;

use crate::error::CallboardError;
use crate::types::HealthStatus;

#[async_trait]
pub trait HealthApi: Send + Sync + 'static {
    /// Liveness only; no side effects.
    async fn check(&self) -> Result<HealthStatus, CallboardError>;
}
