// SPDX-FileCopyrightText: 2026 Callboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dashboard view: aggregate stats plus the most recent calls.
//!
//! Both fetches must succeed; a partial dashboard is never shown.

use std::sync::Arc;

use callboard_core::{Call, DashboardApi, DashboardStats};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::generation::{GenerationGuard, LoadOutcome};
use crate::policy::{ViewFetch, fatal_message};

pub const DEFAULT_RECENT_CALLS: u32 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub stats: DashboardStats,
    pub recent_calls: Vec<Call>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardView {
    Idle,
    Loading,
    Ready(DashboardData),
    Failed { message: String },
}

struct Inner {
    view: DashboardView,
    guard: GenerationGuard,
}

pub struct DashboardController {
    api: Arc<dyn DashboardApi>,
    recent_limit: u32,
    inner: Mutex<Inner>,
}

impl DashboardController {
    pub fn new(api: Arc<dyn DashboardApi>, recent_limit: u32) -> Self {
        Self {
            api,
            recent_limit,
            inner: Mutex::new(Inner {
                view: DashboardView::Idle,
                guard: GenerationGuard::new(),
            }),
        }
    }

    pub async fn view(&self) -> DashboardView {
        self.inner.lock().await.view.clone()
    }

    pub async fn load(&self) -> LoadOutcome {
        let generation = {
            let mut inner = self.inner.lock().await;
            inner.view = DashboardView::Loading;
            inner.guard.advance()
        };

        let stats = async {
            self.api
                .get_stats()
                .await
                .map_err(|e| (ViewFetch::DashboardStats, e))
        };
        let recent = async {
            self.api
                .get_recent_calls(self.recent_limit)
                .await
                .map_err(|e| (ViewFetch::DashboardRecentCalls, e))
        };
        let result = tokio::try_join!(stats, recent);

        let mut inner = self.inner.lock().await;
        if !inner.guard.is_current(generation) {
            debug!("discarding stale dashboard");
            return LoadOutcome::Discarded;
        }
        match result {
            Ok((stats, recent_calls)) => {
                inner.view = DashboardView::Ready(DashboardData {
                    stats,
                    recent_calls,
                });
                LoadOutcome::Applied
            }
            Err((fetch, e)) => {
                warn!(%fetch, error = %e, "failed to load dashboard");
                inner.view = DashboardView::Failed {
                    message: fatal_message(fetch, &e),
                };
                LoadOutcome::Failed
            }
        }
    }
}
