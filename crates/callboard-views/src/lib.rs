// SPDX-FileCopyrightText: 2026 Callboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! View controllers for the Callboard operator console.
//!
//! Each controller owns the in-memory state of one view, drives the backend
//! through the resource-family traits, and guards every asynchronous
//! completion with a [`Generation`](generation::Generation) so that a result
//! arriving after the view moved on is dropped. Controllers take `&self` and
//! may be shared across tasks; loads may interleave.

pub mod call_detail;
pub mod calls_list;
pub mod dashboard;
pub mod generation;
pub mod policy;
pub mod voices;

pub use call_detail::{CallDetail, CallDetailController, CallDetailView, Section};
pub use calls_list::{CallsListController, CallsListState, DEFAULT_PAGE_SIZE, Pagination};
pub use dashboard::{DEFAULT_RECENT_CALLS, DashboardController, DashboardData, DashboardView};
pub use generation::LoadOutcome;
pub use policy::{FailurePolicy, ViewFetch};
pub use voices::{CreationState, Notification, PendingDelete, VoicesController, VoicesState};

/// Load state of a list view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    /// Operator-facing message of the last failed load.
    Failed(String),
}
