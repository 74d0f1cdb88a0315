// SPDX-FileCopyrightText: 2026 Callboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-view failure tolerance.
//!
//! Each fetch a view makes has exactly one entry in [`POLICY`]. Controllers
//! consult [`policy_for`] instead of deciding ad hoc, so the table below is
//! the complete record of which failures blank a view and which are hidden.

use callboard_core::{CallboardError, FailureKind};
use strum::Display;

/// A fetch issued by one of the views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ViewFetch {
    CallsListPage,
    CallDetailCall,
    CallDetailConversation,
    DashboardStats,
    DashboardRecentCalls,
    VoicesList,
    VoiceCreate,
    VoiceTest,
    VoiceDelete,
}

/// How a view reacts when a fetch fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum FailurePolicy {
    /// Replace the view body with an error and a retry or back affordance.
    Fatal,
    /// Hide the dependent section; the operator sees no error.
    HideSection,
    /// Keep the view as it was and raise an error notification.
    Notify,
}

pub const POLICY: &[(ViewFetch, FailurePolicy)] = &[
    (ViewFetch::CallsListPage, FailurePolicy::Fatal),
    (ViewFetch::CallDetailCall, FailurePolicy::Fatal),
    (ViewFetch::CallDetailConversation, FailurePolicy::HideSection),
    (ViewFetch::DashboardStats, FailurePolicy::Fatal),
    (ViewFetch::DashboardRecentCalls, FailurePolicy::Fatal),
    (ViewFetch::VoicesList, FailurePolicy::Fatal),
    (ViewFetch::VoiceCreate, FailurePolicy::Notify),
    (ViewFetch::VoiceTest, FailurePolicy::Notify),
    (ViewFetch::VoiceDelete, FailurePolicy::Notify),
];

pub fn policy_for(fetch: ViewFetch) -> FailurePolicy {
    POLICY
        .iter()
        .find(|(f, _)| *f == fetch)
        .map(|(_, p)| *p)
        .unwrap_or(FailurePolicy::Fatal)
}

/// Operator-facing message for a fatal failure of `fetch`.
///
/// A missing call reads differently from a call that could not be loaded.
pub fn fatal_message(fetch: ViewFetch, error: &CallboardError) -> String {
    match (fetch, error.kind()) {
        (ViewFetch::CallDetailCall, FailureKind::NotFound) => "Call not found".to_string(),
        _ => error.user_message(),
    }
}
