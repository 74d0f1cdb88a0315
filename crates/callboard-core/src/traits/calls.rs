// SPDX-FileCopyrightText: 2026 Callboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Calls resource family.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::CallboardError;
use crate::types::{Call, CallListResponse, Conversation, OutboundCallReceipt, OutboundCallRequest};

/// Access to call records and their conversations.
#[async_trait]
pub trait CallsApi: Send + Sync + 'static {
    /// Fetches one page of calls, newest first. `page` is 1-indexed.
    async fn list_calls(&self, page: u32, page_size: u32)
        -> Result<CallListResponse, CallboardError>;

    /// Fetches a single call; `NotFound` when the backend has no such call.
    async fn get_call(&self, id: Uuid) -> Result<Call, CallboardError>;

    /// Asks the backend to place an outbound call. Returns once the call is
    /// initiated, not when it completes.
    async fn make_outbound_call(
        &self,
        request: &OutboundCallRequest,
    ) -> Result<OutboundCallReceipt, CallboardError>;

    /// Fetches the conversation of a call; `NotFound` when none exists yet.
    async fn get_conversation(&self, call_id: Uuid) -> Result<Conversation, CallboardError>;
}
