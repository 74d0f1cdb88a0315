// SPDX-FileCopyrightText: 2026 Callboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory backend for deterministic controller tests.
//!
//! `MockBackend` implements every resource-family trait against scripted
//! records. Tests can queue one-shot failures per endpoint, read per-endpoint
//! request counters, and hold a request in flight with a [`Gate`] to provoke
//! out-of-order completions.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use callboard_core::{
    Call, CallListResponse, CallboardError, CallsApi, Conversation, DashboardApi, DashboardStats,
    HealthApi, HealthStatus, OutboundCallReceipt, OutboundCallRequest, VoiceDeletion, VoiceProfile,
    VoiceTestResult, VoiceUpload, VoicesApi,
};
use chrono::Utc;
use tokio::sync::{Mutex, Notify};
use tracing::debug;
use uuid::Uuid;

use crate::fixtures;

/// Backend operations, one per trait method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    ListCalls,
    GetCall,
    OutboundCall,
    Conversation,
    ListVoices,
    GetVoice,
    CreateVoice,
    TestVoice,
    DeleteVoice,
    Stats,
    RecentCalls,
    Health,
}

/// Holds one request in flight until released.
#[derive(Debug, Clone, Default)]
pub struct Gate {
    entered: Arc<Notify>,
    released: Arc<Notify>,
}

impl Gate {
    /// Resolves once the held request has reached the backend.
    pub async fn entered(&self) {
        self.entered.notified().await;
    }

    /// Lets the held request complete.
    pub fn release(&self) {
        self.released.notify_one();
    }

    async fn pass(&self) {
        self.entered.notify_one();
        self.released.notified().await;
    }
}

#[derive(Default)]
struct State {
    calls: Vec<Call>,
    conversations: HashMap<Uuid, Conversation>,
    voices: Vec<VoiceProfile>,
    stats: Option<DashboardStats>,
    health: Option<HealthStatus>,
    failures: HashMap<Endpoint, VecDeque<CallboardError>>,
    gates: HashMap<Endpoint, VecDeque<Gate>>,
    counts: HashMap<Endpoint, usize>,
    list_pages: Vec<u32>,
}

/// Scripted implementation of [`CallsApi`], [`VoicesApi`], [`DashboardApi`]
/// and [`HealthApi`]. Clones share state.
#[derive(Clone, Default)]
pub struct MockBackend {
    state: Arc<Mutex<State>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_calls(self, calls: Vec<Call>) -> Self {
        self.state.lock().await.calls = calls;
        self
    }

    pub async fn with_conversation(self, conversation: Conversation) -> Self {
        self.state
            .lock()
            .await
            .conversations
            .insert(conversation.call_id, conversation);
        self
    }

    pub async fn with_voices(self, voices: Vec<VoiceProfile>) -> Self {
        self.state.lock().await.voices = voices;
        self
    }

    pub async fn with_stats(self, stats: DashboardStats) -> Self {
        self.state.lock().await.stats = Some(stats);
        self
    }

    pub async fn set_health(&self, health: HealthStatus) {
        self.state.lock().await.health = Some(health);
    }

    /// Makes the next request to `endpoint` fail with `error`.
    pub async fn fail_next(&self, endpoint: Endpoint, error: CallboardError) {
        self.state
            .lock()
            .await
            .failures
            .entry(endpoint)
            .or_default()
            .push_back(error);
    }

    /// Holds the next request to `endpoint` until the returned gate is released.
    pub async fn hold_next(&self, endpoint: Endpoint) -> Gate {
        let gate = Gate::default();
        self.state
            .lock()
            .await
            .gates
            .entry(endpoint)
            .or_default()
            .push_back(gate.clone());
        gate
    }

    /// Number of requests received for `endpoint`.
    pub async fn request_count(&self, endpoint: Endpoint) -> usize {
        self.state
            .lock()
            .await
            .counts
            .get(&endpoint)
            .copied()
            .unwrap_or(0)
    }

    /// Pages requested through `list_calls`, in arrival order.
    pub async fn list_pages(&self) -> Vec<u32> {
        self.state.lock().await.list_pages.clone()
    }

    pub async fn voices(&self) -> Vec<VoiceProfile> {
        self.state.lock().await.voices.clone()
    }

    /// Records the request and waits on its gate, if one is queued.
    ///
    /// Returns the scripted failure for this request, if any.
    async fn enter(&self, endpoint: Endpoint) -> Result<(), CallboardError> {
        let gate = {
            let mut state = self.state.lock().await;
            *state.counts.entry(endpoint).or_insert(0) += 1;
            state.gates.get_mut(&endpoint).and_then(VecDeque::pop_front)
        };
        if let Some(gate) = gate {
            debug!(?endpoint, "request held at gate");
            gate.pass().await;
        }
        let failure = self
            .state
            .lock()
            .await
            .failures
            .get_mut(&endpoint)
            .and_then(VecDeque::pop_front);
        match failure {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

pub fn not_found(what: &str) -> CallboardError {
    CallboardError::NotFound {
        message: format!("{what} not found"),
    }
}

pub fn server_error() -> CallboardError {
    CallboardError::Server {
        status: 500,
        message: "Internal Server Error".to_string(),
    }
}

pub fn transport_error() -> CallboardError {
    CallboardError::Transport {
        message: "connection refused".to_string(),
        source: None,
    }
}

#[async_trait]
impl CallsApi for MockBackend {
    async fn list_calls(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<CallListResponse, CallboardError> {
        self.state.lock().await.list_pages.push(page);
        self.enter(Endpoint::ListCalls).await?;
        let state = self.state.lock().await;
        let skip = (page.saturating_sub(1) as usize).saturating_mul(page_size as usize);
        Ok(CallListResponse {
            items: state
                .calls
                .iter()
                .skip(skip)
                .take(page_size as usize)
                .cloned()
                .collect(),
            total: state.calls.len() as u64,
            page,
            page_size,
        })
    }

    async fn get_call(&self, id: Uuid) -> Result<Call, CallboardError> {
        self.enter(Endpoint::GetCall).await?;
        let state = self.state.lock().await;
        state
            .calls
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| not_found("Call"))
    }

    async fn make_outbound_call(
        &self,
        request: &OutboundCallRequest,
    ) -> Result<OutboundCallReceipt, CallboardError> {
        request.validate()?;
        self.enter(Endpoint::OutboundCall).await?;
        Ok(OutboundCallReceipt {
            call_sid: format!("CA{}", Uuid::new_v4().simple()),
            call_id: Uuid::new_v4(),
            status: "initiated".to_string(),
        })
    }

    async fn get_conversation(&self, call_id: Uuid) -> Result<Conversation, CallboardError> {
        self.enter(Endpoint::Conversation).await?;
        let state = self.state.lock().await;
        state
            .conversations
            .get(&call_id)
            .cloned()
            .ok_or_else(|| not_found("Conversation"))
    }
}

#[async_trait]
impl VoicesApi for MockBackend {
    /// The list is read when the request arrives, before any gate holds it.
    async fn list_voices(&self) -> Result<Vec<VoiceProfile>, CallboardError> {
        let voices = self.state.lock().await.voices.clone();
        self.enter(Endpoint::ListVoices).await?;
        Ok(voices)
    }

    async fn get_voice(&self, id: Uuid) -> Result<VoiceProfile, CallboardError> {
        self.enter(Endpoint::GetVoice).await?;
        let state = self.state.lock().await;
        state
            .voices
            .iter()
            .find(|v| v.id == id)
            .cloned()
            .ok_or_else(|| not_found("Voice profile"))
    }

    async fn create_voice(&self, upload: &VoiceUpload) -> Result<VoiceProfile, CallboardError> {
        upload.validate()?;
        self.enter(Endpoint::CreateVoice).await?;
        let now = Utc::now();
        let profile = VoiceProfile {
            id: Uuid::new_v4(),
            name: upload.name.clone(),
            description: upload.description.clone(),
            provider_voice_id: format!("voice-{}", Uuid::new_v4().simple()),
            sample_audio_urls: upload
                .files
                .iter()
                .map(|f| format!("/tmp/voice_samples/{}", f.file_name))
                .collect(),
            is_active: true,
            owner_id: None,
            created_at: now,
            updated_at: now,
        };
        self.state.lock().await.voices.push(profile.clone());
        Ok(profile)
    }

    async fn test_voice(&self, id: Uuid, text: &str) -> Result<VoiceTestResult, CallboardError> {
        self.enter(Endpoint::TestVoice).await?;
        let state = self.state.lock().await;
        if !state.voices.iter().any(|v| v.id == id) {
            return Err(not_found("Voice profile"));
        }
        Ok(VoiceTestResult {
            audio_url: format!("/tmp/test_audio/{id}.mp3"),
            duration_seconds: Some(text.chars().count() as f64 / 15.0),
        })
    }

    async fn delete_voice(&self, id: Uuid) -> Result<VoiceDeletion, CallboardError> {
        self.enter(Endpoint::DeleteVoice).await?;
        let mut state = self.state.lock().await;
        let before = state.voices.len();
        state.voices.retain(|v| v.id != id);
        if state.voices.len() == before {
            return Err(not_found("Voice profile"));
        }
        Ok(VoiceDeletion {
            status: "deleted".to_string(),
            id,
        })
    }
}

#[async_trait]
impl DashboardApi for MockBackend {
    async fn get_stats(&self) -> Result<DashboardStats, CallboardError> {
        self.enter(Endpoint::Stats).await?;
        Ok(self
            .state
            .lock()
            .await
            .stats
            .clone()
            .unwrap_or_else(fixtures::stats))
    }

    async fn get_recent_calls(&self, limit: u32) -> Result<Vec<Call>, CallboardError> {
        self.enter(Endpoint::RecentCalls).await?;
        let state = self.state.lock().await;
        Ok(state.calls.iter().take(limit as usize).cloned().collect())
    }
}

#[async_trait]
impl HealthApi for MockBackend {
    async fn check(&self) -> Result<HealthStatus, CallboardError> {
        self.enter(Endpoint::Health).await?;
        Ok(self
            .state
            .lock()
            .await
            .health
            .clone()
            .unwrap_or(HealthStatus::Healthy))
    }
}
