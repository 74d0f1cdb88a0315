// SPDX-FileCopyrightText: 2026 Callboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Call detail view: one call joined with its optional conversation.

use std::sync::Arc;

use callboard_core::{Call, CallsApi, Conversation};
use tokio::sync::Mutex;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::generation::{GenerationGuard, LoadOutcome};
use crate::policy::{FailurePolicy, ViewFetch, fatal_message, policy_for};

/// Parts of the detail page, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Section {
    BasicInfo,
    Transcript,
    Transcription,
    Status,
    Analysis,
    AudioPlayer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallDetail {
    pub call: Call,
    pub conversation: Option<Conversation>,
}

impl CallDetail {
    /// Sections to render, in order. Optional sections appear only when their
    /// data is present.
    pub fn sections(&self) -> Vec<Section> {
        let mut sections = vec![Section::BasicInfo];
        if let Some(conversation) = &self.conversation {
            if !conversation.messages.is_empty() {
                sections.push(Section::Transcript);
            }
        }
        if self.call.transcription.as_deref().is_some_and(|t| !t.trim().is_empty()) {
            sections.push(Section::Transcription);
        }
        sections.push(Section::Status);
        if let Some(conversation) = &self.conversation {
            if conversation.intent.is_some()
                || conversation.sentiment.is_some()
                || conversation.summary.is_some()
            {
                sections.push(Section::Analysis);
            }
        }
        if self.call.recording_url.is_some() {
            sections.push(Section::AudioPlayer);
        }
        sections
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CallDetailView {
    Idle,
    Loading,
    Ready(CallDetail),
    /// The backend has no such call.
    NotFound { message: String },
    /// The call could not be loaded for another reason.
    Failed { message: String },
}

impl CallDetailView {
    /// Whether the view body should be replaced with a link back to the list.
    pub fn offers_back_to_list(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Failed { .. })
    }
}

struct Inner {
    call_id: Option<Uuid>,
    view: CallDetailView,
    guard: GenerationGuard,
}

pub struct CallDetailController {
    api: Arc<dyn CallsApi>,
    inner: Mutex<Inner>,
}

impl CallDetailController {
    pub fn new(api: Arc<dyn CallsApi>) -> Self {
        Self {
            api,
            inner: Mutex::new(Inner {
                call_id: None,
                view: CallDetailView::Idle,
                guard: GenerationGuard::new(),
            }),
        }
    }

    pub async fn view(&self) -> CallDetailView {
        self.inner.lock().await.view.clone()
    }

    pub async fn call_id(&self) -> Option<Uuid> {
        self.inner.lock().await.call_id
    }

    /// Loads call `id` and its conversation concurrently.
    pub async fn load(&self, id: Uuid) -> LoadOutcome {
        let generation = {
            let mut inner = self.inner.lock().await;
            inner.call_id = Some(id);
            inner.view = CallDetailView::Loading;
            inner.guard.advance()
        };

        let (call, conversation) =
            tokio::join!(self.api.get_call(id), self.api.get_conversation(id));

        let mut inner = self.inner.lock().await;
        if !inner.guard.is_current(generation) {
            debug!(%id, "discarding stale call detail");
            return LoadOutcome::Discarded;
        }

        let call = match call {
            Ok(call) => call,
            Err(e) => {
                let message = fatal_message(ViewFetch::CallDetailCall, &e);
                warn!(%id, error = %e, "failed to load call");
                inner.view = if e.is_not_found() {
                    CallDetailView::NotFound { message }
                } else {
                    CallDetailView::Failed { message }
                };
                return LoadOutcome::Failed;
            }
        };

        let conversation = match conversation {
            Ok(conversation) => Some(conversation),
            Err(e)
                if policy_for(ViewFetch::CallDetailConversation) == FailurePolicy::HideSection =>
            {
                debug!(%id, error = %e, "no conversation for call");
                None
            }
            Err(e) => {
                warn!(%id, error = %e, "failed to load conversation");
                inner.view = CallDetailView::Failed {
                    message: fatal_message(ViewFetch::CallDetailConversation, &e),
                };
                return LoadOutcome::Failed;
            }
        };

        inner.view = CallDetailView::Ready(CallDetail { call, conversation });
        LoadOutcome::Applied
    }
}
