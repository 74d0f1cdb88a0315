// SPDX-FileCopyrightText: 2026 Callboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Voice profile lifecycle: list, create, test and delete.
//!
//! Creation is a small state machine:
//!
//! ```text
//! Idle --open_form--> FormOpen --create--> Submitting --ok--> Idle (profile prepended)
//!                        ^                     |
//!                        +------- error -------+
//! ```
//!
//! Deletion is two-step: [`VoicesController::request_delete`] yields a
//! [`PendingDelete`] that must be handed back to [`VoicesController::delete`]
//! once the operator confirms. Mutations update the in-memory list directly
//! and never trigger a refetch.

use std::sync::Arc;

use callboard_core::{
    CallboardError, VoiceProfile, VoiceTestRequest, VoiceTestResult, VoiceUpload, VoicesApi,
};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::generation::{GenerationGuard, LoadOutcome};
use crate::policy::{ViewFetch, fatal_message};
use crate::LoadStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreationState {
    Idle,
    /// Form visible; `error` holds the last failed submission's message.
    FormOpen { error: Option<String> },
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Error(String),
}

/// A delete the operator has been asked to confirm.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a pending delete does nothing until confirmed"]
pub struct PendingDelete {
    id: Uuid,
    name: String,
}

impl PendingDelete {
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Question to put to the operator.
    pub fn prompt(&self) -> String {
        format!("Delete voice profile \"{}\"? This cannot be undone.", self.name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VoicesState {
    pub profiles: Vec<VoiceProfile>,
    pub status: LoadStatus,
    pub creation: CreationState,
}

struct Inner {
    view: VoicesState,
    notifications: Vec<Notification>,
    guard: GenerationGuard,
}

impl Inner {
    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// A local mutation supersedes any list request still in flight.
    fn supersede_pending_load(&mut self) {
        self.guard.advance();
        if self.view.status == LoadStatus::Loading {
            self.view.status = LoadStatus::Ready;
        }
    }
}

pub struct VoicesController {
    api: Arc<dyn VoicesApi>,
    inner: Mutex<Inner>,
}

impl VoicesController {
    pub fn new(api: Arc<dyn VoicesApi>) -> Self {
        Self {
            api,
            inner: Mutex::new(Inner {
                view: VoicesState {
                    profiles: Vec::new(),
                    status: LoadStatus::Idle,
                    creation: CreationState::Idle,
                },
                notifications: Vec::new(),
                guard: GenerationGuard::new(),
            }),
        }
    }

    pub async fn snapshot(&self) -> VoicesState {
        self.inner.lock().await.view.clone()
    }

    /// Drains notifications raised since the last call.
    pub async fn take_notifications(&self) -> Vec<Notification> {
        std::mem::take(&mut self.inner.lock().await.notifications)
    }

    pub async fn load(&self) -> LoadOutcome {
        let generation = {
            let mut inner = self.inner.lock().await;
            inner.view.status = LoadStatus::Loading;
            inner.guard.advance()
        };

        let result = self.api.list_voices().await;

        let mut inner = self.inner.lock().await;
        if !inner.guard.is_current(generation) {
            debug!("discarding stale voice list");
            return LoadOutcome::Discarded;
        }
        match result {
            Ok(profiles) => {
                inner.view.profiles = profiles;
                inner.view.status = LoadStatus::Ready;
                LoadOutcome::Applied
            }
            Err(e) => {
                warn!(error = %e, "failed to load voice profiles");
                inner.view.status = LoadStatus::Failed(fatal_message(ViewFetch::VoicesList, &e));
                LoadOutcome::Failed
            }
        }
    }

    pub async fn open_form(&self) {
        let mut inner = self.inner.lock().await;
        if inner.view.creation == CreationState::Idle {
            inner.view.creation = CreationState::FormOpen { error: None };
        }
    }

    /// Closes the form. Ignored while a submission is in flight.
    pub async fn cancel_form(&self) {
        let mut inner = self.inner.lock().await;
        if matches!(inner.view.creation, CreationState::FormOpen { .. }) {
            inner.view.creation = CreationState::Idle;
        }
    }

    /// Submits the open form.
    ///
    /// On success the new profile is prepended to the list and the form
    /// closes. On failure the form stays open with the error shown.
    pub async fn create(&self, upload: VoiceUpload) -> Result<VoiceProfile, CallboardError> {
        {
            let mut inner = self.inner.lock().await;
            match &inner.view.creation {
                CreationState::FormOpen { .. } => {}
                CreationState::Submitting => {
                    return Err(CallboardError::Validation(
                        "a voice profile is already being created".into(),
                    ));
                }
                CreationState::Idle => {
                    return Err(CallboardError::Validation(
                        "open the creation form first".into(),
                    ));
                }
            }
            if let Err(e) = upload.validate() {
                inner.view.creation = CreationState::FormOpen {
                    error: Some(e.user_message()),
                };
                return Err(e);
            }
            inner.view.creation = CreationState::Submitting;
        }

        let result = self.api.create_voice(&upload).await;

        let mut inner = self.inner.lock().await;
        match result {
            Ok(profile) => {
                info!(
                    voice_id = %profile.id,
                    name = %profile.name,
                    samples = upload.files.len(),
                    "voice profile created"
                );
                inner.view.profiles.insert(0, profile.clone());
                inner.supersede_pending_load();
                inner.view.creation = CreationState::Idle;
                inner.notify(Notification::Success(format!(
                    "Voice \"{}\" created",
                    profile.name
                )));
                Ok(profile)
            }
            Err(e) => {
                warn!(error = %e, "voice profile creation failed");
                let message = e.user_message();
                inner.view.creation = CreationState::FormOpen {
                    error: Some(message.clone()),
                };
                inner.notify(Notification::Error(message));
                Err(e)
            }
        }
    }

    /// Synthesizes `text` with profile `id`. The list is never touched.
    pub async fn test(&self, id: Uuid, text: &str) -> Result<VoiceTestResult, CallboardError> {
        let request = VoiceTestRequest {
            text: text.to_string(),
        };
        let result = match request.validate() {
            Ok(()) => self.api.test_voice(id, &request.text).await,
            Err(e) => Err(e),
        };

        let mut inner = self.inner.lock().await;
        match &result {
            Ok(audio) => {
                debug!(%id, audio_url = %audio.audio_url, "voice test synthesized");
                inner.notify(Notification::Success("Test audio ready".into()));
            }
            Err(e) => {
                warn!(%id, error = %e, "voice test failed");
                inner.notify(Notification::Error(e.user_message()));
            }
        }
        result
    }

    /// First step of a delete. Nothing is sent until the returned value is
    /// passed to [`delete`](Self::delete).
    pub async fn request_delete(&self, id: Uuid) -> Result<PendingDelete, CallboardError> {
        let inner = self.inner.lock().await;
        let profile = inner
            .view
            .profiles
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CallboardError::NotFound {
                message: "Voice profile not found".into(),
            })?;
        Ok(PendingDelete {
            id,
            name: profile.name.clone(),
        })
    }

    /// Sends a confirmed delete. On success the profile is removed locally;
    /// on failure the list is left unchanged.
    pub async fn delete(&self, pending: PendingDelete) -> Result<(), CallboardError> {
        let result = self.api.delete_voice(pending.id).await;

        let mut inner = self.inner.lock().await;
        match result {
            Ok(_) => {
                info!(voice_id = %pending.id, "voice profile deleted");
                inner.view.profiles.retain(|p| p.id != pending.id);
                inner.supersede_pending_load();
                inner.notify(Notification::Success(format!(
                    "Voice \"{}\" deleted",
                    pending.name
                )));
                Ok(())
            }
            Err(e) => {
                warn!(voice_id = %pending.id, error = %e, "voice profile delete failed");
                inner.notify(Notification::Error(e.user_message()));
                Err(e)
            }
        }
    }
}
