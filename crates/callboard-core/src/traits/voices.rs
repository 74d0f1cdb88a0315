// SPDX-FileCopyrightText: 2026 Callboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Voice profiles resource family.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::CallboardError;
use crate::types::{VoiceDeletion, VoiceProfile, VoiceTestResult, VoiceUpload};

/// Access to synthesized voice profiles.
#[async_trait]
pub trait VoicesApi: Send + Sync + 'static {
    async fn list_voices(&self) -> Result<Vec<VoiceProfile>, CallboardError>;

    async fn get_voice(&self, id: Uuid) -> Result<VoiceProfile, CallboardError>;

    /// Uploads audio samples and clones a new voice from them.
    async fn create_voice(&self, upload: &VoiceUpload) -> Result<VoiceProfile, CallboardError>;

    /// Synthesizes `text` with the profile. Never mutates the profile.
    async fn test_voice(&self, id: Uuid, text: &str) -> Result<VoiceTestResult, CallboardError>;

    /// Removes the profile server-side.
    async fn delete_voice(&self, id: Uuid) -> Result<VoiceDeletion, CallboardError>;
}
