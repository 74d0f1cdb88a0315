// SPDX-FileCopyrightText: 2026 Callboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resource shapes exchanged with the voice-assistant backend.
//!
//! All entities are owned by the backend. The console only ever holds
//! transient, re-fetchable copies of them.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::{Display, EnumString};
use uuid::Uuid;

/// Direction of a phone call relative to the assistant.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CallDirection {
    Inbound,
    Outbound,
}

/// One phone interaction record.
///
/// `status`, `duration`, `recording_url` and `transcription` are updated by
/// the backend while and after the call runs; everything else is fixed at
/// creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Call {
    pub id: Uuid,
    #[serde(alias = "twilio_call_sid")]
    pub provider_call_id: String,
    pub direction: CallDirection,
    pub from_number: String,
    pub to_number: String,
    /// Backend-defined lifecycle status (`initiated`, `in-progress`, ...).
    pub status: String,
    /// Duration in seconds.
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub recording_url: Option<String>,
    #[serde(default)]
    pub transcription: Option<String>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

/// One page of calls plus the pagination envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallListResponse {
    pub items: Vec<Call>,
    /// Count across all pages; authoritative for page-count arithmetic.
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

/// Body of `POST /calls/outbound`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundCallRequest {
    pub to_number: String,
    /// Caller id override; the backend's own number is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_number: Option<String>,
    /// Initial message to speak.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Returned as soon as the backend has placed an outbound call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundCallReceipt {
    pub call_sid: String,
    pub call_id: Uuid,
    pub status: String,
}

/// Speaker of a conversation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
    System,
    /// Any role this console does not know about.
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub role: MessageRole,
    pub content: String,
    /// ISO timestamp, kept verbatim.
    pub timestamp: String,
}

/// Dialogue transcript and derived analysis for at most one call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: Uuid,
    pub call_id: Uuid,
    /// Chronological; never reordered.
    #[serde(default)]
    pub messages: Vec<ConversationMessage>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub intent: Option<String>,
    #[serde(default)]
    pub sentiment: Option<String>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

/// Point-in-time aggregate counters for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_calls: u64,
    pub today_calls: u64,
    pub active_calls: u64,
    /// Mean duration of completed calls, in seconds.
    pub avg_duration: f64,
    /// Fraction of calls that completed, in `[0, 1]`.
    pub success_rate: f64,
}

/// A named synthesized-voice identity derived from uploaded samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceProfile {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(alias = "elevenlabs_voice_id")]
    pub provider_voice_id: String,
    #[serde(default)]
    pub sample_audio_urls: Vec<String>,
    pub is_active: bool,
    #[serde(default, alias = "user_id")]
    pub owner_id: Option<Uuid>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

/// One audio file attached to a voice clone upload.
#[derive(Clone, PartialEq, Eq)]
pub struct AudioSample {
    pub file_name: String,
    /// MIME type; the multipart part is sent untyped when absent.
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for AudioSample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioSample")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Multipart payload for `POST /voices/clone`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceUpload {
    pub name: String,
    pub description: Option<String>,
    pub files: Vec<AudioSample>,
}

/// Body of `POST /voices/{id}/test`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceTestRequest {
    pub text: String,
}

/// Reference to synthesized test audio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceTestResult {
    pub audio_url: String,
    #[serde(default)]
    pub duration_seconds: Option<f64>,
}

/// Acknowledgement of `DELETE /voices/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceDeletion {
    pub status: String,
    pub id: Uuid,
}

/// Body of the health endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    #[serde(default)]
    pub database: Option<String>,
}

/// Liveness as seen by the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Backend is fully operational.
    Healthy,
    /// Backend answered but reported something other than `healthy`.
    Degraded(String),
    /// Backend reported itself unavailable.
    Unhealthy(String),
}

/// Parses a backend timestamp.
///
/// RFC 3339 values keep their offset; offset-less ISO values are read as UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    raw.parse::<NaiveDateTime>()
        .map(|naive| naive.and_utc())
        .map_err(|e| format!("invalid timestamp `{raw}`: {e}"))
}

mod timestamp {
    use super::*;

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&ts.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}
