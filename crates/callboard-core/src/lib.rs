// SPDX-FileCopyrightText: 2026 Callboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Callboard operator console.
//!
//! This crate provides the error taxonomy, the backend data model, the
//! credential slot, and the resource-family traits that the HTTP gateway
//! implements and the view controllers consume.

pub mod credentials;
pub mod error;
pub mod traits;
pub mod types;
pub mod validate;

// Re-export key items at crate root for ergonomic imports.
pub use credentials::{Anonymous, CredentialProvider, CredentialSlot, SignIn};
pub use error::{CallboardError, FailureKind};
pub use types::{
    AudioSample, Call, CallDirection, CallListResponse, Conversation, ConversationMessage,
    DashboardStats, HealthReport, HealthStatus, MessageRole, OutboundCallReceipt,
    OutboundCallRequest, VoiceDeletion, VoiceProfile, VoiceTestRequest, VoiceTestResult,
    VoiceUpload,
};

pub use traits::{CallsApi, DashboardApi, HealthApi, VoicesApi};

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn call_json() -> serde_json::Value {
        serde_json::json!({
            "id": "6f1c2a4e-8f7b-4c39-9a53-0c3f4a1e2b7d",
            "twilio_call_sid": "CA0123456789abcdef0123456789abcdef",
            "direction": "inbound",
            "from_number": "+34600111222",
            "to_number": "+34910000000",
            "status": "completed",
            "duration": 93,
            "recording_url": null,
            "transcription": "Hola, quería reservar una mesa.",
            "metadata": {"campaign": "spring"},
            "created_at": "2026-03-01T10:15:00.123456",
            "updated_at": "2026-03-01T10:16:33+00:00"
        })
    }

    #[test]
    fn call_accepts_backend_field_names() {
        let call: Call = serde_json::from_value(call_json()).expect("should deserialize");
        assert_eq!(call.provider_call_id, "CA0123456789abcdef0123456789abcdef");
        assert_eq!(call.direction, CallDirection::Inbound);
        assert_eq!(call.duration, Some(93));
        assert!(call.recording_url.is_none());
        assert_eq!(call.created_at.to_rfc3339(), "2026-03-01T10:15:00.123456+00:00");
    }

    #[test]
    fn call_tolerates_missing_optional_fields() {
        let mut json = call_json();
        let obj = json.as_object_mut().unwrap();
        for key in ["duration", "recording_url", "transcription", "metadata"] {
            obj.remove(key);
        }
        let call: Call = serde_json::from_value(json).expect("optionals may be absent");
        assert!(call.duration.is_none());
        assert!(call.transcription.is_none());
        assert!(call.metadata.is_none());
    }

    #[test]
    fn invalid_timestamp_is_rejected() {
        let mut json = call_json();
        json["created_at"] = serde_json::json!("yesterday");
        let err = serde_json::from_value::<Call>(json).unwrap_err();
        assert!(err.to_string().contains("invalid timestamp"), "got: {err}");
    }

    #[test]
    fn voice_profile_accepts_backend_field_names() {
        let voice: VoiceProfile = serde_json::from_value(serde_json::json!({
            "id": "0b8d2c9e-3f4a-4b5c-8d7e-9f0a1b2c3d4e",
            "name": "Recepción",
            "description": null,
            "elevenlabs_voice_id": "EXAVITQu4vr4xnSDxMaL",
            "sample_audio_urls": ["/tmp/voice_samples/a.mp3", "/tmp/voice_samples/b.mp3"],
            "is_active": true,
            "user_id": null,
            "created_at": "2026-02-10T08:00:00",
            "updated_at": "2026-02-10T08:00:00"
        }))
        .expect("should deserialize");
        assert_eq!(voice.provider_voice_id, "EXAVITQu4vr4xnSDxMaL");
        assert_eq!(voice.sample_audio_urls.len(), 2);
        assert_eq!(voice.sample_audio_urls[0], "/tmp/voice_samples/a.mp3");
        assert!(voice.owner_id.is_none());
    }

    #[test]
    fn conversation_preserves_message_order_and_unknown_roles() {
        let conversation: Conversation = serde_json::from_value(serde_json::json!({
            "id": "1d7e6a0c-2b3f-4e5d-9c8b-7a6f5e4d3c2b",
            "call_id": "6f1c2a4e-8f7b-4c39-9a53-0c3f4a1e2b7d",
            "messages": [
                {"role": "system", "content": "s", "timestamp": "2026-03-01T10:15:00"},
                {"role": "assistant", "content": "a", "timestamp": "2026-03-01T10:15:01"},
                {"role": "user", "content": "u", "timestamp": "2026-03-01T10:15:02"},
                {"role": "tool", "content": "t", "timestamp": "2026-03-01T10:15:03"}
            ],
            "intent": "booking",
            "sentiment": "positive",
            "created_at": "2026-03-01T10:17:00",
            "updated_at": "2026-03-01T10:17:00"
        }))
        .expect("should deserialize");

        let roles: Vec<MessageRole> = conversation.messages.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![
                MessageRole::System,
                MessageRole::Assistant,
                MessageRole::User,
                MessageRole::Other
            ]
        );
        assert!(conversation.summary.is_none());
    }

    #[test]
    fn outbound_request_omits_absent_fields() {
        let request = OutboundCallRequest {
            to_number: "+34600111222".into(),
            from_number: None,
            message: Some("Le llamamos para confirmar su cita.".into()),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "to_number": "+34600111222",
                "message": "Le llamamos para confirmar su cita."
            })
        );
    }

    #[test]
    fn dashboard_stats_accept_integer_averages() {
        let stats: DashboardStats = serde_json::from_value(serde_json::json!({
            "total_calls": 0,
            "today_calls": 0,
            "active_calls": 0,
            "avg_duration": 0,
            "success_rate": 0
        }))
        .expect("integers are valid floats");
        assert_eq!(stats.avg_duration, 0.0);
    }

    #[test]
    fn error_kinds_follow_taxonomy() {
        let transport = CallboardError::Transport {
            message: "connection refused".into(),
            source: None,
        };
        let timeout = CallboardError::Timeout {
            duration: Duration::from_secs(10),
        };
        let not_found = CallboardError::NotFound {
            message: "Call not found".into(),
        };
        let client = CallboardError::Client {
            status: 400,
            message: "At least one audio file is required".into(),
        };
        let server = CallboardError::Server {
            status: 500,
            message: "Failed to list calls".into(),
        };

        assert_eq!(transport.kind(), FailureKind::Transport);
        assert_eq!(timeout.kind(), FailureKind::Transport);
        assert_eq!(not_found.kind(), FailureKind::NotFound);
        assert_eq!(client.kind(), FailureKind::Client);
        assert_eq!(server.kind(), FailureKind::Server);
        assert_eq!(CallboardError::Validation("x".into()).kind(), FailureKind::Client);
        assert_eq!(CallboardError::Internal("x".into()).kind(), FailureKind::Internal);
    }

    #[test]
    fn user_messages_hide_transport_and_server_details() {
        let timeout = CallboardError::Timeout {
            duration: Duration::from_secs(10),
        };
        assert_eq!(timeout.user_message(), error::CONNECTIVITY_MESSAGE);

        let server = CallboardError::Server {
            status: 500,
            message: "Traceback ...".into(),
        };
        assert_eq!(server.user_message(), error::SERVER_FAILURE_MESSAGE);

        let client = CallboardError::Client {
            status: 422,
            message: "text: ensure this value has at most 1000 characters".into(),
        };
        assert_eq!(
            client.user_message(),
            "text: ensure this value has at most 1000 characters"
        );
    }

    #[test]
    fn status_is_reported_for_http_failures_only() {
        assert_eq!(
            CallboardError::NotFound { message: "x".into() }.status(),
            Some(404)
        );
        assert_eq!(
            CallboardError::Server { status: 503, message: "x".into() }.status(),
            Some(503)
        );
        assert_eq!(CallboardError::Validation("x".into()).status(), None);
    }

    #[test]
    fn all_traits_are_object_safe() {
        fn _calls(_: &dyn CallsApi) {}
        fn _voices(_: &dyn VoicesApi) {}
        fn _dashboard(_: &dyn DashboardApi) {}
        fn _health(_: &dyn HealthApi) {}
    }
}
