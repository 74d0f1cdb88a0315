// SPDX-FileCopyrightText: 2026 Callboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic backend records for tests.

use callboard_core::{
    Call, CallDirection, Conversation, ConversationMessage, DashboardStats, MessageRole,
    VoiceProfile,
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Stable id for the `n`th fixture of a family.
pub fn fixture_id(family: u16, n: u32) -> Uuid {
    Uuid::from_fields(n, family, 0x4000, &[0x80, 0, 0, 0, 0, 0, 0, 1])
}

/// The `n`th call, newest first when generated in ascending `n`.
pub fn call(n: u32) -> Call {
    let created = epoch() - Duration::minutes(i64::from(n));
    Call {
        id: fixture_id(1, n),
        provider_call_id: format!("CA{n:032x}"),
        direction: if n % 2 == 0 {
            CallDirection::Inbound
        } else {
            CallDirection::Outbound
        },
        from_number: format!("+3460{n:07}"),
        to_number: "+34910000000".to_string(),
        status: "completed".to_string(),
        duration: Some(30 + n),
        recording_url: None,
        transcription: None,
        metadata: None,
        created_at: created,
        updated_at: created,
    }
}

/// `count` calls numbered from 1.
pub fn calls(count: u32) -> Vec<Call> {
    (1..=count).map(call).collect()
}

pub fn conversation(call_id: Uuid) -> Conversation {
    let at = epoch();
    Conversation {
        id: Uuid::new_v4(),
        call_id,
        messages: vec![
            ConversationMessage {
                role: MessageRole::Assistant,
                content: "Buenos días, ¿en qué puedo ayudarle?".to_string(),
                timestamp: "2026-03-01T09:00:01".to_string(),
            },
            ConversationMessage {
                role: MessageRole::User,
                content: "Quería reservar una mesa para dos.".to_string(),
                timestamp: "2026-03-01T09:00:05".to_string(),
            },
        ],
        summary: Some("Reserva para dos personas".to_string()),
        intent: Some("booking".to_string()),
        sentiment: Some("positive".to_string()),
        metadata: None,
        created_at: at,
        updated_at: at,
    }
}

pub fn voice(n: u32, name: &str) -> VoiceProfile {
    let at = epoch();
    VoiceProfile {
        id: fixture_id(2, n),
        name: name.to_string(),
        description: None,
        provider_voice_id: format!("voice-{n}"),
        sample_audio_urls: vec![format!("/tmp/voice_samples/{n}.mp3")],
        is_active: true,
        owner_id: None,
        created_at: at,
        updated_at: at,
    }
}

pub fn stats() -> DashboardStats {
    DashboardStats {
        total_calls: 45,
        today_calls: 6,
        active_calls: 1,
        avg_duration: 74.5,
        success_rate: 0.9,
    }
}
