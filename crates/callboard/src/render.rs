// SPDX-FileCopyrightText: 2026 Callboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal rendering of view state.
//!
//! Every function returns the full text so it can be tested without a
//! terminal. With `use_color` off the output is plain ASCII markers.

use callboard_core::{Call, ConversationMessage, HealthStatus, MessageRole, VoiceProfile};
use callboard_views::{
    CallDetailView, CallsListState, DashboardView, LoadStatus, Notification, Section, VoicesState,
};
use colored::Colorize;

const RULE_WIDTH: usize = 35;

fn header(title: &str) -> Vec<String> {
    vec![
        String::new(),
        format!("  {title}"),
        format!("  {}", "-".repeat(RULE_WIDTH)),
    ]
}

fn ok_marker(use_color: bool) -> String {
    if use_color {
        "✓".green().to_string()
    } else {
        "[OK]".to_string()
    }
}

fn fail_marker(use_color: bool) -> String {
    if use_color {
        "✗".red().to_string()
    } else {
        "[FAIL]".to_string()
    }
}

fn finish(mut lines: Vec<String>) -> String {
    lines.push(String::new());
    lines.join("\n")
}

/// `93` -> `1m 33s`.
pub fn format_duration(secs: Option<u32>) -> String {
    match secs {
        None => "-".to_string(),
        Some(s) if s >= 60 => format!("{}m {}s", s / 60, s % 60),
        Some(s) => format!("{s}s"),
    }
}

/// Average durations arrive as fractional seconds.
pub fn format_avg_duration(secs: f64) -> String {
    format_duration(Some(secs.max(0.0).round() as u32))
}

/// `0.875` -> `87.5%`.
pub fn format_rate(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}

fn call_status(status: &str, use_color: bool) -> String {
    if !use_color {
        return status.to_string();
    }
    match status {
        "completed" => status.green().to_string(),
        "failed" | "busy" | "no-answer" | "canceled" => status.red().to_string(),
        "in-progress" | "ringing" | "initiated" | "queued" => status.yellow().to_string(),
        _ => status.to_string(),
    }
}

fn call_row(call: &Call, use_color: bool) -> String {
    format!(
        "    {}  {:<8}  {} -> {}  {}  {}",
        call.created_at.format("%Y-%m-%d %H:%M"),
        call.direction,
        call.from_number,
        call.to_number,
        call_status(&call.status, use_color),
        format_duration(call.duration),
    )
}

pub fn render_health(status: &HealthStatus, use_color: bool) -> String {
    let mut lines = header("callboard health");
    match status {
        HealthStatus::Healthy => {
            lines.push(format!("    Backend:  {} healthy", ok_marker(use_color)));
        }
        HealthStatus::Degraded(detail) => {
            let marker = if use_color {
                "!".yellow().to_string()
            } else {
                "[WARN]".to_string()
            };
            lines.push(format!("    Backend:  {marker} degraded ({detail})"));
        }
        HealthStatus::Unhealthy(detail) => {
            lines.push(format!(
                "    Backend:  {} unhealthy ({detail})",
                fail_marker(use_color)
            ));
        }
    }
    finish(lines)
}

pub fn render_dashboard(view: &DashboardView, use_color: bool) -> String {
    let mut lines = header("Dashboard");
    match view {
        DashboardView::Ready(data) => {
            let s = &data.stats;
            lines.push(format!("    Total calls:   {}", s.total_calls));
            lines.push(format!("    Today:         {}", s.today_calls));
            lines.push(format!("    Active:        {}", s.active_calls));
            lines.push(format!("    Avg duration:  {}", format_avg_duration(s.avg_duration)));
            lines.push(format!("    Success rate:  {}", format_rate(s.success_rate)));
            lines.push(String::new());
            lines.push("  Recent calls".to_string());
            if data.recent_calls.is_empty() {
                lines.push("    No calls yet".to_string());
            }
            lines.extend(data.recent_calls.iter().map(|c| call_row(c, use_color)));
        }
        DashboardView::Failed { message } => {
            lines.push(format!("    {} {message}", fail_marker(use_color)));
            lines.push(String::new());
            lines.push("  Retry with: callboard dashboard".to_string());
        }
        DashboardView::Idle | DashboardView::Loading => {
            lines.push("    Loading...".to_string());
        }
    }
    finish(lines)
}

pub fn render_calls_list(state: &CallsListState, use_color: bool) -> String {
    let mut lines = header("Calls");
    if let LoadStatus::Failed(message) = &state.status {
        lines.push(format!("    {} {message}", fail_marker(use_color)));
        lines.push(String::new());
        lines.push(format!("  Retry with: callboard calls list --page {}", state.page));
        return finish(lines);
    }

    let visible = state.visible();
    if !state.search_term.trim().is_empty() {
        lines.push(format!(
            "    Filter \"{}\": {} of {} on this page",
            state.search_term,
            visible.len(),
            state.items.len()
        ));
    }
    if visible.is_empty() {
        lines.push("    No calls found".to_string());
    }
    for call in visible {
        lines.push(call_row(call, use_color));
        let id = call.id.to_string();
        if use_color {
            lines.push(format!("      {}", id.dimmed()));
        } else {
            lines.push(format!("      {id}"));
        }
    }

    let pagination = state.pagination();
    lines.push(String::new());
    let mut footer = format!("  {pagination}");
    if pagination.has_prev {
        footer.push_str(&format!("  (prev: --page {})", pagination.page - 1));
    }
    if pagination.has_next {
        footer.push_str(&format!("  (next: --page {})", pagination.page + 1));
    }
    lines.push(footer);
    finish(lines)
}

fn role_label(message: &ConversationMessage, use_color: bool) -> String {
    let label = match message.role {
        MessageRole::User => "Caller",
        MessageRole::Assistant => "Assistant",
        MessageRole::System => "System",
        MessageRole::Other => "Other",
    };
    if !use_color {
        return label.to_string();
    }
    match message.role {
        MessageRole::User => label.cyan().to_string(),
        MessageRole::Assistant => label.green().to_string(),
        _ => label.dimmed().to_string(),
    }
}

pub fn render_call_detail(view: &CallDetailView, use_color: bool) -> String {
    let mut lines = header("Call detail");
    let detail = match view {
        CallDetailView::Ready(detail) => detail,
        CallDetailView::NotFound { message } | CallDetailView::Failed { message } => {
            lines.push(format!("    {} {message}", fail_marker(use_color)));
            lines.push(String::new());
            lines.push("  Back to list: callboard calls list".to_string());
            return finish(lines);
        }
        CallDetailView::Idle | CallDetailView::Loading => {
            lines.push("    Loading...".to_string());
            return finish(lines);
        }
    };

    let call = &detail.call;
    for section in detail.sections() {
        match section {
            Section::BasicInfo => {
                lines.push(format!("    Id:         {}", call.id));
                lines.push(format!("    Direction:  {}", call.direction));
                lines.push(format!("    From:       {}", call.from_number));
                lines.push(format!("    To:         {}", call.to_number));
                lines.push(format!(
                    "    Started:    {}",
                    call.created_at.format("%Y-%m-%d %H:%M:%S")
                ));
                lines.push(format!("    Duration:   {}", format_duration(call.duration)));
            }
            Section::Transcript => {
                lines.push(String::new());
                lines.push("  Conversation".to_string());
                if let Some(conversation) = &detail.conversation {
                    for message in &conversation.messages {
                        lines.push(format!(
                            "    {}: {}",
                            role_label(message, use_color),
                            message.content
                        ));
                    }
                }
            }
            Section::Transcription => {
                lines.push(String::new());
                lines.push("  Transcription".to_string());
                if let Some(text) = &call.transcription {
                    lines.push(format!("    {text}"));
                }
            }
            Section::Status => {
                lines.push(String::new());
                lines.push(format!("  Status: {}", call_status(&call.status, use_color)));
                lines.push(format!("    Provider id: {}", call.provider_call_id));
                lines.push(format!(
                    "    Updated:     {}",
                    call.updated_at.format("%Y-%m-%d %H:%M:%S")
                ));
            }
            Section::Analysis => {
                lines.push(String::new());
                lines.push("  Analysis".to_string());
                if let Some(conversation) = &detail.conversation {
                    if let Some(summary) = &conversation.summary {
                        lines.push(format!("    Summary:    {summary}"));
                    }
                    if let Some(intent) = &conversation.intent {
                        lines.push(format!("    Intent:     {intent}"));
                    }
                    if let Some(sentiment) = &conversation.sentiment {
                        lines.push(format!("    Sentiment:  {sentiment}"));
                    }
                }
            }
            Section::AudioPlayer => {
                lines.push(String::new());
                if let Some(url) = &call.recording_url {
                    lines.push(format!("  Recording: {url}"));
                }
            }
        }
    }
    finish(lines)
}

fn voice_row(profile: &VoiceProfile, use_color: bool) -> String {
    let active = match (profile.is_active, use_color) {
        (true, true) => "active".green().to_string(),
        (true, false) => "active".to_string(),
        (false, true) => "inactive".dimmed().to_string(),
        (false, false) => "inactive".to_string(),
    };
    let mut row = format!(
        "    {}  {}  {} sample(s)  {active}",
        profile.id,
        profile.name,
        profile.sample_audio_urls.len()
    );
    if let Some(description) = &profile.description {
        row.push_str(&format!("\n      {description}"));
    }
    row
}

pub fn render_voices(state: &VoicesState, use_color: bool) -> String {
    let mut lines = header("Voice profiles");
    match &state.status {
        LoadStatus::Failed(message) => {
            lines.push(format!("    {} {message}", fail_marker(use_color)));
        }
        _ if state.profiles.is_empty() => {
            lines.push("    No voice profiles yet".to_string());
            lines.push(String::new());
            lines.push(
                "  Create one with: callboard voices create --name <NAME> <FILES>...".to_string(),
            );
        }
        _ => lines.extend(state.profiles.iter().map(|p| voice_row(p, use_color))),
    }
    finish(lines)
}

pub fn render_notifications(notifications: &[Notification], use_color: bool) -> String {
    notifications
        .iter()
        .map(|n| match n {
            Notification::Success(text) => format!("  {} {text}", ok_marker(use_color)),
            Notification::Error(text) => format!("  {} {text}", fail_marker(use_color)),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use callboard_test_utils::fixtures;
    use callboard_views::{CallDetail, DashboardData};

    #[test]
    fn durations() {
        assert_eq!(format_duration(Some(93)), "1m 33s");
        assert_eq!(format_duration(Some(42)), "42s");
        assert_eq!(format_duration(None), "-");
        assert_eq!(format_avg_duration(74.5), "1m 15s");
    }

    #[test]
    fn success_rate_is_a_percentage() {
        assert_eq!(format_rate(0.875), "87.5%");
        assert_eq!(format_rate(0.0), "0.0%");
    }

    #[test]
    fn plain_dashboard() {
        let view = DashboardView::Ready(DashboardData {
            stats: fixtures::stats(),
            recent_calls: fixtures::calls(2),
        });
        let out = render_dashboard(&view, false);
        assert!(out.contains("Total calls:   45"));
        assert!(out.contains("Success rate:  90.0%"));
        assert!(out.contains("+34600000001 -> +34910000000"));
        assert!(!out.contains('\u{1b}'), "plain output has no escape codes");
    }

    #[test]
    fn failed_dashboard_offers_retry() {
        let view = DashboardView::Failed {
            message: "The server failed to process the request.".into(),
        };
        let out = render_dashboard(&view, false);
        assert!(out.contains("[FAIL] The server failed"));
        assert!(out.contains("Retry with"));
        assert!(!out.contains("Total calls"));
    }

    #[test]
    fn call_detail_not_found_links_back() {
        let view = CallDetailView::NotFound {
            message: "Call not found".into(),
        };
        let out = render_call_detail(&view, false);
        assert!(out.contains("[FAIL] Call not found"));
        assert!(out.contains("Back to list"));
    }

    #[test]
    fn call_detail_without_conversation_has_no_analysis() {
        let view = CallDetailView::Ready(CallDetail {
            call: fixtures::call(3),
            conversation: None,
        });
        let out = render_call_detail(&view, false);
        assert!(out.contains("Status: completed"));
        assert!(!out.contains("Conversation"));
        assert!(!out.contains("Analysis"));
    }

    #[test]
    fn call_detail_transcript_keeps_message_order() {
        let call = fixtures::call(3);
        let view = CallDetailView::Ready(CallDetail {
            conversation: Some(fixtures::conversation(call.id)),
            call,
        });
        let out = render_call_detail(&view, false);
        let assistant = out.find("Assistant: Buenos días").unwrap();
        let caller = out.find("Caller: Quería reservar").unwrap();
        assert!(assistant < caller);
        assert!(out.contains("Intent:     booking"));
    }

    #[test]
    fn notifications_use_markers() {
        let out = render_notifications(
            &[
                Notification::Success("Voice \"A\" created".into()),
                Notification::Error("boom".into()),
            ],
            false,
        );
        assert_eq!(out, "  [OK] Voice \"A\" created\n  [FAIL] boom");
    }
}
