// SPDX-FileCopyrightText: 2026 Callboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command handlers for the operator console.
//!
//! Each handler drives one view controller, renders the resulting state to
//! `out` and reports whether the view ended in a usable state. Failures the
//! view already shows are not returned as errors.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use callboard_config::CallboardConfig;
use callboard_core::{
    CallboardError, CallsApi, DashboardApi, HealthApi, HealthStatus, OutboundCallRequest,
    VoiceUpload, VoicesApi,
};
use callboard_views::{
    CallDetailController, CallDetailView, CallsListController, DashboardController, DashboardView,
    LoadOutcome, VoicesController,
};
use tracing::debug;
use uuid::Uuid;

use crate::audio;
use crate::render;

/// Whether the command left its view in a usable state.
pub type CommandResult = Result<bool, CallboardError>;

fn io_error(e: std::io::Error) -> CallboardError {
    CallboardError::Internal(format!("failed to write output: {e}"))
}

/// Backend handles, one per resource family.
#[derive(Clone)]
pub struct Backend {
    pub calls: Arc<dyn CallsApi>,
    pub voices: Arc<dyn VoicesApi>,
    pub dashboard: Arc<dyn DashboardApi>,
    pub health: Arc<dyn HealthApi>,
}

impl Backend {
    /// Uses one implementation for every family.
    pub fn shared<B>(backend: Arc<B>) -> Self
    where
        B: CallsApi + VoicesApi + DashboardApi + HealthApi,
    {
        Self {
            calls: backend.clone(),
            voices: backend.clone(),
            dashboard: backend.clone(),
            health: backend,
        }
    }
}

pub struct Console {
    backend: Backend,
    config: CallboardConfig,
    use_color: bool,
}

impl Console {
    pub fn new(backend: Backend, config: CallboardConfig, use_color: bool) -> Self {
        Self {
            backend,
            config,
            use_color,
        }
    }

    pub async fn health(&self, out: &mut dyn Write) -> CommandResult {
        match self.backend.health.check().await {
            Ok(status) => {
                write!(out, "{}", render::render_health(&status, self.use_color))
                    .map_err(io_error)?;
                Ok(status == HealthStatus::Healthy)
            }
            Err(e) => {
                let status = HealthStatus::Unhealthy(e.user_message());
                write!(out, "{}", render::render_health(&status, self.use_color))
                    .map_err(io_error)?;
                Ok(false)
            }
        }
    }

    pub async fn dashboard(&self, out: &mut dyn Write) -> CommandResult {
        let controller = DashboardController::new(
            self.backend.dashboard.clone(),
            self.config.views.recent_calls_limit,
        );
        controller.load().await;
        let view = controller.view().await;
        write!(out, "{}", render::render_dashboard(&view, self.use_color)).map_err(io_error)?;
        Ok(matches!(view, DashboardView::Ready(_)))
    }

    pub async fn calls_list(
        &self,
        page: u32,
        search: Option<String>,
        out: &mut dyn Write,
    ) -> CommandResult {
        let controller =
            CallsListController::new(self.backend.calls.clone(), self.config.views.page_size);
        if let Some(term) = search {
            controller.set_search(term).await;
        }
        let outcome = controller.go_to_page(page).await;
        let state = controller.snapshot().await;
        write!(out, "{}", render::render_calls_list(&state, self.use_color)).map_err(io_error)?;
        Ok(outcome == LoadOutcome::Applied)
    }

    pub async fn call_show(&self, id: Uuid, out: &mut dyn Write) -> CommandResult {
        let controller = CallDetailController::new(self.backend.calls.clone());
        controller.load(id).await;
        let view = controller.view().await;
        write!(out, "{}", render::render_call_detail(&view, self.use_color)).map_err(io_error)?;
        Ok(matches!(view, CallDetailView::Ready(_)))
    }

    pub async fn call_dial(
        &self,
        request: OutboundCallRequest,
        out: &mut dyn Write,
    ) -> CommandResult {
        let receipt = self.backend.calls.make_outbound_call(&request).await?;
        writeln!(
            out,
            "  Call {} to {} {} (provider id {})",
            receipt.call_id, request.to_number, receipt.status, receipt.call_sid
        )
        .map_err(io_error)?;
        Ok(true)
    }

    pub async fn voices_list(&self, out: &mut dyn Write) -> CommandResult {
        let controller = VoicesController::new(self.backend.voices.clone());
        let outcome = controller.load().await;
        let state = controller.snapshot().await;
        write!(out, "{}", render::render_voices(&state, self.use_color)).map_err(io_error)?;
        Ok(outcome == LoadOutcome::Applied)
    }

    pub async fn voice_create(
        &self,
        name: String,
        description: Option<String>,
        files: &[PathBuf],
        out: &mut dyn Write,
    ) -> CommandResult {
        let files = audio::read_samples(files).await?;
        let controller = VoicesController::new(self.backend.voices.clone());
        controller.open_form().await;
        let result = controller
            .create(VoiceUpload {
                name,
                description,
                files,
            })
            .await;
        self.flush_notifications(&controller, out).await?;
        match result {
            Ok(profile) => {
                writeln!(out, "  Id: {}", profile.id).map_err(io_error)?;
                Ok(true)
            }
            Err(e @ CallboardError::Validation(_)) => Err(e),
            Err(_) => Ok(false),
        }
    }

    pub async fn voice_test(&self, id: Uuid, text: &str, out: &mut dyn Write) -> CommandResult {
        let controller = VoicesController::new(self.backend.voices.clone());
        let result = controller.test(id, text).await;
        self.flush_notifications(&controller, out).await?;
        match result {
            Ok(audio) => {
                let duration = audio
                    .duration_seconds
                    .map(|d| format!(" ({})", render::format_avg_duration(d)))
                    .unwrap_or_default();
                writeln!(out, "  Audio: {}{duration}", audio.audio_url).map_err(io_error)?;
                Ok(true)
            }
            Err(_) => Ok(false),
        }
    }

    /// Deletes after confirmation read from `input`, unless `assume_yes`.
    pub async fn voice_delete(
        &self,
        id: Uuid,
        assume_yes: bool,
        input: &mut dyn BufRead,
        out: &mut dyn Write,
    ) -> CommandResult {
        let controller = VoicesController::new(self.backend.voices.clone());
        if controller.load().await != LoadOutcome::Applied {
            let state = controller.snapshot().await;
            write!(out, "{}", render::render_voices(&state, self.use_color)).map_err(io_error)?;
            return Ok(false);
        }
        let pending = controller.request_delete(id).await?;
        if !assume_yes && !confirm(&pending.prompt(), input, out).map_err(io_error)? {
            debug!(voice_id = %id, "delete not confirmed");
            writeln!(out, "  Cancelled").map_err(io_error)?;
            return Ok(false);
        }
        let result = controller.delete(pending).await;
        self.flush_notifications(&controller, out).await?;
        Ok(result.is_ok())
    }

    /// Prints the effective configuration as TOML. The token is redacted.
    pub fn show_config(&self, out: &mut dyn Write) -> CommandResult {
        let mut config = self.config.clone();
        if config.api.token.is_some() {
            config.api.token = Some("<redacted>".to_string());
        }
        let rendered = toml::to_string_pretty(&config)
            .map_err(|e| CallboardError::Internal(format!("failed to render config: {e}")))?;
        write!(out, "{rendered}").map_err(io_error)?;
        Ok(true)
    }

    async fn flush_notifications(
        &self,
        controller: &VoicesController,
        out: &mut dyn Write,
    ) -> Result<(), CallboardError> {
        let notifications = controller.take_notifications().await;
        if !notifications.is_empty() {
            writeln!(
                out,
                "{}",
                render::render_notifications(&notifications, self.use_color)
            )
            .map_err(io_error)?;
        }
        Ok(())
    }
}

/// Asks a yes/no question; anything but `y`/`yes` is a no.
pub fn confirm(
    prompt: &str,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> std::io::Result<bool> {
    write!(out, "  {prompt} [y/N] ")?;
    out.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
