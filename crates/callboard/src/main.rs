// SPDX-FileCopyrightText: 2026 Callboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Callboard - operator console for a voice-assistant backend.
//!
//! This is the binary entry point. It loads configuration, installs the
//! tracing subscriber, fills the credential slot and dispatches to the
//! console command handlers.

mod audio;
mod console;
mod render;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use callboard_client::ApiClient;
use callboard_config::CallboardConfig;
use callboard_core::{CredentialSlot, OutboundCallRequest};
use clap::{Parser, Subcommand};
use secrecy::SecretString;
use uuid::Uuid;

use crate::console::{Backend, CommandResult, Console};

/// Callboard - operator console for a voice-assistant backend.
#[derive(Parser, Debug)]
#[command(name = "callboard", version, about, long_about = None)]
struct Cli {
    /// Load this configuration file instead of the standard locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Bearer token for this invocation; overrides `api.token`.
    #[arg(long, global = true)]
    token: Option<String>,

    /// Disable colored output.
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check backend liveness.
    Health,
    /// Show aggregate statistics and the most recent calls.
    Dashboard,
    /// Browse calls and place outbound calls.
    Calls {
        #[command(subcommand)]
        action: CallsCommand,
    },
    /// Manage voice profiles.
    Voices {
        #[command(subcommand)]
        action: VoicesCommand,
    },
    /// Print the effective configuration.
    Config,
}

#[derive(Subcommand, Debug)]
enum CallsCommand {
    /// List one page of calls.
    List {
        /// Page number, starting at 1.
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
        /// Narrow the page to calls whose numbers or id contain this text.
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one call with its conversation.
    Show { id: Uuid },
    /// Place an outbound call.
    Dial {
        /// Destination number.
        to: String,
        /// Caller id override.
        #[arg(long)]
        from: Option<String>,
        /// Initial message to speak.
        #[arg(long)]
        message: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum VoicesCommand {
    /// List voice profiles.
    List,
    /// Clone a new voice from audio samples.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        /// Audio sample files.
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Synthesize test audio with a voice profile.
    Test { id: Uuid, text: String },
    /// Delete a voice profile.
    Delete {
        id: Uuid,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => callboard_config::load_and_validate_path(path),
        None => callboard_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            callboard_config::render_errors(&errors);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.log.level);

    match run(cli, config).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::debug!(error = %e, kind = %e.kind(), "command failed");
            eprintln!("error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, config: CallboardConfig) -> CommandResult {
    let (sign_in, credentials) = CredentialSlot::new();
    if let Some(token) = cli.token.clone().or_else(|| config.api.token.clone()) {
        sign_in.sign_in(SecretString::from(token));
    }

    let client = ApiClient::from_config(&config, Arc::new(credentials))?;
    tracing::debug!(base_url = client.base_url(), "api client ready");

    let use_color = !cli.plain && std::io::stdout().is_terminal();
    let console = Console::new(Backend::shared(Arc::new(client)), config, use_color);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Health => console.health(&mut out).await,
        Commands::Dashboard => console.dashboard(&mut out).await,
        Commands::Config => console.show_config(&mut out),
        Commands::Calls { action } => match action {
            CallsCommand::List { page, search } => console.calls_list(page, search, &mut out).await,
            CallsCommand::Show { id } => console.call_show(id, &mut out).await,
            CallsCommand::Dial { to, from, message } => {
                let request = OutboundCallRequest {
                    to_number: to,
                    from_number: from,
                    message,
                };
                console.call_dial(request, &mut out).await
            }
        },
        Commands::Voices { action } => match action {
            VoicesCommand::List => console.voices_list(&mut out).await,
            VoicesCommand::Create {
                name,
                description,
                files,
            } => console.voice_create(name, description, &files, &mut out).await,
            VoicesCommand::Test { id, text } => console.voice_test(id, &text, &mut out).await,
            VoicesCommand::Delete { id, yes } => {
                let stdin = std::io::stdin();
                let mut input = stdin.lock();
                console.voice_delete(id, yes, &mut input, &mut out).await
            }
        },
    }
}

/// Installs the tracing subscriber. Logs go to stderr so rendered views on
/// stdout stay clean; `RUST_LOG` overrides the configured level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("callboard={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
