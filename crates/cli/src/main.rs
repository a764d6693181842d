//! `content-workflow` CLI entry-point.
//!
//! Available sub-commands:
//! - `serve`       start the API server over an in-memory store.
//! - `transitions` print the transition table with roles and labels.
//! - `check`       ask the validator whether a role may take an edge.
//! - `trigger`     send one webhook request to the automation engine.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use automation::{AutomationClient, AutomationConfig};
use store::MemoryStore;
use webhooks::{WebhookRequest, WebhookRouter};
use workflow::{
    allowed_roles, label_for, validate_transition, ContentStatus, UserRole, TRANSITION_TABLE,
};

#[derive(Parser)]
#[command(
    name = "content-workflow",
    about = "Content status workflow and automation webhook service",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the REST API server.
    Serve {
        #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8080")]
        bind: String,
    },
    /// Print every permitted transition with the roles allowed to take it.
    Transitions,
    /// Check a single transition; exits non-zero when it is denied.
    Check {
        #[arg(long)]
        from: ContentStatus,
        #[arg(long)]
        to: ContentStatus,
        /// Acting role. Omit to check as an anonymous caller.
        #[arg(long)]
        role: Option<UserRole>,
    },
    /// Send a webhook request, e.g. '{"action":"company-research","companyId":"c1"}'.
    Trigger {
        /// The tagged request as JSON.
        request: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { bind } => {
            let client = AutomationClient::new(AutomationConfig::from_env()?)?;
            if !client.is_configured() {
                info!("AUTOMATION_WEBHOOK_URL not set; outbound automation calls are disabled");
            }

            let mut router = WebhookRouter::new();
            automation::install(&mut router, &client);

            let state = api::AppState::new(Arc::new(MemoryStore::new()), Arc::new(router));
            info!("Starting API server on {bind}");
            api::serve(&bind, state)
                .await
                .with_context(|| format!("server on {bind} stopped"))?;
        }
        Command::Transitions => {
            for edge in TRANSITION_TABLE {
                let roles: Vec<&str> = allowed_roles(edge.from, edge.to)
                    .iter()
                    .map(UserRole::as_str)
                    .collect();
                println!(
                    "{:<24} {:<18} {}",
                    edge.to_string(),
                    label_for(edge.from, edge.to),
                    roles.join(", ")
                );
            }
        }
        Command::Check { from, to, role } => {
            let result = validate_transition(from, to, role);
            if result.valid {
                println!("allowed: {from} → {to}");
            } else {
                eprintln!("denied: {}", result.reason.unwrap_or_default());
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Trigger { request } => {
            let request: WebhookRequest =
                serde_json::from_str(&request).context("invalid webhook request JSON")?;
            let client = AutomationClient::new(AutomationConfig::from_env()?)?;
            let outcome = client.dispatch(request).await?;
            println!("{}", serde_json::to_string(&outcome)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}
