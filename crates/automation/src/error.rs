//! Outbound dispatch errors.

use thiserror::Error;

use webhooks::WebhookAction;

/// A call to the automation engine could not be made or was refused.
///
/// Callers on the fire-and-forget path log these and carry on; they never
/// undo a committed status change.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No trigger URL is configured.
    #[error("automation webhook URL is not configured (action '{0}')")]
    NotConfigured(WebhookAction),

    #[error("invalid automation config: {0}")]
    InvalidConfig(String),

    /// Network failure, timeout, or client construction error.
    #[error("automation request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The engine answered with a non-2xx status.
    #[error("automation engine returned {status}: {body}")]
    Status { status: u16, body: String },
}
