//! Handler and router error types.

use thiserror::Error;

use crate::action::WebhookAction;

/// Errors returned by a handler's `handle` method.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HandlerError {
    /// The handler refused the payload (bad input, unknown entity, …).
    #[error("handler rejected request: {0}")]
    Rejected(String),

    /// Forwarding to the automation engine failed.
    #[error("dispatch failed: {0}")]
    Dispatch(String),
}

/// Errors produced by [`crate::WebhookRouter::route`].
#[derive(Debug, Error)]
pub enum WebhookError {
    /// Nothing is bound to this action. A deployment defect, not a caller error.
    #[error("no handler registered for action '{0}'")]
    HandlerNotRegistered(WebhookAction),

    /// A handler was reached with a payload of another action.
    #[error("handler for '{expected}' received a '{got}' payload")]
    PayloadMismatch {
        expected: WebhookAction,
        got: WebhookAction,
    },

    #[error(transparent)]
    Handler(#[from] HandlerError),
}

impl WebhookError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::HandlerNotRegistered(_) => "HANDLER_NOT_REGISTERED",
            Self::PayloadMismatch { .. } => "PAYLOAD_MISMATCH",
            Self::Handler(HandlerError::Rejected(_)) => "HANDLER_REJECTED",
            Self::Handler(HandlerError::Dispatch(_)) => "DISPATCH_FAILED",
        }
    }
}
