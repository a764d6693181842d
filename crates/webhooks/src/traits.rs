//! The `ActionHandler` trait: the contract every webhook handler fulfils.

use async_trait::async_trait;
use serde_json::Value;

use crate::action::ActionPayload;
use crate::HandlerError;

/// Handles requests for the single action `P` belongs to.
///
/// Typing the handler by payload means the router can never hand it a
/// payload of another shape.
#[async_trait]
pub trait ActionHandler<P: ActionPayload>: Send + Sync {
    /// Process `payload` and return the JSON result for the caller.
    async fn handle(&self, payload: P) -> Result<Value, HandlerError>;
}
