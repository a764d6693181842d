//! Webhook action router.
//!
//! Build one [`WebhookRouter`] at startup, register a handler per action,
//! then share it behind an `Arc` with whatever boundary routes requests.
//! Registration takes `&mut self`, so it cannot race with routing.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, error, instrument};

use crate::action::{ActionPayload, WebhookAction, WebhookRequest};
use crate::traits::ActionHandler;
use crate::WebhookError;

// ---------------------------------------------------------------------------
// Type erasure
// ---------------------------------------------------------------------------

#[async_trait]
trait ErasedHandler: Send + Sync {
    async fn call(&self, request: WebhookRequest) -> Result<Value, WebhookError>;
}

struct Typed<P, H> {
    handler: H,
    _payload: PhantomData<fn(P)>,
}

#[async_trait]
impl<P, H> ErasedHandler for Typed<P, H>
where
    P: ActionPayload,
    H: ActionHandler<P>,
{
    async fn call(&self, request: WebhookRequest) -> Result<Value, WebhookError> {
        let got = request.action();
        let payload = P::from_request(request).ok_or(WebhookError::PayloadMismatch {
            expected: P::ACTION,
            got,
        })?;
        Ok(self.handler.handle(payload).await?)
    }
}

// ---------------------------------------------------------------------------
// WebhookRouter
// ---------------------------------------------------------------------------

/// Maps each [`WebhookAction`] to at most one handler.
#[derive(Default)]
pub struct WebhookRouter {
    handlers: HashMap<WebhookAction, Arc<dyn ErasedHandler>>,
}

impl WebhookRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `handler` to `P::ACTION`, replacing any earlier handler for it.
    pub fn register<P, H>(&mut self, handler: H) -> &mut Self
    where
        P: ActionPayload,
        H: ActionHandler<P> + 'static,
    {
        let erased: Arc<dyn ErasedHandler> = Arc::new(Typed {
            handler,
            _payload: PhantomData::<fn(P)>,
        });
        if self.handlers.insert(P::ACTION, erased).is_some() {
            debug!(action = %P::ACTION, "replaced existing webhook handler");
        }
        self
    }

    /// Dispatch `request` to its handler and return the handler's result as-is.
    ///
    /// # Errors
    /// - [`WebhookError::HandlerNotRegistered`] if nothing is bound to the action.
    /// - [`WebhookError::Handler`] with whatever the handler returned.
    #[instrument(skip(self, request), fields(action = %request.action(), subject = %request.subject_id()))]
    pub async fn route(&self, request: WebhookRequest) -> Result<Value, WebhookError> {
        let action = request.action();
        let Some(handler) = self.handlers.get(&action) else {
            error!(%action, "no handler registered for webhook action");
            return Err(WebhookError::HandlerNotRegistered(action));
        };
        handler.call(request).await
    }

    pub fn has_handler(&self, action: WebhookAction) -> bool {
        self.handlers.contains_key(&action)
    }

    pub fn registered_actions(&self) -> BTreeSet<WebhookAction> {
        self.handlers.keys().copied().collect()
    }
}

impl fmt::Debug for WebhookRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookRouter")
            .field("actions", &self.registered_actions())
            .finish()
    }
}
