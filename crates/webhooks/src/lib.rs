//! `webhooks` crate: typed webhook actions and the router that binds each
//! action to exactly one handler.
//!
//! Handlers implement [`ActionHandler`] for the payload they accept; the
//! router erases them behind one registry keyed by [`WebhookAction`].

pub mod action;
pub mod error;
pub mod traits;
pub mod router;
pub mod mock;

pub use action::{
    ActionPayload, CompanyResearch, GenerateContent, ScrapeReferencePost, WebhookAction,
    WebhookRequest,
};
pub use error::{HandlerError, WebhookError};
pub use traits::ActionHandler;
pub use router::WebhookRouter;
