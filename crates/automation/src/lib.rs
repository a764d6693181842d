//! `automation` crate: the outbound bridge to the external workflow
//! automation engine that performs AI research and content generation.

pub mod config;
pub mod error;
pub mod client;
pub mod forwarding;

pub use config::AutomationConfig;
pub use error::DispatchError;
pub use client::{AutomationClient, Dispatch, SECRET_HEADER};
pub use forwarding::{ForwardingHandler, install};

#[cfg(test)]
mod test_engine;
