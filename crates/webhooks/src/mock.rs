//! `MockHandler`: a test double for `ActionHandler`.
//!
//! Implements the handler trait for every payload type, records each payload
//! it sees as JSON, and returns a programmer-specified result. Clones share
//! the call log, so keep one clone for assertions and register another.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, Mutex};

use crate::action::ActionPayload;
use crate::traits::ActionHandler;
use crate::HandlerError;

/// What the mock does when called.
#[derive(Debug, Clone)]
pub enum MockBehaviour {
    ReturnValue(Value),
    Fail(HandlerError),
}

#[derive(Debug, Clone)]
pub struct MockHandler {
    pub behaviour: MockBehaviour,
    calls: Arc<Mutex<Vec<Value>>>,
}

impl MockHandler {
    /// A mock that always succeeds with `value`.
    pub fn returning(value: Value) -> Self {
        Self {
            behaviour: MockBehaviour::ReturnValue(value),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A mock that always fails with `error`.
    pub fn failing(error: HandlerError) -> Self {
        Self {
            behaviour: MockBehaviour::Fail(error),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or(0)
    }

    /// Payloads seen so far, in call order.
    pub fn calls(&self) -> Vec<Value> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl<P: ActionPayload> ActionHandler<P> for MockHandler {
    async fn handle(&self, payload: P) -> Result<Value, HandlerError> {
        let recorded = serde_json::to_value(&payload).unwrap_or(Value::Null);
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(recorded);
        }

        match &self.behaviour {
            MockBehaviour::ReturnValue(v) => Ok(v.clone()),
            MockBehaviour::Fail(e)        => Err(e.clone()),
        }
    }
}
