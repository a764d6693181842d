//! Typed error type for the store crate.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("post {0} not found")]
    NotFound(Uuid),

    #[error("post {0} already exists")]
    AlreadyExists(Uuid),

    /// The row changed between read and write.
    #[error("post {0} was modified concurrently")]
    Conflict(Uuid),
}
