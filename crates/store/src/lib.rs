//! `store` crate: persistence seam for generated posts.
//!
//! The workflow never writes anything itself; the API reads the current
//! post through [`PostStore`], validates, and writes the result back.

pub mod error;
pub mod repository;
pub mod memory;

pub use error::StoreError;
pub use repository::PostStore;
pub use memory::MemoryStore;
