//! Durable storage for the API key.
//!
//! At most one key is stored at a time. The value is opaque to this crate;
//! nothing here validates it or checks it for expiry.

pub mod error;
pub mod store;

pub use error::{CredentialError, Result};
pub use store::{CredentialStore, FileCredentialStore, MemoryCredentialStore};
