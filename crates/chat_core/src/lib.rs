//! chat_core - Core types for the chat client
//!
//! This crate provides the foundational types used across the chat crates:
//! - `message` - Message and Sender
//! - `transcript` - Append-only message sequence
//! - `config` - Endpoint configuration
//! - `paths` - App data directory helpers

pub mod config;
pub mod message;
pub mod paths;
pub mod transcript;

// Re-export commonly used types
pub use config::Config;
pub use message::{Message, Sender};
pub use transcript::Transcript;
