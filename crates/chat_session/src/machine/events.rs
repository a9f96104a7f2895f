//! Exchange events - Defines events that trigger state transitions

use serde::{Deserialize, Serialize};

/// Defines the events that can trigger state transitions in the FSM.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExchangeEvent {
    /// A non-empty submission was accepted and the user entry appended.
    SubmitAccepted,

    /// The service reply arrived and was appended.
    ReplyReceived,

    /// The request failed; an error entry was appended instead.
    ExchangeFailed { error: String },
}

impl ExchangeEvent {
    /// Check if this event ends an in-flight exchange.
    pub fn resolves_exchange(&self) -> bool {
        matches!(self, Self::ReplyReceived | Self::ExchangeFailed { .. })
    }
}
