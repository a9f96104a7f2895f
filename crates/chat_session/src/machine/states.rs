//! Exchange states - Defines the states of an exchange lifecycle

use serde::{Deserialize, Serialize};

/// Defines the possible states of an exchange.
///
/// An exchange enters `AwaitingResponse` when a submission is accepted and
/// returns to `Idle` when the request resolves, successfully or not. There
/// is no failed terminal state; a failure becomes a transcript entry.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExchangeState {
    /// Ready for input.
    Idle,

    /// A request is in flight, awaiting the service reply.
    AwaitingResponse,
}

impl Default for ExchangeState {
    fn default() -> Self {
        ExchangeState::Idle
    }
}

impl ExchangeState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Get a human-readable description of the current state.
    pub fn description(&self) -> &str {
        match self {
            Self::Idle => "Ready for input",
            Self::AwaitingResponse => "Waiting for reply",
        }
    }
}
