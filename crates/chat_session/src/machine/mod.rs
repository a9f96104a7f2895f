//! State machine module
//!
//! Contains the FSM implementation for the exchange lifecycle.

mod events;
mod states;
mod transitions;

pub use events::ExchangeEvent;
pub use states::ExchangeState;
pub use transitions::{StateMachine, StateTransition};
