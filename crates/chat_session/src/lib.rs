//! Session layer: transcript ownership and the exchange lifecycle.
//!
//! `ChatSession` drives one exchange per submission: append the user entry,
//! call the completion backend, append the reply or a synthesized error
//! entry. Overlapping submissions are allowed and may interleave their
//! transcript entries.

pub mod machine;
pub mod session;

pub use machine::{ExchangeEvent, ExchangeState, StateMachine, StateTransition};
pub use session::{ChatSession, SubmitStatus};
