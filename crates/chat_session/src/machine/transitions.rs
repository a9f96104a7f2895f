//! State transitions - FSM transition logic
//!
//! Implements the state machine that handles event-driven state transitions.

use super::events::ExchangeEvent;
use super::states::ExchangeState;

/// Represents a state transition result.
#[derive(Debug, Clone)]
pub struct StateTransition {
    /// The state before the transition.
    pub from: ExchangeState,
    /// The state after the transition.
    pub to: ExchangeState,
    /// The event that triggered the transition.
    pub event: ExchangeEvent,
    /// Whether the state actually changed.
    pub changed: bool,
}

/// State machine for the exchange lifecycle.
#[derive(Debug, Clone)]
pub struct StateMachine {
    /// Current state.
    current_state: ExchangeState,
    /// Transition history (limited).
    history: Vec<StateTransition>,
    /// Max history entries to keep.
    max_history: usize,
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl StateMachine {
    /// Create a new state machine in Idle state.
    pub fn new() -> Self {
        Self {
            current_state: ExchangeState::Idle,
            history: Vec::new(),
            max_history: 50,
        }
    }

    /// Create a state machine with a specific initial state.
    pub fn with_state(state: ExchangeState) -> Self {
        Self {
            current_state: state,
            history: Vec::new(),
            max_history: 50,
        }
    }

    /// Get the current state.
    pub fn state(&self) -> &ExchangeState {
        &self.current_state
    }

    /// Get the transition history.
    pub fn history(&self) -> &[StateTransition] {
        &self.history
    }

    /// Handle an event and transition to a new state.
    pub fn handle_event(&mut self, event: ExchangeEvent) -> StateTransition {
        let old_state = self.current_state.clone();
        let new_state = self.compute_next_state(&old_state, &event);
        let changed = old_state != new_state;

        if changed {
            log::info!("Exchange state: {:?} -> {:?}", old_state, new_state);
        } else {
            log::debug!("Exchange state unchanged: {:?} on {:?}", old_state, event);
        }

        self.current_state = new_state.clone();

        let transition = StateTransition {
            from: old_state,
            to: new_state,
            event,
            changed,
        };

        // Add to history
        self.history.push(transition.clone());
        if self.history.len() > self.max_history {
            self.history.remove(0);
        }

        transition
    }

    /// Compute the next state given current state and event.
    fn compute_next_state(&self, state: &ExchangeState, event: &ExchangeEvent) -> ExchangeState {
        use ExchangeEvent::*;
        use ExchangeState::*;

        match (state, event) {
            (Idle, SubmitAccepted) => AwaitingResponse,

            // Resolution is unconditional; failure has no terminal state.
            (AwaitingResponse, ReplyReceived) => Idle,
            (AwaitingResponse, ExchangeFailed { .. }) => Idle,

            // Default: no transition
            _ => state.clone(),
        }
    }

    /// Check if a transition is valid without executing it.
    pub fn can_transition(&self, event: &ExchangeEvent) -> bool {
        let next = self.compute_next_state(&self.current_state, event);
        next != self.current_state
    }

    /// Reset to Idle state.
    pub fn reset(&mut self) {
        self.current_state = ExchangeState::Idle;
    }
}
