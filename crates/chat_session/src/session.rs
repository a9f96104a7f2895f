//! Chat session: owns the transcript and drives exchanges to completion.

use std::sync::Arc;

use chat_core::{Message, Transcript};
use credential_store::CredentialStore;
use gemini_client::CompletionClient;
use log::{debug, error, info};
use tokio::sync::Mutex;

use crate::machine::{ExchangeEvent, ExchangeState, StateMachine};

/// Outcome of a submit call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    /// The exchange ran to completion; a user entry and a bot entry were
    /// appended, in that order.
    Exchanged,
    /// The input was empty after trimming; nothing was appended.
    Ignored,
}

/// Shared machine plus the count of unresolved exchanges. The machine only
/// returns to Idle when the last in-flight exchange resolves.
struct ExchangeTracker {
    machine: StateMachine,
    in_flight: usize,
}

impl ExchangeTracker {
    fn new() -> Self {
        Self {
            machine: StateMachine::new(),
            in_flight: 0,
        }
    }

    fn accept(&mut self) {
        self.in_flight += 1;
        self.machine.handle_event(ExchangeEvent::SubmitAccepted);
    }

    fn resolve(&mut self, event: ExchangeEvent) {
        self.in_flight = self.in_flight.saturating_sub(1);
        if self.in_flight == 0 {
            self.machine.handle_event(event);
        } else {
            debug!(
                "Exchange resolved with {} still awaiting a reply",
                self.in_flight
            );
        }
    }
}

/// One chat session: transcript, credential source, and completion backend.
///
/// `submit` takes `&self` and is not serialized. Two overlapping calls
/// interleave their appends; each call still appends its own user entry
/// before its own bot entry. Locks guard individual appends and are never
/// held across an await.
pub struct ChatSession {
    transcript: Mutex<Transcript>,
    tracker: Mutex<ExchangeTracker>,
    client: Arc<dyn CompletionClient>,
    credentials: Arc<dyn CredentialStore>,
}

impl ChatSession {
    pub fn new(client: Arc<dyn CompletionClient>, credentials: Arc<dyn CredentialStore>) -> Self {
        Self {
            transcript: Mutex::new(Transcript::new()),
            tracker: Mutex::new(ExchangeTracker::new()),
            client,
            credentials,
        }
    }

    /// Submit one utterance and run the exchange to completion.
    ///
    /// Empty or whitespace-only input is ignored. Otherwise the user entry is
    /// appended verbatim before the request goes out, and exactly one bot
    /// entry is appended when the request resolves. Failures become
    /// `Error: ...` entries; they never propagate out of this call.
    pub async fn submit(&self, utterance: &str) -> SubmitStatus {
        if utterance.trim().is_empty() {
            return SubmitStatus::Ignored;
        }

        debug!("Accepted submission of {} chars", utterance.len());
        self.transcript.lock().await.append(Message::user(utterance));
        self.tracker.lock().await.accept();

        // Absent credential is sent as an empty key; the service rejects it,
        // not the client.
        let api_key = self.credentials.get().await.unwrap_or_default();

        match self.client.generate_reply(&api_key, utterance).await {
            Ok(reply) => {
                info!("Exchange resolved with a reply of {} chars", reply.len());
                self.transcript.lock().await.append(Message::bot(reply));
                self.tracker
                    .lock()
                    .await
                    .resolve(ExchangeEvent::ReplyReceived);
            }
            Err(e) => {
                error!("Exchange failed: {e}");
                self.transcript
                    .lock()
                    .await
                    .append(Message::bot(format!("Error: {e}")));
                self.tracker.lock().await.resolve(ExchangeEvent::ExchangeFailed {
                    error: e.to_string(),
                });
            }
        }

        SubmitStatus::Exchanged
    }

    /// Ordered copy of every transcript entry appended so far.
    pub async fn snapshot(&self) -> Vec<Message> {
        self.transcript.lock().await.snapshot()
    }

    /// Aggregate exchange state: `AwaitingResponse` while any submission is
    /// unresolved, `Idle` otherwise.
    pub async fn state(&self) -> ExchangeState {
        self.tracker.lock().await.machine.state().clone()
    }

    /// Number of submissions still awaiting their reply.
    pub async fn in_flight(&self) -> usize {
        self.tracker.lock().await.in_flight
    }
}
