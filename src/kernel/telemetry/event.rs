use serde::{Deserialize, Serialize};

use crate::dispatcher::types::Outcome;

// Allowed: sequence numbers, status codes, tick counts, enums
// Forbidden: input text, response bodies, transport error messages

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TelemetryEvent {
    RequestIssued {
        seq: u64,
    },

    RequestCompleted {
        seq: u64,
        outcome: OutcomeKind,
        round_trip_ticks: u64,
        /// Whether the output element was written.
        applied: bool,
    },

    /// A completion arrived after a newer request was issued and was dropped.
    CompletionDiscarded {
        seq: u64,
        round_trip_ticks: u64,
    },

    SessionSummary {
        duration_ticks: u64,
        issued: u64,
        completed: u64,
        discarded: u64,
        still_waiting: u64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomeKind {
    Success,
    ValidationError,
    UnexpectedStatus(u16),
    TransportError,
}

impl From<&Outcome> for OutcomeKind {
    fn from(outcome: &Outcome) -> Self {
        match outcome {
            Outcome::Success(_) => OutcomeKind::Success, // Body STRIPPED
            Outcome::ValidationError => OutcomeKind::ValidationError,
            Outcome::UnexpectedStatus(code) => OutcomeKind::UnexpectedStatus(*code),
            Outcome::TransportError(_) => OutcomeKind::TransportError, // Reason STRIPPED
        }
    }
}
