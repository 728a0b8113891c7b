use serde::{Deserialize, Serialize};

/// Phase of a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RequestPhase {
    /// Token exists, nothing sent yet.
    #[default]
    Idle,
    /// Sent; completion handler not yet fired.
    Waiting,
    /// Terminal. No further transitions.
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseRequest {
    Dispatched,
    Completed,
}

pub struct RequestLifecycle;

impl RequestLifecycle {
    /// Pure function: (Current Phase, Request) -> New Phase
    /// Returns None if the transition is invalid. A second completion for the same
    /// request lands here and is rejected.
    pub fn transition(current: RequestPhase, request: PhaseRequest) -> Option<RequestPhase> {
        match (current, request) {
            (RequestPhase::Idle, PhaseRequest::Dispatched) => Some(RequestPhase::Waiting),
            (RequestPhase::Waiting, PhaseRequest::Completed) => Some(RequestPhase::Done),
            _ => None,
        }
    }
}
