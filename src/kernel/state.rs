use std::collections::HashMap;

use tracing::warn;

use super::lifecycle::{PhaseRequest, RequestLifecycle, RequestPhase};
use super::time::Tick;
use crate::dispatcher::types::RequestToken;
use crate::outputs::text::TextOutput;

pub const INPUT_ELEMENT_ID: &str = "textToAnalyze";

/// Strict state delta. This is the ONLY way state mutates.
#[derive(Debug, Clone)]
pub enum StateDelta {
    InputEdited(String),
    RequestIssued(RequestToken),
    RequestSettled(RequestToken),
    OutputReplaced { token: RequestToken, content: String },
    Tick(Tick),
}

#[derive(Debug, Clone)]
pub struct InputField {
    pub id: String,
    pub value: String,
}

impl Default for InputField {
    fn default() -> Self {
        Self {
            id: INPUT_ELEMENT_ID.to_string(),
            value: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TrackedRequest {
    pub phase: RequestPhase,
    pub issued_at: Tick,
}

/// The page as the dispatcher sees it: one input field, one output element,
/// and the requests still waiting on a completion. Settled requests are
/// dropped; their round trips live in telemetry.
#[derive(Debug, Clone, Default)]
pub struct PageState {
    input: InputField,
    output: TextOutput,
    requests: HashMap<RequestToken, TrackedRequest>,
    latest_token: Option<RequestToken>,
    // Monotonic version, bumped on every reduction
    pub version: u64,
    pub last_tick: Tick,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pure reduction: State + Delta -> Mutated State
    pub fn reduce(&mut self, delta: StateDelta) {
        self.version += 1;

        match delta {
            StateDelta::Tick(t) => {
                self.last_tick = t;
            }
            StateDelta::InputEdited(value) => {
                self.input.value = value;
            }
            StateDelta::RequestIssued(token) => {
                if self.requests.contains_key(&token) {
                    warn!(seq = token.seq, "Request already issued");
                    return;
                }
                let Some(phase) = RequestLifecycle::transition(RequestPhase::Idle, PhaseRequest::Dispatched) else {
                    return;
                };
                self.requests.insert(
                    token,
                    TrackedRequest {
                        phase,
                        issued_at: self.last_tick,
                    },
                );
                if self.latest_token.map_or(true, |latest| token.seq > latest.seq) {
                    self.latest_token = Some(token);
                }
            }
            StateDelta::RequestSettled(token) => {
                let Some(phase) = self.requests.get(&token).map(|tracked| tracked.phase) else {
                    warn!(seq = token.seq, "Settle for unknown request ignored");
                    return;
                };
                match RequestLifecycle::transition(phase, PhaseRequest::Completed) {
                    // Done is terminal, nothing left to track
                    Some(_) => {
                        self.requests.remove(&token);
                    }
                    None => warn!(seq = token.seq, phase = ?phase, "Invalid request transition ignored"),
                }
            }
            StateDelta::OutputReplaced { token, content } => {
                self.output.replace(token, content);
            }
        }
    }

    // Read-only accessors

    pub fn input_value(&self) -> &str {
        &self.input.value
    }

    pub fn output(&self) -> &TextOutput {
        &self.output
    }

    pub fn latest_token(&self) -> Option<RequestToken> {
        self.latest_token
    }

    pub fn request(&self, token: &RequestToken) -> Option<&TrackedRequest> {
        self.requests.get(token)
    }

    pub fn phase(&self, token: &RequestToken) -> Option<RequestPhase> {
        self.requests.get(token).map(|tracked| tracked.phase)
    }

    pub fn has_in_flight(&self) -> bool {
        !self.requests.is_empty()
    }

    /// Number of requests currently tracked. Only waiting requests are kept.
    pub fn tracked_requests(&self) -> usize {
        self.requests.len()
    }

    /// Tokens still waiting on a completion, oldest first.
    pub fn in_flight(&self) -> Vec<RequestToken> {
        let mut waiting: Vec<RequestToken> = self
            .requests
            .iter()
            .filter(|(_, tracked)| tracked.phase == RequestPhase::Waiting)
            .map(|(token, _)| *token)
            .collect();
        waiting.sort();
        waiting
    }
}
