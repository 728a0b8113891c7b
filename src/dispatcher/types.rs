use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of one invocation. `seq` is monotonic per reactor and orders invocations;
/// `correlation` ties log lines for the same request together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RequestToken {
    pub seq: u64,
    pub correlation: Uuid,
}

impl RequestToken {
    pub fn new(seq: u64) -> Self {
        Self {
            seq,
            correlation: Uuid::new_v4(),
        }
    }
}

/// Terminal result of a request, one variant per way it can end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// HTTP 200. The body is opaque and kept verbatim.
    Success(String),
    /// HTTP 400. The body is ignored.
    ValidationError,
    /// Any other HTTP status.
    UnexpectedStatus(u16),
    /// No response: connection failure, timeout, unreadable body.
    TransportError(String),
}

impl Outcome {
    pub fn from_response(status: u16, body: String) -> Self {
        match status {
            200 => Outcome::Success(body),
            400 => Outcome::ValidationError,
            other => Outcome::UnexpectedStatus(other),
        }
    }
}

/// Delivered to the event loop exactly once per dispatched request.
#[derive(Debug, Clone)]
pub struct Completion {
    pub token: RequestToken,
    pub outcome: Outcome,
}
