//! Request telemetry.
//!
//! # PRIVACY INVARIANT
//! Telemetry events must **NEVER** contain user content (input text, response bodies).
//! Only request sequence numbers, status codes, tick counts and outcome kinds are allowed.
//!
//! Telemetry is write-only from the kernel's point of view: nothing in the
//! dispatch path reads it back.

pub mod event;
pub mod metrics;
pub mod recorder;
