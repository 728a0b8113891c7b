use std::collections::VecDeque;
use super::event::{OutcomeKind, TelemetryEvent};

#[derive(Debug, Clone, Default)]
pub struct TelemetrySnapshot {
    pub request_stats: RequestStats,
    pub outcome_stats: OutcomeStats,
}

#[derive(Debug, Clone, Default)]
pub struct RequestStats {
    pub issued: u64,
    pub completed: u64,
    pub discarded: u64,
    /// Completions that left the output element untouched.
    pub ignored: u64,
    pub total_round_trip_ticks: u64,
    pub avg_round_trip_ticks: f64,
    pub max_round_trip_ticks: u64,
}

#[derive(Debug, Clone, Default)]
pub struct OutcomeStats {
    pub successes: u64,
    pub validation_errors: u64,
    pub unexpected_statuses: u64,
    pub transport_errors: u64,
}

pub fn compute_snapshot(events: &VecDeque<TelemetryEvent>) -> TelemetrySnapshot {
    let mut snap = TelemetrySnapshot::default();
    let mut round_trips = 0;

    for event in events {
        match event {
            TelemetryEvent::RequestIssued { .. } => {
                snap.request_stats.issued += 1;
            }
            TelemetryEvent::RequestCompleted { outcome, round_trip_ticks, applied, .. } => {
                snap.request_stats.completed += 1;
                if !applied {
                    snap.request_stats.ignored += 1;
                }
                match outcome {
                    OutcomeKind::Success => snap.outcome_stats.successes += 1,
                    OutcomeKind::ValidationError => snap.outcome_stats.validation_errors += 1,
                    OutcomeKind::UnexpectedStatus(_) => snap.outcome_stats.unexpected_statuses += 1,
                    OutcomeKind::TransportError => snap.outcome_stats.transport_errors += 1,
                }
                snap.request_stats.total_round_trip_ticks += round_trip_ticks;
                snap.request_stats.max_round_trip_ticks = snap.request_stats.max_round_trip_ticks.max(*round_trip_ticks);
                round_trips += 1;
            }
            TelemetryEvent::CompletionDiscarded { round_trip_ticks, .. } => {
                snap.request_stats.discarded += 1;
                snap.request_stats.total_round_trip_ticks += round_trip_ticks;
                snap.request_stats.max_round_trip_ticks = snap.request_stats.max_round_trip_ticks.max(*round_trip_ticks);
                round_trips += 1;
            }
            TelemetryEvent::SessionSummary { .. } => {}
        }
    }

    if round_trips > 0 {
        snap.request_stats.avg_round_trip_ticks = snap.request_stats.total_round_trip_ticks as f64 / round_trips as f64;
    }

    snap
}
