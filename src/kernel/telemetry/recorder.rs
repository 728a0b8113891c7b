use std::collections::VecDeque;
use super::event::TelemetryEvent;
use super::metrics::{TelemetrySnapshot, compute_snapshot};

const MAX_EVENTS: usize = 10_000;

/// Session-wide request counts. Unlike the ring, these survive eviction.
#[derive(Debug, Clone, Copy, Default)]
struct SessionCounters {
    issued: u64,
    completed: u64,
    discarded: u64,
}

#[derive(Debug)]
pub struct TelemetryRecorder {
    buffer: VecDeque<TelemetryEvent>,
    totals: SessionCounters,
}

impl Default for TelemetryRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetryRecorder {
    pub fn new() -> Self {
        Self {
            buffer: VecDeque::with_capacity(MAX_EVENTS),
            totals: SessionCounters::default(),
        }
    }

    pub fn record(&mut self, event: TelemetryEvent) {
        match event {
            TelemetryEvent::RequestIssued { .. } => self.totals.issued += 1,
            TelemetryEvent::RequestCompleted { .. } => self.totals.completed += 1,
            TelemetryEvent::CompletionDiscarded { .. } => self.totals.discarded += 1,
            TelemetryEvent::SessionSummary { .. } => {}
        }
        if self.buffer.len() >= MAX_EVENTS {
            self.buffer.pop_front();
        }
        self.buffer.push_back(event);
    }

    pub fn events(&self) -> impl Iterator<Item = &TelemetryEvent> {
        self.buffer.iter()
    }

    /// Metrics over the retained window only (at most `MAX_EVENTS`).
    pub fn snapshot(&self) -> TelemetrySnapshot {
        // Delegate to pure functional metrics module
        compute_snapshot(&self.buffer)
    }

    /// Starts a new session: drops the window and resets the totals.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.totals = SessionCounters::default();
    }

    /// Called on shutdown. Counts cover the whole session, evicted events included.
    pub fn aggregate_session(&self, duration_ticks: u64) -> TelemetryEvent {
        let totals = self.totals;
        let settled = totals.completed + totals.discarded;

        TelemetryEvent::SessionSummary {
            duration_ticks,
            issued: totals.issued,
            completed: totals.completed,
            discarded: totals.discarded,
            still_waiting: totals.issued.saturating_sub(settled),
        }
    }
}
