use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::event::{Event, InputContent};
use super::lifecycle::RequestPhase;
use super::scheduler::{Scheduler, SideEffect};
use super::state::{PageState, StateDelta};
use super::telemetry::event::{OutcomeKind, TelemetryEvent};
use super::telemetry::recorder::TelemetryRecorder;
use super::time::Tick;

use crate::config::{CompletionPolicy, Config};
use crate::dispatcher::async_dispatcher::AsyncDispatcher;
use crate::dispatcher::types::{Completion, RequestToken};
use crate::services::emotion::client::EmotionService;

pub struct Reactor {
    pub receiver: mpsc::Receiver<Event>,
    pub state: PageState,
    pub scheduler: Scheduler,
    pub dispatcher: AsyncDispatcher,
    pub telemetry: TelemetryRecorder,
    pub tick: Tick,
    pub completion_policy: CompletionPolicy,
    next_seq: u64,
}

impl Reactor {
    /// `tx` must feed `receiver`; request tasks report completions through it.
    pub fn new(receiver: mpsc::Receiver<Event>, tx: mpsc::Sender<Event>, config: &Config) -> Self {
        Self {
            receiver,
            state: PageState::new(),
            scheduler: Scheduler::new(config),
            dispatcher: AsyncDispatcher::new(EmotionService::new(config), tx),
            telemetry: TelemetryRecorder::new(),
            tick: Tick::new(),
            completion_policy: config.completion_policy,
            next_seq: 0,
        }
    }

    /// The run trigger. Reads the input field, fires the request and returns
    /// without waiting for it. The completion arrives later as `Event::Completed`.
    pub fn run_sentiment_analysis(&mut self) -> RequestToken {
        self.next_seq += 1;
        let token = RequestToken::new(self.next_seq);
        let text = self.state.input_value().to_string();

        self.state.reduce(StateDelta::RequestIssued(token));
        self.telemetry.record(TelemetryEvent::RequestIssued { seq: token.seq });
        info!(seq = token.seq, id = %token.correlation, "Dispatching request");

        self.dispatcher.dispatch(token, &text);
        token
    }

    /// Pure Tick Step: Advances State. Returns SideEffects to be executed by the driver.
    /// MUST NOT await I/O or timers.
    ///
    /// Events are handled in arrival order, so a Submit only supersedes
    /// completions queued after it.
    pub fn tick_step(&mut self, events: Vec<Event>) -> Vec<SideEffect> {
        self.tick = self.tick.next();
        self.state.reduce(StateDelta::Tick(self.tick));
        let mut effects = Vec::new();

        for event in events {
            match event {
                Event::Input(input) => match input.content {
                    InputContent::Edit(value) => self.state.reduce(StateDelta::InputEdited(value)),
                    InputContent::Submit => {
                        let token = self.run_sentiment_analysis();
                        effects.push(SideEffect::Log(format!(
                            "Request #{} dispatched from {}",
                            token.seq, input.source
                        )));
                    }
                },
                Event::Completed(completion) => {
                    if let Some(effect) = self.complete(completion) {
                        effects.push(effect);
                    }
                }
            }
        }

        effects
    }

    fn complete(&mut self, completion: Completion) -> Option<SideEffect> {
        let token = completion.token;

        // Exactly once: settling drops the request, so a repeat is unknown
        let issued_at = match self.state.request(&token) {
            Some(tracked) if tracked.phase == RequestPhase::Waiting => tracked.issued_at,
            _ => {
                warn!(seq = token.seq, "Completion for unknown or settled request ignored");
                return None;
            }
        };
        self.state.reduce(StateDelta::RequestSettled(token));
        let round_trip_ticks = self.tick.since(issued_at);

        // STALE REJECTION: only the newest invocation may write under LastInvocationWins
        if self.completion_policy == CompletionPolicy::LastInvocationWins
            && self.state.latest_token() != Some(token)
        {
            debug!(seq = token.seq, "Discarded stale completion");
            self.telemetry.record(TelemetryEvent::CompletionDiscarded { seq: token.seq, round_trip_ticks });
            return Some(SideEffect::Log(format!("Request #{} superseded, completion discarded", token.seq)));
        }

        let (delta_opt, effect_opt) = self.scheduler.schedule(&completion);
        let outcome = OutcomeKind::from(&completion.outcome);
        match outcome {
            OutcomeKind::UnexpectedStatus(code) => warn!(seq = token.seq, status = code, "Unhandled response status"),
            OutcomeKind::TransportError => warn!(seq = token.seq, "Request did not complete"),
            _ => info!(seq = token.seq, outcome = ?outcome, "Request completed"),
        }

        self.telemetry.record(TelemetryEvent::RequestCompleted {
            seq: token.seq,
            outcome,
            round_trip_ticks,
            applied: delta_opt.is_some(),
        });

        if let Some(delta) = delta_opt {
            self.state.reduce(delta);
        }
        effect_opt
    }

    /// Non-blocking drain of everything currently queued.
    pub fn drain_events(&mut self) -> Vec<Event> {
        let mut events = Vec::new();
        while let Ok(event) = self.receiver.try_recv() {
            events.push(event);
        }
        events
    }

    /// Processes completions as they arrive until no request is waiting.
    /// Without a timeout configured this waits as long as the slowest request.
    pub async fn settle(&mut self) -> Vec<SideEffect> {
        let mut effects = Vec::new();
        while self.state.has_in_flight() {
            match self.receiver.recv().await {
                Some(event) => effects.extend(self.tick_step(vec![event])),
                None => break,
            }
        }
        effects
    }
}
