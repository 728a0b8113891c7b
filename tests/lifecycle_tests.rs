use emotion_dispatch::config::Config;
use emotion_dispatch::dispatcher::types::{Completion, Outcome, RequestToken};
use emotion_dispatch::kernel::event::Event;
use emotion_dispatch::kernel::lifecycle::{PhaseRequest, RequestLifecycle, RequestPhase};
use emotion_dispatch::kernel::reactor::Reactor;
use emotion_dispatch::kernel::state::{PageState, StateDelta};
use emotion_dispatch::outputs::text::OUTPUT_ELEMENT_ID;
use tokio::sync::mpsc;

#[test]
fn test_phase_transitions_valid() {
    let mut current = RequestPhase::default();
    assert_eq!(current, RequestPhase::Idle);

    current = RequestLifecycle::transition(current, PhaseRequest::Dispatched).expect("Idle -> Waiting");
    assert_eq!(current, RequestPhase::Waiting);

    current = RequestLifecycle::transition(current, PhaseRequest::Completed).expect("Waiting -> Done");
    assert_eq!(current, RequestPhase::Done);
}

#[test]
fn test_phase_transitions_rejected() {
    assert!(RequestLifecycle::transition(RequestPhase::Idle, PhaseRequest::Completed).is_none());
    assert!(RequestLifecycle::transition(RequestPhase::Waiting, PhaseRequest::Dispatched).is_none());
    assert!(RequestLifecycle::transition(RequestPhase::Done, PhaseRequest::Completed).is_none(), "completion fires once");
    assert!(RequestLifecycle::transition(RequestPhase::Done, PhaseRequest::Dispatched).is_none());
}

#[test]
fn test_page_state_reduction() {
    let mut state = PageState::new();
    assert_eq!(state.version, 0);
    assert_eq!(state.output().id, OUTPUT_ELEMENT_ID);
    assert!(state.output().written_by().is_none());

    state.reduce(StateDelta::InputEdited("  untrimmed  ".to_string()));
    assert_eq!(state.input_value(), "  untrimmed  ");

    let first = RequestToken::new(1);
    let second = RequestToken::new(2);
    state.reduce(StateDelta::RequestIssued(first));
    state.reduce(StateDelta::RequestIssued(second));
    assert_eq!(state.in_flight(), vec![first, second]);
    assert_eq!(state.latest_token(), Some(second));

    assert_eq!(state.phase(&second), Some(RequestPhase::Waiting));
    state.reduce(StateDelta::RequestSettled(second));
    assert_eq!(state.phase(&second), None, "settled requests are no longer tracked");
    assert_eq!(state.in_flight(), vec![first]);
    assert_eq!(state.tracked_requests(), 1);

    // Settling twice changes nothing
    state.reduce(StateDelta::RequestSettled(second));
    assert_eq!(state.in_flight(), vec![first]);
    assert_eq!(state.latest_token(), Some(second));

    state.reduce(StateDelta::OutputReplaced { token: first, content: "late".to_string() });
    assert_eq!(state.output().content, "late");
    assert_eq!(state.output().written_by(), Some(first));
    assert_eq!(state.version, 6);
}

#[tokio::test]
async fn test_foreign_and_duplicate_completions_ignored() {
    let (tx, rx) = mpsc::channel(100);
    let mut reactor = Reactor::new(rx, tx, &Config::default());

    // Completion for a token this page never issued
    let stranger = Completion {
        token: RequestToken::new(42),
        outcome: Outcome::Success("spoofed".to_string()),
    };
    let effects = reactor.tick_step(vec![Event::Completed(stranger)]);
    assert!(effects.is_empty());
    assert_eq!(reactor.state.output().content, "");

    // Issued (tracked only, no network) then completed twice
    let token = RequestToken::new(7);
    reactor.state.reduce(StateDelta::RequestIssued(token));
    let first = Completion { token, outcome: Outcome::Success("once".to_string()) };
    let again = Completion { token, outcome: Outcome::Success("twice".to_string()) };

    reactor.tick_step(vec![Event::Completed(first)]);
    assert_eq!(reactor.state.output().content, "once");

    let effects = reactor.tick_step(vec![Event::Completed(again)]);
    assert!(effects.is_empty(), "second completion must be dropped");
    assert_eq!(reactor.state.output().content, "once");
}

#[tokio::test]
async fn test_settled_requests_are_released() {
    let (tx, rx) = mpsc::channel(100);
    let mut reactor = Reactor::new(rx, tx, &Config::default());

    for seq in 1..=1000 {
        let token = RequestToken::new(seq);
        reactor.state.reduce(StateDelta::RequestIssued(token));
        let done = Completion { token, outcome: Outcome::Success(format!("reply {seq}")) };
        reactor.tick_step(vec![Event::Completed(done)]);
    }

    assert_eq!(reactor.state.tracked_requests(), 0);
    assert!(!reactor.state.has_in_flight());
    assert_eq!(reactor.state.output().content, "reply 1000");
    assert_eq!(reactor.state.latest_token().map(|t| t.seq), Some(1000));
    assert_eq!(reactor.telemetry.snapshot().request_stats.completed, 1000);
}

#[tokio::test]
async fn test_tick_advances_every_step() {
    let (tx, rx) = mpsc::channel(100);
    let mut reactor = Reactor::new(rx, tx, &Config::default());

    for _ in 0..5 {
        let effects = reactor.tick_step(vec![]);
        assert!(effects.is_empty(), "idle steps are silent");
    }
    assert_eq!(reactor.tick.frame, 5);
    assert_eq!(reactor.state.last_tick, reactor.tick);
}
