use super::state::StateDelta;
use crate::config::{Config, RenderMode, StatusPolicy};
use crate::dispatcher::types::{Completion, Outcome};
use crate::outputs::realizer::realize;
use crate::outputs::report::EmotionReport;

#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    pub status_policy: StatusPolicy,
    pub render_mode: RenderMode,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SideEffect {
    Log(String),
    /// The output element now shows `content`. `report` is filled when the
    /// success body has the detector's usual shape.
    Render {
        content: String,
        report: Option<EmotionReport>,
    },
}

impl Scheduler {
    pub fn new(config: &Config) -> Self {
        Self {
            status_policy: config.status_policy,
            render_mode: config.render_mode,
        }
    }

    /// Pure Projection: Completion -> (StateDelta, SideEffect)
    pub fn schedule(&self, completion: &Completion) -> (Option<StateDelta>, Option<SideEffect>) {
        let token = completion.token;

        let Some(content) = realize(&completion.outcome, self.status_policy, self.render_mode) else {
            let reason = match &completion.outcome {
                Outcome::UnexpectedStatus(code) => format!("status {code}"),
                Outcome::TransportError(_) => "transport error".to_string(),
                _ => "unhandled outcome".to_string(),
            };
            return (None, Some(SideEffect::Log(format!("Request #{} left output unchanged ({reason})", token.seq))));
        };

        let report = match &completion.outcome {
            Outcome::Success(body) => EmotionReport::parse(body),
            _ => None,
        };

        let delta = StateDelta::OutputReplaced { token, content: content.clone() };
        (Some(delta), Some(SideEffect::Render { content, report }))
    }
}
