use crate::dispatcher::types::Completion;

#[derive(Debug, Clone)]
pub enum Event {
    /// UI interaction (typing, clicking run)
    Input(InputEvent),
    /// A dispatched request reached its terminal state
    Completed(Completion),
}

#[derive(Debug, Clone)]
pub struct InputEvent {
    pub source: String,
    pub content: InputContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputContent {
    /// New value of the `textToAnalyze` field.
    Edit(String),
    /// The run trigger. Reads whatever the field holds at this moment.
    Submit,
}

impl InputEvent {
    pub fn text(source: &str, text: &str) -> Self {
        Self {
            source: source.to_string(),
            content: InputContent::Edit(text.to_string()),
        }
    }

    pub fn submit(source: &str) -> Self {
        Self {
            source: source.to_string(),
            content: InputContent::Submit,
        }
    }
}
