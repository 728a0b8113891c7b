use crate::dispatcher::types::RequestToken;

pub const OUTPUT_ELEMENT_ID: &str = "system_response";

/// The element completions write into. Content is replaced wholesale, never appended.
#[derive(Debug, Clone)]
pub struct TextOutput {
    pub id: String,
    pub content: String,
    pub status: OutputStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputStatus {
    /// Nothing has been written yet.
    Blank,
    /// Last written by the completion of this request.
    WrittenBy(RequestToken),
}

impl Default for TextOutput {
    fn default() -> Self {
        Self {
            id: OUTPUT_ELEMENT_ID.to_string(),
            content: String::new(),
            status: OutputStatus::Blank,
        }
    }
}

impl TextOutput {
    pub fn replace(&mut self, token: RequestToken, content: String) {
        self.content = content;
        self.status = OutputStatus::WrittenBy(token);
    }

    pub fn written_by(&self) -> Option<RequestToken> {
        match self.status {
            OutputStatus::Blank => None,
            OutputStatus::WrittenBy(token) => Some(token),
        }
    }
}
