use crate::config::{RenderMode, StatusPolicy};
use crate::dispatcher::types::Outcome;

pub const INVALID_TEXT_MESSAGE: &str = "Invalid text! Please try again!";
pub const FALLBACK_MESSAGE: &str = "Something went wrong! Please try again later.";

/// PURE FUNCTION: Outcome -> text for the output element.
/// `None` means the element must be left as it is.
pub fn realize(outcome: &Outcome, status_policy: StatusPolicy, render_mode: RenderMode) -> Option<String> {
    match outcome {
        Outcome::Success(body) => Some(match render_mode {
            RenderMode::Raw => body.clone(),
            RenderMode::Escaped => escape_markup(body),
        }),
        // Server detail is never shown
        Outcome::ValidationError => Some(INVALID_TEXT_MESSAGE.to_string()),
        Outcome::UnexpectedStatus(_) | Outcome::TransportError(_) => match status_policy {
            StatusPolicy::Faithful => None,
            StatusPolicy::Exhaustive => Some(FALLBACK_MESSAGE.to_string()),
        },
    }
}

pub fn escape_markup(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
