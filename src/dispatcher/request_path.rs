use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub const ENDPOINT: &str = "emotionDetector";
pub const QUERY_PARAM: &str = "textToAnalyze";

/// Matches `encodeURIComponent`: everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is escaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}

/// Relative request path for one invocation. No trimming or validation is applied to `text`.
pub fn request_path(text: &str) -> String {
    format!("{ENDPOINT}?{QUERY_PARAM}={}", encode_component(text))
}
