use serde::{Deserialize, Serialize};

const EMOTIONS: [&str; 5] = ["anger", "disgust", "fear", "joy", "sadness"];
const DOMINANT_MARKER: &str = "The dominant emotion is ";

/// Structured view of the detector's success body:
/// `... 'anger': A, 'disgust': D, 'fear': F, 'joy': J and 'sadness': S. The dominant emotion is E.`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionReport {
    pub anger: f64,
    pub disgust: f64,
    pub fear: f64,
    pub joy: f64,
    pub sadness: f64,
    pub dominant_emotion: String,
}

impl EmotionReport {
    /// Best effort. The body stays opaque to the dispatcher; any other shape yields `None`.
    pub fn parse(body: &str) -> Option<Self> {
        let mut scores = [0.0_f64; 5];
        for (slot, name) in scores.iter_mut().zip(EMOTIONS) {
            *slot = score(body, name)?;
        }

        let start = body.find(DOMINANT_MARKER)? + DOMINANT_MARKER.len();
        let dominant = body[start..].trim().trim_end_matches('.').trim();
        if dominant.is_empty() {
            return None;
        }

        let [anger, disgust, fear, joy, sadness] = scores;
        Some(Self {
            anger,
            disgust,
            fear,
            joy,
            sadness,
            dominant_emotion: dominant.to_string(),
        })
    }
}

fn score(body: &str, name: &str) -> Option<f64> {
    let key = format!("'{name}': ");
    let start = body.find(&key)? + key.len();
    let number: String = body[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
        .collect();
    // Sentence period directly after the last score
    number.trim_end_matches('.').parse().ok()
}
