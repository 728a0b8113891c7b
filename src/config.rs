use std::{env, str::FromStr, time::Duration};

use tracing::{info, warn};
use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/";

/// Which completion is allowed to write the output element when requests overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletionPolicy {
    /// Every completion writes. The request that finishes last wins.
    #[default]
    LastCompletionWins,
    /// Only the most recently issued request may write. Older completions are dropped.
    LastInvocationWins,
}

/// How statuses other than 200 and 400 are surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusPolicy {
    /// Unhandled outcomes leave the output element untouched.
    #[default]
    Faithful,
    /// Unhandled outcomes show a generic fallback message.
    Exhaustive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Success bodies are written verbatim.
    #[default]
    Raw,
    /// Success bodies are HTML-escaped before being written.
    Escaped,
}

/// Terminal driver presentation only; the library never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for CompletionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "last-completion" => Ok(Self::LastCompletionWins),
            "last-invocation" => Ok(Self::LastInvocationWins),
            other => Err(format!("expected 'last-completion' or 'last-invocation', got '{other}'")),
        }
    }
}

impl FromStr for StatusPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "faithful" => Ok(Self::Faithful),
            "exhaustive" => Ok(Self::Exhaustive),
            other => Err(format!("expected 'faithful' or 'exhaustive', got '{other}'")),
        }
    }
}

impl FromStr for RenderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raw" => Ok(Self::Raw),
            "escaped" => Ok(Self::Escaped),
            other => Err(format!("expected 'raw' or 'escaped', got '{other}'")),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("expected 'text' or 'json', got '{other}'")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Base the relative `emotionDetector` path is resolved against.
    pub base_url: Url,
    /// `None` means no timeout: a hung request stays in flight.
    pub timeout: Option<Duration>,
    pub completion_policy: CompletionPolicy,
    pub status_policy: StatusPolicy,
    pub render_mode: RenderMode,
    pub output_format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is well-formed"),
            timeout: None,
            completion_policy: CompletionPolicy::default(),
            status_policy: StatusPolicy::default(),
            render_mode: RenderMode::default(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw_base = var("EMOTION_BASE_URL").unwrap_or_else(|| {
            info!("EMOTION_BASE_URL not set, using default: {DEFAULT_BASE_URL}");
            DEFAULT_BASE_URL.to_string()
        });
        let base_url =
            Url::parse(&raw_base).map_err(|e| ConfigError::InvalidBaseUrl(raw_base.clone(), e))?;

        let timeout = match var("EMOTION_TIMEOUT_MS") {
            Some(raw) => Some(Duration::from_millis(parse("EMOTION_TIMEOUT_MS", &raw)?)),
            None => None,
        };

        Ok(Self {
            base_url,
            timeout,
            completion_policy: try_load("EMOTION_COMPLETION_POLICY", "last-completion")?,
            status_policy: try_load("EMOTION_STATUS_POLICY", "faithful")?,
            render_mode: try_load("EMOTION_RENDER", "raw")?,
            output_format: try_load("EMOTION_OUTPUT", "text")?,
        })
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn try_load<T>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: ToString,
{
    let raw = var(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    parse(key, &raw)
}

fn parse<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: ToString,
{
    raw.trim().parse().map_err(|e: T::Err| {
        let reason = e.to_string();
        warn!("Invalid {key} value: {reason}");
        ConfigError::InvalidValue {
            key,
            value: raw.to_string(),
            reason,
        }
    })
}
