use emotion_dispatch::config::{CompletionPolicy, Config, OutputFormat, RenderMode, StatusPolicy, DEFAULT_BASE_URL};

#[test]
fn test_defaults_are_faithful() {
    let config = Config::default();
    assert_eq!(config.base_url.as_str(), DEFAULT_BASE_URL);
    assert_eq!(config.timeout, None, "no timeout unless configured");
    assert_eq!(config.completion_policy, CompletionPolicy::LastCompletionWins);
    assert_eq!(config.status_policy, StatusPolicy::Faithful);
    assert_eq!(config.render_mode, RenderMode::Raw);
    assert_eq!(config.output_format, OutputFormat::Text);
}

#[test]
fn test_policy_parsing() {
    assert_eq!("last-invocation".parse(), Ok(CompletionPolicy::LastInvocationWins));
    assert_eq!(" Last-Completion ".parse(), Ok(CompletionPolicy::LastCompletionWins));
    assert_eq!("exhaustive".parse(), Ok(StatusPolicy::Exhaustive));
    assert_eq!("escaped".parse(), Ok(RenderMode::Escaped));
    assert_eq!("JSON".parse(), Ok(OutputFormat::Json));

    assert!("newest".parse::<CompletionPolicy>().is_err());
    assert!("strict".parse::<StatusPolicy>().is_err());
    assert!("html".parse::<RenderMode>().is_err());
    assert!("yaml".parse::<OutputFormat>().is_err());
}
