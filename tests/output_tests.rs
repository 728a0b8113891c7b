use emotion_dispatch::config::{RenderMode, StatusPolicy};
use emotion_dispatch::dispatcher::types::Outcome;
use emotion_dispatch::outputs::realizer::{escape_markup, realize, FALLBACK_MESSAGE, INVALID_TEXT_MESSAGE};
use emotion_dispatch::outputs::report::EmotionReport;

const SERVER_BODY: &str = "For the given statement, the system response is 'anger': 0.006274985, \
    'disgust': 0.0025598293, 'fear': 0.009251528, 'joy': 0.9680386 and 'sadness': 0.049744144. \
    The dominant emotion is joy.";

#[test]
fn test_status_classification() {
    assert_eq!(Outcome::from_response(200, "ok".into()), Outcome::Success("ok".into()));
    assert_eq!(Outcome::from_response(400, "ignored".into()), Outcome::ValidationError);
    assert_eq!(Outcome::from_response(201, String::new()), Outcome::UnexpectedStatus(201));
    assert_eq!(Outcome::from_response(404, String::new()), Outcome::UnexpectedStatus(404));
    assert_eq!(Outcome::from_response(500, String::new()), Outcome::UnexpectedStatus(500));
}

#[test]
fn test_realize_faithful() {
    let faithful = |o: &Outcome| realize(o, StatusPolicy::Faithful, RenderMode::Raw);

    assert_eq!(faithful(&Outcome::Success("<b>POSITIVE</b>".into())).as_deref(), Some("<b>POSITIVE</b>"));
    assert_eq!(faithful(&Outcome::ValidationError).as_deref(), Some(INVALID_TEXT_MESSAGE));
    assert_eq!(faithful(&Outcome::UnexpectedStatus(500)), None);
    assert_eq!(faithful(&Outcome::TransportError("refused".into())), None);
}

#[test]
fn test_realize_exhaustive_and_escaped() {
    let exhaustive = |o: &Outcome| realize(o, StatusPolicy::Exhaustive, RenderMode::Escaped);

    assert_eq!(exhaustive(&Outcome::UnexpectedStatus(502)).as_deref(), Some(FALLBACK_MESSAGE));
    assert_eq!(exhaustive(&Outcome::TransportError("timeout".into())).as_deref(), Some(FALLBACK_MESSAGE));
    assert_eq!(exhaustive(&Outcome::ValidationError).as_deref(), Some(INVALID_TEXT_MESSAGE));
    assert_eq!(
        exhaustive(&Outcome::Success("<script>x</script>".into())).as_deref(),
        Some("&lt;script&gt;x&lt;/script&gt;")
    );
}

#[test]
fn test_escape_markup() {
    assert_eq!(escape_markup(r#"a & b < c > "d" 'e'"#), "a &amp; b &lt; c &gt; &quot;d&quot; &#39;e&#39;");
    assert_eq!(escape_markup("plain ☕"), "plain ☕");
}

#[test]
fn test_report_parses_detector_body() {
    let report = EmotionReport::parse(SERVER_BODY).expect("detector body parses");
    assert_eq!(report.anger, 0.006274985);
    assert_eq!(report.disgust, 0.0025598293);
    assert_eq!(report.fear, 0.009251528);
    assert_eq!(report.joy, 0.9680386);
    assert_eq!(report.sadness, 0.049744144);
    assert_eq!(report.dominant_emotion, "joy");

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["dominant_emotion"], "joy");
}

#[test]
fn test_report_handles_exponent_scores() {
    let body = "For the given statement, the system response is 'anger': 1.2e-05, 'disgust': 3e-06, \
                'fear': 0.5, 'joy': 0.1 and 'sadness': 2.5e-04. The dominant emotion is fear.";
    let report = EmotionReport::parse(body).unwrap();
    assert_eq!(report.anger, 1.2e-05);
    assert_eq!(report.sadness, 2.5e-04);
    assert_eq!(report.dominant_emotion, "fear");
}

#[test]
fn test_report_rejects_other_bodies() {
    assert!(EmotionReport::parse("POSITIVE").is_none());
    assert!(EmotionReport::parse("").is_none());
    assert!(EmotionReport::parse("'anger': 0.1, 'disgust': 0.1, 'fear': 0.1, 'joy': 0.1 and 'sadness': 0.1.").is_none());
}
