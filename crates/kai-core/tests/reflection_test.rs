//! Reflection bridge contract: mock-mode guarantees and response-shape
//! validation, all without a network.
//!
//! Run with: `cargo test --test reflection_test`

use kai_core::{mock_analysis, parse_analysis, Analyst, AnalysisError, ReflectionBridge};

#[test]
fn mock_analysis_is_shaped_and_in_range() {
    let analysis = mock_analysis("I feel okay today");
    assert!(!analysis.reflection.is_empty());
    assert!((3..=7).contains(&analysis.mood_score));
}

#[test]
fn mock_analysis_is_deterministic_per_text() {
    let a = mock_analysis("same words");
    let b = mock_analysis("same words");
    assert_eq!(a, b);
}

#[tokio::test]
async fn unconfigured_bridge_answers_locally() {
    let bridge = ReflectionBridge::unconfigured();
    assert!(!bridge.is_live());

    let analysis = bridge
        .analyze("I feel okay today")
        .await
        .expect("mock path never errors");
    assert!(!analysis.reflection.is_empty());
    assert!((3..=7).contains(&analysis.mood_score));
}

#[test]
fn empty_key_selects_mock_mode() {
    assert!(!ReflectionBridge::new("   ").is_live());
    assert!(ReflectionBridge::new("real-key").is_live());
}

#[test]
fn parse_analysis_accepts_the_contract() {
    let analysis =
        parse_analysis(r#"{"reflection": "You showed up for yourself.", "moodScore": 6}"#)
            .expect("valid payload");
    assert_eq!(analysis.reflection, "You showed up for yourself.");
    assert_eq!(analysis.mood_score, 6);
}

#[test]
fn parse_analysis_tolerates_surrounding_whitespace() {
    let analysis = parse_analysis("  {\"reflection\": \"ok\", \"moodScore\": 5}\n")
        .expect("trimmed payload parses");
    assert_eq!(analysis.mood_score, 5);
}

#[test]
fn parse_analysis_rejects_non_json() {
    assert!(matches!(
        parse_analysis("I am not JSON"),
        Err(AnalysisError::Parse(_))
    ));
}

#[test]
fn parse_analysis_rejects_missing_fields() {
    assert!(matches!(
        parse_analysis(r#"{"moodScore": 5}"#),
        Err(AnalysisError::Shape(_))
    ));
    assert!(matches!(
        parse_analysis(r#"{"reflection": "no score"}"#),
        Err(AnalysisError::Shape(_))
    ));
}

#[test]
fn parse_analysis_rejects_mistyped_fields() {
    assert!(matches!(
        parse_analysis(r#"{"reflection": 42, "moodScore": 5}"#),
        Err(AnalysisError::Shape(_))
    ));
    assert!(matches!(
        parse_analysis(r#"{"reflection": "ok", "moodScore": "five"}"#),
        Err(AnalysisError::Shape(_))
    ));
}

#[test]
fn parse_analysis_rejects_out_of_range_scores() {
    assert!(matches!(
        parse_analysis(r#"{"reflection": "ok", "moodScore": 0}"#),
        Err(AnalysisError::Shape(_))
    ));
    assert!(matches!(
        parse_analysis(r#"{"reflection": "ok", "moodScore": 11}"#),
        Err(AnalysisError::Shape(_))
    ));
}
