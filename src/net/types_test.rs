use super::*;

#[test]
fn feedback_without_score_deserializes_to_none() {
    let parsed: InterviewFeedback = serde_json::from_str(r#"{"feedback":"Nice answer!"}"#).unwrap();
    assert_eq!(parsed.feedback, "Nice answer!");
    assert_eq!(parsed.score, None);
}

#[test]
fn feedback_with_score_keeps_the_number() {
    let parsed: InterviewFeedback =
        serde_json::from_str(r#"{"feedback":"Solid.","score":8.5}"#).unwrap();
    assert_eq!(parsed.score, Some(8.5));
}

#[test]
fn next_question_mid_interview_is_not_complete() {
    let parsed: NextQuestion =
        serde_json::from_str(r#"{"question":"Why this university?","caption":"Why this university?"}"#)
            .unwrap();
    assert!(!parsed.is_complete());
    assert_eq!(parsed.caption.as_deref(), Some("Why this university?"));
}

#[test]
fn next_question_message_only_marks_completion() {
    let parsed: NextQuestion = serde_json::from_str(r#"{"message":"Interview complete!"}"#).unwrap();
    assert!(parsed.is_complete());
    assert_eq!(parsed.message.as_deref(), Some("Interview complete!"));
}

#[test]
fn voice_outcome_round_trips_both_fields() {
    let parsed: VoiceOutcome =
        serde_json::from_str(r#"{"transcription":"I plan to study CS.","feedback":"Clear and direct."}"#)
            .unwrap();
    assert_eq!(parsed.transcription, "I plan to study CS.");
    assert_eq!(parsed.feedback, "Clear and direct.");
}

#[test]
fn summary_tolerates_missing_message() {
    let parsed: InterviewSummary =
        serde_json::from_str(r#"{"transcript":"Question 1: ...","analysis":"Good pacing."}"#).unwrap();
    assert_eq!(parsed.message, None);
}

#[test]
fn email_receipt_carries_error_side() {
    let parsed: EmailReceipt = serde_json::from_str(r#"{"error":"Failed to send email"}"#).unwrap();
    assert_eq!(parsed.error.as_deref(), Some("Failed to send email"));
    assert_eq!(parsed.message, None);
}
