use super::*;

#[test]
fn has_name_rejects_blank_and_whitespace() {
    let mut state = SessionState::default();
    assert!(!state.has_name());
    state.name = "   ".to_owned();
    assert!(!state.has_name());
    state.name = "Priya".to_owned();
    assert!(state.has_name());
}

#[test]
fn record_answer_appends_in_order() {
    let mut state = SessionState::default();
    state.record_answer("Why study in the US?", "Research opportunities.");
    state.record_answer("How will you fund it?", "A full scholarship.");

    assert_eq!(state.transcript.len(), 2);
    assert_eq!(state.transcript[0].question, "Why study in the US?");
    assert_eq!(state.transcript[1].response, "A full scholarship.");
}

#[test]
fn full_transcript_numbers_questions_from_one() {
    let mut state = SessionState::default();
    state.record_answer("Q-a", "A-a");
    state.record_answer("Q-b", "A-b");

    assert_eq!(
        state.full_transcript(),
        "Question 1: Q-a\nAnswer: A-a\n\nQuestion 2: Q-b\nAnswer: A-b\n\n"
    );
}

#[test]
fn full_transcript_is_empty_before_any_answers() {
    assert_eq!(SessionState::default().full_transcript(), "");
}
