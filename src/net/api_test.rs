use super::*;

#[test]
fn endpoints_match_the_backend_routes() {
    assert_eq!(START_INTERVIEW, "/api/start-interview");
    assert_eq!(NEXT_QUESTION, "/api/next-question");
    assert_eq!(PROCESS_VOICE_RESPONSE, "/api/process-voice-response");
    assert_eq!(INTERVIEW, "/api/interview");
    assert_eq!(FINALIZE_INTERVIEW, "/api/finalize-interview");
    assert_eq!(SEND_EMAIL, "/api/send-email");
}

#[test]
fn recording_upload_uses_the_expected_form_field() {
    assert_eq!(RECORDING_FIELD, "file");
    assert_eq!(RECORDING_FILENAME, "answer.webm");
}

#[test]
fn failed_message_formats_status() {
    assert_eq!(failed_message("submit response", 500), "submit response failed: 500");
    assert_eq!(failed_message("next question", 404), "next question failed: 404");
}

#[test]
fn typed_response_body_matches_the_wire_shape() {
    let body = serde_json::json!({ "response": "I will return home.", "name": "Priya" });
    assert_eq!(
        body.to_string(),
        r#"{"name":"Priya","response":"I will return home."}"#
    );
}
