use super::*;

#[test]
fn recorder_starts_idle() {
    assert_eq!(UiState::default().recorder, RecorderPhase::Idle);
}

#[test]
fn button_label_tracks_phase() {
    assert_eq!(recorder_button_label(RecorderPhase::Idle), "Start Recording");
    assert_eq!(recorder_button_label(RecorderPhase::Recording), "Stop Recording");
    assert_eq!(recorder_button_label(RecorderPhase::Processing), "Processing...");
}
