use super::*;

#[test]
fn interviewer_track_lives_under_assets() {
    assert_eq!(INTERVIEWER_TRACK, "/assets/demo.wav");
}

#[test]
fn welcome_heading_addresses_the_candidate() {
    assert_eq!(welcome_heading("Priya"), "Welcome, Priya. Let's start your interview!");
}

#[test]
fn format_elapsed_pads_seconds() {
    assert_eq!(format_elapsed(0), "0:00");
    assert_eq!(format_elapsed(7), "0:07");
    assert_eq!(format_elapsed(59), "0:59");
    assert_eq!(format_elapsed(60), "1:00");
    assert_eq!(format_elapsed(125), "2:05");
}
