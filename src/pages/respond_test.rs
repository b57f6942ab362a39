use super::*;

#[test]
fn validate_response_input_trims_and_requires_value() {
    assert_eq!(
        validate_response_input("  I intend to return home after my degree.  "),
        Ok("I intend to return home after my degree.".to_owned())
    );
    assert_eq!(validate_response_input(""), Err("Type a response before submitting."));
    assert_eq!(validate_response_input(" \n\t "), Err("Type a response before submitting."));
}

#[test]
fn validate_response_input_keeps_interior_newlines() {
    assert_eq!(
        validate_response_input("First point.\nSecond point."),
        Ok("First point.\nSecond point.".to_owned())
    );
}
