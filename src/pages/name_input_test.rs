use super::*;

#[test]
fn validate_name_input_trims_whitespace() {
    assert_eq!(validate_name_input("  Priya  "), Ok("Priya".to_owned()));
}

#[test]
fn validate_name_input_rejects_blank() {
    assert_eq!(validate_name_input(""), Err("Enter your name first."));
    assert_eq!(validate_name_input("   "), Err("Enter your name first."));
}

#[test]
fn validate_name_input_keeps_interior_spacing() {
    assert_eq!(validate_name_input("Ana Maria"), Ok("Ana Maria".to_owned()));
}
