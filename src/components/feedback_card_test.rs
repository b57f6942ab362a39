use super::*;

#[test]
fn missing_score_renders_as_dash() {
    assert_eq!(format_score(None), "—");
}

#[test]
fn whole_scores_drop_the_decimal() {
    assert_eq!(format_score(Some(8.0)), "8");
    assert_eq!(format_score(Some(10.0)), "10");
}

#[test]
fn fractional_scores_keep_their_precision() {
    assert_eq!(format_score(Some(8.5)), "8.5");
    assert_eq!(format_score(Some(7.25)), "7.25");
}
