use super::*;

#[test]
fn out_of_hundred_formats_present_values() {
    assert_eq!(out_of_hundred(Some("82")), "82/100");
}

#[test]
fn out_of_hundred_dashes_missing_values() {
    assert_eq!(out_of_hundred(None), "—");
    assert_eq!(out_of_hundred(Some(" ")), "—");
}
