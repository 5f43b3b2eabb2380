//! Integration tests for the string helpers.

#![cfg(feature = "string")]

use funcwrap::string::trim_end;
use rstest::rstest;

#[rstest]
#[case("  abc  ", None, "  abc")]
#[case("-_-abc-_-", Some("_-"), "-_-abc")]
#[case("abc\r\n", None, "abc")]
#[case("abc\u{feff}", None, "abc")]
#[case("abc  ", Some(""), "abc  ")]
#[case("", Some("x"), "")]
#[case("xxabcxx", Some("x"), "xxabc")]
fn test_trim_end(#[case] input: &str, #[case] chars: Option<&str>, #[case] expected: &str) {
    assert_eq!(trim_end(input, chars), expected);
}

#[test]
fn test_trim_end_borrows_input() {
    let owned = String::from("value   ");
    let trimmed = trim_end(&owned, None);
    assert_eq!(trimmed, "value");
    assert!(std::ptr::eq(owned.as_ptr(), trimmed.as_ptr()));
}
