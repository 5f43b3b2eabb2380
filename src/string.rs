//! String helpers.

/// Byte-order mark, trimmed along with whitespace.
const BYTE_ORDER_MARK: char = '\u{feff}';

fn is_trimmable_whitespace(character: char) -> bool {
    character.is_whitespace() || character == BYTE_ORDER_MARK
}

/// Removes trailing whitespace, or trailing characters from `chars`.
///
/// Without `chars`, Unicode whitespace and the byte-order mark are trimmed.
/// With `chars`, any trailing character contained in it is trimmed; an
/// empty set leaves the input unchanged.
///
/// # Examples
///
/// ```
/// use funcwrap::string::trim_end;
///
/// assert_eq!(trim_end("  abc  ", None), "  abc");
/// assert_eq!(trim_end("-_-abc-_-", Some("_-")), "-_-abc");
/// assert_eq!(trim_end("abc  ", Some("")), "abc  ");
/// ```
pub fn trim_end<'a>(string: &'a str, chars: Option<&str>) -> &'a str {
    match chars {
        None => string.trim_end_matches(is_trimmable_whitespace),
        Some("") => string,
        Some(chars) => string.trim_end_matches(|character| chars.contains(character)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("abc", "abc")]
    #[case("abc \t\n", "abc")]
    #[case("abc\u{feff}\u{a0}", "abc")]
    #[case("\u{3000}abc\u{3000}", "\u{3000}abc")]
    #[case("   ", "")]
    #[case("", "")]
    fn test_trim_end_whitespace(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(trim_end(input, None), expected);
    }

    #[test]
    fn test_trim_end_chars_are_code_points() {
        assert_eq!(trim_end("abc😀😀", Some("😀")), "abc");
        assert_eq!(trim_end("aaa", Some("a")), "");
    }

    #[test]
    fn test_trim_end_keeps_interior_matches() {
        assert_eq!(trim_end("a-b-", Some("-")), "a-b");
    }
}
