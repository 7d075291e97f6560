use memchr::memmem;

use crate::constants::{
    ARRAY_OPENER, BLOCK_CLOSER, BLOCK_OPENER, DICTIONARY_OPENER, HEADER_SUFFIX, SEPARATOR,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockKind {
    Dictionary,
    Array,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `key : token`. The key is trimmed, the token is kept verbatim.
    Entry { key: &'a str, token: &'a str },
    /// Separator-less array element.
    Item(&'a str),
    Close,
    Malformed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    Open(BlockKind),
    Text(&'a str),
}

/// Returns the top key when `line` is a `key <dictionary> {` header.
pub fn parse_header(line: &str) -> Option<&str> {
    line.trim_end_matches(['\n', '\r', ' '])
        .strip_suffix(HEADER_SUFFIX)
}

pub fn classify(line: &str, block: BlockKind, strict: bool) -> LineKind<'_> {
    if let Some(idx) = memmem::find(line.as_bytes(), SEPARATOR.as_bytes()) {
        return LineKind::Entry {
            key: line[..idx].trim(),
            token: &line[idx + SEPARATOR.len()..],
        };
    }
    if is_closer(line, strict) {
        return LineKind::Close;
    }
    let item = line.trim();
    if block == BlockKind::Array && is_bare_item(item) {
        return LineKind::Item(item);
    }
    LineKind::Malformed
}

/// Bare items never look like a block boundary: a damaged closer such as
/// `} ` or an opener missing its key must not be taken as data.
fn is_bare_item(item: &str) -> bool {
    !item.is_empty() && !item.ends_with(BLOCK_CLOSER) && !item.ends_with(BLOCK_OPENER)
}

fn is_closer(line: &str, strict: bool) -> bool {
    if strict {
        line.trim().strip_suffix(BLOCK_CLOSER) == Some("")
    } else {
        line.ends_with(BLOCK_CLOSER)
    }
}

pub fn resolve_token(token: &str) -> Token<'_> {
    match token {
        DICTIONARY_OPENER => Token::Open(BlockKind::Dictionary),
        ARRAY_OPENER => Token::Open(BlockKind::Array),
        text => Token::Text(text),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("  Router : 192.168.1.1", "Router", "192.168.1.1")]
    #[case("key :  padded ", "key", " padded ")]
    #[case("a : b : c", "a", "b : c")]
    #[case("Servers : <array> {", "Servers", "<array> {")]
    #[case("Name : }", "Name", "}")]
    fn splits_entries_at_first_separator(
        #[case] line: &str,
        #[case] key: &str,
        #[case] token: &str,
    ) {
        assert_eq!(
            classify(line, BlockKind::Dictionary, false),
            LineKind::Entry { key, token }
        );
    }

    #[rstest]
    #[case("}", false, true)]
    #[case("  }", false, true)]
    #[case("foo}", false, true)]
    #[case("} ", false, false)]
    #[case("}\t", false, false)]
    #[case("  } ", true, true)]
    #[case("}\t", true, true)]
    #[case("foo}", true, false)]
    fn recognizes_closers(
        #[case] line: &str,
        #[case] strict: bool,
        #[case] closes: bool,
        #[values(BlockKind::Dictionary, BlockKind::Array)] block: BlockKind,
    ) {
        let kind = classify(line, block, strict);
        let expected = if closes {
            LineKind::Close
        } else {
            LineKind::Malformed
        };
        assert_eq!(kind, expected, "{line:?} in {block:?}");
    }

    #[rstest]
    #[case("no separator here")]
    #[case("key:value")]
    #[case("")]
    #[case("   ")]
    fn dictionary_lines_without_separator_are_malformed(#[case] line: &str) {
        assert_eq!(
            classify(line, BlockKind::Dictionary, false),
            LineKind::Malformed
        );
    }

    #[test]
    fn array_lines_without_separator_are_items() {
        assert_eq!(
            classify("    8.8.8.8", BlockKind::Array, false),
            LineKind::Item("8.8.8.8")
        );
        assert_eq!(classify("", BlockKind::Array, false), LineKind::Malformed);
    }

    #[rstest]
    #[case("    b {")]
    #[case("<dictionary> {")]
    #[case("  } ")]
    #[case("value}\t")]
    fn array_lines_shaped_like_block_boundaries_are_malformed(
        #[case] line: &str,
        #[values(false, true)] strict: bool,
    ) {
        let kind = classify(line, BlockKind::Array, strict);
        assert!(
            matches!(kind, LineKind::Malformed | LineKind::Close),
            "{line:?} -> {kind:?}"
        );
    }

    #[rstest]
    #[case("State:/Network/Global/IPv4 <dictionary> {", Some("State:/Network/Global/IPv4"))]
    #[case("key <dictionary> {  \r\n", Some("key"))]
    #[case("<dictionary> {", None)]
    #[case("Foo {", None)]
    #[case("key <array> {", None)]
    fn parses_header_suffix(#[case] line: &str, #[case] key: Option<&str>) {
        assert_eq!(parse_header(line), key);
    }

    #[test]
    fn only_exact_opener_tokens_open_blocks() {
        assert_eq!(
            resolve_token("<dictionary> {"),
            Token::Open(BlockKind::Dictionary)
        );
        assert_eq!(resolve_token("<array> {"), Token::Open(BlockKind::Array));
        assert_eq!(resolve_token("<array> { "), Token::Text("<array> { "));
        assert_eq!(resolve_token("42"), Token::Text("42"));
    }
}
