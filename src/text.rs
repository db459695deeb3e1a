//! Text normalization and length measurement.
//!
//! Normalized text length is the content-size signal used everywhere in the
//! pipeline: whitespace runs collapse to a single space, leading and trailing
//! whitespace is dropped, and characters (not bytes) are counted.

use dom_query::NodeRef;

use crate::dom;
use crate::patterns::WHITESPACE_NORMALIZE;

/// Collapse whitespace runs to single spaces and trim.
///
/// # Example
///
/// ```rust
/// use rs_readability::text::normalize_whitespace;
///
/// assert_eq!(normalize_whitespace("  a \n\t b  "), "a b");
/// ```
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_NORMALIZE.replace_all(text, " ").trim().to_string()
}

/// Character length of `text` after whitespace normalization.
#[must_use]
pub fn normalized_length(text: &str) -> usize {
    normalize_whitespace(text).chars().count()
}

/// Normalized length of all text under `node`.
#[must_use]
pub fn text_length(node: &NodeRef) -> usize {
    normalized_length(&dom::text_content(node))
}

/// Number of commas in the raw text under `node`.
#[must_use]
pub fn comma_count(node: &NodeRef) -> usize {
    dom::text_content(node).matches(',').count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse;

    #[test]
    fn normalizes_internal_runs() {
        assert_eq!(normalize_whitespace("one   two\n\nthree"), "one two three");
        assert_eq!(normalize_whitespace(" \t\n "), "");
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(normalized_length("  café  "), 4);
        assert_eq!(normalized_length("中文 内容"), 5);
    }

    #[test]
    fn text_length_spans_descendants() {
        let doc = parse("<div id=\"d\">  Hello <b>big</b>\n\n world </div>");
        let div = *doc.select("#d").nodes().first().expect("div");
        assert_eq!(text_length(&div), "Hello big world".len());
    }

    #[test]
    fn long_whitespace_runs_collapse() {
        let text = format!("foo{}bar", " ".repeat(1_000_000));
        assert_eq!(normalize_whitespace(&text), "foo bar");
    }

    #[test]
    fn comma_count_uses_raw_text() {
        let doc = parse("<p>a, b, <i>c,</i> d</p>");
        let p = *doc.select("p").nodes().first().expect("p");
        assert_eq!(comma_count(&p), 3);
    }
}
