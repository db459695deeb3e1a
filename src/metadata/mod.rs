//! Metadata extraction module.
//!
//! Title, short title and byline of a document. None of these depend on the
//! content scoring; they read the parsed tree as it came from the parser.

pub mod meta_tags;
pub mod title;

use dom_query::Document;

use crate::dom;
use crate::text::normalize_whitespace;

pub use meta_tags::{extract_author, validate_metadata_name};
pub use title::shorten_title;

/// Returned by [`extract_title`] when the page has no usable `<title>`.
pub const NO_TITLE: &str = "[no-title]";

/// Returned by [`author_or_sentinel`] when no byline is found.
pub const NO_AUTHOR: &str = "[no-author]";

/// Replace typographic dashes, non-breaking spaces and guillemets with their
/// plain equivalents.
#[must_use]
pub fn normalize_entities(title: &str) -> String {
    title
        .replace(['\u{2014}', '\u{2013}'], "-")
        .replace("&mdash;", "-")
        .replace("&ndash;", "-")
        .replace('\u{00A0}', " ")
        .replace(['\u{00AB}', '\u{00BB}'], "\"")
        .replace("&quot;", "\"")
}

/// Whitespace- and entity-normalize a title.
#[must_use]
pub fn normalize_title(title: &str) -> String {
    normalize_entities(&normalize_whitespace(title))
}

/// Raw text of the first `<title>`, if any.
fn raw_title(doc: &Document) -> Option<String> {
    let titles = doc.select("title");
    let node = titles.nodes().first()?;
    let text = dom::text_content(node).to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Normalized document title, or [`NO_TITLE`].
#[must_use]
pub fn extract_title(doc: &Document) -> String {
    raw_title(doc).map_or_else(|| NO_TITLE.to_string(), |t| normalize_title(&t))
}

/// Heuristically shortened title, or an empty string without a `<title>`.
#[must_use]
pub fn extract_short_title(doc: &Document) -> String {
    match raw_title(doc) {
        Some(raw) => shorten_title(doc, &normalize_title(&raw)),
        None => String::new(),
    }
}

/// Byline from meta tags, or [`NO_AUTHOR`].
#[must_use]
pub fn author_or_sentinel(doc: &Document) -> String {
    extract_author(doc).unwrap_or_else(|| NO_AUTHOR.to_string())
}
