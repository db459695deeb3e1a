//! HTML Meta Tag Extraction
//!
//! Byline lookup from `<meta>` tags. `name="author"` is authoritative and
//! returned as written; the secondary byline tags used by news CMSes are only
//! accepted when their content looks like a person's name.

use dom_query::Document;

use crate::dom;

/// Secondary byline meta names, highest priority first.
const SECONDARY_AUTHOR_NAMES: [&str; 5] = [
    "article:author",
    "dc.creator",
    "byl",
    "sailthru.author",
    "parsely-author",
];

/// One meta tag with a name and non-blank content.
#[derive(Debug)]
struct MetaPair {
    /// Lowercased `name`, or `property` when `name` is absent.
    name: String,
    content: String,
    /// The name came from `property` (Open Graph style tags).
    from_property: bool,
}

/// Collect every meta tag with both a name and content set.
fn meta_pairs(doc: &Document) -> Vec<MetaPair> {
    doc.select("meta")
        .nodes()
        .iter()
        .filter_map(|node| {
            let mut name = dom::attr(node, "name");
            let from_property = name.is_empty();
            if from_property {
                name = dom::attr(node, "property");
            }
            let content = dom::attr(node, "content");
            if name.is_empty() || content.trim().is_empty() {
                None
            } else {
                Some(MetaPair {
                    name: name.to_lowercase(),
                    content,
                    from_property,
                })
            }
        })
        .collect()
}

/// Byline from meta tags.
///
/// Returns the first non-empty `<meta name="author">` content unchanged, else
/// the first valid secondary byline in priority order. `property="author"` is
/// not a byline (publishers put profile URLs there); secondary names such as
/// `article:author` are accepted from either attribute.
#[must_use]
pub fn extract_author(doc: &Document) -> Option<String> {
    let pairs = meta_pairs(doc);

    if let Some(pair) = pairs
        .iter()
        .find(|pair| pair.name == "author" && !pair.from_property)
    {
        return Some(pair.content.clone());
    }

    SECONDARY_AUTHOR_NAMES.iter().find_map(|wanted| {
        pairs
            .iter()
            .find(|pair| pair.name == *wanted && validate_metadata_name(&pair.content))
            .map(|pair| pair.content.trim().to_string())
    })
}

/// Validate that a metadata name looks like a real author name.
///
/// Filters out:
/// - Empty or very short names
/// - Names that look like URLs
/// - Names with too many special characters
/// - Names that look like JSON
#[must_use]
pub fn validate_metadata_name(name: &str) -> bool {
    let name = name.trim();

    if name.chars().count() < 2 || name.chars().count() > 120 {
        return false;
    }

    // A long single token is a handle or an id, not a name.
    if name.len() > 20 && !name.contains(' ') {
        return false;
    }

    if name.starts_with("http://") || name.starts_with("https://") || name.starts_with("www.") {
        return false;
    }

    if name.contains(".com") || name.contains(".org") || name.contains(".net") {
        return false;
    }

    if name.starts_with('{') || name.starts_with('[') {
        return false;
    }

    let digit_count = name.chars().filter(char::is_ascii_digit).count();
    if digit_count > 3 {
        return false;
    }

    let special_count = name
        .chars()
        .filter(|c| {
            !c.is_alphanumeric() && !c.is_whitespace() && *c != '-' && *c != '\'' && *c != '.'
        })
        .count();
    special_count <= 2
}
