//! Short title heuristics.
//!
//! The `<title>` of most pages carries the site name or a section label next
//! to the headline. The shortened title prefers a heading that repeats part of
//! the title, then splits on common delimiters.

use dom_query::{Document, NodeRef};

use crate::dom;
use crate::patterns::CJK;
use crate::text::normalize_whitespace;

use super::normalize_title;

/// Selectors whose text often repeats the headline.
const TITLE_CSS_HEURISTICS: [&str; 10] = [
    "#title",
    "#head",
    "#heading",
    ".pageTitle",
    ".news_title",
    ".title",
    ".head",
    ".heading",
    ".contentheading",
    ".small_header_red",
];

const DELIMITERS: [&str; 4] = [" | ", " - ", " :: ", " / "];

/// At least four words, or at least four characters with CJK ideographs.
fn is_substantial(part: &str) -> bool {
    part.split_whitespace().count() >= 4 || (part.chars().count() >= 4 && CJK.is_match(part))
}

/// Candidate check: two or more words, fifteen or more characters, and a
/// substring of the title once double quotes are ignored.
fn is_title_fragment(text: &str, title: &str) -> bool {
    text.split_whitespace().count() >= 2
        && text.chars().count() >= 15
        && title.replace('"', "").contains(&text.replace('"', ""))
}

fn push_candidate(candidates: &mut Vec<String>, raw: &str, title: &str) {
    if raw.trim().is_empty() {
        return;
    }
    let text = normalize_title(&normalize_whitespace(raw));
    if is_title_fragment(&text, title) && !candidates.contains(&text) {
        candidates.push(text);
    }
}

fn collect_from(nodes: &[NodeRef], candidates: &mut Vec<String>, title: &str) {
    for node in nodes {
        push_candidate(candidates, &dom::leading_text(node), title);
        push_candidate(candidates, &dom::text_content(node), title);
    }
}

/// Split-based shortening of `title`, or `None` when nothing qualifies.
fn split_title(title: &str) -> Option<String> {
    for delimiter in DELIMITERS {
        if !title.contains(delimiter) {
            continue;
        }
        let parts: Vec<&str> = title.split(delimiter).collect();
        let first = parts.first().copied().unwrap_or_default();
        let last = parts.last().copied().unwrap_or_default();
        if is_substantial(first) {
            return Some(first.to_string());
        }
        if is_substantial(last) {
            return Some(last.to_string());
        }
    }

    let (_, after_first) = title.split_once(": ")?;
    let last = title.rsplit(": ").next().unwrap_or_default();
    if is_substantial(last) {
        Some(last.to_string())
    } else {
        Some(after_first.to_string())
    }
}

/// Whether a shortened title has a plausible length.
fn has_plausible_length(title: &str) -> bool {
    let length = title.chars().count();
    if CJK.is_match(title) {
        (4..100).contains(&length)
    } else {
        (16..150).contains(&length)
    }
}

/// Shorten the normalized `title` of `doc`.
///
/// Returns `title` unchanged when no heuristic yields a plausible result.
#[must_use]
pub fn shorten_title(doc: &Document, title: &str) -> String {
    let mut candidates: Vec<String> = Vec::new();

    for tag in ["h1", "h2", "h3"] {
        collect_from(doc.select(tag).nodes(), &mut candidates, title);
    }
    for selector in TITLE_CSS_HEURISTICS {
        collect_from(doc.select(selector).nodes(), &mut candidates, title);
    }

    // Longest candidate; the first one found wins a tie.
    let best = candidates.iter().fold(None::<&String>, |best, c| match best {
        Some(b) if b.chars().count() >= c.chars().count() => Some(b),
        _ => Some(c),
    });

    let shortened = match best {
        Some(candidate) => candidate.clone(),
        None => split_title(title).unwrap_or_else(|| title.to_string()),
    };

    if has_plausible_length(&shortened) {
        shortened
    } else {
        title.to_string()
    }
}
