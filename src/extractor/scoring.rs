//! Candidate scoring.
//!
//! Every paragraph-like element (`p`, `pre`, `td`) with enough text pushes a
//! content score into its parent and grandparent. Once all paragraphs have
//! been visited, each candidate is discounted by its link density exactly once.

use dom_query::NodeRef;
use tracing::debug;

use crate::dom;
use crate::link_density::link_density;
use crate::patterns::{NEGATIVE, POSITIVE};
use crate::text::{normalize_whitespace, text_length};

use super::candidates::CandidateSet;

/// Tags whose text feeds the scorer, visited in this order.
const PARAGRAPH_TAGS: [&str; 3] = ["p", "pre", "td"];

/// Class/id weight of a node.
///
/// `class` and `id` are checked independently: each non-empty value scores
/// -25 when it matches the negative vocabulary and +25 when it matches the
/// positive one. A missing attribute counts as empty.
#[must_use]
pub fn class_weight(node: &NodeRef) -> f64 {
    let mut weight = 0.0;
    for name in ["class", "id"] {
        let value = dom::attr(node, name);
        if value.is_empty() {
            continue;
        }
        if NEGATIVE.is_match(&value) {
            weight -= 25.0;
        }
        if POSITIVE.is_match(&value) {
            weight += 25.0;
        }
    }
    weight
}

/// Structural bonus or penalty for a tag.
#[must_use]
pub fn tag_weight(tag: &str) -> f64 {
    match tag {
        "div" => 5.0,
        "pre" | "td" | "blockquote" => 3.0,
        "address" | "ol" | "ul" | "dl" | "dd" | "dt" | "li" | "form" => -3.0,
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "th" => -5.0,
        _ => 0.0,
    }
}

/// Initial score of a freshly created candidate.
#[must_use]
pub fn score_node(node: &NodeRef) -> f64 {
    class_weight(node) + tag_weight(&dom::tag_name(node))
}

/// Content contribution of one paragraph with normalized `text`.
///
/// One point for the paragraph, one per comma-separated segment, and one per
/// hundred characters up to three.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn content_delta(text: &str) -> f64 {
    let length = text.chars().count() as f64;
    let segments = text.split(',').count() as f64;
    1.0 + segments + (length / 100.0).min(3.0)
}

/// Score every paragraph under `root` and return the candidate set.
///
/// Paragraphs whose parent or grandparent is not an element (the document
/// node) are skipped, as are paragraphs shorter than `min_text_length`.
#[must_use]
pub fn score_paragraphs<'a>(
    root: &NodeRef<'a>,
    min_text_length: usize,
    verbose: bool,
) -> CandidateSet<'a> {
    let mut candidates = CandidateSet::new();

    for tag in PARAGRAPH_TAGS {
        for elem in dom::descendants_by_tag(root, &[tag]) {
            let Some(parent) = dom::parent_element(&elem) else {
                continue;
            };
            let grandparent = dom::parent_element(&parent);

            let inner_text = normalize_whitespace(&dom::text_content(&elem));
            if inner_text.chars().count() < min_text_length {
                continue;
            }

            candidates.ensure(parent, score_node(&parent));
            if let Some(gp) = grandparent {
                candidates.ensure(gp, score_node(&gp));
            }

            let delta = content_delta(&inner_text);
            candidates.add(&parent.id, delta);
            if let Some(gp) = grandparent {
                candidates.add(&gp.id, delta / 2.0);
            }
        }
    }

    candidates.for_each_mut(|candidate| {
        let density = link_density(&candidate.node);
        let before = candidate.content_score;
        candidate.content_score *= 1.0 - density;
        if verbose {
            debug!(
                node = %dom::describe(&candidate.node, 1),
                before,
                after = candidate.content_score,
                link_density = density,
                length = text_length(&candidate.node),
                "candidate scored"
            );
        }
    });

    candidates
}
