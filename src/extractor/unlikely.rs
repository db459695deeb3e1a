//! Unlikely-candidate filter (ruthless mode only).

use dom_query::NodeRef;
use tracing::debug;

use crate::dom;
use crate::patterns::{MAYBE_CANDIDATE, UNLIKELY_CANDIDATES};

/// Whether the combined `class`/`id` text marks `node` as boilerplate.
#[must_use]
pub fn is_unlikely_candidate(node: &NodeRef) -> bool {
    let signature = format!("{} {}", dom::attr(node, "class"), dom::attr(node, "id"));
    if signature.chars().count() < 2 {
        return false;
    }
    UNLIKELY_CANDIDATES.is_match(&signature)
        && !MAYBE_CANDIDATE.is_match(&signature)
        && !dom::has_tag(node, &["html", "body"])
}

/// Detach every element under `root` whose class/id marks it as boilerplate.
///
/// Elements are collected before any removal; a node inside an already
/// detached subtree is detached again harmlessly.
pub fn remove_unlikely_candidates(root: &NodeRef, verbose: bool) -> usize {
    let elements: Vec<NodeRef> = root
        .descendants()
        .into_iter()
        .filter(NodeRef::is_element)
        .collect();

    let mut removed = 0;
    for elem in elements {
        if is_unlikely_candidate(&elem) {
            if verbose {
                debug!(node = %dom::describe(&elem, 1), "removing unlikely candidate");
            }
            dom::detach(&elem);
            removed += 1;
        }
    }
    removed
}
