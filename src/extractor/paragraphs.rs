//! Div normalizer.
//!
//! Pages often use `div` where `p` is meant. Divs without block-level markup
//! become paragraphs; mixed divs get their loose text wrapped in explicit
//! paragraphs so the scorer can see it.

use dom_query::NodeRef;
use tracing::debug;

use crate::dom;
use crate::patterns::DIV_TO_P_ELEMENTS;

/// Run both normalizer passes over every `div` under `root`.
pub fn transform_misused_divs(root: &NodeRef, verbose: bool) {
    retag_inline_divs(root, verbose);
    wrap_loose_text(root);
}

/// Retag as `p` every `div` whose inner markup has no block-level tag.
pub fn retag_inline_divs(root: &NodeRef, verbose: bool) -> usize {
    let mut retagged = 0;
    for div in dom::descendants_by_tag(root, &["div"]) {
        if DIV_TO_P_ELEMENTS.is_match(&div.inner_html()) {
            continue;
        }
        if verbose {
            debug!(node = %dom::describe(&div, 1), "altering div to p");
        }
        dom::retag(&div, "p");
        retagged += 1;
    }
    retagged
}

/// Wrap leading text and non-blank tail text of remaining divs in `p`
/// elements and drop their `br` children.
pub fn wrap_loose_text(root: &NodeRef) {
    for div in dom::descendants_by_tag(root, &["div"]) {
        let leading = dom::leading_text(&div);
        if !leading.trim().is_empty() {
            for text in dom::leading_text_nodes(&div) {
                dom::detach(&text);
            }
            let p = dom::new_paragraph(&div, &leading);
            div.prepend_child(&p);
        }

        for child in dom::element_children(&div).into_iter().rev() {
            let tail = dom::tail_text(&child);
            if !tail.trim().is_empty() {
                for text in dom::tail_text_nodes(&child) {
                    dom::detach(&text);
                }
                let p = dom::new_paragraph(&div, &tail);
                child.insert_after(&p);
            }
            if dom::has_tag(&child, &["br"]) {
                dom::detach(&child);
            }
        }
    }
}
