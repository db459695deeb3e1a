//! Best-candidate selection and sibling merging.

use dom_query::NodeRef;
use tracing::debug;

use crate::dom;
use crate::link_density::link_density;
use crate::patterns::SENTENCE_END;

use super::candidates::{Candidate, CandidateSet};

/// Pick the highest-scoring candidate, logging the top five when verbose.
#[must_use]
pub fn select_best<'a>(candidates: &CandidateSet<'a>, verbose: bool) -> Option<Candidate<'a>> {
    let ranked = candidates.ranked();
    if verbose {
        for candidate in ranked.iter().take(5) {
            debug!(
                node = %dom::describe(&candidate.node, 1),
                score = candidate.content_score,
                "top candidate"
            );
        }
    }
    ranked.into_iter().next()
}

/// Minimum score for a sibling candidate to join the article.
#[must_use]
pub fn sibling_threshold(best_score: f64) -> f64 {
    (best_score * 0.2).max(10.0)
}

/// Whether a sibling paragraph reads like article prose on its own.
///
/// Long paragraphs need a link density below 0.25; short ones need no links
/// at all and a sentence ending in their leading text.
#[must_use]
pub fn is_prose_paragraph(node: &NodeRef) -> bool {
    if !dom::has_tag(node, &["p"]) {
        return false;
    }
    let density = link_density(node);
    let content = dom::leading_text(node);
    let length = content.chars().count();
    if length > 80 {
        density < 0.25
    } else {
        density == 0.0 && SENTENCE_END.is_match(&content)
    }
}

/// Move the best candidate and its qualifying siblings into a new `div`.
///
/// Siblings are collected before anything moves, so the walk sees the
/// original document order. The returned container is detached from the
/// document tree.
pub fn build_article<'a>(
    candidates: &CandidateSet<'a>,
    best: &Candidate<'a>,
    verbose: bool,
) -> NodeRef<'a> {
    let anchor = best.node;
    let container = anchor.tree.new_element("div");
    let threshold = sibling_threshold(best.content_score);

    let siblings = match dom::parent_element(&anchor) {
        Some(parent) => dom::element_children(&parent),
        None => vec![anchor],
    };

    for sibling in siblings {
        let append = sibling.id == anchor.id
            || candidates
                .get(&sibling.id)
                .is_some_and(|c| c.content_score >= threshold)
            || is_prose_paragraph(&sibling);

        if append {
            if verbose && sibling.id != anchor.id {
                debug!(node = %dom::describe(&sibling, 1), "appending sibling");
            }
            dom::move_into(&container, &sibling);
        }
    }

    container
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::scoring::score_paragraphs;
    use dom_query::Document;

    #[test]
    fn threshold_has_floor_of_ten() {
        assert_eq!(sibling_threshold(20.0), 10.0);
        assert!((sibling_threshold(100.0) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn prose_paragraph_rules() {
        let long = "word ".repeat(20);
        let html = format!(
            r#"<p id="long">{long}</p>
            <p id="sentence">Short but ends here. </p>
            <p id="fragment">no full stop</p>
            <p id="linked">Short <a href="/">link</a>.</p>
            <div id="div">{long}</div>"#
        );
        let doc = Document::from(html.as_str());
        let get = |s: &str| *doc.select(s).nodes().first().expect("node");

        assert!(is_prose_paragraph(&get("#long")));
        assert!(is_prose_paragraph(&get("#sentence")));
        assert!(!is_prose_paragraph(&get("#fragment")));
        assert!(!is_prose_paragraph(&get("#linked")));
        assert!(!is_prose_paragraph(&get("#div")));
    }

    #[test]
    fn siblings_join_in_document_order() {
        let body = "Sentence of article text, with commas, and more. ".repeat(4);
        let html = format!(
            r#"<html><body><div id="wrap">
            <p id="intro">An intro line.</p>
            <div id="main"><p>{body}</p><p>{body}</p></div>
            <div id="nav"><a href="/a">A</a></div>
            <p id="outro">{body}</p>
            </div></body></html>"#
        );
        let doc = Document::from(html.as_str());
        let candidates = score_paragraphs(&doc.root(), 25, false);
        let best = select_best(&candidates, false).expect("candidate");

        let article = build_article(&candidates, &best, false);
        let ids: Vec<String> = dom::element_children(&article)
            .iter()
            .map(|n| dom::attr(n, "id"))
            .collect();
        assert_eq!(ids, vec!["intro", "main", "outro"]);
        assert!(doc.select("#main").is_empty());
        assert!(doc.select("#nav").exists());
    }

    #[test]
    fn root_anchor_stands_alone() {
        let doc = Document::from(r#"<html class="article" id="body"><body></body></html>"#);
        let html = *doc.select("html").nodes().first().expect("html");
        let mut candidates = CandidateSet::new();
        candidates.ensure(html, 50.0);
        let best = candidates.best().expect("best");

        let article = build_article(&candidates, &best, false);
        assert_eq!(dom::element_children(&article).len(), 1);
        assert_eq!(dom::tag_name(&dom::element_children(&article)[0]), "html");
    }
}
