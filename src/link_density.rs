//! Link Density
//!
//! The share of a node's normalized text that sits inside anchors. Higher is
//! worse: navigation, tag clouds and comment link lists score close to 1.

use dom_query::NodeRef;

use crate::dom;
use crate::text::text_length;

/// Link density of `node`.
///
/// Sum of the normalized text length of every descendant `a` element divided
/// by `max(text_length(node), 1)`. A node without text yields `0.0`.
///
/// The ratio is not clamped; nested anchors are counted once per anchor
/// element, so malformed trees may report a density above 1.
#[must_use]
pub fn link_density(node: &NodeRef) -> f64 {
    let link_length: usize = dom::descendants_by_tag(node, &["a"])
        .iter()
        .map(text_length)
        .sum();
    let total_length = text_length(node);
    link_length as f64 / total_length.max(1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom_query::Document;

    fn density(html: &str) -> f64 {
        let doc = Document::from(html);
        let node = *doc.select("#n").nodes().first().expect("node");
        link_density(&node)
    }

    #[test]
    fn test_link_density_nav_menu() {
        let d = density(
            r#"<div id="n"><a href="/home">Home</a> <a href="/about">About</a></div>"#,
        );
        // "Home About": 8 of 10 characters are link text.
        assert!((d - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_link_density_article_paragraph() {
        let d = density(
            r#"<p id="n">This is a long paragraph with substantial text content. It
            contains a <a href="/link">single link</a> but the majority is prose.</p>"#,
        );
        assert!(d > 0.0 && d < 0.25);
    }

    #[test]
    fn test_link_density_no_links() {
        assert_eq!(density(r#"<p id="n">This paragraph has no links at all.</p>"#), 0.0);
    }

    #[test]
    fn test_link_density_empty_node() {
        assert_eq!(density(r#"<div id="n"></div>"#), 0.0);
    }

    #[test]
    fn test_link_density_nested_anchors_are_not_clamped() {
        // An anchor nested in another anchor is counted twice.
        let doc = Document::from(r#"<div id="n"></div>"#);
        let div = *doc.select("#n").nodes().first().expect("div");
        let outer = doc.tree.new_element("a");
        let inner = doc.tree.new_element("a");
        inner.set_text("linked");
        outer.append_child(&inner);
        div.append_child(&outer);

        assert!((link_density(&div) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_link_density_grows_with_anchor_text() {
        let shorter = density(r#"<p id="n">aaaaaaaaaa <a>bb</a>cccccccc</p>"#);
        let longer = density(r#"<p id="n">aaaaaaaaaa <a>bbbbbb</a>cccc</p>"#);
        assert!(longer >= shorter);
    }
}
