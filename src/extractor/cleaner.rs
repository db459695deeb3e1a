//! Document preparation and output cleaning.
//!
//! Preparation runs on every freshly parsed tree before any heuristic. Output
//! cleaning hands serialized markup to `ammonia`, which keeps structural tags
//! plus `class`/`id` and strips presentational and scripting attributes.

use dom_query::{Document, NodeRef};
use url::Url;

use crate::dom;
use crate::url_utils;

/// Marker id put on the `body` element of every prepared tree.
pub const BODY_ID: &str = "readabilityBody";

/// Tags that never carry article content.
const NON_CONTENT_TAGS: [&str; 3] = ["script", "style", "link"];

/// Tags allowed in the output on top of ammonia's defaults.
const EXTRA_TAGS: [&str; 8] = [
    "section", "main", "picture", "source", "video", "audio", "embed", "time",
];

/// Strip non-content elements, mark the body and absolutize links.
///
/// With a `base_url`, any `<base href>` is resolved against it first. Without
/// one, an absolute `<base href>` still serves as the base.
pub fn prepare(doc: &Document, base_url: Option<&Url>) {
    remove_non_content(&doc.root());

    for body in doc.select("body").nodes() {
        dom::set_attr(body, "id", BODY_ID);
    }

    if let Some(base) = url_utils::resolve_base_href(doc, base_url) {
        url_utils::make_links_absolute(doc, &base);
    }
}

/// Detach `script`, `style` and `link` elements under `root`.
pub fn remove_non_content(root: &NodeRef) {
    for elem in dom::descendants_by_tag(root, &NON_CONTENT_TAGS) {
        dom::detach(&elem);
    }
}

/// Clean serialized markup with the output policy.
#[must_use]
pub fn clean_attributes(html: &str) -> String {
    let mut builder = ammonia::Builder::new();
    builder
        .add_tags(&EXTRA_TAGS)
        .add_generic_attributes(&["class", "id"])
        .add_tag_attributes("img", &["srcset", "sizes"])
        .add_tag_attributes("source", &["src", "srcset", "type", "media"])
        .add_tag_attributes("video", &["src", "poster", "controls"])
        .add_tag_attributes("audio", &["src", "controls"])
        .add_tag_attributes("embed", &["src", "type"])
        .add_tag_attributes("time", &["datetime"])
        .rm_tag_attributes("img", &["width", "height", "align"])
        .link_rel(None);
    builder.clean(html).to_string()
}

/// Render the sanitized article container.
///
/// A partial rendering is a bare `<div>`; otherwise the div is enclosed in an
/// `<html><body>` skeleton.
#[must_use]
pub fn render_article(container: &NodeRef, html_partial: bool) -> String {
    let inner = clean_attributes(&container.inner_html());
    if html_partial {
        format!("<div>{inner}</div>")
    } else {
        format!("<html><body><div>{inner}</div></body></html>")
    }
}

/// Render a fallback node (the prepared `body`, or the whole tree).
#[must_use]
pub fn render_fallback(node: &NodeRef) -> String {
    let inner = clean_attributes(&node.inner_html());
    if dom::has_tag(node, &["body"]) {
        format!("<body id=\"{BODY_ID}\">{inner}</body>")
    } else {
        format!("<div>{inner}</div>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepare_strips_scripts_and_marks_body() {
        let doc = Document::from(
            r#"<html><head><style>p{}</style><link rel="stylesheet" href="a.css"></head>
            <body><script>alert(1)</script><p>text</p></body></html>"#,
        );
        prepare(&doc, None);

        assert!(doc.select("script, style, link").is_empty());
        assert!(doc.select("body#readabilityBody").exists());
    }

    #[test]
    fn clean_attributes_keeps_structure_and_ids() {
        let cleaned = clean_attributes(
            r#"<section id="s" class="c" style="color:red"><p onclick="x()" align="left">Hi</p>
            <img src="a.png" width="10" height="10" alt="A"></section>"#,
        );

        assert!(cleaned.contains(r#"<section id="s" class="c">"#));
        assert!(cleaned.contains("<p>Hi</p>"));
        assert!(cleaned.contains(r#"<img src="a.png" alt="A">"#));
        assert!(!cleaned.contains("style="));
        assert!(!cleaned.contains("width="));
    }

    #[test]
    fn links_keep_their_attributes_without_rel() {
        let cleaned = clean_attributes(r##"<a href="#">x</a>"##);
        assert_eq!(cleaned, r##"<a href="#">x</a>"##);
    }

    #[test]
    fn render_article_wraps_by_mode() {
        let doc = Document::from("<div id=\"c\"><p>Body</p></div>");
        let container = *doc.select("#c").nodes().first().expect("container");

        assert_eq!(render_article(&container, true), "<div><p>Body</p></div>");
        assert_eq!(
            render_article(&container, false),
            "<html><body><div><p>Body</p></div></body></html>"
        );
    }

    #[test]
    fn render_fallback_keeps_body_marker() {
        let doc = Document::from(r##"<h2><a href="#"></a>foobar</h2>"##);
        let body = *doc.select("body").nodes().first().expect("body");

        assert_eq!(
            render_fallback(&body),
            r##"<body id="readabilityBody"><h2><a href="#"></a>foobar</h2></body>"##
        );
    }
}
