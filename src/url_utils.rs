//! URL Utility Functions
//!
//! Link absolutization for prepared documents, base-URL derivation for
//! article URLs and the DOM side of multi-page articles (next-page discovery
//! and duplicate detection). Parsing and joining are done with the `url`
//! crate. Nothing here fetches.

use std::collections::HashSet;
use std::sync::LazyLock;

use dom_query::{Document, NodeRef};
use regex::Regex;
use tracing::debug;
use url::{Position, Url};

use crate::dom;
use crate::patterns::{EXTRANEOUS, FIRST_LAST, NEGATIVE, NEXT_LINK, PAGE, POSITIVE, PREV_LINK};
use crate::text::normalize_whitespace;

/// Trailing page marker of a path segment (`page5`, `article-5`, `_p2`).
#[allow(clippy::expect_used)]
static PAGE_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"((_|-)?p[a-z]*|(_|-))[0-9]{1,2}$").expect("valid regex")
});

/// A one- or two-digit path segment.
#[allow(clippy::expect_used)]
static PAGE_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}$").expect("valid regex"));

/// Attributes rewritten by [`make_links_absolute`].
const LINK_ATTRIBUTES: [&str; 4] = ["href", "src", "action", "poster"];

/// Schemes that are never resolved against a base.
const SPECIAL_SCHEMES: [&str; 4] = ["data:", "javascript:", "mailto:", "tel:"];

/// Parse `s` as an absolute `http`/`https` URL with a host.
///
/// # Returns
/// * `Some(Url)` if valid absolute URL, `None` otherwise
#[must_use]
pub fn parse_absolute_url(s: &str) -> Option<Url> {
    let s = s.trim();
    if !s.starts_with("http://") && !s.starts_with("https://") {
        return None;
    }
    Url::parse(s).ok().filter(|url| url.host().is_some())
}

/// Whether a link must be left exactly as written.
fn is_unresolvable(link: &str) -> bool {
    let lower = link.to_ascii_lowercase();
    link.starts_with('#') || SPECIAL_SCHEMES.iter().any(|s| lower.starts_with(s))
}

/// Convert a relative or absolute URL to absolute form.
///
/// Special schemes (`data:`, `javascript:`, `mailto:`, `tel:`) and
/// fragment-only links are returned unchanged, as is anything the base cannot
/// resolve.
#[must_use]
pub fn create_absolute_url(url_str: &str, base: &Url) -> String {
    let url_str = url_str.trim();

    if url_str.is_empty() || is_unresolvable(url_str) {
        return url_str.to_string();
    }

    if parse_absolute_url(url_str).is_some() {
        return url_str.to_string();
    }

    match base.join(url_str) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => url_str.to_string(),
    }
}

/// Determine the base URL of a document and drop its `<base>` elements.
///
/// With `base_url`, the first `<base href>` is resolved against it. Without,
/// an absolute `<base href>` is used on its own.
#[must_use]
pub fn resolve_base_href(doc: &Document, base_url: Option<&Url>) -> Option<Url> {
    let bases = doc.select("base[href]");
    let href = bases
        .nodes()
        .first()
        .map(|node| dom::attr(node, "href").trim().to_string())
        .filter(|href| !href.is_empty());
    for node in bases.nodes() {
        dom::detach(node);
    }

    match (base_url, href) {
        (Some(base), Some(href)) => base.join(&href).ok().or_else(|| Some(base.clone())),
        (Some(base), None) => Some(base.clone()),
        (None, Some(href)) => parse_absolute_url(&href),
        (None, None) => None,
    }
}

/// Rewrite `href`, `src`, `action` and `poster` attributes against `base`.
pub fn make_links_absolute(doc: &Document, base: &Url) {
    for name in LINK_ATTRIBUTES {
        for node in doc.select(&format!("[{name}]")).nodes() {
            let value = dom::attr(node, name);
            let absolute = create_absolute_url(&value, base);
            if absolute != value {
                dom::set_attr(node, name, &absolute);
            }
        }
    }
}

// === Base URL derivation ===

/// Drop a trailing alphabetic file extension: `article.html` → `article`.
fn clean_segment_extension(segment: &str) -> Option<String> {
    let mut parts = segment.split('.');
    let stem = parts.next().unwrap_or_default();
    match parts.next() {
        Some(ext) if ext.chars().all(|c| c.is_ascii_alphabetic()) => Some(stem.to_string()),
        _ => Some(segment.to_string()),
    }
}

/// EW-CMS segments carry a `,00` suffix.
fn clean_segment_ewcms(segment: &str) -> Option<String> {
    Some(segment.replace(",00", ""))
}

fn clean_segment_page_number(count: usize, index: usize, segment: &str) -> Option<String> {
    if index + 2 < count {
        return Some(segment.to_string());
    }
    let cleaned = PAGE_MARKER_RE.replace(segment, "");
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.into_owned())
    }
}

fn clean_segment_number(count: usize, index: usize, segment: &str) -> Option<String> {
    if index + 2 >= count && PAGE_NUMBER_RE.is_match(segment) {
        None
    } else {
        Some(segment.to_string())
    }
}

/// Clean one path segment; `None` drops it from the base URL.
fn clean_segment(count: usize, index: usize, segment: &str) -> Option<String> {
    let segment = clean_segment_extension(segment)?;
    let segment = clean_segment_ewcms(&segment)?;
    let segment = clean_segment_page_number(count, index, &segment)?;
    clean_segment_number(count, index, &segment)
}

/// Derive the base URL of a possibly paginated article URL.
///
/// Extensions, EW-CMS suffixes and page markers are stripped from the path;
/// query and fragment are dropped.
///
/// # Examples
/// ```
/// use rs_readability::url_utils::find_base_url;
///
/// assert_eq!(find_base_url(Some("http://foo.com/path/to/page5.html")).as_deref(), Some("http://foo.com/path/to"));
/// assert_eq!(find_base_url(Some("http://foo.com/article-5.html")).as_deref(), Some("http://foo.com/article"));
/// assert_eq!(find_base_url(None), None);
/// ```
#[must_use]
pub fn find_base_url(url: Option<&str>) -> Option<String> {
    let url = url?;
    let (prefix, path) = match Url::parse(url) {
        Ok(parsed) if parsed.has_host() => (
            parsed[..Position::BeforePath].to_string(),
            parsed.path().to_string(),
        ),
        _ => {
            let end = url.find(['?', '#']).unwrap_or(url.len());
            (String::new(), url[..end].to_string())
        }
    };

    let segments: Vec<&str> = path.split('/').collect();
    let count = segments.len();
    let cleaned: Vec<String> = segments
        .iter()
        .enumerate()
        .filter_map(|(index, segment)| clean_segment(count, index, segment))
        .collect();
    let new_path = cleaned.join("/");

    if prefix.is_empty() {
        return Some(new_path);
    }
    if new_path.is_empty() || new_path.starts_with('/') {
        Some(format!("{prefix}{new_path}"))
    } else {
        Some(format!("{prefix}/{new_path}"))
    }
}

// === Multi-page articles ===

/// Score a link needs before it is taken as the next page.
const NEXT_PAGE_MIN_SCORE: i32 = 50;

/// Link text longer than this is prose, not a pagination control.
const MAX_LINK_TEXT: usize = 25;

/// Evidence collected for one next-page href.
#[derive(Debug)]
struct PageLink {
    href: String,
    link_text: String,
    score: i32,
}

/// Find the link to the next page of a paginated article.
///
/// Every `a[href]` under `root` is scored on its text, `class`/`id`, the
/// names of its ancestors and the href itself. Hrefs in `parsed_urls`, the
/// page itself, its base URL and links without a digit beyond the base URL
/// are skipped. With `url`, hrefs are resolved against it and links to
/// another host are skipped; without, hrefs are compared as written. The
/// best link scoring at least 50 wins, the first one on a tie.
///
/// # Examples
/// ```
/// use std::collections::HashSet;
/// use rs_readability::url_utils::find_next_page_url;
///
/// let doc = dom_query::Document::from(r#"<body><a href="/?page=2">next</a></body>"#);
/// let next = find_next_page_url(&HashSet::new(), None, &doc.root());
/// assert_eq!(next.as_deref(), Some("/?page=2"));
/// ```
#[must_use]
pub fn find_next_page_url(
    parsed_urls: &HashSet<String>,
    url: Option<&str>,
    root: &NodeRef,
) -> Option<String> {
    let page_url = url.and_then(|u| Url::parse(u).ok());
    let base_url = find_base_url(url);

    let mut links: Vec<PageLink> = Vec::new();
    for link in dom::descendants_by_tag(root, &["a"]) {
        score_page_link(
            parsed_urls,
            page_url.as_ref(),
            base_url.as_deref(),
            &mut links,
            &link,
        );
    }

    let best = links
        .iter()
        .filter(|link| link.score >= NEXT_PAGE_MIN_SCORE)
        .fold(None::<&PageLink>, |best, link| match best {
            Some(b) if b.score >= link.score => Some(b),
            _ => Some(link),
        })?;
    debug!(href = %best.href, score = best.score, text = %best.link_text, "next page link");
    Some(best.href.clone())
}

/// Fold the evidence of one `<a>` into `links`.
fn score_page_link(
    parsed_urls: &HashSet<String>,
    page_url: Option<&Url>,
    base_url: Option<&str>,
    links: &mut Vec<PageLink>,
    link: &NodeRef,
) {
    let raw = dom::attr(link, "href");
    let raw = raw.trim();
    if raw.is_empty() || is_unresolvable(raw) {
        return;
    }
    let href = match page_url {
        Some(page) => create_absolute_url(raw, page),
        None => raw.to_string(),
    };
    if Some(href.as_str()) == base_url
        || page_url.is_some_and(|page| page.as_str() == href)
        || parsed_urls.contains(&href)
        || parsed_urls.contains(raw)
    {
        return;
    }
    if let Some(page) = page_url {
        let same_host = Url::parse(&href)
            .ok()
            .is_some_and(|target| target.host_str() == page.host_str());
        if !same_host {
            return;
        }
    }

    let link_text = normalize_whitespace(&dom::text_content(link));
    if EXTRANEOUS.is_match(&link_text) || link_text.chars().count() > MAX_LINK_TEXT {
        return;
    }
    let leftover = match base_url {
        Some(base) => href.replace(base, ""),
        None => href.clone(),
    };
    if !leftover.chars().any(|c| c.is_ascii_digit()) {
        return;
    }

    let index = match links.iter().position(|l| l.href == href) {
        Some(index) => {
            let existing = &mut links[index];
            existing.link_text = format!("{} | {link_text}", existing.link_text);
            index
        }
        None => {
            links.push(PageLink {
                href: href.clone(),
                link_text: link_text.clone(),
                score: 0,
            });
            links.len() - 1
        }
    };
    let candidate = &mut links[index];

    if base_url.is_some_and(|base| !href.starts_with(base)) {
        candidate.score -= 25;
    }

    let link_data = format!(
        "{link_text} {} {}",
        dom::attr(link, "class"),
        dom::attr(link, "id")
    );
    if NEXT_LINK.is_match(&link_data) {
        candidate.score += 50;
    }
    if PAGE.is_match(&link_data) {
        candidate.score += 25;
    }
    if FIRST_LAST.is_match(&link_data) && !NEXT_LINK.is_match(&candidate.link_text) {
        candidate.score -= 65;
    }
    if NEGATIVE.is_match(&link_data) || EXTRANEOUS.is_match(&link_data) {
        candidate.score -= 50;
    }
    if PREV_LINK.is_match(&link_data) {
        candidate.score -= 200;
    }

    // Each ancestor signal counts once, for the nearest match.
    let mut positive_ancestor = false;
    let mut negative_ancestor = false;
    let mut current = dom::parent_element(link);
    while let Some(ancestor) = current {
        let names = format!("{} {}", dom::attr(&ancestor, "class"), dom::attr(&ancestor, "id"));
        if !positive_ancestor && PAGE.is_match(&names) {
            positive_ancestor = true;
            candidate.score += 25;
        }
        if !negative_ancestor && NEGATIVE.is_match(&names) && !POSITIVE.is_match(&names) {
            negative_ancestor = true;
            candidate.score -= 25;
        }
        current = dom::parent_element(&ancestor);
    }

    if PAGE.is_match(&href) {
        candidate.score += 25;
    }
    if EXTRANEOUS.is_match(&href) {
        candidate.score -= 15;
    }

    // Numbered pagination: "1" is usually the page already read, low numbers
    // are more likely the next one.
    if let Ok(number) = link_text.parse::<i32>() {
        if number == 1 {
            candidate.score -= 10;
        } else {
            candidate.score += (10 - number).max(0);
        }
    }
}

/// Text of `node` with all whitespace removed, so markup layout does not
/// affect comparisons.
fn text_key(node: &NodeRef) -> String {
    dom::text_content(node).split_whitespace().collect()
}

/// Whether `page` repeats content already in `article`.
///
/// `article` is either a single page or a container whose element children
/// are the pages appended so far. The page is a duplicate when its text,
/// ignoring whitespace, is not empty and equals the text of the article or
/// of one of those children.
#[must_use]
pub fn is_suspected_duplicate(article: &NodeRef, page: &NodeRef) -> bool {
    let page_text = text_key(page);
    if page_text.is_empty() {
        return false;
    }
    text_key(article) == page_text
        || dom::element_children(article)
            .iter()
            .any(|existing| text_key(existing) == page_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com/news/story.html").expect("base")
    }

    #[test]
    fn test_parse_absolute_url() {
        assert!(parse_absolute_url("https://example.com/path").is_some());
        assert!(parse_absolute_url("http://example.com").is_some());
        assert!(parse_absolute_url("/relative/path").is_none());
        assert!(parse_absolute_url("example.com").is_none());
        assert!(parse_absolute_url("ftp://example.com").is_none());
        assert!(parse_absolute_url("").is_none());
    }

    #[test]
    fn test_create_absolute_url() {
        assert_eq!(create_absolute_url("/img/a.png", &base()), "https://example.com/img/a.png");
        assert_eq!(create_absolute_url("next.html", &base()), "https://example.com/news/next.html");
        assert_eq!(
            create_absolute_url("https://cdn.example.org/x.js", &base()),
            "https://cdn.example.org/x.js"
        );
    }

    #[test]
    fn test_special_links_are_untouched() {
        for link in ["#top", "mailto:a@b.c", "javascript:void(0)", "tel:123", "data:image/png;base64,AA"] {
            assert_eq!(create_absolute_url(link, &base()), link);
        }
    }

    #[test]
    fn test_base_href_is_resolved_and_removed() {
        let doc = Document::from(
            r#"<html><head><base href="/archive/"></head><body><a href="a.html">a</a></body></html>"#,
        );
        let resolved = resolve_base_href(&doc, Some(&base())).expect("base");

        assert_eq!(resolved.as_str(), "https://example.com/archive/");
        assert!(doc.select("base").is_empty());
    }

    #[test]
    fn test_relative_base_href_needs_a_url() {
        let doc = Document::from(r#"<html><head><base href="/archive/"></head></html>"#);
        assert!(resolve_base_href(&doc, None).is_none());

        let doc = Document::from(r#"<html><head><base href="https://a.example/x/"></head></html>"#);
        assert_eq!(
            resolve_base_href(&doc, None).map(|u| u.to_string()).as_deref(),
            Some("https://a.example/x/")
        );
    }

    #[test]
    fn test_make_links_absolute() {
        let doc = Document::from(
            r##"<body><a id="a" href="../about">About</a><img id="i" src="pic.jpg">
            <a id="f" href="#notes">Notes</a><form id="s" action="/search"></form></body>"##,
        );
        make_links_absolute(&doc, &base());

        let attr = |sel: &str, name: &str| {
            dom::attr(doc.select(sel).nodes().first().expect("node"), name)
        };
        assert_eq!(attr("#a", "href"), "https://example.com/about");
        assert_eq!(attr("#i", "src"), "https://example.com/news/pic.jpg");
        assert_eq!(attr("#f", "href"), "#notes");
        assert_eq!(attr("#s", "action"), "https://example.com/search");
    }

    #[test]
    fn test_segment_extension() {
        assert_eq!(clean_segment_extension("article.html").as_deref(), Some("article"));
        assert_eq!(clean_segment_extension("article.123not").as_deref(), Some("article.123not"));
        assert_eq!(clean_segment_extension("plain").as_deref(), Some("plain"));
    }

    #[test]
    fn test_page_number_only_in_last_two_segments() {
        assert_eq!(clean_segment(4, 1, "page5"), Some("page5".to_string()));
        assert_eq!(clean_segment(4, 3, "page5"), None);
        assert_eq!(clean_segment(4, 3, "12"), None);
        assert_eq!(clean_segment(4, 3, "123"), Some("123".to_string()));
    }

    fn pager(links: &str) -> Document {
        let html = format!(r#"<html><body><p>Story text.</p><div class="pager">{links}</div></body></html>"#);
        Document::from(html.as_str())
    }

    fn first_div(doc: &Document) -> NodeRef<'_> {
        *doc.select("div").nodes().first().expect("div")
    }

    #[test]
    fn test_next_link_beats_previous_link() {
        let doc = pager(
            r#"<a href="story.html?page=1">« Previous</a> <a href="story.html?page=3">Next »</a>"#,
        );
        let next = find_next_page_url(
            &HashSet::new(),
            Some("http://example.com/story.html?page=2"),
            &doc.root(),
        );
        assert_eq!(next.as_deref(), Some("http://example.com/story.html?page=3"));
    }

    #[test]
    fn test_numbered_pagination_prefers_lowest_new_page() {
        let doc = pager(
            r#"<a href="/story?page=1">1</a><a href="/story?page=2">2</a><a href="/story?page=3">3</a>"#,
        );
        let next = find_next_page_url(&HashSet::new(), None, &doc.root());
        assert_eq!(next.as_deref(), Some("/story?page=2"));

        let parsed: HashSet<String> = HashSet::from(["/story?page=2".to_string()]);
        let next = find_next_page_url(&parsed, None, &doc.root());
        assert_eq!(next.as_deref(), Some("/story?page=3"));
    }

    #[test]
    fn test_other_hosts_and_weak_links_are_ignored() {
        let doc = pager(r#"<a href="http://other.example/story-2">next</a><a href="/about">About us</a>"#);
        let next = find_next_page_url(&HashSet::new(), Some("http://example.com/story"), &doc.root());
        assert_eq!(next, None);
    }

    #[test]
    fn test_duplicate_page_detection() {
        let article_doc = Document::from(
            r#"<div id="article"><div id="p1"><p>First page of the story.</p></div><div id="p2"><p>Second page.</p></div></div>"#,
        );
        let article = first_div(&article_doc);

        let repeat = Document::from("<div><p>Second\n  page.</p></div>");
        let fresh = Document::from("<div><p>Third page.</p></div>");
        let empty = Document::from("<div></div>");

        assert!(is_suspected_duplicate(&article, &first_div(&repeat)));
        assert!(!is_suspected_duplicate(&article, &first_div(&fresh)));
        assert!(!is_suspected_duplicate(&article, &first_div(&empty)));
    }
}
