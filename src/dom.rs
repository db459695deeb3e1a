//! DOM Operations Adapter
//!
//! Thin helpers over `dom_query` nodes. The parsed document is an arena: every
//! node is addressed by a stable [`NodeId`], which is what the candidate map and
//! the sanitizer's rescue set are keyed by. Nodes are detached, retagged and
//! inserted in place; detached nodes stay in the arena but are no longer
//! reachable from the document root.
//!
//! Text follows the element-tree text/tail model used by the heuristics:
//! - **leading text**: text nodes of an element before its first child element
//! - **tail text**: text nodes after an element, up to its next element sibling

pub use dom_query::{Document, NodeId, NodeRef, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

// === Parsing ===

/// Parse an HTML string into a fresh document tree.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Tag/Attribute Information ===

/// Lowercase tag name, or an empty string for non-element nodes.
#[must_use]
pub fn tag_name(node: &NodeRef) -> String {
    if !node.is_element() {
        return String::new();
    }
    node.node_name()
        .map(|t| t.to_ascii_lowercase())
        .unwrap_or_default()
}

/// Check whether `node` is an element with one of the given (lowercase) tags.
#[must_use]
pub fn has_tag(node: &NodeRef, tags: &[&str]) -> bool {
    let tag = tag_name(node);
    !tag.is_empty() && tags.contains(&tag.as_str())
}

/// Attribute value, with a missing attribute reported as an empty string.
///
/// The heuristics treat "absent" and "empty" identically.
#[must_use]
pub fn attr(node: &NodeRef, name: &str) -> String {
    node.attr(name).map(|v| v.to_string()).unwrap_or_default()
}

/// Set an attribute value.
#[inline]
pub fn set_attr(node: &NodeRef, name: &str, value: &str) {
    Selection::from(*node).set_attr(name, value);
}

// === Tree Navigation ===

/// Parent node, when it is an element (the document node is not).
#[must_use]
pub fn parent_element<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    node.parent().filter(NodeRef::is_element)
}

/// Element children in document order.
#[must_use]
pub fn element_children<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    node.children().into_iter().filter(NodeRef::is_element).collect()
}

/// Descendant elements (excluding `node` itself) whose tag is in `tags`,
/// in document order.
#[must_use]
pub fn descendants_by_tag<'a>(node: &NodeRef<'a>, tags: &[&str]) -> Vec<NodeRef<'a>> {
    node.descendants()
        .into_iter()
        .filter(|n| has_tag(n, tags))
        .collect()
}

/// Following element siblings, nearest first.
#[must_use]
pub fn following_elements<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    let mut out = Vec::new();
    let mut current = node.next_sibling();
    while let Some(sibling) = current {
        if sibling.is_element() {
            out.push(sibling);
        }
        current = sibling.next_sibling();
    }
    out
}

/// Preceding element siblings, nearest first.
#[must_use]
pub fn preceding_elements<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    let mut out = Vec::new();
    let mut current = node.prev_sibling();
    while let Some(sibling) = current {
        if sibling.is_element() {
            out.push(sibling);
        }
        current = sibling.prev_sibling();
    }
    out
}

// === Text Content ===

/// All text of the node and its descendants.
#[inline]
#[must_use]
pub fn text_content(node: &NodeRef) -> StrTendril {
    node.text()
}

/// Text nodes directly under `node` before its first child element.
#[must_use]
pub fn leading_text_nodes<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    node.children()
        .into_iter()
        .take_while(|child| !child.is_element())
        .filter(NodeRef::is_text)
        .collect()
}

/// Concatenated leading text of `node` (element-tree `text`).
#[must_use]
pub fn leading_text(node: &NodeRef) -> String {
    leading_text_nodes(node)
        .iter()
        .map(|t| t.text().to_string())
        .collect()
}

/// Text nodes following `node` up to its next element sibling.
#[must_use]
pub fn tail_text_nodes<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    let mut out = Vec::new();
    let mut current = node.next_sibling();
    while let Some(sibling) = current {
        if sibling.is_element() {
            break;
        }
        if sibling.is_text() {
            out.push(sibling);
        }
        current = sibling.next_sibling();
    }
    out
}

/// Concatenated tail text of `node` (element-tree `tail`).
#[must_use]
pub fn tail_text(node: &NodeRef) -> String {
    tail_text_nodes(node)
        .iter()
        .map(|t| t.text().to_string())
        .collect()
}

// === Tree Manipulation ===

/// Detach a node and its subtree from the tree.
#[inline]
pub fn detach(node: &NodeRef) {
    node.remove_from_parent();
}

/// Change the tag name of an element in place.
#[inline]
pub fn retag(node: &NodeRef, new_tag: &str) {
    Selection::from(*node).rename(new_tag);
}

/// Create a detached `p` element holding `text`.
#[must_use]
pub fn new_paragraph<'a>(node: &NodeRef<'a>, text: &str) -> NodeRef<'a> {
    let p = node.tree.new_element("p");
    p.set_text(text);
    p
}

/// Move `child` (with its subtree) to the end of `parent`'s children.
pub fn move_into(parent: &NodeRef, child: &NodeRef) {
    child.remove_from_parent();
    parent.append_child(child);
}

// === Diagnostics ===

/// Short node label: `tag#id.class.names`, with a leading `div` elided.
#[must_use]
pub fn describe_node(node: &NodeRef) -> String {
    if !node.is_element() {
        return "[text]".to_string();
    }
    let mut name = tag_name(node);
    let id = attr(node, "id");
    if !id.is_empty() {
        name.push('#');
        name.push_str(&id);
    }
    let class = attr(node, "class");
    if !class.is_empty() {
        name.push('.');
        name.push_str(&class.split_whitespace().collect::<Vec<_>>().join("."));
    }
    if name.starts_with("div#") || name.starts_with("div.") {
        name.replace_range(..3, "");
    }
    name
}

/// Node label followed by the labels of up to `depth` element ancestors,
/// separated by ` - `.
#[must_use]
pub fn describe(node: &NodeRef, depth: usize) -> String {
    let mut out = describe_node(node);
    let mut current = parent_element(node);
    for _ in 0..depth {
        let Some(parent) = current else { break };
        out.push_str(" - ");
        out.push_str(&describe_node(&parent));
        current = parent_element(&parent);
    }
    out
}
