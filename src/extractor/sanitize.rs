//! Sanitizer: post-selection pruning of the assembled article.
//!
//! Runs over the article container with the candidate set of the winning pass.
//! Passes, in order:
//! 1. headings with negative weight or link density above 0.33
//! 2. `form`, `iframe` and `textarea`
//! 3. extra images of figure-like blocks (unless all images are kept)
//! 4. conditional removal of `table`, `ul` and `div`, deepest last-first

use std::collections::HashSet;

use dom_query::{NodeId, NodeRef};
use tracing::debug;

use crate::dom;
use crate::link_density::link_density;
use crate::text::{comma_count, text_length};
use crate::Options;

use super::candidates::CandidateSet;
use super::scoring::class_weight;

const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];
const CONDITIONAL_TAGS: [&str; 3] = ["table", "ul", "div"];

/// Why a conditional element was removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    NegativeScore,
    TooManyImages,
    MoreItemsThanParagraphs,
    TooManyInputs,
    TooShort,
    TooManyLinks,
    Embeds,
}

impl Removal {
    fn reason(self) -> &'static str {
        match self {
            Self::NegativeScore => "negative weight and score",
            Self::TooManyImages => "too many images",
            Self::MoreItemsThanParagraphs => "more <li>s than <p>s",
            Self::TooManyInputs => "less than 3x <p>s than <input>s",
            Self::TooShort => "too short content length",
            Self::TooManyLinks => "too many links for its weight",
            Self::Embeds => "<embed>s with too short content length, or too many <embed>s",
        }
    }
}

/// Descendant tag counts used by the disqualifying rules.
#[derive(Debug, Default, Clone, Copy)]
struct TagCounts {
    p: i64,
    img: i64,
    li: i64,
    embed: i64,
    input: i64,
}

impl TagCounts {
    #[allow(clippy::cast_possible_wrap)]
    fn of(node: &NodeRef) -> Self {
        let count = |tag: &str| dom::descendants_by_tag(node, &[tag]).len() as i64;
        Self {
            p: count("p"),
            img: count("img"),
            // Biased so that ordinary lists are not mistaken for link farms.
            li: count("li") - 100,
            embed: count("embed"),
            input: count("input"),
        }
    }
}

/// Sanitize the article rooted at `article` in place.
pub fn sanitize(article: &NodeRef, candidates: &CandidateSet, options: &Options) {
    let verbose = options.debug;

    for header in dom::descendants_by_tag(article, &HEADING_TAGS) {
        if class_weight(&header) < 0.0 || link_density(&header) > 0.33 {
            if verbose {
                debug!(node = %dom::describe(&header, 1), "removing header");
            }
            dom::detach(&header);
        }
    }

    for elem in dom::descendants_by_tag(article, &["form", "iframe", "textarea"]) {
        dom::detach(&elem);
    }

    if !options.keep_all_images {
        retain_first_images(article);
    }

    let mut allowed: HashSet<NodeId> = HashSet::new();
    let conditional = dom::descendants_by_tag(article, &CONDITIONAL_TAGS);
    for elem in conditional.into_iter().rev() {
        if allowed.contains(&elem.id) {
            continue;
        }
        if let Some(removal) = judge(&elem, candidates, options, &mut allowed) {
            if verbose {
                debug!(
                    node = %dom::describe(&elem, 1),
                    weight = class_weight(&elem),
                    score = candidates.score_of(&elem.id),
                    reason = removal.reason(),
                    "cleaned"
                );
            }
            dom::detach(&elem);
        }
    }
}

/// Keep only the first `img` of each `figure`/`picture` block.
pub fn retain_first_images(article: &NodeRef) -> usize {
    let mut removed = 0;
    for block in dom::descendants_by_tag(article, &["figure", "picture"]) {
        for img in dom::descendants_by_tag(&block, &["img"]).into_iter().skip(1) {
            dom::detach(&img);
            removed += 1;
        }
    }
    removed
}

/// Decide whether a conditional element goes. A rescued element marks its
/// conditional descendants in `allowed`.
#[allow(clippy::cast_precision_loss)]
fn judge(
    elem: &NodeRef,
    candidates: &CandidateSet,
    options: &Options,
    allowed: &mut HashSet<NodeId>,
) -> Option<Removal> {
    let weight = class_weight(elem);
    let score = candidates.score_of(&elem.id);

    if weight + score < 0.0 {
        return Some(Removal::NegativeScore);
    }
    if comma_count(elem) >= 10 {
        return None;
    }

    let counts = TagCounts::of(elem);
    let content_length = text_length(elem);
    let density = link_density(elem);
    let count_images = !options.keep_all_images;

    let removal = if count_images && counts.p > 0 && counts.img > counts.p {
        Removal::TooManyImages
    } else if counts.li > counts.p && !dom::has_tag(elem, &["ul", "ol"]) {
        Removal::MoreItemsThanParagraphs
    } else if counts.input as f64 > counts.p as f64 / 3.0 {
        Removal::TooManyInputs
    } else if content_length < options.min_text_length
        && (counts.img == 0 || (count_images && counts.img > 2))
    {
        Removal::TooShort
    } else if (weight < 25.0 && density > 0.2) || (weight >= 25.0 && density > 0.5) {
        Removal::TooManyLinks
    } else if (counts.embed == 1 && content_length < 75) || counts.embed > 1 {
        if sibling_text_length(elem) > 1000 {
            if options.debug {
                debug!(node = %dom::describe(elem, 1), "allowing");
            }
            for descendant in dom::descendants_by_tag(elem, &CONDITIONAL_TAGS) {
                allowed.insert(descendant.id);
            }
            return None;
        }
        Removal::Embeds
    } else {
        return None;
    };
    Some(removal)
}

/// Combined text length of the nearest following and the nearest preceding
/// element sibling that have any text.
fn sibling_text_length(elem: &NodeRef) -> usize {
    let first_with_text = |siblings: Vec<NodeRef>| {
        siblings
            .iter()
            .map(text_length)
            .find(|len| *len > 0)
            .unwrap_or(0)
    };
    first_with_text(dom::following_elements(elem)) + first_with_text(dom::preceding_elements(elem))
}
