//! Compiled regex patterns for candidate scoring and cleanup.
//!
//! All patterns are compiled once at startup using `LazyLock` and never
//! mutated afterwards. Vocabularies are matched as case-insensitive substrings
//! of the combined `class`/`id` attribute text.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Class/id vocabularies
// =============================================================================

/// Class/id names of blocks that are almost never article content.
///
/// Used by the unlikely-candidate filter in ruthless mode only.
pub static UNLIKELY_CANDIDATES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)combx|comment|community|disqus|extra|foot|header|menu|remark|rss|shoutbox|sidebar|sponsor|ad-break|agegate|pagination|pager|popup|tweet|twitter",
    )
    .expect("UNLIKELY_CANDIDATES regex")
});

/// Overrides [`UNLIKELY_CANDIDATES`]: names that may still wrap the article.
pub static MAYBE_CANDIDATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)article|body|column|main|shadow").expect("MAYBE_CANDIDATE regex")
});

/// Class/id names that raise a node's weight by 25.
pub static POSITIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)article|body|content|entry|hentry|main|page|pagination|post|text|blog|story",
    )
    .expect("POSITIVE regex")
});

/// Class/id names that lower a node's weight by 25.
pub static NEGATIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)combx|comment|com-|contact|foot|footer|footnote|masthead|media|meta|outbrain|promo|related|scroll|shoutbox|sidebar|sponsor|shopping|tags|tool|widget",
    )
    .expect("NEGATIVE regex")
});

// =============================================================================
// Pagination links
// =============================================================================

/// Link text or names announcing the following page.
pub static NEXT_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(next|weiter|continue|>([^|]|$)|»([^|]|$))").expect("NEXT_LINK regex")
});

/// Link text or names pointing backwards.
pub static PREV_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(prev|earl|old|new|<|«)").expect("PREV_LINK regex"));

/// Pagination vocabulary in link data, ancestor names and hrefs.
pub static PAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)pag(e|ing|inat)").expect("PAGE regex"));

pub static FIRST_LAST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(first|last)").expect("FIRST_LAST regex"));

/// Links that lead somewhere other than the next page of the article.
pub static EXTRANEOUS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)print|archive|comment|discuss|e[-]?mail|share|reply|all|login|sign|single")
        .expect("EXTRANEOUS regex")
});

// =============================================================================
// Structure and text patterns
// =============================================================================

/// Block-level markup that keeps a `div` from being retagged as `p`.
pub static DIV_TO_P_ELEMENTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(a|blockquote|dl|div|img|ol|p|pre|table|ul)")
        .expect("DIV_TO_P_ELEMENTS regex")
});

/// A full stop followed by a space or the end of the text.
pub static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.( |$)").expect("SENTENCE_END regex"));

/// Runs of whitespace, collapsed to a single space by text normalization.
///
/// The regex engine is linear in the input, so very long whitespace runs do
/// not cause backtracking blowups.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex"));

/// CJK unified ideographs, used by the short-title length checks.
pub static CJK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\u{4e00}-\u{9fff}]+").expect("CJK regex"));
