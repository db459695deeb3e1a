//! Character encoding detection and transcoding.
//!
//! Declared charsets are tried first (`<meta charset>`, the `http-equiv`
//! pragma, the XML declaration), in that order. A declaration is only trusted
//! when the page decodes under it without errors. Undeclared pages that are
//! not valid UTF-8 are handed to `chardetng`.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use tracing::debug;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>/;]+)"#).expect("valid regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">` tag
#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#)
        .expect("valid regex")
});

/// Match the `encoding` of a leading XML declaration
#[allow(clippy::expect_used)]
static XML_DECL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*<\?xml[^>]*?encoding\s*=\s*["']?([^"'\s?>]+)"#).expect("valid regex")
});

/// Tags and the whitespace after them, replaced by a space to measure text
#[allow(clippy::expect_used)]
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?[^>]*>\s*").expect("valid regex"));

/// Pages with less text than this are assumed to be UTF-8.
const MIN_GUESS_LENGTH: usize = 10;

/// Map declared labels that name a subset of a larger charset to the superset.
#[must_use]
pub fn fix_charset(label: &str) -> String {
    let label = label.trim().to_ascii_lowercase();
    match label.as_str() {
        "big5" => "big5-hkscs".to_string(),
        "gb2312" => "gb18030".to_string(),
        "ascii" | "us-ascii" => "utf-8".to_string(),
        "maccyrillic" | "x-mac-cyrillic" => "windows-1251".to_string(),
        _ => label,
    }
}

/// Charset labels declared anywhere in the page, in precedence order,
/// without repeats.
#[must_use]
pub fn declared_charsets(page: &str) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for re in [&*CHARSET_META_RE, &*CONTENT_TYPE_CHARSET_RE, &*XML_DECL_RE] {
        for label in re.captures_iter(page).filter_map(|c| c.get(1)) {
            let label = label.as_str().to_string();
            if !labels.contains(&label) {
                labels.push(label);
            }
        }
    }
    labels
}

/// Detect character encoding from HTML bytes.
///
/// The whole input is searched for declarations, so a `<meta charset>` behind
/// a long inline script is still found.
///
/// 1. the first declared charset that decodes the page cleanly
/// 2. UTF-8 when the page has too little text to guess, or is valid UTF-8
/// 3. the `chardetng` guess
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let lossy = String::from_utf8_lossy(html);

    for label in declared_charsets(&lossy) {
        let fixed = fix_charset(&label);
        let Some(encoding) = Encoding::for_label(fixed.as_bytes()) else {
            debug!(declared = %label, "unknown charset label");
            continue;
        };
        if encoding
            .decode_without_bom_handling_and_without_replacement(html)
            .is_some()
        {
            return encoding;
        }
        debug!(declared = %label, encoding = encoding.name(), "declared charset did not decode");
    }

    let text = TAG_RE.replace_all(&lossy, " ");
    if text.trim().is_empty() || text.chars().count() < MIN_GUESS_LENGTH {
        return UTF_8;
    }
    if std::str::from_utf8(html).is_ok() {
        return UTF_8;
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(html, true);
    let guessed = detector.guess(None, true);
    let fixed = fix_charset(guessed.name());
    Encoding::for_label(fixed.as_bytes()).unwrap_or(guessed)
}

/// Transcode HTML bytes to a UTF-8 string.
///
/// Characters the detected encoding cannot map are replaced with U+FFFD
/// rather than failing.
///
/// # Examples
///
/// ```
/// use rs_readability::encoding::transcode_to_utf8;
///
/// let html = b"<html><body>Hello, World!</body></html>";
/// let utf8_str = transcode_to_utf8(html);
/// assert!(utf8_str.contains("Hello, World!"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);

    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }

    let (decoded, _encoding_used, _had_errors) = encoding.decode(html);
    decoded.into_owned()
}
