//! # rs-readability
//!
//! Readability-style main content extraction.
//!
//! Given a full HTML page, this library finds the block that holds the
//! article, merges in related sibling blocks, prunes the boilerplate inside
//! it and returns cleaned markup together with the page title, a shortened
//! title and the byline.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_readability::summarize;
//!
//! let html = r#"<html><head><title>My Article</title></head>
//! <body><div><p>Main content here, long enough to count as a paragraph.</p></div></body></html>"#;
//!
//! let summary = summarize(html)?;
//! println!("Title: {}", summary.title);
//! println!("Content: {}", summary.html);
//! # Ok::<(), rs_readability::Error>(())
//! ```
//!
//! ## How it works
//!
//! - **Ruthless pass**: elements whose class or id look like navigation,
//!   comments or ads are dropped before scoring
//! - **Scoring**: every sufficiently long paragraph adds to the score of its
//!   parent and grandparent; link-heavy candidates are discounted
//! - **Assembly**: the best candidate and qualifying siblings form the article
//! - **Sanitizing**: headers, forms, image galleries, link lists and short
//!   fragments are removed conditionally
//! - **Lenient retry**: when the ruthless pass finds nothing or too little, the
//!   pass is repeated without the up-front removal

mod document;
mod error;
mod options;
mod patterns;
mod result;

/// DOM helpers over `dom_query`.
pub mod dom;

/// Whitespace normalization and text measurements.
pub mod text;

/// Link density of a subtree.
pub mod link_density;

/// Extraction stages (scoring, candidate selection, sanitizing).
pub mod extractor;

/// Title, short title and byline extraction.
pub mod metadata;

/// URL utilities for resolution and base URL discovery.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use document::Document;
pub use dom::describe;
pub use error::{Error, Result};
pub use link_density::link_density;
pub use options::Options;
pub use result::Summary;
pub use text::{normalize_whitespace, text_length};

/// Summarizes an HTML document using default options.
///
/// # Arguments
///
/// * `html` - The HTML document as a string slice
///
/// # Returns
///
/// Returns `Ok(Summary)` with the article markup, confidence, title and
/// short title. Returns an `Error` when the input is empty or processing
/// fails.
///
/// # Example
///
/// ```rust
/// use rs_readability::summarize;
///
/// let html = "<html><body><div><p>AAAAAAAAAAAAAAAAAAAAAAAAA</p></div></body></html>";
/// let summary = summarize(html)?;
/// assert!(summary.html.contains("AAAAAAAAAAAAAAAAAAAAAAAAA"));
/// # Ok::<(), rs_readability::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn summarize(html: &str) -> Result<Summary> {
    summarize_with_options(html, &Options::default())
}

/// Summarizes an HTML document with custom options.
///
/// # Arguments
///
/// * `html` - The HTML document as a string slice
/// * `options` - Configuration options for summarization
///
/// # Example
///
/// ```rust
/// use rs_readability::{summarize_with_options, Options};
///
/// let html = "<html><body><div><p>AAAAAAAAAAAAAAAAAAAAAAAAA</p></div></body></html>";
/// let options = Options {
///     html_partial: true,
///     ..Options::default()
/// };
/// let summary = summarize_with_options(html, &options)?;
/// assert!(summary.html.starts_with("<div>"));
/// # Ok::<(), rs_readability::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn summarize_with_options(html: &str, options: &Options) -> Result<Summary> {
    Document::new(html, options.clone())?.summary_with_metadata()
}

/// Summarizes HTML bytes with automatic encoding detection.
///
/// The declared charset (`<meta charset>`, `http-equiv` or XML declaration)
/// is used when it decodes the bytes cleanly; otherwise UTF-8 is tried, then
/// a statistical guess.
///
/// # Example
///
/// ```rust
/// use rs_readability::summarize_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><div><p>Caf\xE9 au lait, served hot and early.</p></div></body></html>";
/// let summary = summarize_bytes(html)?;
/// assert!(summary.html.contains("Café"));
/// # Ok::<(), rs_readability::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn summarize_bytes(html: &[u8]) -> Result<Summary> {
    Document::from_bytes(html, Options::default())?.summary_with_metadata()
}
