//! Configuration options for summarization.
//!
//! The `Options` struct is resolved once per [`crate::Document`] and never
//! changes afterwards.

/// Configuration options for summarization.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_readability::Options;
///
/// let options = Options {
///     html_partial: true,
///     url: Some("https://example.com/news/story.html".to_string()),
///     ..Options::default()
/// };
/// assert_eq!(options.min_text_length, 25);
/// ```
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct Options {
    /// Source URL of the document.
    ///
    /// When set, relative links and image sources are made absolute against
    /// it (after honouring any `<base href>` in the page).
    ///
    /// Default: `None`
    pub url: Option<String>,

    /// Minimum normalized text length for a paragraph to be scored.
    ///
    /// Also the "too short" threshold of the sanitizer.
    ///
    /// Default: `25`
    pub min_text_length: usize,

    /// Minimum length of the sanitized article markup accepted in ruthless
    /// mode. Shorter results trigger a lenient retry.
    ///
    /// Default: `250`
    pub retry_length: usize,

    /// Return a bare `<div>` fragment instead of a full `<html><body>`
    /// document.
    ///
    /// Default: `false`
    pub html_partial: bool,

    /// Keep every image of the article.
    ///
    /// When false, only the first image of each `figure`/`picture` block is
    /// retained and image-heavy blocks may be pruned.
    ///
    /// Default: `false`
    pub keep_all_images: bool,

    /// Emit per-node diagnostics through `tracing` at debug level.
    ///
    /// Default: `false`
    pub debug: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            url: None,
            min_text_length: 25,
            retry_length: 250,
            html_partial: false,
            keep_all_images: false,
            debug: false,
        }
    }
}
