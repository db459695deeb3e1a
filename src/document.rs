//! Document orchestration.
//!
//! A [`Document`] holds the original markup and the resolved [`Options`].
//! Every summary re-parses the markup, so repeated calls see identical input
//! and no state leaks between passes or calls.
//!
//! The retry loop is a small state machine:
//!
//! ```text
//! Ruthless --(no candidate | article too short)--> Lenient --> Done
//!     \----------------------------------------------------> Done
//! ```
//!
//! At most two passes run. A lenient pass without any candidate falls back to
//! the cleaned `body` with confidence 0.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tracing::debug;
use url::Url;

use crate::dom;
use crate::encoding;
use crate::error::{Error, Result};
use crate::extractor::{article, cleaner, paragraphs, sanitize, scoring, unlikely};
use crate::metadata;
use crate::result::Summary;
use crate::Options;

/// Aggressiveness of one extraction pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
    /// Unlikely candidates are removed before scoring.
    Ruthless,
    /// Nothing is removed before scoring.
    Lenient,
}

/// Article markup and confidence of a finished run.
#[derive(Debug)]
struct Extraction {
    html: String,
    confidence: f64,
}

#[derive(Debug)]
enum State {
    Attempt(Pass),
    Done(Extraction),
}

/// An HTML document ready to be summarized.
///
/// # Example
///
/// ```rust
/// use rs_readability::{Document, Options};
///
/// let html = "<html><head><title>Hello</title></head><body><p>AAAAAAAAAAAAAAAAAAAAAAAAA</p></body></html>";
/// let doc = Document::new(html, Options::default())?;
/// assert!(doc.summary()?.contains("AAAAAAAAAAAAAAAAAAAAAAAAA"));
/// assert_eq!(doc.title(), "Hello");
/// # Ok::<(), rs_readability::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Document {
    input: String,
    options: Options,
    base_url: Option<Url>,
}

impl Document {
    /// Wrap `input` with `options`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] when `input` is empty or blank, or when
    /// `options.url` is not a valid absolute URL.
    pub fn new(input: &str, options: Options) -> Result<Self> {
        if input.trim().is_empty() {
            return Err(Error::InvalidInput(
                "you must supply a non-empty document".to_string(),
            ));
        }
        let base_url = match options.url.as_deref() {
            Some(url) => Some(
                Url::parse(url)
                    .map_err(|e| Error::InvalidInput(format!("invalid url {url:?}: {e}")))?,
            ),
            None => None,
        };
        Ok(Self {
            input: input.to_string(),
            options,
            base_url,
        })
    }

    /// Decode `bytes` (declared charset, then detection) and wrap the result.
    ///
    /// # Errors
    ///
    /// Same as [`Document::new`].
    pub fn from_bytes(bytes: &[u8], options: Options) -> Result<Self> {
        if bytes.is_empty() {
            return Err(Error::InvalidInput(
                "you must supply a non-empty document".to_string(),
            ));
        }
        Self::new(&encoding::transcode_to_utf8(bytes), options)
    }

    /// Options this document was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Cleaned article markup.
    ///
    /// # Errors
    ///
    /// [`Error::Unparseable`] when processing fails.
    pub fn summary(&self) -> Result<String> {
        Ok(self.run()?.html)
    }

    /// Article markup together with confidence, title and short title.
    ///
    /// # Errors
    ///
    /// [`Error::Unparseable`] when processing fails.
    pub fn summary_with_metadata(&self) -> Result<Summary> {
        let extraction = self.run()?;
        Ok(Summary {
            html: extraction.html,
            confidence: extraction.confidence,
            title: self.title(),
            short_title: self.short_title(),
        })
    }

    /// Normalized `<title>`, or `[no-title]`.
    #[must_use]
    pub fn title(&self) -> String {
        metadata::extract_title(&dom::parse(&self.input))
    }

    /// Heuristically shortened title; empty without a `<title>`.
    #[must_use]
    pub fn short_title(&self) -> String {
        metadata::extract_short_title(&dom::parse(&self.input))
    }

    /// Byline from meta tags, or `[no-author]`.
    #[must_use]
    pub fn author(&self) -> String {
        metadata::author_or_sentinel(&dom::parse(&self.input))
    }

    /// The whole cleaned `body`, without any scoring.
    #[must_use]
    pub fn content(&self) -> String {
        let doc = dom::parse(&self.input);
        cleaner::prepare(&doc, self.base_url.as_ref());
        let body = doc.select("body");
        match body.nodes().first() {
            Some(node) => cleaner::render_fallback(node),
            None => cleaner::render_fallback(&doc.root()),
        }
    }

    /// Drive the state machine to completion.
    fn run(&self) -> Result<Extraction> {
        let mut state = State::Attempt(Pass::Ruthless);
        loop {
            state = match state {
                State::Attempt(pass) => self.guarded_attempt(pass)?,
                State::Done(extraction) => return Ok(extraction),
            };
        }
    }

    /// Run one pass, turning any panic into [`Error::Unparseable`].
    fn guarded_attempt(&self, pass: Pass) -> Result<State> {
        panic::catch_unwind(AssertUnwindSafe(|| self.attempt(pass)))
            .map_err(|payload| Error::unparseable(panic_message(payload.as_ref())))
    }

    fn attempt(&self, pass: Pass) -> State {
        let options = &self.options;
        let verbose = options.debug;

        let doc = dom::parse(&self.input);
        cleaner::prepare(&doc, self.base_url.as_ref());
        let root = doc.root();

        if pass == Pass::Ruthless {
            unlikely::remove_unlikely_candidates(&root, verbose);
        }
        paragraphs::transform_misused_divs(&root, verbose);
        let candidates = scoring::score_paragraphs(&root, options.min_text_length, verbose);

        let Some(best) = article::select_best(&candidates, verbose) else {
            if pass == Pass::Ruthless {
                debug!("ruthless removal did not work, retrying leniently");
                return State::Attempt(Pass::Lenient);
            }
            debug!("ruthless and lenient parsing did not work, returning raw html");
            let body = doc.select("body");
            let fallback = body.nodes().first().copied().unwrap_or(root);
            sanitize::sanitize(&fallback, &candidates, options);
            return State::Done(Extraction {
                html: cleaner::render_fallback(&fallback),
                confidence: 0.0,
            });
        };

        let container = article::build_article(&candidates, &best, verbose);
        sanitize::sanitize(&container, &candidates, options);
        let html = cleaner::render_article(&container, options.html_partial);

        let length = html.chars().count();
        if pass == Pass::Ruthless && length < options.retry_length {
            debug!(
                length,
                retry_length = options.retry_length,
                "ended up stripping too much, retrying leniently"
            );
            return State::Attempt(Pass::Lenient);
        }

        debug!(?pass, length, confidence = best.content_score, "summary ready");
        State::Done(Extraction {
            html,
            confidence: best.content_score,
        })
    }
}

/// Text of a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic while processing document".to_string()
    }
}
