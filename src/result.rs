//! Result types for summarization output.

use serde::{Deserialize, Serialize};

/// Result of summarizing an HTML document.
///
/// Produced once per successful run and never modified afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Cleaned article markup.
    ///
    /// A bare `<div>` with `html_partial`, otherwise a full
    /// `<html><body><div>` document. When no candidate was found in either
    /// pass this is the cleaned `<body>` instead.
    pub html: String,

    /// Score of the winning candidate; `0.0` for the raw-body fallback.
    pub confidence: f64,

    /// Normalized `<title>`, or `[no-title]`.
    pub title: String,

    /// Shortened title; empty when the page has no `<title>`.
    pub short_title: String,
}

impl Summary {
    /// Whether the summary is the raw-body fallback rather than a selected
    /// article.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.confidence == 0.0 && self.html.starts_with("<body")
    }
}
