//! Error types for rs-readability.
//!
//! Only construction and hard processing failures are errors. A page where no
//! candidate is found still produces a (degraded) summary.

/// Boxed cause carried by [`Error::Unparseable`].
pub type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error type for document construction and summarization.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document input or one of the options is unusable.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Parsing or processing failed; `source` holds the original cause.
    #[error("unparseable document: {source}")]
    Unparseable {
        /// The underlying failure.
        #[source]
        source: Cause,
    },
}

impl Error {
    /// Wrap any failure as [`Error::Unparseable`].
    pub(crate) fn unparseable(source: impl Into<Cause>) -> Self {
        Self::Unparseable {
            source: source.into(),
        }
    }
}

/// Result type alias for summarization operations.
pub type Result<T> = std::result::Result<T, Error>;
