//! Main content extraction module.
//!
//! The stages of one extraction pass, in the order the orchestrator runs them:
//!
//! - `cleaner`: script/style removal, base URL handling, final markup cleanup
//! - `unlikely`: ruthless removal of navigation, comments and other noise
//! - `paragraphs`: divs misused as paragraphs become `p`
//! - `scoring`: paragraph scores propagated to parents and grandparents
//! - `candidates`: the scored candidate set
//! - `article`: best candidate selection and sibling merge
//! - `sanitize`: conditional pruning of the assembled article
//!
//! # Usage
//!
//! ```rust
//! use rs_readability::extractor::{article, paragraphs, scoring};
//!
//! let doc = rs_readability::dom::parse(
//!     "<div><p>A paragraph, long enough to be scored by the extractor.</p></div>",
//! );
//! let root = doc.root();
//! paragraphs::transform_misused_divs(&root, false);
//! let candidates = scoring::score_paragraphs(&root, 25, false);
//! assert!(article::select_best(&candidates, false).is_some());
//! ```

pub mod article;
pub mod candidates;
pub mod cleaner;
pub mod paragraphs;
pub mod sanitize;
pub mod scoring;
pub mod unlikely;

pub use article::{build_article, select_best};
pub use candidates::{Candidate, CandidateSet};
pub use sanitize::{sanitize, Removal};
pub use scoring::score_paragraphs;
