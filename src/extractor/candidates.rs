//! Candidate bookkeeping for one scoring pass.
//!
//! Candidates are keyed by the arena [`NodeId`] of their node. Discovery order
//! is kept separately so the link-density discount can walk candidates in the
//! order the scorer first saw them.

use std::collections::HashMap;
use std::fmt;

use dom_query::{NodeId, NodeRef};

/// A container node considered as a possible article root.
#[derive(Clone, Copy)]
pub struct Candidate<'a> {
    /// Accumulated content score.
    pub content_score: f64,
    /// The scored node.
    pub node: NodeRef<'a>,
}

impl fmt::Debug for Candidate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Candidate")
            .field("content_score", &self.content_score)
            .field("node", &self.node.id)
            .finish()
    }
}

/// Candidates of one scoring pass, in discovery order.
///
/// Scores are only changed from inside the `extractor` module: accumulation by
/// the scorer, then a single link-density discount. The selector and the
/// sanitizer read them.
#[derive(Debug, Default)]
pub struct CandidateSet<'a> {
    by_id: HashMap<NodeId, Candidate<'a>>,
    ordered: Vec<NodeId>,
}

impl<'a> CandidateSet<'a> {
    /// Empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            by_id: HashMap::new(),
            ordered: Vec::new(),
        }
    }

    /// Number of candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Whether the pass found no candidate.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Candidate for `id`, if that node was scored.
    #[must_use]
    pub fn get(&self, id: &NodeId) -> Option<&Candidate<'a>> {
        self.by_id.get(id)
    }

    /// Score of `id`, or `0.0` when the node was never scored.
    #[must_use]
    pub fn score_of(&self, id: &NodeId) -> f64 {
        self.by_id.get(id).map_or(0.0, |c| c.content_score)
    }

    /// Whether `id` was scored.
    #[must_use]
    pub fn contains(&self, id: &NodeId) -> bool {
        self.by_id.contains_key(id)
    }

    /// Candidates in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &Candidate<'a>> {
        self.ordered.iter().filter_map(|id| self.by_id.get(id))
    }

    /// Candidates sorted by score, highest first.
    ///
    /// The sort is stable, so equal scores keep discovery order and the
    /// earliest discovered candidate wins a tie.
    #[must_use]
    pub fn ranked(&self) -> Vec<Candidate<'a>> {
        let mut ranked: Vec<Candidate<'a>> = self.iter().copied().collect();
        ranked.sort_by(|a, b| b.content_score.total_cmp(&a.content_score));
        ranked
    }

    /// Highest-scoring candidate.
    #[must_use]
    pub fn best(&self) -> Option<Candidate<'a>> {
        self.ranked().into_iter().next()
    }

    /// Insert `node` with `initial` score unless it is already present.
    ///
    /// Returns true when a new candidate was created.
    pub(super) fn ensure(&mut self, node: NodeRef<'a>, initial: f64) -> bool {
        if self.by_id.contains_key(&node.id) {
            return false;
        }
        self.by_id.insert(
            node.id,
            Candidate {
                content_score: initial,
                node,
            },
        );
        self.ordered.push(node.id);
        true
    }

    /// Add `delta` to the score of an existing candidate.
    pub(super) fn add(&mut self, id: &NodeId, delta: f64) {
        if let Some(candidate) = self.by_id.get_mut(id) {
            candidate.content_score += delta;
        }
    }

    /// Apply `f` to every candidate in discovery order.
    pub(super) fn for_each_mut(&mut self, mut f: impl FnMut(&mut Candidate<'a>)) {
        for id in &self.ordered {
            if let Some(candidate) = self.by_id.get_mut(id) {
                f(candidate);
            }
        }
    }
}
