//! # Gold-Score Aligner
//!
//! Looks up the human judgment for arbitrary word pairs in a loaded corpus.

use std::collections::HashMap;

use crate::types::{WordPairRecord, WordPairs};

/// Maps word pairs to gold scores, defaulting to `0.0` for unjudged pairs.
#[derive(Debug, Clone)]
pub struct GoldAligner {
    lookup: HashMap<(String, String), f64>,
    symmetric: bool,
}

impl GoldAligner {
    /// Builds the lookup. When a pair is listed more than once, the first
    /// occurrence wins.
    ///
    /// With `symmetric` set, `(b, a)` is accepted when `(a, b)` is absent.
    #[must_use]
    pub fn new(records: &[WordPairRecord], symmetric: bool) -> Self {
        let mut lookup = HashMap::with_capacity(records.len());
        for record in records {
            lookup
                .entry((record.word_a.clone(), record.word_b.clone()))
                .or_insert(record.gold);
        }
        Self { lookup, symmetric }
    }

    /// Gold score for one pair, or `None` if the corpus does not judge it.
    #[must_use]
    pub fn lookup(&self, word_a: &str, word_b: &str) -> Option<f64> {
        let exact = self
            .lookup
            .get(&(word_a.to_string(), word_b.to_string()))
            .copied();
        if exact.is_some() || !self.symmetric {
            return exact;
        }
        self.lookup
            .get(&(word_b.to_string(), word_a.to_string()))
            .copied()
    }

    /// Gold scores aligned with `pairs`; unjudged pairs get `0.0`.
    #[must_use]
    pub fn align(&self, pairs: &WordPairs) -> Vec<f64> {
        pairs
            .iter()
            .map(|(a, b)| self.lookup(a, b).unwrap_or(0.0))
            .collect()
    }

    pub fn is_symmetric(&self) -> bool {
        self.symmetric
    }
}
