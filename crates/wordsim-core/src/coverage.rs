//! Lexical coverage: how much of a vocabulary a resource knows.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::embedding::{EmbeddingModel, KeyedVectors};
use crate::taxonomy::WordNet;

/// Anything that can say whether it knows a word.
pub trait LexicalResource {
    fn knows(&self, word: &str) -> bool;
}

impl LexicalResource for WordNet {
    /// A word is covered when it resolves to at least one sense.
    fn knows(&self, word: &str) -> bool {
        self.has_senses(word)
    }
}

impl LexicalResource for KeyedVectors {
    /// Exact key membership; no normalisation.
    fn knows(&self, word: &str) -> bool {
        self.contains(word)
    }
}

impl LexicalResource for dyn EmbeddingModel + '_ {
    fn knows(&self, word: &str) -> bool {
        self.contains(word)
    }
}

/// Count of covered words out of a vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Coverage {
    pub found: usize,
    pub total: usize,
}

impl Coverage {
    /// Measures coverage of `words` by `resource`.
    pub fn measure<'w, I, R>(words: I, resource: &R) -> Self
    where
        I: IntoIterator<Item = &'w String>,
        R: LexicalResource + ?Sized,
    {
        let mut coverage = Self::default();
        for word in words {
            coverage.total += 1;
            if resource.knows(word) {
                coverage.found += 1;
            }
        }
        coverage
    }

    /// Covered fraction in `[0, 1]`; an empty vocabulary counts as 0.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.found as f64 / self.total as f64
        }
    }

    /// Percentage rounded to the nearest integer.
    #[must_use]
    pub fn percent(&self) -> u32 {
        (self.ratio() * 100.0).round() as u32
    }
}

impl fmt::Display for Coverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coverage: {}%", self.percent())
    }
}
