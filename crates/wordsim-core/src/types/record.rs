use std::fmt;

use serde::{Deserialize, Serialize};

/// One judged word pair from a similarity corpus such as WordSim-353.
///
/// Words are stored case-folded. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordPairRecord {
    /// First word of the pair.
    pub word_a: String,
    /// Second word of the pair.
    pub word_b: String,
    /// Human-annotated similarity score.
    pub gold: f64,
}

impl WordPairRecord {
    /// Creates a record, lowercasing both words.
    #[must_use]
    pub fn new(word_a: impl AsRef<str>, word_b: impl AsRef<str>, gold: f64) -> Self {
        Self {
            word_a: word_a.as_ref().to_lowercase(),
            word_b: word_b.as_ref().to_lowercase(),
            gold,
        }
    }

    /// Returns `true` if this record holds exactly the ordered pair `(a, b)`.
    #[must_use]
    pub fn matches(&self, a: &str, b: &str) -> bool {
        self.word_a == a && self.word_b == b
    }
}

impl fmt::Display for WordPairRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.word_a, self.word_b, self.gold)
    }
}
