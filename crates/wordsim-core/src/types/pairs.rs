use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordsimError};
use crate::types::WordPairRecord;

/// Two word lists aligned by position: `left[i]` is compared with `right[i]`.
///
/// The constructor enforces equal length so scorers never see a ragged input.
/// Deserialization goes through the same check.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawWordPairs")]
pub struct WordPairs {
    left: Vec<String>,
    right: Vec<String>,
}

impl WordPairs {
    /// Builds aligned pairs from two lists.
    ///
    /// # Errors
    ///
    /// Returns `WordsimError::LengthMismatch` if the lists differ in length.
    pub fn new(left: Vec<String>, right: Vec<String>) -> Result<Self> {
        if left.len() != right.len() {
            return Err(WordsimError::LengthMismatch {
                left: left.len(),
                right: right.len(),
            });
        }
        Ok(Self { left, right })
    }

    /// Builds aligned pairs from `(a, b)` tuples.
    pub fn from_tuples<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let (left, right) = pairs
            .into_iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .unzip();
        Self { left, right }
    }

    pub fn left(&self) -> &[String] {
        &self.left
    }

    pub fn right(&self) -> &[String] {
        &self.right
    }

    pub fn len(&self) -> usize {
        self.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Iterates over `(left[i], right[i])`.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.left
            .iter()
            .zip(&self.right)
            .map(|(a, b)| (a.as_str(), b.as_str()))
    }

    /// The set of unique words appearing on either side.
    #[must_use]
    pub fn vocabulary(&self) -> BTreeSet<String> {
        self.left.iter().chain(&self.right).cloned().collect()
    }
}

#[derive(Deserialize)]
struct RawWordPairs {
    left: Vec<String>,
    right: Vec<String>,
}

impl TryFrom<RawWordPairs> for WordPairs {
    type Error = WordsimError;

    fn try_from(raw: RawWordPairs) -> Result<Self> {
        Self::new(raw.left, raw.right)
    }
}

/// A named list of word pairs with one gold score per pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawEvaluationSet")]
pub struct EvaluationSet {
    name: String,
    pairs: WordPairs,
    gold: Vec<f64>,
}

impl EvaluationSet {
    /// # Errors
    ///
    /// Returns `WordsimError::LengthMismatch` if `gold` is not aligned with `pairs`.
    pub fn new(name: impl Into<String>, pairs: WordPairs, gold: Vec<f64>) -> Result<Self> {
        if pairs.len() != gold.len() {
            return Err(WordsimError::LengthMismatch {
                left: pairs.len(),
                right: gold.len(),
            });
        }
        Ok(Self {
            name: name.into(),
            pairs,
            gold,
        })
    }

    /// One pair per record, gold taken from the records.
    pub fn from_records(name: impl Into<String>, records: &[WordPairRecord]) -> Self {
        let (left, right) = records
            .iter()
            .map(|r| (r.word_a.clone(), r.word_b.clone()))
            .unzip();
        Self {
            name: name.into(),
            pairs: WordPairs { left, right },
            gold: records.iter().map(|r| r.gold).collect(),
        }
    }

    /// Heading used when reporting this set.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The word pairs to score.
    pub fn pairs(&self) -> &WordPairs {
        &self.pairs
    }

    /// Gold similarity, aligned with `pairs`.
    pub fn gold(&self) -> &[f64] {
        &self.gold
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterates over `(word_a, word_b, gold)`.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, f64)> {
        self.pairs
            .iter()
            .zip(&self.gold)
            .map(|((a, b), &gold)| (a, b, gold))
    }
}

#[derive(Deserialize)]
struct RawEvaluationSet {
    name: String,
    pairs: WordPairs,
    gold: Vec<f64>,
}

impl TryFrom<RawEvaluationSet> for EvaluationSet {
    type Error = WordsimError;

    fn try_from(raw: RawEvaluationSet) -> Result<Self> {
        Self::new(raw.name, raw.pairs, raw.gold)
    }
}
