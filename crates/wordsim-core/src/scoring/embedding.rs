use serde::{Deserialize, Serialize};

use crate::embedding::{cosine, EmbeddingModel};
use crate::error::{Result, WordsimError};
use crate::scoring::round4;
use crate::types::WordPairs;

/// Cosine similarity for one word pair, or the word that made it undefined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CosineOutcome {
    Computed(f64),
    OutOfVocabulary { word: String },
}

impl CosineOutcome {
    #[must_use]
    pub fn score(&self) -> Option<f64> {
        match self {
            Self::Computed(score) => Some(*score),
            Self::OutOfVocabulary { .. } => None,
        }
    }
}

/// How to treat a pair containing a word the embedding model does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OovPolicy {
    /// Fail the analysis.
    #[default]
    Abort,
    /// Score the pair 0.
    Zero,
    /// Leave the pair unscored and drop it from the correlation.
    Skip,
}

impl OovPolicy {
    /// Resolves outcomes into scores (`None` only under `Skip`).
    ///
    /// # Errors
    ///
    /// Under `Abort`, returns `WordsimError::OutOfVocabulary` for the first
    /// unknown word.
    pub fn apply(self, outcomes: Vec<CosineOutcome>) -> Result<Vec<Option<f64>>> {
        outcomes
            .into_iter()
            .map(|outcome| match (outcome, self) {
                (CosineOutcome::Computed(score), _) => Ok(Some(score)),
                (CosineOutcome::OutOfVocabulary { word }, Self::Abort) => {
                    Err(WordsimError::OutOfVocabulary { word })
                }
                (CosineOutcome::OutOfVocabulary { .. }, Self::Zero) => Ok(Some(0.0)),
                (CosineOutcome::OutOfVocabulary { .. }, Self::Skip) => Ok(None),
            })
            .collect()
    }
}

/// Embedding cosine similarity of each word pair, rounded to 4 decimals.
#[must_use]
pub fn cosine_similarity(pairs: &WordPairs, model: &dyn EmbeddingModel) -> Vec<CosineOutcome> {
    pairs
        .iter()
        .map(|(a, b)| match (model.vector(a), model.vector(b)) {
            (Some(va), Some(vb)) => CosineOutcome::Computed(round4(f64::from(cosine(va, vb)))),
            (None, _) => CosineOutcome::OutOfVocabulary { word: a.to_string() },
            (_, None) => CosineOutcome::OutOfVocabulary { word: b.to_string() },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::KeyedVectors;

    fn model() -> KeyedVectors {
        KeyedVectors::from_entries([
            ("cat", vec![1.0, 0.0]),
            ("tiger", vec![0.6, 0.8]),
            ("car", vec![-1.0, 0.0]),
        ])
        .unwrap()
    }

    #[test]
    fn computes_rounded_cosine() {
        let pairs = WordPairs::from_tuples([("tiger", "cat"), ("cat", "car"), ("cat", "cat")]);
        let outcomes = cosine_similarity(&pairs, &model());
        assert_eq!(
            outcomes,
            vec![
                CosineOutcome::Computed(0.6),
                CosineOutcome::Computed(-1.0),
                CosineOutcome::Computed(1.0),
            ]
        );
    }

    #[test]
    fn out_of_vocabulary_is_reported_not_raised() {
        let pairs = WordPairs::from_tuples([("jaguar", "cat"), ("tiger", "cat")]);
        let outcomes = cosine_similarity(&pairs, &model());
        assert_eq!(
            outcomes[0],
            CosineOutcome::OutOfVocabulary {
                word: "jaguar".into()
            }
        );
        assert_eq!(outcomes[1].score(), Some(0.6));
    }

    #[test]
    fn policies() {
        let outcomes = vec![
            CosineOutcome::Computed(0.5),
            CosineOutcome::OutOfVocabulary { word: "zzz".into() },
        ];
        assert!(matches!(
            OovPolicy::Abort.apply(outcomes.clone()),
            Err(WordsimError::OutOfVocabulary { .. })
        ));
        assert_eq!(
            OovPolicy::Zero.apply(outcomes.clone()).unwrap(),
            vec![Some(0.5), Some(0.0)]
        );
        assert_eq!(
            OovPolicy::Skip.apply(outcomes).unwrap(),
            vec![Some(0.5), None]
        );
    }
}
