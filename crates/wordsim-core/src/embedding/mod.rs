//! # Embeddings
//!
//! Static word vectors and cosine similarity between them.

pub mod keyed_vectors;

pub use keyed_vectors::KeyedVectors;

use crate::error::{Result, WordsimError};

/// A pretrained word-embedding table.
///
/// Passed explicitly to scorers so tests can substitute a small table.
pub trait EmbeddingModel {
    /// The vector for `word`, if it is in the vocabulary.
    fn vector(&self, word: &str) -> Option<&[f32]>;

    /// Number of words in the vocabulary.
    fn vocab_size(&self) -> usize;

    fn contains(&self, word: &str) -> bool {
        self.vector(word).is_some()
    }

    /// Cosine similarity between two in-vocabulary words.
    ///
    /// # Errors
    ///
    /// Returns `WordsimError::OutOfVocabulary` naming the first missing word.
    fn similarity(&self, a: &str, b: &str) -> Result<f32> {
        let va = self.vector(a).ok_or_else(|| WordsimError::OutOfVocabulary {
            word: a.to_string(),
        })?;
        let vb = self.vector(b).ok_or_else(|| WordsimError::OutOfVocabulary {
            word: b.to_string(),
        })?;
        Ok(cosine(va, vb))
    }
}

/// Cosine of the angle between two vectors, in `[-1, 1]`.
/// Returns 0 when either vector has zero norm.
#[must_use]
pub fn cosine(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a * norm_b)).clamp(-1.0, 1.0)
}
