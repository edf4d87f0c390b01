pub mod embedding;
pub mod taxonomy;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use embedding::{cosine_similarity, CosineOutcome, OovPolicy};
pub use taxonomy::{path_similarity, wup_similarity};

/// Scores and correlations are reported to 4 decimal places.
/// Exact halves round to even.
#[must_use]
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round_ties_even() / 10_000.0
}

/// The three similarity measures being compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SimilarityMethod {
    /// WordNet shortest-path similarity.
    Path,
    /// WordNet Wu-Palmer similarity.
    WuPalmer,
    /// Embedding cosine similarity.
    Cosine,
}

impl SimilarityMethod {
    pub const ALL: [SimilarityMethod; 3] = [Self::Path, Self::WuPalmer, Self::Cosine];

    /// Label used in correlation lines.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Path => "WordNet Path Similarity",
            Self::WuPalmer => "WordNet Wu-Palmer Similarity",
            Self::Cosine => "Embedding Cosine Similarity",
        }
    }

    /// Table column heading.
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            Self::Path => "Path Similarity",
            Self::WuPalmer => "Wu-Palmer Similarity",
            Self::Cosine => "Cosine Similarity",
        }
    }
}

impl fmt::Display for SimilarityMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
