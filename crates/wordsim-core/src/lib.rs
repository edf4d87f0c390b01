//! # Wordsim Core
//!
//! Compares WordNet taxonomy similarity and word-embedding similarity against
//! human similarity judgements. Provides the corpus loader, a WordNet database
//! reader with path and Wu-Palmer similarity, an embedding table with cosine
//! similarity, Spearman correlation, coverage and report rendering.
//!
//! ## Quick Start
//!
//! ```rust
//! use wordsim_core::{cosine_similarity, KeyedVectors, WordPairs};
//!
//! let model = KeyedVectors::from_entries([
//!     ("cat", vec![1.0, 0.0]),
//!     ("tiger", vec![0.6, 0.8]),
//! ])
//! .unwrap();
//! let pairs = WordPairs::from_tuples([("tiger", "cat"), ("tiger", "lion")]);
//! let scores = cosine_similarity(&pairs, &model);
//!
//! assert_eq!(scores[0].score(), Some(0.6));
//! assert_eq!(scores[1].score(), None);
//! ```
pub mod analysis;
pub mod corpus;
pub mod coverage;
pub mod embedding;
pub mod error;
pub mod report;
pub mod scoring;
pub mod stats;
pub mod taxonomy;
pub mod types;

// Re-export primary API
pub use analysis::{AnalysisConfig, Analyzer, CURATED_PAIRS};
pub use corpus::{Corpus, GoldAligner, LineValidation};
pub use coverage::{Coverage, LexicalResource};
pub use embedding::{cosine, EmbeddingModel, KeyedVectors};
pub use error::{Result, WordsimError};
pub use report::{Correlation, Report, ReportRow, SetReport};
pub use scoring::{
    cosine_similarity, path_similarity, wup_similarity, CosineOutcome, OovPolicy,
    SimilarityMethod,
};
pub use stats::spearman;
pub use taxonomy::{TaxonomySimilarity, WordNet, WordNetBuilder};
pub use types::{EvaluationSet, PartOfSpeech, WordPairRecord, WordPairs};
