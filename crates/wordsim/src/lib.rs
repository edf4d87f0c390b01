//! # Wordsim
//!
//! Compare WordNet and word-embedding similarity against human similarity
//! judgements.
//!
//! This crate bundles [`wordsim_core`] (scoring, correlation, reports) with
//! [`wordsim_resources`] (WordNet lookup and model download).
//!
//! ```no_run
//! use wordsim::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let corpus = Corpus::load("wordsim353.txt", LineValidation::Lenient)?;
//! let wordnet = WordNetLocator::new().load()?;
//! let model = ModelStore::default().load(DEFAULT_MODEL, None)?;
//!
//! let analyzer = Analyzer::new(&wordnet, &model, AnalysisConfig::default());
//! println!("{}", analyzer.run(&corpus)?);
//! # Ok(())
//! # }
//! ```

pub use wordsim_core::*;
pub use wordsim_resources::{
    ModelStore, ResourceError, WordNetLocator, DEFAULT_BASE_URL, DEFAULT_MODEL,
};

/// Everything needed for a typical analysis run.
pub mod prelude {
    pub use wordsim_core::{
        AnalysisConfig, Analyzer, Corpus, EmbeddingModel, KeyedVectors, LineValidation,
        OovPolicy, Report, WordNet,
    };
    pub use wordsim_resources::{load_embeddings, ModelStore, WordNetLocator, DEFAULT_MODEL};
}
