//! # Wordsim Resources
//!
//! External data the analysis depends on: a WordNet database located on disk
//! and pretrained embedding models downloaded once into a local cache.

pub mod error;
pub mod model;
pub mod wordnet;

pub use error::{ResourceError, Result};
pub use model::{
    default_cache_dir, load_embeddings, read_embeddings, ModelStore, DEFAULT_BASE_URL,
    DEFAULT_MODEL,
};
pub use wordnet::{is_wordnet_dir, WordNetLocator, NLTK_DATA_ENV, WORDNET_DIR_ENV};
