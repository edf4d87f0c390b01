use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during wordsim core operations.
#[derive(Debug, Error)]
pub enum WordsimError {
    /// Reading a corpus, WordNet or embedding file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A corpus line did not hold `wordA<TAB>wordB<TAB>score` (strict mode only).
    #[error("malformed corpus line {line}: {reason}")]
    MalformedLine {
        /// 1-based line number in the corpus file.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// Two word lists that must be aligned by position have different lengths.
    #[error("word lists differ in length: {left} vs {right}")]
    LengthMismatch {
        /// Length of the first list.
        left: usize,
        /// Length of the second list.
        right: usize,
    },

    /// A WordNet database file could not be parsed.
    #[error("invalid WordNet data in {file} at line {line}: {reason}")]
    WordNet {
        /// The database file (e.g. `data.noun`).
        file: String,
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// A WordNet database directory is missing a required file.
    #[error("WordNet file not found: {0}")]
    MissingWordNetFile(PathBuf),

    /// An embedding table could not be parsed.
    #[error("invalid embedding data at line {line}: {reason}")]
    Embedding {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// A word was not present in the embedding vocabulary.
    #[error("word {word:?} not present in embedding vocabulary")]
    OutOfVocabulary {
        /// The missing word.
        word: String,
    },

    /// Serializing a report failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for wordsim operations.
pub type Result<T> = std::result::Result<T, WordsimError>;
