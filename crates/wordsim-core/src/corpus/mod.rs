pub mod aligner;
pub mod loader;

use std::collections::BTreeSet;
use std::io::BufRead;
use std::path::Path;

use tracing::info;

pub use aligner::GoldAligner;
pub use loader::{load_records, read_records, LineValidation};

use crate::error::Result;
use crate::types::{EvaluationSet, WordPairRecord, WordPairs};

/// A loaded similarity corpus.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    records: Vec<WordPairRecord>,
}

impl Corpus {
    /// Loads a corpus file from disk.
    ///
    /// # Errors
    ///
    /// See [`load_records`].
    pub fn load<P: AsRef<Path>>(path: P, validation: LineValidation) -> Result<Self> {
        let records = load_records(path.as_ref(), validation)?;
        info!(
            path = %path.as_ref().display(),
            pairs = records.len(),
            "loaded similarity corpus"
        );
        Ok(Self { records })
    }

    /// Reads a corpus from any buffered reader.
    ///
    /// # Errors
    ///
    /// See [`read_records`].
    pub fn from_reader<R: BufRead>(reader: R, validation: LineValidation) -> Result<Self> {
        Ok(Self {
            records: read_records(reader, validation)?,
        })
    }

    #[must_use]
    pub fn from_records(records: Vec<WordPairRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[WordPairRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First-column words, in file order.
    #[must_use]
    pub fn left_words(&self) -> Vec<String> {
        self.records.iter().map(|r| r.word_a.clone()).collect()
    }

    /// Second-column words, in file order.
    #[must_use]
    pub fn right_words(&self) -> Vec<String> {
        self.records.iter().map(|r| r.word_b.clone()).collect()
    }

    #[must_use]
    pub fn gold_scores(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.gold).collect()
    }

    #[must_use]
    pub fn pairs(&self) -> WordPairs {
        WordPairs::from_tuples(
            self.records
                .iter()
                .map(|r| (r.word_a.as_str(), r.word_b.as_str())),
        )
    }

    /// All unique words in the corpus.
    #[must_use]
    pub fn vocabulary(&self) -> BTreeSet<String> {
        self.pairs().vocabulary()
    }

    /// The whole corpus as an evaluation set, gold taken from the records.
    #[must_use]
    pub fn evaluation_set(&self, name: impl Into<String>) -> EvaluationSet {
        EvaluationSet::from_records(name, &self.records)
    }

    /// Gold aligner over this corpus.
    #[must_use]
    pub fn aligner(&self, symmetric: bool) -> GoldAligner {
        GoldAligner::new(&self.records, symmetric)
    }
}
