//! # Keyed Vectors
//!
//! Dense word vectors loaded from word2vec/GloVe text format.

use std::collections::HashMap;
use std::io::BufRead;

use tracing::{debug, info};

use crate::embedding::EmbeddingModel;
use crate::error::{Result, WordsimError};

/// A word -> vector table stored as one contiguous row-major buffer.
#[derive(Debug, Clone, Default)]
pub struct KeyedVectors {
    dim: usize,
    words: Vec<String>,
    key_to_index: HashMap<String, usize>,
    vectors: Vec<f32>,
}

impl KeyedVectors {
    /// Reads vectors in text format.
    ///
    /// Accepts both word2vec text (first line `<count> <dim>`) and headerless
    /// GloVe files, in which case the dimension comes from the first row.
    /// At most `limit` rows are read when given. Repeated words keep their
    /// first vector.
    ///
    /// # Errors
    ///
    /// Returns `WordsimError::Embedding` for rows with a non-numeric
    /// component or a dimension different from the rest of the table.
    pub fn from_reader<R: BufRead>(reader: R, limit: Option<usize>) -> Result<Self> {
        let mut table = Self::default();
        let mut declared: Option<usize> = None;

        for (idx, line) in reader.lines().enumerate() {
            if limit.is_some_and(|max| table.len() >= max) {
                break;
            }
            let line = line?;
            let line_no = idx + 1;
            let mut fields = line.split_whitespace();
            let Some(word) = fields.next() else {
                continue;
            };
            let rest: Vec<&str> = fields.collect();

            if idx == 0 && rest.len() == 1 {
                if let (Ok(count), Ok(dim)) = (word.parse::<usize>(), rest[0].parse::<usize>()) {
                    debug!(count, dim, "word2vec header");
                    declared = Some(count);
                    table.dim = dim;
                    continue;
                }
            }

            let vector = rest
                .iter()
                .map(|v| v.parse::<f32>())
                .collect::<std::result::Result<Vec<f32>, _>>()
                .map_err(|e| WordsimError::Embedding {
                    line: line_no,
                    reason: format!("bad component for {word:?}: {e}"),
                })?;
            table.push(word, vector, line_no)?;
        }

        if let Some(count) = declared {
            if limit.is_none() && count != table.len() {
                debug!(declared = count, read = table.len(), "row count differs from header");
            }
        }
        info!(words = table.len(), dim = table.dim, "loaded embedding vectors");
        Ok(table)
    }

    /// Builds a table from in-memory `(word, vector)` entries.
    ///
    /// # Errors
    ///
    /// Returns `WordsimError::Embedding` if the vectors differ in length.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<f32>)>,
        S: AsRef<str>,
    {
        let mut table = Self::default();
        for (idx, (word, vector)) in entries.into_iter().enumerate() {
            table.push(word.as_ref(), vector, idx + 1)?;
        }
        Ok(table)
    }

    fn push(&mut self, word: &str, vector: Vec<f32>, line: usize) -> Result<()> {
        if vector.is_empty() {
            return Err(WordsimError::Embedding {
                line,
                reason: format!("no components for {word:?}"),
            });
        }
        if self.dim == 0 {
            self.dim = vector.len();
        }
        if vector.len() != self.dim {
            return Err(WordsimError::Embedding {
                line,
                reason: format!(
                    "{word:?} has {} components, expected {}",
                    vector.len(),
                    self.dim
                ),
            });
        }
        if self.key_to_index.contains_key(word) {
            return Ok(());
        }
        self.key_to_index.insert(word.to_string(), self.words.len());
        self.words.push(word.to_string());
        self.vectors.extend(vector);
        Ok(())
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Vocabulary in load order.
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl EmbeddingModel for KeyedVectors {
    fn vector(&self, word: &str) -> Option<&[f32]> {
        let idx = *self.key_to_index.get(word)?;
        Some(&self.vectors[idx * self.dim..(idx + 1) * self.dim])
    }

    fn contains(&self, word: &str) -> bool {
        self.key_to_index.contains_key(word)
    }

    fn vocab_size(&self) -> usize {
        self.len()
    }
}
