use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::PartOfSpeech;

/// Identifies a synset by its category and byte offset in the data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SynsetId {
    pub pos: PartOfSpeech,
    pub offset: u32,
}

impl SynsetId {
    #[must_use]
    pub fn new(pos: PartOfSpeech, offset: u32) -> Self {
        Self { pos, offset }
    }
}

impl fmt::Display for SynsetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08}-{}", self.offset, self.pos.tag())
    }
}

/// A set of synonymous word senses with its taxonomy links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Synset {
    pub id: SynsetId,
    /// Lemmas in data-file order, adjective markers removed.
    pub lemmas: Vec<String>,
    /// Targets of `@` pointers.
    pub hypernyms: Vec<SynsetId>,
    /// Targets of `@i` pointers.
    pub instance_hypernyms: Vec<SynsetId>,
    /// Adjective satellite (`s` in the data file).
    pub satellite: bool,
    pub gloss: String,
}

impl Synset {
    /// Hypernyms followed by instance hypernyms.
    pub fn parents(&self) -> impl Iterator<Item = SynsetId> + '_ {
        self.hypernyms
            .iter()
            .chain(&self.instance_hypernyms)
            .copied()
    }

    /// Single-letter category tag, `s` for adjective satellites.
    #[must_use]
    pub fn pos_tag(&self) -> char {
        if self.satellite { 's' } else { self.id.pos.tag() }
    }

    /// First lemma, used as the synset's head word.
    #[must_use]
    pub fn head_lemma(&self) -> &str {
        self.lemmas.first().map(String::as_str).unwrap_or("")
    }
}
