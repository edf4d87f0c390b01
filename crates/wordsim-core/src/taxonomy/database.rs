//! # WordNet Database Reader
//!
//! Parses the Princeton WordNet database format (`index.*`, `data.*` and
//! `*.exc` files) into an in-memory synset graph.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{Result, WordsimError};
use crate::taxonomy::morphy;
use crate::taxonomy::synset::{Synset, SynsetId};
use crate::types::PartOfSpeech;

/// Minimum and maximum hypernym depth of a synset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Depth {
    pub min: usize,
    pub max: usize,
}

/// An in-memory WordNet: synsets, lemma index and morphological exceptions.
#[derive(Debug, Clone, Default)]
pub struct WordNet {
    synsets: HashMap<SynsetId, Synset>,
    index: HashMap<String, BTreeMap<PartOfSpeech, Vec<u32>>>,
    exceptions: HashMap<PartOfSpeech, HashMap<String, Vec<String>>>,
    depths: HashMap<SynsetId, Depth>,
}

impl WordNet {
    /// Loads a WordNet database directory (the `dict/` directory of a
    /// WordNet 3.x release, or NLTK's `corpora/wordnet`).
    ///
    /// `index.*` and `data.*` are required for all four categories; `*.exc`
    /// files are optional.
    ///
    /// # Errors
    ///
    /// Returns `WordsimError::MissingWordNetFile` for a missing required
    /// file and `WordsimError::WordNet` for unparsable lines.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let mut builder = WordNetBuilder::new();

        for pos in PartOfSpeech::ALL {
            let suffix = pos.file_suffix();

            let index_path = dir.join(format!("index.{suffix}"));
            builder.add_index(pos, open_required(&index_path)?, &format!("index.{suffix}"))?;

            let data_path = dir.join(format!("data.{suffix}"));
            builder.add_data(pos, open_required(&data_path)?, &format!("data.{suffix}"))?;

            let exc_path = dir.join(format!("{suffix}.exc"));
            if exc_path.is_file() {
                let reader = BufReader::new(File::open(&exc_path)?);
                builder.add_exceptions(pos, reader)?;
            } else {
                debug!(path = %exc_path.display(), "no exception list");
            }
        }

        let wordnet = builder.build();
        info!(
            dir = %dir.display(),
            synsets = wordnet.synset_count(),
            lemmas = wordnet.lemma_count(),
            "loaded WordNet"
        );
        Ok(wordnet)
    }

    pub fn synset(&self, id: SynsetId) -> Option<&Synset> {
        self.synsets.get(&id)
    }

    pub fn synset_count(&self) -> usize {
        self.synsets.len()
    }

    pub fn lemma_count(&self) -> usize {
        self.index.len()
    }

    /// All senses of `word`, noun senses first, then verbs, adjectives and
    /// adverbs, each in sense order. Inflected forms are resolved through
    /// morphological normalisation.
    #[must_use]
    pub fn synsets(&self, word: &str) -> Vec<SynsetId> {
        let word = word.to_lowercase().replace(' ', "_");
        let mut out = Vec::new();

        for pos in PartOfSpeech::ALL {
            for form in self.morphy(&word, pos) {
                if let Some(offsets) = self.index.get(&form).and_then(|by_pos| by_pos.get(&pos)) {
                    out.extend(offsets.iter().map(|&offset| SynsetId::new(pos, offset)));
                }
            }
        }
        out
    }

    /// Base forms of `form` that are present in the index for `pos`.
    #[must_use]
    pub fn morphy(&self, form: &str, pos: PartOfSpeech) -> Vec<String> {
        let exceptions = self
            .exceptions
            .get(&pos)
            .and_then(|exc| exc.get(form))
            .map(Vec::as_slice);
        morphy::base_forms(form, pos, exceptions, |c| {
            self.index.get(c).is_some_and(|by_pos| by_pos.contains_key(&pos))
        })
    }

    /// Returns `true` if `word` has at least one sense.
    #[must_use]
    pub fn has_senses(&self, word: &str) -> bool {
        !self.synsets(word).is_empty()
    }

    /// Depth of a synset; top-level synsets have depth 0.
    #[must_use]
    pub fn depth(&self, id: SynsetId) -> Depth {
        self.depths.get(&id).copied().unwrap_or_default()
    }

    /// Hypernyms and instance hypernyms that exist in this database.
    pub fn parents(&self, id: SynsetId) -> Vec<SynsetId> {
        self.synsets
            .get(&id)
            .map(|s| s.parents().filter(|p| self.synsets.contains_key(p)).collect())
            .unwrap_or_default()
    }

    /// Conventional synset name, e.g. `dog.n.01`.
    #[must_use]
    pub fn synset_name(&self, id: SynsetId) -> String {
        let Some(synset) = self.synsets.get(&id) else {
            return id.to_string();
        };
        let lemma = synset.head_lemma().to_lowercase();
        let sense = self
            .index
            .get(&lemma)
            .and_then(|by_pos| by_pos.get(&id.pos))
            .and_then(|offsets| offsets.iter().position(|&o| o == id.offset))
            .map_or(0, |idx| idx + 1);
        format!("{}.{}.{:02}", lemma, synset.pos_tag(), sense)
    }
}

fn open_required(path: &Path) -> Result<BufReader<File>> {
    if !path.is_file() {
        return Err(WordsimError::MissingWordNetFile(path.to_path_buf()));
    }
    Ok(BufReader::new(File::open(path)?))
}

/// Incrementally assembles a [`WordNet`] from database readers.
#[derive(Debug, Default)]
pub struct WordNetBuilder {
    synsets: HashMap<SynsetId, Synset>,
    index: HashMap<String, BTreeMap<PartOfSpeech, Vec<u32>>>,
    exceptions: HashMap<PartOfSpeech, HashMap<String, Vec<String>>>,
}

impl WordNetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads an `index.<pos>` file. `name` is used in error messages.
    pub fn add_index<R: BufRead>(&mut self, pos: PartOfSpeech, reader: R, name: &str) -> Result<()> {
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if is_header(&line) {
                continue;
            }
            let (lemma, offsets) =
                parse_index_line(&line).map_err(|reason| WordsimError::WordNet {
                    file: name.to_string(),
                    line: idx + 1,
                    reason,
                })?;
            self.index
                .entry(lemma)
                .or_default()
                .entry(pos)
                .or_default()
                .extend(offsets);
        }
        Ok(())
    }

    /// Reads a `data.<pos>` file. `name` is used in error messages.
    pub fn add_data<R: BufRead>(&mut self, pos: PartOfSpeech, reader: R, name: &str) -> Result<()> {
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if is_header(&line) {
                continue;
            }
            let synset = parse_data_line(&line, pos).map_err(|reason| WordsimError::WordNet {
                file: name.to_string(),
                line: idx + 1,
                reason,
            })?;
            self.synsets.insert(synset.id, synset);
        }
        Ok(())
    }

    /// Reads a `<pos>.exc` exception list.
    pub fn add_exceptions<R: BufRead>(&mut self, pos: PartOfSpeech, reader: R) -> Result<()> {
        let map = self.exceptions.entry(pos).or_default();
        for line in reader.lines() {
            let line = line?;
            let mut fields = line.split_whitespace();
            let Some(inflected) = fields.next() else {
                continue;
            };
            let bases: Vec<String> = fields.map(str::to_string).collect();
            if !bases.is_empty() {
                map.entry(inflected.to_string()).or_default().extend(bases);
            }
        }
        Ok(())
    }

    /// Finalises the graph and precomputes synset depths.
    pub fn build(self) -> WordNet {
        let depths = compute_depths(&self.synsets);
        WordNet {
            synsets: self.synsets,
            index: self.index,
            exceptions: self.exceptions,
            depths,
        }
    }
}

/// License text at the top of each database file is indented.
fn is_header(line: &str) -> bool {
    line.is_empty() || line.starts_with(' ')
}

/// `lemma pos synset_cnt p_cnt [ptr_symbol...] sense_cnt tagsense_cnt synset_offset...`
fn parse_index_line(line: &str) -> std::result::Result<(String, Vec<u32>), String> {
    let mut fields = line.split_whitespace();
    let mut next = |what: &str| fields.next().ok_or_else(|| format!("missing {what}"));

    let lemma = next("lemma")?.to_lowercase();
    next("pos")?;
    let synset_cnt: usize = parse_num(next("synset_cnt")?, "synset_cnt")?;
    let p_cnt: usize = parse_num(next("p_cnt")?, "p_cnt")?;
    for _ in 0..p_cnt {
        next("ptr_symbol")?;
    }
    next("sense_cnt")?;
    next("tagsense_cnt")?;

    let offsets = (0..synset_cnt)
        .map(|_| parse_num(next("synset_offset")?, "synset_offset"))
        .collect::<std::result::Result<Vec<u32>, String>>()?;
    Ok((lemma, offsets))
}

/// `offset lex_filenum ss_type w_cnt word lex_id... p_cnt ptr... [frames] | gloss`
fn parse_data_line(line: &str, pos: PartOfSpeech) -> std::result::Result<Synset, String> {
    let (body, gloss) = match line.split_once('|') {
        Some((body, gloss)) => (body, gloss.trim().to_string()),
        None => (line, String::new()),
    };

    let mut fields = body.split_whitespace();
    let mut next = |what: &str| fields.next().ok_or_else(|| format!("missing {what}"));

    let offset: u32 = parse_num(next("synset_offset")?, "synset_offset")?;
    next("lex_filenum")?;
    let ss_type = next("ss_type")?;
    let satellite = ss_type == "s";

    let w_cnt = usize::from_str_radix(next("w_cnt")?, 16).map_err(|e| format!("w_cnt: {e}"))?;
    let mut lemmas = Vec::with_capacity(w_cnt);
    for _ in 0..w_cnt {
        lemmas.push(strip_marker(next("word")?).to_string());
        next("lex_id")?;
    }

    let p_cnt: usize = parse_num(next("p_cnt")?, "p_cnt")?;
    let mut hypernyms = Vec::new();
    let mut instance_hypernyms = Vec::new();
    for _ in 0..p_cnt {
        let symbol = next("pointer_symbol")?;
        let target: u32 = parse_num(next("pointer_offset")?, "pointer_offset")?;
        let tag = next("pointer_pos")?;
        next("source/target")?;

        let target_pos =
            PartOfSpeech::from_tag(tag).ok_or_else(|| format!("unknown pointer pos {tag:?}"))?;
        match symbol {
            "@" => hypernyms.push(SynsetId::new(target_pos, target)),
            "@i" => instance_hypernyms.push(SynsetId::new(target_pos, target)),
            _ => {}
        }
    }

    Ok(Synset {
        id: SynsetId::new(pos, offset),
        lemmas,
        hypernyms,
        instance_hypernyms,
        satellite,
        gloss,
    })
}

/// Drops adjective position markers: `galore(ip)` -> `galore`.
fn strip_marker(word: &str) -> &str {
    match word.find('(') {
        Some(idx) if word.ends_with(')') => &word[..idx],
        _ => word,
    }
}

fn parse_num<T: std::str::FromStr>(field: &str, what: &str) -> std::result::Result<T, String> {
    field
        .parse()
        .map_err(|_| format!("{what} {field:?} is not a number"))
}

fn compute_depths(synsets: &HashMap<SynsetId, Synset>) -> HashMap<SynsetId, Depth> {
    let mut memo = HashMap::with_capacity(synsets.len());
    let mut visiting = HashSet::new();
    // Cycle depths depend on where the walk starts, so start in id order.
    let mut ids: Vec<SynsetId> = synsets.keys().copied().collect();
    ids.sort_unstable();
    for id in ids {
        depth_of(id, synsets, &mut memo, &mut visiting);
    }
    memo
}

fn depth_of(
    id: SynsetId,
    synsets: &HashMap<SynsetId, Synset>,
    memo: &mut HashMap<SynsetId, Depth>,
    visiting: &mut HashSet<SynsetId>,
) -> Depth {
    if let Some(&depth) = memo.get(&id) {
        return depth;
    }
    // A pointer cycle would recurse forever; treat the back edge as a root.
    if !visiting.insert(id) {
        return Depth::default();
    }

    let parents: Vec<SynsetId> = synsets
        .get(&id)
        .map(|s| s.parents().filter(|p| synsets.contains_key(p)).collect())
        .unwrap_or_default();

    let depth = parents
        .into_iter()
        .map(|p| depth_of(p, synsets, memo, visiting))
        .fold(None, |acc: Option<Depth>, d| {
            Some(match acc {
                None => Depth { min: d.min + 1, max: d.max + 1 },
                Some(a) => Depth {
                    min: a.min.min(d.min + 1),
                    max: a.max.max(d.max + 1),
                },
            })
        })
        .unwrap_or_default();

    visiting.remove(&id);
    memo.insert(id, depth);
    depth
}
