//! Finding a WordNet 3.x database directory on disk.
//!
//! The database is never downloaded. It is looked up where NLTK keeps it
//! (`<nltk_data>/corpora/wordnet`, unzipped) or in the usual system
//! locations of the WordNet distribution.

use std::env;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use wordsim_core::WordNet;

use crate::error::{ResourceError, Result};

/// Overrides the search path with a single directory.
pub const WORDNET_DIR_ENV: &str = "WORDNET_DIR";
/// Extra NLTK data roots, separated like `PATH`.
pub const NLTK_DATA_ENV: &str = "NLTK_DATA";

const NLTK_SYSTEM_ROOTS: [&str; 5] = [
    "/usr/share/nltk_data",
    "/usr/local/share/nltk_data",
    "/usr/lib/nltk_data",
    "/usr/local/lib/nltk_data",
    "/opt/nltk_data",
];

const WORDNET_SYSTEM_DIRS: [&str; 2] = ["/usr/share/wordnet", "/usr/local/share/wordnet"];

/// Resolves the WordNet database directory.
#[derive(Debug, Clone)]
pub struct WordNetLocator {
    explicit: Option<PathBuf>,
    candidates: Vec<PathBuf>,
}

impl Default for WordNetLocator {
    fn default() -> Self {
        Self {
            explicit: None,
            candidates: default_candidates(),
        }
    }
}

impl WordNetLocator {
    /// Locator over the default search path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Locator over exactly `candidates`, in order.
    pub fn with_candidates(candidates: Vec<PathBuf>) -> Self {
        Self {
            explicit: None,
            candidates,
        }
    }

    /// Use `dir` and nothing else.
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.explicit = Some(dir.into());
        self
    }

    /// Directories that will be tried, in order.
    #[must_use]
    pub fn search_path(&self) -> Vec<PathBuf> {
        match &self.explicit {
            Some(dir) => vec![dir.clone()],
            None => self.candidates.clone(),
        }
    }

    /// The first directory on the search path holding a WordNet database.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::WordNetNotFound` listing every directory tried.
    pub fn locate(&self) -> Result<PathBuf> {
        let searched = self.search_path();
        for dir in &searched {
            if is_wordnet_dir(dir) {
                debug!(dir = %dir.display(), "found WordNet database");
                return Ok(dir.clone());
            }
        }
        Err(ResourceError::WordNetNotFound { searched })
    }

    /// Locates and parses the database.
    ///
    /// # Errors
    ///
    /// Fails if no directory is found or the files cannot be parsed.
    pub fn load(&self) -> Result<WordNet> {
        let dir = self.locate()?;
        info!(dir = %dir.display(), "loading WordNet");
        WordNet::load(&dir).map_err(ResourceError::WordNet)
    }
}

/// A directory counts as a WordNet database when it has `data.noun`.
#[must_use]
pub fn is_wordnet_dir(dir: &Path) -> bool {
    dir.join("data.noun").is_file()
}

fn default_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(dir) = env::var_os(WORDNET_DIR_ENV) {
        candidates.push(PathBuf::from(dir));
    }

    let mut nltk_roots: Vec<PathBuf> = env::var_os(NLTK_DATA_ENV)
        .map(|paths| env::split_paths(&paths).collect())
        .unwrap_or_default();
    if let Some(home) = dirs::home_dir() {
        nltk_roots.push(home.join("nltk_data"));
    }
    nltk_roots.extend(NLTK_SYSTEM_ROOTS.iter().map(PathBuf::from));
    candidates.extend(
        nltk_roots
            .into_iter()
            .map(|root| root.join("corpora").join("wordnet")),
    );

    candidates.extend(WORDNET_SYSTEM_DIRS.iter().map(PathBuf::from));
    candidates
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    const DATA_NOUN: &str = "  1 header\n\
        00000001 03 n 01 entity 0 000 | root\n\
        00000002 03 n 01 cat 0 001 @ 00000001 n 0000 | feline\n";
    const INDEX_NOUN: &str = "cat n 1 1 @ 1 0 00000002\nentity n 1 0 1 0 00000001\n";

    fn write_database(dir: &Path) {
        fs::write(dir.join("data.noun"), DATA_NOUN).unwrap();
        fs::write(dir.join("index.noun"), INDEX_NOUN).unwrap();
        for pos in ["verb", "adj", "adv"] {
            fs::write(dir.join(format!("data.{pos}")), "").unwrap();
            fs::write(dir.join(format!("index.{pos}")), "").unwrap();
        }
    }

    #[test]
    fn first_valid_candidate_wins() {
        let empty = tempfile::tempdir().unwrap();
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        write_database(first.path());
        write_database(second.path());

        let locator = WordNetLocator::with_candidates(vec![
            empty.path().to_path_buf(),
            first.path().to_path_buf(),
            second.path().to_path_buf(),
        ]);
        assert_eq!(locator.locate().unwrap(), first.path());
    }

    #[test]
    fn explicit_dir_replaces_search_path() {
        let found = tempfile::tempdir().unwrap();
        let explicit = tempfile::tempdir().unwrap();
        write_database(found.path());

        let locator = WordNetLocator::with_candidates(vec![found.path().to_path_buf()])
            .with_dir(explicit.path());
        assert_eq!(locator.search_path(), vec![explicit.path().to_path_buf()]);
        match locator.locate() {
            Err(ResourceError::WordNetNotFound { searched }) => assert_eq!(searched.len(), 1),
            other => panic!("expected WordNetNotFound, got {other:?}"),
        }
    }

    #[test]
    fn load_parses_database() {
        let dir = tempfile::tempdir().unwrap();
        write_database(dir.path());
        let wordnet = WordNetLocator::new().with_dir(dir.path()).load().unwrap();
        assert_eq!(wordnet.synset_count(), 2);
        assert!(wordnet.has_senses("cats"));
    }

    #[test]
    fn default_search_path_ends_with_system_dirs() {
        let path = WordNetLocator::new().search_path();
        assert_eq!(path.last(), Some(&PathBuf::from("/usr/local/share/wordnet")));
        assert!(
            path.iter()
                .any(|p| p == Path::new("/usr/share/nltk_data/corpora/wordnet"))
        );
    }
}
