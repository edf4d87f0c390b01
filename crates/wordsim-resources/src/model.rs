//! Pretrained embedding models: local cache and download.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;

use flate2::read::MultiGzDecoder;
use tracing::{debug, info};
use wordsim_core::KeyedVectors;

use crate::error::{ResourceError, Result};

/// Model used when none is named.
pub const DEFAULT_MODEL: &str = "glove-wiki-gigaword-50";

/// Release host of the gensim-data model files.
pub const DEFAULT_BASE_URL: &str =
    "https://github.com/RaRe-Technologies/gensim-data/releases/download";

/// Default cache location: `<user cache dir>/wordsim/models`.
pub fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("wordsim")
        .join("models")
}

/// Downloads embedding models on first use and serves them from disk after.
///
/// A model named `name` lives at `<cache_dir>/<name>/<name>.gz` and is
/// fetched from `<base_url>/<name>/<name>.gz`.
#[derive(Debug, Clone)]
pub struct ModelStore {
    cache_dir: PathBuf,
    base_url: String,
    force: bool,
}

impl Default for ModelStore {
    fn default() -> Self {
        Self::new(default_cache_dir())
    }
}

impl ModelStore {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            force: false,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Re-download even when a cached copy exists.
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Where `name` is (or will be) cached.
    pub fn model_path(&self, name: &str) -> PathBuf {
        self.cache_dir.join(name).join(format!("{name}.gz"))
    }

    pub fn is_cached(&self, name: &str) -> bool {
        self.model_path(name).is_file()
    }

    /// Download URL for `name`.
    pub fn model_url(&self, name: &str) -> String {
        format!("{}/{name}/{name}.gz", self.base_url)
    }

    /// Path to a local copy of `name`, downloading it if needed.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::Http` or `ResourceError::Status` if the download
    /// fails, `ResourceError::Io` if the cache cannot be written.
    pub fn fetch(&self, name: &str) -> Result<PathBuf> {
        let path = self.model_path(name);
        if path.is_file() && !self.force {
            debug!(path = %path.display(), "using cached model");
            return Ok(path);
        }
        self.download(name, &path)?;
        Ok(path)
    }

    /// Fetches and parses `name`, reading at most `limit` vectors.
    ///
    /// # Errors
    ///
    /// See [`ModelStore::fetch`] and [`load_embeddings`].
    pub fn load(&self, name: &str, limit: Option<usize>) -> Result<KeyedVectors> {
        let path = self.fetch(name)?;
        load_embeddings(&path, limit)
    }

    fn download(&self, name: &str, path: &Path) -> Result<()> {
        let url = self.model_url(name);
        info!(%url, "downloading embedding model");

        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("wordsim/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(Duration::from_secs(30))
            .timeout(None::<Duration>)
            .build()?;
        let mut response = client.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ResourceError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let dir = path.parent().unwrap_or(self.cache_dir.as_path());
        fs::create_dir_all(dir)?;

        // Partial downloads never land at the final path.
        let partial = path.with_extension("gz.part");
        let mut file = File::create(&partial)?;
        let bytes = response.copy_to(&mut file)?;
        file.sync_all()?;
        drop(file);
        fs::rename(&partial, path)?;

        info!(bytes, path = %path.display(), "model cached");
        Ok(())
    }
}

/// Loads an embedding file in word2vec or GloVe text format.
///
/// Files ending in `.gz` are decompressed on the fly.
///
/// # Errors
///
/// Returns `ResourceError::Io` if the file cannot be opened and
/// `ResourceError::Model` if it cannot be parsed.
pub fn load_embeddings(path: &Path, limit: Option<usize>) -> Result<KeyedVectors> {
    info!(path = %path.display(), "loading embedding model");
    let file = File::open(path)?;
    let gzipped = path.extension().is_some_and(|ext| ext == "gz");
    let reader: Box<dyn Read> = if gzipped {
        Box::new(MultiGzDecoder::new(file))
    } else {
        Box::new(file)
    };
    read_embeddings(BufReader::new(reader), limit)
}

/// Parses an already-decompressed embedding stream.
///
/// # Errors
///
/// Returns `ResourceError::Model` on malformed rows or read failures.
pub fn read_embeddings<R: BufRead>(reader: R, limit: Option<usize>) -> Result<KeyedVectors> {
    KeyedVectors::from_reader(reader, limit).map_err(ResourceError::Model)
}
