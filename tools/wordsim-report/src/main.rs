//! Word Similarity Report
//!
//! Scores word pairs with WordNet path similarity, WordNet Wu-Palmer
//! similarity and embedding cosine similarity, then reports how well each
//! agrees with human judgements (Spearman) and how much of the vocabulary
//! each resource covers.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordsim::prelude::*;
use wordsim::DEFAULT_BASE_URL;

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "wordsim-report")]
#[command(about = "Compare WordNet and embedding similarity against human judgements")]
#[command(version)]
struct Cli {
    /// Word-pair corpus: `wordA<TAB>wordB<TAB>score` per line
    #[arg(short, long, env = "WORDSIM_CORPUS", default_value = "wordsim353.txt")]
    corpus: PathBuf,

    /// Pretrained embedding model to download and cache
    #[arg(short, long, env = "WORDSIM_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Load embeddings from this word2vec/GloVe text file instead (.gz allowed)
    #[arg(short, long, conflicts_with = "force_download")]
    embeddings: Option<PathBuf>,

    /// WordNet database directory (holding data.noun, index.noun, ...)
    #[arg(short, long, env = "WORDNET_DIR")]
    wordnet_dir: Option<PathBuf>,

    /// Model cache directory
    #[arg(long, env = "WORDSIM_CACHE_DIR")]
    cache_dir: Option<PathBuf>,

    /// Model download host
    #[arg(long, env = "WORDSIM_BASE_URL", default_value = DEFAULT_BASE_URL, hide = true)]
    base_url: String,

    /// Re-download the model even if it is cached
    #[arg(short, long)]
    force_download: bool,

    /// What to do with pairs containing a word the model does not know
    #[arg(long, value_enum, default_value_t = OovArg::Abort)]
    oov: OovArg,

    /// Also accept reversed corpus pairs when looking up curated gold scores
    #[arg(long)]
    symmetric_gold: bool,

    /// Fail on malformed corpus lines instead of skipping them
    #[arg(long)]
    strict: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Read at most this many embedding vectors
    #[arg(long)]
    limit: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OovArg {
    Abort,
    Zero,
    Skip,
}

impl From<OovArg> for OovPolicy {
    fn from(arg: OovArg) -> Self {
        match arg {
            OovArg::Abort => OovPolicy::Abort,
            OovArg::Zero => OovPolicy::Zero,
            OovArg::Skip => OovPolicy::Skip,
        }
    }
}

impl Cli {
    fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig::new()
            .with_oov_policy(self.oov.into())
            .with_symmetric_gold(self.symmetric_gold)
            .with_strict(self.strict)
    }

    fn wordnet_locator(&self) -> WordNetLocator {
        match &self.wordnet_dir {
            Some(dir) => WordNetLocator::new().with_dir(dir),
            None => WordNetLocator::new(),
        }
    }

    fn model_store(&self) -> ModelStore {
        let store = match &self.cache_dir {
            Some(dir) => ModelStore::new(dir),
            None => ModelStore::default(),
        };
        store
            .with_base_url(&self.base_url)
            .with_force(self.force_download)
    }

    fn load_model(&self) -> Result<KeyedVectors> {
        match &self.embeddings {
            Some(path) => load_embeddings(path, self.limit)
                .with_context(|| format!("failed to load embeddings from {}", path.display())),
            None => self
                .model_store()
                .load(&self.model, self.limit)
                .with_context(|| format!("failed to load embedding model {}", self.model)),
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = cli.analysis_config();

    let corpus = Corpus::load(&cli.corpus, config.line_validation())
        .with_context(|| format!("failed to load corpus {}", cli.corpus.display()))?;
    let wordnet = cli
        .wordnet_locator()
        .load()
        .context("failed to load WordNet (set --wordnet-dir or WORDNET_DIR)")?;
    let model = cli.load_model()?;
    info!(
        pairs = corpus.len(),
        synsets = wordnet.synset_count(),
        words = model.len(),
        "resources ready"
    );

    let report = Analyzer::new(&wordnet, &model, config)
        .run(&corpus)
        .context("analysis failed")?;

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{report}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_build_config() {
        let cli = Cli::try_parse_from([
            "wordsim-report",
            "--oov",
            "skip",
            "--symmetric-gold",
            "--strict",
        ])
        .unwrap();
        let config = cli.analysis_config();
        assert_eq!(config.oov_policy, OovPolicy::Skip);
        assert!(config.symmetric_gold);
        assert_eq!(config.line_validation(), LineValidation::Strict);
    }

    #[test]
    fn local_embeddings_conflict_with_force_download() {
        let result = Cli::try_parse_from([
            "wordsim-report",
            "--embeddings",
            "vectors.txt",
            "--force-download",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn cache_dir_sets_model_path() {
        let cli = Cli::try_parse_from([
            "wordsim-report",
            "--cache-dir",
            "/tmp/wordsim-cache",
            "--model",
            "tiny",
        ])
        .unwrap();
        assert_eq!(
            cli.model_store().model_path("tiny"),
            PathBuf::from("/tmp/wordsim-cache/tiny/tiny.gz")
        );
    }
}
