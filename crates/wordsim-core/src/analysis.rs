//! End-to-end analysis: score both evaluation sets, correlate, measure coverage.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::corpus::{Corpus, LineValidation};
use crate::coverage::Coverage;
use crate::embedding::EmbeddingModel;
use crate::error::Result;
use crate::report::{Correlation, Report, ReportRow, SetReport};
use crate::scoring::{
    cosine_similarity, path_similarity, round4, wup_similarity, OovPolicy, SimilarityMethod,
};
use crate::stats::spearman;
use crate::taxonomy::WordNet;
use crate::types::{EvaluationSet, WordPairs};

/// The hand-picked pairs scored before the full corpus.
pub const CURATED_PAIRS: [(&str, &str); 6] = [
    ("jaguar", "cat"),
    ("jaguar", "car"),
    ("king", "queen"),
    ("king", "rook"),
    ("tiger", "zoo"),
    ("tiger", "cat"),
];

/// Configuration for an analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Treatment of pairs the embedding model cannot score.
    pub oov_policy: OovPolicy,
    /// Whether the curated set also takes gold from reversed corpus pairs.
    pub symmetric_gold: bool,
    /// Whether malformed corpus lines are fatal.
    pub strict: bool,
}

impl AnalysisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_oov_policy(mut self, policy: OovPolicy) -> Self {
        self.oov_policy = policy;
        self
    }

    pub fn with_symmetric_gold(mut self, symmetric: bool) -> Self {
        self.symmetric_gold = symmetric;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Corpus line validation implied by `strict`.
    #[must_use]
    pub fn line_validation(&self) -> LineValidation {
        if self.strict {
            LineValidation::Strict
        } else {
            LineValidation::Lenient
        }
    }
}

/// Scores evaluation sets against a WordNet database and an embedding model.
pub struct Analyzer<'a> {
    wordnet: &'a WordNet,
    model: &'a dyn EmbeddingModel,
    config: AnalysisConfig,
}

impl<'a> Analyzer<'a> {
    pub fn new(wordnet: &'a WordNet, model: &'a dyn EmbeddingModel, config: AnalysisConfig) -> Self {
        Self {
            wordnet,
            model,
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// The curated pairs, gold looked up in `corpus`.
    ///
    /// # Errors
    ///
    /// Propagates `EvaluationSet::new` failures.
    pub fn curated_set(&self, corpus: &Corpus) -> Result<EvaluationSet> {
        let pairs = WordPairs::from_tuples(CURATED_PAIRS);
        let gold = corpus.aligner(self.config.symmetric_gold).align(&pairs);
        EvaluationSet::new(
            format!("the provided {} word pairs", pairs.len()),
            pairs,
            gold,
        )
    }

    /// The curated set followed by the full corpus.
    ///
    /// # Errors
    ///
    /// Fails under `OovPolicy::Abort` when a pair contains a word the
    /// embedding model does not know.
    pub fn run(&self, corpus: &Corpus) -> Result<Report> {
        let curated = self.curated_set(corpus)?;
        let full = corpus.evaluation_set(format!("the {} word pairs from the corpus", corpus.len()));

        Ok(Report {
            sets: vec![self.evaluate(&curated)?, self.evaluate(&full)?],
        })
    }

    /// Scores, correlates and measures coverage for one set.
    ///
    /// # Errors
    ///
    /// See [`Analyzer::run`].
    pub fn evaluate(&self, set: &EvaluationSet) -> Result<SetReport> {
        debug!(set = %set.name(), pairs = set.len(), "scoring evaluation set");

        let pairs = set.pairs();
        let gold = set.gold();
        let path = path_similarity(pairs, self.wordnet);
        let wup = wup_similarity(pairs, self.wordnet);
        let cosine = self
            .config
            .oov_policy
            .apply(cosine_similarity(pairs, self.model))?;

        let rows = set
            .iter()
            .zip(path.iter().zip(&wup))
            .zip(&cosine)
            .map(|(((a, b, gold), (&path, &wup)), &cosine)| ReportRow {
                word_a: a.to_string(),
                word_b: b.to_string(),
                path,
                wup,
                cosine,
                gold,
            })
            .collect();

        let (cosine_scores, cosine_gold): (Vec<f64>, Vec<f64>) = cosine
            .iter()
            .zip(gold)
            .filter_map(|(score, gold)| score.map(|s| (s, *gold)))
            .unzip();

        let correlations = vec![
            correlate(SimilarityMethod::Path, &path, gold)?,
            correlate(SimilarityMethod::WuPalmer, &wup, gold)?,
            correlate(SimilarityMethod::Cosine, &cosine_scores, &cosine_gold)?,
        ];

        let vocabulary = pairs.vocabulary();
        let wordnet_coverage = Coverage::measure(&vocabulary, self.wordnet);
        let embedding_coverage = Coverage::measure(&vocabulary, self.model);
        debug!(
            set = %set.name(),
            wordnet = wordnet_coverage.percent(),
            embedding = embedding_coverage.percent(),
            "coverage measured"
        );

        Ok(SetReport {
            name: set.name().to_string(),
            rows,
            correlations,
            wordnet_coverage,
            embedding_coverage,
        })
    }
}

fn correlate(method: SimilarityMethod, scores: &[f64], gold: &[f64]) -> Result<Correlation> {
    Ok(Correlation {
        method,
        rho: spearman(scores, gold)?.map(round4),
        pairs: scores.len(),
    })
}
