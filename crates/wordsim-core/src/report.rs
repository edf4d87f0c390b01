//! # Report
//!
//! Result structures for one analysis run and their text/JSON renderings.

use std::fmt;

use comfy_table::presets::UTF8_FULL;
use comfy_table::{CellAlignment, Table};
use serde::{Deserialize, Serialize};

use crate::coverage::Coverage;
use crate::error::Result;
use crate::scoring::SimilarityMethod;

/// Scores for one word pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub word_a: String,
    pub word_b: String,
    pub path: f64,
    pub wup: f64,
    /// `None` when the pair was skipped for an out-of-vocabulary word.
    pub cosine: Option<f64>,
    pub gold: f64,
}

/// Spearman correlation of one method against gold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Correlation {
    pub method: SimilarityMethod,
    /// Rounded to 4 decimals; `None` when undefined.
    pub rho: Option<f64>,
    /// Number of pairs that entered the correlation.
    pub pairs: usize,
}

impl fmt::Display for Correlation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rho {
            Some(rho) => write!(f, "{}: {}", self.method, rho),
            None => write!(f, "{}: nan", self.method),
        }
    }
}

/// Everything computed for one evaluation set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetReport {
    pub name: String,
    pub rows: Vec<ReportRow>,
    pub correlations: Vec<Correlation>,
    pub wordnet_coverage: Coverage,
    pub embedding_coverage: Coverage,
}

impl SetReport {
    /// Correlation for `method`, if computed.
    #[must_use]
    pub fn correlation(&self, method: SimilarityMethod) -> Option<&Correlation> {
        self.correlations.iter().find(|c| c.method == method)
    }

    /// The score table: both words and the three similarity columns.
    #[must_use]
    pub fn table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);

        let mut header = vec!["Word A", "Word B"];
        header.extend(SimilarityMethod::ALL.iter().map(|m| m.column()));
        table.set_header(header);

        for row in &self.rows {
            let cosine = row
                .cosine
                .map_or_else(|| "-".to_string(), |c| format!("{c:.4}"));
            table.add_row(vec![
                row.word_a.clone(),
                row.word_b.clone(),
                format!("{:.4}", row.path),
                format!("{:.4}", row.wup),
                cosine,
            ]);
        }

        for idx in 2..5 {
            if let Some(column) = table.column_mut(idx) {
                column.set_cell_alignment(CellAlignment::Right);
            }
        }
        table
    }
}

impl fmt::Display for SetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nMETRICS COMPUTED FOR {}:\n", self.name.to_uppercase())?;
        writeln!(f, "{}", self.table())?;

        writeln!(f, "\nSpearman correlation metrics:")?;
        for correlation in &self.correlations {
            writeln!(f, "{correlation}")?;
        }

        writeln!(f, "\nChecking the WordNet coverage:")?;
        writeln!(f, "{}", self.wordnet_coverage)?;
        writeln!(f, "\nChecking the embedding coverage:")?;
        writeln!(f, "{}", self.embedding_coverage)
    }
}

/// The result of a full analysis run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub sets: Vec<SetReport>,
}

impl Report {
    /// Pretty-printed JSON rendering.
    ///
    /// # Errors
    ///
    /// Returns `WordsimError::Serialization` if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for set in &self.sets {
            writeln!(f, "{set}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SetReport {
        SetReport {
            name: "the provided 2 word pairs".into(),
            rows: vec![
                ReportRow {
                    word_a: "jaguar".into(),
                    word_b: "cat".into(),
                    path: 0.25,
                    wup: 0.7273,
                    cosine: Some(0.4),
                    gold: 0.0,
                },
                ReportRow {
                    word_a: "tiger".into(),
                    word_b: "zoo".into(),
                    path: 0.125,
                    wup: 0.2222,
                    cosine: None,
                    gold: 5.87,
                },
            ],
            correlations: vec![
                Correlation {
                    method: SimilarityMethod::Path,
                    rho: Some(-1.0),
                    pairs: 2,
                },
                Correlation {
                    method: SimilarityMethod::Cosine,
                    rho: None,
                    pairs: 1,
                },
            ],
            wordnet_coverage: Coverage { found: 4, total: 4 },
            embedding_coverage: Coverage { found: 3, total: 4 },
        }
    }

    #[test]
    fn table_formats_scores() {
        let rendered = sample().table().to_string();
        assert!(rendered.contains("Word A"));
        assert!(rendered.contains("Wu-Palmer Similarity"));
        assert!(rendered.contains("0.2500"));
        assert!(rendered.contains("0.7273"));
        assert!(rendered.contains("0.4000"));
    }

    #[test]
    fn skipped_cosine_shown_as_dash() {
        let rendered = sample().table().to_string();
        let zoo_line = rendered.lines().find(|l| l.contains("zoo")).unwrap();
        assert!(zoo_line.contains(" - "));
    }

    #[test]
    fn text_report_sections() {
        let text = sample().to_string();
        assert!(text.contains("METRICS COMPUTED FOR THE PROVIDED 2 WORD PAIRS:"));
        assert!(text.contains("WordNet Path Similarity: -1"));
        assert!(text.contains("Embedding Cosine Similarity: nan"));
        assert!(text.contains("Coverage: 100%"));
        assert!(text.contains("Coverage: 75%"));
    }

    #[test]
    fn correlation_lookup() {
        let set = sample();
        assert_eq!(set.correlation(SimilarityMethod::Path).unwrap().pairs, 2);
        assert!(set.correlation(SimilarityMethod::WuPalmer).is_none());
    }

    #[test]
    fn json_report() {
        let report = Report {
            sets: vec![sample()],
        };
        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["sets"][0]["rows"][0]["word_a"], "jaguar");
        assert!(value["sets"][0]["rows"][1]["cosine"].is_null());
        assert_eq!(value["sets"][0]["wordnet_coverage"]["found"], 4);
    }
}
