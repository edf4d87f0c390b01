//! # Corpus Loader
//!
//! Reads `wordA<TAB>wordB<TAB>score` similarity corpora (WordSim-353 and
//! friends) into [`WordPairRecord`]s.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Result, WordsimError};
use crate::types::WordPairRecord;

/// What to do with a line that is not `wordA<TAB>wordB<TAB>score`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineValidation {
    /// Skip the line and log a warning.
    #[default]
    Lenient,
    /// Fail the whole load.
    Strict,
}

/// Loads a corpus file.
///
/// # Errors
///
/// Returns `WordsimError::Io` if the file cannot be opened or read, and
/// `WordsimError::MalformedLine` for a bad line under `LineValidation::Strict`.
pub fn load_records<P: AsRef<Path>>(
    path: P,
    validation: LineValidation,
) -> Result<Vec<WordPairRecord>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    debug!(path = %path.display(), "reading corpus");
    read_records(BufReader::new(file), validation)
}

/// Reads corpus records from any buffered reader.
pub fn read_records<R: BufRead>(
    reader: R,
    validation: LineValidation,
) -> Result<Vec<WordPairRecord>> {
    let mut records = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;

        match parse_line(&line) {
            Ok(Some(record)) => records.push(record),
            Ok(None) => continue,
            Err(reason) => match validation {
                LineValidation::Strict => {
                    return Err(WordsimError::MalformedLine {
                        line: line_no,
                        reason,
                    });
                }
                LineValidation::Lenient => {
                    warn!(line = line_no, %reason, "skipping malformed corpus line");
                }
            },
        }
    }

    Ok(records)
}

/// Parses a single corpus line.
///
/// Returns `Ok(None)` for blank lines and `#` comments.
fn parse_line(line: &str) -> std::result::Result<Option<WordPairRecord>, String> {
    let line = line.trim_end().to_lowercase();
    if line.trim().is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != 3 {
        return Err(format!("expected 3 tab-separated fields, found {}", fields.len()));
    }

    let (word_a, word_b) = (fields[0].trim(), fields[1].trim());
    if word_a.is_empty() || word_b.is_empty() {
        return Err("empty word".to_string());
    }

    let gold: f64 = fields[2]
        .trim()
        .parse()
        .map_err(|_| format!("gold score {:?} is not a number", fields[2]))?;
    if !gold.is_finite() {
        return Err(format!("gold score {gold} is not finite"));
    }

    Ok(Some(WordPairRecord::new(word_a, word_b, gold)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn parses_tab_separated_line() {
        let record = parse_line("tiger\tcat\t7.35").unwrap().unwrap();
        assert_eq!(record, WordPairRecord::new("tiger", "cat", 7.35));
    }

    #[test]
    fn case_folds_and_trims_trailing_whitespace() {
        let record = parse_line("Tiger\tCAT\t7.35  \r").unwrap().unwrap();
        assert_eq!(record.word_a, "tiger");
        assert_eq!(record.word_b, "cat");
        assert_eq!(record.gold, 7.35);
    }

    #[test]
    fn blank_and_comment_lines_ignored() {
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("   "), Ok(None));
        assert_eq!(parse_line("# wordsim similarity subset"), Ok(None));
    }

    #[test]
    fn wrong_field_count_is_malformed() {
        assert!(parse_line("tiger\tcat").is_err());
        assert!(parse_line("tiger\tcat\t7.35\textra").is_err());
    }

    #[test]
    fn non_numeric_score_is_malformed() {
        let err = parse_line("word 1\tword 2\thuman (mean)").unwrap_err();
        assert!(err.contains("not a number"));
        assert!(parse_line("a\tb\tnan").is_err());
    }

    #[test]
    fn lenient_skips_bad_lines() {
        let input = "Word 1\tWord 2\tHuman (mean)\ntiger\tcat\t7.35\n\nbroken line\nking\tqueen\t8.58\n";
        let records = read_records(Cursor::new(input), LineValidation::Lenient).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1], WordPairRecord::new("king", "queen", 8.58));
    }

    #[test]
    fn strict_reports_line_number() {
        let input = "tiger\tcat\t7.35\nbroken line\n";
        let err = read_records(Cursor::new(input), LineValidation::Strict).unwrap_err();
        assert!(matches!(err, WordsimError::MalformedLine { line: 2, .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_records("/definitely/not/here/wordsim353.txt", LineValidation::Lenient)
            .unwrap_err();
        match err {
            WordsimError::Io(io) => assert_eq!(io.kind(), std::io::ErrorKind::NotFound),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tiger\tcat\t7.35").unwrap();
        writeln!(file, "tiger\ttiger\t10.00").unwrap();
        let records = load_records(file.path(), LineValidation::Strict).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].gold, 10.0);
    }
}
