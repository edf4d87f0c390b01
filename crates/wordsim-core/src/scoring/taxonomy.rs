use crate::scoring::round4;
use crate::taxonomy::{SynsetId, TaxonomySimilarity, WordNet};
use crate::types::WordPairs;

/// Best path similarity over all sense pairs of each word pair.
///
/// A pair whose words have no senses, or no related senses, scores 0.
#[must_use]
pub fn path_similarity(pairs: &WordPairs, wordnet: &WordNet) -> Vec<f64> {
    best_sense_scores(pairs, wordnet, |sim, a, b| sim.path_similarity(a, b))
}

/// Best Wu-Palmer similarity over all sense pairs of each word pair.
#[must_use]
pub fn wup_similarity(pairs: &WordPairs, wordnet: &WordNet) -> Vec<f64> {
    best_sense_scores(pairs, wordnet, |sim, a, b| sim.wup_similarity(a, b))
}

fn best_sense_scores<F>(pairs: &WordPairs, wordnet: &WordNet, measure: F) -> Vec<f64>
where
    F: Fn(&TaxonomySimilarity<'_>, SynsetId, SynsetId) -> Option<f64>,
{
    let sim = TaxonomySimilarity::new(wordnet);
    pairs
        .iter()
        .map(|(word_a, word_b)| {
            let senses_a = wordnet.synsets(word_a);
            let senses_b = wordnet.synsets(word_b);
            let best = senses_a
                .iter()
                .flat_map(|&a| senses_b.iter().map(move |&b| (a, b)))
                .filter_map(|(a, b)| measure(&sim, a, b))
                .fold(0.0_f64, f64::max);
            round4(best)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::fixture;

    fn curated() -> WordPairs {
        WordPairs::from_tuples([
            ("jaguar", "cat"),
            ("jaguar", "car"),
            ("king", "queen"),
            ("king", "rook"),
            ("tiger", "zoo"),
            ("tiger", "cat"),
        ])
    }

    #[test]
    fn path_scores_per_pair() {
        let wn = fixture::wordnet();
        let scores = path_similarity(&curated(), &wn);
        assert_eq!(scores, vec![0.25, 0.5, 0.3333, 0.2, 0.125, 0.25]);
    }

    #[test]
    fn wup_scores_per_pair() {
        let wn = fixture::wordnet();
        let scores = wup_similarity(&curated(), &wn);
        assert_eq!(scores, vec![0.7273, 0.8571, 0.6667, 0.3333, 0.2222, 0.7273]);
    }

    #[test]
    fn words_without_senses_score_zero() {
        let wn = fixture::wordnet();
        let pairs = WordPairs::from_tuples([("xylophone", "cat"), ("cat", "qwerty")]);
        assert_eq!(path_similarity(&pairs, &wn), vec![0.0, 0.0]);
        assert_eq!(wup_similarity(&pairs, &wn), vec![0.0, 0.0]);
    }

    #[test]
    fn output_aligned_and_in_range() {
        let wn = fixture::wordnet();
        let pairs = curated();
        for scores in [path_similarity(&pairs, &wn), wup_similarity(&pairs, &wn)] {
            assert_eq!(scores.len(), pairs.len());
            assert!(scores.iter().all(|s| (0.0..=1.0).contains(s)));
        }
    }

    #[test]
    fn deterministic() {
        let wn = fixture::wordnet();
        assert_eq!(path_similarity(&curated(), &wn), path_similarity(&curated(), &wn));
        assert_eq!(wup_similarity(&curated(), &wn), wup_similarity(&curated(), &wn));
    }

    #[test]
    fn empty_input() {
        let wn = fixture::wordnet();
        assert!(path_similarity(&WordPairs::default(), &wn).is_empty());
    }
}
