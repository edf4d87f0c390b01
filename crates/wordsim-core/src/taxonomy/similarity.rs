//! # Taxonomy Similarity
//!
//! Path-length and Wu-Palmer similarity between synsets over the hypernym
//! graph. Senses outside the noun hierarchy have no common root, so any
//! comparison involving one is done against a simulated root placed above
//! every top-level synset.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::taxonomy::database::WordNet;
use crate::taxonomy::synset::SynsetId;
use crate::types::PartOfSpeech;

/// Name of the simulated root; sorts before every real synset name.
const ROOT_NAME: &str = "*ROOT*";

/// A vertex of the hypernym graph, including the simulated root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Node {
    Synset(SynsetId),
    Root,
}

/// Similarity measures over one loaded [`WordNet`].
#[derive(Debug, Clone, Copy)]
pub struct TaxonomySimilarity<'a> {
    wordnet: &'a WordNet,
}

impl<'a> TaxonomySimilarity<'a> {
    pub fn new(wordnet: &'a WordNet) -> Self {
        Self { wordnet }
    }

    pub fn wordnet(&self) -> &'a WordNet {
        self.wordnet
    }

    /// `1 / (d + 1)` where `d` is the shortest hypernym path between the two
    /// synsets. `None` when no path exists.
    #[must_use]
    pub fn path_similarity(&self, a: SynsetId, b: SynsetId) -> Option<f64> {
        let simulate_root = needs_root(a, b);
        self.shortest_path_distance(Node::Synset(a), Node::Synset(b), simulate_root)
            .map(|d| 1.0 / (d as f64 + 1.0))
    }

    /// Wu-Palmer similarity: `2 * depth(lcs) / (len1 + len2)` with both path
    /// lengths measured through the lowest common subsumer.
    ///
    /// When `a` is itself one of the lowest common subsumers it is used as
    /// the subsumer, so the measure is not symmetric in every case.
    #[must_use]
    pub fn wup_similarity(&self, a: SynsetId, b: SynsetId) -> Option<f64> {
        let simulate_root = needs_root(a, b);
        let subsumers = self.lowest_common_hypernyms(a, b, simulate_root);
        let first = *subsumers.first()?;
        let subsumer = if subsumers.contains(&Node::Synset(a)) {
            Node::Synset(a)
        } else {
            first
        };

        let depth = self.max_depth(subsumer) as f64 + 1.0;
        let len1 = self.shortest_path_distance(Node::Synset(a), subsumer, simulate_root)? as f64;
        let len2 = self.shortest_path_distance(Node::Synset(b), subsumer, simulate_root)? as f64;

        Some(2.0 * depth / ((len1 + depth) + (len2 + depth)))
    }

    /// Shortest hypernym-path length between two synsets.
    #[must_use]
    pub fn path_distance(&self, a: SynsetId, b: SynsetId) -> Option<usize> {
        self.shortest_path_distance(Node::Synset(a), Node::Synset(b), needs_root(a, b))
    }

    fn shortest_path_distance(&self, a: Node, b: Node, simulate_root: bool) -> Option<usize> {
        if a == b {
            return Some(0);
        }
        let from_a = self.hypernym_distances(a, simulate_root);
        let from_b = self.hypernym_distances(b, simulate_root);

        from_a
            .iter()
            .filter_map(|(node, da)| from_b.get(node).map(|db| da + db))
            .min()
    }

    /// Breadth-first distance from `start` to each of its ancestors
    /// (including itself). With `simulate_root`, the root sits one step
    /// above the farthest ancestor.
    fn hypernym_distances(&self, start: Node, simulate_root: bool) -> HashMap<Node, usize> {
        let Node::Synset(start_id) = start else {
            return HashMap::from([(Node::Root, 0)]);
        };

        let mut distances = HashMap::new();
        let mut queue = VecDeque::from([(start_id, 0usize)]);
        while let Some((id, depth)) = queue.pop_front() {
            if distances.contains_key(&Node::Synset(id)) {
                continue;
            }
            distances.insert(Node::Synset(id), depth);
            queue.extend(self.wordnet.parents(id).into_iter().map(|p| (p, depth + 1)));
        }

        if simulate_root {
            let farthest = distances.values().copied().max().unwrap_or(0);
            distances.insert(Node::Root, farthest + 1);
        }
        distances
    }

    fn ancestors(&self, id: SynsetId) -> HashSet<Node> {
        self.hypernym_distances(Node::Synset(id), false)
            .into_keys()
            .collect()
    }

    /// Common ancestors with the greatest minimum depth, sorted by name.
    fn lowest_common_hypernyms(&self, a: SynsetId, b: SynsetId, simulate_root: bool) -> Vec<Node> {
        let from_b = self.ancestors(b);
        let mut common: Vec<Node> = self
            .ancestors(a)
            .into_iter()
            .filter(|n| from_b.contains(n))
            .collect();
        if simulate_root {
            common.push(Node::Root);
        }

        let Some(deepest) = common.iter().map(|&n| self.min_depth(n)).max() else {
            return Vec::new();
        };
        let mut lowest: Vec<(String, Node)> = common
            .into_iter()
            .filter(|&n| self.min_depth(n) == deepest)
            .map(|n| (self.node_name(n), n))
            .collect();
        lowest.sort_by(|a, b| a.0.cmp(&b.0));
        lowest.into_iter().map(|(_, n)| n).collect()
    }

    fn min_depth(&self, node: Node) -> usize {
        match node {
            Node::Synset(id) => self.wordnet.depth(id).min,
            Node::Root => 0,
        }
    }

    fn max_depth(&self, node: Node) -> usize {
        match node {
            Node::Synset(id) => self.wordnet.depth(id).max,
            Node::Root => 0,
        }
    }

    fn node_name(&self, node: Node) -> String {
        match node {
            Node::Synset(id) => self.wordnet.synset_name(id),
            Node::Root => ROOT_NAME.to_string(),
        }
    }
}

/// Only the noun hierarchy has a real unique beginner.
fn needs_root(a: SynsetId, b: SynsetId) -> bool {
    a.pos != PartOfSpeech::Noun || b.pos != PartOfSpeech::Noun
}
