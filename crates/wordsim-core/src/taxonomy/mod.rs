pub mod database;
pub mod morphy;
pub mod similarity;
pub mod synset;

#[cfg(test)]
pub(crate) mod fixture;

pub use database::{Depth, WordNet, WordNetBuilder};
pub use similarity::TaxonomySimilarity;
pub use synset::{Synset, SynsetId};
