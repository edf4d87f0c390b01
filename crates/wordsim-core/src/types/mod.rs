pub mod pairs;
pub mod pos;
pub mod record;

pub use pairs::{EvaluationSet, WordPairs};
pub use pos::PartOfSpeech;
pub use record::WordPairRecord;
