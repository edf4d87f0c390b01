//! Miniature WordNet used by unit tests.
//!
//! ```text
//! entity(1)
//! ├── organism(2)
//! │   ├── animal(3)
//! │   │   ├── feline(4)
//! │   │   │   ├── cat(5) ── Garfield(16, instance)
//! │   │   │   └── big_cat(6)
//! │   │   │       ├── jaguar(7)
//! │   │   │       └── tiger(8)
//! │   │   └── mouse(17)
//! │   ├── king(12)
//! │   └── queen(13)
//! └── artifact(9)
//!     ├── car(10) ── jaguar(11)
//!     ├── zoo(14)
//!     └── rook(15)
//! verbs: cat(101) -> expel(102); rook(103)
//! ```

use std::io;
use std::path::Path;

use crate::taxonomy::database::{WordNet, WordNetBuilder};
use crate::types::PartOfSpeech;

pub const DATA_NOUN: &str = "  1 This software and database is being provided to you, the LICENSEE
  2 fixture header
00000001 03 n 01 entity 0 000 | that which is perceived to have its own distinct existence
00000002 03 n 01 organism 0 001 @ 00000001 n 0000 | a living thing
00000003 05 n 02 animal 0 beast 0 001 @ 00000002 n 0000 | a living organism
00000004 05 n 02 feline 0 felid 0 001 @ 00000003 n 0000 | lithe-bodied carnivores
00000005 05 n 02 cat 0 true_cat 0 001 @ 00000004 n 0000 | feline mammal
00000006 05 n 01 big_cat 0 001 @ 00000004 n 0000 | any of several large cats
00000007 05 n 02 jaguar 0 panther 0 001 @ 00000006 n 0000 | a large spotted feline
00000008 05 n 01 tiger 0 001 @ 00000006 n 0000 | large feline of forests
00000009 06 n 01 artifact 0 001 @ 00000001 n 0000 | a man-made object
00000010 06 n 03 car 0 auto 0 automobile 0 001 @ 00000009 n 0000 | a motor vehicle
00000011 06 n 01 jaguar 0 001 @ 00000010 n 0000 | a British make of car
00000012 18 n 01 king 0 001 @ 00000002 n 0000 | a male sovereign
00000013 18 n 01 queen 0 001 @ 00000002 n 0000 | a female sovereign
00000014 06 n 01 zoo 0 001 @ 00000009 n 0000 | the facility where animals are kept
00000015 06 n 01 rook 0 001 @ 00000009 n 0000 | a chessman
00000016 18 n 01 Garfield 0 001 @i 00000005 n 0000 | a cartoon cat
00000017 05 n 01 mouse 0 001 @ 00000003 n 0000 | a small rodent
";

pub const INDEX_NOUN: &str = "  1 This software and database is being provided to you, the LICENSEE
animal n 1 1 @ 1 0 00000003
artifact n 1 1 @ 1 0 00000009
auto n 1 1 @ 1 0 00000010
automobile n 1 1 @ 1 0 00000010
beast n 1 1 @ 1 0 00000003
big_cat n 1 1 @ 1 0 00000006
car n 1 1 @ 1 0 00000010
cat n 1 1 @ 1 0 00000005
entity n 1 0 1 0 00000001
felid n 1 1 @ 1 0 00000004
feline n 1 1 @ 1 0 00000004
garfield n 1 1 @i 1 0 00000016
jaguar n 2 1 @ 2 0 00000007 00000011
king n 1 1 @ 1 0 00000012
mouse n 1 1 @ 1 0 00000017
organism n 1 1 @ 1 0 00000002
panther n 1 1 @ 1 0 00000007
queen n 1 1 @ 1 0 00000013
rook n 1 1 @ 1 0 00000015
tiger n 1 1 @ 1 0 00000008
true_cat n 1 1 @ 1 0 00000005
zoo n 1 1 @ 1 0 00000014
";

pub const NOUN_EXC: &str = "mice mouse\n";

pub const DATA_VERB: &str = "  1 This software and database is being provided to you, the LICENSEE
00000101 34 v 01 cat 0 001 @ 00000102 v 0000 01 + 02 00 | eject the contents of the stomach
00000102 34 v 01 expel 0 000 01 + 02 00 | eliminate from the body
00000103 40 v 01 rook 0 000 01 + 08 00 | ask an unreasonable price
";

pub const INDEX_VERB: &str = "cat v 1 1 @ 1 0 00000101
expel v 1 0 1 0 00000102
rook v 1 0 1 0 00000103
";

pub const DATA_ADJ: &str = "00000201 00 a 01 quick 0 000 | moving quickly
00000202 00 s 01 fast(a) 0 001 & 00000201 a 0000 | acting rapidly
";

pub const INDEX_ADJ: &str = "fast a 1 1 & 1 0 00000202
quick a 1 0 1 0 00000201
";

/// Builds the fixture WordNet in memory.
pub fn wordnet() -> WordNet {
    let mut builder = WordNetBuilder::new();
    builder
        .add_index(PartOfSpeech::Noun, INDEX_NOUN.as_bytes(), "index.noun")
        .unwrap();
    builder
        .add_data(PartOfSpeech::Noun, DATA_NOUN.as_bytes(), "data.noun")
        .unwrap();
    builder
        .add_exceptions(PartOfSpeech::Noun, NOUN_EXC.as_bytes())
        .unwrap();
    builder
        .add_index(PartOfSpeech::Verb, INDEX_VERB.as_bytes(), "index.verb")
        .unwrap();
    builder
        .add_data(PartOfSpeech::Verb, DATA_VERB.as_bytes(), "data.verb")
        .unwrap();
    builder
        .add_index(PartOfSpeech::Adjective, INDEX_ADJ.as_bytes(), "index.adj")
        .unwrap();
    builder
        .add_data(PartOfSpeech::Adjective, DATA_ADJ.as_bytes(), "data.adj")
        .unwrap();
    builder.build()
}

/// Writes the fixture as a WordNet database directory.
pub fn write_to(dir: &Path) -> io::Result<()> {
    std::fs::write(dir.join("data.noun"), DATA_NOUN)?;
    std::fs::write(dir.join("index.noun"), INDEX_NOUN)?;
    std::fs::write(dir.join("noun.exc"), NOUN_EXC)?;
    std::fs::write(dir.join("data.verb"), DATA_VERB)?;
    std::fs::write(dir.join("index.verb"), INDEX_VERB)?;
    std::fs::write(dir.join("data.adj"), DATA_ADJ)?;
    std::fs::write(dir.join("index.adj"), INDEX_ADJ)?;
    std::fs::write(dir.join("data.adv"), "")?;
    std::fs::write(dir.join("index.adv"), "")?;
    Ok(())
}
