pub mod builder;
pub mod frequency;
pub mod mining;
pub mod tree;

pub use frequency::FrequencyTable;
pub use mining::{fp_growth_algorithm, mine_tree};
pub use tree::{FPNode, FPTree, HeaderEntry, Item, PatternBaseRow};
