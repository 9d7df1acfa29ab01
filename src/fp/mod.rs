pub mod growth;
pub mod utils;

pub use growth::{fp_growth_algorithm, mine_tree};
pub use growth::{FPNode, FPTree, FrequencyTable, HeaderEntry, Item, PatternBaseRow};
pub use utils::{FrequentLevel, ItemsetStorage, PatternStore};

#[cfg(test)]
mod tests;
