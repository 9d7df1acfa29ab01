//! Frequent itemset mining with FP-Growth.
//!
//! Transactions are sequences of string item tokens. The engine counts item
//! frequencies, builds a prefix-sharing FP-tree with per-item node-link
//! chains, then grows itemsets suffix-first through conditional trees.
//!
//! ```
//! use fpgrowth::{fp_growth_algorithm, InMemorySource, MiningConfig};
//!
//! let source = InMemorySource::from_lines(["a b", "a b c", "a"]);
//! let config = MiningConfig::new(0.5).unwrap();
//! let patterns = fp_growth_algorithm(&source, &config).unwrap();
//!
//! assert_eq!(patterns.support(&["a"]), Some(3));
//! assert_eq!(patterns.support(&["b", "a"]), Some(2));
//! assert_eq!(patterns.support(&["c"]), None);
//! ```

pub mod config;
pub mod error;
pub mod fp;
pub mod io;

pub use config::MiningConfig;
pub use error::{FpError, Result};
pub use fp::{fp_growth_algorithm, mine_tree, FPTree, FrequencyTable, PatternStore};
pub use io::{write_patterns, write_patterns_to_file, FileSource, InMemorySource, TransactionSource};
