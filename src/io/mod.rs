//! Transaction sources and pattern sinks.

pub mod sink;
pub mod source;

pub use sink::{write_patterns, write_patterns_to_file};
pub use source::{FileSource, InMemorySource, Transaction, TransactionSource};
