use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{FpError, Result};
use crate::fp::growth::tree::Item;

pub type Transaction = Vec<Item>;

pub type Transactions<'a> = Box<dyn Iterator<Item = Result<Transaction>> + 'a>;

/// A finite transaction sequence that can be traversed more than once.
///
/// Every call to [`TransactionSource::transactions`] starts again from the
/// first transaction.
pub trait TransactionSource {
    fn transactions(&self) -> Result<Transactions<'_>>;
}

/// Splits one line into whitespace-delimited item tokens.
pub fn tokenize(line: &str) -> Transaction {
    line.split_whitespace().map(str::to_owned).collect()
}

/// One transaction per line of a text file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TransactionSource for FileSource {
    fn transactions(&self) -> Result<Transactions<'_>> {
        let file = File::open(&self.path).map_err(|source| FpError::SourceUnavailable {
            path: self.path.clone(),
            source,
        })?;

        let lines = BufReader::new(file).lines().map(move |line| {
            line.map(|l| tokenize(&l))
                .map_err(|source| FpError::SourceUnavailable {
                    path: self.path.clone(),
                    source,
                })
        });
        Ok(Box::new(lines))
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    transactions: Vec<Transaction>,
}

impl InMemorySource {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Tokenizes each line the same way [`FileSource`] does.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(lines.into_iter().map(|l| tokenize(l.as_ref())).collect())
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl TransactionSource for InMemorySource {
    fn transactions(&self) -> Result<Transactions<'_>> {
        Ok(Box::new(self.transactions.iter().cloned().map(Ok)))
    }
}
