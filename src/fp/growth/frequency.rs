use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::info;

use super::tree::Item;
use crate::config::MiningConfig;
use crate::error::Result;
use crate::io::TransactionSource;

/// Item occurrence counts plus the minimum support derived from them.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    pub counts: HashMap<Item, usize>,
    pub total_transactions: usize,
    pub min_count: usize,
}

/// Descending frequency, ties by ascending identifier.
pub fn insertion_order(a: &(&str, usize), b: &(&str, usize)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0))
}

/// Ascending frequency, ties by ascending identifier.
pub fn mining_order(a: &(Item, usize), b: &(Item, usize)) -> Ordering {
    a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0))
}

impl FrequencyTable {
    pub fn from_counts(
        counts: HashMap<Item, usize>,
        total_transactions: usize,
        min_count: usize,
    ) -> Self {
        Self {
            counts,
            total_transactions,
            min_count,
        }
    }

    /// Counting pass over `source`. Repeated items count once per occurrence.
    pub fn count<S: TransactionSource + ?Sized>(
        source: &S,
        config: &MiningConfig,
    ) -> Result<Self> {
        let mut counts: HashMap<Item, usize> = HashMap::new();
        let mut total_transactions = 0;

        for transaction in source.transactions()? {
            total_transactions += 1;
            for item in transaction? {
                *counts.entry(item).or_insert(0) += 1;
            }
        }

        let min_count = config.min_count(total_transactions);
        info!(
            transactions = total_transactions,
            distinct_items = counts.len(),
            min_count,
            "counted item frequencies"
        );

        Ok(Self::from_counts(counts, total_transactions, min_count))
    }

    pub fn frequency(&self, item: &str) -> usize {
        self.counts.get(item).copied().unwrap_or(0)
    }

    pub fn is_frequent(&self, item: &str) -> bool {
        self.counts
            .get(item)
            .is_some_and(|&count| count >= self.min_count)
    }

    /// Frequent items in mining order.
    pub fn frequent_items(&self) -> Vec<(Item, usize)> {
        let mut frequent: Vec<(Item, usize)> = self
            .counts
            .iter()
            .filter(|&(_, &count)| count >= self.min_count)
            .map(|(item, &count)| (item.clone(), count))
            .collect();

        frequent.sort_by(mining_order);
        frequent
    }

    /// Keeps the frequent items of `transaction` and sorts them for insertion.
    pub fn order_transaction<'a, S: AsRef<str>>(&self, transaction: &'a [S]) -> Vec<&'a str> {
        let mut sorted: Vec<(&str, usize)> = transaction
            .iter()
            .map(<S as AsRef<str>>::as_ref)
            .filter(|item| self.is_frequent(item))
            .map(|item| (item, self.frequency(item)))
            .collect();

        sorted.sort_by(insertion_order);
        sorted.into_iter().map(|(item, _)| item).collect()
    }
}
