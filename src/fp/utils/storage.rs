use std::collections::BTreeMap;

use tracing::warn;

use crate::fp::growth::Item;

/// Mined itemsets keyed by their suffix-growth sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternStore {
    patterns: BTreeMap<Vec<Item>, usize>,
}

/// Itemsets of one size, stored flat.
#[derive(Debug, Clone)]
pub struct ItemsetStorage {
    pub items: Vec<Item>,
    pub offsets: Vec<(usize, usize)>,
    pub supports: Vec<usize>,
}

#[derive(Debug, Clone)]
pub struct FrequentLevel {
    pub storage: ItemsetStorage,
    pub itemset_size: usize,
}

impl PatternStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `support` for `itemset`. Each itemset is mined exactly once,
    /// so a second insertion means the miner enumerated it twice.
    pub fn insert(&mut self, itemset: Vec<Item>, support: usize) {
        let duplicate = self.patterns.get(&itemset).copied();
        if let Some(previous) = duplicate {
            warn!(?itemset, previous, support, "itemset recorded twice");
        }
        debug_assert!(duplicate.is_none(), "itemset {itemset:?} recorded twice");
        self.patterns.insert(itemset, support);
    }

    pub fn support<S: AsRef<str>>(&self, itemset: &[S]) -> Option<usize> {
        let key: Vec<Item> = itemset.iter().map(|s| s.as_ref().to_owned()).collect();
        self.patterns.get(&key).copied()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Itemsets in lexicographic order of their item sequences.
    pub fn iter(&self) -> impl Iterator<Item = (&[Item], usize)> {
        self.patterns
            .iter()
            .map(|(itemset, &support)| (itemset.as_slice(), support))
    }

    pub fn into_vec(self) -> Vec<(Vec<Item>, usize)> {
        self.patterns.into_iter().collect()
    }

    /// Groups the itemsets by size; index `k` holds the `k + 1` itemsets.
    pub fn levels(&self) -> Vec<FrequentLevel> {
        let mut levels: Vec<FrequentLevel> = Vec::new();

        for (itemset, support) in self.iter() {
            let size = itemset.len();
            while levels.len() < size {
                levels.push(FrequentLevel::new(levels.len() + 1));
            }
            levels[size - 1].add_itemset_with_support(itemset, support);
        }
        levels
    }
}

impl ItemsetStorage {
    pub(crate) fn new() -> Self {
        Self { items: Vec::new(), offsets: Vec::new(), supports: Vec::new() }
    }

    pub(crate) fn add_itemset_with_support(&mut self, items: &[Item], support: usize) {
        let start = self.items.len();
        self.items.extend_from_slice(items);
        self.offsets.push((start, items.len()));
        self.supports.push(support);
    }

    pub(crate) fn get_itemset(&self, idx: usize) -> &[Item] {
        let (start, len) = self.offsets[idx];
        &self.items[start..start + len]
    }

    pub(crate) fn len(&self) -> usize {
        self.offsets.len()
    }
}

impl FrequentLevel {
    pub fn new(itemset_size: usize) -> Self {
        Self { storage: ItemsetStorage::new(), itemset_size }
    }

    pub fn add_itemset_with_support(&mut self, items: &[Item], support: usize) {
        self.storage.add_itemset_with_support(items, support);
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.len() == 0
    }

    pub fn get_itemset(&self, idx: usize) -> &[Item] {
        self.storage.get_itemset(idx)
    }

    pub fn support(&self, idx: usize) -> usize {
        self.storage.supports[idx]
    }

    pub fn iter_itemsets(&self) -> impl Iterator<Item = &[Item]> {
        (0..self.storage.len()).map(move |idx| self.get_itemset(idx))
    }
}
