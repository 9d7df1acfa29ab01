use std::collections::HashMap;

use tracing::info;

use super::frequency::{insertion_order, FrequencyTable};
use super::tree::{FPTree, Item, PatternBaseRow};
use crate::error::Result;
use crate::io::TransactionSource;

/// Insertion pass: builds the global FP-tree from `source`.
///
/// `table` must come from a counting pass over the same source.
pub fn build_fp_tree<S: TransactionSource + ?Sized>(
    source: &S,
    table: &FrequencyTable,
) -> Result<FPTree> {
    let mut fp_tree = FPTree::new();

    for transaction in source.transactions()? {
        let transaction = transaction?;
        let ordered = table.order_transaction(&transaction);
        if !ordered.is_empty() {
            fp_tree.insert_transaction(&ordered, 1);
        }
    }

    for (item, entry) in fp_tree.header_table.iter_mut() {
        entry.frequency = table.frequency(item);
    }

    info!(
        nodes = fp_tree.node_count(),
        frequent_items = fp_tree.header_table.len(),
        "built fp-tree"
    );
    Ok(fp_tree)
}

/// Sums the weight of every item appearing in the pattern base.
///
/// `total_transactions` of the result is the summed row weight, i.e. the
/// number of original transactions the pattern base stands for.
pub fn conditional_frequency_table(
    pattern_base: &[PatternBaseRow],
    min_count: usize,
) -> FrequencyTable {
    let mut item_counts: HashMap<Item, usize> = HashMap::new();
    let mut total_weight = 0;

    for row in pattern_base {
        total_weight += row.weight;
        for item in &row.path {
            *item_counts.entry(item.clone()).or_insert(0) += row.weight;
        }
    }

    FrequencyTable::from_counts(item_counts, total_weight, min_count)
}

/// Builds the conditional tree for one pattern base.
///
/// Paths are stored nearest-ancestor first, so each one is reversed before
/// being filtered and ordered by `table`. Returns `None` when no row keeps a
/// frequent item.
pub fn build_conditional_fp_tree(
    pattern_base: &[PatternBaseRow],
    table: &FrequencyTable,
) -> Option<FPTree> {
    if pattern_base.is_empty() {
        return None;
    }

    let mut conditional_tree = FPTree::new();

    for row in pattern_base {
        let mut filtered: Vec<(&str, usize)> = row
            .path
            .iter()
            .rev()
            .map(String::as_str)
            .filter(|item| table.is_frequent(item))
            .map(|item| (item, table.frequency(item)))
            .collect();

        if filtered.is_empty() {
            continue;
        }

        filtered.sort_by(insertion_order);
        let ordered: Vec<&str> = filtered.into_iter().map(|(item, _)| item).collect();
        conditional_tree.insert_transaction(&ordered, row.weight);
    }

    if conditional_tree.is_empty() {
        return None;
    }

    for (item, entry) in conditional_tree.header_table.iter_mut() {
        entry.frequency = table.frequency(item);
    }

    Some(conditional_tree)
}
