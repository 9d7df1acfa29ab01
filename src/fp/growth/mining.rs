use tracing::{debug, info, trace};

use super::builder::{build_conditional_fp_tree, build_fp_tree, conditional_frequency_table};
use super::frequency::FrequencyTable;
use super::tree::{FPTree, Item};
use crate::config::MiningConfig;
use crate::error::Result;
use crate::fp::utils::PatternStore;
use crate::io::TransactionSource;

/// Counts `source`, builds its FP-tree and mines every frequent itemset.
pub fn fp_growth_algorithm<S: TransactionSource + ?Sized>(
    source: &S,
    config: &MiningConfig,
) -> Result<PatternStore> {
    config.validate()?;
    let table = FrequencyTable::count(source, config)?;
    let fp_tree = build_fp_tree(source, &table)?;
    Ok(mine_tree(&fp_tree, &table))
}

/// Mines `fp_tree`, whose frequent items and threshold are given by `table`.
pub fn mine_tree(fp_tree: &FPTree, table: &FrequencyTable) -> PatternStore {
    let mut patterns = PatternStore::new();

    for (item, _) in table.frequent_items() {
        fp_growth_recursive(fp_tree, &item, &[], table.min_count, &mut patterns);
    }

    info!(patterns = patterns.len(), "mining finished");
    patterns
}

fn fp_growth_recursive(
    fp_tree: &FPTree,
    item: &str,
    alpha: &[Item],
    min_count: usize,
    patterns: &mut PatternStore,
) {
    let mut new_pattern = alpha.to_vec();
    new_pattern.push(item.to_owned());

    let support = fp_tree.header(item).map_or(0, |entry| entry.frequency);
    patterns.insert(new_pattern.clone(), support);

    let pattern_base = fp_tree.conditional_pattern_base(item);
    if pattern_base.is_empty() {
        trace!(pattern = ?new_pattern, support, "empty pattern base");
        return;
    }

    let cond_table = conditional_frequency_table(&pattern_base, min_count);
    let Some(cond_tree) = build_conditional_fp_tree(&pattern_base, &cond_table) else {
        trace!(pattern = ?new_pattern, support, "no frequent items in pattern base");
        return;
    };

    debug!(
        pattern = ?new_pattern,
        support,
        rows = pattern_base.len(),
        nodes = cond_tree.node_count(),
        "built conditional tree"
    );

    for (cond_item, _) in cond_table.frequent_items() {
        fp_growth_recursive(&cond_tree, &cond_item, &new_pattern, min_count, patterns);
    }
}
