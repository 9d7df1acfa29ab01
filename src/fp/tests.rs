use super::*;
use crate::config::MiningConfig;
use crate::io::InMemorySource;
use super::growth::builder::{build_conditional_fp_tree, build_fp_tree, conditional_frequency_table};
use std::collections::HashMap;

fn mine(lines: &[&str], min_support: f64) -> PatternStore {
    let source = InMemorySource::from_lines(lines);
    let config = MiningConfig::new(min_support).unwrap();
    fp_growth_algorithm(&source, &config).unwrap()
}

fn row(path: &[&str], weight: usize) -> PatternBaseRow {
    PatternBaseRow {
        path: path.iter().map(|s| s.to_string()).collect(),
        weight,
    }
}

fn set_support(patterns: &PatternStore, items: &[&str]) -> Option<usize> {
    let mut wanted: Vec<&str> = items.to_vec();
    wanted.sort_unstable();
    patterns.iter().find_map(|(itemset, support)| {
        let mut found: Vec<&str> = itemset.iter().map(String::as_str).collect();
        found.sort_unstable();
        (found == wanted).then_some(support)
    })
}

fn chain_counts(tree: &FPTree, item: &str) -> Vec<usize> {
    tree.chain(item).map(|idx| tree.nodes[idx].count).collect()
}

#[test]
fn test_fp_tree_insert() {
    let mut tree = FPTree::new();

    // Insert first transaction: [a, b, c]
    tree.insert_transaction(&["a", "b", "c"], 1);

    // Check root has child a
    assert!(tree.nodes[0].children.contains_key("a"));
    assert!(tree.nodes[0].is_root());

    assert_eq!(tree.chain("a").count(), 1);
    assert_eq!(tree.chain("b").count(), 1);
    assert_eq!(tree.chain("c").count(), 1);

    // Insert second transaction: [a, b, d] (shares prefix with first)
    tree.insert_transaction(&["a", "b", "d"], 1);

    // Node a should have count 2 now, and still a single chain entry
    let node_a = tree.nodes[0].children["a"];
    assert_eq!(tree.nodes[node_a].count, 2);
    assert_eq!(tree.chain("a").count(), 1);
    assert_eq!(tree.chain("d").count(), 1);
    assert_eq!(tree.node_count(), 4);
}

#[test]
fn test_chain_links_nodes_in_creation_order() {
    let mut tree = FPTree::new();
    tree.insert_transaction(&["a", "c"], 1);
    tree.insert_transaction(&["b", "c"], 2);
    tree.insert_transaction(&["a", "c"], 1);
    tree.insert_transaction(&["c"], 3);

    // c under a, c under b, c under root
    assert_eq!(chain_counts(&tree, "c"), vec![2, 2, 3]);
    assert_eq!(tree.support("c"), 7);

    let entry = tree.header("c").unwrap();
    let tail = entry.tail.unwrap();
    assert_eq!(tree.nodes[tail].next, None);
    assert_eq!(tree.nodes[tail].parent, Some(tree.root_index));
    assert_eq!(tree.chain("c").last(), Some(tail));
    assert_eq!(tree.chain("missing").count(), 0);
}

#[test]
fn test_fp_tree_prefix_paths() {
    let mut tree = FPTree::new();

    // Build a simple tree:
    // root → a → b → c
    //           └→ d
    tree.insert_transaction(&["a", "b", "c"], 1);
    tree.insert_transaction(&["a", "b", "d"], 1);

    // Pattern base rows list ancestors nearest-first
    let paths = tree.conditional_pattern_base("c");
    assert_eq!(paths, vec![row(&["b", "a"], 1)]);

    let paths = tree.conditional_pattern_base("d");
    assert_eq!(paths, vec![row(&["b", "a"], 1)]);

    // a hangs off the root, so its only row is empty and dropped
    assert!(tree.conditional_pattern_base("a").is_empty());
}

#[test]
fn test_build_fp_tree_orders_by_frequency() {
    let source = InMemorySource::from_lines(["c a b", "b a", "a", "d"]);
    let config = MiningConfig::new(0.5).unwrap();
    let table = FrequencyTable::count(&source, &config).unwrap();
    assert_eq!(table.total_transactions, 4);
    assert_eq!(table.min_count, 2);
    assert!(!table.is_frequent("c"));
    assert!(!table.is_frequent("d"));

    let tree = build_fp_tree(&source, &table).unwrap();

    // root → a(3) → b(2)
    assert_eq!(tree.nodes[0].children.len(), 1);
    let a = tree.nodes[0].children["a"];
    assert_eq!(tree.nodes[a].count, 3);
    let b = tree.nodes[a].children["b"];
    assert_eq!(tree.nodes[b].count, 2);
    assert!(tree.header("c").is_none());

    assert_eq!(tree.header("a").unwrap().frequency, 3);
    assert_eq!(tree.header("b").unwrap().frequency, 2);
    for item in ["a", "b"] {
        assert_eq!(tree.header(item).unwrap().frequency, tree.support(item));
    }
}

#[test]
fn test_order_transaction_breaks_ties_lexicographically() {
    let counts: HashMap<Item, usize> = [("x", 3), ("b", 2), ("a", 2), ("z", 1)]
        .into_iter()
        .map(|(item, count)| (item.to_string(), count))
        .collect();
    let table = FrequencyTable::from_counts(counts, 4, 2);

    assert_eq!(table.order_transaction(&["z", "b", "x", "a"]), vec!["x", "a", "b"]);

    let frequent: Vec<String> = table.frequent_items().into_iter().map(|(item, _)| item).collect();
    assert_eq!(frequent, vec!["a", "b", "x"]);
}

#[test]
fn test_build_conditional_tree() {
    let prefix_paths = vec![row(&["b", "a"], 2), row(&["a"], 1), row(&["c"], 1)];

    let table = conditional_frequency_table(&prefix_paths, 2);
    assert_eq!(table.frequency("a"), 3);
    assert_eq!(table.frequency("b"), 2);
    assert_eq!(table.frequency("c"), 1);
    // Rows stand for 2 + 1 + 1 transactions
    assert_eq!(table.total_transactions, 4);
    assert_eq!(table.min_count, 2);

    let cond_tree = build_conditional_fp_tree(&prefix_paths, &table).unwrap();

    // root → a(3) → b(2); c is below the threshold
    let a = cond_tree.nodes[0].children["a"];
    assert_eq!(cond_tree.nodes[a].count, 3);
    let b = cond_tree.nodes[a].children["b"];
    assert_eq!(cond_tree.nodes[b].count, 2);
    assert!(cond_tree.header("c").is_none());
    assert_eq!(cond_tree.header("a").unwrap().frequency, 3);
    assert_eq!(cond_tree.node_count(), 2);
}

#[test]
fn test_conditional_tree_absent() {
    let table = conditional_frequency_table(&[], 1);
    assert!(build_conditional_fp_tree(&[], &table).is_none());

    let rows = vec![row(&["a"], 1), row(&["b"], 1)];
    let table = conditional_frequency_table(&rows, 2);
    assert!(build_conditional_fp_tree(&rows, &table).is_none());
}

#[test]
fn test_fp_growth_simple() {
    let patterns = mine(&["a b", "a b c", "a"], 0.5);

    assert_eq!(patterns.len(), 3);
    assert_eq!(patterns.support(&["a"]), Some(3));
    assert_eq!(patterns.support(&["b"]), Some(2));
    // b is the less frequent item, so it is the suffix a grows from
    assert_eq!(patterns.support(&["b", "a"]), Some(2));
    assert!(patterns.iter().all(|(itemset, _)| !itemset.contains(&"c".to_string())));
}

#[test]
fn test_single_transaction_yields_all_subsets() {
    let patterns = mine(&["a b c"], 1.0);

    assert_eq!(patterns.len(), 7);
    assert!(patterns.iter().all(|(_, support)| support == 1));

    // Equal frequencies: ascending identifiers at every level
    let itemsets: Vec<String> = patterns.iter().map(|(itemset, _)| itemset.join(" ")).collect();
    for expected in ["a", "b", "c", "a b", "a c", "b c", "a b c"] {
        let mut items: Vec<&str> = expected.split(' ').collect();
        items.reverse();
        assert!(
            itemsets.contains(&items.join(" ")),
            "missing {expected} in {itemsets:?}"
        );
    }
}

#[test]
fn test_empty_source() {
    let patterns = mine(&[], 0.5);
    assert!(patterns.is_empty());
    assert!(patterns.levels().is_empty());
}

#[test]
fn test_itemset_at_exact_threshold_is_kept() {
    // ceil(100 * 0.07) = 7, even though the float product is just above 7
    let mut lines = vec!["a"; 7];
    lines.extend(vec!["z"; 93]);
    let patterns = mine(&lines, 0.07);

    assert_eq!(patterns.support(&["a"]), Some(7));
    assert_eq!(patterns.support(&["z"]), Some(93));
}

#[test]
fn test_blank_lines_count_as_transactions() {
    // Three transactions, one blank: min count = ceil(3 * 0.5) = 2
    let patterns = mine(&["a", "", "a b"], 0.5);
    assert_eq!(patterns.support(&["a"]), Some(2));
    assert_eq!(patterns.support(&["b"]), None);
}

#[test]
fn test_tie_break_recursion_order() {
    let lines = ["x y", "x y", "y x z"];
    let first = mine(&lines, 0.5);
    let second = mine(&lines, 0.5);
    assert_eq!(first, second);

    // x and y tie at 3: x is inserted above y and mined first, so the pair
    // is discovered by growing x onto the y suffix
    let order: Vec<String> = first.iter().map(|(itemset, _)| itemset.join(" ")).collect();
    assert_eq!(order, vec!["x", "y", "y x"]);
    assert_eq!(first.support(&["y", "x"]), Some(3));
    assert_eq!(first.support(&["x", "y"]), None);
}

#[test]
fn test_duplicate_items_are_inserted_twice() {
    let patterns = mine(&["a a", "a"], 0.5);
    assert_eq!(patterns.support(&["a"]), Some(3));
    assert_eq!(patterns.support(&["a", "a"]), Some(1));
}

#[test]
fn test_weighted_conditional_recursion() {
    // Classic textbook dataset
    let lines = [
        "f a c d g i m p",
        "a b c f l m o",
        "b f h j o",
        "b c k s p",
        "a f c e l p m n",
    ];
    let patterns = mine(&lines, 0.6);

    assert_eq!(patterns.len(), 18);
    assert_eq!(patterns.support(&["f"]), Some(4));
    assert_eq!(patterns.support(&["c"]), Some(4));
    assert_eq!(patterns.support(&["p", "c"]), Some(3));
    assert_eq!(patterns.support(&["m", "f", "c", "a"]), Some(3));
    assert_eq!(set_support(&patterns, &["c", "f", "a"]), Some(3));
    assert_eq!(set_support(&patterns, &["b", "c"]), None);
    assert!(patterns.iter().all(|(_, support)| support >= 3));
}

#[test]
fn test_frequent_levels() {
    let patterns = mine(&["a b c"], 1.0);
    let levels = patterns.levels();

    assert_eq!(levels.len(), 3);
    assert_eq!(levels[0].itemset_size, 1);
    assert_eq!(levels[0].len(), 3);
    assert_eq!(levels[1].len(), 3);
    assert_eq!(levels[2].len(), 1);
    assert_eq!(levels[2].get_itemset(0).len(), 3);
    assert_eq!(levels[2].support(0), 1);

    let pairs: Vec<String> = levels[1].iter_itemsets().map(|itemset| itemset.join(" ")).collect();
    assert_eq!(pairs, vec!["b a", "c a", "c b"]);
}

#[test]
fn test_mine_hand_built_tree() {
    let mut tree = FPTree::new();
    tree.insert_transaction(&["a", "b"], 2);
    tree.insert_transaction(&["a"], 1);
    tree.set_frequency("a", 3);
    tree.set_frequency("b", 2);

    let counts: HashMap<Item, usize> = [("a".to_string(), 3), ("b".to_string(), 2)]
        .into_iter()
        .collect();
    let table = FrequencyTable::from_counts(counts, 3, 2);
    let patterns = mine_tree(&tree, &table);

    assert_eq!(patterns.into_vec(), vec![
        (vec!["a".to_string()], 3),
        (vec!["b".to_string()], 2),
        (vec!["b".to_string(), "a".to_string()], 2),
    ]);
}
