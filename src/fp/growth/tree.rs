use std::collections::HashMap;

/// Item identifier. Ordering of identifiers breaks frequency ties.
pub type Item = String;

#[derive(Debug, Clone)]
pub struct FPNode {
    /// `None` only for the root.
    pub item: Option<Item>,
    pub count: usize,
    pub parent: Option<usize>,
    pub children: HashMap<Item, usize>,
    /// Next node created for the same item, in creation order.
    pub next: Option<usize>,
}

/// Node-link endpoints and support for one item of a tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderEntry {
    pub frequency: usize,
    pub head: Option<usize>,
    pub tail: Option<usize>,
}

/// One row of a conditional pattern base.
///
/// `path` lists the ancestors of a node nearest-first, excluding the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternBaseRow {
    pub path: Vec<Item>,
    pub weight: usize,
}

#[derive(Debug, Clone)]
pub struct FPTree {
    pub nodes: Vec<FPNode>,
    pub header_table: HashMap<Item, HeaderEntry>,
    pub root_index: usize,
}

impl FPNode {
    pub fn new_root() -> Self {
        Self {
            item: None,
            count: 0,
            parent: None,
            children: HashMap::new(),
            next: None,
        }
    }

    pub fn new_item(item: Item, count: usize, parent: usize) -> Self {
        Self {
            item: Some(item),
            count,
            parent: Some(parent),
            children: HashMap::new(),
            next: None,
        }
    }

    pub fn is_root(&self) -> bool {
        self.item.is_none()
    }
}

impl Default for FPTree {
    fn default() -> Self {
        Self::new()
    }
}

impl FPTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![FPNode::new_root()],
            header_table: HashMap::new(),
            root_index: 0,
        }
    }

    /// Inserts an already filtered and ordered transaction with the given weight.
    ///
    /// Shared prefixes are merged into existing children. Only nodes created
    /// by this call are appended to their item's node-link chain.
    pub fn insert_transaction<S: AsRef<str>>(&mut self, transaction: &[S], weight: usize) {
        let mut current_index = self.root_index;

        for item in transaction.iter().map(<S as AsRef<str>>::as_ref) {
            if let Some(&child_index) = self.nodes[current_index].children.get(item) {
                self.nodes[child_index].count += weight;
                current_index = child_index;
                continue;
            }

            let new_index = self.nodes.len();
            self.nodes
                .push(FPNode::new_item(item.to_owned(), weight, current_index));
            self.nodes[current_index]
                .children
                .insert(item.to_owned(), new_index);
            self.link(item, new_index);
            current_index = new_index;
        }
    }

    fn link(&mut self, item: &str, node_index: usize) {
        let entry = self.header_table.entry(item.to_owned()).or_default();
        match entry.tail {
            Some(tail) if tail == node_index => {}
            Some(tail) => {
                entry.tail = Some(node_index);
                self.nodes[tail].next = Some(node_index);
            }
            None => {
                entry.head = Some(node_index);
                entry.tail = Some(node_index);
            }
        }
    }

    /// Records the support the header reports for `item`.
    pub fn set_frequency(&mut self, item: &str, frequency: usize) {
        if let Some(entry) = self.header_table.get_mut(item) {
            entry.frequency = frequency;
        }
    }

    pub fn header(&self, item: &str) -> Option<&HeaderEntry> {
        self.header_table.get(item)
    }

    /// Node indices of `item`'s node-link chain, oldest first.
    pub fn chain(&self, item: &str) -> ChainIter<'_> {
        ChainIter {
            tree: self,
            current: self.header(item).and_then(|entry| entry.head),
        }
    }

    /// Sum of the counts along `item`'s chain.
    pub fn support(&self, item: &str) -> usize {
        self.chain(item).map(|idx| self.nodes[idx].count).sum()
    }

    /// Weighted ancestor paths for every occurrence of `item`.
    pub fn conditional_pattern_base(&self, item: &str) -> Vec<PatternBaseRow> {
        self.chain(item)
            .filter_map(|idx| {
                let node = &self.nodes[idx];
                let mut path = Vec::new();
                let mut current = node.parent;

                while let Some(i) = current {
                    let ancestor = &self.nodes[i];
                    match &ancestor.item {
                        Some(ancestor_item) => path.push(ancestor_item.clone()),
                        None => break,
                    }
                    current = ancestor.parent;
                }

                (!path.is_empty()).then(|| PatternBaseRow {
                    path,
                    weight: node.count,
                })
            })
            .collect()
    }

    /// Number of item nodes, not counting the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.nodes[self.root_index].children.is_empty()
    }
}

pub struct ChainIter<'a> {
    tree: &'a FPTree,
    current: Option<usize>,
}

impl Iterator for ChainIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let idx = self.current?;
        self.current = self.tree.nodes[idx].next;
        Some(idx)
    }
}
