//! Static interval tree over half-open ranges
//!
//! Built once from a batch of items; rebuilt wholesale when the annotated
//! text changes.

use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalTree<T> {
    nodes: Vec<Node<T>>,
    root: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Node<T> {
    range: Range<usize>,
    val: T,
    max: usize, // Max end point in this subtree
    left: Option<usize>,
    right: Option<usize>,
}

impl<T> IntervalTree<T> {
    pub fn new(mut items: Vec<(Range<usize>, T)>) -> Self {
        items.sort_by(|a, b| {
            a.0.start
                .cmp(&b.0.start)
                .then_with(|| a.0.end.cmp(&b.0.end))
        });

        let mut slots: Vec<Option<(Range<usize>, T)>> = items.into_iter().map(Some).collect();
        let mut nodes = Vec::with_capacity(slots.len());
        let root = Self::build(&mut slots, &mut nodes);
        Self { nodes, root }
    }

    // Builds a balanced tree from sorted slots, taking each item exactly once
    fn build(slots: &mut [Option<(Range<usize>, T)>], nodes: &mut Vec<Node<T>>) -> Option<usize> {
        if slots.is_empty() {
            return None;
        }

        let mid = slots.len() / 2;
        let (range, val) = slots[mid].take()?;

        let idx = nodes.len();
        nodes.push(Node {
            max: range.end,
            range,
            val,
            left: None,
            right: None,
        });

        let (lower, upper) = slots.split_at_mut(mid);
        let left_idx = Self::build(lower, nodes);
        let right_idx = Self::build(&mut upper[1..], nodes);

        let mut max_end = nodes[idx].max;
        for child in [left_idx, right_idx].into_iter().flatten() {
            max_end = max_end.max(nodes[child].max);
        }
        let node = &mut nodes[idx];
        node.left = left_idx;
        node.right = right_idx;
        node.max = max_end;

        Some(idx)
    }

    /// All items overlapping `query`, ordered by `(start, end)`
    pub fn query(&self, query: Range<usize>) -> Vec<(&Range<usize>, &T)> {
        let mut results = Vec::new();
        if let Some(root) = self.root {
            self.query_recursive(root, &query, &mut results);
        }
        results
    }

    /// All items containing `pos`
    pub fn stab(&self, pos: usize) -> Vec<(&Range<usize>, &T)> {
        self.query(pos..pos.saturating_add(1))
    }

    fn query_recursive<'a>(
        &'a self,
        node_idx: usize,
        query: &Range<usize>,
        results: &mut Vec<(&'a Range<usize>, &'a T)>,
    ) {
        let node = &self.nodes[node_idx];

        if let Some(left) = node.left {
            if self.nodes[left].max > query.start {
                self.query_recursive(left, query, results);
            }
        }

        if node.range.start < query.end && node.range.end > query.start {
            results.push((&node.range, &node.val));
        }

        if let Some(right) = node.right {
            if self.nodes[right].max > query.start && node.range.start < query.end {
                self.query_recursive(right, query, results);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<T> Default for IntervalTree<T> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }
}
