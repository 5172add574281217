use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::CodecError;
use crate::frequency::FrequencyTable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    Leaf {
        symbol: char,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<HuffmanNode>,
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    pub fn weight(&self) -> u64 {
        match self {
            HuffmanNode::Leaf { weight, .. } => *weight,
            HuffmanNode::Internal { weight, .. } => *weight,
        }
    }

    /// Joins two nodes under a new parent; `left` is the one popped first.
    fn merge(left: HuffmanNode, right: HuffmanNode) -> HuffmanNode {
        HuffmanNode::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }
}

/// Heap slot. Ties on weight fall back to the sequence number, so the
/// earliest-queued node is popped first and every build is reproducible.
#[derive(Debug)]
struct Queued {
    node: HuffmanNode,
    seq: u64,
}

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .node
            .weight()
            .cmp(&self.node.weight())
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Queued {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: HuffmanNode,
}

impl HuffmanTree {
    /// Builds the tree by repeatedly merging the two lightest nodes.
    ///
    /// Leaves are queued in the table's first-occurrence order and merged
    /// nodes receive increasing sequence numbers after them. A table with a
    /// single symbol yields a tree whose root is that leaf.
    pub fn build(frequencies: &FrequencyTable) -> Result<Self, CodecError> {
        let mut heap = BinaryHeap::with_capacity(frequencies.len());
        let mut seq = 0u64;

        for (symbol, weight) in frequencies.iter() {
            heap.push(Queued {
                node: HuffmanNode::Leaf { symbol, weight },
                seq,
            });
            seq += 1;
        }

        loop {
            let Some(first) = heap.pop() else {
                return Err(CodecError::EmptyInput);
            };
            let Some(second) = heap.pop() else {
                return Ok(HuffmanTree { root: first.node });
            };
            heap.push(Queued {
                node: HuffmanNode::merge(first.node, second.node),
                seq,
            });
            seq += 1;
        }
    }

    pub fn root(&self) -> &HuffmanNode {
        &self.root
    }

    /// Sum of all leaf weights.
    pub fn weight(&self) -> u64 {
        self.root.weight()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(symbol: char, weight: u64) -> HuffmanNode {
        HuffmanNode::Leaf { symbol, weight }
    }

    #[test]
    fn builds_expected_shape() {
        let tree = HuffmanTree::build(&FrequencyTable::from_text("aaabbc")).unwrap();

        // c(1) and b(2) merge first; a(3) was queued before the merged
        // node of equal weight, so it becomes the left child of the root.
        let expected = HuffmanNode::Internal {
            weight: 6,
            left: Box::new(leaf('a', 3)),
            right: Box::new(HuffmanNode::Internal {
                weight: 3,
                left: Box::new(leaf('c', 1)),
                right: Box::new(leaf('b', 2)),
            }),
        };
        assert_eq!(tree.root(), &expected);
        assert_eq!(tree.weight(), 6);
    }

    #[test]
    fn single_symbol_root_is_leaf() {
        let tree = HuffmanTree::build(&FrequencyTable::from_text("zzzz")).unwrap();
        assert_eq!(tree.root(), &leaf('z', 4));
        assert!(tree.root().is_leaf());
    }

    #[test]
    fn empty_table_fails() {
        let err = HuffmanTree::build(&FrequencyTable::default()).unwrap_err();
        assert_eq!(err, CodecError::EmptyInput);
    }

    #[test]
    fn ties_resolved_by_queue_order() {
        let first = HuffmanTree::build(&FrequencyTable::from_text("abcd")).unwrap();
        let second = HuffmanTree::build(&FrequencyTable::from_text("abcd")).unwrap();
        assert_eq!(first, second);

        let HuffmanNode::Internal { left, right, .. } = first.root() else {
            panic!("expected an internal root");
        };
        // (a,b) merged first, then (c,d); the older merge lands on the left.
        assert_eq!(
            **left,
            HuffmanNode::Internal {
                weight: 2,
                left: Box::new(leaf('a', 1)),
                right: Box::new(leaf('b', 1)),
            }
        );
        assert_eq!(right.weight(), 2);
    }
}
