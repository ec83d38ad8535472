//! Builds the Huffman prefix tree from a frequency table.
//!
//! Nodes sit in a binary heap ordered by (weight, sequence). Leaves get their sequence number
//! in ascending symbol order, internal nodes in the order they are created. The two lightest
//! nodes are merged until one root remains, the first one extracted becoming the left child.
//! Because every node has a unique sequence number the merge order, and therefore every
//! codeword, is fully determined by the frequency table.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::{debug, trace};

use crate::error::HuffError;
use crate::tools::freq_count::FrequencyTable;

#[derive(Debug, Clone)]
pub enum NodeData {
    Kids(Box<Node>, Box<Node>),
    Leaf(u8),
}

#[derive(Debug, Clone)]
pub struct Node {
    pub weight: u64,
    pub seq: u32,
    pub node_data: NodeData,
}

impl Node {
    /// Create a new node
    pub fn new(weight: u64, seq: u32, node_data: NodeData) -> Node {
        Node {
            weight,
            seq,
            node_data,
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}

impl Eq for Node {}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Node {
    /// Reversed on purpose: BinaryHeap is a max-heap, and we want the lightest (then oldest)
    /// node on top.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// A finished prefix tree. Only needed long enough to derive the codebook.
#[derive(Debug, Clone)]
pub struct HuffTree {
    pub root: Node,
}

impl HuffTree {
    /// Build the tree for a non-empty frequency table.
    pub fn from_frequencies(freqs: &FrequencyTable) -> Result<Self, HuffError> {
        let mut seq: u32 = 0;
        let mut heap: BinaryHeap<Node> = freqs
            .iter()
            .map(|(sym, count)| {
                let node = Node::new(count, seq, NodeData::Leaf(sym));
                seq += 1;
                node
            })
            .collect();

        if heap.is_empty() {
            return Err(HuffError::EmptyInput);
        }
        debug!("Building tree from {} distinct symbols", heap.len());

        // Pare the heap down to one single node with child nodes.
        while heap.len() > 1 {
            let (left, right) = match (heap.pop(), heap.pop()) {
                (Some(l), Some(r)) => (l, r),
                _ => return Err(HuffError::EmptyInput),
            };
            trace!(
                "merge #{} ({}) + #{} ({}) -> #{}",
                left.seq,
                left.weight,
                right.seq,
                right.weight,
                seq
            );
            // Weights never exceed the table total, but a hand-made table could overflow it.
            let weight = left
                .weight
                .checked_add(right.weight)
                .ok_or_else(|| HuffError::malformed("symbol counts overflow a u64"))?;
            heap.push(Node::new(
                weight,
                seq,
                NodeData::Kids(Box::new(left), Box::new(right)),
            ));
            seq += 1;
        }

        heap.pop()
            .map(|root| HuffTree { root })
            .ok_or(HuffError::EmptyInput)
    }

    /// Depth of the deepest leaf. A lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(&self.root, 0_usize)];
        while let Some((node, depth)) = stack.pop() {
            match &node.node_data {
                NodeData::Kids(left, right) => {
                    stack.push((left.as_ref(), depth + 1));
                    stack.push((right.as_ref(), depth + 1));
                }
                NodeData::Leaf(_) => deepest = deepest.max(depth),
            }
        }
        deepest
    }
}
