//! n-ary Huffman tree over a flat node arena.
//!
//! Nodes only know their parent and their position among the parent's
//! children. Leaves occupy arena slots `0..num_leaves` in input order;
//! every combination appends one internal node after them.
//!
//! # The first combination
//!
//! Every combination takes `base` nodes out of the queue and puts one back,
//! a net loss of `base - 1`. Unless `num_leaves - 1` is a multiple of
//! `base - 1`, the last combination would end up short, leaving unused
//! branches right under the root where the most frequent items live.
//! Instead, the first combination takes only
//!
//! ```text
//! initial = 2 + (num_leaves - 2) mod (base - 1)
//! ```
//!
//! of the least frequent nodes, after which every combination is full.

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::heap::NodeHeap;
use crate::label::Labels;

/// A node in the arena. Leaf or branch, the fields are the same.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Node {
    /// Leaf frequency, or the sum of the children's weights. Wide enough
    /// that summing any number of `i64` frequencies cannot overflow.
    pub(crate) weight: i128,
    /// Arena index of the parent. `None` for the root.
    pub(crate) parent: Option<usize>,
    /// Position among the parent's children, in `[0, base)`.
    pub(crate) sibling: Option<usize>,
    /// Sum of path lengths from this node to every leaf below it.
    pub(crate) total_hops: usize,
    /// Number of leaves below (or at) this node.
    pub(crate) leaves: usize,
}

impl Node {
    fn leaf(freq: i64) -> Self {
        Self {
            weight: i128::from(freq),
            parent: None,
            sibling: None,
            total_hops: 0,
            leaves: 1,
        }
    }
}

/// Number of combinations needed to reduce `num_leaves` nodes to one,
/// padded by one for a short combination.
pub(crate) fn max_combinations(base: usize, num_leaves: usize) -> usize {
    num_leaves.saturating_sub(1) / (base - 1) + 1
}

/// Child count of the first combination.
pub(crate) fn initial_count(base: usize, num_leaves: usize) -> usize {
    2 + (num_leaves - 2) % (base - 1)
}

/// A Huffman tree built from item frequencies.
///
/// ```
/// use huffman_label::Tree;
///
/// let tree = Tree::build(4, &[5, 4, 3, 2, 1]).unwrap();
/// assert_eq!(tree.num_leaves(), 5);
/// assert_eq!(tree.depth(3), Some(2));
/// assert_eq!(tree.total_hops(), 7);
/// ```
#[derive(Clone, Debug)]
pub struct Tree {
    base: usize,
    num_leaves: usize,
    nodes: Vec<Node>,
    root: Option<usize>,
}

impl Tree {
    /// Build the tree for `freqs` over an alphabet of `base` symbols.
    ///
    /// # Errors
    /// Returns `Error::InvalidBase` if `base < 2`.
    pub fn build(base: usize, freqs: &[i64]) -> Result<Self> {
        if base < 2 {
            return Err(Error::InvalidBase(base));
        }

        let num_leaves = freqs.len();
        let capacity = num_leaves + max_combinations(base, num_leaves);
        let mut nodes = Vec::with_capacity(capacity);
        nodes.extend(freqs.iter().map(|&f| Node::leaf(f)));
        debug!(base, num_leaves, capacity, "allocated node pool");

        // Zero or one item: nothing to combine.
        if num_leaves < 2 {
            return Ok(Self {
                base,
                num_leaves,
                root: nodes.first().map(|_| 0),
                nodes,
            });
        }

        let mut builder = Builder {
            nodes,
            heap: NodeHeap::from_weights(freqs.iter().map(|&f| i128::from(f)).enumerate()),
        };

        let initial = initial_count(base, num_leaves);
        trace!(initial, "first combination");
        builder.combine(initial);

        while builder.heap.len() > 1 {
            builder.combine(base);
        }

        let root = builder.heap.peek();
        let tree = Self {
            base,
            num_leaves,
            nodes: builder.nodes,
            root,
        };
        debug!(
            nodes = tree.nodes.len(),
            total_hops = tree.total_hops(),
            "built tree"
        );
        Ok(tree)
    }

    /// Alphabet size the tree branches by.
    pub fn base(&self) -> usize {
        self.base
    }

    /// Number of input items.
    pub fn num_leaves(&self) -> usize {
        self.num_leaves
    }

    /// Arena index of the root, `None` for an empty tree.
    pub fn root(&self) -> Option<usize> {
        self.root
    }

    /// Total number of nodes, leaves included.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Weight of the node at `idx`: the frequency of a leaf, the sum of the
    /// leaf frequencies below a branch.
    pub fn weight(&self, idx: usize) -> Option<i128> {
        self.nodes.get(idx).map(|n| n.weight)
    }

    /// Sum of the depths of all leaves: the combined length of all labels.
    ///
    /// A lone item still gets a one-symbol label, so this is 1 for it.
    pub fn total_hops(&self) -> usize {
        match self.num_leaves {
            0 => 0,
            1 => 1,
            _ => self.root.map_or(0, |r| self.nodes[r].total_hops),
        }
    }

    /// Length of the label for `leaf`, `None` if there is no such item.
    pub fn depth(&self, leaf: usize) -> Option<usize> {
        (leaf < self.num_leaves).then(|| self.path(leaf).count().max(1))
    }

    /// Sibling positions from `node` up to (excluding) the root.
    pub(crate) fn path(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        let mut cur = Some(node);
        std::iter::from_fn(move || {
            let n = &self.nodes[cur?];
            cur = n.parent;
            n.sibling
        })
    }

    /// Extract the label of every leaf.
    pub fn labels(&self) -> Labels {
        Labels::from_tree(self)
    }

    #[cfg(test)]
    pub(crate) fn node(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }
}

/// Mutable state while combining.
struct Builder {
    nodes: Vec<Node>,
    heap: NodeHeap,
}

impl Builder {
    /// Merge up to `count` lowest-weight queued nodes under a new parent.
    fn combine(&mut self, count: usize) {
        let parent = self.nodes.len();
        let mut weight = 0i128;
        let mut total_hops = 0;
        let mut leaves = 0;

        let mut popped = 0;
        while popped < count {
            let Some(idx) = self.heap.pop() else { break };
            let child = &mut self.nodes[idx];
            child.parent = Some(parent);
            child.sibling = Some(popped);

            weight += child.weight;
            total_hops += child.total_hops + child.leaves;
            leaves += child.leaves;
            popped += 1;
        }
        debug_assert_eq!(popped, count, "queue drained mid-combination");

        self.nodes.push(Node {
            weight,
            parent: None,
            sibling: None,
            total_hops,
            leaves,
        });
        self.heap.push(parent, weight);
    }
}
