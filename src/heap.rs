//! Min-heap of tree nodes keyed by weight.
//!
//! A plain array-backed binary heap. The sift rules are fixed (bottom-up
//! heapify, sift-up on push, swap-with-last then sift-down on pop), so
//! equal weights always come out in the same order for the same input.
//! The labels produced downstream depend on that order.

/// A queued node: its weight and its index in the node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Entry {
    weight: i128,
    node: usize,
}

/// Min-heap of arena indices ordered by node weight.
///
/// Uses 0-indexed storage with parent = (i-1)/2, children = 2i+1, 2i+2.
#[derive(Clone, Debug, Default)]
pub(crate) struct NodeHeap {
    entries: Vec<Entry>,
}

impl NodeHeap {
    /// Build a heap from `(node, weight)` pairs in one pass.
    pub(crate) fn from_weights<I>(weights: I) -> Self
    where
        I: IntoIterator<Item = (usize, i128)>,
    {
        let entries = weights
            .into_iter()
            .map(|(node, weight)| Entry { weight, node })
            .collect::<Vec<_>>();
        let mut heap = Self { entries };

        let n = heap.entries.len();
        for i in (0..n / 2).rev() {
            heap.sift_down(i, n);
        }
        heap
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Index of the lowest-weight node without removing it.
    pub(crate) fn peek(&self) -> Option<usize> {
        self.entries.first().map(|e| e.node)
    }

    /// Queue `node` with the given weight.
    pub(crate) fn push(&mut self, node: usize, weight: i128) {
        self.entries.push(Entry { weight, node });
        self.sift_up(self.entries.len() - 1);
    }

    /// Remove and return the lowest-weight node.
    pub(crate) fn pop(&mut self) -> Option<usize> {
        let last = self.entries.len().checked_sub(1)?;
        self.entries.swap(0, last);
        self.sift_down(0, last);
        self.entries.pop().map(|e| e.node)
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.entries[i].weight < self.entries[j].weight
    }

    fn sift_up(&mut self, mut j: usize) {
        while j > 0 {
            let parent = (j - 1) / 2;
            if !self.less(j, parent) {
                break;
            }
            self.entries.swap(j, parent);
            j = parent;
        }
    }

    /// Restore the heap property below `i`, looking only at `entries[..n]`.
    fn sift_down(&mut self, mut i: usize, n: usize) {
        loop {
            let left = 2 * i + 1;
            if left >= n {
                break;
            }
            let mut child = left;
            let right = left + 1;
            if right < n && self.less(right, left) {
                child = right;
            }
            if !self.less(child, i) {
                break;
            }
            self.entries.swap(i, child);
            i = child;
        }
    }
}
