//! Label extraction: root-to-leaf paths as symbol sequences.

use std::ops::Index;

use tracing::trace;

use crate::error::Result;
use crate::tree::Tree;

/// Generate prefix-free labels for items with the given frequencies.
///
/// `base` is the alphabet size; `labels[i]` is the label of item `i`,
/// written as indexes into the alphabet. Mapping indexes to characters is
/// up to the caller (see [`Alphabet`](crate::Alphabet)).
///
/// Items with higher frequencies get shorter labels. Any `i64` is a valid
/// frequency.
///
/// # Errors
/// Returns `Error::InvalidBase` if `base < 2`.
///
/// ```
/// let labels = huffman_label::label(4, &[50, 25, 12, 6]).unwrap();
/// assert_eq!(labels.into_vecs(), vec![vec![3], vec![2], vec![1], vec![0]]);
/// ```
pub fn label(base: usize, freqs: &[i64]) -> Result<Labels> {
    Ok(Tree::build(base, freqs)?.labels())
}

/// One label per item, sharing a single buffer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Labels {
    data: Vec<usize>,
    // Label i is data[ends[i - 1]..ends[i]], with an implicit 0 before ends[0].
    ends: Vec<usize>,
}

impl Labels {
    pub(crate) fn from_tree(tree: &Tree) -> Self {
        let n = tree.num_leaves();
        let mut data = Vec::with_capacity(tree.total_hops());
        let mut ends = Vec::with_capacity(n);

        if n == 1 {
            data.push(0);
            ends.push(1);
        } else {
            for leaf in 0..n {
                let start = data.len();
                data.extend(tree.path(leaf));
                data[start..].reverse();
                ends.push(data.len());
            }
        }

        trace!(items = n, symbols = data.len(), "extracted labels");
        Self { data, ends }
    }

    /// Number of labels (one per item).
    pub fn len(&self) -> usize {
        self.ends.len()
    }

    /// Whether there are no labels at all.
    pub fn is_empty(&self) -> bool {
        self.ends.is_empty()
    }

    /// The label of item `i`.
    pub fn get(&self, i: usize) -> Option<&[usize]> {
        let end = *self.ends.get(i)?;
        let start = if i == 0 { 0 } else { self.ends[i - 1] };
        Some(&self.data[start..end])
    }

    /// Labels in item order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            labels: self,
            next: 0,
        }
    }

    /// Length of the longest label, 0 if there are none.
    pub fn max_len(&self) -> usize {
        self.iter().map(<[usize]>::len).max().unwrap_or(0)
    }

    /// Copy every label into its own vector.
    pub fn into_vecs(self) -> Vec<Vec<usize>> {
        self.iter().map(<[usize]>::to_vec).collect()
    }
}

impl Index<usize> for Labels {
    type Output = [usize];

    fn index(&self, i: usize) -> &[usize] {
        match self.get(i) {
            Some(label) => label,
            None => panic!("label index {i} out of range for {} labels", self.len()),
        }
    }
}

/// Iterator over [`Labels`].
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    labels: &'a Labels,
    next: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a [usize];

    fn next(&mut self) -> Option<Self::Item> {
        let label = self.labels.get(self.next)?;
        self.next += 1;
        Some(label)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.labels.len() - self.next;
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Labels {
    type Item = &'a [usize];
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_empty_and_single() {
        let labels = label(2, &[]).unwrap();
        assert!(labels.is_empty());
        assert_eq!(labels.max_len(), 0);

        for f in [i64::MIN, -1, 0, 7] {
            assert_eq!(label(5, &[f]).unwrap().into_vecs(), vec![vec![0]]);
        }
    }

    #[test]
    fn test_invalid_base() {
        assert_eq!(label(1, &[1, 2, 3]).unwrap_err(), Error::InvalidBase(1));
        assert_eq!(label(0, &[]).unwrap_err(), Error::InvalidBase(0));
    }

    #[test]
    fn test_binary_five_equal() {
        let labels = label(2, &[1, 1, 1, 1, 1]).unwrap();
        assert_eq!(
            labels.into_vecs(),
            vec![vec![0, 0], vec![1, 1, 1], vec![1, 0], vec![1, 1, 0], vec![0, 1]]
        );
    }

    #[test]
    fn test_quaternary_short_first_step() {
        let labels = label(4, &[5, 4, 3, 2, 1]).unwrap();
        assert_eq!(&labels[0], &[3]);
        assert_eq!(&labels[1], &[2]);
        assert_eq!(&labels[2], &[0]);
        assert_eq!(&labels[3], &[1, 1]);
        assert_eq!(&labels[4], &[1, 0]);
        assert_eq!(labels.max_len(), 2);
    }

    #[test]
    fn test_buffer_matches_total_hops() {
        let freqs = [10, 12, 7, 8, 32, 1, 17, 18];
        let tree = Tree::build(4, &freqs).unwrap();
        let labels = tree.labels();
        assert_eq!(labels.data.len(), tree.total_hops());
    }

    #[test]
    fn test_iter_and_get_agree() {
        let labels = label(3, &[4, 8, 15, 16, 23, 42]).unwrap();
        assert_eq!(labels.iter().len(), 6);
        for (i, l) in labels.iter().enumerate() {
            assert_eq!(labels.get(i), Some(l));
            assert!(l.iter().all(|&s| s < 3));
        }
        assert_eq!(labels.get(6), None);
        assert_eq!((&labels).into_iter().count(), 6);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_out_of_range() {
        let labels = label(2, &[1, 2]).unwrap();
        let _ = &labels[2];
    }
}
