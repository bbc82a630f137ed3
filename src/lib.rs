//! # Prefix-free labels via n-ary Huffman coding
//!
//! *Short labels for frequent items, unambiguous as you type.*
//!
//! ## Intuition First
//!
//! Think of jump-to hints in an editor: every visible target gets a short
//! key sequence, and you type it one key at a time. If no label is a prefix
//! of another, the moment your keystrokes match a label you know exactly
//! which target you meant, without waiting for a terminator.
//!
//! Some targets are picked far more often than others. Huffman coding hands
//! out the short sequences to the popular ones and pushes the rare ones
//! deeper, exactly as it does for bytes in a compressor.
//!
//! ## The Problem
//!
//! Classic Huffman coding builds a binary tree. Keyboards have more than two
//! keys: with an alphabet of `base` symbols we want a `base`-ary tree,
//! where every internal node branches `base` ways and the root-to-leaf path
//! of an item is its label.
//!
//! ## Historical Context
//!
//! ```text
//! 1952  Huffman     Minimum-redundancy codes, including the D-ary case
//! 1976  van Leeuwen Linear-time construction from sorted weights
//! ```
//!
//! Huffman's original paper already covered alphabets larger than two. The
//! only twist is that the counts must work out: each combination removes
//! `base - 1` nodes from the queue, so the first combination is shortened
//! to make every later one full (see [`tree`]).
//!
//! ## Complexity Analysis
//!
//! - **Time**: $O(n \log n)$ heap work for $n$ items.
//! - **Space**: one arena of $n + \lceil (n-1)/(base-1) \rceil + 1$ nodes,
//!   plus one buffer holding every label back to back.
//!
//! ## Failure Modes
//!
//! 1. **Alphabet too small**: `base < 2` cannot distinguish anything and is
//!    rejected with [`Error::InvalidBase`].
//! 2. **Ties**: equal frequencies are ordered by the heap, not by item
//!    index. The result is deterministic, but permuting equal-weight items
//!    can move labels around.
//!
//! ## Example
//!
//! ```
//! use huffman_label::Alphabet;
//!
//! let asdf = Alphabet::new("asdf").unwrap();
//! let labels = asdf.label(&[52, 52, 55, 56, 59, 70, 88, 158, 169, 530]).unwrap();
//! assert_eq!(labels, ["sa", "ss", "sd", "sf", "da", "ds", "dd", "df", "a", "f"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod alphabet;
pub mod error;
mod heap;
pub mod label;
pub mod tree;

pub use alphabet::Alphabet;
pub use error::{Error, Result};
pub use label::{label, Labels};
pub use tree::Tree;
