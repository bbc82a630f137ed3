//! Mapping symbol indexes to characters.
//!
//! The labeler only deals in indexes `[0, base)`. `Alphabet` is a small
//! convenience for callers (and tests) that want the labels as strings.

use crate::error::{Error, Result};
use crate::label::label;

/// An ordered set of distinct symbols.
///
/// ```
/// use huffman_label::Alphabet;
///
/// let abcd = Alphabet::new("abcd").unwrap();
/// assert_eq!(abcd.label(&[5, 4, 3, 2, 1]).unwrap(), ["d", "c", "a", "bb", "ba"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Create an alphabet from the characters of `chars`, in order.
    ///
    /// # Errors
    /// `Error::InvalidBase` for fewer than two symbols,
    /// `Error::DuplicateSymbol` if a character repeats.
    pub fn new(chars: &str) -> Result<Self> {
        let symbols: Vec<char> = chars.chars().collect();
        if symbols.len() < 2 {
            return Err(Error::InvalidBase(symbols.len()));
        }
        for (i, &c) in symbols.iter().enumerate() {
            if symbols[..i].contains(&c) {
                return Err(Error::DuplicateSymbol(c));
            }
        }
        Ok(Self { symbols })
    }

    /// Number of symbols, i.e. the `base` to label with.
    pub fn size(&self) -> usize {
        self.symbols.len()
    }

    /// Spell out a label.
    ///
    /// # Errors
    /// `Error::SymbolOutOfRange` if an index is not below [`size`](Self::size).
    pub fn render(&self, label: &[usize]) -> Result<String> {
        label
            .iter()
            .map(|&index| {
                self.symbols.get(index).copied().ok_or(Error::SymbolOutOfRange {
                    index,
                    size: self.size(),
                })
            })
            .collect()
    }

    /// Label items by frequency and spell out the results.
    pub fn label(&self, freqs: &[i64]) -> Result<Vec<String>> {
        let labels = label(self.size(), freqs)?;
        labels.iter().map(|l| self.render(l)).collect()
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.symbols.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_short_alphabets() {
        assert_eq!(Alphabet::new("").unwrap_err(), Error::InvalidBase(0));
        assert_eq!(Alphabet::new("x").unwrap_err(), Error::InvalidBase(1));
    }

    #[test]
    fn test_rejects_duplicates() {
        assert_eq!(
            Alphabet::new("abca").unwrap_err(),
            Error::DuplicateSymbol('a')
        );
    }

    #[test]
    fn test_render() {
        let ab = Alphabet::new("ab").unwrap();
        assert_eq!(ab.render(&[0, 1, 0]).unwrap(), "aba");
        assert_eq!(ab.render(&[]).unwrap(), "");
        assert_eq!(
            ab.render(&[1, 2]).unwrap_err(),
            Error::SymbolOutOfRange { index: 2, size: 2 }
        );
    }

    #[test]
    fn test_multibyte_symbols() {
        let greek = Alphabet::new("αβγ").unwrap();
        assert_eq!(greek.size(), 3);
        assert_eq!(greek.to_string(), "αβγ");
        assert_eq!(greek.render(&[2, 0]).unwrap(), "γα");
    }
}
