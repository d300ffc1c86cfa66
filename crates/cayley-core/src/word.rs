use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A single letter of a word.
///
/// The derived ordering places [`Symbol::Identity`] below every generator and
/// orders generators by their position in the alphabet, independent of the
/// characters used to display them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Symbol {
    /// The neutral element.
    Identity,
    /// Generator identified by its index in the alphabet.
    Generator(u16),
}

impl Symbol {
    /// Returns whether the symbol is the identity.
    pub fn is_identity(&self) -> bool {
        matches!(self, Symbol::Identity)
    }
}

/// Ordered sequence of symbols.
///
/// Words compare in shortlex order: shorter words first, equal lengths by
/// symbol order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Word(Vec<Symbol>);

impl Word {
    /// Creates a word from raw symbols.
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self(symbols)
    }

    /// The empty word.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// The one-letter word made of the identity symbol.
    pub fn identity() -> Self {
        Self(vec![Symbol::Identity])
    }

    /// The one-letter word for the generator at `index`.
    pub fn generator(index: u16) -> Self {
        Self(vec![Symbol::Generator(index)])
    }

    /// Returns the symbols of the word.
    pub fn as_slice(&self) -> &[Symbol] {
        &self.0
    }

    /// Number of symbols in the word.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the word has no symbols.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns whether the word is exactly the identity symbol.
    pub fn is_identity(&self) -> bool {
        self.0.len() == 1 && self.0[0].is_identity()
    }

    /// Returns a new word with `symbol` appended.
    pub fn extended(&self, symbol: Symbol) -> Self {
        let mut symbols = Vec::with_capacity(self.0.len() + 1);
        symbols.extend_from_slice(&self.0);
        symbols.push(symbol);
        Self(symbols)
    }

    /// Concatenates two words.
    pub fn concat(&self, other: &Word) -> Self {
        let mut symbols = Vec::with_capacity(self.0.len() + other.0.len());
        symbols.extend_from_slice(&self.0);
        symbols.extend_from_slice(&other.0);
        Self(symbols)
    }

    /// Returns the position of the first occurrence of `pattern` at or after
    /// `from`.
    pub fn find(&self, pattern: &[Symbol], from: usize) -> Option<usize> {
        if pattern.is_empty() || from > self.0.len() || pattern.len() > self.0.len() - from {
            return None;
        }
        self.0[from..]
            .windows(pattern.len())
            .position(|window| window == pattern)
            .map(|pos| pos + from)
    }

    /// Returns whether `pattern` occurs as a contiguous subword.
    pub fn contains(&self, pattern: &[Symbol]) -> bool {
        self.find(pattern, 0).is_some()
    }
}

impl PartialOrd for Word {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Word {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}
