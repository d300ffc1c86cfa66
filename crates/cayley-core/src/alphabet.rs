use serde::{Deserialize, Serialize};

use crate::errors::{CayleyError, ErrorInfo};
use crate::word::{Symbol, Word};
use crate::RESERVED_CHARS;

/// Ordered set of generator characters plus the identity character.
///
/// Deserialisation goes through [`Alphabet::new`], so a decoded alphabet is
/// always valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawAlphabet")]
pub struct Alphabet {
    generators: Vec<char>,
    identity: char,
}

#[derive(Deserialize)]
struct RawAlphabet {
    generators: Vec<char>,
    identity: char,
}

impl TryFrom<RawAlphabet> for Alphabet {
    type Error = CayleyError;

    fn try_from(raw: RawAlphabet) -> Result<Self, Self::Error> {
        Alphabet::new(raw.generators, raw.identity)
    }
}

impl Alphabet {
    /// Validates and builds an alphabet.
    ///
    /// Fails when the alphabet is empty, repeats a generator, uses a reserved
    /// character or a digit as a generator, or contains the identity
    /// character.
    pub fn new(
        generators: impl IntoIterator<Item = char>,
        identity: char,
    ) -> Result<Self, CayleyError> {
        let generators: Vec<char> = generators.into_iter().collect();
        if generators.is_empty() {
            return Err(CayleyError::Config(
                ErrorInfo::new("empty-alphabet", "a presentation needs at least one generator")
                    .with_hint("declare generators as <a,b|...>"),
            ));
        }
        if generators.len() > usize::from(u16::MAX) {
            return Err(CayleyError::Config(
                ErrorInfo::new("alphabet-too-large", "too many generators")
                    .with_context("generators", generators.len().to_string()),
            ));
        }
        if identity.is_whitespace() || RESERVED_CHARS.contains(&identity) {
            return Err(CayleyError::Config(
                ErrorInfo::new("reserved-symbol", "identity character has a syntactic role")
                    .with_context("identity", identity.to_string()),
            ));
        }
        for (idx, &generator) in generators.iter().enumerate() {
            if generator == identity {
                return Err(CayleyError::Config(
                    ErrorInfo::new("identity-collision", "generator uses the identity character")
                        .with_context("symbol", generator.to_string())
                        .with_hint("pick a different identity character"),
                ));
            }
            if generator.is_whitespace()
                || generator.is_ascii_digit()
                || RESERVED_CHARS.contains(&generator)
            {
                return Err(CayleyError::Config(
                    ErrorInfo::new("reserved-symbol", "generator character has a syntactic role")
                        .with_context("symbol", generator.to_string()),
                ));
            }
            if generators[..idx].contains(&generator) {
                return Err(CayleyError::Config(
                    ErrorInfo::new("duplicate-generator", "generator declared twice")
                        .with_context("symbol", generator.to_string()),
                ));
            }
        }
        Ok(Self {
            generators,
            identity,
        })
    }

    /// Generator characters in declaration order.
    pub fn generators(&self) -> &[char] {
        &self.generators
    }

    /// Character displayed for the identity.
    pub fn identity(&self) -> char {
        self.identity
    }

    /// Number of generators.
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    /// Always false for a validated alphabet.
    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Generator symbols in alphabet order.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        (0..self.generators.len()).map(|idx| Symbol::Generator(idx as u16))
    }

    /// Returns whether `symbol` is the identity or a generator of this
    /// alphabet.
    pub fn contains(&self, symbol: Symbol) -> bool {
        match symbol {
            Symbol::Identity => true,
            Symbol::Generator(idx) => usize::from(idx) < self.generators.len(),
        }
    }

    /// Maps a character to its symbol, if it belongs to the alphabet.
    pub fn symbol(&self, c: char) -> Option<Symbol> {
        if c == self.identity {
            return Some(Symbol::Identity);
        }
        self.generators
            .iter()
            .position(|&g| g == c)
            .map(|idx| Symbol::Generator(idx as u16))
    }

    /// Returns the display character of a symbol.
    ///
    /// Generator indices outside the alphabet render as `?`.
    pub fn char_of(&self, symbol: Symbol) -> char {
        match symbol {
            Symbol::Identity => self.identity,
            Symbol::Generator(idx) => self
                .generators
                .get(usize::from(idx))
                .copied()
                .unwrap_or('?'),
        }
    }

    /// Renders a word letter by letter; the empty word renders as the identity.
    pub fn spell(&self, word: &Word) -> String {
        if word.is_empty() {
            return self.identity.to_string();
        }
        word.as_slice().iter().map(|&s| self.char_of(s)).collect()
    }

    /// Reads a plain word (no exponents) letter by letter.
    pub fn read(&self, text: &str) -> Result<Word, CayleyError> {
        text.chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| {
                self.symbol(c).ok_or_else(|| {
                    CayleyError::Config(
                        ErrorInfo::new("unknown-symbol", "character is not part of the alphabet")
                            .with_context("symbol", c.to_string())
                            .with_context("word", text),
                    )
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Word::new)
    }
}
