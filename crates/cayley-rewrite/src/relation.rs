use cayley_core::{Alphabet, CayleyError, ErrorInfo, Symbol, Word};

/// Unoriented equation `lhs = rhs` between two words over an alphabet.
///
/// Identity symbols are dropped while reading since they are neutral, so a
/// side written as `e` (or emptied by `x^0`) is the empty word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    /// Left side as written.
    pub lhs: Word,
    /// Right side as written.
    pub rhs: Word,
}

impl Relation {
    /// Reads a relation of the form `word=word`.
    pub fn parse(alphabet: &Alphabet, text: &str) -> Result<Self, CayleyError> {
        let mut sides = text.split('=');
        let (lhs, rhs) = match (sides.next(), sides.next(), sides.next()) {
            (Some(lhs), Some(rhs), None) => (lhs, rhs),
            (_, None, _) => {
                return Err(CayleyError::Config(
                    ErrorInfo::new("missing-equals", "relation has no '='")
                        .with_context("relation", text)
                        .with_hint("write relations as word=word"),
                ))
            }
            _ => {
                return Err(CayleyError::Config(
                    ErrorInfo::new("multiple-equals", "relation has more than one '='")
                        .with_context("relation", text),
                ))
            }
        };
        for side in [lhs, rhs] {
            if side.trim().is_empty() {
                return Err(CayleyError::Config(
                    ErrorInfo::new("empty-side", "relation side is empty")
                        .with_context("relation", text)
                        .with_hint(format!("write the identity as '{}'", alphabet.identity())),
                ));
            }
        }
        Ok(Self {
            lhs: expand_powers(alphabet, lhs)?,
            rhs: expand_powers(alphabet, rhs)?,
        })
    }

    /// Commutation relation `ba = ab` for two generators.
    pub fn commutator(a: Symbol, b: Symbol) -> Self {
        Self {
            lhs: Word::new(vec![b, a]),
            rhs: Word::new(vec![a, b]),
        }
    }

    /// Returns whether both sides are the same word.
    pub fn is_trivial(&self) -> bool {
        self.lhs == self.rhs
    }
}

/// Reads one side of a relation, expanding `x^n` and `xn` into `n` copies of
/// `x`.
///
/// Only single-digit exponents are accepted. A digit equal to the identity
/// character reads as the identity.
pub fn expand_powers(alphabet: &Alphabet, text: &str) -> Result<Word, CayleyError> {
    let mut symbols = Vec::new();
    let mut base: Option<Symbol> = None;
    let mut chars = text.chars().filter(|c| !c.is_whitespace());
    while let Some(c) = chars.next() {
        let exponent = if c == '^' {
            match chars.next().and_then(|d| d.to_digit(10)) {
                Some(n) => n,
                None => return Err(bad_exponent(text, "'^' must be followed by a digit")),
            }
        } else if let Some(symbol) = alphabet.symbol(c) {
            if !symbol.is_identity() {
                symbols.push(symbol);
            }
            base = Some(symbol);
            continue;
        } else if let Some(n) = c.to_digit(10) {
            n
        } else {
            return Err(CayleyError::Config(
                ErrorInfo::new("unknown-symbol", "character is not part of the alphabet")
                    .with_context("symbol", c.to_string())
                    .with_context("word", text),
            ));
        };

        match base.take() {
            Some(Symbol::Identity) => {}
            Some(generator) => {
                // one copy was pushed when the base was read
                if exponent == 0 {
                    symbols.pop();
                } else {
                    symbols.extend(std::iter::repeat(generator).take(exponent as usize - 1));
                }
            }
            None => {
                return Err(bad_exponent(
                    text,
                    "exponent must follow a generator and be a single digit",
                ))
            }
        }
    }
    Ok(Word::new(symbols))
}

fn bad_exponent(text: &str, message: &str) -> CayleyError {
    CayleyError::Config(ErrorInfo::new("bad-exponent", message).with_context("word", text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alphabet() -> Alphabet {
        Alphabet::new(['a', 'b'], 'e').unwrap()
    }

    #[test]
    fn caret_and_suffix_forms_agree() {
        let alphabet = alphabet();
        let caret = expand_powers(&alphabet, "a^3b").unwrap();
        let suffix = expand_powers(&alphabet, "a3b").unwrap();
        assert_eq!(caret, suffix);
        assert_eq!(alphabet.spell(&caret), "aaab");
    }

    #[test]
    fn zero_exponent_removes_base() {
        let alphabet = alphabet();
        assert_eq!(expand_powers(&alphabet, "ab^0a").unwrap(), alphabet.read("aa").unwrap());
    }

    #[test]
    fn identity_is_dropped() {
        let alphabet = alphabet();
        assert!(expand_powers(&alphabet, "e").unwrap().is_empty());
        assert_eq!(expand_powers(&alphabet, "aeb").unwrap(), alphabet.read("ab").unwrap());
    }

    #[test]
    fn digit_identity_is_not_an_exponent() {
        let alphabet = Alphabet::new(['i'], '1').unwrap();
        assert!(expand_powers(&alphabet, "1").unwrap().is_empty());
        assert_eq!(expand_powers(&alphabet, "i^4").unwrap().len(), 4);
    }

    #[test]
    fn rejects_dangling_and_multi_digit_exponents() {
        let alphabet = alphabet();
        for text in ["^2", "2a", "a^", "a^b", "a^12", "a23"] {
            let err = expand_powers(&alphabet, text).unwrap_err();
            assert_eq!(err.info().code, "bad-exponent", "{text}");
        }
    }

    #[test]
    fn relation_shape_errors() {
        let alphabet = alphabet();
        assert_eq!(Relation::parse(&alphabet, "ab").unwrap_err().info().code, "missing-equals");
        assert_eq!(Relation::parse(&alphabet, "a=b=a").unwrap_err().info().code, "multiple-equals");
        assert_eq!(Relation::parse(&alphabet, "a=").unwrap_err().info().code, "empty-side");
    }
}
