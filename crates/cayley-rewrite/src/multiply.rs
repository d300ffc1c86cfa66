use cayley_core::{CayleyError, ErrorInfo, Word};

use crate::rules::{RewriteRule, RuleSet};

/// Sweep budget used when the caller does not configure one.
pub const DEFAULT_MAX_SWEEPS: usize = 10_000;

/// Replaces every non-overlapping occurrence of the rule's pattern, scanning
/// left to right. Returns `None` when the pattern does not occur.
pub fn rewrite_all(word: &Word, rule: &RewriteRule) -> Option<Word> {
    let pattern = rule.pattern().as_slice();
    let symbols = word.as_slice();
    let mut at = word.find(pattern, 0)?;
    let mut out = Vec::with_capacity(symbols.len());
    let mut cursor = 0;
    loop {
        out.extend_from_slice(&symbols[cursor..at]);
        out.extend_from_slice(rule.replacement().as_slice());
        cursor = at + pattern.len();
        match word.find(pattern, cursor) {
            Some(next) => at = next,
            None => break,
        }
    }
    out.extend_from_slice(&symbols[cursor..]);
    Some(Word::new(out))
}

/// Rewrites words to a fixpoint of a rule set.
///
/// One sweep applies every rule in order, each to all of its occurrences.
/// Sweeps repeat until a whole sweep leaves the word unchanged. Confluence is
/// assumed; the sweep budget turns a non-terminating rule set into an error.
#[derive(Debug, Clone, Copy)]
pub struct Multiplier<'a> {
    rules: &'a RuleSet,
    max_sweeps: usize,
}

impl<'a> Multiplier<'a> {
    /// Creates a multiplier bounded by `max_sweeps` changing sweeps per word.
    pub fn new(rules: &'a RuleSet, max_sweeps: usize) -> Self {
        Self { rules, max_sweeps }
    }

    /// Rule set the multiplier rewrites with.
    pub fn rules(&self) -> &'a RuleSet {
        self.rules
    }

    /// Rewrites `word` until no rule applies.
    pub fn reduce(&self, word: &Word) -> Result<Word, CayleyError> {
        let mut current = word.clone();
        let mut sweeps = 0usize;
        loop {
            let before = current.clone();
            for rule in self.rules {
                if let Some(next) = rewrite_all(&current, rule) {
                    current = next;
                }
            }
            if current == before {
                return Ok(current);
            }
            sweeps += 1;
            if sweeps > self.max_sweeps {
                return Err(CayleyError::Resource(
                    ErrorInfo::new(
                        "rewrite-budget-exhausted",
                        "rewriting did not reach a fixpoint",
                    )
                    .with_context("sweeps", sweeps.to_string())
                    .with_context("word", self.rules.alphabet().spell(word))
                    .with_hint("the relations may not form a terminating rule set"),
                ));
            }
        }
    }

    /// Canonical representative of the product `a * b`.
    pub fn multiply(&self, a: &Word, b: &Word) -> Result<Word, CayleyError> {
        self.reduce(&a.concat(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize;
    use cayley_core::Alphabet;

    #[test]
    fn rewrite_all_replaces_every_occurrence() {
        let alphabet = Alphabet::new(['a', 'b'], 'e').unwrap();
        let rules = normalize(&alphabet, &["ba=ab"], false).unwrap();
        let word = alphabet.read("babba").unwrap();
        let rewritten = rewrite_all(&word, &rules.rules()[0]).unwrap();
        assert_eq!(alphabet.spell(&rewritten), "abbab");
        assert!(rewrite_all(&alphabet.read("aabb").unwrap(), &rules.rules()[0]).is_none());
    }

    #[test]
    fn occurrences_do_not_overlap() {
        let alphabet = Alphabet::new(['a'], 'e').unwrap();
        let rules = normalize(&alphabet, &["aa=e"], false).unwrap();
        let rewritten = rewrite_all(&alphabet.read("aaa").unwrap(), &rules.rules()[0]).unwrap();
        assert_eq!(alphabet.spell(&rewritten), "ea");
    }

    #[test]
    fn sweep_that_returns_to_its_start_is_a_fixpoint() {
        let alphabet = Alphabet::new(['a', 'b'], 'e').unwrap();
        let rules = RuleSet::new(
            alphabet.clone(),
            vec![
                RewriteRule::new(alphabet.read("a").unwrap(), alphabet.read("b").unwrap()),
                RewriteRule::new(alphabet.read("b").unwrap(), alphabet.read("a").unwrap()),
            ],
        );
        let word = alphabet.read("a").unwrap();
        assert_eq!(Multiplier::new(&rules, 8).reduce(&word).unwrap(), word);
    }

    #[test]
    fn growing_rule_hits_budget() {
        let alphabet = Alphabet::new(['a', 'b'], 'e').unwrap();
        let rules = RuleSet::new(
            alphabet.clone(),
            vec![RewriteRule::new(
                alphabet.read("a").unwrap(),
                alphabet.read("ab").unwrap(),
            )],
        );
        let err = Multiplier::new(&rules, 8)
            .reduce(&alphabet.read("a").unwrap())
            .unwrap_err();
        assert_eq!(err.info().code, "rewrite-budget-exhausted");
    }
}
