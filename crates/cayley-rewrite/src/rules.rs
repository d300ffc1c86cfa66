use cayley_core::{Alphabet, CayleyError, ErrorInfo, Word};
use serde::{Deserialize, Serialize};

/// Directed rule replacing every occurrence of `pattern` with `replacement`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RewriteRule {
    pattern: Word,
    replacement: Word,
}

impl RewriteRule {
    /// Creates a rule. Callers guarantee a non-empty pattern.
    pub(crate) fn new(pattern: Word, replacement: Word) -> Self {
        debug_assert!(!pattern.is_empty());
        Self {
            pattern,
            replacement,
        }
    }

    /// Left-hand side searched for in words.
    pub fn pattern(&self) -> &Word {
        &self.pattern
    }

    /// Right-hand side substituted for the pattern.
    pub fn replacement(&self) -> &Word {
        &self.replacement
    }

    /// Returns whether the pattern occurs somewhere in `word`.
    pub fn occurs_in(&self, word: &Word) -> bool {
        word.contains(self.pattern.as_slice())
    }

    /// Renders the rule as `pattern=replacement`.
    pub fn display(&self, alphabet: &Alphabet) -> String {
        format!(
            "{}={}",
            alphabet.spell(&self.pattern),
            alphabet.spell(&self.replacement)
        )
    }
}

/// Ordered rules derived from one presentation, plus the alphabet they are
/// written over.
///
/// Decoded rule sets are checked with [`RuleSet::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RuleSetPayload")]
pub struct RuleSet {
    alphabet: Alphabet,
    rules: Vec<RewriteRule>,
}

/// Unchecked wire form of a [`RuleSet`].
#[derive(Deserialize)]
pub(crate) struct RuleSetPayload {
    alphabet: AlphabetPayload,
    rules: Vec<RewriteRule>,
}

#[derive(Deserialize)]
struct AlphabetPayload {
    generators: Vec<char>,
    identity: char,
}

impl RuleSetPayload {
    /// Rebuilds the alphabet through its constructor and validates the rules.
    pub(crate) fn into_rules(self) -> Result<RuleSet, CayleyError> {
        let alphabet = Alphabet::new(self.alphabet.generators, self.alphabet.identity)?;
        let rules = RuleSet::new(alphabet, self.rules);
        rules.validate()?;
        Ok(rules)
    }
}

impl TryFrom<RuleSetPayload> for RuleSet {
    type Error = CayleyError;

    fn try_from(payload: RuleSetPayload) -> Result<Self, Self::Error> {
        payload.into_rules()
    }
}

impl RuleSet {
    pub(crate) fn new(alphabet: Alphabet, rules: Vec<RewriteRule>) -> Self {
        Self { alphabet, rules }
    }

    /// Checks that every pattern is non-empty and every symbol belongs to the
    /// alphabet.
    pub fn validate(&self) -> Result<(), CayleyError> {
        for (idx, rule) in self.rules.iter().enumerate() {
            if rule.pattern.is_empty() {
                return Err(CayleyError::Config(
                    ErrorInfo::new("empty-pattern", "rewrite rule has an empty pattern")
                        .with_context("rule", idx.to_string()),
                ));
            }
            let symbols = rule.pattern.as_slice().iter().chain(rule.replacement.as_slice());
            if let Some(stray) = symbols.copied().find(|&s| !self.alphabet.contains(s)) {
                return Err(CayleyError::Config(
                    ErrorInfo::new("unknown-symbol", "rule uses a symbol outside the alphabet")
                        .with_context("rule", idx.to_string())
                        .with_context("symbol", format!("{stray:?}")),
                ));
            }
        }
        Ok(())
    }

    /// Alphabet the rules are written over.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Rules in application order.
    pub fn rules(&self) -> &[RewriteRule] {
        &self.rules
    }

    /// Iterates over the rules in application order.
    pub fn iter(&self) -> std::slice::Iter<'_, RewriteRule> {
        self.rules.iter()
    }

    /// Number of rules, identity axioms included.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns whether the set holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules rendered as `pattern=replacement`, in order.
    pub fn describe(&self) -> Vec<String> {
        self.rules
            .iter()
            .map(|rule| rule.display(&self.alphabet))
            .collect()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a RewriteRule;
    type IntoIter = std::slice::Iter<'a, RewriteRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
