use cayley_core::Word;

use crate::rules::RuleSet;

/// A word is canonical when no rule pattern occurs in it.
pub fn is_canonical(word: &Word, rules: &RuleSet) -> bool {
    rules.iter().all(|rule| !rule.occurs_in(word))
}

/// A word is reducible as soon as any rule pattern occurs in it. No extension
/// of a reducible word can be canonical again.
pub fn is_reducible(word: &Word, rules: &RuleSet) -> bool {
    !is_canonical(word, rules)
}

/// Checks only the patterns that end at the last symbol of `word`.
///
/// For a word built by appending one symbol to a canonical word this decides
/// reducibility exactly, without rescanning the untouched prefix.
pub fn ends_in_redex(word: &Word, rules: &RuleSet) -> bool {
    let symbols = word.as_slice();
    rules
        .iter()
        .any(|rule| symbols.ends_with(rule.pattern().as_slice()))
}
