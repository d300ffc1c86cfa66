use std::collections::BTreeSet;

use cayley_core::{CayleyError, ErrorInfo, Symbol, Word};
use cayley_rewrite::{ends_in_redex, RuleSet};

/// Bounds applied to the element search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Longest word kept.
    pub word_length_limit: usize,
    /// Maximum number of visited nodes before giving up.
    pub max_search_nodes: usize,
}

/// Outcome of the bounded search for canonical words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumeration {
    /// Canonical words in shortlex order, the identity word first.
    pub elements: Vec<Word>,
    /// True when a canonical word longer than the limit exists, so the
    /// element list is likely truncated.
    pub saturated: bool,
    /// Number of search nodes visited.
    pub visited: usize,
}

/// Collects every canonical word up to the length limit.
///
/// Depth-first over the free monoid on the generators, appending one
/// generator at a time in alphabet order. A branch is cut as soon as the
/// extended word contains a rule pattern, since no extension of it can be
/// canonical again. Every word on the stack is canonical, so only patterns
/// ending at the new letter need checking.
#[tracing::instrument(skip_all, fields(limit = limits.word_length_limit))]
pub fn enumerate(rules: &RuleSet, limits: &SearchLimits) -> Result<Enumeration, CayleyError> {
    let letters: Vec<Symbol> = rules.alphabet().symbols().collect();
    let mut found: BTreeSet<Word> = BTreeSet::new();
    let mut stack = vec![Word::empty()];
    let mut visited = 0usize;
    let mut saturated = false;

    while let Some(word) = stack.pop() {
        visited += 1;
        if visited > limits.max_search_nodes {
            return Err(CayleyError::Resource(
                ErrorInfo::new("search-budget-exhausted", "element search visited too many words")
                    .with_context("visited", visited.to_string())
                    .with_context("found", found.len().to_string())
                    .with_hint("lower word_length_limit or raise max_search_nodes"),
            ));
        }
        // reversed so the first letter is explored first
        for &letter in letters.iter().rev() {
            let child = word.extended(letter);
            if ends_in_redex(&child, rules) {
                continue;
            }
            if child.len() > limits.word_length_limit {
                saturated = true;
                continue;
            }
            stack.push(child);
        }
        found.insert(word);
    }

    let mut elements: Vec<Word> = found.into_iter().collect();
    if let Some(first) = elements.first_mut() {
        *first = Word::identity();
    }
    tracing::debug!(elements = elements.len(), visited, saturated, "enumerated canonical words");
    Ok(Enumeration {
        elements,
        saturated,
        visited,
    })
}
