use cayley_core::{Alphabet, CayleyError, Symbol, Word};

use crate::relation::Relation;
use crate::rules::{RewriteRule, RuleSet};

/// Turns raw `word=word` relations into an ordered rule set.
///
/// With `abelian` set, a commutation relation `ba=ab` is appended for every
/// pair of generators `a` before `b`. Each relation is stripped of its common
/// prefix and suffix and oriented so the shortlex-larger side becomes the
/// pattern. The identity axioms `ee=e`, `xe=x` and `ex=x` close the set.
#[tracing::instrument(
    skip_all,
    fields(generators = alphabet.len(), relations = relations.len(), abelian = abelian)
)]
pub fn normalize<S: AsRef<str>>(
    alphabet: &Alphabet,
    relations: &[S],
    abelian: bool,
) -> Result<RuleSet, CayleyError> {
    let mut parsed = relations
        .iter()
        .map(|text| Relation::parse(alphabet, text.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    if abelian {
        let generators: Vec<Symbol> = alphabet.symbols().collect();
        for (idx, &a) in generators.iter().enumerate() {
            for &b in &generators[idx + 1..] {
                parsed.push(Relation::commutator(a, b));
            }
        }
    }

    let mut rules = Vec::with_capacity(parsed.len() + 1 + 2 * alphabet.len());
    for relation in &parsed {
        match orient(relation) {
            Some(rule) => rules.push(rule),
            None => {
                let text = format!(
                    "{}={}",
                    alphabet.spell(&relation.lhs),
                    alphabet.spell(&relation.rhs)
                );
                tracing::warn!(relation = %text, "skipping relation whose sides are equal");
            }
        }
    }

    rules.push(RewriteRule::new(
        Word::new(vec![Symbol::Identity, Symbol::Identity]),
        Word::identity(),
    ));
    for generator in alphabet.symbols() {
        rules.push(RewriteRule::new(
            Word::new(vec![generator, Symbol::Identity]),
            Word::new(vec![generator]),
        ));
        rules.push(RewriteRule::new(
            Word::new(vec![Symbol::Identity, generator]),
            Word::new(vec![generator]),
        ));
    }

    tracing::debug!(rules = rules.len(), "normalised relations");
    Ok(RuleSet::new(alphabet.clone(), rules))
}

/// Strips the shared prefix and suffix of a relation and orients it.
///
/// Returns `None` for relations whose sides coincide.
pub fn orient(relation: &Relation) -> Option<RewriteRule> {
    if relation.is_trivial() {
        return None;
    }
    let (lhs, rhs) = strip_common(relation.lhs.as_slice(), relation.rhs.as_slice());
    let lhs = or_identity(lhs);
    let rhs = or_identity(rhs);
    if lhs < rhs {
        Some(RewriteRule::new(rhs, lhs))
    } else {
        Some(RewriteRule::new(lhs, rhs))
    }
}

fn strip_common<'a>(lhs: &'a [Symbol], rhs: &'a [Symbol]) -> (&'a [Symbol], &'a [Symbol]) {
    let prefix = lhs.iter().zip(rhs).take_while(|(l, r)| l == r).count();
    let (lhs, rhs) = (&lhs[prefix..], &rhs[prefix..]);
    let suffix = lhs
        .iter()
        .rev()
        .zip(rhs.iter().rev())
        .take_while(|(l, r)| l == r)
        .count();
    (&lhs[..lhs.len() - suffix], &rhs[..rhs.len() - suffix])
}

fn or_identity(symbols: &[Symbol]) -> Word {
    if symbols.is_empty() {
        Word::identity()
    } else {
        Word::new(symbols.to_vec())
    }
}
