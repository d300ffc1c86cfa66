use cayley_core::{Symbol, Word};
use sha2::{Digest, Sha256};

use crate::rules::RuleSet;

/// Computes the canonical hash of a rule set.
///
/// The digest covers the alphabet, the identity character and every rule in
/// application order, so reordering rules changes the hash.
pub fn rules_hash(rules: &RuleSet) -> String {
    let mut hasher = Sha256::new();
    let alphabet = rules.alphabet();
    hasher.update(b"cayley-rules");
    hasher.update((alphabet.len() as u64).to_le_bytes());
    for generator in alphabet.generators() {
        hasher.update(u32::from(*generator).to_le_bytes());
    }
    hasher.update(u32::from(alphabet.identity()).to_le_bytes());
    hasher.update((rules.len() as u64).to_le_bytes());
    for rule in rules {
        update_word(rule.pattern(), &mut hasher);
        update_word(rule.replacement(), &mut hasher);
    }
    hex::encode(hasher.finalize())
}

/// Feeds a length-prefixed word into `hasher`.
pub fn update_word(word: &Word, hasher: &mut Sha256) {
    hasher.update((word.len() as u64).to_le_bytes());
    for symbol in word.as_slice() {
        hasher.update(symbol_code(*symbol).to_le_bytes());
    }
}

fn symbol_code(symbol: Symbol) -> u32 {
    match symbol {
        Symbol::Identity => 0,
        Symbol::Generator(idx) => u32::from(idx) + 1,
    }
}
