use cayley_core::{Alphabet, Symbol, Word};
use cayley_rewrite::{is_canonical, normalize, Multiplier, RuleSet, DEFAULT_MAX_SWEEPS};
use proptest::prelude::*;

fn dihedral_rules() -> RuleSet {
    let alphabet = Alphabet::new(['r', 's'], 'e').unwrap();
    normalize(&alphabet, &["r^3=e", "s^2=e", "sr=rrs"], false).unwrap()
}

fn klein_rules() -> RuleSet {
    let alphabet = Alphabet::new(['a', 'b'], 'e').unwrap();
    normalize(&alphabet, &["a^2=e", "b^2=e", "ab=ba"], false).unwrap()
}

fn word_strategy(generators: u16) -> impl Strategy<Value = Word> {
    prop::collection::vec(0..generators, 0..12)
        .prop_map(|raw| Word::new(raw.into_iter().map(Symbol::Generator).collect()))
}

#[test]
fn klein_products_collapse_to_identity() {
    let rules = klein_rules();
    let alphabet = rules.alphabet();
    let multiplier = Multiplier::new(&rules, DEFAULT_MAX_SWEEPS);
    let ab = alphabet.read("ab").unwrap();
    assert!(multiplier.multiply(&ab, &ab).unwrap().is_identity());
    let product = multiplier
        .multiply(&alphabet.read("b").unwrap(), &alphabet.read("a").unwrap())
        .unwrap();
    assert_eq!(alphabet.spell(&product), "ab");
}

#[test]
fn identity_factors_are_absorbed() {
    let rules = klein_rules();
    let multiplier = Multiplier::new(&rules, DEFAULT_MAX_SWEEPS);
    let a = Word::generator(0);
    assert_eq!(multiplier.multiply(&a, &Word::identity()).unwrap(), a);
    assert_eq!(multiplier.multiply(&Word::identity(), &a).unwrap(), a);
    assert_eq!(
        multiplier.multiply(&Word::identity(), &Word::identity()).unwrap(),
        Word::identity()
    );
}

proptest! {
    #[test]
    fn fixpoint_is_canonical_and_idempotent(word in word_strategy(2)) {
        let rules = dihedral_rules();
        let multiplier = Multiplier::new(&rules, DEFAULT_MAX_SWEEPS);
        let reduced = multiplier.reduce(&word).unwrap();
        prop_assert!(is_canonical(&reduced, &rules));
        prop_assert_eq!(multiplier.reduce(&reduced).unwrap(), reduced.clone());
        prop_assert!(reduced.len() <= word.len().max(1));
    }

    #[test]
    fn klein_reduction_is_associative(a in word_strategy(2), b in word_strategy(2), c in word_strategy(2)) {
        let rules = klein_rules();
        let multiplier = Multiplier::new(&rules, DEFAULT_MAX_SWEEPS);
        let left = multiplier.multiply(&multiplier.multiply(&a, &b).unwrap(), &c).unwrap();
        let right = multiplier.multiply(&a, &multiplier.multiply(&b, &c).unwrap()).unwrap();
        prop_assert_eq!(left, right);
    }
}
