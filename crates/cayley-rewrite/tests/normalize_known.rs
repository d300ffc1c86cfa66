use cayley_core::{Alphabet, CayleyError};
use cayley_rewrite::serde_io::{rules_from_json, rules_to_json};
use cayley_rewrite::{normalize, rules_hash};

#[test]
fn klein_presentation_rules() -> Result<(), CayleyError> {
    let alphabet = Alphabet::new(['a', 'b'], 'e')?;
    let rules = normalize(&alphabet, &["a^2=e", "b^2=e", "ab=ba"], false)?;
    assert_eq!(
        rules.describe(),
        vec!["aa=e", "bb=e", "ba=ab", "ee=e", "ae=a", "ea=a", "be=b", "eb=b"]
    );
    Ok(())
}

#[test]
fn abelian_flag_appends_commutators_in_alphabet_order() -> Result<(), CayleyError> {
    let alphabet = Alphabet::new(['x', 'y', 'z'], 'e')?;
    let rules = normalize(&alphabet, &["x2=e"], true)?;
    let described = rules.describe();
    assert_eq!(&described[..4], &["xx=e", "yx=xy", "zx=xz", "zy=yz"]);
    assert_eq!(rules.len(), 4 + 1 + 2 * 3);
    Ok(())
}

#[test]
fn every_rule_has_a_pattern_no_shorter_than_its_replacement() -> Result<(), CayleyError> {
    let alphabet = Alphabet::new(['r', 's'], 'e')?;
    let rules = normalize(&alphabet, &["r^3=e", "s^2=e", "sr=rrs", "s=rsr"], false)?;
    for rule in &rules {
        assert!(!rule.pattern().is_empty());
        assert!(rule.replacement().len() <= rule.pattern().len());
    }
    Ok(())
}

#[test]
fn malformed_relation_fails_before_search() {
    let alphabet = Alphabet::new(['a'], 'e').unwrap();
    let err = normalize(&alphabet, &["aa"], false).unwrap_err();
    assert!(matches!(err, CayleyError::Config(info) if info.code == "missing-equals"));
    let err = normalize(&alphabet, &["ab=e"], false).unwrap_err();
    assert_eq!(err.info().code, "unknown-symbol");
}

#[test]
fn hash_is_stable_and_order_sensitive() -> Result<(), CayleyError> {
    let alphabet = Alphabet::new(['a', 'b'], 'e')?;
    let first = normalize(&alphabet, &["aa=e", "bb=e"], false)?;
    let again = normalize(&alphabet, &["aa=e", "bb=e"], false)?;
    let swapped = normalize(&alphabet, &["bb=e", "aa=e"], false)?;
    assert_eq!(rules_hash(&first), rules_hash(&again));
    assert_ne!(rules_hash(&first), rules_hash(&swapped));
    assert_eq!(rules_hash(&first).len(), 64);
    Ok(())
}

#[test]
fn json_roundtrip_preserves_rules() -> Result<(), CayleyError> {
    let alphabet = Alphabet::new(['a', 'b'], 'e')?;
    let rules = normalize(&alphabet, &["aa=e", "bab=a"], true)?;
    let restored = rules_from_json(&rules_to_json(&rules)?)?;
    assert_eq!(restored, rules);
    assert_eq!(rules_hash(&restored), rules_hash(&rules));
    Ok(())
}

#[test]
fn json_rules_with_an_empty_pattern_are_rejected() {
    let json = r#"{"alphabet":{"generators":["a"],"identity":"e"},
        "rules":[{"pattern":[],"replacement":["Identity"]}]}"#;
    let err = rules_from_json(json).unwrap_err();
    assert!(matches!(err, CayleyError::Config(ref info) if info.code == "empty-pattern"));
}

#[test]
fn json_rules_with_out_of_range_generators_are_rejected() {
    let json = r#"{"alphabet":{"generators":["a"],"identity":"e"},
        "rules":[{"pattern":[{"Generator":3}],"replacement":["Identity"]}]}"#;
    let err = rules_from_json(json).unwrap_err();
    assert!(matches!(err, CayleyError::Config(ref info) if info.code == "unknown-symbol"));
}

#[test]
fn json_rules_over_an_invalid_alphabet_are_rejected() {
    let colliding = r#"{"alphabet":{"generators":["e","e"],"identity":"e"},"rules":[]}"#;
    let err = rules_from_json(colliding).unwrap_err();
    assert_eq!(err.info().code, "identity-collision");

    let digit = r#"{"alphabet":{"generators":["a","2"],"identity":"e"},"rules":[]}"#;
    assert_eq!(rules_from_json(digit).unwrap_err().info().code, "reserved-symbol");

    let malformed = rules_from_json("{\"alphabet\":").unwrap_err();
    assert!(matches!(malformed, CayleyError::Serde(ref info) if info.code == "rules-deserialize"));
}

#[test]
fn serde_decoding_of_rule_sets_validates_too() {
    let json = r#"{"alphabet":{"generators":["a"],"identity":"e"},
        "rules":[{"pattern":[],"replacement":["Identity"]}]}"#;
    assert!(serde_json::from_str::<cayley_rewrite::RuleSet>(json).is_err());
}
