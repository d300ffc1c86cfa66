use cayley_core::CayleyError;
use cayley_group::{verify, Group, GroupConfig, SaturationPolicy, VerifyOptions};

#[test]
fn complete_presentations_pass() -> Result<(), CayleyError> {
    let s3 = Group::from_presentation(
        "<r,s|r^3=e,s^2=e,rrs=sr,srr=rs,srs=rr,rsr=s>",
        GroupConfig::default(),
    )?;
    let report = verify(&s3, &VerifyOptions::default())?;
    assert!(report.passed());
    assert_eq!(report.order, 6);
    assert_eq!(report.associativity_checked, 216);
    assert!(!report.commutative);
    assert!(report.counterexamples.is_empty());
    Ok(())
}

#[test]
fn large_groups_are_sampled() -> Result<(), CayleyError> {
    let config = GroupConfig {
        abelian: true,
        ..GroupConfig::default()
    };
    let group = Group::from_presentation("<a,b|a^3=e,b^4=e>", config)?;
    assert_eq!(group.order(), 12);
    let opts = VerifyOptions {
        associativity_samples: 100,
        seed: 7,
    };
    let first = verify(&group, &opts)?;
    assert_eq!(first.associativity_checked, 100);
    assert!(first.passed());
    assert!(first.commutative && first.abelian_requested);
    assert_eq!(first, verify(&group, &opts)?);
    Ok(())
}

#[test]
fn incomplete_rules_are_caught() -> Result<(), CayleyError> {
    let config = GroupConfig {
        word_length_limit: 4,
        saturation: SaturationPolicy::Ignore,
        ..GroupConfig::default()
    };
    let group = Group::from_presentation("<r,s|r^3=e,s^2=e,sr=rrs>", config)?;
    let report = verify(&group, &VerifyOptions::default())?;
    assert!(report.saturated);
    assert!(!report.closed);
    assert!(!report.passed());
    Ok(())
}
