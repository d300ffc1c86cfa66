use cayley_group::{Group, GroupConfig};
use proptest::prelude::*;

fn klein() -> Group {
    Group::from_presentation("<a,b|a^2=e,b^2=e,ab=ba>", GroupConfig::default()).unwrap()
}

fn s3() -> Group {
    Group::from_presentation(
        "<r,s|r^3=e,s^2=e,rrs=sr,srr=rs,srs=rr,rsr=s>",
        GroupConfig::default(),
    )
    .unwrap()
}

fn z2_z4() -> Group {
    let config = GroupConfig {
        abelian: true,
        ..GroupConfig::default()
    };
    Group::from_presentation("<x,y|x^2=e,y^4=e>", config).unwrap()
}

fn check_identity_and_closure(group: &Group) {
    let identity = group.identity().clone();
    for (i, element) in group.elements().iter().enumerate() {
        assert_eq!(&group.multiply(element, &identity).unwrap(), element);
        assert_eq!(&group.multiply(&identity, element).unwrap(), element);
        for j in 0..group.order() {
            assert!(group.index_of(group.product(i, j).unwrap()).is_some());
        }
    }
}

#[test]
fn identity_law_and_closure_hold() {
    for group in [klein(), s3(), z2_z4()] {
        check_identity_and_closure(&group);
    }
}

#[test]
fn abelian_presentations_give_symmetric_tables() {
    let group = z2_z4();
    assert_eq!(group.order(), 8);
    let table = group.table();
    for i in 0..group.order() {
        for j in 0..group.order() {
            assert_eq!(table[i][j], table[j][i]);
        }
    }
}

#[test]
fn enumeration_is_deterministic() {
    let first = s3();
    let second = s3();
    assert_eq!(first.elements(), second.elements());
    assert_eq!(first.table(), second.table());
}

proptest! {
    #[test]
    fn products_are_associative(a in 0usize..6, b in 0usize..6, c in 0usize..6) {
        let group = s3();
        let el = group.elements();
        let left = group.multiply(&group.multiply(&el[a], &el[b]).unwrap(), &el[c]).unwrap();
        let right = group.multiply(&el[a], &group.multiply(&el[b], &el[c]).unwrap()).unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn abelian_products_commute(a in 0usize..8, b in 0usize..8) {
        let group = z2_z4();
        prop_assert_eq!(group.product(a, b), group.product(b, a));
    }
}
