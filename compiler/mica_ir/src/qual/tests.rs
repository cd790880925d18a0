use super::*;
use pretty_assertions::assert_eq;

#[test]
fn unqualified_has_no_outermost() {
    assert_eq!(Qual::empty().outermost(), None);
}

#[test]
fn single_bits_resolve_to_their_own_class() {
    assert_eq!(Qual::CONST.outermost(), Some(QualClass::Const));
    assert_eq!(Qual::IMMUTABLE.outermost(), Some(QualClass::Immutable));
    assert_eq!(Qual::SHARED.outermost(), Some(QualClass::Shared));
    assert_eq!(Qual::WILD.outermost(), Some(QualClass::Wild));
}

#[test]
fn shared_const_collapses_to_shared() {
    let q = Qual::SHARED | Qual::CONST;
    assert_eq!(q.outermost(), Some(QualClass::Shared));
}

#[test]
fn shared_wins_over_every_other_bit() {
    assert_eq!(
        (Qual::SHARED | Qual::IMMUTABLE).outermost(),
        Some(QualClass::Shared)
    );
    assert_eq!(
        (Qual::SHARED | Qual::WILD).outermost(),
        Some(QualClass::Shared)
    );
}

#[test]
fn const_wins_over_immutable_and_wild() {
    assert_eq!(
        (Qual::CONST | Qual::IMMUTABLE).outermost(),
        Some(QualClass::Const)
    );
    assert_eq!(
        (Qual::CONST | Qual::WILD).outermost(),
        Some(QualClass::Const)
    );
}
