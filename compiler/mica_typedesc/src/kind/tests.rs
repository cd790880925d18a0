use super::*;
use mica_ir::{ClassDecl, Decl, Param, Qual, Unit};
use pretty_assertions::assert_eq;

fn unit_with_class(is_interface: bool) -> (Unit, TypeId) {
    let mut unit = Unit::new();
    let m = unit.modules.add(unit.strings.intern("app.main"), None, true);
    let name = unit.strings.intern(if is_interface { "Reader" } else { "File" });
    let decl = unit.decls.add(Decl::Class(ClassDecl {
        name,
        module: m,
        is_interface,
    }));
    let ty = unit.pool.class_of(decl);
    (unit, ty)
}

#[test]
fn structural_categories_map_one_to_one() {
    let mut unit = Unit::new();
    let ptr = unit.pool.pointer(TypeId::I32);
    let arr = unit.pool.dyn_array(TypeId::I32);
    let fixed = unit.pool.static_array(TypeId::I32, 8);
    let aa = unit.pool.assoc_array(TypeId::I32, TypeId::F64);
    let vec4 = unit.pool.vector(TypeId::F32, 4);
    let f = unit.pool.function(&[], TypeId::VOID);
    let dg = unit.pool.delegate(f);
    let tup = unit.pool.tuple(&[Param {
        ty: TypeId::I32,
        name: None,
    }]);

    assert_eq!(dispatch(&unit.pool, &unit.decls, TypeId::I32), DescKind::Basic);
    assert_eq!(dispatch(&unit.pool, &unit.decls, ptr), DescKind::Pointer);
    assert_eq!(dispatch(&unit.pool, &unit.decls, arr), DescKind::DynArray);
    assert_eq!(dispatch(&unit.pool, &unit.decls, fixed), DescKind::StaticArray);
    assert_eq!(dispatch(&unit.pool, &unit.decls, aa), DescKind::AssocArray);
    assert_eq!(dispatch(&unit.pool, &unit.decls, vec4), DescKind::Vector);
    assert_eq!(dispatch(&unit.pool, &unit.decls, f), DescKind::Function);
    assert_eq!(dispatch(&unit.pool, &unit.decls, dg), DescKind::Delegate);
    assert_eq!(dispatch(&unit.pool, &unit.decls, tup), DescKind::Tuple);
}

#[test]
fn concrete_classes_and_interfaces_split() {
    let (unit, class_ty) = unit_with_class(false);
    assert_eq!(dispatch(&unit.pool, &unit.decls, class_ty), DescKind::Class);

    let (unit, iface_ty) = unit_with_class(true);
    assert_eq!(
        dispatch(&unit.pool, &unit.decls, iface_ty),
        DescKind::Interface
    );
}

#[test]
fn dispatch_ignores_qualifiers() {
    let mut unit = Unit::new();
    let const_int = unit.pool.with_qual(TypeId::I32, Qual::CONST);
    assert_eq!(
        dispatch(&unit.pool, &unit.decls, const_int),
        DescKind::Basic
    );
}

#[test]
fn wrapper_lookup_matches_qualifier_class() {
    use mica_ir::QualClass;
    assert_eq!(DescKind::wrapper(QualClass::Shared), DescKind::Shared);
    assert_eq!(DescKind::wrapper(QualClass::Const), DescKind::Const);
    assert_eq!(DescKind::wrapper(QualClass::Immutable), DescKind::Immutable);
    assert_eq!(DescKind::wrapper(QualClass::Wild), DescKind::Wild);
    assert!(DescKind::Shared.is_wrapper());
    assert!(!DescKind::Struct.is_wrapper());
}

#[test]
fn every_specialized_kind_names_a_runtime_class() {
    for kind in DescKind::ALL {
        match kind {
            DescKind::Basic => assert_eq!(kind.runtime_class_name(), None),
            _ => assert!(kind.runtime_class_name().is_some()),
        }
    }
}
