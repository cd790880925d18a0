use super::*;
use crate::{EnumDecl, ModuleGraph, StringInterner};
use pretty_assertions::assert_eq;

#[test]
fn basics_at_fixed_indices() {
    let pool = TypePool::new();

    assert_eq!(pool.tag(TypeId::VOID), Tag::Basic);
    assert_eq!(pool.data(TypeId::BOOL).kind, TypeKind::Basic(BasicTy::Bool));
    assert_eq!(pool.data(TypeId::CHAR).kind, TypeKind::Basic(BasicTy::Char));
    assert_eq!(pool.data(TypeId::I32).kind, TypeKind::Basic(BasicTy::I32));
    assert_eq!(pool.data(TypeId::F64).kind, TypeKind::Basic(BasicTy::F64));
    assert_eq!(pool.len(), TypeId::FIRST_DYNAMIC as usize);
}

#[test]
fn intern_deduplicates_structural_equals() {
    let mut pool = TypePool::new();
    let a = pool.pointer(TypeId::I32);
    let b = pool.pointer(TypeId::I32);
    assert_eq!(a, b);

    let c = pool.pointer(TypeId::I64);
    assert_ne!(a, c);
}

#[test]
fn fresh_instances_converge_through_canonical() {
    let mut pool = TypePool::new();
    let merged = pool.dyn_array(TypeId::CHAR);
    let unmerged = pool.unmerged_copy(merged);

    assert_ne!(merged, unmerged);
    assert_eq!(pool.canonical(unmerged), merged);
    // idempotent
    assert_eq!(pool.canonical(merged), merged);
}

#[test]
fn fresh_without_representative_becomes_canonical() {
    let mut pool = TypePool::new();
    let fresh = pool.fresh(TypeData::unqualified(TypeKind::Pointer(TypeId::F32)));
    assert_eq!(pool.canonical(fresh), fresh);
    // A later intern of the same structure finds the registered instance.
    assert_eq!(pool.pointer(TypeId::F32), fresh);
}

#[test]
fn qualifier_replacement_is_canonical() {
    let mut pool = TypePool::new();
    let const_int = pool.with_qual(TypeId::I32, Qual::CONST);
    assert_eq!(pool.qual(const_int), Qual::CONST);
    assert_eq!(pool.strip_qual(const_int), TypeId::I32);

    let again = pool.with_qual(TypeId::I32, Qual::CONST);
    assert_eq!(const_int, again);
}

#[test]
fn elem_covers_indirection_categories() {
    let mut pool = TypePool::new();
    let ptr = pool.pointer(TypeId::U8);
    let arr = pool.dyn_array(TypeId::U8);
    let fixed = pool.static_array(TypeId::U8, 4);

    assert_eq!(pool.elem(ptr), Some(TypeId::U8));
    assert_eq!(pool.elem(arr), Some(TypeId::U8));
    assert_eq!(pool.elem(fixed), Some(TypeId::U8));
    assert_eq!(pool.elem(TypeId::U8), None);
}

#[test]
fn tuples_intern_by_shape_and_order() {
    let mut pool = TypePool::new();
    let p = |ty| Param { ty, name: None };
    let ab = pool.tuple(&[p(TypeId::I32), p(TypeId::F64)]);
    let ab2 = pool.tuple(&[p(TypeId::I32), p(TypeId::F64)]);
    let ba = pool.tuple(&[p(TypeId::F64), p(TypeId::I32)]);

    assert_eq!(ab, ab2);
    assert_ne!(ab, ba);
}

#[test]
fn base_type_resolves_enums_and_merges_qualifiers() {
    let mut strings = StringInterner::new();
    let mut modules = ModuleGraph::new();
    let m = modules.add(strings.intern("app.main"), None, true);

    let mut decls = DeclTable::new();
    let mut pool = TypePool::new();

    let color = decls.add(Decl::Enum(EnumDecl {
        name: strings.intern("Color"),
        module: m,
        base: TypeId::U8,
    }));
    let color_ty = pool.enum_of(color);
    let const_color = pool.with_qual(color_ty, Qual::CONST);

    let resolved = pool.base_type(&decls, const_color);
    assert_eq!(pool.tag(resolved), Tag::Basic);
    assert_eq!(pool.qual(resolved), Qual::CONST);
    assert_eq!(pool.strip_qual(resolved), TypeId::U8);
}

#[test]
fn base_type_chases_alias_chains() {
    let mut strings = StringInterner::new();
    let mut modules = ModuleGraph::new();
    let m = modules.add(strings.intern("app.main"), None, true);

    let mut decls = DeclTable::new();
    let mut pool = TypePool::new();

    let bytes = pool.dyn_array(TypeId::U8);
    let buf = decls.add(Decl::Alias(crate::AliasDecl {
        name: strings.intern("Buf"),
        module: m,
        base: bytes,
    }));
    let buf_ty = pool.alias_of(buf);
    let blob = decls.add(Decl::Alias(crate::AliasDecl {
        name: strings.intern("Blob"),
        module: m,
        base: buf_ty,
    }));
    let blob_ty = pool.alias_of(blob);

    assert_eq!(pool.base_type(&decls, blob_ty), bytes);
}

#[test]
fn base_type_leaves_structural_categories_alone() {
    let mut pool = TypePool::new();
    let decls = DeclTable::new();
    let ptr = pool.pointer(TypeId::I32);
    assert_eq!(pool.base_type(&decls, ptr), ptr);
}
