//! Builtin descriptor classification.
//!
//! Some descriptors already ship in the runtime support library, so the
//! compiling module must neither place nor emit them.

use mica_ir::{BasicTy, DeclTable, Qual, TypeId, TypeKind, TypePool};

/// Decide whether the runtime support library already ships the
/// descriptor for `ty`. Pure predicate, no side effects.
///
/// Builtin:
/// - unqualified basic types
/// - unqualified dynamic arrays of an unqualified basic element, plus the
///   string cases: `immutable(char)[]` and `const(char)[]`
/// - unqualified concrete class types — their descriptor is emitted once
///   next to the class metadata, so no referencing module regenerates it
///
/// Everything else, including interfaces and every qualified type, is
/// synthesized by the compiling module.
pub fn is_builtin(pool: &TypePool, decls: &DeclTable, ty: TypeId) -> bool {
    let data = pool.data(ty);
    match &data.kind {
        TypeKind::Basic(_) => data.qual.is_empty(),
        TypeKind::DynArray(elem) => {
            if !data.qual.is_empty() {
                return false;
            }
            let elem_data = pool.data(*elem);
            match elem_data.kind {
                // Strings are common enough that the runtime ships the
                // immutable and const flavors too.
                TypeKind::Basic(BasicTy::Char) => {
                    elem_data.qual.is_empty()
                        || elem_data.qual == Qual::IMMUTABLE
                        || elem_data.qual == Qual::CONST
                }
                TypeKind::Basic(_) => elem_data.qual.is_empty(),
                _ => false,
            }
        }
        TypeKind::Class(decl) => data.qual.is_empty() && !decls.is_interface(*decl),
        _ => false,
    }
}
