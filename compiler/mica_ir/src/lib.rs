//! Core IR substrate for the Mica compiler.
//!
//! This crate owns the semantic objects the later compilation phases
//! consume:
//! - Interned identifiers (`Name`, `StringInterner`)
//! - The canonical type pool (`TypePool`, `TypeId`): all structurally
//!   identical type expressions resolve to one shared representative
//! - Declarations (`DeclTable`) and the module graph (`ModuleGraph`)
//! - The deferred-analysis worklist (`DeferredQueue`), appended to during
//!   later phases and drained by the pipeline driver
//!
//! # Canonical Types
//!
//! Types are referenced by 32-bit `TypeId` handles into a `TypePool`.
//! `TypePool::intern` deduplicates, so interned ids compare canonically in
//! O(1). Semantic analysis occasionally materializes *unmerged* instances
//! (`TypePool::fresh`); `TypePool::canonical` maps any instance back to the
//! shared representative.

/// Compile-time size assertion for hot data types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod decl;
mod deferred;
mod module;
mod name;
mod pool;
mod qual;
mod tag;
mod ty;
mod unit;

pub use decl::{AliasDecl, ClassDecl, Decl, DeclId, DeclTable, EnumDecl, StructDecl};
pub use deferred::{DeferReason, Deferred, DeferredQueue};
pub use module::{MemberRef, Module, ModuleGraph, ModuleId};
pub use name::{Name, StringInterner};
pub use pool::TypePool;
pub use qual::{Qual, QualClass};
pub use tag::Tag;
pub use ty::{BasicTy, Param, TypeData, TypeId, TypeKind};
pub use unit::Unit;

// Size assertions to prevent accidental regressions on handle types that
// are copied everywhere.
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{DeclId, ModuleId, Name, TypeId};
    crate::static_assert_size!(Name, 4);
    crate::static_assert_size!(TypeId, 4);
    crate::static_assert_size!(DeclId, 4);
    crate::static_assert_size!(ModuleId, 4);
}
