//! Descriptor storage and reference expressions.

use std::fmt;

use mica_ir::{MemberRef, ModuleId, TypeId};

use crate::DescKind;

/// Descriptor handle into a session's [`DescTable`].
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct DescId(u32);

impl DescId {
    /// Get raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Create from raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        DescId(raw)
    }
}

impl fmt::Debug for DescId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DescId({})", self.0)
    }
}

impl From<DescId> for MemberRef {
    fn from(id: DescId) -> Self {
        MemberRef::from_raw(id.raw())
    }
}

/// One synthesized type descriptor.
///
/// Created lazily, at most once per canonical type, and memoized for the
/// session lifetime.
#[derive(Clone, Debug)]
pub struct Descriptor {
    /// The specialized layout.
    pub kind: DescKind,
    /// The canonical type this descriptor describes.
    pub ty: TypeId,
    /// For qualifier wrappers: the descriptor of the unqualified type.
    pub base: Option<DescId>,
    /// The module responsible for emitting this descriptor. `None` until
    /// placement runs, and permanently `None` for builtin and
    /// synchronously-emitted descriptors.
    pub owner: Option<ModuleId>,
    /// Set once the object-emission primitive has run.
    pub emitted: bool,
    /// Set for identity-insensitive pooled descriptors used by
    /// runtime-internal algorithms.
    pub internal: bool,
    /// The runtime class type of the descriptor symbol itself; reference
    /// expressions are typed with this to skip a pointless indirection.
    pub class_ty: TypeId,
}

/// Session-owned storage for descriptors.
#[derive(Default)]
pub struct DescTable {
    items: Vec<Descriptor>,
}

impl DescTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a descriptor.
    #[allow(clippy::cast_possible_truncation)]
    pub fn push(&mut self, desc: Descriptor) -> DescId {
        let id = DescId(self.items.len() as u32);
        self.items.push(desc);
        id
    }

    /// Look up a descriptor.
    ///
    /// # Panics
    /// Panics if the id was not created by this table.
    pub fn get(&self, id: DescId) -> &Descriptor {
        &self.items[id.0 as usize]
    }

    pub(crate) fn get_mut(&mut self, id: DescId) -> &mut Descriptor {
        &mut self.items[id.0 as usize]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate descriptors with their ids.
    #[allow(clippy::cast_possible_truncation)]
    pub fn iter(&self) -> impl Iterator<Item = (DescId, &Descriptor)> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, d)| (DescId(i as u32), d))
    }
}

/// A reference-taking expression over a descriptor symbol.
///
/// `Addr` is the form synthesis returns: the address of the descriptor,
/// typed as the descriptor's own runtime class. Constant folding reduces
/// it to `SymOff`, a compile-time symbol address.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DescExpr {
    Addr {
        desc: DescId,
        ty: TypeId,
    },
    SymOff {
        desc: DescId,
        offset: u32,
        ty: TypeId,
    },
}

impl DescExpr {
    /// The referenced descriptor.
    pub fn desc(self) -> DescId {
        match self {
            DescExpr::Addr { desc, .. } | DescExpr::SymOff { desc, .. } => desc,
        }
    }

    /// The expression's static type.
    pub fn ty(self) -> TypeId {
        match self {
            DescExpr::Addr { ty, .. } | DescExpr::SymOff { ty, .. } => ty,
        }
    }

    /// Reduce to a compile-time constant where possible. Taking the
    /// address of a descriptor symbol is always constant, so `Addr` folds
    /// to `SymOff` at offset zero; folding is idempotent.
    pub fn const_fold(self) -> DescExpr {
        match self {
            DescExpr::Addr { desc, ty } => DescExpr::SymOff {
                desc,
                offset: 0,
                ty,
            },
            folded @ DescExpr::SymOff { .. } => folded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fold_reduces_addr_to_symbol_offset() {
        let addr = DescExpr::Addr {
            desc: DescId::from_raw(7),
            ty: TypeId::from_raw(3),
        };
        let folded = addr.const_fold();
        assert_eq!(
            folded,
            DescExpr::SymOff {
                desc: DescId::from_raw(7),
                offset: 0,
                ty: TypeId::from_raw(3),
            }
        );
        // idempotent
        assert_eq!(folded.const_fold(), folded);
    }

    #[test]
    fn accessors_see_through_both_forms() {
        let addr = DescExpr::Addr {
            desc: DescId::from_raw(1),
            ty: TypeId::from_raw(2),
        };
        assert_eq!(addr.desc(), DescId::from_raw(1));
        assert_eq!(addr.ty(), TypeId::from_raw(2));
        assert_eq!(addr.const_fold().desc(), DescId::from_raw(1));
    }
}
