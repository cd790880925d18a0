//! Canonical type pool.
//!
//! All structurally identical type expressions resolve to one shared pool
//! entry: `intern` deduplicates, and `canonical` maps the occasional
//! unmerged instance back to the shared representative. Merging is total
//! and idempotent.
//!
//! The pool is plain `&mut` state — the compilation driver is
//! single-threaded through this phase, so there is no locking.

use rustc_hash::FxHashMap;

use crate::{BasicTy, Decl, DeclId, DeclTable, Param, Qual, Tag, TypeData, TypeId, TypeKind};

/// Interning pool for types.
pub struct TypePool {
    items: Vec<TypeData>,
    dedup: FxHashMap<TypeData, u32>,
}

impl TypePool {
    /// Create a new pool with all basic types pre-interned at their fixed
    /// `TypeId` constants.
    pub fn new() -> Self {
        let mut pool = TypePool {
            items: Vec::with_capacity(64),
            dedup: FxHashMap::default(),
        };
        for basic in BasicTy::ALL {
            pool.intern(TypeData::unqualified(TypeKind::Basic(basic)));
        }
        pool
    }

    /// Intern a type, returning its canonical `TypeId`.
    ///
    /// Structurally identical data always returns the same id.
    #[allow(clippy::cast_possible_truncation)]
    pub fn intern(&mut self, data: TypeData) -> TypeId {
        if let Some(&idx) = self.dedup.get(&data) {
            return TypeId::from_raw(idx);
        }
        let idx = self.items.len() as u32;
        self.items.push(data.clone());
        self.dedup.insert(data, idx);
        TypeId::from_raw(idx)
    }

    /// Allocate an *unmerged* instance: a distinct id carrying the given
    /// structure, not registered as the canonical representative.
    ///
    /// Semantic analysis produces these when a type expression is built
    /// before merging runs; they resolve through [`TypePool::canonical`].
    #[allow(clippy::cast_possible_truncation)]
    pub fn fresh(&mut self, data: TypeData) -> TypeId {
        let idx = self.items.len() as u32;
        self.items.push(data);
        TypeId::from_raw(idx)
    }

    /// Duplicate an existing entry as an unmerged instance. Test and
    /// front-end convenience.
    pub fn unmerged_copy(&mut self, id: TypeId) -> TypeId {
        let data = self.data(id).clone();
        self.fresh(data)
    }

    /// Resolve any instance to the canonical representative of its
    /// structure. Total and idempotent: an instance with no registered
    /// representative becomes one.
    pub fn canonical(&mut self, id: TypeId) -> TypeId {
        if let Some(&idx) = self.dedup.get(self.data(id)) {
            return TypeId::from_raw(idx);
        }
        let data = self.data(id).clone();
        self.dedup.insert(data, id.raw());
        id
    }

    /// Look up the stored data for an id.
    ///
    /// # Panics
    /// Panics if the id was not created by this pool.
    pub fn data(&self, id: TypeId) -> &TypeData {
        &self.items[id.raw() as usize]
    }

    /// The structural category of a type.
    pub fn tag(&self, id: TypeId) -> Tag {
        self.data(id).kind.tag()
    }

    /// The qualifier bits of a type.
    pub fn qual(&self, id: TypeId) -> Qual {
        self.data(id).qual
    }

    /// The element type of pointer/array/vector categories.
    pub fn elem(&self, id: TypeId) -> Option<TypeId> {
        match self.data(id).kind {
            TypeKind::Pointer(elem)
            | TypeKind::DynArray(elem)
            | TypeKind::StaticArray { elem, .. }
            | TypeKind::Vector { elem, .. } => Some(elem),
            _ => None,
        }
    }

    /// Number of pool entries, including pre-interned basics.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if only the pre-interned basics exist.
    pub fn is_empty(&self) -> bool {
        self.items.len() <= TypeId::FIRST_DYNAMIC as usize
    }

    // === Constructors ===
    //
    // All constructors intern, so identical arguments return identical ids.

    /// A basic type.
    pub fn basic(&mut self, basic: BasicTy) -> TypeId {
        self.intern(TypeData::unqualified(TypeKind::Basic(basic)))
    }

    /// A pointer type `*elem`.
    pub fn pointer(&mut self, elem: TypeId) -> TypeId {
        self.intern(TypeData::unqualified(TypeKind::Pointer(elem)))
    }

    /// A dynamic array type `elem[]`.
    pub fn dyn_array(&mut self, elem: TypeId) -> TypeId {
        self.intern(TypeData::unqualified(TypeKind::DynArray(elem)))
    }

    /// A fixed-length array type `elem[len]`.
    pub fn static_array(&mut self, elem: TypeId, len: u64) -> TypeId {
        self.intern(TypeData::unqualified(TypeKind::StaticArray { elem, len }))
    }

    /// An associative array type `value[key]`.
    pub fn assoc_array(&mut self, key: TypeId, value: TypeId) -> TypeId {
        self.intern(TypeData::unqualified(TypeKind::AssocArray { key, value }))
    }

    /// A SIMD vector type.
    pub fn vector(&mut self, elem: TypeId, lanes: u32) -> TypeId {
        self.intern(TypeData::unqualified(TypeKind::Vector { elem, lanes }))
    }

    /// A struct type for a declaration.
    pub fn struct_of(&mut self, decl: DeclId) -> TypeId {
        self.intern(TypeData::unqualified(TypeKind::Struct(decl)))
    }

    /// A class or interface type for a declaration.
    pub fn class_of(&mut self, decl: DeclId) -> TypeId {
        self.intern(TypeData::unqualified(TypeKind::Class(decl)))
    }

    /// An enum type for a declaration.
    pub fn enum_of(&mut self, decl: DeclId) -> TypeId {
        self.intern(TypeData::unqualified(TypeKind::Enum(decl)))
    }

    /// An alias type for a declaration.
    pub fn alias_of(&mut self, decl: DeclId) -> TypeId {
        self.intern(TypeData::unqualified(TypeKind::Alias(decl)))
    }

    /// A function type `(params...) -> ret`.
    pub fn function(&mut self, params: &[Param], ret: TypeId) -> TypeId {
        self.intern(TypeData::unqualified(TypeKind::Function {
            params: params.into(),
            ret,
        }))
    }

    /// A delegate over a function type.
    pub fn delegate(&mut self, func: TypeId) -> TypeId {
        self.intern(TypeData::unqualified(TypeKind::Delegate(func)))
    }

    /// A parameter tuple `(params...)`.
    pub fn tuple(&mut self, params: &[Param]) -> TypeId {
        self.intern(TypeData::unqualified(TypeKind::Tuple {
            params: params.into(),
        }))
    }

    // === Qualifier operations ===

    /// The same structure with the qualifier replaced. Returns a canonical
    /// id.
    pub fn with_qual(&mut self, id: TypeId, qual: Qual) -> TypeId {
        let kind = self.data(id).kind.clone();
        self.intern(TypeData { qual, kind })
    }

    /// The mutable (unqualified) version of a type.
    pub fn strip_qual(&mut self, id: TypeId) -> TypeId {
        self.with_qual(id, Qual::empty())
    }

    /// Resolve aliases and enums to the underlying type, accumulating
    /// qualifier bits from each layer. Other categories resolve to their
    /// own canonical id.
    pub fn base_type(&mut self, decls: &DeclTable, id: TypeId) -> TypeId {
        let mut current = id;
        loop {
            let data = self.data(current);
            let qual = data.qual;
            let under = match data.kind {
                TypeKind::Alias(d) => match decls.get(d) {
                    Decl::Alias(a) => Some(a.base),
                    _ => None,
                },
                TypeKind::Enum(d) => match decls.get(d) {
                    Decl::Enum(e) => Some(e.base),
                    _ => None,
                },
                _ => None,
            };
            match under {
                Some(base) => {
                    let merged = qual | self.qual(base);
                    current = self.with_qual(base, merged);
                }
                None => return self.canonical(current),
            }
        }
    }
}

impl Default for TypePool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
