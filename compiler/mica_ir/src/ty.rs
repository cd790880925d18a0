//! Type representation.
//!
//! `TypeId` is the canonical type handle; the structure behind it lives in
//! the [`TypePool`](crate::TypePool). `TypeData` is the stored form: a
//! qualifier plus category-specific substructure. Substructure references
//! other pool entries by id — the descriptor machinery shares them, it
//! never owns them.

use std::fmt;

use crate::{DeclId, Name, Qual, Tag};

/// A 32-bit index into the type pool.
///
/// Types created by [`TypePool::intern`](crate::TypePool::intern) compare
/// canonically by id. Unmerged instances (from
/// [`TypePool::fresh`](crate::TypePool::fresh)) must be resolved through
/// [`TypePool::canonical`](crate::TypePool::canonical) first.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    // === Pre-interned basic types ===
    // These are interned at pool creation in BasicTy::ALL order.

    /// The `void` type.
    pub const VOID: Self = Self(0);
    /// The `bool` type.
    pub const BOOL: Self = Self(1);
    /// The `char` type (UTF-8 code unit).
    pub const CHAR: Self = Self(2);
    /// The `wchar` type (UTF-16 code unit).
    pub const WCHAR: Self = Self(3);
    /// The `dchar` type (Unicode scalar value).
    pub const DCHAR: Self = Self(4);
    /// The `i8` type.
    pub const I8: Self = Self(5);
    /// The `u8` type.
    pub const U8: Self = Self(6);
    /// The `i16` type.
    pub const I16: Self = Self(7);
    /// The `u16` type.
    pub const U16: Self = Self(8);
    /// The `i32` type.
    pub const I32: Self = Self(9);
    /// The `u32` type.
    pub const U32: Self = Self(10);
    /// The `i64` type.
    pub const I64: Self = Self(11);
    /// The `u64` type.
    pub const U64: Self = Self(12);
    /// The `f32` type.
    pub const F32: Self = Self(13);
    /// The `f64` type.
    pub const F64: Self = Self(14);

    /// First index allocated to non-pre-interned types.
    pub const FIRST_DYNAMIC: u32 = BasicTy::ALL.len() as u32;

    /// Get raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Create from raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        TypeId(raw)
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeId({})", self.0)
    }
}

/// Built-in scalar types.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum BasicTy {
    Void,
    Bool,
    Char,
    WChar,
    DChar,
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
}

impl BasicTy {
    /// All basic types, in pre-interning order (matches the `TypeId`
    /// constants).
    pub const ALL: [BasicTy; 15] = [
        BasicTy::Void,
        BasicTy::Bool,
        BasicTy::Char,
        BasicTy::WChar,
        BasicTy::DChar,
        BasicTy::I8,
        BasicTy::U8,
        BasicTy::I16,
        BasicTy::U16,
        BasicTy::I32,
        BasicTy::U32,
        BasicTy::I64,
        BasicTy::U64,
        BasicTy::F32,
        BasicTy::F64,
    ];
}

/// A function or tuple parameter.
///
/// Variadic argument tuples carry unnamed, default-less input parameters,
/// so `name` is optional.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Param {
    pub ty: TypeId,
    pub name: Option<Name>,
}

/// Category-specific type substructure.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeKind {
    Basic(BasicTy),
    /// Named alias keeping its own identity; the underlying type lives in
    /// the declaration.
    Alias(DeclId),
    Pointer(TypeId),
    DynArray(TypeId),
    StaticArray {
        elem: TypeId,
        len: u64,
    },
    AssocArray {
        key: TypeId,
        value: TypeId,
    },
    Vector {
        elem: TypeId,
        lanes: u32,
    },
    Struct(DeclId),
    Class(DeclId),
    /// Enum with its own identity; the base type lives in the declaration.
    Enum(DeclId),
    Function {
        params: Box<[Param]>,
        ret: TypeId,
    },
    /// Delegate over an underlying function type.
    Delegate(TypeId),
    Tuple {
        params: Box<[Param]>,
    },
}

impl TypeKind {
    /// The structural category of this kind.
    pub const fn tag(&self) -> Tag {
        match self {
            TypeKind::Basic(_) => Tag::Basic,
            TypeKind::Alias(_) => Tag::Alias,
            TypeKind::Pointer(_) => Tag::Pointer,
            TypeKind::DynArray(_) => Tag::DynArray,
            TypeKind::StaticArray { .. } => Tag::StaticArray,
            TypeKind::AssocArray { .. } => Tag::AssocArray,
            TypeKind::Vector { .. } => Tag::Vector,
            TypeKind::Struct(_) => Tag::Struct,
            TypeKind::Class(_) => Tag::Class,
            TypeKind::Enum(_) => Tag::Enum,
            TypeKind::Function { .. } => Tag::Function,
            TypeKind::Delegate(_) => Tag::Delegate,
            TypeKind::Tuple { .. } => Tag::Tuple,
        }
    }
}

/// The stored form of a type: qualifier plus substructure.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeData {
    pub qual: Qual,
    pub kind: TypeKind,
}

impl TypeData {
    /// Construct an unqualified type.
    pub fn unqualified(kind: TypeKind) -> Self {
        TypeData {
            qual: Qual::empty(),
            kind,
        }
    }
}
