//! Structural category tag.
//!
//! Each type in the pool has a `Tag` identifying its structural category.
//! The category determines which descriptor layout applies and how the
//! substructure in [`TypeKind`](crate::TypeKind) is interpreted.

use std::fmt;

/// Structural category discriminant.
///
/// This is a closed enumeration: descriptor dispatch matches exhaustively
/// over it, so adding a category is a compile-error until every consumer
/// handles it.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Tag {
    /// Built-in scalar type (`bool`, `char`, `i32`, ...).
    Basic = 0,
    /// Named alias that keeps its own identity.
    Alias = 1,
    /// Raw pointer `*T`.
    Pointer = 2,
    /// Dynamic array `T[]`.
    DynArray = 3,
    /// Fixed-length array `T[n]`.
    StaticArray = 4,
    /// Associative array `V[K]`.
    AssocArray = 5,
    /// SIMD vector `vector(T[n])`.
    Vector = 6,
    /// Struct type.
    Struct = 7,
    /// Class or interface type (the declaration distinguishes them).
    Class = 8,
    /// Enum type with its own identity over a base type.
    Enum = 9,
    /// Function type.
    Function = 10,
    /// Delegate (function with context) type.
    Delegate = 11,
    /// Parameter tuple.
    Tuple = 12,
}

impl Tag {
    /// Number of categories; sizes fixed per-category tables.
    pub const COUNT: usize = 13;

    /// Get the name of this tag as a static string.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Alias => "alias",
            Self::Pointer => "pointer",
            Self::DynArray => "array",
            Self::StaticArray => "static array",
            Self::AssocArray => "associative array",
            Self::Vector => "vector",
            Self::Struct => "struct",
            Self::Class => "class",
            Self::Enum => "enum",
            Self::Function => "function",
            Self::Delegate => "delegate",
            Self::Tuple => "tuple",
        }
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag::{}", self.name())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// Tag must stay a single byte.
const _: () = assert!(std::mem::size_of::<Tag>() == 1);
