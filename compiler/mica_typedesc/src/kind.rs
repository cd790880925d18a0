//! Descriptor kinds and category dispatch.
//!
//! Each structural category of type maps to one specialized descriptor
//! layout in the runtime support library. Dispatch is a pure exhaustive
//! match over the closed category enumeration — adding a category is a
//! compile error until the mapping handles it.

use std::fmt;

use mica_ir::{DeclTable, QualClass, TypeId, TypeKind, TypePool};

/// The specialized descriptor layouts the runtime knows.
///
/// The four qualifier wrappers wrap the descriptor of the unqualified
/// type; `shared const` collapses onto `Shared` (there is no combined
/// layout).
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum DescKind {
    /// Scalar types, described by the root layout directly.
    Basic = 0,
    Alias = 1,
    Pointer = 2,
    DynArray = 3,
    StaticArray = 4,
    AssocArray = 5,
    Vector = 6,
    Struct = 7,
    Class = 8,
    Interface = 9,
    Enum = 10,
    Function = 11,
    Delegate = 12,
    Tuple = 13,
    // Qualifier wrappers
    Shared = 14,
    Const = 15,
    Immutable = 16,
    Wild = 17,
}

impl DescKind {
    /// Number of descriptor kinds; sizes the runtime-class lookup table.
    pub const COUNT: usize = 18;

    /// All kinds, in discriminant order.
    pub const ALL: [DescKind; Self::COUNT] = [
        DescKind::Basic,
        DescKind::Alias,
        DescKind::Pointer,
        DescKind::DynArray,
        DescKind::StaticArray,
        DescKind::AssocArray,
        DescKind::Vector,
        DescKind::Struct,
        DescKind::Class,
        DescKind::Interface,
        DescKind::Enum,
        DescKind::Function,
        DescKind::Delegate,
        DescKind::Tuple,
        DescKind::Shared,
        DescKind::Const,
        DescKind::Immutable,
        DescKind::Wild,
    ];

    /// The wrapper kind for an outermost qualifier class.
    pub const fn wrapper(class: QualClass) -> DescKind {
        match class {
            QualClass::Shared => DescKind::Shared,
            QualClass::Const => DescKind::Const,
            QualClass::Immutable => DescKind::Immutable,
            QualClass::Wild => DescKind::Wild,
        }
    }

    /// True for the qualifier-wrapper kinds.
    pub const fn is_wrapper(self) -> bool {
        matches!(
            self,
            DescKind::Shared | DescKind::Const | DescKind::Immutable | DescKind::Wild
        )
    }

    /// The runtime support class implementing this layout, or `None` for
    /// kinds described by the root `TypeDesc` class directly.
    pub const fn runtime_class_name(self) -> Option<&'static str> {
        match self {
            DescKind::Basic => None,
            DescKind::Alias => Some("TypeDesc_Alias"),
            DescKind::Pointer => Some("TypeDesc_Pointer"),
            DescKind::DynArray => Some("TypeDesc_Array"),
            DescKind::StaticArray => Some("TypeDesc_StaticArray"),
            DescKind::AssocArray => Some("TypeDesc_AssocArray"),
            DescKind::Vector => Some("TypeDesc_Vector"),
            DescKind::Struct => Some("TypeDesc_Struct"),
            DescKind::Class => Some("TypeDesc_Class"),
            DescKind::Interface => Some("TypeDesc_Interface"),
            DescKind::Enum => Some("TypeDesc_Enum"),
            DescKind::Function => Some("TypeDesc_Function"),
            DescKind::Delegate => Some("TypeDesc_Delegate"),
            DescKind::Tuple => Some("TypeDesc_Tuple"),
            DescKind::Shared => Some("TypeDesc_Shared"),
            DescKind::Const => Some("TypeDesc_Const"),
            DescKind::Immutable => Some("TypeDesc_Immutable"),
            DescKind::Wild => Some("TypeDesc_Wild"),
        }
    }

    /// Get the name of this kind as a static string.
    pub const fn name(self) -> &'static str {
        match self {
            DescKind::Basic => "basic",
            DescKind::Alias => "alias",
            DescKind::Pointer => "pointer",
            DescKind::DynArray => "array",
            DescKind::StaticArray => "static array",
            DescKind::AssocArray => "associative array",
            DescKind::Vector => "vector",
            DescKind::Struct => "struct",
            DescKind::Class => "class",
            DescKind::Interface => "interface",
            DescKind::Enum => "enum",
            DescKind::Function => "function",
            DescKind::Delegate => "delegate",
            DescKind::Tuple => "tuple",
            DescKind::Shared => "shared",
            DescKind::Const => "const",
            DescKind::Immutable => "immutable",
            DescKind::Wild => "wild",
        }
    }
}

impl fmt::Debug for DescKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DescKind::{}", self.name())
    }
}

impl fmt::Display for DescKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// DescKind must stay a single byte.
const _: () = assert!(std::mem::size_of::<DescKind>() == 1);

/// Pick the descriptor kind for an *unqualified* type.
///
/// Pure factory: no caching, no side effects. Qualifier wrapping happens
/// before dispatch, so the qualifier bits of `ty` are ignored here. The
/// only nested branch is class vs. interface, decided by the declaration.
pub fn dispatch(pool: &TypePool, decls: &DeclTable, ty: TypeId) -> DescKind {
    match &pool.data(ty).kind {
        TypeKind::Basic(_) => DescKind::Basic,
        TypeKind::Alias(_) => DescKind::Alias,
        TypeKind::Pointer(_) => DescKind::Pointer,
        TypeKind::DynArray(_) => DescKind::DynArray,
        TypeKind::StaticArray { .. } => DescKind::StaticArray,
        TypeKind::AssocArray { .. } => DescKind::AssocArray,
        TypeKind::Vector { .. } => DescKind::Vector,
        TypeKind::Struct(_) => DescKind::Struct,
        TypeKind::Class(decl) => {
            if decls.is_interface(*decl) {
                DescKind::Interface
            } else {
                DescKind::Class
            }
        }
        TypeKind::Enum(_) => DescKind::Enum,
        TypeKind::Function { .. } => DescKind::Function,
        TypeKind::Delegate(_) => DescKind::Delegate,
        TypeKind::Tuple { .. } => DescKind::Tuple,
    }
}

#[cfg(test)]
mod tests;
