//! Declarations.
//!
//! Nominal types (structs, classes, enums, aliases) point at a declaration
//! entry. Only the attributes the descriptor machinery consumes are
//! modeled: identity, owning module, and — for structs — whether semantic
//! analysis found genuine user-defined equality/comparison/hashing/
//! formatting hooks (compiler-generated error stubs do not count and never
//! set these flags).

use std::fmt;

use rustc_hash::FxHashMap;

use crate::{ModuleId, Name, TypeId};

/// Declaration handle.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct DeclId(u32);

impl DeclId {
    /// Get raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Create from raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        DeclId(raw)
    }
}

impl fmt::Debug for DeclId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DeclId({})", self.0)
    }
}

/// A struct declaration.
#[derive(Clone, Debug)]
pub struct StructDecl {
    pub name: Name,
    pub module: ModuleId,
    /// User-defined equality hook.
    pub custom_eq: bool,
    /// User-defined comparison hook.
    pub custom_cmp: bool,
    /// User-defined hashing hook.
    pub custom_hash: bool,
    /// User-defined string-formatting hook.
    pub custom_format: bool,
}

impl StructDecl {
    /// A struct with no user-defined runtime hooks.
    pub fn plain(name: Name, module: ModuleId) -> Self {
        StructDecl {
            name,
            module,
            custom_eq: false,
            custom_cmp: false,
            custom_hash: false,
            custom_format: false,
        }
    }

    /// True if any runtime hook is user-defined.
    pub fn has_custom_hooks(&self) -> bool {
        self.custom_eq || self.custom_cmp || self.custom_hash || self.custom_format
    }
}

/// A class or interface declaration.
#[derive(Clone, Debug)]
pub struct ClassDecl {
    pub name: Name,
    pub module: ModuleId,
    pub is_interface: bool,
}

/// An enum declaration with its base type.
#[derive(Clone, Debug)]
pub struct EnumDecl {
    pub name: Name,
    pub module: ModuleId,
    pub base: TypeId,
}

/// A named alias declaration with its underlying type.
#[derive(Clone, Debug)]
pub struct AliasDecl {
    pub name: Name,
    pub module: ModuleId,
    pub base: TypeId,
}

/// A declaration entry.
#[derive(Clone, Debug)]
pub enum Decl {
    Struct(StructDecl),
    Class(ClassDecl),
    Enum(EnumDecl),
    Alias(AliasDecl),
}

impl Decl {
    /// The declared name.
    pub fn name(&self) -> Name {
        match self {
            Decl::Struct(d) => d.name,
            Decl::Class(d) => d.name,
            Decl::Enum(d) => d.name,
            Decl::Alias(d) => d.name,
        }
    }

    /// The owning module.
    pub fn module(&self) -> ModuleId {
        match self {
            Decl::Struct(d) => d.module,
            Decl::Class(d) => d.module,
            Decl::Enum(d) => d.module,
            Decl::Alias(d) => d.module,
        }
    }

    /// Struct view, if this is a struct.
    pub fn as_struct(&self) -> Option<&StructDecl> {
        match self {
            Decl::Struct(d) => Some(d),
            _ => None,
        }
    }

    /// Class view, if this is a class or interface.
    pub fn as_class(&self) -> Option<&ClassDecl> {
        match self {
            Decl::Class(d) => Some(d),
            _ => None,
        }
    }
}

/// Registry of declarations with per-module name lookup.
#[derive(Default)]
pub struct DeclTable {
    decls: Vec<Decl>,
    by_name: FxHashMap<(ModuleId, Name), DeclId>,
}

impl DeclTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a declaration.
    #[allow(clippy::cast_possible_truncation)]
    pub fn add(&mut self, decl: Decl) -> DeclId {
        let id = DeclId(self.decls.len() as u32);
        self.by_name.insert((decl.module(), decl.name()), id);
        self.decls.push(decl);
        id
    }

    /// Look up a declaration entry.
    ///
    /// # Panics
    /// Panics if the id was not created by this table.
    pub fn get(&self, id: DeclId) -> &Decl {
        &self.decls[id.0 as usize]
    }

    /// Mutable view of a declaration entry.
    ///
    /// # Panics
    /// Panics if the id was not created by this table.
    pub fn get_mut(&mut self, id: DeclId) -> &mut Decl {
        &mut self.decls[id.0 as usize]
    }

    /// Find a declaration by name within a module.
    pub fn find_in_module(&self, module: ModuleId, name: Name) -> Option<DeclId> {
        self.by_name.get(&(module, name)).copied()
    }

    /// True if the declaration is an interface.
    pub fn is_interface(&self, id: DeclId) -> bool {
        matches!(self.get(id), Decl::Class(c) if c.is_interface)
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ModuleGraph, StringInterner};

    #[test]
    fn lookup_by_module_and_name() {
        let mut strings = StringInterner::new();
        let mut modules = ModuleGraph::new();
        let m = modules.add(strings.intern("app.main"), None, true);

        let mut decls = DeclTable::new();
        let name = strings.intern("Point");
        let id = decls.add(Decl::Struct(StructDecl::plain(name, m)));

        assert_eq!(decls.find_in_module(m, name), Some(id));
        assert_eq!(decls.get(id).name(), name);
        assert!(!decls.is_interface(id));
    }

    #[test]
    fn hook_detection_covers_each_hook() {
        let mut strings = StringInterner::new();
        let mut modules = ModuleGraph::new();
        let m = modules.add(strings.intern("app.main"), None, true);
        let name = strings.intern("Key");

        let plain = StructDecl::plain(name, m);
        assert!(!plain.has_custom_hooks());

        let mut hashed = StructDecl::plain(name, m);
        hashed.custom_hash = true;
        assert!(hashed.has_custom_hooks());

        let mut formatted = StructDecl::plain(name, m);
        formatted.custom_format = true;
        assert!(formatted.has_custom_hooks());
    }
}
