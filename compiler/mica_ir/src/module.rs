//! Module graph and per-module member lists.
//!
//! Each module records which module its instantiations ultimately reach
//! object-file emission through (`imported_from`): a directly-compiled
//! root module points at itself, a transitively-imported module points at
//! the root that pulled it in. Member lists are append-only; symbols
//! pushed here are emitted when the owning module is written out.

use std::fmt;

use crate::{DeclId, DeclTable, Name};

/// Module handle.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ModuleId(u32);

impl ModuleId {
    /// Get raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Create from raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        ModuleId(raw)
    }
}

impl fmt::Debug for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModuleId({})", self.0)
    }
}

/// Opaque reference to a symbol appended to a module's member list.
///
/// The phase that owns the symbol table converts its handles into member
/// references; this crate only stores them.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(transparent)]
pub struct MemberRef(u32);

impl MemberRef {
    /// Get raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Create from raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        MemberRef(raw)
    }
}

/// A compilation module.
pub struct Module {
    pub name: Name,
    /// The module whose object file carries symbols instantiated here.
    imported_from: ModuleId,
    /// True when this module is part of the directly-compiled root set.
    pub is_root: bool,
    members: Vec<MemberRef>,
}

impl Module {
    /// Symbols appended for emission with this module.
    pub fn members(&self) -> &[MemberRef] {
        &self.members
    }
}

/// The set of modules in a compilation.
#[derive(Default)]
pub struct ModuleGraph {
    modules: Vec<Module>,
}

impl ModuleGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a module. `imported_from` of `None` means the module reaches
    /// the object file itself.
    #[allow(clippy::cast_possible_truncation)]
    pub fn add(&mut self, name: Name, imported_from: Option<ModuleId>, is_root: bool) -> ModuleId {
        let id = ModuleId(self.modules.len() as u32);
        self.modules.push(Module {
            name,
            imported_from: imported_from.unwrap_or(id),
            is_root,
            members: Vec::new(),
        });
        id
    }

    /// Look up a module.
    ///
    /// # Panics
    /// Panics if the id was not created by this graph.
    pub fn get(&self, id: ModuleId) -> &Module {
        &self.modules[id.0 as usize]
    }

    /// The module that will carry emission for symbols instantiated in
    /// `id`.
    pub fn emission_module(&self, id: ModuleId) -> ModuleId {
        self.get(id).imported_from
    }

    /// Append a member to a module's emission list.
    ///
    /// # Panics
    /// Panics if the id was not created by this graph.
    pub fn push_member(&mut self, id: ModuleId, member: MemberRef) {
        self.modules[id.0 as usize].members.push(member);
    }

    /// True when the declaring module of `decl` is reached only
    /// transitively (not part of the directly-compiled root set).
    pub fn in_non_root(&self, decls: &DeclTable, decl: DeclId) -> bool {
        !self.get(decls.get(decl).module()).is_root
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Decl, StringInterner, StructDecl};
    use pretty_assertions::assert_eq;

    #[test]
    fn root_module_emits_through_itself() {
        let mut strings = StringInterner::new();
        let mut graph = ModuleGraph::new();
        let root = graph.add(strings.intern("app.main"), None, true);
        assert_eq!(graph.emission_module(root), root);
    }

    #[test]
    fn imported_module_emits_through_its_importer() {
        let mut strings = StringInterner::new();
        let mut graph = ModuleGraph::new();
        let root = graph.add(strings.intern("app.main"), None, true);
        let dep = graph.add(strings.intern("lib.data"), Some(root), false);
        assert_eq!(graph.emission_module(dep), root);
    }

    #[test]
    fn member_lists_are_append_only_in_order() {
        let mut strings = StringInterner::new();
        let mut graph = ModuleGraph::new();
        let m = graph.add(strings.intern("app.main"), None, true);
        graph.push_member(m, MemberRef::from_raw(3));
        graph.push_member(m, MemberRef::from_raw(1));
        let raws: Vec<u32> = graph.get(m).members().iter().map(|r| r.raw()).collect();
        assert_eq!(raws, vec![3, 1]);
    }

    #[test]
    fn non_root_detection_follows_the_declaring_module() {
        let mut strings = StringInterner::new();
        let mut graph = ModuleGraph::new();
        let root = graph.add(strings.intern("app.main"), None, true);
        let dep = graph.add(strings.intern("lib.data"), Some(root), false);

        let mut decls = DeclTable::new();
        let in_root = decls.add(Decl::Struct(StructDecl::plain(strings.intern("A"), root)));
        let in_dep = decls.add(Decl::Struct(StructDecl::plain(strings.intern("B"), dep)));

        assert!(!graph.in_non_root(&decls, in_root));
        assert!(graph.in_non_root(&decls, in_dep));
    }
}
