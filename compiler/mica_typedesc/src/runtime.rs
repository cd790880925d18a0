//! Runtime support class lookup.
//!
//! The runtime support module declares the root `TypeDesc` class and one
//! subclass per specialized layout (`TypeDesc_Pointer`, ...). Descriptor
//! symbols are typed with these classes. A specialized class may be absent
//! from older runtime libraries; the root class stands in for it. The root
//! itself is non-negotiable: without it no descriptor can be typed, and
//! compilation aborts.

use mica_ir::{DeclId, ModuleId, Unit};

use crate::DescKind;

/// Resolved runtime support classes.
pub struct RuntimeCore {
    root: DeclId,
    by_kind: [Option<DeclId>; DescKind::COUNT],
}

impl RuntimeCore {
    /// Locate the descriptor classes in the runtime support module.
    /// Returns `None` when the root `TypeDesc` class is absent — callers
    /// treat that as a fatal configuration error.
    pub fn locate(unit: &mut Unit, support: ModuleId) -> Option<Self> {
        let root_name = unit.strings.intern("TypeDesc");
        let root = unit.decls.find_in_module(support, root_name)?;
        if unit.decls.get(root).as_class().is_none() {
            return None;
        }

        let mut by_kind = [None; DescKind::COUNT];
        for kind in DescKind::ALL {
            if let Some(class_name) = kind.runtime_class_name() {
                let name = unit.strings.intern(class_name);
                let found = unit
                    .decls
                    .find_in_module(support, name)
                    .filter(|&d| unit.decls.get(d).as_class().is_some());
                by_kind[kind as usize] = found;
            }
        }

        Some(RuntimeCore { root, by_kind })
    }

    /// The root descriptor class.
    pub fn root(&self) -> DeclId {
        self.root
    }

    /// The class typing descriptors of `kind`, falling back to the root
    /// when the runtime library predates the specialized layout.
    pub fn class_for(&self, kind: DescKind) -> DeclId {
        self.by_kind[kind as usize].unwrap_or(self.root)
    }
}
