//! Per-compilation session state.

use crate::{DeclTable, DeferredQueue, ModuleGraph, StringInterner, TypePool};

/// The semantic state of one compilation session.
///
/// Owns every collaborator table the later phases read and write. There is
/// no global state: tests build a fresh `Unit` and get deterministic,
/// isolated runs.
pub struct Unit {
    pub strings: StringInterner,
    pub pool: TypePool,
    pub decls: DeclTable,
    pub modules: ModuleGraph,
    pub deferred: DeferredQueue,
}

impl Unit {
    pub fn new() -> Self {
        Unit {
            strings: StringInterner::new(),
            pool: TypePool::new(),
            decls: DeclTable::new(),
            modules: ModuleGraph::new(),
            deferred: DeferredQueue::new(),
        }
    }
}

impl Default for Unit {
    fn default() -> Self {
        Self::new()
    }
}
