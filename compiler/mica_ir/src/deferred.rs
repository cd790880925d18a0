//! Deferred-analysis worklist.
//!
//! Two-phase pattern: synthesis phases append entries here, and a later
//! pipeline stage drains them and runs the remaining semantic passes.
//! Nothing in this crate drains the queue.

use crate::DeclId;

/// Why a declaration needs another semantic pass.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DeferReason {
    /// A type descriptor references the declaration's user-defined
    /// equality/comparison/hashing/formatting hooks, whose bodies have not
    /// been analyzed because the module is reached only transitively.
    RuntimeHooks,
}

/// A deferred work item.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Deferred {
    pub decl: DeclId,
    pub reason: DeferReason,
}

/// Append-only worklist of declarations awaiting further analysis.
#[derive(Default)]
pub struct DeferredQueue {
    entries: Vec<Deferred>,
}

impl DeferredQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a work item.
    pub fn push(&mut self, item: Deferred) {
        self.entries.push(item);
    }

    /// The queued items, in append order.
    pub fn entries(&self) -> &[Deferred] {
        &self.entries
    }

    /// Take all queued items, leaving the queue empty. Called by the
    /// draining pipeline stage.
    pub fn take(&mut self) -> Vec<Deferred> {
        std::mem::take(&mut self.entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn take_drains_in_append_order() {
        let mut queue = DeferredQueue::new();
        queue.push(Deferred {
            decl: DeclId::from_raw(2),
            reason: DeferReason::RuntimeHooks,
        });
        queue.push(Deferred {
            decl: DeclId::from_raw(0),
            reason: DeferReason::RuntimeHooks,
        });

        let drained = queue.take();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].decl, DeclId::from_raw(2));
        assert!(queue.is_empty());
    }
}
