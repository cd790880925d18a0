//! Descriptor cache and placement.
//!
//! One `Synthesizer` lives for the whole compilation session and owns
//! every piece of synthesis state: the descriptor table, the per-type
//! memo, the category-keyed internal pool, and the object-emission
//! primitive. The driver threads it (plus the semantic [`Unit`]) through
//! every call site; nothing here is global.
//!
//! # Caching and placement
//!
//! The first request for a type resolves it to canonical form, builds the
//! descriptor, and decides placement exactly once:
//! - builtin descriptors ship with the runtime and are never placed or
//!   emitted;
//! - with a module context, the descriptor joins the member list of the
//!   module that reaches object-file emission, permanently;
//! - with no context, it is emitted synchronously on the spot.
//!
//! Every later request — from any module — reuses the cached descriptor
//! without revisiting placement.

use rustc_hash::FxHashMap;

use mica_ir::{Deferred, DeferReason, MemberRef, ModuleId, Tag, TypeId, TypeKind, Unit};

use crate::descriptor::{DescExpr, DescId, DescTable, Descriptor};
use crate::{dispatch, is_builtin, DescKind, RuntimeCore, SynthError};

/// The object-emission primitive.
///
/// Implemented by the object-file backend; the synthesizer calls it for
/// descriptors requested with no module context.
pub trait ObjectEmitter {
    fn emit(&mut self, desc: DescId, kind: DescKind);
}

/// Emitter that discards everything. Useful for semantic-only runs.
#[derive(Default)]
pub struct NullEmitter;

impl ObjectEmitter for NullEmitter {
    fn emit(&mut self, _desc: DescId, _kind: DescKind) {}
}

/// The synthesis context a caller compiles under.
#[derive(Copy, Clone, Debug)]
pub struct Scope {
    /// The module being compiled at the request site.
    pub module: ModuleId,
}

/// Session-wide descriptor synthesis state.
pub struct Synthesizer {
    descs: DescTable,
    /// Canonical type -> descriptor, plus adopted entries for unmerged
    /// instances that have converged.
    memo: FxHashMap<TypeId, DescId>,
    /// One lazily-created slot per structural category, for
    /// runtime-internal call sites where exact identity is irrelevant.
    internal: [Option<DescId>; Tag::COUNT],
    runtime: Option<RuntimeCore>,
    emitter: Box<dyn ObjectEmitter>,
}

impl Synthesizer {
    /// Create a synthesizer over an emission backend. The runtime support
    /// classes are installed separately once their module has been
    /// analyzed.
    pub fn new(emitter: Box<dyn ObjectEmitter>) -> Self {
        Synthesizer {
            descs: DescTable::new(),
            memo: FxHashMap::default(),
            internal: [None; Tag::COUNT],
            runtime: None,
            emitter,
        }
    }

    /// Install the located runtime support classes.
    pub fn install_runtime(&mut self, core: RuntimeCore) {
        self.runtime = Some(core);
    }

    /// The synthesized descriptors.
    pub fn descriptors(&self) -> &DescTable {
        &self.descs
    }

    /// Synthesize (or reuse) the descriptor for `ty` and return a
    /// reference to it.
    ///
    /// With a scope, a non-builtin descriptor is appended to the member
    /// list of the module that reaches object-file emission from the
    /// scope's module. With no scope, it is emitted synchronously.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn synthesize(
        &mut self,
        unit: &mut Unit,
        ty: TypeId,
        scope: Option<&Scope>,
    ) -> Result<DescExpr, SynthError> {
        let desc = self.synthesize_desc(unit, ty, scope)?;
        Ok(self.reference(desc))
    }

    /// Cache-or-create, returning the descriptor handle.
    pub(crate) fn synthesize_desc(
        &mut self,
        unit: &mut Unit,
        ty: TypeId,
        scope: Option<&Scope>,
    ) -> Result<DescId, SynthError> {
        // Without the root descriptor class nothing can be typed; fail
        // before touching any cache.
        self.require_runtime()?;

        // Not every instance reaching us is merged; resolve to the
        // canonical representative first.
        let canon = unit.pool.canonical(ty);
        if let Some(&cached) = self.memo.get(&canon) {
            // Adopt the cached descriptor for this instance too, so
            // unmerged-but-equal occurrences converge.
            self.memo.insert(ty, cached);
            return Ok(cached);
        }
        tracing::debug!(ty = canon.raw(), "descriptor cache miss");

        let desc = match unit.pool.qual(canon).outermost() {
            Some(class) => {
                // Qualifier wrapper around the unqualified descriptor.
                // The base is synthesized without a context: the wrapper
                // never owns the placement decision for it.
                let unqual = unit.pool.strip_qual(canon);
                let base = self.synthesize_desc(unit, unqual, None)?;
                self.new_desc(unit, DescKind::wrapper(class), canon, Some(base))?
            }
            None => {
                let kind = dispatch(&unit.pool, &unit.decls, canon);
                self.new_desc(unit, kind, canon, None)?
            }
        };

        if is_builtin(&unit.pool, &unit.decls, canon) {
            // Ships with the runtime support library; nothing to place or
            // emit.
        } else if let Some(scope) = scope {
            self.place(unit, desc, canon, scope);
        } else {
            self.emit(desc);
        }

        self.memo.insert(canon, desc);
        if ty != canon {
            self.memo.insert(ty, desc);
        }
        Ok(desc)
    }

    /// Assign the descriptor to the module that reaches object-file
    /// emission, and queue any follow-up analysis the placement implies.
    fn place(&mut self, unit: &mut Unit, desc: DescId, canon: TypeId, scope: &Scope) {
        let owner = unit.modules.emission_module(scope.module);
        unit.modules.push_member(owner, MemberRef::from(desc));
        self.descs.get_mut(desc).owner = Some(owner);
        tracing::debug!(owner = owner.raw(), "placed descriptor");

        // A struct descriptor references the declaration's user-defined
        // equality/comparison/hashing/formatting hooks. If the struct
        // lives in a module reached only transitively, those hook bodies
        // have not been analyzed yet; queue the declaration so a later
        // stage generates them.
        let struct_decl = match unit.pool.data(canon).kind {
            TypeKind::Struct(d) => Some(d),
            _ => None,
        };
        if let Some(d) = struct_decl {
            let hooks = unit
                .decls
                .get(d)
                .as_struct()
                .is_some_and(|s| s.has_custom_hooks());
            if hooks && unit.modules.in_non_root(&unit.decls, d) {
                unit.deferred.push(Deferred {
                    decl: d,
                    reason: DeferReason::RuntimeHooks,
                });
                tracing::debug!(decl = d.raw(), "queued deferred hook analysis");
            }
        }
    }

    /// Run the object-emission primitive for a descriptor synthesized
    /// with no module context.
    fn emit(&mut self, desc: DescId) {
        let kind = self.descs.get(desc).kind;
        self.emitter.emit(desc, kind);
        self.descs.get_mut(desc).emitted = true;
        tracing::debug!(?kind, "emitted descriptor");
    }

    /// Construct a descriptor typed with its runtime support class.
    fn new_desc(
        &mut self,
        unit: &mut Unit,
        kind: DescKind,
        ty: TypeId,
        base: Option<DescId>,
    ) -> Result<DescId, SynthError> {
        let class_decl = self.require_runtime()?.class_for(kind);
        let class_ty = unit.pool.class_of(class_decl);
        Ok(self.descs.push(Descriptor {
            kind,
            ty,
            base,
            owner: None,
            emitted: false,
            internal: false,
            class_ty,
        }))
    }

    /// Build the reference expression for a descriptor: its address,
    /// typed as the descriptor's own class so no extra dereference is
    /// generated downstream.
    pub(crate) fn reference(&self, desc: DescId) -> DescExpr {
        DescExpr::Addr {
            desc,
            ty: self.descs.get(desc).class_ty,
        }
    }

    fn require_runtime(&self) -> Result<&RuntimeCore, SynthError> {
        self.runtime.as_ref().ok_or(SynthError::MissingRuntimeCore)
    }
}

mod internal;
mod vararg;
