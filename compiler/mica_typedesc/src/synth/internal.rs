//! Coarse descriptors for runtime-internal algorithms.
//!
//! Runtime helpers (array compares, associative-array plumbing, ...) only
//! need a descriptor's category-level behavior, not its exact identity.
//! Canonicalizing the request onto one pooled descriptor per category
//! keeps the number of distinct descriptors down. Class-typed data is the
//! exception: class semantics need exact identity, so those requests take
//! the exact path.

use mica_ir::{Tag, TypeId, TypeKind, Unit};

use crate::descriptor::DescExpr;
use crate::{dispatch, is_builtin, SynthError, Synthesizer};

impl Synthesizer {
    /// Synthesize a canonicalized descriptor for runtime-internal use.
    ///
    /// Static and dynamic arrays are both represented as a dynamic array
    /// of the mutability-stripped element and share the single pooled
    /// array slot; pointers, functions, delegates, and interfaces each get
    /// one identity-insensitive slot per category. Everything else — and
    /// any array of class elements — resolves through the exact path.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn synthesize_internal(
        &mut self,
        unit: &mut Unit,
        ty: TypeId,
    ) -> Result<DescExpr, SynthError> {
        self.require_runtime()?;

        // Aliases and enums behave as their underlying type here.
        let t = unit.pool.base_type(&unit.decls, ty);

        match unit.pool.tag(t) {
            Tag::StaticArray | Tag::DynArray => {
                let elem = match unit.pool.elem(t) {
                    Some(elem) => elem,
                    None => return self.exact(unit, t),
                };
                let stripped = unit.pool.strip_qual(elem);
                if unit.pool.tag(stripped) == Tag::Class {
                    // Class elements keep exact identity.
                    self.exact(unit, t)
                } else {
                    let arr = unit.pool.dyn_array(stripped);
                    self.pooled(unit, Tag::DynArray, arr)
                }
            }
            Tag::Pointer | Tag::Function | Tag::Delegate => {
                let tag = unit.pool.tag(t);
                self.pooled(unit, tag, t)
            }
            Tag::Class => {
                let is_interface = match unit.pool.data(t).kind {
                    TypeKind::Class(d) => unit.decls.is_interface(d),
                    _ => false,
                };
                if is_interface {
                    self.pooled(unit, Tag::Class, t)
                } else {
                    self.exact(unit, t)
                }
            }
            _ => self.exact(unit, t),
        }
    }

    /// Use or lazily create the pooled slot for a category. The first
    /// request's type seeds the slot; later requests of the same category
    /// share it regardless of their exact type.
    fn pooled(&mut self, unit: &mut Unit, tag: Tag, ty: TypeId) -> Result<DescExpr, SynthError> {
        if let Some(desc) = self.internal[tag as usize] {
            return Ok(self.reference(desc));
        }
        tracing::debug!(%tag, "internal pool miss");

        let canon = unit.pool.canonical(ty);
        let kind = dispatch(&unit.pool, &unit.decls, canon);
        let desc = self.new_desc(unit, kind, canon, None)?;
        self.descs.get_mut(desc).internal = true;
        // Pooled descriptors never enter a member list; any that the
        // runtime does not already ship are written out on the spot.
        if !is_builtin(&unit.pool, &unit.decls, canon) {
            self.emit(desc);
        }
        self.internal[tag as usize] = Some(desc);
        Ok(self.reference(desc))
    }

    fn exact(&mut self, unit: &mut Unit, ty: TypeId) -> Result<DescExpr, SynthError> {
        let desc = self.synthesize_desc(unit, ty, None)?;
        Ok(self.reference(desc))
    }
}
