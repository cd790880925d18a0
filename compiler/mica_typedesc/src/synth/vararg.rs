//! Variadic argument tuple marshalling.
//!
//! A variadic call passes the callee one descriptor covering the static
//! types of all its arguments. The argument types become a parameter
//! tuple, the tuple goes through ordinary synthesis, and the resulting
//! reference must fold to a compile-time symbol address — the callee
//! indexes into the tuple descriptor at run time, so a runtime-computed
//! reference has nowhere to live.

use mica_ir::{Param, TypeId, Unit};

use crate::descriptor::DescExpr;
use crate::{SynthError, Synthesizer};

impl Synthesizer {
    /// Build the tuple descriptor for a variadic call site.
    ///
    /// `arg_types` are the static types of the argument expressions, in
    /// call order; each becomes an unnamed, default-less input parameter.
    /// Returns the constant-folded symbol address of the tuple
    /// descriptor.
    #[tracing::instrument(level = "debug", skip_all, fields(args = arg_types.len()))]
    pub fn argument_tuple(
        &mut self,
        unit: &mut Unit,
        arg_types: &[TypeId],
    ) -> Result<DescExpr, SynthError> {
        self.require_runtime()?;

        let params: Vec<Param> = arg_types
            .iter()
            .map(|&ty| Param { ty, name: None })
            .collect();
        let tup = unit.pool.tuple(&params);

        // Tuple shapes are cached like any other type; emission policy is
        // irrelevant at a call site, so no module context is given.
        let desc = self.synthesize_desc(unit, tup, None)?;
        match self.reference(desc).const_fold() {
            folded @ DescExpr::SymOff { .. } => Ok(folded),
            DescExpr::Addr { desc, .. } => Err(SynthError::NonConstantReference {
                kind: self.descriptors().get(desc).kind,
            }),
        }
    }
}
