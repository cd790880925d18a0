//! Runtime type-descriptor synthesis.
//!
//! The Mica runtime consumes per-type descriptor objects (`TypeDesc`) for
//! equality, hashing, formatting, exception dispatch, and variadic-argument
//! marshalling. This crate synthesizes those descriptors at compile time:
//!
//! - [`dispatch`] maps a type's structural category to the specialized
//!   descriptor layout
//! - [`is_builtin`] decides whether the runtime support library already
//!   ships the descriptor
//! - [`Synthesizer::synthesize`] memoizes one descriptor per canonical
//!   type and decides which module emits it (or emits immediately when no
//!   module context is given)
//! - [`Synthesizer::synthesize_internal`] is the coarser entry point for
//!   runtime-internal algorithms, canonicalizing structurally similar
//!   types onto one pooled descriptor per category
//! - [`Synthesizer::argument_tuple`] marshals call-site argument types
//!   into a tuple descriptor for variadic calls
//!
//! All synthesis state lives in the [`Synthesizer`]; there are no globals,
//! so tests and drivers get deterministic, isolated sessions.

mod builtin;
mod descriptor;
mod error;
mod kind;
mod runtime;
mod synth;

pub use builtin::is_builtin;
pub use descriptor::{DescExpr, DescId, DescTable, Descriptor};
pub use error::SynthError;
pub use kind::{dispatch, DescKind};
pub use runtime::RuntimeCore;
pub use synth::{NullEmitter, ObjectEmitter, Scope, Synthesizer};

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::DescId;
    mica_ir::static_assert_size!(DescId, 4);
}
