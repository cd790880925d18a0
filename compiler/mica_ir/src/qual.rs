//! Type qualifiers.
//!
//! Qualifiers are an orthogonal mutability/visibility attribute layered
//! atop a type's structural category. A type may carry several qualifier
//! bits at once (`shared const T`); the *outermost* qualifier — the one the
//! descriptor machinery wraps with — is resolved by precedence.

use bitflags::bitflags;

bitflags! {
    /// Qualifier bits carried by a type.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct Qual: u8 {
        /// `const`: transitively read-only view.
        const CONST = 1 << 0;
        /// `immutable`: transitively immutable data.
        const IMMUTABLE = 1 << 1;
        /// `shared`: visible to multiple threads.
        const SHARED = 1 << 2;
        /// `wild` (`inout`): qualifier-polymorphic.
        const WILD = 1 << 3;
    }
}

/// The outermost qualifier class, resolved by precedence.
///
/// Precedence is shared > const > immutable > wild. A `shared const` type
/// resolves to `Shared` — there is no combined class.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum QualClass {
    Shared,
    Const,
    Immutable,
    Wild,
}

impl Qual {
    /// Resolve the outermost qualifier class, or `None` for an unqualified
    /// type.
    ///
    /// The precedence order is load-bearing: `shared` absorbs any other
    /// bits set alongside it.
    pub fn outermost(self) -> Option<QualClass> {
        if self.contains(Qual::SHARED) {
            Some(QualClass::Shared)
        } else if self.contains(Qual::CONST) {
            Some(QualClass::Const)
        } else if self.contains(Qual::IMMUTABLE) {
            Some(QualClass::Immutable)
        } else if self.contains(Qual::WILD) {
            Some(QualClass::Wild)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests;
