//! Synthesis failures.
//!
//! Only two things can go wrong, and they are very different in kind: a
//! missing runtime support module (user environment problem, fatal) and a
//! descriptor reference that fails to reduce to a constant symbol address
//! (compiler defect).

use std::fmt;

use mica_diagnostic::{Diagnostic, ErrorCode};

use crate::DescKind;

/// Error from descriptor synthesis.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SynthError {
    /// The root descriptor class was not found in the runtime support
    /// module. Compilation cannot proceed; there is no recovery path.
    MissingRuntimeCore,
    /// A descriptor reference did not constant-fold to a symbol address.
    /// Unreachable for well-typed input; reported as a compiler defect.
    NonConstantReference { kind: DescKind },
}

impl fmt::Display for SynthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SynthError::MissingRuntimeCore => {
                write!(f, "`TypeDesc` not found in the runtime support module")
            }
            SynthError::NonConstantReference { kind } => {
                write!(
                    f,
                    "{kind} descriptor reference did not reduce to a constant symbol address"
                )
            }
        }
    }
}

impl std::error::Error for SynthError {}

impl SynthError {
    /// Convert to a reportable diagnostic.
    pub fn to_diagnostic(self) -> Diagnostic {
        match self {
            SynthError::MissingRuntimeCore => Diagnostic::error(ErrorCode::E4001)
                .with_message("`TypeDesc` not found")
                .with_note("the runtime support module may be missing or corrupt"),
            SynthError::NonConstantReference { kind } => Diagnostic::bug(ErrorCode::E9401)
                .with_message(format!(
                    "{kind} descriptor reference did not reduce to a constant symbol address"
                )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mica_diagnostic::Severity;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_runtime_is_a_user_facing_error() {
        let diag = SynthError::MissingRuntimeCore.to_diagnostic();
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.code, ErrorCode::E4001);
        assert_eq!(diag.notes.len(), 1);
    }

    #[test]
    fn unfoldable_reference_is_an_internal_error() {
        let diag = SynthError::NonConstantReference {
            kind: DescKind::Tuple,
        }
        .to_diagnostic();
        assert_eq!(diag.severity, Severity::Bug);
        assert_eq!(diag.code, ErrorCode::E9401);
        assert!(diag.message.contains("tuple"));
    }
}
