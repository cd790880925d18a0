use std::fmt;

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
    Note,
    Help,
    /// Internal compiler defect, not a user error.
    Bug,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Note => write!(f, "note"),
            Severity::Help => write!(f, "help"),
            Severity::Bug => write!(f, "internal compiler error"),
        }
    }
}

/// A diagnostic message with code, message, and notes.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: ErrorCode,
    pub message: String,
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            severity: Severity::Error,
            code,
            message: String::new(),
            notes: Vec::new(),
        }
    }

    /// Create an internal-compiler-error diagnostic.
    pub fn bug(code: ErrorCode) -> Self {
        Diagnostic {
            severity: Severity::Bug,
            code,
            message: String::new(),
            notes: Vec::new(),
        }
    }

    /// Set the primary message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach a note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)?;
        for note in &self.notes {
            write!(f, "\n  note: {note}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_code_and_notes() {
        let diag = Diagnostic::error(ErrorCode::E4001)
            .with_message("descriptor support not found")
            .with_note("is the runtime support module on the import path?");
        assert_eq!(
            diag.to_string(),
            "error[E4001]: descriptor support not found\n  note: is the runtime support module on the import path?"
        );
    }

    #[test]
    fn bug_severity_renders_as_ice() {
        let diag = Diagnostic::bug(ErrorCode::E9401).with_message("unfoldable reference");
        assert!(diag.to_string().starts_with("internal compiler error[E9401]"));
    }
}
