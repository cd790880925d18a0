//! Error codes for compiler diagnostics.

use std::fmt;

/// Error codes for all compiler diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E4xxx: Descriptor synthesis / codegen preparation
/// - E9xxx: Internal compiler errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Descriptor synthesis (E4xxx)
    /// Runtime descriptor support not found
    E4001,

    // Internal compiler errors (E9xxx)
    /// Descriptor reference did not fold to a constant symbol address
    E9401,
}

impl ErrorCode {
    /// The code as it appears in rendered diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E4001 => "E4001",
            ErrorCode::E9401 => "E9401",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
