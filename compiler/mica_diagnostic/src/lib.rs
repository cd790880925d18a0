//! Diagnostic system for the Mica compiler.
//!
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Notes (context and likely causes)
//!
//! Two severities matter to the descriptor-synthesis phase: `Error` for
//! fatal configuration problems that abort the compilation, and `Bug` for
//! internal invariant violations reported as compiler defects rather than
//! user mistakes.

mod diagnostic;
mod error_code;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
