//! Diagnostic system for the match checker.
//!
//! Every problem the checker finds is advisory: it becomes a [`Diagnostic`]
//! with an [`ErrorCode`], a message, and a primary span, and checking carries
//! on with a fallback type. Diagnostics are collected in a
//! [`DiagnosticQueue`] and handed to whatever renders them.

mod diagnostic;
mod error_code;
pub mod queue;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
