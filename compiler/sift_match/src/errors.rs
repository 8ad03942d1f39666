//! Typed resolution failures.
//!
//! Resolving a class reference or a dotted value reference can fail in a
//! few well-defined ways. Each variant maps to exactly one diagnostic.

use sift_diagnostic::{Diagnostic, ErrorCode};
use sift_ir::Span;

/// Why a name in a pattern did not resolve to what the pattern needs.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ResolveError {
    /// No symbol with this (possibly dotted) name.
    #[error("Name \"{name}\" is not defined")]
    UnresolvedName { name: String },

    /// A class pattern names something that is not a class.
    #[error("Class pattern must be a type. Found \"{found}\"")]
    NotAType { found: String },

    /// A class pattern names an alias carrying explicit type arguments.
    #[error("Class pattern class must not be a type alias with type parameters")]
    ParameterizedAlias,
}

impl ResolveError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ResolveError::UnresolvedName { .. } => ErrorCode::E3001,
            ResolveError::NotAType { .. } => ErrorCode::E3002,
            ResolveError::ParameterizedAlias => ErrorCode::E3012,
        }
    }

    /// Convert to the diagnostic reported at `span`.
    pub fn into_diagnostic(self, span: Span) -> Diagnostic {
        let label = match &self {
            ResolveError::UnresolvedName { .. } => "not found in this scope",
            ResolveError::NotAType { .. } => "expected a class",
            ResolveError::ParameterizedAlias => "alias with type arguments",
        };
        Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_label(span, label)
    }
}
