//! The `Diagnostic` value and its builder.

use std::fmt;

use sift_ir::Span;

use crate::ErrorCode;

/// Errors make a program ill-typed; notes are advisory.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Note,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Note => "note",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A source location with a short explanation.
///
/// The primary label marks the offending pattern or expression; secondary
/// labels point at related nodes, such as the first binding of a name that
/// is bound twice.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
    pub is_primary: bool,
}

/// One reported problem.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    /// Headline, worded exactly as users see it.
    pub message: String,
    pub labels: Vec<Label>,
    /// Free-form follow-up lines.
    pub notes: Vec<String>,
}

impl Diagnostic {
    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Self::with_severity(code, Severity::Error)
    }

    #[cold]
    pub fn note(code: ErrorCode) -> Self {
        Self::with_severity(code, Severity::Note)
    }

    fn with_severity(code: ErrorCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Mark the location the diagnostic is about.
    pub fn with_label(self, span: Span, message: impl Into<String>) -> Self {
        self.labeled(span, message.into(), true)
    }

    /// Point at a related location.
    pub fn with_secondary_label(self, span: Span, message: impl Into<String>) -> Self {
        self.labeled(span, message.into(), false)
    }

    fn labeled(mut self, span: Span, message: String, is_primary: bool) -> Self {
        self.labels.push(Label {
            span,
            message,
            is_primary,
        });
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Span of the first primary label; the queue sorts by it.
    pub fn primary_span(&self) -> Option<Span> {
        self.labels
            .iter()
            .find(|label| label.is_primary)
            .map(|label| label.span)
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Plain-text rendering, one line per label and note:
///
/// ```text
/// error[E3010]: Multiple assignments to name "x" in pattern
///   at 14..15: bound again here
///   see 4..5: first bound here
/// ```
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)?;
        for label in &self.labels {
            let lead = if label.is_primary { "at" } else { "see" };
            write!(f, "\n  {lead} {}: {}", label.span, label.message)?;
        }
        for note in &self.notes {
            write!(f, "\n  note: {note}")?;
        }
        Ok(())
    }
}
