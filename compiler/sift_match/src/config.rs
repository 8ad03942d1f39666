//! Checker configuration.

use sift_diagnostic::DiagnosticConfig;

/// Configuration for one checking run.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct MatchConfig {
    /// Error limit and deduplication for the diagnostic queue.
    pub diagnostics: DiagnosticConfig,
    /// Match each case against the subject type left over by the unguarded
    /// cases before it, instead of the full subject type.
    ///
    /// Off by default: every case sees the declared subject type, and the
    /// leftover type is only used to decide exhaustiveness.
    pub narrow_across_cases: bool,
}

impl MatchConfig {
    /// No error limit and no deduplication (for testing).
    pub fn unlimited() -> Self {
        MatchConfig {
            diagnostics: DiagnosticConfig::unlimited(),
            narrow_across_cases: false,
        }
    }

    #[must_use]
    pub fn with_narrow_across_cases(mut self, enabled: bool) -> Self {
        self.narrow_across_cases = enabled;
        self
    }
}
