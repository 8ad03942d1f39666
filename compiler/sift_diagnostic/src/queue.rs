//! The queue a checking run reports into.
//!
//! Reports arrive in checking order, which follows the recursion through
//! nested patterns rather than the source. The queue caps the number of
//! errors, drops exact repeats, and hands everything back in source order.

use rustc_hash::FxHashSet;

use crate::Diagnostic;

/// Limits applied while collecting.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Stop accepting anything once this many errors are queued; 0 means no
    /// limit.
    pub error_limit: usize,
    /// Drop a diagnostic equal to one already queued.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 10,
            deduplicate: true,
        }
    }
}

impl DiagnosticConfig {
    /// No limit and no deduplication, for tests.
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct DiagnosticQueue {
    /// Report order.
    pending: Vec<Diagnostic>,
    errors: usize,
    /// Rejected by the limit or as repeats since the last flush.
    dropped: usize,
    seen: FxHashSet<Diagnostic>,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::with_config(DiagnosticConfig::default())
    }

    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            config,
            ..DiagnosticQueue::default()
        }
    }

    /// Queue `diag`. Returns `false` if it was dropped.
    pub fn push(&mut self, diag: Diagnostic) -> bool {
        let repeat = self.config.deduplicate && self.seen.contains(&diag);
        if self.limit_reached() || repeat {
            self.dropped += 1;
            return false;
        }
        if self.config.deduplicate {
            self.seen.insert(diag.clone());
        }
        if diag.is_error() {
            self.errors += 1;
        }
        self.pending.push(diag);
        true
    }

    pub fn error_count(&self) -> usize {
        self.errors
    }

    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    /// Diagnostics dropped since the last flush.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.errors >= self.config.error_limit
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Queued diagnostics in report order.
    pub fn peek(&self) -> &[Diagnostic] {
        &self.pending
    }

    /// Drain the queue in source order and reset the counters.
    ///
    /// Sorting is stable on the primary span's start, so reports at one
    /// position keep their report order. Diagnostics without a primary
    /// label come last.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let mut out = std::mem::take(&mut self.pending);
        out.sort_by_key(|diag| diag.primary_span().map_or(u32::MAX, |span| span.start));
        self.errors = 0;
        self.dropped = 0;
        self.seen.clear();
        out
    }
}
