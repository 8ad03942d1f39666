//! Structural pattern-match checking.
//!
//! Given a subject type and the ordered cases of a `match` statement, this
//! crate computes for every case the narrowed subject type, the types of the
//! names the pattern captures, and whether the case can match at all.
//!
//! # Architecture
//!
//! ```text
//! Checker (one run: pool, arena, class-facts cache, diagnostics)
//!     ├── driver      - cases in order, branch scopes, post-match join
//!     ├── matcher     - recursive (subject, pattern) -> PatternType
//!     │     ├── capability  - sequence-like / mapping-like classification
//!     │     └── class_facts - match fields and self-matching, cached
//!     ├── bindings    - capture merging, Or reconciliation, declared types
//!     └── stmt / expr - stand-in checker for case bodies and guards
//! ```
//!
//! Problems are reported as [`Diagnostic`](sift_diagnostic::Diagnostic)s and
//! never abort checking: every error path recovers with a fallback type.

mod bindings;
mod capability;
mod checker;
mod class_facts;
mod config;
mod driver;
mod errors;
mod expr;
mod matcher;
mod resolve;
mod stack;
mod stmt;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use bindings::{Capture, CaptureSet};
pub use capability::{
    can_match_mapping, can_match_sequence, inner_narrowing_allowed, is_mapping_like,
    is_sequence_like, is_text_type,
};
pub use checker::Checker;
pub use class_facts::{ClassFacts, FactsCache, MatchFieldSource, MatchFields};
pub use config::MatchConfig;
pub use driver::{CaseOutcome, MatchOutcome};
pub use errors::ResolveError;
pub use matcher::PatternType;
pub use stack::ensure_sufficient_stack;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set, and only ever installs once.
///
/// ```bash
/// RUST_LOG=sift_match=debug cargo test
/// RUST_LOG=sift_match::matcher=trace cargo test
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        if std::env::var("RUST_LOG").is_err() {
            return;
        }

        use tracing_subscriber::prelude::*;
        use tracing_subscriber::{fmt, EnvFilter};

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stderr),
            )
            .with(EnvFilter::from_default_env())
            .try_init();
    });
}
