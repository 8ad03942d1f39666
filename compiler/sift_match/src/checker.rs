//! The checking engine for one run.

use std::rc::Rc;

use sift_diagnostic::{Diagnostic, DiagnosticQueue};
use sift_ir::{ExprArena, MatchStmt, PatternId, Stmt};
use sift_types::{ClassId, Idx, Pool, SymbolEnv};

use crate::class_facts::{ClassFacts, FactsCache};
use crate::config::MatchConfig;
use crate::driver::{self, MatchOutcome};
use crate::matcher::{self, PatternType};
use crate::stmt;

/// Pattern-match checker.
///
/// Owns everything shared across one run: the mutable type pool, the
/// read-only syntax arena, the class-facts cache, and the diagnostic queue.
/// Scopes are passed in explicitly so callers decide what a body sees.
pub struct Checker<'a> {
    pub(crate) pool: &'a mut Pool,
    pub(crate) arena: &'a ExprArena,
    pub(crate) facts: FactsCache,
    pub(crate) diagnostics: DiagnosticQueue,
    pub(crate) config: MatchConfig,
}

impl<'a> Checker<'a> {
    pub fn new(pool: &'a mut Pool, arena: &'a ExprArena) -> Self {
        Self::with_config(pool, arena, MatchConfig::default())
    }

    pub fn with_config(pool: &'a mut Pool, arena: &'a ExprArena, config: MatchConfig) -> Self {
        Checker {
            pool,
            arena,
            facts: FactsCache::new(),
            diagnostics: DiagnosticQueue::with_config(config.diagnostics.clone()),
            config,
        }
    }

    /// Check a statement list in `env`, updating it with what the
    /// statements bind.
    pub fn check_module(&mut self, stmts: &[Stmt], env: &mut SymbolEnv) {
        stmt::check_block(self, stmts, env);
    }

    /// Check one `match` statement in `env`.
    ///
    /// On return `env` holds the post-match types of every variable a
    /// reachable case bound or narrowed.
    pub fn check_match(&mut self, stmt: &MatchStmt, env: &mut SymbolEnv) -> MatchOutcome {
        driver::check_match(self, stmt, env)
    }

    /// Match a single pattern against `subject`.
    pub fn match_pattern(
        &mut self,
        pattern: PatternId,
        subject: Idx,
        env: &SymbolEnv,
    ) -> PatternType {
        matcher::check_pattern(self, env, pattern, subject)
    }

    /// Match-related facts about `class`, computed once per run.
    pub fn class_facts(&mut self, class: ClassId) -> Rc<ClassFacts> {
        self.facts.get(&*self.pool, class)
    }

    pub fn pool(&self) -> &Pool {
        &*self.pool
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Diagnostics reported so far, in report order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.diagnostics.peek()
    }

    /// Take all diagnostics, sorted by source position.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        let dropped = self.diagnostics.dropped();
        if dropped > 0 {
            tracing::debug!(dropped, "diagnostics dropped by the error limit or as repeats");
        }
        self.diagnostics.flush()
    }

    pub(crate) fn report(&mut self, diag: Diagnostic) {
        self.diagnostics.push(diag);
    }

    /// Run `f` with diagnostics discarded.
    ///
    /// Used when a pattern is re-matched only to compute a leftover type.
    pub(crate) fn quietly<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let saved = std::mem::replace(
            &mut self.diagnostics,
            DiagnosticQueue::with_config(self.config.diagnostics.clone()),
        );
        let result = f(self);
        self.diagnostics = saved;
        result
    }

    pub(crate) fn format(&self, ty: Idx) -> String {
        self.pool.format_type(ty)
    }
}
