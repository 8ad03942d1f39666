//! Branch-narrowing driver for `match` statements.
//!
//! Cases are matched in order. Each reachable case checks its guard and
//! body in its own child scope holding the narrowed subject and the
//! captures. Unreachable cases are skipped, body included. After the match,
//! every variable a reachable branch bound or narrowed gets the union of
//! its branch-exit types (plus its pre-match type when the cases are not
//! exhaustive).

use sift_ir::{ExprKind, MatchStmt, Name, PatternId};
use sift_types::{Idx, Symbol, SymbolEnv, VarInfo};

use crate::bindings;
use crate::checker::Checker;
use crate::expr;
use crate::matcher::{self, PatternType};
use crate::stack::ensure_sufficient_stack;
use crate::stmt;

/// Outcome of one case.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct CaseOutcome {
    /// Subject type inside the case; `Never` when unreachable.
    pub narrowed: Idx,
    /// Effective type of each capture, in binding order.
    pub captures: Vec<(Name, Idx)>,
    pub reachable: bool,
}

/// Outcome of a whole `match` statement.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct MatchOutcome {
    pub subject: Idx,
    pub cases: Vec<CaseOutcome>,
    /// Subject type no unguarded case matches.
    pub remaining: Idx,
    /// The unguarded cases cover every value of the subject.
    pub exhaustive: bool,
}

#[tracing::instrument(level = "debug", skip_all, fields(cases = stmt.cases.len()))]
pub(crate) fn check_match(
    ck: &mut Checker<'_>,
    stmt: &MatchStmt,
    env: &mut SymbolEnv,
) -> MatchOutcome {
    ensure_sufficient_stack(|| check_match_inner(ck, stmt, env))
}

fn check_match_inner(ck: &mut Checker<'_>, stmt: &MatchStmt, env: &mut SymbolEnv) -> MatchOutcome {
    let arena = ck.arena;
    let subject = expr::infer_expr(ck, env, stmt.subject);
    let subject_name = match arena.get_expr(stmt.subject).kind {
        ExprKind::Name(name) if env.lookup_var(name).is_some() => Some(name),
        _ => None,
    };
    tracing::debug!(subject = %ck.format(subject), "checking match");

    let mut remaining = subject;
    let mut exits: Vec<SymbolEnv> = Vec::new();
    let mut cases = Vec::with_capacity(stmt.cases.len());

    for (index, case) in stmt.cases.iter().enumerate() {
        let against = if ck.config.narrow_across_cases {
            remaining
        } else {
            subject
        };
        let result = matcher::check_pattern(ck, env, case.pattern, against);

        if case.guard.is_none() {
            remaining = leftover(ck, env, case.pattern, &result, against, remaining);
        }

        if !result.is_reachable() {
            tracing::debug!(case = index, "case is unreachable; body skipped");
            cases.push(CaseOutcome {
                narrowed: Idx::NEVER,
                captures: Vec::new(),
                reachable: false,
            });
            continue;
        }

        let mut branch = env.child();
        if let Some(name) = subject_name {
            branch.narrow(name, result.ty);
        }
        let captures = bindings::bind_captures(ck, &mut branch, &result.captures);
        if let Some(guard) = case.guard {
            expr::infer_expr(ck, &branch, guard);
        }
        stmt::check_block(ck, &case.body, &mut branch);
        exits.push(branch);
        cases.push(CaseOutcome {
            narrowed: result.ty,
            captures,
            reachable: true,
        });
    }

    let exhaustive = remaining.is_never();
    join_exits(ck, env, &exits, exhaustive);
    MatchOutcome {
        subject,
        cases,
        remaining,
        exhaustive,
    }
}

/// Subject type left after an unguarded case fails to match.
fn leftover(
    ck: &mut Checker<'_>,
    env: &SymbolEnv,
    pattern: PatternId,
    result: &PatternType,
    against: Idx,
    remaining: Idx,
) -> Idx {
    if remaining.is_never() {
        return Idx::NEVER;
    }
    if against == remaining {
        return result.rest;
    }
    // The reported match ran against the full subject; re-run it against
    // what is left, without reporting anything twice.
    ck.quietly(|ck| matcher::check_pattern(ck, env, pattern, remaining).rest)
}

/// Merge branch-exit scopes back into `env`.
fn join_exits(ck: &mut Checker<'_>, env: &mut SymbolEnv, exits: &[SymbolEnv], exhaustive: bool) {
    let mut names: Vec<Name> = exits
        .iter()
        .flat_map(|exit| exit.local_vars().into_iter().map(|(name, _)| name))
        .collect();
    names.sort_unstable();
    names.dedup();

    for name in names {
        let before = env.lookup_var(name);
        let mut types: Vec<Idx> = exits
            .iter()
            .filter_map(|exit| exit.lookup_var(name))
            .map(|var| var.current)
            .collect();
        if !exhaustive {
            if let Some(before) = before {
                types.push(before.current);
            }
        }
        let joined = ck.pool.union(&types);
        match before {
            Some(before) => {
                if before.current != joined {
                    tracing::debug!(
                        name = ck.pool.interner().lookup(name),
                        ty = %ck.format(joined),
                        "variable joined after match"
                    );
                }
                env.narrow(name, joined);
            }
            None => {
                let declared: Vec<Idx> = exits
                    .iter()
                    .filter_map(|exit| exit.lookup_var(name))
                    .map(|var| var.declared)
                    .collect();
                let declared = ck.pool.union(&declared);
                let var = VarInfo {
                    declared,
                    current: joined,
                    final_literal: None,
                };
                env.declare(name, Symbol::Var(var));
            }
        }
    }
}
