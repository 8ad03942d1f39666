//! `p as name` and `p | q` patterns.

use smallvec::SmallVec;

use sift_diagnostic::{Diagnostic, ErrorCode};
use sift_ir::{Name, PatternId, Span};
use sift_types::{Idx, SymbolEnv};

use super::{check_pattern, PatternType};
use crate::bindings::{self, Alternative, CaptureSet};
use crate::checker::Checker;

pub(super) fn check_as(
    ck: &mut Checker<'_>,
    env: &SymbolEnv,
    inner: PatternId,
    name: Name,
    span: Span,
    subject: Idx,
) -> PatternType {
    let mut result = check_pattern(ck, env, inner, subject);
    if !result.is_reachable() {
        return result;
    }
    let captures = std::mem::take(&mut result.captures);
    let mut merged = CaptureSet::new();
    bindings::merge(ck, &mut merged, captures);
    bindings::merge(ck, &mut merged, CaptureSet::single(name, result.ty, span));
    result.captures = merged;
    result
}

/// Every alternative is matched against the same subject. The pattern
/// matches what any alternative matches and leaves what none of them
/// matches.
pub(super) fn check_or(
    ck: &mut Checker<'_>,
    env: &SymbolEnv,
    alternatives: &[PatternId],
    subject: Idx,
) -> PatternType {
    let arena = ck.arena;
    let results: Vec<PatternType> = alternatives
        .iter()
        .map(|&alternative| check_pattern(ck, env, alternative, subject))
        .collect();

    let name_sets: Vec<Vec<Name>> = alternatives
        .iter()
        .map(|&alternative| {
            let mut names: Vec<Name> = arena
                .bound_names(alternative)
                .into_iter()
                .map(|(name, _)| name)
                .collect();
            names.sort_unstable();
            names.dedup();
            names
        })
        .collect();
    if let Some((first, others)) = name_sets.split_first() {
        for (index, names) in others.iter().enumerate() {
            if names != first {
                let span = arena.get_pattern(alternatives[index + 1]).span;
                ck.report(
                    Diagnostic::error(ErrorCode::E3011)
                        .with_message("Alternative patterns bind different names")
                        .with_label(span, "binds a different set of names"),
                );
            }
        }
    }

    let merged: Vec<Alternative<'_>> = results
        .iter()
        .zip(&name_sets)
        .map(|(result, names)| Alternative {
            names,
            captures: &result.captures,
            reachable: result.is_reachable(),
        })
        .collect();
    let captures = bindings::merge_alternatives(ck, &merged);

    let reachable: SmallVec<[Idx; 4]> = results
        .iter()
        .filter(|result| result.is_reachable())
        .map(|result| result.ty)
        .collect();
    let narrowed = ck.pool.union(&reachable);
    if narrowed.is_never() {
        return PatternType::no_match(subject);
    }
    let rest = results
        .iter()
        .fold(subject, |rest, result| ck.pool.narrow_declared(rest, result.rest));
    PatternType {
        ty: narrowed,
        rest,
        captures,
    }
}
