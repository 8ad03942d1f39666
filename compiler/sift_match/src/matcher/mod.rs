//! The pattern matcher.
//!
//! Matching is a pure function of (subject type, pattern): it returns the
//! subject type narrowed by a successful match, the type left over when the
//! match fails, and the captures. A narrowed type of `Never` means the
//! pattern can never match this subject.
//!
//! Each pattern form lives in its own module; [`check_pattern`] dispatches.

mod alternatives;
mod class;
mod mapping;
mod sequence;
mod value;

use sift_ir::{PatternId, PatternKind};
use sift_types::{Idx, SymbolEnv};

use crate::bindings::CaptureSet;
use crate::checker::Checker;
use crate::stack::ensure_sufficient_stack;

/// Result of matching one pattern against one subject type.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct PatternType {
    /// Subject type when the pattern matches; `Never` if it cannot.
    pub ty: Idx,
    /// Subject type when the pattern does not match; `Never` if it always
    /// matches.
    pub rest: Idx,
    pub captures: CaptureSet,
}

impl PatternType {
    /// A pattern that can never match `subject`.
    pub fn no_match(subject: Idx) -> Self {
        PatternType {
            ty: Idx::NEVER,
            rest: subject,
            captures: CaptureSet::new(),
        }
    }

    /// A pattern that matches every value of `subject`.
    pub fn irrefutable(subject: Idx, captures: CaptureSet) -> Self {
        PatternType {
            ty: subject,
            rest: Idx::NEVER,
            captures,
        }
    }

    pub fn is_reachable(&self) -> bool {
        !self.ty.is_never()
    }
}

/// Match `pattern` against `subject`.
#[tracing::instrument(level = "trace", skip_all, fields(pattern = pattern.raw(), subject = subject.raw()))]
pub(crate) fn check_pattern(
    ck: &mut Checker<'_>,
    env: &SymbolEnv,
    pattern: PatternId,
    subject: Idx,
) -> PatternType {
    ensure_sufficient_stack(|| {
        let arena = ck.arena;
        let node = arena.get_pattern(pattern);
        let result = match &node.kind {
            PatternKind::Wildcard => PatternType::irrefutable(subject, CaptureSet::new()),
            PatternKind::Capture(name) => {
                PatternType::irrefutable(subject, CaptureSet::single(*name, subject, node.span))
            }
            PatternKind::Value(expr) => value::check_value(ck, env, *expr, subject),
            PatternKind::Sequence(elements) => {
                sequence::check_sequence(ck, env, elements, subject)
            }
            PatternKind::Star(name) => sequence::check_star(ck, *name, node.span, subject),
            PatternKind::Mapping { entries, rest } => {
                mapping::check_mapping(ck, env, entries, *rest, node.span, subject)
            }
            PatternKind::Class {
                class,
                positionals,
                keywords,
            } => class::check_class(ck, env, node.span, *class, positionals, keywords, subject),
            PatternKind::As { inner, name } => {
                alternatives::check_as(ck, env, *inner, *name, node.span, subject)
            }
            PatternKind::Or(alternatives) => {
                alternatives::check_or(ck, env, alternatives, subject)
            }
        };
        tracing::trace!(
            kind = node.kind.describe(),
            narrowed = %ck.format(result.ty),
            rest = %ck.format(result.rest),
            "matched"
        );
        result
    })
}

#[cfg(test)]
mod tests;
