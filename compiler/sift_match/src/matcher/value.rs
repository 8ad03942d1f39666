//! Value patterns: literals, `None`, and dotted references.

use sift_ir::ExprId;
use sift_types::{Idx, SymbolEnv, TypeFlags};

use super::PatternType;
use crate::bindings::CaptureSet;
use crate::checker::Checker;
use crate::expr::{self, PatternValue};

pub(super) fn check_value(
    ck: &mut Checker<'_>,
    env: &SymbolEnv,
    expr: ExprId,
    subject: Idx,
) -> PatternType {
    match expr::pattern_value(ck, env, expr) {
        PatternValue::Literal(literal) => check_exact(ck, literal, subject),
        PatternValue::None => check_exact(ck, Idx::NONE, subject),
        PatternValue::Inexact(instance) => {
            if !ck.pool.is_overlapping(subject, instance) {
                return PatternType::no_match(subject);
            }
            let (narrowed, _) = ck.pool.conditional(subject, instance);
            narrowed_or_no_match(narrowed, subject)
        }
        PatternValue::Reference(ty) => {
            // Equality with an arbitrary value can succeed for any subject.
            let (narrowed, _) = ck.pool.conditional(subject, ty);
            let narrowed = if narrowed.is_never() { subject } else { narrowed };
            PatternType {
                ty: narrowed,
                rest: subject,
                captures: CaptureSet::new(),
            }
        }
        PatternValue::Unknown => PatternType {
            ty: subject,
            rest: subject,
            captures: CaptureSet::new(),
        },
    }
}

/// A value with an exact type: a literal, a `Final` literal, or `None`.
///
/// A subject holding literal types narrows to the literal itself; any other
/// subject narrows to the literal's instance type. A failed match removes
/// exactly that literal.
fn check_exact(ck: &mut Checker<'_>, exact: Idx, subject: Idx) -> PatternType {
    if !ck.pool.is_overlapping(subject, exact) {
        return PatternType::no_match(subject);
    }
    let proposed = if ck.pool.flags(subject).contains(TypeFlags::IS_LITERAL) {
        exact
    } else {
        ck.pool.widen_literal(exact)
    };
    let (narrowed, _) = ck.pool.conditional(subject, proposed);
    let rest = ck.pool.restrict_away(subject, exact);
    let mut result = narrowed_or_no_match(narrowed, subject);
    if result.is_reachable() {
        result.rest = rest;
    }
    result
}

fn narrowed_or_no_match(narrowed: Idx, subject: Idx) -> PatternType {
    if narrowed.is_never() {
        return PatternType::no_match(subject);
    }
    PatternType {
        ty: narrowed,
        rest: subject,
        captures: CaptureSet::new(),
    }
}
