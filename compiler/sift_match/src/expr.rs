//! Expression typing for guards, subjects, value patterns, and the
//! statements of case bodies.

use sift_ir::{ExprId, ExprKind};
use sift_types::{Idx, LiteralValue, Symbol, SymbolEnv};

use crate::checker::Checker;
use crate::resolve;

/// What the expression of a value pattern denotes.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum PatternValue {
    /// A literal with a literal type, or a `Final` constant holding one.
    Literal(Idx),
    /// `None`.
    None,
    /// A literal without a literal type (`1.5`, `2j`): its instance type.
    Inexact(Idx),
    /// Any other reference: the type it currently holds.
    Reference(Idx),
    /// Resolution failed and was reported.
    Unknown,
}

/// The literal value of an expression, if it is one.
pub(crate) fn literal_value(ck: &Checker<'_>, id: ExprId) -> Option<LiteralValue> {
    match ck.arena.get_expr(id).kind {
        ExprKind::Int(value) => Some(LiteralValue::Int(value)),
        ExprKind::Str(value) => Some(LiteralValue::Str(value)),
        ExprKind::Bytes(value) => Some(LiteralValue::Bytes(value)),
        ExprKind::Bool(value) => Some(LiteralValue::Bool(value)),
        ExprKind::Neg(inner) => match ck.arena.get_expr(inner).kind {
            ExprKind::Int(value) => value.checked_neg().map(LiteralValue::Int),
            _ => None,
        },
        _ => None,
    }
}

pub(crate) fn pattern_value(ck: &mut Checker<'_>, env: &SymbolEnv, id: ExprId) -> PatternValue {
    if let Some(value) = literal_value(ck, id) {
        return PatternValue::Literal(ck.pool.literal(value));
    }
    let arena = ck.arena;
    match arena.get_expr(id).kind {
        ExprKind::None => PatternValue::None,
        ExprKind::Float(_) => PatternValue::Inexact(Idx::FLOAT),
        ExprKind::Complex(_) => PatternValue::Inexact(Idx::COMPLEX),
        ExprKind::Neg(_) => PatternValue::Inexact(infer_expr(ck, env, id)),
        ExprKind::Name(_) | ExprKind::Attribute { .. } => {
            match resolve::resolve_symbol(ck, env, id) {
                Ok(Symbol::Var(var)) => var
                    .final_literal
                    .map_or(PatternValue::Reference(var.current), PatternValue::Literal),
                Ok(_) => PatternValue::Reference(Idx::ANY),
                Err(err) => {
                    let span = arena.get_expr(id).span;
                    ck.report(err.into_diagnostic(span));
                    PatternValue::Unknown
                }
            }
        }
        _ => PatternValue::Reference(infer_expr(ck, env, id)),
    }
}

/// Infer the type of an expression, reporting unresolved names.
pub(crate) fn infer_expr(ck: &mut Checker<'_>, env: &SymbolEnv, id: ExprId) -> Idx {
    let arena = ck.arena;
    let expr = arena.get_expr(id);
    match expr.kind {
        ExprKind::Int(_) => Idx::INT,
        ExprKind::Float(_) => Idx::FLOAT,
        ExprKind::Complex(_) => Idx::COMPLEX,
        ExprKind::Str(_) => Idx::STR,
        ExprKind::Bytes(_) => Idx::BYTES,
        ExprKind::Bool(_) => Idx::BOOL,
        ExprKind::None => Idx::NONE,
        ExprKind::Name(_) | ExprKind::Attribute { .. } => {
            match resolve::resolve_symbol(ck, env, id) {
                Ok(Symbol::Var(var)) => var.current,
                // Class objects and namespaces are not modelled as values.
                Ok(_) => Idx::ANY,
                Err(err) => {
                    ck.report(err.into_diagnostic(expr.span));
                    Idx::ANY
                }
            }
        }
        ExprKind::Neg(operand) => {
            let operand = infer_expr(ck, env, operand);
            match ck.pool.widen_literal(operand) {
                Idx::INT | Idx::BOOL => Idx::INT,
                widened @ (Idx::FLOAT | Idx::COMPLEX) => widened,
                _ => Idx::ANY,
            }
        }
        ExprKind::Compare { left, right, .. } => {
            infer_expr(ck, env, left);
            infer_expr(ck, env, right);
            Idx::BOOL
        }
    }
}

#[cfg(test)]
mod tests;
