//! Expressions that can appear inside patterns, guards, and case bodies.

use crate::{ExprId, Name, Span};

/// An expression node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

/// Comparison operator in a guard or body expression.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CmpOp {
    Eq,
    NotEq,
    Lt,
    Gt,
}

/// Expression kinds.
///
/// Only the shapes a `match` statement needs: literals and dotted references
/// for value patterns and class references, plus a handful of operators for
/// guards and case bodies.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Integer literal `42`.
    Int(i64),
    /// Float literal, stored as bits for `Hash`.
    Float(u64),
    /// Imaginary literal `2j`, imaginary part stored as bits.
    Complex(u64),
    /// String literal `"text"`.
    Str(Name),
    /// Bytes literal `b"text"`.
    Bytes(Name),
    /// `True` / `False`.
    Bool(bool),
    /// `None`.
    None,
    /// A bare name `x`.
    Name(Name),
    /// Attribute access `base.attr`.
    Attribute { base: ExprId, attr: Name },
    /// Unary minus `-operand`.
    Neg(ExprId),
    /// Comparison `left op right`.
    Compare {
        op: CmpOp,
        left: ExprId,
        right: ExprId,
    },
}

impl ExprKind {
    /// Whether this is a literal the parser allows directly in a value pattern.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            ExprKind::Int(_)
                | ExprKind::Float(_)
                | ExprKind::Complex(_)
                | ExprKind::Str(_)
                | ExprKind::Bytes(_)
                | ExprKind::Bool(_)
                | ExprKind::None
        )
    }
}
