//! Statements: the `match` statement and what its case bodies contain.

use crate::{ExprId, Name, PatternId, Span};

/// A statement node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

/// Statement kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    /// Expression statement.
    Expr(ExprId),
    /// `target = value`.
    Assign { target: Name, value: ExprId },
    /// `reveal_type(expr)`.
    Reveal(ExprId),
    /// A nested `match`.
    Match(MatchStmt),
    /// `pass`.
    Pass,
}

/// `case pattern if guard: body`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct MatchCase {
    pub pattern: PatternId,
    pub guard: Option<ExprId>,
    pub body: Vec<Stmt>,
    pub span: Span,
}

/// `match subject: cases`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct MatchStmt {
    pub subject: ExprId,
    pub cases: Vec<MatchCase>,
    pub span: Span,
}
