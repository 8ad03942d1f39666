//! Syntax trees handed to the checker by the parser.
//!
//! Children are referenced by arena ids ([`ExprId`](crate::ExprId),
//! [`PatternId`](crate::PatternId)); statements own their bodies directly
//! since nothing needs to refer back into them.

mod expr;
mod patterns;
mod stmt;

pub use expr::{CmpOp, Expr, ExprKind};
pub use patterns::{KeywordPattern, MappingEntry, Pattern, PatternKind};
pub use stmt::{MatchCase, MatchStmt, Stmt, StmtKind};
