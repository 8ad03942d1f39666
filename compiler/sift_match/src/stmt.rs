//! Stand-in statement checker for case bodies.
//!
//! Only what case bodies need to observe the matcher's results: assignments
//! against declared types, `reveal_type`, nested matches.

use sift_diagnostic::{Diagnostic, ErrorCode};
use sift_ir::{Stmt, StmtKind};
use sift_types::SymbolEnv;

use crate::checker::Checker;
use crate::driver;
use crate::expr;

pub(crate) fn check_block(ck: &mut Checker<'_>, stmts: &[Stmt], env: &mut SymbolEnv) {
    for stmt in stmts {
        check_stmt(ck, stmt, env);
    }
}

fn check_stmt(ck: &mut Checker<'_>, stmt: &Stmt, env: &mut SymbolEnv) {
    match &stmt.kind {
        StmtKind::Expr(expr) => {
            expr::infer_expr(ck, env, *expr);
        }
        StmtKind::Assign { target, value } => {
            let ty = expr::infer_expr(ck, env, *value);
            match env.lookup_var(*target) {
                Some(var) if !ck.pool.is_subtype(ty, var.declared) => {
                    let message = format!(
                        "Incompatible types in assignment (expression has type \"{}\", variable has type \"{}\")",
                        ck.format(ty),
                        ck.format(var.declared),
                    );
                    ck.report(
                        Diagnostic::error(ErrorCode::E2001)
                            .with_message(message)
                            .with_label(stmt.span, "assigned here"),
                    );
                }
                Some(_) => {
                    env.narrow(*target, ty);
                }
                None => env.declare_var(*target, ty),
            }
        }
        StmtKind::Reveal(expr) => {
            let ty = expr::infer_expr(ck, env, *expr);
            let span = ck.arena.get_expr(*expr).span;
            ck.report(
                Diagnostic::note(ErrorCode::N1001)
                    .with_message(format!("Revealed type is \"{}\"", ck.format(ty)))
                    .with_label(span, "revealed here"),
            );
        }
        StmtKind::Match(inner) => {
            driver::check_match(ck, inner, env);
        }
        StmtKind::Pass => {}
    }
}
