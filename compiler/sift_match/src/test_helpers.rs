//! Test helpers for building match statements and class hierarchies.
//!
//! `Fixture` owns a pool, an arena, and a module scope. Builder methods
//! allocate nodes with increasing spans, so flushed diagnostics come out in
//! construction order.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::rc::Rc;

use sift_diagnostic::{Diagnostic, ErrorCode};
use sift_ir::{
    CmpOp, Expr, ExprArena, ExprId, ExprKind, KeywordPattern, MappingEntry, MatchCase,
    MatchStmt, Name, Pattern, PatternId, PatternKind, Span, Stmt, StmtKind,
};
use sift_types::{
    AliasInfo, ClassDef, ClassId, Idx, LiteralValue, Namespace, Pool, Symbol, SymbolEnv,
    VarInfo,
};

use crate::{Checker, MatchConfig, MatchOutcome, PatternType};

/// Test bed for the checker.
pub struct Fixture {
    pub pool: Pool,
    pub arena: ExprArena,
    pub env: SymbolEnv,
    pub config: MatchConfig,
    next_pos: u32,
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Fixture {
    /// Fresh pool with builtins, empty module scope, unlimited diagnostics.
    pub fn new() -> Self {
        crate::init_tracing();
        Fixture {
            pool: Pool::new(),
            arena: ExprArena::new(),
            env: SymbolEnv::new(),
            config: MatchConfig::unlimited(),
            next_pos: 0,
        }
    }

    pub fn name(&self, s: &str) -> Name {
        self.pool.name(s)
    }

    pub fn span(&mut self) -> Span {
        let start = self.next_pos;
        self.next_pos += 10;
        Span::new(start, start + 5)
    }

    pub fn fmt(&self, ty: Idx) -> String {
        self.pool.format_type(ty)
    }

    // Expressions

    fn expr(&mut self, kind: ExprKind) -> ExprId {
        let span = self.span();
        self.arena.alloc_expr(Expr::new(kind, span))
    }

    pub fn int(&mut self, value: i64) -> ExprId {
        self.expr(ExprKind::Int(value))
    }

    pub fn float(&mut self, value: f64) -> ExprId {
        self.expr(ExprKind::Float(value.to_bits()))
    }

    pub fn complex(&mut self, imag: f64) -> ExprId {
        self.expr(ExprKind::Complex(imag.to_bits()))
    }

    pub fn str_lit(&mut self, value: &str) -> ExprId {
        let name = self.name(value);
        self.expr(ExprKind::Str(name))
    }

    pub fn bytes_lit(&mut self, value: &str) -> ExprId {
        let name = self.name(value);
        self.expr(ExprKind::Bytes(name))
    }

    pub fn bool_lit(&mut self, value: bool) -> ExprId {
        self.expr(ExprKind::Bool(value))
    }

    pub fn none(&mut self) -> ExprId {
        self.expr(ExprKind::None)
    }

    pub fn neg(&mut self, operand: ExprId) -> ExprId {
        self.expr(ExprKind::Neg(operand))
    }

    pub fn compare(&mut self, left: ExprId, right: ExprId) -> ExprId {
        self.expr(ExprKind::Compare {
            op: CmpOp::Eq,
            left,
            right,
        })
    }

    /// `a` or a dotted chain `a.b.c`.
    pub fn var(&mut self, dotted: &str) -> ExprId {
        let mut parts = dotted.split('.');
        let first = parts.next().unwrap();
        let first = self.name(first);
        let mut expr = self.expr(ExprKind::Name(first));
        for part in parts {
            let attr = self.name(part);
            expr = self.expr(ExprKind::Attribute { base: expr, attr });
        }
        expr
    }

    // Patterns

    fn pattern(&mut self, kind: PatternKind) -> PatternId {
        let span = self.span();
        self.arena.alloc_pattern(Pattern::new(kind, span))
    }

    pub fn wildcard(&mut self) -> PatternId {
        self.pattern(PatternKind::Wildcard)
    }

    pub fn capture(&mut self, name: &str) -> PatternId {
        let name = self.name(name);
        self.pattern(PatternKind::Capture(name))
    }

    pub fn value(&mut self, expr: ExprId) -> PatternId {
        self.pattern(PatternKind::Value(expr))
    }

    pub fn int_pat(&mut self, value: i64) -> PatternId {
        let expr = self.int(value);
        self.value(expr)
    }

    pub fn str_pat(&mut self, value: &str) -> PatternId {
        let expr = self.str_lit(value);
        self.value(expr)
    }

    pub fn none_pat(&mut self) -> PatternId {
        let expr = self.none();
        self.value(expr)
    }

    pub fn seq(&mut self, elements: &[PatternId]) -> PatternId {
        self.pattern(PatternKind::Sequence(elements.to_vec()))
    }

    /// `*name`, or `*_` for `None`.
    pub fn star(&mut self, name: Option<&str>) -> PatternId {
        let name = name.map(|n| self.name(n));
        self.pattern(PatternKind::Star(name))
    }

    pub fn mapping(&mut self, entries: &[(ExprId, PatternId)], rest: Option<&str>) -> PatternId {
        let entries = entries
            .iter()
            .map(|&(key, value)| MappingEntry { key, value })
            .collect();
        let rest = rest.map(|n| self.name(n));
        self.pattern(PatternKind::Mapping { entries, rest })
    }

    /// `Cls(positionals..., kw=pattern...)`; `class` may be dotted.
    pub fn class(
        &mut self,
        class: &str,
        positionals: &[PatternId],
        keywords: &[(&str, PatternId)],
    ) -> PatternId {
        let class = self.var(class);
        let keywords = keywords
            .iter()
            .map(|&(name, pattern)| KeywordPattern {
                name: self.name(name),
                pattern,
                span: self.span(),
            })
            .collect();
        self.pattern(PatternKind::Class {
            class,
            positionals: positionals.to_vec(),
            keywords,
        })
    }

    pub fn as_pat(&mut self, inner: PatternId, name: &str) -> PatternId {
        let name = self.name(name);
        self.pattern(PatternKind::As { inner, name })
    }

    pub fn or(&mut self, alternatives: &[PatternId]) -> PatternId {
        self.pattern(PatternKind::Or(alternatives.to_vec()))
    }

    // Statements

    fn stmt(&mut self, kind: StmtKind) -> Stmt {
        let span = self.span();
        Stmt::new(kind, span)
    }

    pub fn reveal(&mut self, dotted: &str) -> Stmt {
        let expr = self.var(dotted);
        self.stmt(StmtKind::Reveal(expr))
    }

    pub fn assign(&mut self, target: &str, value: ExprId) -> Stmt {
        let target = self.name(target);
        self.stmt(StmtKind::Assign { target, value })
    }

    pub fn expr_stmt(&mut self, expr: ExprId) -> Stmt {
        self.stmt(StmtKind::Expr(expr))
    }

    pub fn pass(&mut self) -> Stmt {
        self.stmt(StmtKind::Pass)
    }

    pub fn case(&mut self, pattern: PatternId, body: Vec<Stmt>) -> MatchCase {
        let span = self.span();
        MatchCase {
            pattern,
            guard: None,
            body,
            span,
        }
    }

    pub fn guarded(&mut self, pattern: PatternId, guard: ExprId, body: Vec<Stmt>) -> MatchCase {
        MatchCase {
            guard: Some(guard),
            ..self.case(pattern, body)
        }
    }

    /// `match <subject>:` where `subject` is a (dotted) name.
    pub fn match_stmt(&mut self, subject: &str, cases: Vec<MatchCase>) -> MatchStmt {
        let subject = self.var(subject);
        let span = self.span();
        MatchStmt {
            subject,
            cases,
            span,
        }
    }

    pub fn match_on(&mut self, subject: &str, cases: Vec<MatchCase>) -> Stmt {
        let stmt = self.match_stmt(subject, cases);
        self.stmt(StmtKind::Match(stmt))
    }

    // Scope

    pub fn declare(&mut self, name: &str, ty: Idx) {
        let name = self.name(name);
        self.env.declare_var(name, ty);
    }

    pub fn declare_final(&mut self, name: &str, literal: Idx) {
        let name = self.name(name);
        let declared = self.pool.widen_literal(literal);
        self.env
            .declare(name, Symbol::Var(VarInfo::final_constant(declared, literal)));
    }

    pub fn declare_alias(&mut self, name: &str, target: Idx, has_type_args: bool) {
        let name = self.name(name);
        self.env.declare(
            name,
            Symbol::Alias(AliasInfo {
                target,
                has_type_args,
            }),
        );
    }

    pub fn declare_namespace(&mut self, name: &str, members: Vec<(&str, Symbol)>) {
        let name = self.name(name);
        let namespace = members
            .into_iter()
            .fold(Namespace::new(name), |ns, (member, symbol)| {
                let member = self.pool.name(member);
                ns.with_member(member, symbol)
            });
        self.env.declare(name, Symbol::Namespace(Rc::new(namespace)));
    }

    // Types and classes

    pub fn lit_int(&mut self, value: i64) -> Idx {
        self.pool.literal_int(value)
    }

    pub fn lit_str(&mut self, value: &str) -> Idx {
        let name = self.name(value);
        self.pool.literal(LiteralValue::Str(name))
    }

    pub fn class_def(&self, name: &str) -> ClassDef {
        ClassDef::new(self.name(name))
    }

    pub fn define(&mut self, def: ClassDef) -> ClassId {
        self.pool.define_class(def)
    }

    pub fn instance(&mut self, class: ClassId) -> Idx {
        self.pool.any_instance(class)
    }

    /// A `tuple[Literal["a"], ...]` match-fields declaration.
    pub fn match_args(&mut self, names: &[&str]) -> Idx {
        let items: Vec<Idx> = names.iter().map(|n| self.lit_str(n)).collect();
        self.pool.tuple(&items)
    }

    /// Plain class with attributes and a final match-fields declaration.
    pub fn record(&mut self, name: &str, fields: &[(&str, Idx)]) -> ClassId {
        let mut def = self.class_def(name);
        for &(field, ty) in fields {
            def = def.with_attribute(self.name(field), ty);
        }
        let names: Vec<&str> = fields.iter().map(|&(field, _)| field).collect();
        let match_args = self.match_args(&names);
        self.define(def.with_match_args(match_args, true))
    }

    /// Dataclass with the given `__init__` fields.
    pub fn dataclass(&mut self, name: &str, fields: &[(&str, Idx)]) -> ClassId {
        let fields: Vec<(Name, Idx, bool)> = fields
            .iter()
            .map(|&(field, ty)| (self.name(field), ty, true))
            .collect();
        let def = self.class_def(name).with_dataclass(&fields, true);
        self.define(def)
    }

    // Running

    pub fn checker(&mut self) -> Checker<'_> {
        Checker::with_config(&mut self.pool, &self.arena, self.config.clone())
    }

    /// Check statements in the module scope; returns flushed diagnostics.
    pub fn check(&mut self, stmts: &[Stmt]) -> Vec<Diagnostic> {
        let mut env = self.env.clone();
        let mut checker = Checker::with_config(&mut self.pool, &self.arena, self.config.clone());
        checker.check_module(stmts, &mut env);
        let diagnostics = checker.take_diagnostics();
        self.env = env;
        diagnostics
    }

    pub fn check_match(&mut self, stmt: &MatchStmt) -> (MatchOutcome, Vec<Diagnostic>) {
        let mut env = self.env.clone();
        let mut checker = Checker::with_config(&mut self.pool, &self.arena, self.config.clone());
        let outcome = checker.check_match(stmt, &mut env);
        let diagnostics = checker.take_diagnostics();
        self.env = env;
        (outcome, diagnostics)
    }

    pub fn match_pattern(&mut self, pattern: PatternId, subject: Idx) -> (PatternType, Vec<Diagnostic>) {
        let env = self.env.clone();
        let mut checker = Checker::with_config(&mut self.pool, &self.arena, self.config.clone());
        let result = checker.match_pattern(pattern, subject, &env);
        (result, checker.take_diagnostics())
    }

    /// Formatted type of capture `name`, if bound.
    pub fn capture_type(&self, result: &PatternType, name: &str) -> Option<String> {
        result.captures.get(self.name(name)).map(|ty| self.fmt(ty))
    }

    /// Current type of variable `name` in the module scope.
    pub fn var_type(&self, name: &str) -> Option<String> {
        self.env.lookup_var(self.name(name)).map(|var| self.fmt(var.current))
    }
}

/// Types shown by `reveal_type` notes, in source order.
pub fn reveals(diagnostics: &[Diagnostic]) -> Vec<String> {
    diagnostics
        .iter()
        .filter(|d| d.code == ErrorCode::N1001)
        .map(|d| {
            d.message
                .trim_start_matches("Revealed type is \"")
                .trim_end_matches('"')
                .to_string()
        })
        .collect()
}

/// Codes of everything except `reveal_type` notes, in source order.
pub fn codes(diagnostics: &[Diagnostic]) -> Vec<ErrorCode> {
    diagnostics
        .iter()
        .filter(|d| d.code != ErrorCode::N1001)
        .map(|d| d.code)
        .collect()
}

/// Messages of diagnostics with `code`.
pub fn messages(diagnostics: &[Diagnostic], code: ErrorCode) -> Vec<String> {
    diagnostics
        .iter()
        .filter(|d| d.code == code)
        .map(|d| d.message.clone())
        .collect()
}
