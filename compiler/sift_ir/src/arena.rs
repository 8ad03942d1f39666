//! Arena storage for expressions and patterns.
//!
//! The parser allocates every node once; the checker only reads. Ids are
//! plain `u32` indices, so they are `Copy` and cheap to hash.

use std::fmt;

use crate::ast::{Expr, Pattern, PatternKind};
use crate::{Name, Span};

/// Index of an expression in an [`ExprArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprId({})", self.0)
    }
}

/// Index of a pattern in an [`ExprArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct PatternId(u32);

impl PatternId {
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PatternId({})", self.0)
    }
}

/// Flat storage for the expressions and patterns of one source file.
#[derive(Clone, Default, Debug)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    patterns: Vec<Pattern>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an expression.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` expressions are allocated.
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = u32::try_from(self.exprs.len())
            .unwrap_or_else(|_| panic!("expression arena overflow"));
        self.exprs.push(expr);
        ExprId(id)
    }

    /// Allocate a pattern.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` patterns are allocated.
    pub fn alloc_pattern(&mut self, pattern: Pattern) -> PatternId {
        let id = u32::try_from(self.patterns.len())
            .unwrap_or_else(|_| panic!("pattern arena overflow"));
        self.patterns.push(pattern);
        PatternId(id)
    }

    #[inline]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.0 as usize]
    }

    #[inline]
    pub fn get_pattern(&self, id: PatternId) -> &Pattern {
        &self.patterns[id.0 as usize]
    }

    /// Position of the starred element in a sequence pattern, if any.
    pub fn star_index(&self, elements: &[PatternId]) -> Option<usize> {
        elements
            .iter()
            .position(|&id| matches!(self.get_pattern(id).kind, PatternKind::Star(_)))
    }

    /// Every name a pattern binds, in source order, duplicates included.
    ///
    /// Purely syntactic: an `Or` contributes the names of all its alternatives.
    pub fn bound_names(&self, id: PatternId) -> Vec<(Name, Span)> {
        let mut out = Vec::new();
        self.collect_bound_names(id, &mut out);
        out
    }

    fn collect_bound_names(&self, id: PatternId, out: &mut Vec<(Name, Span)>) {
        let pattern = self.get_pattern(id);
        match &pattern.kind {
            PatternKind::Wildcard | PatternKind::Value(_) | PatternKind::Star(None) => {}
            PatternKind::Capture(name) | PatternKind::Star(Some(name)) => {
                out.push((*name, pattern.span));
            }
            PatternKind::Sequence(elements) | PatternKind::Or(elements) => {
                for &element in elements {
                    self.collect_bound_names(element, out);
                }
            }
            PatternKind::Mapping { entries, rest } => {
                for entry in entries {
                    self.collect_bound_names(entry.value, out);
                }
                if let Some(rest) = rest {
                    out.push((*rest, pattern.span));
                }
            }
            PatternKind::Class {
                positionals,
                keywords,
                ..
            } => {
                for &positional in positionals {
                    self.collect_bound_names(positional, out);
                }
                for keyword in keywords {
                    self.collect_bound_names(keyword.pattern, out);
                }
            }
            PatternKind::As { inner, name } => {
                self.collect_bound_names(*inner, out);
                out.push((*name, pattern.span));
            }
        }
    }
}
