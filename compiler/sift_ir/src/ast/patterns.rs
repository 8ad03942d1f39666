//! Match patterns.
//!
//! One closed enum covers every pattern form; the checker dispatches on it
//! exhaustively.

use crate::{ExprId, Name, PatternId, Span};

/// A pattern node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Pattern {
    pub kind: PatternKind,
    pub span: Span,
}

impl Pattern {
    pub fn new(kind: PatternKind, span: Span) -> Self {
        Pattern { kind, span }
    }
}

/// `key: pattern` inside a mapping pattern.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct MappingEntry {
    pub key: ExprId,
    pub value: PatternId,
}

/// `name=pattern` inside a class pattern.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct KeywordPattern {
    pub name: Name,
    pub pattern: PatternId,
    pub span: Span,
}

/// Pattern kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum PatternKind {
    /// `_` - matches anything, binds nothing.
    Wildcard,
    /// `x` - matches anything, binds `x`. Never `_`.
    Capture(Name),
    /// A literal or a dotted reference (`Color.RED`).
    Value(ExprId),
    /// `[p, *rest, q]` or `(p, q)`. At most one element is a [`PatternKind::Star`].
    Sequence(Vec<PatternId>),
    /// `*name` / `*_` - only valid directly inside a sequence pattern.
    Star(Option<Name>),
    /// `{k: p, **rest}`.
    Mapping {
        entries: Vec<MappingEntry>,
        rest: Option<Name>,
    },
    /// `Cls(p, q, attr=r)`. Keyword names may repeat; the checker reports it.
    Class {
        class: ExprId,
        positionals: Vec<PatternId>,
        keywords: Vec<KeywordPattern>,
    },
    /// `p as name`.
    As { inner: PatternId, name: Name },
    /// `p | q | r` - never empty.
    Or(Vec<PatternId>),
}

impl PatternKind {
    /// Short human-readable kind name, used in trace output.
    pub fn describe(&self) -> &'static str {
        match self {
            PatternKind::Wildcard => "wildcard",
            PatternKind::Capture(_) => "capture",
            PatternKind::Value(_) => "value",
            PatternKind::Sequence(_) => "sequence",
            PatternKind::Star(_) => "star",
            PatternKind::Mapping { .. } => "mapping",
            PatternKind::Class { .. } => "class",
            PatternKind::As { .. } => "as",
            PatternKind::Or(_) => "or",
        }
    }
}
