//! Capture bookkeeping.
//!
//! Sub-pattern captures are merged into their parent's set (a name bound
//! twice is an error and the first binding wins), `Or` alternatives are
//! reconciled into one set, and a case's final set is checked against the
//! declared types of the variables it assigns.

use sift_diagnostic::{Diagnostic, ErrorCode};
use sift_ir::{Name, Span};
use sift_types::{Idx, SymbolEnv};

use crate::checker::Checker;

/// One name bound by a pattern.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Capture {
    pub name: Name,
    pub ty: Idx,
    pub span: Span,
}

/// Names bound by a pattern, in binding order, each at most once.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct CaptureSet {
    captures: Vec<Capture>,
}

impl CaptureSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(name: Name, ty: Idx, span: Span) -> Self {
        CaptureSet {
            captures: vec![Capture { name, ty, span }],
        }
    }

    pub fn get(&self, name: Name) -> Option<Idx> {
        self.find(name).map(|capture| capture.ty)
    }

    pub fn find(&self, name: Name) -> Option<&Capture> {
        self.captures.iter().find(|capture| capture.name == name)
    }

    pub fn contains(&self, name: Name) -> bool {
        self.find(name).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Capture> {
        self.captures.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = Name> + '_ {
        self.captures.iter().map(|capture| capture.name)
    }

    pub fn len(&self) -> usize {
        self.captures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.captures.is_empty()
    }

    /// Add a capture without duplicate checking.
    pub(crate) fn push(&mut self, capture: Capture) {
        self.captures.push(capture);
    }
}

impl<'a> IntoIterator for &'a CaptureSet {
    type Item = &'a Capture;
    type IntoIter = std::slice::Iter<'a, Capture>;

    fn into_iter(self) -> Self::IntoIter {
        self.captures.iter()
    }
}

impl IntoIterator for CaptureSet {
    type Item = Capture;
    type IntoIter = std::vec::IntoIter<Capture>;

    fn into_iter(self) -> Self::IntoIter {
        self.captures.into_iter()
    }
}

/// Merge a sub-pattern's captures into `into`.
///
/// A name already present is reported at the later binding, which is
/// dropped.
pub(crate) fn merge(ck: &mut Checker<'_>, into: &mut CaptureSet, from: CaptureSet) {
    for capture in from {
        if let Some(first) = into.find(capture.name).map(|first| first.span) {
            let name = ck.pool.interner().lookup(capture.name);
            ck.report(
                Diagnostic::error(ErrorCode::E3010)
                    .with_message(format!("Multiple assignments to name \"{name}\" in pattern"))
                    .with_label(capture.span, "bound again here")
                    .with_secondary_label(first, "first bound here"),
            );
            continue;
        }
        into.push(capture);
    }
}

/// One alternative of an `Or` pattern, as seen by the merger.
pub(crate) struct Alternative<'c> {
    /// Names the alternative binds syntactically, deduplicated.
    pub(crate) names: &'c [Name],
    pub(crate) captures: &'c CaptureSet,
    pub(crate) reachable: bool,
}

/// Reconcile the captures of `Or` alternatives.
///
/// Every name bound by any alternative is bound by the result. Its type is
/// the join over the reachable alternatives; an alternative that does not
/// bind the name at all contributes `object`.
pub(crate) fn merge_alternatives(ck: &mut Checker<'_>, alternatives: &[Alternative<'_>]) -> CaptureSet {
    let mut order: Vec<Name> = Vec::new();
    for alternative in alternatives {
        for &name in alternative.names {
            if !order.contains(&name) {
                order.push(name);
            }
        }
    }

    let mut merged = CaptureSet::new();
    for name in order {
        let mut types: Vec<Idx> = Vec::new();
        let mut span = None;
        for alternative in alternatives.iter().filter(|a| a.reachable) {
            if let Some(capture) = alternative.captures.find(name) {
                types.push(capture.ty);
                span.get_or_insert(capture.span);
            } else if !alternative.names.contains(&name) {
                types.push(Idx::OBJECT);
            }
        }
        let Some(span) = span else {
            continue;
        };
        let ty = ck.pool.join_all(&types);
        merged.push(Capture { name, ty, span });
    }
    merged
}

/// Bind a case's captures in its branch scope.
///
/// A capture assigning an existing variable must fit its declared type;
/// otherwise it is reported and the variable keeps its declared type.
/// Returns the effective type of each capture.
pub(crate) fn bind_captures(
    ck: &mut Checker<'_>,
    env: &mut SymbolEnv,
    captures: &CaptureSet,
) -> Vec<(Name, Idx)> {
    let mut bound = Vec::with_capacity(captures.len());
    for capture in captures {
        let effective = match env.lookup_var(capture.name) {
            Some(var) if ck.pool.is_subtype(capture.ty, var.declared) => capture.ty,
            Some(var) => {
                let message = format!(
                    "Incompatible types in capture pattern (pattern captures type \"{}\", variable has type \"{}\")",
                    ck.format(capture.ty),
                    ck.format(var.declared),
                );
                ck.report(
                    Diagnostic::error(ErrorCode::E3009)
                        .with_message(message)
                        .with_label(capture.span, "captured here"),
                );
                var.declared
            }
            None => {
                env.declare_var(capture.name, capture.ty);
                bound.push((capture.name, capture.ty));
                continue;
            }
        };
        env.narrow(capture.name, effective);
        tracing::trace!(
            name = ck.pool.interner().lookup(capture.name),
            ty = %ck.format(effective),
            "bound capture"
        );
        bound.push((capture.name, effective));
    }
    bound
}
