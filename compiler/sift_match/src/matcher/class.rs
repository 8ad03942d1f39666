//! Class patterns `Cls(p, q, attr=r)`.

use smallvec::SmallVec;

use sift_diagnostic::{Diagnostic, ErrorCode};
use sift_ir::{ExprId, KeywordPattern, Name, PatternId, Span};
use sift_types::{Idx, SymbolEnv};

use super::{check_pattern, PatternType};
use crate::bindings::{self, CaptureSet};
use crate::checker::Checker;
use crate::class_facts::MatchFieldSource;
use crate::resolve;

pub(super) fn check_class(
    ck: &mut Checker<'_>,
    env: &SymbolEnv,
    span: Span,
    class: ExprId,
    positionals: &[PatternId],
    keywords: &[KeywordPattern],
    subject: Idx,
) -> PatternType {
    let arena = ck.arena;
    let typ = match resolve::resolve_class_ref(ck, env, class) {
        Ok(typ) => typ,
        Err(err) => {
            ck.report(err.into_diagnostic(arena.get_expr(class).span));
            // Sub-patterns are still checked so their own problems surface.
            let mut captures = CaptureSet::new();
            let subpatterns = positionals
                .iter()
                .copied()
                .chain(keywords.iter().map(|keyword| keyword.pattern));
            for pattern in subpatterns {
                let result = check_pattern(ck, env, pattern, Idx::ANY);
                bindings::merge(ck, &mut captures, result.captures);
            }
            return PatternType {
                captures,
                ..PatternType::no_match(subject)
            };
        }
    };

    let (if_type, else_type) = ck.pool.conditional(subject, typ);
    if if_type.is_never() {
        return PatternType::no_match(subject);
    }

    let facts = ck
        .pool
        .class_of(typ)
        .map(|class| ck.facts.get(&*ck.pool, class));
    let class_name = ck.format(typ);

    // Sub-patterns paired with the attribute they match; `None` matches
    // against the permissive fallback.
    let mut pairs: SmallVec<[(Option<Name>, PatternId); 4]> = SmallVec::new();
    let mut positional_names: SmallVec<[Name; 4]> = SmallVec::new();
    let mut captures = CaptureSet::new();
    let mut can_match = true;
    let mut rest = else_type;

    if !positionals.is_empty() {
        if facts.as_ref().is_some_and(|facts| facts.self_match) {
            if positionals.len() > 1 {
                report_too_many(ck, span);
                return PatternType::no_match(subject);
            }
            let result = check_pattern(ck, env, positionals[0], if_type);
            if !result.is_reachable() {
                can_match = false;
            } else if !result.rest.is_never() {
                rest = subject;
            }
            bindings::merge(ck, &mut captures, result.captures);
        } else {
            match facts.as_ref().and_then(|facts| facts.match_fields.as_ref()) {
                None => {
                    ck.report(
                        Diagnostic::error(ErrorCode::E3006)
                            .with_message("Class doesn't define match fields")
                            .with_label(span, format!("\"{class_name}\" has no match fields"))
                            .with_note("positional sub-patterns are matched against Any"),
                    );
                    pairs.extend(positionals.iter().map(|&pattern| (None, pattern)));
                }
                Some(fields) => {
                    if !fields.accepts(positionals.len()) {
                        report_too_many(ck, span);
                        return PatternType::no_match(subject);
                    }
                    if fields.source == MatchFieldSource::Explicit && !fields.is_final {
                        ck.report(
                            Diagnostic::note(ErrorCode::E3007)
                                .with_message(format!(
                                    "Match fields of \"{class_name}\" are not declared Final"
                                ))
                                .with_label(span, "positional patterns rely on them"),
                        );
                    }
                    if fields.has_unnamed(positionals.len()) {
                        ck.report(
                            Diagnostic::note(ErrorCode::E3008)
                                .with_message(format!(
                                    "Match fields of \"{class_name}\" are not all string literals"
                                ))
                                .with_label(span, "unnamed positions match anything"),
                        );
                    }
                    for (index, &pattern) in positionals.iter().enumerate() {
                        let name = fields.name_at(index);
                        if let Some(name) = name {
                            positional_names.push(name);
                        }
                        pairs.push((name, pattern));
                    }
                }
            }
        }
    }

    let mut has_duplicates = false;
    let mut seen: SmallVec<[Name; 4]> = SmallVec::new();
    for keyword in keywords {
        let name = ck.pool.interner().lookup(keyword.name);
        if positional_names.contains(&keyword.name) {
            ck.report(
                Diagnostic::error(ErrorCode::E3005)
                    .with_message(format!(
                        "Keyword \"{name}\" already matches a positional pattern"
                    ))
                    .with_label(keyword.span, "already matched positionally"),
            );
            has_duplicates = true;
        } else if seen.contains(&keyword.name) {
            ck.report(
                Diagnostic::error(ErrorCode::E3004)
                    .with_message(format!("Duplicate keyword pattern \"{name}\""))
                    .with_label(keyword.span, "repeated keyword"),
            );
            has_duplicates = true;
        }
        seen.push(keyword.name);
        pairs.push((Some(keyword.name), keyword.pattern));
    }
    if has_duplicates {
        return PatternType::no_match(subject);
    }

    for (name, pattern) in pairs {
        let attribute_type = name
            .and_then(|name| ck.pool.lookup_attribute(if_type, name))
            .unwrap_or(Idx::ANY);
        let result = check_pattern(ck, env, pattern, attribute_type);
        if !result.is_reachable() {
            can_match = false;
        } else if !result.rest.is_never() {
            rest = subject;
        }
        bindings::merge(ck, &mut captures, result.captures);
    }

    if !can_match {
        return PatternType {
            captures,
            ..PatternType::no_match(subject)
        };
    }
    PatternType {
        ty: if_type,
        rest,
        captures,
    }
}

fn report_too_many(ck: &mut Checker<'_>, span: Span) {
    ck.report(
        Diagnostic::error(ErrorCode::E3003)
            .with_message("Too many positional patterns for class pattern")
            .with_label(span, "more positionals than match fields"),
    );
}
