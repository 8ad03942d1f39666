//! Mapping patterns `{"k": p, **rest}`.
//!
//! Whether a key is present is a runtime question, so a mapping pattern is
//! reachable whenever some subject member can be a mapping, and a failed
//! match never narrows the subject.

use smallvec::SmallVec;

use sift_ir::{MappingEntry, Name, Span};
use sift_types::{ClassId, Idx, LiteralValue, SymbolEnv, TypeData};

use super::{check_pattern, PatternType};
use crate::bindings::{self, CaptureSet};
use crate::capability;
use crate::checker::Checker;
use crate::expr::{self, PatternValue};

/// A subject member that can match a mapping pattern.
#[derive(Copy, Clone, Debug)]
enum Candidate {
    Any,
    TypedDict(ClassId),
    /// A `Mapping[key, value]` subtype.
    Mapping { key: Idx, value: Idx },
    /// A supertype of `Mapping`, such as `object`.
    Open,
}

pub(super) fn check_mapping(
    ck: &mut Checker<'_>,
    env: &SymbolEnv,
    entries: &[MappingEntry],
    rest: Option<Name>,
    span: Span,
    subject: Idx,
) -> PatternType {
    let mut candidates: SmallVec<[Candidate; 2]> = SmallVec::new();
    let mut qualifying: SmallVec<[Idx; 4]> = SmallVec::new();
    for member in ck.pool.members(subject) {
        if let Some(candidate) = candidate_of(ck, member) {
            candidates.push(candidate);
            qualifying.push(member);
        }
    }
    if candidates.is_empty() {
        tracing::trace!("no mapping-capable member");
        return PatternType::no_match(subject);
    }

    let mut captures = CaptureSet::new();
    for entry in entries {
        let key = literal_key(ck, env, entry);
        let mut value_types: SmallVec<[Idx; 4]> = SmallVec::new();
        for &candidate in &candidates {
            value_types.push(value_type(ck, candidate, key));
        }
        let value_type = ck.pool.union(&value_types);
        let result = check_pattern(ck, env, entry.value, value_type);
        bindings::merge(ck, &mut captures, result.captures);
    }

    if let Some(rest) = rest {
        let rest_type = rest_type(ck, &candidates);
        bindings::merge(ck, &mut captures, CaptureSet::single(rest, rest_type, span));
    }

    let narrowed = ck.pool.union(&qualifying);
    PatternType {
        ty: narrowed,
        rest: subject,
        captures,
    }
}

fn candidate_of(ck: &mut Checker<'_>, member: Idx) -> Option<Candidate> {
    if !capability::can_match_mapping(ck.pool, member) {
        return None;
    }
    match *ck.pool.data(member) {
        TypeData::Any => return Some(Candidate::Any),
        TypeData::TypedDict(class) => return Some(Candidate::TypedDict(class)),
        _ => {}
    }
    if !capability::is_mapping_like(ck.pool, member) {
        return Some(Candidate::Open);
    }
    let args = ck.pool.map_to_supertype(member, ClassId::MAPPING)?;
    let key = args.first().copied().unwrap_or(Idx::ANY);
    let value = args.get(1).copied().unwrap_or(Idx::ANY);
    Some(Candidate::Mapping { key, value })
}

/// The key as a string literal, when it is one (directly or as a `Final`
/// constant). The key expression is always checked.
fn literal_key(ck: &mut Checker<'_>, env: &SymbolEnv, entry: &MappingEntry) -> Option<Name> {
    let literal = match expr::pattern_value(ck, env, entry.key) {
        PatternValue::Literal(literal) => literal,
        _ => return None,
    };
    match ck.pool.data(literal) {
        TypeData::Literal {
            value: LiteralValue::Str(name),
            ..
        } => Some(*name),
        _ => None,
    }
}

fn value_type(ck: &mut Checker<'_>, candidate: Candidate, key: Option<Name>) -> Idx {
    match candidate {
        Candidate::Any => Idx::ANY,
        Candidate::Open => Idx::OBJECT,
        Candidate::Mapping { value, .. } => value,
        Candidate::TypedDict(class) => {
            let table = ck.pool.classes();
            key.and_then(|key| {
                table
                    .mro(class)
                    .iter()
                    .find_map(|&ancestor| table.get(ancestor).typed_dict_field(key))
            })
            .unwrap_or(Idx::OBJECT)
        }
    }
}

/// Type bound by `**rest`.
fn rest_type(ck: &mut Checker<'_>, candidates: &[Candidate]) -> Idx {
    match candidates {
        [Candidate::Mapping { key, value }] => ck.pool.dict(*key, *value),
        [Candidate::TypedDict(_)] => ck.pool.dict(Idx::STR, Idx::OBJECT),
        _ => ck.pool.dict(Idx::OBJECT, Idx::OBJECT),
    }
}
