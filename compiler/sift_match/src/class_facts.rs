//! Per-class facts for class patterns.
//!
//! A class pattern needs to know which attribute each positional
//! sub-pattern matches, and whether the class matches its single positional
//! sub-pattern against the subject itself. Both depend only on the class, so
//! they are computed once per class and cached for the run.

use std::rc::Rc;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use sift_ir::Name;
use sift_types::{ClassFlags, ClassId, Idx, LiteralValue, MatchArgsDecl, Pool, TypeData};

/// Builtins whose instances match a single positional sub-pattern against
/// the whole subject (`int(x)` binds `x` to the subject).
const SELF_MATCHING: [ClassId; 11] = [
    ClassId::BOOL,
    ClassId::BYTEARRAY,
    ClassId::BYTES,
    ClassId::DICT,
    ClassId::FLOAT,
    ClassId::FROZENSET,
    ClassId::INT,
    ClassId::LIST,
    ClassId::SET,
    ClassId::STR,
    ClassId::TUPLE,
];

/// Where a class's match fields come from.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MatchFieldSource {
    /// A match-fields declaration on the class or an ancestor.
    Explicit,
    /// Derived from dataclass fields.
    Dataclass,
}

/// Ordered names that positional sub-patterns bind to.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct MatchFields {
    /// `None` marks a position at or after the first entry that is not a
    /// string literal.
    pub names: Vec<Option<Name>>,
    /// The declaration's length is unknown (not a fixed tuple), so any number
    /// of positionals is accepted and all of them are unnamed.
    pub open: bool,
    pub source: MatchFieldSource,
    pub is_final: bool,
}

impl MatchFields {
    /// Attribute name for positional `index`, if known.
    pub fn name_at(&self, index: usize) -> Option<Name> {
        self.names.get(index).copied().flatten()
    }

    /// Whether `count` positionals fit.
    pub fn accepts(&self, count: usize) -> bool {
        self.open || count <= self.names.len()
    }

    /// Whether any of the first `count` positions has no literal name.
    pub fn has_unnamed(&self, count: usize) -> bool {
        self.open || self.names.iter().take(count).any(Option::is_none)
    }
}

/// Match-related facts about one class.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ClassFacts {
    pub class: ClassId,
    /// `None` when neither the class nor any ancestor defines match fields.
    pub match_fields: Option<MatchFields>,
    pub self_match: bool,
    pub is_final: bool,
}

/// Cache of [`ClassFacts`], keyed by class.
#[derive(Default, Debug)]
pub struct FactsCache {
    facts: FxHashMap<ClassId, Rc<ClassFacts>>,
}

impl FactsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Facts for `class`, computing them on first request.
    pub fn get(&mut self, pool: &Pool, class: ClassId) -> Rc<ClassFacts> {
        if let Some(facts) = self.facts.get(&class) {
            return Rc::clone(facts);
        }
        let facts = Rc::new(compute_facts(pool, class));
        tracing::debug!(
            class = pool.class_name(class),
            self_match = facts.self_match,
            fields = ?facts.match_fields.as_ref().map(|f| f.names.len()),
            "computed class facts"
        );
        self.facts.insert(class, Rc::clone(&facts));
        facts
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}

fn compute_facts(pool: &Pool, class: ClassId) -> ClassFacts {
    let table = pool.classes();
    let def = table.get(class);
    let self_match = !def.flags.contains(ClassFlags::NAMED_TUPLE)
        && SELF_MATCHING
            .iter()
            .any(|&builtin| table.is_subclass(class, builtin));
    ClassFacts {
        class,
        match_fields: match_fields(pool, class),
        self_match,
        is_final: def.is_final(),
    }
}

/// Walk the MRO for the nearest class that defines match fields.
///
/// An explicit declaration wins over a dataclass on the same class; a
/// dataclass with match fields disabled defers to its bases.
fn match_fields(pool: &Pool, class: ClassId) -> Option<MatchFields> {
    let table = pool.classes();
    for &ancestor in table.mro(class) {
        let def = table.get(ancestor);
        if let MatchArgsDecl::Declared { ty, is_final } = def.match_args {
            return Some(declared_fields(pool, ty, is_final));
        }
        if def.dataclass.as_ref().is_some_and(|info| info.match_args) {
            return Some(MatchFields {
                names: dataclass_init_fields(pool, ancestor)
                    .into_iter()
                    .map(Some)
                    .collect(),
                open: false,
                source: MatchFieldSource::Dataclass,
                is_final: true,
            });
        }
    }
    None
}

fn declared_fields(pool: &Pool, ty: Idx, is_final: bool) -> MatchFields {
    let (names, open) = match pool.data(ty) {
        TypeData::Tuple(items) => {
            // Only the literal prefix names positions; everything after the
            // first non-literal item is unnamed.
            let mut names: Vec<Option<Name>> = items
                .iter()
                .map_while(|&item| match pool.data(item) {
                    TypeData::Literal {
                        value: LiteralValue::Str(name),
                        ..
                    } => Some(Some(*name)),
                    _ => None,
                })
                .collect();
            names.resize(items.len(), None);
            (names, false)
        }
        _ => (Vec::new(), true),
    };
    MatchFields {
        names,
        open,
        source: MatchFieldSource::Explicit,
        is_final,
    }
}

/// `__init__` fields of a dataclass, base-class fields first.
///
/// A field redeclared in a subclass keeps its original position.
fn dataclass_init_fields(pool: &Pool, class: ClassId) -> Vec<Name> {
    let table = pool.classes();
    let mut fields: SmallVec<[(Name, bool); 8]> = SmallVec::new();
    for &ancestor in table.mro(class).iter().rev() {
        let Some(info) = &table.get(ancestor).dataclass else {
            continue;
        };
        for field in &info.fields {
            match fields.iter_mut().find(|(name, _)| *name == field.name) {
                Some(existing) => existing.1 = field.init,
                None => fields.push((field.name, field.init)),
            }
        }
    }
    fields
        .into_iter()
        .filter_map(|(name, init)| init.then_some(name))
        .collect()
}
