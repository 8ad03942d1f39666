//! Sequence patterns `[a, *rest, b]` and star sub-patterns.

use smallvec::SmallVec;

use sift_ir::{Name, PatternId, Span};
use sift_types::{ClassId, Idx, SymbolEnv, TypeData};

use super::{check_pattern, PatternType};
use crate::bindings::{self, CaptureSet};
use crate::capability;
use crate::checker::Checker;

/// How one union member of the subject looks to a sequence pattern.
#[derive(Clone, Debug)]
enum Shape {
    /// Fixed-length tuple with its item types.
    Fixed(SmallVec<[Idx; 4]>),
    /// Any other sequence-capable type with its element type.
    Homogeneous { container: Idx, elem: Idx },
}

/// Positions of a pattern with `len` elements, optionally starred.
#[derive(Copy, Clone, Debug)]
struct Layout {
    len: usize,
    star: Option<usize>,
}

impl Layout {
    /// Elements that must match exactly one item.
    fn required(self) -> usize {
        self.len - usize::from(self.star.is_some())
    }

    fn fits(self, items: usize) -> bool {
        match self.star {
            Some(_) => items >= self.required(),
            None => items == self.required(),
        }
    }

    /// Pattern slot that tuple item `item` of `items` lines up with.
    fn slot_of_item(self, item: usize, items: usize) -> usize {
        match self.star {
            None => item,
            Some(star) => {
                let star_len = items - self.required();
                if item < star {
                    item
                } else if item < star + star_len {
                    star
                } else {
                    item + 1 - star_len
                }
            }
        }
    }

    /// Tuple items covered by pattern slot `slot`.
    fn items_of_slot(self, slot: usize, items: usize) -> std::ops::Range<usize> {
        match self.star {
            None => slot..slot + 1,
            Some(star) => {
                let star_len = items - self.required();
                match slot.cmp(&star) {
                    std::cmp::Ordering::Less => slot..slot + 1,
                    std::cmp::Ordering::Equal => star..star + star_len,
                    std::cmp::Ordering::Greater => {
                        let item = slot - 1 + star_len;
                        item..item + 1
                    }
                }
            }
        }
    }
}

pub(super) fn check_sequence(
    ck: &mut Checker<'_>,
    env: &SymbolEnv,
    elements: &[PatternId],
    subject: Idx,
) -> PatternType {
    let layout = Layout {
        len: elements.len(),
        star: ck.arena.star_index(elements),
    };

    let mut shapes: Vec<Shape> = Vec::new();
    for member in ck.pool.members(subject) {
        if !capability::can_match_sequence(ck.pool, member) {
            continue;
        }
        let shape = shape_of(ck, member);
        if let Shape::Fixed(items) = &shape {
            if !layout.fits(items.len()) {
                continue;
            }
        }
        shapes.push(shape);
    }
    if shapes.is_empty() {
        tracing::trace!("no sequence-capable member fits");
        return PatternType::no_match(subject);
    }

    // Subject type seen by each pattern slot, across all shapes.
    let mut slot_types: Vec<Idx> = Vec::with_capacity(layout.len);
    for slot in 0..layout.len {
        let mut per_shape: SmallVec<[Idx; 4]> = SmallVec::new();
        for shape in &shapes {
            match shape {
                Shape::Fixed(items) => {
                    for item in layout.items_of_slot(slot, items.len()) {
                        per_shape.push(items[item]);
                    }
                }
                Shape::Homogeneous { elem, .. } => per_shape.push(*elem),
            }
        }
        slot_types.push(ck.pool.union(&per_shape));
    }

    let mut captures = CaptureSet::new();
    let mut matched: Vec<Idx> = Vec::with_capacity(layout.len);
    let mut can_match = true;
    let mut irrefutable = true;
    for (slot, &element) in elements.iter().enumerate() {
        let result = check_pattern(ck, env, element, slot_types[slot]);
        if Some(slot) != layout.star && !result.is_reachable() {
            can_match = false;
        }
        irrefutable &= result.rest.is_never();
        matched.push(if Some(slot) == layout.star {
            slot_types[slot]
        } else {
            result.ty
        });
        bindings::merge(ck, &mut captures, result.captures);
    }
    if !can_match {
        return PatternType {
            captures,
            ..PatternType::no_match(subject)
        };
    }

    let mut narrowed_members: SmallVec<[Idx; 4]> = SmallVec::new();
    let all_fixed = shapes.iter().all(|s| matches!(s, Shape::Fixed(_)));
    for shape in shapes {
        let narrowed = match shape {
            Shape::Fixed(items) => narrow_fixed(ck, layout, &items, &matched),
            Shape::Homogeneous { container, elem } => {
                narrow_homogeneous(ck, layout, container, elem, &matched)
            }
        };
        if !narrowed.is_never() {
            narrowed_members.push(narrowed);
        }
    }
    let narrowed = ck.pool.union(&narrowed_members);
    if narrowed.is_never() {
        return PatternType {
            captures,
            ..PatternType::no_match(subject)
        };
    }

    let rest = if irrefutable && all_fixed {
        ck.pool.conditional(subject, narrowed).1
    } else {
        subject
    };
    PatternType {
        ty: narrowed,
        rest,
        captures,
    }
}

/// A star element: binds a list of the items it absorbs.
pub(super) fn check_star(
    ck: &mut Checker<'_>,
    name: Option<Name>,
    span: Span,
    subject: Idx,
) -> PatternType {
    let captures = match name {
        Some(name) => {
            let list = ck.pool.list(subject);
            CaptureSet::single(name, list, span)
        }
        None => CaptureSet::new(),
    };
    PatternType::irrefutable(subject, captures)
}

fn shape_of(ck: &mut Checker<'_>, member: Idx) -> Shape {
    if let TypeData::Tuple(items) = ck.pool.data(member) {
        return Shape::Fixed(items.clone());
    }
    if member.is_any() {
        return Shape::Homogeneous {
            container: member,
            elem: Idx::ANY,
        };
    }
    let elem = ck
        .pool
        .map_to_supertype(member, ClassId::SEQUENCE)
        .and_then(|args| args.first().copied())
        .unwrap_or(Idx::OBJECT);
    Shape::Homogeneous {
        container: member,
        elem,
    }
}

/// Narrow each tuple item by what its slot matched; `Never` if any item
/// cannot match.
fn narrow_fixed(ck: &mut Checker<'_>, layout: Layout, items: &[Idx], matched: &[Idx]) -> Idx {
    let mut narrowed: SmallVec<[Idx; 4]> = SmallVec::with_capacity(items.len());
    for (index, &item) in items.iter().enumerate() {
        let slot = layout.slot_of_item(index, items.len());
        let new = if Some(slot) == layout.star {
            item
        } else {
            ck.pool.narrow_declared(item, matched[slot])
        };
        if new.is_never() {
            return Idx::NEVER;
        }
        narrowed.push(new);
    }
    ck.pool.tuple(&narrowed)
}

/// Rebuild a homogeneous container around the join of the matched element
/// types, when that is allowed and stays within the container.
fn narrow_homogeneous(
    ck: &mut Checker<'_>,
    layout: Layout,
    container: Idx,
    elem: Idx,
    matched: &[Idx],
) -> Idx {
    if layout.len == 0 {
        return container;
    }
    let mut joined = ck.pool.join_all(matched);
    if joined.is_never() {
        joined = elem;
    }
    if !capability::inner_narrowing_allowed(ck.pool, container) {
        return container;
    }
    let rebuilt = match ck.pool.data(container).clone() {
        TypeData::Instance { class, .. }
            if class != ClassId::OBJECT && capability::is_sequence_like(ck.pool, container) =>
        {
            ck.pool.instance(class, &[joined])
        }
        _ => ck.pool.sequence(joined),
    };
    if ck.pool.is_subtype(rebuilt, container) {
        rebuilt
    } else {
        container
    }
}

#[cfg(test)]
mod tests;
