//! Narrowing a declared type against a proposed one.

use smallvec::SmallVec;

use crate::{Idx, Pool, TypeData};

impl Pool {
    /// Meet-like narrowing of `declared` by what a check proved, `narrowed`.
    ///
    /// Union members that cannot overlap are dropped. A generic class proved
    /// with `Any` arguments picks up the arguments `declared` implies, so
    /// `Sequence[int]` narrowed by `list[Any]` is `list[int]`. Two unrelated
    /// but overlapping classes narrow to `narrowed`.
    pub fn narrow_declared(&mut self, declared: Idx, narrowed: Idx) -> Idx {
        if declared == narrowed || declared.is_any() {
            return narrowed;
        }
        if narrowed.is_any() {
            return declared;
        }
        if declared.is_never() || narrowed.is_never() {
            return Idx::NEVER;
        }

        if let TypeData::Union(members) = self.data(declared).clone() {
            let parts: SmallVec<[Idx; 4]> = members
                .iter()
                .map(|&m| self.narrow_declared(m, narrowed))
                .collect();
            return self.union(&parts);
        }
        if let TypeData::Union(members) = self.data(narrowed).clone() {
            let parts: SmallVec<[Idx; 4]> = members
                .iter()
                .map(|&m| self.narrow_declared(declared, m))
                .collect();
            return self.union(&parts);
        }

        if !self.is_overlapping(declared, narrowed) {
            return Idx::NEVER;
        }
        if self.is_subtype(narrowed, declared) {
            return self.tighten(narrowed, declared);
        }
        if self.is_subtype(declared, narrowed) {
            return declared;
        }
        narrowed
    }

    /// Fill `Any` arguments of `narrowed` from a generic supertype `declared`.
    fn tighten(&mut self, narrowed: Idx, declared: Idx) -> Idx {
        let (TypeData::Instance { class, args }, TypeData::Instance { class: target, args: known }) =
            (self.data(narrowed).clone(), self.data(declared).clone())
        else {
            return narrowed;
        };
        if args.is_empty() || !args.iter().all(|a| a.is_any()) {
            return narrowed;
        }
        if class == target {
            return declared;
        }

        let generic = self.self_instance(class);
        let Some(mapped) = self.map_to_supertype(generic, target) else {
            return narrowed;
        };
        let mut solved: SmallVec<[Idx; 2]> = args.clone();
        for (position, &arg) in mapped.iter().enumerate() {
            let TypeData::TypeVar { owner, index } = *self.data(arg) else {
                continue;
            };
            if owner != class {
                continue;
            }
            if let (Some(slot), Some(&value)) = (solved.get_mut(index as usize), known.get(position)) {
                *slot = value;
            }
        }

        let candidate = self.instance(class, &solved);
        if self.is_subtype(candidate, declared) {
            candidate
        } else {
            narrowed
        }
    }

    /// Split `current` by an isinstance-style check against `proposed`.
    ///
    /// Returns `(if_type, else_type)`: the part of `current` the check can
    /// accept, narrowed, and the part it definitely rejects.
    pub fn conditional(&mut self, current: Idx, proposed: Idx) -> (Idx, Idx) {
        if proposed.is_any() {
            return (current, current);
        }
        if current.is_any() {
            return (proposed, Idx::ANY);
        }

        let mut accepted: SmallVec<[Idx; 4]> = SmallVec::new();
        for member in self.members(current) {
            if self.is_subtype(member, proposed) {
                accepted.push(member);
            } else if self.is_overlapping(member, proposed) {
                let narrowed = self.narrow_declared(member, proposed);
                accepted.push(narrowed);
            }
        }
        let if_type = self.union(&accepted);
        let else_type = self.restrict_away(current, proposed);
        (if_type, else_type)
    }

    /// Remove from `ty` every union member that is a subtype of `removed`.
    pub fn restrict_away(&mut self, ty: Idx, removed: Idx) -> Idx {
        if ty.is_any() {
            return Idx::ANY;
        }
        if removed.is_any() {
            return Idx::NEVER;
        }
        let mut kept: SmallVec<[Idx; 4]> = SmallVec::new();
        for member in self.members(ty) {
            if !self.is_subtype(member, removed) {
                kept.push(member);
            }
        }
        self.union(&kept)
    }
}
