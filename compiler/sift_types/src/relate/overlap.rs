//! Overlap: can some runtime value inhabit both types?
//!
//! Used for reachability. Overlap is deliberately generous: two unrelated
//! classes overlap (a common subclass could exist) unless one of them is
//! final or their disjoint bases conflict.

use crate::{ClassFlags, ClassId, Idx, Pool, TypeData};

impl Pool {
    pub fn is_overlapping(&mut self, a: Idx, b: Idx) -> bool {
        if a.is_never() || b.is_never() {
            return false;
        }
        if a.is_any() || b.is_any() || a == b {
            return true;
        }

        match (self.data(a).clone(), self.data(b).clone()) {
            (TypeData::Union(members), _) => {
                return members.iter().any(|&m| self.is_overlapping(m, b));
            }
            (_, TypeData::Union(members)) => {
                return members.iter().any(|&m| self.is_overlapping(a, m));
            }
            _ => {}
        }

        if self.is_subtype(a, b) || self.is_subtype(b, a) {
            return true;
        }

        match (self.data(a).clone(), self.data(b).clone()) {
            (TypeData::Literal { .. }, TypeData::Literal { .. })
            | (TypeData::NoneType, _)
            | (_, TypeData::NoneType) => false,
            (TypeData::Literal { fallback, .. }, _) => self.is_overlapping(fallback, b),
            (_, TypeData::Literal { fallback, .. }) => self.is_overlapping(a, fallback),
            (TypeData::TypeVar { .. }, _) | (_, TypeData::TypeVar { .. }) => true,
            (TypeData::Tuple(x), TypeData::Tuple(y)) => {
                x.len() == y.len()
                    && x.iter().zip(y.iter()).all(|(&p, &q)| self.is_overlapping(p, q))
            }
            (TypeData::Tuple(_), _) => {
                let fallback = self.tuple_fallback(a);
                self.is_overlapping(fallback, b)
            }
            (_, TypeData::Tuple(_)) => {
                let fallback = self.tuple_fallback(b);
                self.is_overlapping(a, fallback)
            }
            (TypeData::TypedDict(_), TypeData::TypedDict(_)) => true,
            (TypeData::TypedDict(_), _) => {
                let runtime = self.dict(Idx::STR, Idx::ANY);
                self.is_overlapping(runtime, b)
            }
            (_, TypeData::TypedDict(_)) => {
                let runtime = self.dict(Idx::STR, Idx::ANY);
                self.is_overlapping(a, runtime)
            }
            (
                TypeData::Instance { class: ca, args: _ },
                TypeData::Instance { class: cb, args: _ },
            ) => self.instances_overlap(a, ca, b, cb),
            _ => false,
        }
    }

    fn instances_overlap(&mut self, a: Idx, ca: ClassId, b: Idx, cb: ClassId) -> bool {
        if self.classes().is_subclass(ca, cb) {
            return self.args_overlap(a, b, cb);
        }
        if self.classes().is_subclass(cb, ca) {
            return self.args_overlap(b, a, ca);
        }

        let table = self.classes();
        let (da, db) = (table.get(ca), table.get(cb));
        if da.is_final() || db.is_final() {
            return false;
        }
        if da.flags.contains(ClassFlags::PROTOCOL) || db.flags.contains(ClassFlags::PROTOCOL) {
            return true;
        }
        match (table.disjoint_base(ca), table.disjoint_base(cb)) {
            (Some(x), Some(y)) => table.is_subclass(x, y) || table.is_subclass(y, x),
            _ => true,
        }
    }

    /// `sub` derives from `target`, the class of `sup`: compare arguments.
    fn args_overlap(&mut self, sub: Idx, sup: Idx, target: ClassId) -> bool {
        let Some(mapped) = self.map_to_supertype(sub, target) else {
            return true;
        };
        let expected = self.instance_args(sup);
        mapped
            .iter()
            .zip(expected.iter())
            .all(|(&x, &y)| self.is_overlapping(x, y))
    }
}
