//! Least upper bound.

use smallvec::SmallVec;

use crate::{ClassId, Idx, Pool, TypeData, Variance};

impl Pool {
    /// Join two types.
    ///
    /// Nominal instances join to the first common base in the MRO of `a`
    /// whose type arguments can be reconciled; invariant parameters with
    /// different arguments skip to the next base. Unions, `None` and type
    /// variables join by union.
    pub fn join(&mut self, a: Idx, b: Idx) -> Idx {
        if a == b || b.is_never() {
            return a;
        }
        if a.is_never() {
            return b;
        }
        if a.is_any() || b.is_any() {
            return Idx::ANY;
        }
        if self.is_subtype(a, b) {
            return b;
        }
        if self.is_subtype(b, a) {
            return a;
        }

        match (self.data(a).clone(), self.data(b).clone()) {
            (TypeData::Union(_), _)
            | (_, TypeData::Union(_))
            | (TypeData::NoneType, _)
            | (_, TypeData::NoneType) => self.union2(a, b),
            (TypeData::Literal { fallback, .. }, _) => self.join(fallback, b),
            (_, TypeData::Literal { fallback, .. }) => self.join(a, fallback),
            (TypeData::TypeVar { .. }, _) | (_, TypeData::TypeVar { .. }) => Idx::OBJECT,
            (TypeData::Tuple(x), TypeData::Tuple(y)) if x.len() == y.len() => {
                let items: SmallVec<[Idx; 4]> = x
                    .iter()
                    .zip(y.iter())
                    .map(|(&p, &q)| self.join(p, q))
                    .collect();
                self.tuple(&items)
            }
            (TypeData::Tuple(_), _) => {
                let fallback = self.tuple_fallback(a);
                self.join(fallback, b)
            }
            (_, TypeData::Tuple(_)) => {
                let fallback = self.tuple_fallback(b);
                self.join(a, fallback)
            }
            (TypeData::TypedDict(_), _) => {
                let mapping = self.mapping(Idx::STR, Idx::OBJECT);
                self.join(mapping, b)
            }
            (_, TypeData::TypedDict(_)) => {
                let mapping = self.mapping(Idx::STR, Idx::OBJECT);
                self.join(a, mapping)
            }
            (TypeData::Instance { class, .. }, TypeData::Instance { class: other, .. }) => {
                self.join_instances(a, class, b, other)
            }
            _ => Idx::OBJECT,
        }
    }

    /// Join of many types; `Never` for none.
    pub fn join_all(&mut self, types: &[Idx]) -> Idx {
        types.iter().fold(Idx::NEVER, |acc, &t| self.join(acc, t))
    }

    fn join_instances(&mut self, a: Idx, ca: ClassId, b: Idx, cb: ClassId) -> Idx {
        let ancestors = self.classes().mro(ca).to_vec();
        'bases: for base in ancestors {
            if !self.classes().is_subclass(cb, base) {
                continue;
            }
            let (Some(x), Some(y)) = (self.map_to_supertype(a, base), self.map_to_supertype(b, base))
            else {
                continue;
            };
            let variances: Vec<Variance> = self
                .classes()
                .get(base)
                .type_params
                .iter()
                .map(|p| p.variance)
                .collect();

            let mut args: SmallVec<[Idx; 2]> = SmallVec::new();
            for (i, variance) in variances.into_iter().enumerate() {
                let p = x.get(i).copied().unwrap_or(Idx::ANY);
                let q = y.get(i).copied().unwrap_or(Idx::ANY);
                if self.is_equivalent(p, q) {
                    args.push(p);
                } else if variance == Variance::Covariant {
                    let joined = self.join(p, q);
                    args.push(joined);
                } else {
                    continue 'bases;
                }
            }
            return self.instance(base, &args);
        }
        Idx::OBJECT
    }
}
