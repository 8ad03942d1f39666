//! Subtype checking.

use crate::{ClassId, Idx, Pool, TypeData, Variance};

impl Pool {
    /// Is every value of `sub` also a value of `sup`?
    pub fn is_subtype(&mut self, sub: Idx, sup: Idx) -> bool {
        if sub == sup || sub.is_any() || sup.is_any() || sub.is_never() || sup == Idx::OBJECT {
            return true;
        }

        match (self.data(sub).clone(), self.data(sup).clone()) {
            (TypeData::Union(members), _) => members.iter().all(|&m| self.is_subtype(m, sup)),
            (_, TypeData::Union(members)) => members.iter().any(|&m| self.is_subtype(sub, m)),

            (TypeData::Literal { .. }, TypeData::Literal { .. }) | (_, TypeData::Literal { .. }) => {
                false
            }
            (TypeData::Literal { fallback, .. }, _) => self.is_subtype(fallback, sup),

            (TypeData::Tuple(a), TypeData::Tuple(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(&x, &y)| self.is_subtype(x, y))
            }
            (TypeData::Tuple(_), _) => {
                let fallback = self.tuple_fallback(sub);
                self.is_subtype(fallback, sup)
            }
            (TypeData::Instance { class, args }, TypeData::Tuple(_)) => {
                class == ClassId::TUPLE && args.first().is_some_and(|a| a.is_any())
            }

            (TypeData::TypedDict(a), TypeData::TypedDict(b)) => self.classes().is_subclass(a, b),
            (TypeData::TypedDict(_), _) => {
                let mapping = self.mapping(Idx::STR, Idx::OBJECT);
                self.is_subtype(mapping, sup)
            }

            (TypeData::Instance { .. }, TypeData::Instance { class, args }) => {
                let Some(mapped) = self.map_to_supertype(sub, class) else {
                    return false;
                };
                let variances: Vec<Variance> = self
                    .classes()
                    .get(class)
                    .type_params
                    .iter()
                    .map(|p| p.variance)
                    .collect();
                variances.iter().enumerate().all(|(i, &variance)| {
                    let actual = mapped.get(i).copied().unwrap_or(Idx::ANY);
                    let expected = args.get(i).copied().unwrap_or(Idx::ANY);
                    match variance {
                        Variance::Covariant => self.is_subtype(actual, expected),
                        Variance::Contravariant => self.is_subtype(expected, actual),
                        Variance::Invariant => self.is_equivalent(actual, expected),
                    }
                })
            }

            _ => false,
        }
    }

    /// Mutual subtypes; `Any` is equivalent to everything.
    pub fn is_equivalent(&mut self, a: Idx, b: Idx) -> bool {
        self.is_subtype(a, b) && self.is_subtype(b, a)
    }
}
