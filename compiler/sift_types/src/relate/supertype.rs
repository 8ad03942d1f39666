//! Mapping generic instances onto their base classes.

use smallvec::SmallVec;
use sift_ir::Name;

use crate::{ClassId, Idx, Pool, TypeData, TypeFlags};

impl Pool {
    /// Replace type parameters of `owner` with `args`.
    ///
    /// Parameters without a corresponding argument become `Any`.
    pub fn substitute(&mut self, ty: Idx, owner: ClassId, args: &[Idx]) -> Idx {
        if !self.flags(ty).contains(TypeFlags::HAS_TYPE_VAR) {
            return ty;
        }
        match self.data(ty).clone() {
            TypeData::TypeVar { owner: o, index } if o == owner => {
                args.get(index as usize).copied().unwrap_or(Idx::ANY)
            }
            TypeData::Instance { class, args: inner } => {
                let new: SmallVec<[Idx; 2]> = inner
                    .iter()
                    .map(|&a| self.substitute(a, owner, args))
                    .collect();
                self.instance(class, &new)
            }
            TypeData::Tuple(items) => {
                let new: SmallVec<[Idx; 4]> = items
                    .iter()
                    .map(|&a| self.substitute(a, owner, args))
                    .collect();
                self.tuple(&new)
            }
            TypeData::Union(members) => {
                let new: SmallVec<[Idx; 4]> = members
                    .iter()
                    .map(|&a| self.substitute(a, owner, args))
                    .collect();
                self.union(&new)
            }
            _ => ty,
        }
    }

    /// `tuple[A, B]` as the homogeneous `tuple[A | B, ...]`.
    pub fn tuple_fallback(&mut self, ty: Idx) -> Idx {
        match self.data(ty).clone() {
            TypeData::Tuple(items) => {
                let elem = self.union(&items);
                self.var_tuple(elem)
            }
            _ => ty,
        }
    }

    /// Type arguments of `ty` viewed as an instance of `target`.
    ///
    /// `list[int]` mapped to `Sequence` gives `[int]`. Returns `None` when
    /// `ty` does not derive from `target`.
    pub fn map_to_supertype(&mut self, ty: Idx, target: ClassId) -> Option<SmallVec<[Idx; 2]>> {
        match self.data(ty).clone() {
            TypeData::Instance { class, args } => {
                if target == ClassId::OBJECT {
                    return Some(SmallVec::new());
                }
                self.map_instance(class, &args, target)
            }
            TypeData::Tuple(_) => {
                let fallback = self.tuple_fallback(ty);
                self.map_to_supertype(fallback, target)
            }
            TypeData::Literal { fallback, .. } => self.map_to_supertype(fallback, target),
            TypeData::TypedDict(class) => {
                if target == ClassId::OBJECT || self.classes().is_subclass(class, target) {
                    return Some(SmallVec::new());
                }
                let mapping = self.mapping(Idx::STR, Idx::OBJECT);
                self.map_to_supertype(mapping, target)
            }
            _ => None,
        }
    }

    fn map_instance(
        &mut self,
        class: ClassId,
        args: &[Idx],
        target: ClassId,
    ) -> Option<SmallVec<[Idx; 2]>> {
        if class == target {
            return Some(args.iter().copied().collect());
        }
        let bases = self.classes().get(class).bases.clone();
        for base in bases {
            let Some(base_class) = self.class_of(base) else {
                continue;
            };
            if !self.classes().is_subclass(base_class, target) {
                continue;
            }
            let base = self.substitute(base, class, args);
            return self.map_to_supertype(base, target);
        }
        None
    }

    /// Declared type of attribute `name` on `ty`, with the owner's type
    /// parameters filled in.
    ///
    /// Returns `None` when the attribute is unknown.
    pub fn lookup_attribute(&mut self, ty: Idx, name: Name) -> Option<Idx> {
        match self.data(ty).clone() {
            TypeData::Any => Some(Idx::ANY),
            TypeData::Instance { class, .. } => {
                let (owner, attr) = self.classes().find_attribute(class, name)?;
                let args = self.map_to_supertype(ty, owner)?;
                Some(self.substitute(attr.ty, owner, &args))
            }
            TypeData::Literal { fallback, .. } => self.lookup_attribute(fallback, name),
            TypeData::Tuple(_) => {
                let fallback = self.tuple_fallback(ty);
                self.lookup_attribute(fallback, name)
            }
            TypeData::Union(members) => {
                let mut found: SmallVec<[Idx; 4]> = SmallVec::new();
                for member in members {
                    found.push(self.lookup_attribute(member, name)?);
                }
                Some(self.union(&found))
            }
            TypeData::Never
            | TypeData::NoneType
            | TypeData::TypedDict(_)
            | TypeData::TypeVar { .. } => None,
        }
    }
}
