//! Type construction helpers for the Pool.
//!
//! Provides ergonomic methods for creating compound types.

use smallvec::SmallVec;

use sift_ir::Name;

use crate::{ClassId, Idx, LiteralValue, Pool, TypeData};

impl Pool {
    // === Instances ===

    /// Create an instance type `class[args...]`.
    pub fn instance(&mut self, class: ClassId, args: &[Idx]) -> Idx {
        self.intern(TypeData::Instance {
            class,
            args: args.iter().copied().collect(),
        })
    }

    /// Instance with every type parameter set to `Any`.
    ///
    /// TypedDict classes produce their TypedDict type instead.
    pub fn any_instance(&mut self, class: ClassId) -> Idx {
        let def = self.classes().get(class);
        if def.flags.contains(crate::ClassFlags::TYPED_DICT) {
            return self.typed_dict(class);
        }
        let args: SmallVec<[Idx; 2]> = def.type_params.iter().map(|_| Idx::ANY).collect();
        self.instance(class, &args)
    }

    /// Instance with each type parameter set to itself.
    pub fn self_instance(&mut self, class: ClassId) -> Idx {
        let count = self.classes().get(class).type_params.len();
        let args: SmallVec<[Idx; 2]> = (0..count)
            .map(|index| self.type_var(class, u32::try_from(index).unwrap_or(u32::MAX)))
            .collect();
        self.instance(class, &args)
    }

    /// Create a list type `list[elem]`.
    pub fn list(&mut self, elem: Idx) -> Idx {
        self.instance(ClassId::LIST, &[elem])
    }

    /// Create a dict type `dict[key, value]`.
    pub fn dict(&mut self, key: Idx, value: Idx) -> Idx {
        self.instance(ClassId::DICT, &[key, value])
    }

    /// Create a set type `set[elem]`.
    pub fn set(&mut self, elem: Idx) -> Idx {
        self.instance(ClassId::SET, &[elem])
    }

    /// Create `Sequence[elem]`.
    pub fn sequence(&mut self, elem: Idx) -> Idx {
        self.instance(ClassId::SEQUENCE, &[elem])
    }

    /// Create `Mapping[key, value]`.
    pub fn mapping(&mut self, key: Idx, value: Idx) -> Idx {
        self.instance(ClassId::MAPPING, &[key, value])
    }

    /// Create a variable-length tuple `tuple[elem, ...]`.
    pub fn var_tuple(&mut self, elem: Idx) -> Idx {
        self.instance(ClassId::TUPLE, &[elem])
    }

    // === Structural Types ===

    /// Create a fixed-length tuple `tuple[items...]`.
    pub fn tuple(&mut self, items: &[Idx]) -> Idx {
        self.intern(TypeData::Tuple(items.iter().copied().collect()))
    }

    /// Create the TypedDict type of a TypedDict class.
    pub fn typed_dict(&mut self, class: ClassId) -> Idx {
        self.intern(TypeData::TypedDict(class))
    }

    /// Create a reference to type parameter `index` of `owner`.
    pub fn type_var(&mut self, owner: ClassId, index: u32) -> Idx {
        self.intern(TypeData::TypeVar { owner, index })
    }

    // === Literals ===

    pub fn literal(&mut self, value: LiteralValue) -> Idx {
        self.intern(TypeData::Literal {
            value,
            fallback: value.fallback(),
        })
    }

    pub fn literal_int(&mut self, value: i64) -> Idx {
        self.literal(LiteralValue::Int(value))
    }

    pub fn literal_str(&mut self, value: Name) -> Idx {
        self.literal(LiteralValue::Str(value))
    }

    pub fn literal_bytes(&mut self, value: Name) -> Idx {
        self.literal(LiteralValue::Bytes(value))
    }

    pub fn literal_bool(&mut self, value: bool) -> Idx {
        self.literal(LiteralValue::Bool(value))
    }

    /// Widen a literal to its instance type; everything else is unchanged.
    pub fn widen_literal(&self, idx: Idx) -> Idx {
        match self.data(idx) {
            TypeData::Literal { fallback, .. } => *fallback,
            _ => idx,
        }
    }

    // === Unions ===

    /// Build a simplified union.
    ///
    /// Nested unions are flattened, `Never` members dropped, duplicates
    /// removed, and any member that is a subtype of another member absorbed
    /// into it. A union containing `Any` is `Any`. Member order follows first
    /// appearance.
    pub fn union(&mut self, members: &[Idx]) -> Idx {
        let mut flat: SmallVec<[Idx; 4]> = SmallVec::new();
        for &member in members {
            for m in self.members(member) {
                if m.is_any() {
                    return Idx::ANY;
                }
                if !m.is_never() && !flat.contains(&m) {
                    flat.push(m);
                }
            }
        }

        let mut kept: SmallVec<[Idx; 4]> = SmallVec::new();
        for (i, &m) in flat.iter().enumerate() {
            let absorbed = flat.iter().enumerate().any(|(j, &other)| {
                i != j && self.is_subtype(m, other) && (j < i || !self.is_subtype(other, m))
            });
            if !absorbed {
                kept.push(m);
            }
        }

        match kept.len() {
            0 => Idx::NEVER,
            1 => kept[0],
            _ => self.intern(TypeData::Union(kept)),
        }
    }

    /// Union of two types.
    pub fn union2(&mut self, a: Idx, b: Idx) -> Idx {
        self.union(&[a, b])
    }
}
