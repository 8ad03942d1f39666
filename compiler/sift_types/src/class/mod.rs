//! Nominal class definitions.
//!
//! Unlike the pool (which stores type representations), the class table
//! stores semantic information about class definitions: bases, type
//! parameters, attributes, and how the class participates in class patterns.
//!
//! Dual indexing: `Vec<ClassDef>` by `ClassId` plus `FxHashMap<Name, ClassId>`
//! for name lookup.

mod builtins;

pub(crate) use builtins::register_builtins;

use std::fmt;

use bitflags::bitflags;
use rustc_hash::FxHashMap;
use sift_ir::Name;

use crate::Idx;

/// Index of a class in the [`ClassTable`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ClassId(u32);

impl ClassId {
    // Builtin prelude, registered in this order by every new pool.
    pub const OBJECT: Self = Self(0);
    pub const SEQUENCE: Self = Self(1);
    pub const MUTABLE_SEQUENCE: Self = Self(2);
    pub const MAPPING: Self = Self(3);
    pub const MUTABLE_MAPPING: Self = Self(4);
    pub const INT: Self = Self(5);
    pub const BOOL: Self = Self(6);
    pub const FLOAT: Self = Self(7);
    pub const COMPLEX: Self = Self(8);
    pub const STR: Self = Self(9);
    pub const BYTES: Self = Self(10);
    pub const BYTEARRAY: Self = Self(11);
    pub const MEMORYVIEW: Self = Self(12);
    pub const RANGE: Self = Self(13);
    pub const LIST: Self = Self(14);
    pub const TUPLE: Self = Self(15);
    pub const DICT: Self = Self(16);
    pub const SET: Self = Self(17);
    pub const FROZENSET: Self = Self(18);
    pub const DEQUE: Self = Self(19);
    pub const ARRAY: Self = Self(20);

    /// Number of builtin classes.
    pub const BUILTIN_COUNT: u32 = 21;

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_builtin(self) -> bool {
        self.0 < Self::BUILTIN_COUNT
    }
}

impl fmt::Debug for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassId({})", self.0)
    }
}

/// Variance of a class type parameter.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Variance {
    #[default]
    Invariant,
    Covariant,
    Contravariant,
}

/// A declared type parameter.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeParam {
    pub name: Name,
    pub variance: Variance,
}

bitflags! {
    /// Class-level properties.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct ClassFlags: u16 {
        /// Cannot be subclassed.
        const FINAL = 1 << 0;
        /// Declared with the dataclass decorator.
        const DATACLASS = 1 << 1;
        /// A TypedDict definition; instances are `TypeData::TypedDict`.
        const TYPED_DICT = 1 << 2;
        /// A named tuple; subclasses `tuple` but never self-matches.
        const NAMED_TUPLE = 1 << 3;
        /// Instance layout conflicts with any other disjoint base.
        const DISJOINT_BASE = 1 << 4;
        /// A structural protocol.
        const PROTOCOL = 1 << 5;
    }
}

/// A declared attribute.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Attribute {
    pub name: Name,
    pub ty: Idx,
    pub is_final: bool,
}

/// How a class declares its positional match fields.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum MatchArgsDecl {
    /// No declaration on this class.
    #[default]
    Absent,
    /// An explicit declaration of type `ty`, normally a tuple of string
    /// literals.
    Declared { ty: Idx, is_final: bool },
}

/// One dataclass field, in declaration order.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct DataclassField {
    pub name: Name,
    /// `false` for `field(init=False)`.
    pub init: bool,
}

/// Dataclass decorator information.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct DataclassInfo {
    pub fields: Vec<DataclassField>,
    /// `false` for `@dataclass(match_args=False)`.
    pub match_args: bool,
}

/// One TypedDict key.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypedDictField {
    pub name: Name,
    pub ty: Idx,
}

/// A class definition.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ClassDef {
    pub name: Name,
    pub type_params: Vec<TypeParam>,
    /// Base class instance types; may mention this class's type parameters.
    pub bases: Vec<Idx>,
    pub attributes: Vec<Attribute>,
    pub flags: ClassFlags,
    pub match_args: MatchArgsDecl,
    pub dataclass: Option<DataclassInfo>,
    pub typed_dict_fields: Vec<TypedDictField>,
}

impl ClassDef {
    /// A plain class deriving from `object`.
    pub fn new(name: Name) -> Self {
        ClassDef {
            name,
            type_params: Vec::new(),
            bases: Vec::new(),
            attributes: Vec::new(),
            flags: ClassFlags::empty(),
            match_args: MatchArgsDecl::Absent,
            dataclass: None,
            typed_dict_fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_type_param(mut self, name: Name, variance: Variance) -> Self {
        self.type_params.push(TypeParam { name, variance });
        self
    }

    #[must_use]
    pub fn with_base(mut self, base: Idx) -> Self {
        self.bases.push(base);
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, name: Name, ty: Idx) -> Self {
        self.attributes.push(Attribute {
            name,
            ty,
            is_final: false,
        });
        self
    }

    #[must_use]
    pub fn with_final_attribute(mut self, name: Name, ty: Idx) -> Self {
        self.attributes.push(Attribute {
            name,
            ty,
            is_final: true,
        });
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: ClassFlags) -> Self {
        self.flags |= flags;
        self
    }

    #[must_use]
    pub fn with_match_args(mut self, ty: Idx, is_final: bool) -> Self {
        self.match_args = MatchArgsDecl::Declared { ty, is_final };
        self
    }

    /// Mark as a dataclass. Each field also becomes an attribute.
    #[must_use]
    pub fn with_dataclass(mut self, fields: &[(Name, Idx, bool)], match_args: bool) -> Self {
        self.flags |= ClassFlags::DATACLASS;
        for &(name, ty, _) in fields {
            self.attributes.push(Attribute {
                name,
                ty,
                is_final: false,
            });
        }
        self.dataclass = Some(DataclassInfo {
            fields: fields
                .iter()
                .map(|&(name, _, init)| DataclassField { name, init })
                .collect(),
            match_args,
        });
        self
    }

    #[must_use]
    pub fn with_typed_dict_field(mut self, name: Name, ty: Idx) -> Self {
        self.flags |= ClassFlags::TYPED_DICT;
        self.typed_dict_fields.push(TypedDictField { name, ty });
        self
    }

    pub fn is_final(&self) -> bool {
        self.flags.contains(ClassFlags::FINAL)
    }

    /// Own attribute by name, without consulting bases.
    pub fn own_attribute(&self, name: Name) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn typed_dict_field(&self, name: Name) -> Option<Idx> {
        self.typed_dict_fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.ty)
    }
}

/// Every class known to a pool.
#[derive(Clone, Debug, Default)]
pub struct ClassTable {
    classes: Vec<ClassDef>,
    /// Linearized ancestors, self first and `object` last.
    mros: Vec<Vec<ClassId>>,
    by_name: FxHashMap<Name, ClassId>,
}

impl ClassTable {
    /// Id the next defined class will receive.
    ///
    /// Generic classes need it up front to build their own type variables.
    pub fn next_id(&self) -> ClassId {
        ClassId(u32::try_from(self.classes.len()).unwrap_or(u32::MAX))
    }

    /// Add a class whose direct base classes are `direct_bases`.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` classes are defined.
    pub(crate) fn insert(&mut self, def: ClassDef, direct_bases: &[ClassId]) -> ClassId {
        let id = ClassId(
            u32::try_from(self.classes.len()).unwrap_or_else(|_| panic!("class table overflow")),
        );

        let mut mro = vec![id];
        for &base in direct_bases {
            for &ancestor in self.mro(base) {
                if ancestor != ClassId::OBJECT && !mro.contains(&ancestor) {
                    mro.push(ancestor);
                }
            }
        }
        if id != ClassId::OBJECT {
            mro.push(ClassId::OBJECT);
        }

        self.by_name.insert(def.name, id);
        self.classes.push(def);
        self.mros.push(mro);
        id
    }

    #[inline]
    pub fn get(&self, id: ClassId) -> &ClassDef {
        &self.classes[id.0 as usize]
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: ClassId) -> &mut ClassDef {
        &mut self.classes[id.0 as usize]
    }

    /// Linearized ancestors of `id`, itself first.
    #[inline]
    pub fn mro(&self, id: ClassId) -> &[ClassId] {
        &self.mros[id.0 as usize]
    }

    /// Nominal subclass check, ignoring type arguments.
    pub fn is_subclass(&self, sub: ClassId, sup: ClassId) -> bool {
        self.mro(sub).contains(&sup)
    }

    /// Most recently defined class with this name.
    pub fn find(&self, name: Name) -> Option<ClassId> {
        self.by_name.get(&name).copied()
    }

    /// First ancestor (self included) flagged as a disjoint base.
    pub fn disjoint_base(&self, id: ClassId) -> Option<ClassId> {
        self.mro(id)
            .iter()
            .copied()
            .find(|&c| self.get(c).flags.contains(ClassFlags::DISJOINT_BASE))
    }

    /// Look an attribute up along the MRO; returns the defining class too.
    pub fn find_attribute(&self, id: ClassId, name: Name) -> Option<(ClassId, Attribute)> {
        self.mro(id)
            .iter()
            .find_map(|&c| self.get(c).own_attribute(name).map(|a| (c, *a)))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
