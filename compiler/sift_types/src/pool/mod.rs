//! The type pool: interned storage for every type.
//!
//! Types are deduplicated on insertion, so structural equality is `Idx`
//! equality. Flags are computed once per type at interning time.

mod construct;
mod format;

use rustc_hash::FxHashMap;
use smallvec::{smallvec, SmallVec};

use sift_ir::{Name, SharedInterner, StringInterner};

use crate::class::register_builtins;
use crate::{Attribute, ClassDef, ClassId, ClassTable, Idx, TypeData, TypeFlags};

/// Interned type storage plus the class table the types refer to.
#[derive(Clone, Debug)]
pub struct Pool {
    items: Vec<TypeData>,
    flags: Vec<TypeFlags>,
    dedup: FxHashMap<TypeData, Idx>,
    classes: ClassTable,
    interner: SharedInterner,
}

impl Default for Pool {
    fn default() -> Self {
        Self::new()
    }
}

impl Pool {
    /// Create a pool with its own interner.
    pub fn new() -> Self {
        Self::with_interner(StringInterner::shared())
    }

    /// Create a pool sharing an interner with the parser.
    pub fn with_interner(interner: SharedInterner) -> Self {
        let mut pool = Pool {
            items: Vec::new(),
            flags: Vec::new(),
            dedup: FxHashMap::default(),
            classes: ClassTable::default(),
            interner,
        };

        let primitives = [
            (Idx::NEVER, TypeData::Never),
            (Idx::ANY, TypeData::Any),
            (Idx::NONE, TypeData::NoneType),
            (Idx::OBJECT, Self::bare(ClassId::OBJECT)),
            (Idx::INT, Self::bare(ClassId::INT)),
            (Idx::FLOAT, Self::bare(ClassId::FLOAT)),
            (Idx::COMPLEX, Self::bare(ClassId::COMPLEX)),
            (Idx::BOOL, Self::bare(ClassId::BOOL)),
            (Idx::STR, Self::bare(ClassId::STR)),
            (Idx::BYTES, Self::bare(ClassId::BYTES)),
            (Idx::BYTEARRAY, Self::bare(ClassId::BYTEARRAY)),
        ];
        for (expected, data) in primitives {
            let idx = pool.intern(data);
            debug_assert_eq!(idx, expected);
        }

        register_builtins(&mut pool);
        pool
    }

    fn bare(class: ClassId) -> TypeData {
        TypeData::Instance {
            class,
            args: SmallVec::new(),
        }
    }

    /// Intern a type, returning the existing index for an equal one.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` types are interned.
    pub fn intern(&mut self, data: TypeData) -> Idx {
        if let Some(&idx) = self.dedup.get(&data) {
            return idx;
        }

        let flags = self.compute_flags(&data);
        let idx = Idx::from_raw(
            u32::try_from(self.items.len()).unwrap_or_else(|_| panic!("type pool overflow")),
        );
        self.items.push(data.clone());
        self.flags.push(flags);
        self.dedup.insert(data, idx);
        idx
    }

    fn compute_flags(&self, data: &TypeData) -> TypeFlags {
        let children = |items: &[Idx]| {
            items.iter().fold(TypeFlags::empty(), |acc, &child| {
                acc | (self.flags(child) & TypeFlags::PROPAGATE_MASK)
            })
        };
        match data {
            TypeData::Never | TypeData::NoneType | TypeData::TypedDict(_) => TypeFlags::empty(),
            TypeData::Any => TypeFlags::HAS_ANY,
            TypeData::TypeVar { .. } => TypeFlags::HAS_TYPE_VAR,
            TypeData::Literal { .. } => TypeFlags::IS_LITERAL,
            TypeData::Instance { args, .. } => children(args),
            TypeData::Tuple(items) => children(items),
            TypeData::Union(members) => {
                let mut flags = children(members) | TypeFlags::IS_UNION;
                if members
                    .iter()
                    .any(|&m| self.flags(m).contains(TypeFlags::IS_LITERAL))
                {
                    flags |= TypeFlags::IS_LITERAL;
                }
                flags
            }
        }
    }

    /// Structural data of a type.
    #[inline]
    pub fn data(&self, idx: Idx) -> &TypeData {
        &self.items[idx.raw() as usize]
    }

    #[inline]
    pub fn flags(&self, idx: Idx) -> TypeFlags {
        self.flags[idx.raw() as usize]
    }

    /// Number of interned types, primitives included.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false: primitives are pre-interned.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn classes(&self) -> &ClassTable {
        &self.classes
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    pub fn shared_interner(&self) -> SharedInterner {
        SharedInterner::clone(&self.interner)
    }

    /// Intern a string through the pool's interner.
    pub fn name(&self, s: &str) -> Name {
        self.interner.intern(s)
    }

    /// Register a class. Bases must already be defined.
    pub fn define_class(&mut self, def: ClassDef) -> ClassId {
        let direct: SmallVec<[ClassId; 2]> = def
            .bases
            .iter()
            .filter_map(|&base| self.class_of(base))
            .collect();
        let id = self.classes.insert(def, &direct);
        tracing::trace!(class = self.interner.lookup(self.classes.get(id).name), ?id, "defined class");
        id
    }

    /// Add an attribute to an already defined class.
    pub fn add_attribute(&mut self, class: ClassId, name: Name, ty: Idx) {
        self.classes.get_mut(class).attributes.push(Attribute {
            name,
            ty,
            is_final: false,
        });
    }

    /// The nominal class behind an instance-like type.
    pub fn class_of(&self, idx: Idx) -> Option<ClassId> {
        match self.data(idx) {
            TypeData::Instance { class, .. } | TypeData::TypedDict(class) => Some(*class),
            TypeData::Tuple(_) => Some(ClassId::TUPLE),
            TypeData::Literal { fallback, .. } => self.class_of(*fallback),
            _ => None,
        }
    }

    /// Union members, or the type itself for a non-union.
    pub fn members(&self, idx: Idx) -> SmallVec<[Idx; 4]> {
        match self.data(idx) {
            TypeData::Union(members) => members.clone(),
            _ => smallvec![idx],
        }
    }

    /// Type arguments of an instance; empty for anything else.
    pub fn instance_args(&self, idx: Idx) -> SmallVec<[Idx; 2]> {
        match self.data(idx) {
            TypeData::Instance { args, .. } => args.clone(),
            _ => SmallVec::new(),
        }
    }
}
