//! Interned type payloads.

use smallvec::SmallVec;

use sift_ir::Name;

use crate::{ClassId, Idx};

/// The value carried by a literal type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LiteralValue {
    Int(i64),
    Str(Name),
    Bytes(Name),
    Bool(bool),
}

impl LiteralValue {
    /// The instance type a literal of this kind widens to.
    pub fn fallback(self) -> Idx {
        match self {
            LiteralValue::Int(_) => Idx::INT,
            LiteralValue::Str(_) => Idx::STR,
            LiteralValue::Bytes(_) => Idx::BYTES,
            LiteralValue::Bool(_) => Idx::BOOL,
        }
    }
}

/// Structural data for one interned type.
///
/// Two types are the same type exactly when their `TypeData` is equal, which
/// the pool turns into `Idx` equality.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeData {
    /// Bottom type.
    Never,
    /// Gradual type.
    Any,
    /// The type of `None`.
    NoneType,
    /// A nominal class instance, `args` in type-parameter order.
    Instance {
        class: ClassId,
        args: SmallVec<[Idx; 2]>,
    },
    /// `Literal[value]`; `fallback` is the widened instance type.
    Literal { value: LiteralValue, fallback: Idx },
    /// Fixed-length tuple. `tuple[T, ...]` is an `Instance` of `tuple`.
    Tuple(SmallVec<[Idx; 4]>),
    /// Flattened, simplified union of at least two members.
    Union(SmallVec<[Idx; 4]>),
    /// Instance of a TypedDict class.
    TypedDict(ClassId),
    /// Type parameter `index` of class `owner`.
    TypeVar { owner: ClassId, index: u32 },
}
