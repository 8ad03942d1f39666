//! Type model for the match checker.
//!
//! The pattern checker never owns type semantics: it asks this crate whether
//! one type is a subtype of another, what two types join to, and how a
//! declared type narrows against a proposed one.
//!
//! # Architecture
//!
//! ```text
//! Pool (types as Idx, interned and deduplicated)
//!     └── ClassTable (nominal classes, bases, attributes, match fields)
//! SymbolEnv (names -> variables, classes, aliases, namespaces)
//! ```
//!
//! - `Idx` is the only handle to a type; equality is index equality
//! - Builtin classes live at fixed `ClassId`s, primitives at fixed `Idx`s
//! - Every relation lives in `relate` as methods on `Pool`

mod class;
mod data;
mod env;
mod flags;
mod idx;
mod pool;
mod relate;

pub use class::{
    Attribute, ClassDef, ClassFlags, ClassId, ClassTable, DataclassField, DataclassInfo,
    MatchArgsDecl, TypeParam, TypedDictField, Variance,
};
pub use data::{LiteralValue, TypeData};
pub use env::{AliasInfo, Namespace, Symbol, SymbolEnv, VarInfo};
pub use flags::TypeFlags;
pub use idx::Idx;
pub use pool::Pool;

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{ClassId, Idx};
    sift_ir::static_assert_size!(Idx, 4);
    sift_ir::static_assert_size!(ClassId, 4);
}
