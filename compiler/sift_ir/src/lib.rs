//! Sift IR - syntax-level data for the match checker.
//!
//! This crate holds everything the pattern checker receives from the parser:
//! - Spans for source locations
//! - Names for interned identifiers
//! - The pattern, expression, and statement trees of a `match` statement
//! - Arena allocation for patterns and expressions
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers become `Name(u32)`
//! - **Flatten Everything**: no `Box<Pattern>`, children are `PatternId(u32)` indices
//! - **Immutable after parsing**: checking only ever reads the arena
//!
//! Floats are stored as `u64` bits so every node stays `Eq + Hash`.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
pub mod ast;
mod interner;
mod name;
mod span;

pub use arena::{ExprArena, ExprId, PatternId};
pub use ast::{
    CmpOp, Expr, ExprKind, KeywordPattern, MappingEntry, MatchCase, MatchStmt, Pattern,
    PatternKind, Stmt, StmtKind,
};
pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
pub use span::Span;
