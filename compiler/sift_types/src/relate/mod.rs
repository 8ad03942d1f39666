//! Type relations: subtyping, overlap, join, and narrowing.
//!
//! Every relation is a method on [`Pool`](crate::Pool) taking `&mut self`,
//! since mapping a generic instance onto a base class may intern new types.
//!
//! Gradual typing rules: `Any` is compatible in both directions, `Never` is
//! a subtype of everything, and everything is a subtype of `object`.
//! There are no numeric promotions: `int` is not a subtype of `float`.

mod join;
mod narrow;
mod overlap;
mod subtype;
mod supertype;
