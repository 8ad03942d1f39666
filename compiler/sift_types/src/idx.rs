//! Unified type index handle.
//!
//! `Idx` is THE canonical type representation.
//! All types are stored in the pool and referenced by their 32-bit index.
//!
//! - Primitive types have fixed indices (0-10) for O(1) lookup
//! - Type equality is O(1) index comparison
//! - Copy, lightweight passing

use std::fmt;

/// A 32-bit index into the type pool.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Idx(u32);

impl Idx {
    // === Primitive Types (indices 0-10) ===
    // These are pre-interned at pool creation.

    /// The uninhabited type; a pattern that narrows to it cannot match.
    pub const NEVER: Self = Self(0);
    /// The dynamic type, compatible in both directions with everything.
    pub const ANY: Self = Self(1);
    /// The type of `None`.
    pub const NONE: Self = Self(2);
    /// `object`, the top of the nominal hierarchy.
    pub const OBJECT: Self = Self(3);
    /// `int`.
    pub const INT: Self = Self(4);
    /// `float`.
    pub const FLOAT: Self = Self(5);
    /// `complex`.
    pub const COMPLEX: Self = Self(6);
    /// `bool`.
    pub const BOOL: Self = Self(7);
    /// `str`.
    pub const STR: Self = Self(8);
    /// `bytes`.
    pub const BYTES: Self = Self(9);
    /// `bytearray`.
    pub const BYTEARRAY: Self = Self(10);

    /// Number of pre-interned primitive types.
    pub const PRIMITIVE_COUNT: u32 = 11;

    /// Create an index from a raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this is a primitive type (pre-interned).
    #[inline]
    pub const fn is_primitive(self) -> bool {
        self.0 < Self::PRIMITIVE_COUNT
    }

    #[inline]
    pub const fn is_never(self) -> bool {
        self.0 == Self::NEVER.0
    }

    #[inline]
    pub const fn is_any(self) -> bool {
        self.0 == Self::ANY.0
    }

    /// Get the human-readable name for primitive types.
    #[inline]
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("Never"),
            1 => Some("Any"),
            2 => Some("None"),
            3 => Some("object"),
            4 => Some("int"),
            5 => Some("float"),
            6 => Some("complex"),
            7 => Some("bool"),
            8 => Some("str"),
            9 => Some("bytes"),
            10 => Some("bytearray"),
            _ => None,
        }
    }
}

impl fmt::Debug for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "Idx::{}", name.to_ascii_uppercase()),
            None => write!(f, "Idx({})", self.0),
        }
    }
}

impl fmt::Display for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "type#{}", self.0),
        }
    }
}

#[cfg(test)]
mod tests;
