//! Pre-computed type metadata flags.
//!
//! `TypeFlags` are computed once at type interning time and cached,
//! enabling O(1) queries about type properties without traversal.

use bitflags::bitflags;

bitflags! {
    /// Pre-computed type properties for O(1) queries.
    ///
    /// Computed once at interning time, never recomputed.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct TypeFlags: u32 {
        // === Presence Flags ===

        /// Contains `Any` somewhere.
        const HAS_ANY = 1 << 0;
        /// Contains a class type parameter.
        const HAS_TYPE_VAR = 1 << 1;

        // === Category Flags ===

        /// A literal type, or a union containing one.
        const IS_LITERAL = 1 << 8;
        /// A union type.
        const IS_UNION = 1 << 9;
    }
}

impl TypeFlags {
    /// Flags that should propagate from child types to parents.
    pub const PROPAGATE_MASK: Self =
        Self::from_bits_truncate(Self::HAS_ANY.bits() | Self::HAS_TYPE_VAR.bits());

    /// Check if substitution could change this type.
    #[inline]
    pub const fn needs_subst(self) -> bool {
        self.contains(Self::HAS_TYPE_VAR)
    }
}
