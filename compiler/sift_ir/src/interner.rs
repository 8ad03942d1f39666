//! String interner for identifiers, string literals, and class names.
//!
//! Strings are leaked to `'static` on first insertion, so lookups hand out
//! plain `&'static str` without holding the lock.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use super::Name;

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InternError {
    #[error("interner exceeded capacity: {count} strings")]
    Overflow { count: usize },
}

struct InternTable {
    map: FxHashMap<&'static str, u32>,
    strings: Vec<&'static str>,
}

/// String interner.
///
/// Interior mutability lets a shared `&StringInterner` intern new strings
/// while the checker holds other borrows of the pool.
pub struct StringInterner {
    table: RwLock<InternTable>,
}

/// Shared handle to an interner; the pool and the test helpers hold one each.
pub type SharedInterner = Arc<StringInterner>;

impl StringInterner {
    /// Create a new interner with the empty string at index 0.
    pub fn new() -> Self {
        let empty: &'static str = "";
        let mut map = FxHashMap::default();
        map.insert(empty, 0);
        StringInterner {
            table: RwLock::new(InternTable {
                map,
                strings: vec![empty],
            }),
        }
    }

    /// Create a new shared interner.
    pub fn shared() -> SharedInterner {
        Arc::new(Self::new())
    }

    /// Try to intern a string, returning its Name or an error on overflow.
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        {
            let guard = self.table.read();
            if let Some(&raw) = guard.map.get(s) {
                return Ok(Name::from_raw(raw));
            }
        }

        let mut guard = self.table.write();
        // Another writer may have inserted between the two locks.
        if let Some(&raw) = guard.map.get(s) {
            return Ok(Name::from_raw(raw));
        }

        let raw = u32::try_from(guard.strings.len()).map_err(|_| InternError::Overflow {
            count: guard.strings.len(),
        })?;
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        guard.strings.push(leaked);
        guard.map.insert(leaked, raw);
        Ok(Name::from_raw(raw))
    }

    /// Intern a string, returning its Name.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` strings are interned.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Look up the string for a Name.
    ///
    /// Unknown names (from a different interner) render as `"<unknown>"`.
    pub fn lookup(&self, name: Name) -> &'static str {
        self.table
            .read()
            .strings
            .get(name.raw() as usize)
            .copied()
            .unwrap_or("<unknown>")
    }

    /// Number of interned strings, including the empty string.
    pub fn len(&self) -> usize {
        self.table.read().strings.len()
    }

    /// Always false: the empty string is pre-interned.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StringInterner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StringInterner")
            .field("len", &self.len())
            .finish()
    }
}
