//! Interned string identifiers.
//!
//! Provides compact 32-bit interned identifiers. The interner is a plain
//! single-table map: the type-descriptor phase runs under a single-threaded
//! compilation driver, so no sharding or locking is needed.

use std::fmt;

use rustc_hash::FxHashMap;

/// Interned string identifier.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// Pre-interned empty string.
    pub const EMPTY: Name = Name(0);

    /// Get raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Create from raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Name(raw)
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

impl Default for Name {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// String interner mapping identifier text to `Name` handles.
///
/// Interning the same string twice returns the same handle, so `Name`
/// equality is string equality.
pub struct StringInterner {
    map: FxHashMap<Box<str>, u32>,
    strings: Vec<Box<str>>,
}

impl StringInterner {
    /// Create a new interner with the empty string pre-interned at
    /// [`Name::EMPTY`].
    pub fn new() -> Self {
        let mut interner = StringInterner {
            map: FxHashMap::default(),
            strings: Vec::new(),
        };
        interner.intern("");
        interner
    }

    /// Intern a string, returning its `Name`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn intern(&mut self, s: &str) -> Name {
        if let Some(&idx) = self.map.get(s) {
            return Name(idx);
        }
        let idx = self.strings.len() as u32;
        let owned: Box<str> = s.into();
        self.strings.push(owned.clone());
        self.map.insert(owned, idx);
        Name(idx)
    }

    /// Look up the text for a `Name`.
    ///
    /// # Panics
    /// Panics if the `Name` was not created by this interner.
    pub fn lookup(&self, name: Name) -> &str {
        &self.strings[name.0 as usize]
    }

    /// Number of interned strings (including the pre-interned empty string).
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// True if only the empty string has been interned.
    pub fn is_empty(&self) -> bool {
        self.strings.len() <= 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn intern_is_idempotent() {
        let mut interner = StringInterner::new();
        let a = interner.intern("swap");
        let b = interner.intern("swap");
        assert_eq!(a, b);
        assert_eq!(interner.lookup(a), "swap");
    }

    #[test]
    fn distinct_strings_get_distinct_names() {
        let mut interner = StringInterner::new();
        let a = interner.intern("left");
        let b = interner.intern("right");
        assert_ne!(a, b);
    }

    #[test]
    fn empty_string_is_pre_interned() {
        let mut interner = StringInterner::new();
        assert_eq!(interner.intern(""), Name::EMPTY);
    }
}
