//! String interning for identifiers
//!
//! Names are interned while a tree is being built ([`Interner`]) and the
//! table is frozen into a read-only [`NameTable`] once the tree is finished,
//! so a finished tree can be shared between threads without locking.

pub use lasso::Spur as Symbol;
use lasso::{Rodeo, RodeoReader};

/// Mutable interner used while building a tree
#[derive(Debug, Default)]
pub struct Interner {
    inner: Rodeo,
}

impl Interner {
    /// Creates an empty interner
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns `name`, returning the existing symbol if it was seen before
    pub fn intern(&mut self, name: &str) -> Symbol {
        self.inner.get_or_intern(name)
    }

    /// Looks up the string behind `symbol`
    pub fn resolve(&self, symbol: Symbol) -> &str {
        self.inner.resolve(&symbol)
    }

    /// Freezes the interner into a read-only table
    pub fn freeze(self) -> NameTable {
        NameTable {
            inner: self.inner.into_reader(),
        }
    }
}

/// Frozen, thread-safe name table owned by a finished tree
#[derive(Debug)]
pub struct NameTable {
    inner: RodeoReader,
}

impl NameTable {
    /// Looks up the string behind `symbol`
    pub fn resolve(&self, symbol: Symbol) -> &str {
        self.inner.resolve(&symbol)
    }

    /// Returns the symbol for `name` if any node uses it
    pub fn get(&self, name: &str) -> Option<Symbol> {
        self.inner.get(name)
    }

    /// Number of distinct names
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether no names were interned
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
