use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Opaque token placed on a pair of cells, usually a single emoji.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(symbol: &str) -> Self {
        Self::new(symbol)
    }
}

impl From<String> for Symbol {
    fn from(symbol: String) -> Self {
        Self(symbol)
    }
}

/// Symbols still available for new pairs. Every draw removes the symbol for good, so no two pairs
/// of one board can share a symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolPool {
    symbols: Vec<Symbol>,
}

impl SymbolPool {
    /// Builds a pool from a vocabulary, dropping repeated entries.
    pub fn new(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        let mut seen = BTreeSet::new();
        let mut duplicates = 0usize;
        let symbols = symbols
            .into_iter()
            .filter(|symbol| {
                let fresh = seen.insert(symbol.clone());
                if !fresh {
                    duplicates += 1;
                }
                fresh
            })
            .collect();

        if duplicates > 0 {
            log::warn!("Dropped {} duplicate symbols from vocabulary", duplicates);
        }
        Self { symbols }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.symbols.contains(symbol)
    }

    /// Fails with [`GameError::InsufficientSymbols`] unless at least `pairs` draws can succeed.
    pub fn ensure_available(&self, pairs: CellCount) -> Result<()> {
        if self.symbols.len() < usize::from(pairs) {
            Err(GameError::InsufficientSymbols {
                needed: pairs,
                available: self.symbols.len(),
            })
        } else {
            Ok(())
        }
    }

    /// Removes and returns a uniformly chosen symbol.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Symbol> {
        if self.symbols.is_empty() {
            return Err(GameError::ExhaustedPool);
        }
        let index = rng.random_range(0..self.symbols.len());
        let symbol = self.symbols.swap_remove(index);
        log::trace!("Drew symbol {}, {} left", symbol, self.symbols.len());
        Ok(symbol)
    }
}

impl FromIterator<Symbol> for SymbolPool {
    fn from_iter<T: IntoIterator<Item = Symbol>>(iter: T) -> Self {
        Self::new(iter)
    }
}
