#![no_std]

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use input::*;
pub use player::*;
pub use reveal::*;
pub use symbol::*;
pub use types::*;
pub use view::*;

mod cell;
mod engine;
mod error;
mod generator;
mod input;
mod player;
mod reveal;
mod symbol;
mod types;
mod view;

/// Side length of a square board. Always even so every cell belongs to exactly one pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Coord", into = "Coord")]
pub struct BoardSize(Coord);

impl BoardSize {
    pub const VALID: [Coord; 4] = [4, 6, 8, 10];

    pub fn new(size: Coord) -> Result<Self> {
        if Self::VALID.contains(&size) {
            Ok(Self(size))
        } else {
            Err(GameError::InvalidSize(size))
        }
    }

    pub const fn get(self) -> Coord {
        self.0
    }

    pub const fn total_cells(self) -> CellCount {
        mult(self.0, self.0)
    }

    pub const fn pair_count(self) -> CellCount {
        self.total_cells() / 2
    }

    pub const fn contains(self, (row, col): Coord2) -> bool {
        row < self.0 && col < self.0
    }
}

impl TryFrom<Coord> for BoardSize {
    type Error = GameError;

    fn try_from(size: Coord) -> Result<Self> {
        Self::new(size)
    }
}

impl From<BoardSize> for Coord {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

/// The hidden answer of one game: which symbol sits under every cell. Immutable once built, and
/// every symbol occupies exactly two cells.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Array2<Symbol>", into = "Array2<Symbol>")]
pub struct Solution {
    size: BoardSize,
    symbols: Array2<Symbol>,
}

impl Solution {
    pub fn new(symbols: Array2<Symbol>) -> Result<Self> {
        let (rows, cols) = symbols.dim();
        if rows != cols {
            return Err(GameError::InvalidBoardShape);
        }
        let size = Coord::try_from(rows).map_err(|_| GameError::InvalidBoardShape)?;
        let size = BoardSize::new(size)?;

        let solution = Self { size, symbols };
        for (symbol, cells) in solution.group_cells() {
            if cells.len() != 2 {
                return Err(GameError::UnpairedSymbol(symbol.clone()));
            }
        }
        Ok(solution)
    }

    /// Builds a solution from explicit rows, mostly useful for fixed layouts.
    pub fn from_rows<S: AsRef<str>>(rows: &[&[S]]) -> Result<Self> {
        let size = rows.len();
        if rows.iter().any(|row| row.len() != size) {
            return Err(GameError::InvalidBoardShape);
        }
        let cells: Vec<Symbol> = rows
            .iter()
            .flat_map(|row| row.iter().map(|symbol| Symbol::new(symbol.as_ref())))
            .collect();
        let symbols = Array2::from_shape_vec((size, size), cells)
            .map_err(|_| GameError::InvalidBoardShape)?;
        Self::new(symbols)
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    pub fn pair_count(&self) -> CellCount {
        self.size.pair_count()
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.size.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn symbol_at(&self, coords: Coord2) -> &Symbol {
        &self[coords]
    }

    /// Both cells of every pair, ordered by the position of the first cell.
    pub fn pairs(&self) -> Vec<(Coord2, Coord2)> {
        let mut pairs: Vec<_> = self
            .group_cells()
            .into_values()
            .filter_map(|cells| match cells.as_slice() {
                &[first, second] => Some((first, second)),
                _ => None,
            })
            .collect();
        pairs.sort_unstable();
        pairs
    }

    fn group_cells(&self) -> BTreeMap<&Symbol, Vec<Coord2>> {
        let mut groups: BTreeMap<&Symbol, Vec<Coord2>> = BTreeMap::new();
        for coords in iter_coords(self.size.get()) {
            groups.entry(&self[coords]).or_default().push(coords);
        }
        groups
    }
}

impl TryFrom<Array2<Symbol>> for Solution {
    type Error = GameError;

    fn try_from(symbols: Array2<Symbol>) -> Result<Self> {
        Self::new(symbols)
    }
}

impl From<Solution> for Array2<Symbol> {
    fn from(solution: Solution) -> Self {
        solution.symbols
    }
}

impl Index<Coord2> for Solution {
    type Output = Symbol;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.symbols[coords.to_nd_index()]
    }
}
