use ndarray::Array2;
use serde::Serialize;

use crate::*;

/// Player-visible exposure of the board. Owns the solution so guesses can be compared against it,
/// but never hands out the symbol of a cell that is still hidden through [`RevealState::cell_symbol`].
///
/// At most two cells are [`CellState::Provisional`] at any time, and a [`CellState::Revealed`]
/// cell never changes again.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RevealState {
    solution: Solution,
    cells: Array2<CellState>,
    provisional_count: u8,
    revealed_count: CellCount,
}

impl RevealState {
    pub fn new(solution: Solution) -> Self {
        let side = usize::from(solution.size().get());
        Self {
            solution,
            cells: Array2::default((side, side)),
            provisional_count: 0,
            revealed_count: 0,
        }
    }

    pub fn size(&self) -> BoardSize {
        self.solution.size()
    }

    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        self.solution.validate_coords(coords)
    }

    pub fn cell_at(&self, coords: Coord2) -> CellState {
        self.cells[coords.to_nd_index()]
    }

    /// Symbol under `coords`, regardless of whether it is currently visible.
    pub fn peek(&self, coords: Coord2) -> Result<&Symbol> {
        let coords = self.validate_coords(coords)?;
        Ok(&self.solution[coords])
    }

    /// Symbol under `coords` only when the cell is currently visible.
    pub fn cell_symbol(&self, coords: Coord2) -> Option<&Symbol> {
        if self.cell_at(coords).is_visible() {
            Some(&self.solution[coords])
        } else {
            None
        }
    }

    pub fn provisional_count(&self) -> u8 {
        self.provisional_count
    }

    /// Number of cells permanently revealed so far.
    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn is_solved(&self) -> bool {
        self.revealed_count == self.size().total_cells()
    }

    /// Checks that `coords` may be guessed, without changing anything.
    pub fn check_guessable(&self, coords: Coord2) -> Result<Coord2> {
        let coords = self.validate_coords(coords)?;
        if self.cell_at(coords).is_hidden() {
            Ok(coords)
        } else {
            Err(GameError::AlreadyRevealed)
        }
    }

    pub fn mark_provisional(&mut self, coords: Coord2) -> Result<()> {
        let coords = self.check_guessable(coords)?;
        if self.provisional_count >= 2 {
            return Err(GameError::TooManyProvisional);
        }

        self.cells[coords.to_nd_index()] = CellState::Provisional;
        self.provisional_count += 1;
        log::trace!("{:?} provisionally revealed", coords);
        Ok(())
    }

    pub fn commit_match(&mut self, first: Coord2, second: Coord2) -> Result<()> {
        self.check_provisional_pair(first, second)?;
        if self.solution[first] != self.solution[second] {
            return Err(GameError::NotAPair);
        }

        self.settle_pair(first, second, CellState::Revealed);
        self.revealed_count += 2;
        log::trace!("{:?} and {:?} permanently revealed", first, second);
        Ok(())
    }

    pub fn commit_miss(&mut self, first: Coord2, second: Coord2) -> Result<()> {
        self.check_provisional_pair(first, second)?;

        self.settle_pair(first, second, CellState::Hidden);
        log::trace!("{:?} and {:?} hidden again", first, second);
        Ok(())
    }

    fn check_provisional_pair(&self, first: Coord2, second: Coord2) -> Result<()> {
        let first = self.validate_coords(first)?;
        let second = self.validate_coords(second)?;
        if first == second {
            return Err(GameError::SameCell);
        }
        for coords in [first, second] {
            if self.cell_at(coords) != CellState::Provisional {
                return Err(GameError::NotProvisional);
            }
        }
        Ok(())
    }

    fn settle_pair(&mut self, first: Coord2, second: Coord2, state: CellState) {
        self.cells[first.to_nd_index()] = state;
        self.cells[second.to_nd_index()] = state;
        self.provisional_count -= 2;
    }
}
