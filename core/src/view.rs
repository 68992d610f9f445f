use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a single cell shows to the players.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisibleCell {
    #[default]
    Hidden,
    /// Face up for the guess pair being resolved.
    Guessed(Symbol),
    /// Already matched.
    Cleared(Symbol),
}

/// Read-only snapshot of the board handed to renderers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub size: BoardSize,
    pub cells: Array2<VisibleCell>,
}

impl BoardView {
    pub fn from_reveal_state(board: &RevealState) -> Self {
        let size = board.size();
        let side = usize::from(size.get());
        let mut cells: Array2<VisibleCell> = Array2::default((side, side));

        for coords in iter_coords(size.get()) {
            let symbol = &board.solution()[coords];
            cells[coords.to_nd_index()] = match board.cell_at(coords) {
                CellState::Hidden => VisibleCell::Hidden,
                CellState::Provisional => VisibleCell::Guessed(symbol.clone()),
                CellState::Revealed => VisibleCell::Cleared(symbol.clone()),
            };
        }

        Self { size, cells }
    }

    pub fn from_session(session: &GameSession) -> Self {
        Self::from_reveal_state(session.board())
    }

    /// Every cell face up, for debugging a layout.
    pub fn from_solution(solution: &Solution) -> Self {
        let size = solution.size();
        let side = usize::from(size.get());
        let mut cells: Array2<VisibleCell> = Array2::default((side, side));

        for coords in iter_coords(size.get()) {
            cells[coords.to_nd_index()] = VisibleCell::Guessed(solution[coords].clone());
        }

        Self { size, cells }
    }

    pub fn cell(&self, coords: Coord2) -> &VisibleCell {
        &self.cells[coords.to_nd_index()]
    }

    pub fn rows(&self) -> impl Iterator<Item = ndarray::ArrayView1<'_, VisibleCell>> {
        self.cells.rows().into_iter()
    }
}
