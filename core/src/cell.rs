use serde::{Deserialize, Serialize};

/// Exposure of a single cell during play.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Hidden,
    /// Shown for the guess pair currently being resolved.
    Provisional,
    /// Matched, stays visible for the rest of the game.
    Revealed,
}

impl CellState {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Provisional | Self::Revealed)
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Hidden
    }
}
