use alloc::string::String;
use alloc::vec::Vec;
use serde::Serialize;

use crate::*;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Player {
    name: String,
    matches: CellCount,
    found: Vec<Symbol>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(GameError::EmptyPlayerName);
        }
        Ok(Self {
            name,
            matches: 0,
            found: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn matches(&self) -> CellCount {
        self.matches
    }

    /// Symbols matched by this player, in the order they were found.
    pub fn found(&self) -> &[Symbol] {
        &self.found
    }

    fn record_match(&mut self, symbol: Symbol) {
        self.matches += 1;
        self.found.push(symbol);
    }
}

/// Match counts of every player, in turn order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScoreBoard {
    players: Vec<Player>,
}

impl ScoreBoard {
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let players = names
            .into_iter()
            .map(Player::new)
            .collect::<Result<Vec<_>>>()?;
        if players.is_empty() {
            return Err(GameError::NoPlayers);
        }
        Ok(Self { players })
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn total_matches(&self) -> CellCount {
        self.players.iter().map(Player::matches).sum()
    }

    pub fn max_matches(&self) -> CellCount {
        self.players.iter().map(Player::matches).max().unwrap_or(0)
    }

    /// Every player tied at the highest match count. Never empty.
    pub fn winners(&self) -> Vec<&Player> {
        let max_matches = self.max_matches();
        self.players
            .iter()
            .filter(|player| player.matches == max_matches)
            .collect()
    }

    pub(crate) fn record_match(&mut self, index: usize, symbol: Symbol) {
        self.players[index].record_match(symbol);
    }
}
