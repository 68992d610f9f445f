use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - AwaitingFirstGuess -> AwaitingSecondGuess
/// - AwaitingSecondGuess -> Resolving
/// - Resolving -> AwaitingFirstGuess
/// - Resolving -> GameOver
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    AwaitingFirstGuess,
    AwaitingSecondGuess { first: Coord2 },
    Resolving { first: Coord2, second: Coord2 },
    GameOver,
}

impl TurnState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::GameOver)
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::AwaitingFirstGuess
    }
}

/// Outcome of a single accepted guess.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    /// First card of the pair is up, a second guess is expected.
    First(Symbol),
    /// Both cards are up and the pair is ready for [`GameSession::resolve`].
    Second(Symbol),
}

impl GuessOutcome {
    pub fn symbol(&self) -> &Symbol {
        match self {
            Self::First(symbol) | Self::Second(symbol) => symbol,
        }
    }
}

/// Outcome of resolving a guess pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The pair matched. The same player keeps the turn unless the game is over.
    Match {
        player: usize,
        symbol: Symbol,
        game_over: bool,
    },
    /// The pair did not match and the turn passed on.
    Miss { next_player: usize },
}

impl Resolution {
    pub const fn is_match(&self) -> bool {
        matches!(self, Self::Match { .. })
    }
}

/// One game from the first guess to the last match: the board, the players and whose turn it is.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameSession {
    board: RevealState,
    scores: ScoreBoard,
    active_player: usize,
    remaining_pairs: CellCount,
    state: TurnState,
}

impl GameSession {
    pub fn new(solution: Solution, scores: ScoreBoard) -> Self {
        let remaining_pairs = solution.pair_count();
        log::debug!(
            "New {} game for {} players",
            solution.size(),
            scores.len()
        );
        Self {
            board: RevealState::new(solution),
            scores,
            active_player: 0,
            remaining_pairs,
            state: Default::default(),
        }
    }

    /// Generates a fresh board and seats `names` in turn order.
    pub fn generate<G, I, S>(
        generator: G,
        size: BoardSize,
        pool: &mut SymbolPool,
        names: I,
    ) -> Result<Self>
    where
        G: BoardGenerator,
        I: IntoIterator<Item = S>,
        S: Into<alloc::string::String>,
    {
        let scores = ScoreBoard::new(names)?;
        let solution = generator.generate(size, pool)?;
        Ok(Self::new(solution, scores))
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn size(&self) -> BoardSize {
        self.board.size()
    }

    pub fn board(&self) -> &RevealState {
        &self.board
    }

    pub fn cell_at(&self, coords: Coord2) -> CellState {
        self.board.cell_at(coords)
    }

    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    pub fn players(&self) -> &[Player] {
        self.scores.players()
    }

    pub fn active_index(&self) -> usize {
        self.active_player
    }

    pub fn active_player(&self) -> &Player {
        &self.scores.players()[self.active_player]
    }

    pub fn remaining_pairs(&self) -> CellCount {
        self.remaining_pairs
    }

    /// Checks a guess for the current slot without changing anything.
    pub fn validate_guess(&self, coords: Coord2) -> Result<Coord2> {
        self.state_after_guess(coords)?;
        self.board.check_guessable(coords)
    }

    /// Turns a hidden card face up for the current guess slot.
    ///
    /// Out-of-range and already-revealed cells are rejected with a recoverable error and leave the
    /// session untouched, so the same slot can simply be guessed again.
    pub fn guess(&mut self, coords: Coord2) -> Result<GuessOutcome> {
        let next_state = self.state_after_guess(coords)?;
        let coords = self.board.check_guessable(coords)?;

        self.board.mark_provisional(coords)?;
        let symbol = self.board.peek(coords)?.clone();
        self.state = next_state;

        let outcome = match next_state {
            TurnState::AwaitingSecondGuess { .. } => GuessOutcome::First(symbol),
            _ => GuessOutcome::Second(symbol),
        };
        log::debug!(
            "{} guessed {:?} ({})",
            self.active_player().name(),
            coords,
            outcome.symbol()
        );
        Ok(outcome)
    }

    /// Compares the two face-up cards, scoring a match or passing the turn on a miss.
    pub fn resolve(&mut self) -> Result<Resolution> {
        let TurnState::Resolving { first, second } = self.state else {
            self.check_not_finished()?;
            return Err(GameError::NothingToResolve);
        };

        let symbol = self.board.peek(first)?.clone();
        if symbol == *self.board.peek(second)? {
            self.board.commit_match(first, second)?;
            self.scores.record_match(self.active_player, symbol.clone());
            self.remaining_pairs -= 1;

            let game_over = self.remaining_pairs == 0;
            self.state = if game_over {
                TurnState::GameOver
            } else {
                TurnState::AwaitingFirstGuess
            };
            log::debug!(
                "{} matched {}, {} pairs left",
                self.active_player().name(),
                symbol,
                self.remaining_pairs
            );
            Ok(Resolution::Match {
                player: self.active_player,
                symbol,
                game_over,
            })
        } else {
            self.board.commit_miss(first, second)?;
            self.active_player = (self.active_player + 1) % self.scores.len();
            self.state = TurnState::AwaitingFirstGuess;
            log::debug!("Miss, turn passes to {}", self.active_player().name());
            Ok(Resolution::Miss {
                next_player: self.active_player,
            })
        }
    }

    /// Every player tied at the highest match count, available once the board is cleared.
    pub fn winners(&self) -> Result<Vec<&Player>> {
        if self.is_finished() {
            Ok(self.scores.winners())
        } else {
            Err(GameError::GameInProgress)
        }
    }

    fn state_after_guess(&self, coords: Coord2) -> Result<TurnState> {
        match self.state {
            TurnState::AwaitingFirstGuess => Ok(TurnState::AwaitingSecondGuess { first: coords }),
            TurnState::AwaitingSecondGuess { first } => Ok(TurnState::Resolving {
                first,
                second: coords,
            }),
            TurnState::Resolving { .. } => Err(GameError::PendingResolution),
            TurnState::GameOver => Err(GameError::AlreadyEnded),
        }
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A at (0,0)/(1,1), every other symbol on two cells of its own
    const ROWS: [&[&str]; 4] = [
        &["A", "B", "C", "D"],
        &["E", "A", "F", "G"],
        &["B", "C", "D", "E"],
        &["F", "G", "H", "H"],
    ];

    fn session(names: &[&str]) -> GameSession {
        let solution = Solution::from_rows(&ROWS).unwrap();
        GameSession::new(solution, ScoreBoard::new(names.iter().copied()).unwrap())
    }

    fn play(session: &mut GameSession, first: Coord2, second: Coord2) -> Resolution {
        session.guess(first).unwrap();
        session.guess(second).unwrap();
        session.resolve().unwrap()
    }

    #[test]
    fn guesses_walk_through_turn_states() {
        let mut session = session(&["alice", "bob"]);
        assert_eq!(session.state(), TurnState::AwaitingFirstGuess);

        assert_eq!(session.guess((0, 0)), Ok(GuessOutcome::First("A".into())));
        assert_eq!(
            session.state(),
            TurnState::AwaitingSecondGuess { first: (0, 0) }
        );
        assert_eq!(session.cell_at((0, 0)), CellState::Provisional);

        assert_eq!(session.guess((0, 1)), Ok(GuessOutcome::Second("B".into())));
        assert_eq!(
            session.state(),
            TurnState::Resolving {
                first: (0, 0),
                second: (0, 1)
            }
        );
    }

    #[test]
    fn match_scores_and_keeps_turn() {
        let mut session = session(&["alice", "bob"]);

        let resolution = play(&mut session, (0, 0), (1, 1));

        assert_eq!(
            resolution,
            Resolution::Match {
                player: 0,
                symbol: "A".into(),
                game_over: false
            }
        );
        assert_eq!(session.players()[0].matches(), 1);
        assert_eq!(session.players()[0].found(), &[Symbol::from("A")]);
        assert_eq!(session.players()[1].matches(), 0);
        assert_eq!(session.active_index(), 0);
        assert_eq!(session.remaining_pairs(), 7);
        assert_eq!(session.cell_at((1, 1)), CellState::Revealed);
    }

    #[test]
    fn miss_passes_turn_without_scoring() {
        let mut session = session(&["alice", "bob"]);

        let resolution = play(&mut session, (0, 0), (0, 1));

        assert_eq!(resolution, Resolution::Miss { next_player: 1 });
        assert!(session.players().iter().all(|player| player.matches() == 0));
        assert_eq!(session.cell_at((0, 0)), CellState::Hidden);
        assert_eq!(session.cell_at((0, 1)), CellState::Hidden);
        assert_eq!(session.state(), TurnState::AwaitingFirstGuess);
    }

    #[test]
    fn turn_rotation_wraps_around() {
        let mut session = session(&["alice", "bob", "carol"]);

        for expected in [1, 2, 0, 1] {
            assert_eq!(
                play(&mut session, (0, 0), (0, 1)),
                Resolution::Miss {
                    next_player: expected
                }
            );
        }
    }

    #[test]
    fn revealed_cell_guess_is_rejected_without_change() {
        let mut session = session(&["alice", "bob"]);
        play(&mut session, (0, 0), (1, 1));
        let before = session.clone();

        assert_eq!(session.guess((1, 1)), Err(GameError::AlreadyRevealed));
        assert_eq!(session, before);

        session.guess((0, 1)).unwrap();
        let before = session.clone();

        assert_eq!(session.guess((0, 1)), Err(GameError::AlreadyRevealed));
        assert_eq!(session.guess((4, 0)), Err(GameError::InvalidCoords));
        assert_eq!(session, before);
    }

    #[test]
    fn cannot_guess_while_pair_is_pending() {
        let mut session = session(&["alice"]);
        session.guess((0, 0)).unwrap();
        session.guess((0, 1)).unwrap();

        assert_eq!(session.guess((0, 2)), Err(GameError::PendingResolution));
        assert_eq!(
            session.guess((0, 2)).unwrap_err().kind(),
            ErrorKind::Invariant
        );
    }

    #[test]
    fn rejected_pending_guess_leaves_board_alone() {
        let mut session = session(&["alice", "bob"]);
        session.guess((0, 0)).unwrap();
        session.guess((0, 1)).unwrap();
        let before = session.clone();

        assert_eq!(session.validate_guess((0, 2)), Err(GameError::PendingResolution));
        assert_eq!(session.guess((0, 2)), Err(GameError::PendingResolution));
        assert_eq!(session.cell_at((0, 2)), CellState::Hidden);
        assert_eq!(session, before);
    }

    #[test]
    fn resolve_needs_two_guesses() {
        let mut session = session(&["alice"]);
        assert_eq!(session.resolve(), Err(GameError::NothingToResolve));

        session.guess((0, 0)).unwrap();
        assert_eq!(session.resolve(), Err(GameError::NothingToResolve));
    }

    #[test]
    fn clearing_the_board_ends_the_game() {
        let mut session = session(&["alice", "bob"]);
        let pairs = session.board().solution().pairs();
        assert_eq!(session.winners(), Err(GameError::GameInProgress));

        // alice misses, bob clears half and misses, alice clears the rest
        play(&mut session, (0, 0), (0, 1));
        for &(first, second) in &pairs[..4] {
            play(&mut session, first, second);
        }
        play(&mut session, (3, 2), (3, 0));
        let mut last = None;
        for &(first, second) in &pairs[4..] {
            last = Some(play(&mut session, first, second));
        }

        assert_eq!(
            last,
            Some(Resolution::Match {
                player: 0,
                symbol: "H".into(),
                game_over: true
            })
        );
        assert!(session.is_finished());
        assert!(session.board().is_solved());
        assert_eq!(session.remaining_pairs(), 0);
        assert_eq!(session.players()[0].matches(), 4);
        assert_eq!(session.players()[1].matches(), 4);

        let winners = session.winners().unwrap();
        assert_eq!(winners.len(), 2);
        assert_eq!(winners[1].found().len(), 4);
    }

    #[test]
    fn finished_game_rejects_moves() {
        let mut session = session(&["alice"]);
        let pairs = session.board().solution().pairs();
        for (first, second) in pairs {
            play(&mut session, first, second);
        }

        assert_eq!(session.guess((0, 0)), Err(GameError::AlreadyEnded));
        assert_eq!(session.resolve(), Err(GameError::AlreadyEnded));
        assert_eq!(session.winners().unwrap()[0].matches(), 8);
    }
}
