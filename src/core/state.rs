//! Match state: pile depletion, turn alternation, termination.
//!
//! ## State machine
//!
//! Two states: in progress (`remaining > 0`) and finished
//! (`remaining == 0`). The single transition is a move application, which
//! either keeps the match in progress or finishes it. A finished match
//! accepts no further moves.
//!
//! ## Atomicity
//!
//! A rejected move leaves the state untouched; a successful one decrements
//! the pile by exactly the take, records it in the history, and flips the
//! active player.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::MatchConfig;
use super::player::PlayerId;
use crate::error::{ConfigError, MoveError};

/// One applied move, kept for replay and display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Who moved.
    pub player: PlayerId,
    /// Tokens removed.
    pub taken: u32,
    /// Pile size after the move.
    pub remaining_after: u32,
    /// Turn number the move was made on (starts at 1).
    pub turn: u32,
}

/// Result of a finished match.
///
/// The loser is the player who removed the last token; the winner is the
/// other configured player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub winner: PlayerId,
    pub loser: PlayerId,
}

/// Complete state of one match.
///
/// ## Example
///
/// ```
/// use rust_nim::core::{GameState, MatchConfig, PlayerId};
///
/// let (alice, bob) = (PlayerId::new(0), PlayerId::new(1));
/// let mut state = GameState::new(MatchConfig::default(), [alice, bob], alice).unwrap();
///
/// state.apply_move_mut(4).unwrap();
/// assert_eq!(state.remaining(), 17);
/// assert_eq!(state.active_player(), bob);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    config: MatchConfig,
    players: [PlayerId; 2],
    remaining: u32,
    active_player: PlayerId,
    /// Who made the most recent move. `active_player` flips on every
    /// applied move, so the loser of a finished match is found here.
    last_mover: Option<PlayerId>,
    turn_number: u32,
    history: Vector<MoveRecord>,
}

impl GameState {
    /// Create the initial state of a match.
    ///
    /// `starting` must be one of the two (distinct) `players`.
    pub fn new(
        config: MatchConfig,
        players: [PlayerId; 2],
        starting: PlayerId,
    ) -> Result<Self, ConfigError> {
        if players[0] == players[1] {
            return Err(ConfigError::IdenticalPlayers(players[0]));
        }
        if !players.contains(&starting) {
            return Err(ConfigError::UnknownStartingPlayer(starting));
        }

        Ok(Self {
            remaining: config.initial_pile(),
            config,
            players,
            active_player: starting,
            last_mover: None,
            turn_number: 1,
            history: Vector::new(),
        })
    }

    /// The immutable configuration of this match.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Tokens left in the pile.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active_player
    }

    /// The other configured player.
    ///
    /// Only defined for the two players of this match.
    #[must_use]
    pub fn opponent_of(&self, player: PlayerId) -> PlayerId {
        if player == self.players[0] {
            self.players[1]
        } else {
            self.players[0]
        }
    }

    /// Turn number, starting at 1 and advancing per applied move.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Moves applied so far, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &MoveRecord> {
        self.history.iter()
    }

    /// Is `take` legal for the active player right now?
    #[must_use]
    pub fn is_legal_move(&self, take: u32) -> bool {
        !self.is_terminal() && self.config.is_legal(self.remaining, take)
    }

    /// Check a take, reporting why it is illegal.
    pub fn check_move(&self, take: u32) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::MatchOver);
        }
        self.config.check(self.remaining, take)
    }

    /// The takes legal for the active player right now.
    #[must_use]
    pub fn legal_moves(&self) -> std::ops::RangeInclusive<u32> {
        self.config.legal_moves(self.remaining)
    }

    /// Apply a move in place.
    ///
    /// On success the pile shrinks by exactly `take`, the move is recorded,
    /// and the turn passes to the other player. On failure the state is
    /// untouched.
    pub fn apply_move_mut(&mut self, take: u32) -> Result<(), MoveError> {
        self.check_move(take)?;

        let mover = self.active_player;
        self.remaining -= take;
        self.history.push_back(MoveRecord {
            player: mover,
            taken: take,
            remaining_after: self.remaining,
            turn: self.turn_number,
        });
        self.last_mover = Some(mover);
        self.turn_number += 1;
        self.active_player = self.opponent_of(mover);

        Ok(())
    }

    /// Apply a move and return the successor state, leaving `self` as is.
    ///
    /// The history is a persistent vector, so this is cheap.
    pub fn apply_move(&self, take: u32) -> Result<GameState, MoveError> {
        let mut next = self.clone();
        next.apply_move_mut(take)?;
        Ok(next)
    }

    /// Is the match over? True iff the pile is empty.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.remaining == 0
    }

    /// The player who removed the last token, once the match is over.
    #[must_use]
    pub fn loser(&self) -> Option<PlayerId> {
        if self.is_terminal() {
            self.last_mover
        } else {
            None
        }
    }

    /// The player who did not remove the last token, once the match is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.loser().map(|loser| self.opponent_of(loser))
    }

    /// Winner and loser together, once the match is over.
    #[must_use]
    pub fn outcome(&self) -> Option<MatchOutcome> {
        let loser = self.loser()?;
        Some(MatchOutcome {
            winner: self.opponent_of(loser),
            loser,
        })
    }
}
