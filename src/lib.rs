//! # rust-nim
//!
//! A single-pile Nim engine: two players alternately remove a bounded
//! number of tokens from a shared pile, and whoever removes the last
//! token loses.
//!
//! ## Design Principles
//!
//! 1. **Configuration Over Convention**: Pile size and removal bounds are
//!    supplied at match start via [`MatchConfig`], not baked in as
//!    constants. One parametric engine replaces per-variant copies.
//!
//! 2. **Pure Core**: The engine accepts already-parsed integers and
//!    returns values, booleans, and errors. Prompting, rendering, and
//!    retry loops belong to the driving loop, never to the engine.
//!
//! 3. **Injected Randomness**: The strategy's fallback branch draws from
//!    a caller-supplied [`GameRng`], so every decision is reproducible
//!    from a seed.
//!
//! ## Architecture
//!
//! A match is a strict alternation of turns. The driving loop asks
//! [`GameState`] for the pile and active player, obtains a take from a
//! human collaborator or a [`Strategy`], submits it through
//! [`GameState::apply_move_mut`], and stops once
//! [`GameState::is_terminal`] reports the pile is empty.
//!
//! ## Modules
//!
//! - `core`: Players, configuration, match state, RNG
//! - `strategy`: The forcing strategy and a random baseline
//! - `error`: Error taxonomy shared by configuration and play

pub mod core;
pub mod error;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{
    GameRng, GameRngState,
    GameState, MatchConfig, MatchOutcome, MoveRecord,
    PlayerId,
};

pub use crate::error::{ConfigError, MoveError};

pub use crate::strategy::{
    compute_move, is_losing_position,
    OptimalStrategy, RandomStrategy, Strategy,
};
