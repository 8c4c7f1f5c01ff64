//! Core engine types: players, configuration, match state, RNG.
//!
//! This module contains the building blocks the driving loop works with.
//! Presentation concerns (names, colors, rendering) never appear here.

pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use config::MatchConfig;
pub use player::PlayerId;
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, MatchOutcome, MoveRecord};
