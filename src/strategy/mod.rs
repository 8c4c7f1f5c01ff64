//! Move selection for the computer-controlled side.
//!
//! Strategies are trait-based so the driving loop can swap the opponent
//! it fields: [`OptimalStrategy`] plays the closed-form forcing rule,
//! [`RandomStrategy`] is a uniform baseline. Both draw any randomness
//! from an injected [`GameRng`](crate::core::GameRng).

pub mod policy;

pub use policy::{compute_move, is_losing_position, OptimalStrategy, RandomStrategy, Strategy};
