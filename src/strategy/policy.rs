//! The forcing strategy and a random baseline.
//!
//! ## The forcing rule
//!
//! With takes bounded by `max_remove`, piles that are multiples of
//! `m = max_remove + 1` are the losing positions: whatever the mover
//! takes, the opponent can restore the next lower multiple of `m`. From
//! any other pile the forcing take is `remaining % m`, which puts the
//! opponent on a multiple and keeps them there for the rest of the match,
//! so the strategist is the one who makes the final move.
//!
//! On a multiple of `m` no forcing take exists; the strategy falls back
//! to a uniform random legal take from the injected RNG.
//!
//! ## Limitation
//!
//! The rule is the closed-form optimum only when `min_remove == 1`. For
//! larger minimums the forcing take may fall below `min_remove`; it is
//! then clamped to the nearest legal value, with no optimality promised.

use crate::core::{GameRng, GameState};
use crate::error::ConfigError;

/// Is `remaining` a pile from which no forcing take exists?
///
/// True iff `remaining` is a multiple of `max_remove + 1` (including an
/// empty pile).
#[must_use]
pub fn is_losing_position(remaining: u32, max_remove: u32) -> bool {
    remaining % (max_remove + 1) == 0
}

/// Compute the take for an automated mover.
///
/// Returns the forcing take `remaining % (max_remove + 1)` when one
/// exists, clamped into `[min_remove, min(max_remove, remaining)]`;
/// otherwise a uniform random legal take drawn from `rng`.
///
/// Fails with a [`ConfigError`] on an empty pile, zero bounds, or
/// inverted bounds. Never called for human turns.
pub fn compute_move(
    remaining: u32,
    min_remove: u32,
    max_remove: u32,
    rng: &mut GameRng,
) -> Result<u32, ConfigError> {
    if remaining == 0 {
        return Err(ConfigError::EmptyPile);
    }
    if min_remove == 0 || max_remove == 0 {
        return Err(ConfigError::ZeroBound);
    }
    if min_remove > max_remove {
        return Err(ConfigError::InvertedBounds {
            min: min_remove,
            max: max_remove,
        });
    }

    let modulus = max_remove + 1;
    let forced = remaining % modulus;

    let take = if forced != 0 {
        forced
    } else {
        // Already on a losing multiple: no forcing take, pick any legal one.
        let ceiling = max_remove.min(remaining);
        if ceiling < min_remove {
            min_remove
        } else {
            rng.gen_range_inclusive(min_remove..=ceiling)
        }
    };

    // With min_remove == 1 the forcing take is always legal; for larger
    // minimums clamp to the nearest legal value.
    Ok(take.min(max_remove).min(remaining).max(min_remove))
}

/// A move selection policy for one side of a match.
pub trait Strategy {
    /// Choose a take for the active player.
    fn choose(&self, state: &GameState, rng: &mut GameRng) -> Result<u32, ConfigError>;

    /// Short display name for the driving loop.
    fn name(&self) -> &'static str;
}

/// Plays the forcing take whenever one exists.
#[derive(Clone, Copy, Debug, Default)]
pub struct OptimalStrategy;

impl Strategy for OptimalStrategy {
    fn choose(&self, state: &GameState, rng: &mut GameRng) -> Result<u32, ConfigError> {
        let config = state.config();
        compute_move(
            state.remaining(),
            config.min_remove(),
            config.max_remove(),
            rng,
        )
    }

    fn name(&self) -> &'static str {
        "Optimal"
    }
}

/// Selects uniformly at random from the legal takes.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn choose(&self, state: &GameState, rng: &mut GameRng) -> Result<u32, ConfigError> {
        if state.is_terminal() {
            return Err(ConfigError::EmptyPile);
        }

        let config = state.config();
        let ceiling = config.max_remove().min(state.remaining());
        if ceiling < config.min_remove() {
            return Ok(config.min_remove());
        }
        Ok(rng.gen_range_inclusive(config.min_remove()..=ceiling))
    }

    fn name(&self) -> &'static str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MatchConfig, PlayerId};

    #[test]
    fn test_forcing_takes() {
        let mut rng = GameRng::new(42);

        assert_eq!(compute_move(21, 1, 4, &mut rng), Ok(1));
        assert_eq!(compute_move(17, 1, 4, &mut rng), Ok(2));
        assert_eq!(compute_move(7, 1, 4, &mut rng), Ok(2));
        assert_eq!(compute_move(3, 1, 4, &mut rng), Ok(3));
        assert_eq!(compute_move(9, 1, 4, &mut rng), Ok(4));
    }

    #[test]
    fn test_forcing_take_restores_multiple() {
        let mut rng = GameRng::new(0);

        for remaining in 1..=200u32 {
            if is_losing_position(remaining, 4) {
                continue;
            }
            let take = compute_move(remaining, 1, 4, &mut rng).unwrap();
            assert_eq!((remaining - take) % 5, 0, "from {}", remaining);
        }
    }

    #[test]
    fn test_fallback_is_legal() {
        let mut rng = GameRng::new(7);

        // 20 is a multiple of 5: any take in 1..=4 is acceptable.
        for _ in 0..100 {
            let take = compute_move(20, 1, 4, &mut rng).unwrap();
            assert!((1..=4).contains(&take));
        }

        // Other bounds shift the losing modulus.
        for _ in 0..100 {
            let take = compute_move(8, 1, 7, &mut rng).unwrap();
            assert!((1..=7).contains(&take));
        }
    }

    #[test]
    fn test_fallback_is_deterministic_per_seed() {
        let mut rng1 = GameRng::new(99);
        let mut rng2 = GameRng::new(99);

        for _ in 0..50 {
            assert_eq!(
                compute_move(20, 1, 4, &mut rng1),
                compute_move(20, 1, 4, &mut rng2)
            );
        }
    }

    #[test]
    fn test_clamp_for_nonunit_minimum() {
        let mut rng = GameRng::new(1);

        // 6 % 5 == 1 but the minimum take is 2.
        assert_eq!(compute_move(6, 2, 4, &mut rng), Ok(2));
        // 11 % 5 == 1 with minimum 3.
        assert_eq!(compute_move(11, 3, 4, &mut rng), Ok(3));
    }

    #[test]
    fn test_errors() {
        let mut rng = GameRng::new(0);

        assert_eq!(compute_move(0, 1, 4, &mut rng), Err(ConfigError::EmptyPile));
        assert_eq!(compute_move(10, 0, 4, &mut rng), Err(ConfigError::ZeroBound));
        assert_eq!(compute_move(10, 1, 0, &mut rng), Err(ConfigError::ZeroBound));
        assert_eq!(
            compute_move(10, 5, 2, &mut rng),
            Err(ConfigError::InvertedBounds { min: 5, max: 2 })
        );
    }

    #[test]
    fn test_losing_positions() {
        for pile in [0u32, 5, 10, 15, 20, 100] {
            assert!(is_losing_position(pile, 4), "{} should be losing", pile);
        }
        for pile in [1u32, 2, 4, 6, 21, 99] {
            assert!(!is_losing_position(pile, 4), "{} should not be losing", pile);
        }

        // Modulus follows the bound.
        assert!(is_losing_position(9, 2));
        assert!(!is_losing_position(9, 4));
    }

    #[test]
    fn test_optimal_strategy_on_state() {
        let state = GameState::new(
            MatchConfig::default(),
            [PlayerId::new(0), PlayerId::new(1)],
            PlayerId::new(0),
        )
        .unwrap();
        let mut rng = GameRng::new(3);

        let strategy = OptimalStrategy;
        assert_eq!(strategy.choose(&state, &mut rng), Ok(1));
        assert_eq!(strategy.name(), "Optimal");
    }

    #[test]
    fn test_random_strategy_stays_legal() {
        let config = MatchConfig::new(3, 1, 4).unwrap();
        let state = GameState::new(
            config,
            [PlayerId::new(0), PlayerId::new(1)],
            PlayerId::new(0),
        )
        .unwrap();
        let mut rng = GameRng::new(11);

        let strategy = RandomStrategy;
        for _ in 0..100 {
            let take = strategy.choose(&state, &mut rng).unwrap();
            assert!(state.is_legal_move(take));
        }
        assert_eq!(strategy.name(), "Random");
    }

    #[test]
    fn test_strategies_reject_finished_match() {
        let config = MatchConfig::new(1, 1, 4).unwrap();
        let mut state = GameState::new(
            config,
            [PlayerId::new(0), PlayerId::new(1)],
            PlayerId::new(0),
        )
        .unwrap();
        state.apply_move_mut(1).unwrap();

        let mut rng = GameRng::new(0);
        assert_eq!(
            OptimalStrategy.choose(&state, &mut rng),
            Err(ConfigError::EmptyPile)
        );
        assert_eq!(
            RandomStrategy.choose(&state, &mut rng),
            Err(ConfigError::EmptyPile)
        );
    }
}
